// Jittering grid scene.
//
// Periodic sources never touch the grid directly: each one enqueues a
// `GridIntent`, and `tick` applies the pending intents in order before
// re-deriving the overlay. Overlay lookups also move the highlighted cell, so
// rendering itself only reads state.

use crate::clock::{Cadence, Interval};
use crate::color::GRID_POLYGON_FILLS;
use crate::config::GridConfig;
use crate::geometry::Point;
use crate::grid::{Cell, Grid};
use crate::logging::Timer;
use crate::overlay::{polygons_around, Triangle};
use crate::pointer::Pointer;
use crate::renderer::{draw_point, draw_polygons, Surface};
use rand::rngs::StdRng;
use std::collections::VecDeque;
use vecmath::Vector2;
use wasm_bindgen::JsValue;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridIntent {
    Jitter,
    PushRandomPoint,
    PopRandomPoint,
}

pub struct GridScene {
    grid: Grid,
    config: GridConfig,
    bounds: Vector2<f64>,
    pointer: Pointer,
    // Grid cells rather than positions, so queued points keep jittering along
    random_points: VecDeque<Cell>,
    pending: Vec<GridIntent>,
    overlay: Vec<Triangle>,
    push_cadence: Cadence,
    pop_cadence: Cadence,
    generation: u64,
    rng: StdRng,
}

impl GridScene {
    pub fn new(width: f64, height: f64, config: &GridConfig, now: f64, mut rng: StdRng) -> Self {
        let mut config = *config;
        let spacing = Grid::usable_spacing(config.spacing);
        if spacing != config.spacing {
            log!("grid spacing {} unusable, using {}", config.spacing, spacing);
            config.spacing = spacing;
        }
        let grid = Grid::new(width, height, config.spacing);
        log!("grid scene: {} points in {}x{}", grid.len(), width, height);
        let push_cadence = Cadence::new(Interval::Fixed(config.push_interval_ms), now, &mut rng);
        let pop_cadence = Cadence::new(
            Interval::Random {
                max: config.pop_max_interval_ms,
            },
            now,
            &mut rng,
        );
        let mut scene = GridScene {
            grid,
            config,
            bounds: [width, height],
            pointer: Pointer::default(),
            random_points: VecDeque::new(),
            pending: Vec::new(),
            overlay: Vec::new(),
            push_cadence,
            pop_cadence,
            generation: 0,
            rng,
        };
        scene.refresh_overlay();
        scene
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn random_points(&self) -> &VecDeque<Cell> {
        &self.random_points
    }

    pub fn overlay(&self) -> &[Triangle] {
        &self.overlay
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if self.bounds == [width, height] {
            return;
        }
        self.bounds = [width, height];
        self.grid = Grid::new(width, height, self.config.spacing);
        log!("grid regenerated: {} points in {}x{}", self.grid.len(), width, height);
        self.refresh_overlay();
        self.generation += 1;
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
        self.refresh_overlay();
        self.generation += 1;
    }

    // Recorded for the host's benefit only; position tracking and the
    // overlay do not depend on the button.
    pub fn set_pointer_down(&mut self, is_down: bool) {
        self.pointer.set_down(is_down);
    }

    pub fn enqueue(&mut self, intent: GridIntent) {
        self.pending.push(intent);
    }

    pub fn pending(&self) -> &[GridIntent] {
        &self.pending
    }

    // Jitter is due every tick; the queue timers fire on their own cadences
    pub fn schedule(&mut self, now: f64) {
        self.enqueue(GridIntent::Jitter);
        if self.push_cadence.poll(now, &mut self.rng) {
            self.enqueue(GridIntent::PushRandomPoint);
        }
        if self.pop_cadence.poll(now, &mut self.rng) {
            self.enqueue(GridIntent::PopRandomPoint);
        }
    }

    pub fn apply_pending(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for intent in pending {
            self.apply(intent);
        }
        self.refresh_overlay();
        self.generation += 1;
    }

    pub fn tick(&mut self, now: f64) {
        let _timer = Timer::new("GridScene::tick");
        self.schedule(now);
        self.apply_pending();
    }

    fn apply(&mut self, intent: GridIntent) {
        match intent {
            GridIntent::Jitter => self.grid.jitter(self.config.jitter, &mut self.rng),
            GridIntent::PushRandomPoint => {
                if let Some(cell) = self.grid.random_cell(&mut self.rng) {
                    self.random_points.push_back(cell);
                    log!("random point queued at {:?} ({} queued)", cell, self.random_points.len());
                }
            }
            GridIntent::PopRandomPoint => {
                if let Some(cell) = self.random_points.pop_front() {
                    let queued = self.random_points.len();
                    log!("random point dropped at {:?} ({} queued)", cell, queued);
                }
            }
        }
    }

    // Pointer first, then every queued point; the last lookup keeps the highlight
    fn refresh_overlay(&mut self) {
        let mut queries = vec![self.pointer.pos];
        queries.extend(
            self.random_points
                .iter()
                .filter_map(|&cell| self.grid.point(cell).map(Point::pos)),
        );

        self.overlay.clear();
        for query in queries {
            let cell = self.grid.nearest_cell(query);
            if !self.grid.highlight(cell) {
                continue;
            }
            if let Some(cell) = cell {
                let ring = self.grid.neighbours(cell);
                self.overlay.extend(polygons_around(&ring, query, &GRID_POLYGON_FILLS));
            }
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &S) -> Result<(), JsValue> {
        let _timer = Timer::new("GridScene::render");
        if self.grid.is_empty() {
            return Ok(());
        }
        surface.clear(self.bounds[0], self.bounds[1]);
        draw_point(surface, &Point::new(self.pointer.pos[0], self.pointer.pos[1]))?;
        for p in self.grid.points() {
            draw_point(surface, p)?;
        }
        draw_polygons(surface, &self.overlay);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{HIGHLIGHT, POINT_FALLBACK};
    use crate::renderer::recording::{Call, RecordingSurface};
    use rand::SeedableRng;

    fn scene() -> GridScene {
        GridScene::new(1000.0, 800.0, &GridConfig::default(), 0.0, StdRng::seed_from_u64(17))
    }

    #[test]
    fn interior_pointer_gets_eight_triangles() {
        let mut s = scene();
        s.set_pointer(410.0, 290.0);
        assert_eq!(s.overlay().len(), 8);
        assert!(s.overlay().iter().all(|t| t.vertices[2] == [410.0, 290.0]));
        assert_eq!(s.grid().highlighted(), Some(Cell { row: 3, col: 4 }));
    }

    #[test]
    fn edge_pointer_is_unadorned() {
        let mut s = scene();
        s.set_pointer(5.0, 5.0);
        assert!(s.overlay().is_empty());
        assert_eq!(s.grid().highlighted(), Some(Cell { row: 0, col: 0 }));

        s.set_pointer(5000.0, 5000.0);
        assert!(s.overlay().is_empty());
        assert_eq!(s.grid().highlighted(), None);
    }

    #[test]
    fn highlight_follows_the_pointer() {
        let mut s = scene();
        s.set_pointer(200.0, 200.0);
        s.set_pointer(600.0, 500.0);
        let tinted: Vec<_> = s.grid().points().filter(|p| p.color == Some(HIGHLIGHT)).collect();
        assert_eq!(tinted.len(), 1);
        assert_eq!(s.grid().highlighted(), Some(Cell { row: 5, col: 6 }));
    }

    #[test]
    fn queue_grows_and_shrinks_through_intents() {
        let mut s = scene();
        s.enqueue(GridIntent::PushRandomPoint);
        s.enqueue(GridIntent::PushRandomPoint);
        s.enqueue(GridIntent::PushRandomPoint);
        s.apply_pending();
        assert_eq!(s.random_points().len(), 3);
        assert!(s.pending().is_empty());

        let second = s.random_points()[1];
        s.enqueue(GridIntent::PopRandomPoint);
        s.apply_pending();
        assert_eq!(s.random_points().len(), 2);
        assert_eq!(s.random_points()[0], second);

        s.enqueue(GridIntent::PopRandomPoint);
        s.enqueue(GridIntent::PopRandomPoint);
        s.enqueue(GridIntent::PopRandomPoint);
        s.apply_pending();
        assert!(s.random_points().is_empty());
    }

    #[test]
    fn schedule_follows_cadences() {
        let mut s = scene();
        s.schedule(0.0);
        assert_eq!(s.pending()[0], GridIntent::Jitter);
        assert!(!s.pending().contains(&GridIntent::PushRandomPoint));
        s.apply_pending();

        s.schedule(1500.0);
        assert!(s.pending().contains(&GridIntent::PushRandomPoint));
        // the pop cadence is at most 2500ms out
        s.schedule(2500.0);
        assert!(s.pending().contains(&GridIntent::PopRandomPoint));
        s.apply_pending();
    }

    #[test]
    fn tick_jitters_and_advances_generation() {
        let mut s = scene();
        let before: Vec<_> = s.grid().points().map(Point::pos).collect();
        s.tick(10.0);
        assert_eq!(s.generation(), 1);
        let moved = before
            .iter()
            .zip(s.grid().points())
            .filter(|(old, new)| new.pos() != **old)
            .count();
        assert!(moved > 0);
    }

    #[test]
    fn queued_points_add_their_own_overlay() {
        let mut s = scene();
        s.set_pointer(-500.0, -500.0);
        for _ in 0..40 {
            s.enqueue(GridIntent::PushRandomPoint);
        }
        s.apply_pending();

        let interior = s
            .random_points()
            .iter()
            .filter(|cell| {
                let p = s.grid().point(**cell).unwrap();
                s.grid().neighbours(s.grid().nearest_cell(p.pos()).unwrap()).len() == 8
            })
            .count();
        assert!(interior > 0);
        assert_eq!(s.overlay().len(), interior * 8);
    }

    #[test]
    fn resize_regenerates_grid() {
        let mut s = scene();
        assert_eq!(s.grid().len(), 80);
        s.resize(1000.0, 800.0);
        assert_eq!(s.generation(), 0);
        s.resize(300.0, 300.0);
        assert_eq!(s.grid().len(), 9);
        assert_eq!(s.generation(), 1);
    }

    #[test]
    fn unusable_spacing_is_replaced() {
        for &spacing in &[0.0, -1.0] {
            let config = GridConfig {
                spacing,
                ..GridConfig::default()
            };
            let mut s = GridScene::new(1000.0, 800.0, &config, 0.0, StdRng::seed_from_u64(3));
            assert_eq!(s.grid().len(), 80);
            s.resize(300.0, 300.0);
            assert_eq!(s.grid().len(), 9);
            s.set_pointer(110.0, 190.0);
            assert_eq!(s.grid().highlighted(), Some(Cell { row: 2, col: 1 }));
        }
    }

    #[test]
    fn stale_queue_entries_survive_a_shrink() {
        let mut s = scene();
        for _ in 0..30 {
            s.enqueue(GridIntent::PushRandomPoint);
        }
        s.apply_pending();
        let queued: Vec<Cell> = s.random_points().iter().copied().collect();

        s.resize(250.0, 250.0);
        s.set_pointer(-500.0, -500.0);
        s.enqueue(GridIntent::Jitter);
        s.apply_pending();

        assert_eq!(s.random_points().len(), 30);
        assert_eq!(s.random_points().iter().copied().collect::<Vec<_>>(), queued);
        // a 3x3 grid has no cell with a full ring
        assert!(s.overlay().is_empty());
        if let Some(cell) = s.grid().highlighted() {
            assert!(s.grid().point(cell).is_some());
            assert!(queued.iter().any(|q| s.grid().point(*q).is_some()));
        }
    }

    #[test]
    fn nan_pointer_highlights_nothing() {
        let mut s = scene();
        s.set_pointer(410.0, 290.0);
        s.set_pointer(f64::NAN, f64::NAN);
        assert_eq!(s.grid().highlighted(), None);
        assert!(s.overlay().is_empty());
    }

    #[test]
    fn render_draws_pointer_grid_then_overlay() {
        let mut s = scene();
        s.set_pointer(410.0, 290.0);
        let surface = RecordingSurface::default();
        s.render(&surface).unwrap();

        let calls = surface.calls.borrow();
        assert_eq!(calls[0], Call::Clear(1000.0, 800.0));
        assert_eq!(calls[1], Call::Circle([410.0, 290.0], POINT_FALLBACK));
        assert_eq!(surface.circles().len(), 81);
        assert_eq!(surface.triangles().len(), 8);
        assert!(surface.circles().contains(&([450.0, 300.0], HIGHLIGHT)));
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let s = GridScene::new(0.0, 0.0, &GridConfig::default(), 0.0, StdRng::seed_from_u64(1));
        let surface = RecordingSurface::default();
        s.render(&surface).unwrap();
        assert!(surface.calls.borrow().is_empty());
    }
}
