// Jittering point grid. Rows are `spacing` apart and every odd row is shifted
// right by half a spacing, giving a brick-like triangular tessellation.

use crate::color::HIGHLIGHT;
use crate::geometry::{round_half_up, Point};
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

pub struct Grid {
    rows: Vec<Vec<Point>>,
    spacing: f64,
}

impl Grid {
    pub const SPACING: f64 = 100.0;

    pub const MIN_SPACING: f64 = 1.0;

    // Spacings that would stall or explode the row/column walks fall back to SPACING
    pub fn usable_spacing(spacing: f64) -> f64 {
        if spacing.is_finite() && spacing >= Grid::MIN_SPACING {
            spacing
        } else {
            Grid::SPACING
        }
    }

    pub fn new(width: f64, height: f64, spacing: f64) -> Grid {
        let spacing = Grid::usable_spacing(spacing);
        let width = if width.is_finite() { width } else { 0.0 };
        let height = if height.is_finite() { height } else { 0.0 };
        let mut rows = Vec::new();
        let mut y = 0.0;
        while y < height {
            let offset = if rows.len() % 2 == 1 { spacing / 2.0 } else { 0.0 };
            let mut row = Vec::new();
            let mut x = 0.0;
            while x < width {
                row.push(Point::new(x + offset, y));
                x += spacing;
            }
            rows.push(row);
            y += spacing;
        }
        Grid { rows, spacing }
    }

    pub fn rows(&self) -> &[Vec<Point>] {
        &self.rows
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.rows.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn point(&self, cell: Cell) -> Option<&Point> {
        self.rows.get(cell.row).and_then(|row| row.get(cell.col))
    }

    // Independent nudge of up to `amount / 2` on each axis of every point
    pub fn jitter<R: Rng + ?Sized>(&mut self, amount: f64, rng: &mut R) {
        for p in self.rows.iter_mut().flatten() {
            p.x += (rng.gen::<f64>() - 0.5) * amount;
            p.y += (rng.gen::<f64>() - 0.5) * amount;
        }
    }

    // Cell index for a screen position; may name a cell that does not exist
    pub fn nearest_cell(&self, pos: Vector2<f64>) -> Option<Cell> {
        let col = round_half_up(pos[0] / self.spacing);
        let row = round_half_up(pos[1] / self.spacing);
        if !col.is_finite() || !row.is_finite() || col < 0.0 || row < 0.0 {
            return None;
        }
        Some(Cell {
            row: row as usize,
            col: col as usize,
        })
    }

    // Up to eight surrounding points, row by row from top-left; missing ones are skipped
    pub fn neighbours(&self, cell: Cell) -> Vec<Vector2<f64>> {
        let mut found = Vec::with_capacity(8);
        let rows = [cell.row.checked_sub(1), Some(cell.row), cell.row.checked_add(1)];
        for (i, row) in rows.iter().enumerate() {
            let row = match row.and_then(|r| self.rows.get(r)) {
                Some(row) => row,
                None => continue,
            };
            let cols = [cell.col.checked_sub(1), Some(cell.col), cell.col.checked_add(1)];
            for (j, col) in cols.iter().enumerate() {
                if i == 1 && j == 1 {
                    continue;
                }
                if let Some(p) = col.and_then(|c| row.get(c)) {
                    found.push(p.pos());
                }
            }
        }
        found
    }

    // Clears any previous tint and tints `cell`, if it exists
    pub fn highlight(&mut self, cell: Option<Cell>) -> bool {
        for p in self.rows.iter_mut().flatten() {
            p.color = None;
        }
        match cell.and_then(|c| self.rows.get_mut(c.row).and_then(|row| row.get_mut(c.col))) {
            Some(p) => {
                p.color = Some(HIGHLIGHT);
                true
            }
            None => false,
        }
    }

    pub fn highlighted(&self) -> Option<Cell> {
        self.rows.iter().enumerate().find_map(|(row, points)| {
            points
                .iter()
                .position(|p| p.color.is_some())
                .map(|col| Cell { row, col })
        })
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        if self.rows.is_empty() {
            return None;
        }
        let row = rng.gen_range(0, self.rows.len());
        let len = self.rows[row].len();
        if len == 0 {
            return None;
        }
        Some(Cell {
            row,
            col: rng.gen_range(0, len),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn grid() -> Grid {
        Grid::new(1000.0, 800.0, Grid::SPACING)
    }

    #[test]
    fn builds_offset_rows() {
        let g = grid();
        assert_eq!(g.rows().len(), 8);
        assert!(g.rows().iter().all(|row| row.len() == 10));
        assert_eq!(g.len(), 80);
        assert_eq!(g.point(Cell { row: 0, col: 3 }).unwrap().pos(), [300.0, 0.0]);
        assert_eq!(g.point(Cell { row: 1, col: 3 }).unwrap().pos(), [350.0, 100.0]);
        assert_eq!(g.point(Cell { row: 2, col: 0 }).unwrap().pos(), [0.0, 200.0]);
    }

    #[test]
    fn empty_viewport_has_no_points() {
        assert!(Grid::new(0.0, 0.0, Grid::SPACING).is_empty());
        assert!(Grid::new(500.0, 0.0, Grid::SPACING).is_empty());
    }

    #[test]
    fn nearest_cell_rounds_to_spacing() {
        let g = grid();
        assert_eq!(g.nearest_cell([449.0, 351.0]), Some(Cell { row: 4, col: 4 }));
        assert_eq!(g.nearest_cell([450.0, 349.0]), Some(Cell { row: 3, col: 5 }));
        assert_eq!(g.nearest_cell([-40.0, 10.0]), Some(Cell { row: 0, col: 0 }));
        assert_eq!(g.nearest_cell([-60.0, 10.0]), None);
    }

    #[test]
    fn nearest_cell_rejects_non_finite_positions() {
        let g = grid();
        assert_eq!(g.nearest_cell([f64::NAN, f64::NAN]), None);
        assert_eq!(g.nearest_cell([f64::NAN, 100.0]), None);
        assert_eq!(g.nearest_cell([100.0, f64::INFINITY]), None);
    }

    #[test]
    fn unusable_spacing_falls_back_to_default() {
        for &spacing in &[0.0, -1.0, 1e-9, f64::NAN, f64::INFINITY] {
            let g = Grid::new(1000.0, 800.0, spacing);
            assert_eq!(g.len(), 80);
            assert_eq!(g.point(Cell { row: 1, col: 1 }).unwrap().pos(), [150.0, 100.0]);
            assert_eq!(g.nearest_cell([449.0, 351.0]), Some(Cell { row: 4, col: 4 }));
        }
        assert_eq!(Grid::usable_spacing(25.0), 25.0);
    }

    #[test]
    fn non_finite_viewport_builds_empty_grid() {
        assert!(Grid::new(f64::INFINITY, 800.0, Grid::SPACING).rows().iter().all(Vec::is_empty));
        assert!(Grid::new(1000.0, f64::INFINITY, Grid::SPACING).is_empty());
    }

    #[test]
    fn interior_cell_has_full_ring() {
        let g = grid();
        let ring = g.neighbours(Cell { row: 3, col: 4 });
        assert_eq!(
            ring,
            vec![
                [300.0, 200.0],
                [400.0, 200.0],
                [500.0, 200.0],
                [350.0, 300.0],
                [550.0, 300.0],
                [300.0, 400.0],
                [400.0, 400.0],
                [500.0, 400.0],
            ]
        );
    }

    #[test]
    fn edge_cells_have_partial_rings() {
        let g = grid();
        assert_eq!(g.neighbours(Cell { row: 0, col: 0 }).len(), 3);
        assert_eq!(g.neighbours(Cell { row: 0, col: 5 }).len(), 5);
        assert_eq!(g.neighbours(Cell { row: 7, col: 9 }).len(), 3);
        assert_eq!(g.neighbours(Cell { row: 4, col: 9 }).len(), 5);
        assert!(g.neighbours(Cell { row: 40, col: 40 }).is_empty());
    }

    #[test]
    fn highlight_moves_rather_than_trails() {
        let mut g = grid();
        let a = Cell { row: 2, col: 2 };
        let b = Cell { row: 5, col: 6 };

        assert!(g.highlight(Some(a)));
        assert_eq!(g.highlighted(), Some(a));
        assert!(g.highlight(Some(b)));
        assert_eq!(g.point(a).unwrap().color, None);
        assert_eq!(g.point(b).unwrap().color, Some(HIGHLIGHT));
        assert_eq!(g.points().filter(|p| p.color.is_some()).count(), 1);

        assert!(!g.highlight(Some(Cell { row: 99, col: 0 })));
        assert_eq!(g.highlighted(), None);
    }

    #[test]
    fn jitter_stays_within_half_amount() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut g = grid();
        let before: Vec<_> = g.points().map(Point::pos).collect();
        g.jitter(1.0, &mut rng);
        for (old, new) in before.iter().zip(g.points()) {
            assert!((new.x - old[0]).abs() <= 0.5);
            assert!((new.y - old[1]).abs() <= 0.5);
        }
        assert!(before.iter().zip(g.points()).any(|(old, new)| new.pos() != *old));
    }

    #[test]
    fn random_cells_exist() {
        let mut rng = StdRng::seed_from_u64(12);
        let g = grid();
        for _ in 0..100 {
            let cell = g.random_cell(&mut rng).unwrap();
            assert!(g.point(cell).is_some());
        }
        assert_eq!(Grid::new(0.0, 0.0, 100.0).random_cell(&mut rng), None);
    }
}
