// Field of floating particles. Owns the particle array and replaces it
// wholesale on every accepted tick; `generation` moves on whenever anything
// the renderer reads has changed.

use crate::clock::FrameLimiter;
use crate::color::{FPS_TEXT, PARTICLE_POLYGON_FILLS};
use crate::config::ParticleConfig;
use crate::logging::Timer;
use crate::overlay::{polygons_around, Triangle, RING_SIZE};
use crate::particle::{spawn_particles, step_particles, MovingPoint};
use crate::pointer::Pointer;
use crate::renderer::{draw_point, draw_polygons, Surface};
use rand::rngs::StdRng;
use vecmath::Vector2;
use wasm_bindgen::JsValue;

pub const FPS_FONT: &str = "16px Arial";
pub const FPS_POSITION: Vector2<f64> = [10.0, 26.0];

pub struct ParticleScene {
    particles: Vec<MovingPoint>,
    bounds: Vector2<f64>,
    pointer: Pointer,
    limiter: FrameLimiter,
    generation: u64,
    rng: StdRng,
}

impl ParticleScene {
    pub fn new(
        width: f64,
        height: f64,
        config: &ParticleConfig,
        now: f64,
        mut rng: StdRng,
    ) -> Self {
        let origin = [config.spawn_x, config.spawn_y];
        let particles = spawn_particles(config.count, origin, &mut rng);
        log!("particle scene: {} particles in {}x{}", particles.len(), width, height);
        ParticleScene {
            particles,
            bounds: [width, height],
            pointer: Pointer::default(),
            limiter: FrameLimiter::new(now, config.min_frame_ms),
            generation: 0,
            rng,
        }
    }

    pub fn particles(&self) -> &[MovingPoint] {
        &self.particles
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn fps(&self) -> u32 {
        self.limiter.fps()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if self.bounds != [width, height] {
            self.bounds = [width, height];
            self.generation += 1;
        }
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer.move_to(x, y);
        self.generation += 1;
    }

    pub fn set_pointer_down(&mut self, is_down: bool) {
        self.pointer.set_down(is_down);
        self.generation += 1;
    }

    // Returns false when the tick came too soon after the last accepted one
    pub fn update(&mut self, now: f64) -> bool {
        if !self.limiter.accept(now) {
            return false;
        }
        let _timer = Timer::new("ParticleScene::update");
        self.particles =
            step_particles(&self.particles, self.bounds, &self.pointer, &mut self.rng);
        self.generation += 1;
        true
    }

    // The first eight particles form the ring; the apex is the pointer while
    // the button is held, otherwise the ninth particle.
    pub fn overlay(&self) -> Vec<Triangle> {
        if self.particles.len() <= RING_SIZE {
            return Vec::new();
        }
        let ring: Vec<Vector2<f64>> = self.particles[..RING_SIZE]
            .iter()
            .map(MovingPoint::pos)
            .collect();
        let apex = if self.pointer.is_down {
            self.pointer.pos
        } else {
            self.particles[RING_SIZE].pos()
        };
        polygons_around(&ring, apex, &PARTICLE_POLYGON_FILLS)
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &S) -> Result<(), JsValue> {
        let _timer = Timer::new("ParticleScene::render");
        surface.clear(self.bounds[0], self.bounds[1]);
        surface.fill_text(&format!("{} FPS", self.fps()), FPS_POSITION, FPS_FONT, FPS_TEXT)?;
        for particle in &self.particles {
            draw_point(surface, &particle.point)?;
        }
        draw_polygons(surface, &self.overlay());
        Ok(())
    }
}
