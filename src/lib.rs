//! Two canvas toys driven from JavaScript: a field of floating particles that
//! can be called towards the mouse, and a jittering point grid that lights up
//! the cell under the cursor along with a few randomly picked cells.
//!
//! The page owns the event wiring and the animation loop:
//!
//! ```javascript
//! import init, { initialize, ParticleCanvas } from 'rust-canvas-scenes';
//!
//! await init();
//! initialize();
//! const scene = ParticleCanvas.new(innerWidth, innerHeight);
//! addEventListener('mousemove', (e) => scene.set_pointer(e.x, e.y));
//! addEventListener('mousedown', () => scene.set_pointer_down(true));
//! addEventListener('mouseup', () => scene.set_pointer_down(false));
//!
//! let drawn = -1;
//! const frame = () => {
//!     scene.update(Date.now());
//!     if (scene.generation() !== drawn) {
//!         scene.render(ctx);
//!         drawn = scene.generation();
//!     }
//!     requestAnimationFrame(frame);
//! };
//! requestAnimationFrame(frame);
//! ```

#[macro_use]
mod logging;
mod utils;

pub mod clock;
pub mod color;
pub mod config;
pub mod geometry;
pub mod grid;
pub mod grid_scene;
pub mod overlay;
pub mod particle;
pub mod particle_scene;
pub mod pointer;
pub mod renderer;

pub use config::{GridConfig, ParticleConfig};
pub use grid_scene::{GridIntent, GridScene};
pub use particle_scene::ParticleScene;

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

#[wasm_bindgen]
pub struct ParticleCanvas {
    scene: ParticleScene,
}

#[wasm_bindgen]
impl ParticleCanvas {
    pub fn new(width: u32, height: u32) -> ParticleCanvas {
        ParticleCanvas::with_config(width, height, &ParticleConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: &ParticleConfig) -> ParticleCanvas {
        let scene = ParticleScene::new(
            width as f64,
            height as f64,
            config,
            js_sys::Date::now(),
            StdRng::from_entropy(),
        );
        ParticleCanvas { scene }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width as f64, height as f64);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.scene.set_pointer(x, y);
    }

    pub fn set_pointer_down(&mut self, is_down: bool) {
        self.scene.set_pointer_down(is_down);
    }

    pub fn update(&mut self, now: f64) -> bool {
        self.scene.update(now)
    }

    pub fn fps(&self) -> u32 {
        self.scene.fps()
    }

    pub fn generation(&self) -> f64 {
        self.scene.generation() as f64
    }

    pub fn len(&self) -> usize {
        self.scene.particles().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scene.particles().is_empty()
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        self.scene.render(ctx)
    }
}

#[wasm_bindgen]
pub struct GridCanvas {
    scene: GridScene,
}

#[wasm_bindgen]
impl GridCanvas {
    pub fn new(width: u32, height: u32) -> GridCanvas {
        GridCanvas::with_config(width, height, &GridConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: &GridConfig) -> GridCanvas {
        let scene = GridScene::new(
            width as f64,
            height as f64,
            config,
            js_sys::Date::now(),
            StdRng::from_entropy(),
        );
        GridCanvas { scene }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width as f64, height as f64);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.scene.set_pointer(x, y);
    }

    pub fn set_pointer_down(&mut self, is_down: bool) {
        self.scene.set_pointer_down(is_down);
    }

    pub fn tick(&mut self, now: f64) {
        self.scene.tick(now);
    }

    pub fn generation(&self) -> f64 {
        self.scene.generation() as f64
    }

    pub fn point_count(&self) -> usize {
        self.scene.grid().len()
    }

    pub fn random_point_count(&self) -> usize {
        self.scene.random_points().len()
    }

    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        self.scene.render(ctx)
    }
}
