// Tunables for the two scenes. Both are exported so the page can tweak a
// default config before handing it to a canvas constructor.

use crate::clock::MIN_FRAME_MS;
use crate::grid::Grid;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    /// Every particle starts out at rest on this point
    pub spawn_x: f64,
    pub spawn_y: f64,
    pub min_frame_ms: f64,
}

#[wasm_bindgen]
impl ParticleConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ParticleConfig {
        ParticleConfig::default()
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        ParticleConfig {
            count: 3500,
            spawn_x: 500.0,
            spawn_y: 500.0,
            min_frame_ms: MIN_FRAME_MS,
        }
    }
}

#[wasm_bindgen]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub spacing: f64,
    /// Total span of the per-axis nudge applied every tick
    pub jitter: f64,
    pub push_interval_ms: f64,
    /// Queue pops wait a fresh uniform [0, max) after each pop
    pub pop_max_interval_ms: f64,
}

#[wasm_bindgen]
impl GridConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> GridConfig {
        GridConfig::default()
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            spacing: Grid::SPACING,
            jitter: 1.0,
            push_interval_ms: 1500.0,
            pop_max_interval_ms: 2500.0,
        }
    }
}
