// Screen-space points and the small bits of vector math shared by both scenes

use crate::color::Color;
use vecmath::{vec2_len, vec2_sub, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub color: Option<Color>,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y, color: None }
    }

    pub fn with_color(x: f64, y: f64, color: Color) -> Point {
        Point {
            x,
            y,
            color: Some(color),
        }
    }

    pub fn pos(&self) -> Vector2<f64> {
        [self.x, self.y]
    }
}

// Unit vector pointing from `origin` to `target`, or zero when they coincide
pub fn direction_towards(target: Vector2<f64>, origin: Vector2<f64>) -> Vector2<f64> {
    let delta = vec2_sub(target, origin);
    let distance = vec2_len(delta);
    if distance == 0.0 {
        [0.0, 0.0]
    } else {
        [delta[0] / distance, delta[1] / distance]
    }
}

// Halves always round towards +inf, so -0.5 lands on 0 rather than -1
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
