// Fan of translucent triangles joining a ring of eight neighbours to an apex.
//
// Ring indices follow the neighbour order used by the grid lookup:
//
//   0 1 2
//   3 . 4
//   5 6 7

use crate::color::Color;
use vecmath::Vector2;

pub const RING_SIZE: usize = 8;

pub const POLYGON_WIRING: [(usize, usize); RING_SIZE] = [
    (0, 1),
    (1, 2),
    (0, 3),
    (2, 4),
    (3, 5),
    (5, 6),
    (4, 7),
    (6, 7),
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [Vector2<f64>; 3],
    pub fill: Color,
}

// Anything other than a full ring produces no triangles
pub fn polygons_around(
    ring: &[Vector2<f64>],
    apex: Vector2<f64>,
    fills: &[Color; RING_SIZE],
) -> Vec<Triangle> {
    if ring.len() != RING_SIZE {
        return Vec::new();
    }
    POLYGON_WIRING
        .iter()
        .zip(fills.iter())
        .map(|(&(a, b), &fill)| Triangle {
            vertices: [ring[a], ring[b], apex],
            fill,
        })
        .collect()
}
