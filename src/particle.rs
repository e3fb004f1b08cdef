// Floating particle kinematics. Each particle ramps its speed up towards a
// randomly chosen max speed, decelerates under friction once it gets there,
// and starts a new cycle (new ramp, max speed, heading and weight) when it
// comes to rest.

use crate::color::{Color, PARTICLE_PALETTE};
use crate::geometry::{direction_towards, round_half_up, Point};
use crate::pointer::Pointer;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MovingPoint {
    pub point: Point,
    pub speed: f64,
    pub max_speed: f64,
    pub acceleration: f64,
    pub weight: f64,
    // Not normalized when picked at random, components stay within [-1, 1]
    pub direction: Vector2<f64>,
}

impl MovingPoint {
    pub const FRICTION: f64 = 0.15;
    pub const MIN_WEIGHT: f64 = 5.0;
    pub const WEIGHT_SPREAD: f64 = 5.0;
    pub const MAX_SPEED_CEILING: f64 = 5.0;

    // At rest, so the first update starts a fresh cycle
    pub fn new(x: f64, y: f64, color: Color) -> MovingPoint {
        MovingPoint {
            point: Point::with_color(x, y, color),
            speed: 0.0,
            max_speed: 0.0,
            acceleration: 0.0,
            weight: MovingPoint::MIN_WEIGHT,
            direction: [0.0, 0.0],
        }
    }

    pub fn pos(&self) -> Vector2<f64> {
        self.point.pos()
    }

    pub fn advance<R: Rng + ?Sized>(
        &self,
        bounds: Vector2<f64>,
        pointer: &Pointer,
        rng: &mut R,
    ) -> MovingPoint {
        let mut next = *self;

        if next.speed + next.acceleration < next.max_speed {
            next.speed += next.acceleration;
        } else if next.speed == next.max_speed {
            // weight is never zero once set, but a zero divisor would poison the cycle with -inf
            if next.weight > 0.0 {
                next.acceleration = -MovingPoint::FRICTION / next.weight;
            }
        } else {
            next.speed = next.max_speed;
        }

        if next.speed <= 0.0 {
            next.restart_cycle(pointer, rng);
        }

        next.point.x += next.direction[0] * next.speed;
        next.point.y += next.direction[1] * next.speed;

        // No clamping, a particle may overshoot by a step before it turns around
        if next.point.x < 0.0 || next.point.x > bounds[0] {
            next.direction[0] *= -1.0;
        }
        if next.point.y < 0.0 || next.point.y > bounds[1] {
            next.direction[1] *= -1.0;
        }
        next
    }

    fn restart_cycle<R: Rng + ?Sized>(&mut self, pointer: &Pointer, rng: &mut R) {
        self.acceleration = (rng.gen::<f64>() / 5.0).sqrt();
        self.max_speed = round_half_up(rng.gen::<f64>() * MovingPoint::MAX_SPEED_CEILING);
        self.direction = if pointer.is_down {
            direction_towards(pointer.pos, self.pos())
        } else {
            [rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5]
        };
        self.weight = MovingPoint::MIN_WEIGHT + rng.gen::<f64>() * MovingPoint::WEIGHT_SPREAD;
    }
}

pub fn spawn_particles<R: Rng + ?Sized>(
    count: usize,
    origin: Vector2<f64>,
    rng: &mut R,
) -> Vec<MovingPoint> {
    (0..count)
        .map(|_| {
            let color = PARTICLE_PALETTE[rng.gen_range(0, PARTICLE_PALETTE.len())];
            MovingPoint::new(origin[0], origin[1], color)
        })
        .collect()
}

// Next generation of the whole field, same length and order as `particles`
pub fn step_particles<R: Rng + ?Sized>(
    particles: &[MovingPoint],
    bounds: Vector2<f64>,
    pointer: &Pointer,
    rng: &mut R,
) -> Vec<MovingPoint> {
    particles
        .iter()
        .map(|particle| particle.advance(bounds, pointer, rng))
        .collect()
}
