// Wall-clock helpers for the scenes: a frame limiter that also measures FPS,
// and cadences that decide when the grid's periodic intents are due.
// All times are milliseconds as handed in by the host (Date.now / performance.now).

use crate::geometry::round_half_up;
use rand::Rng;

pub const MIN_FRAME_MS: f64 = 16.0;

pub fn fps(delta_ms: f64) -> u32 {
    round_half_up(1000.0 / delta_ms) as u32
}

pub struct FrameLimiter {
    last: f64,
    min_delta: f64,
    fps: u32,
}

impl FrameLimiter {
    pub fn new(start: f64, min_delta: f64) -> Self {
        FrameLimiter {
            last: start,
            min_delta,
            fps: 0,
        }
    }

    // Accepts a tick only once strictly more than `min_delta` has passed
    pub fn accept(&mut self, now: f64) -> bool {
        let delta = now - self.last;
        if delta > self.min_delta {
            self.fps = fps(delta);
            self.last = now;
            true
        } else {
            false
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Interval {
    Fixed(f64),
    // Uniform in [0, max), drawn again every time the cadence fires
    Random { max: f64 },
}

impl Interval {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Interval::Fixed(period) => period,
            Interval::Random { max } => rng.gen::<f64>() * max,
        }
    }
}

pub struct Cadence {
    interval: Interval,
    next_at: f64,
}

impl Cadence {
    pub fn new<R: Rng + ?Sized>(interval: Interval, start: f64, rng: &mut R) -> Self {
        Cadence {
            interval,
            next_at: start + interval.sample(rng),
        }
    }

    // Fires at most once per poll; a stalled host does not get a burst of catch-up firings
    pub fn poll<R: Rng + ?Sized>(&mut self, now: f64, rng: &mut R) -> bool {
        if now >= self.next_at {
            self.next_at = now + self.interval.sample(rng);
            true
        } else {
            false
        }
    }

    pub fn next_at(&self) -> f64 {
        self.next_at
    }
}
