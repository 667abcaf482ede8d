//! Exponential velocity decay
//!
//! Used for "thrown" motion: the value keeps the release velocity and slows
//! down by `deceleration` per millisecond until a frame moves it less than
//! [`DECAY_REST_DELTA`].

use super::Step;
use std::time::Duration;

/// Per-frame change below which a decay is considered stopped
pub const DECAY_REST_DELTA: f64 = 0.1;

/// One running decay animation
#[derive(Debug, Clone, PartialEq)]
pub struct Decay {
    from: f64,
    /// Units per millisecond
    velocity: f64,
    deceleration: f64,
    elapsed_ms: f64,
    last_value: f64,
}

impl Decay {
    /// Start decaying from `from` with `velocity` in units per millisecond
    pub fn new(from: f64, velocity: f64, deceleration: f64) -> Self {
        Self {
            from,
            velocity,
            deceleration,
            elapsed_ms: 0.0,
            last_value: from,
        }
    }

    /// Position the decay converges to
    pub fn resting_value(&self) -> f64 {
        self.from + self.velocity / (1.0 - self.deceleration)
    }

    /// Advance the decay by `dt`
    ///
    /// A zero-length step reports the current value and never finishes the
    /// decay, since no movement can be measured over it.
    pub fn step(&mut self, dt: Duration) -> Step {
        if dt.is_zero() {
            return Step {
                value: self.last_value,
                done: false,
            };
        }

        self.elapsed_ms += dt.as_secs_f64() * 1000.0;

        let k = 1.0 - self.deceleration;
        let value = self.from + (self.velocity / k) * (1.0 - (-k * self.elapsed_ms).exp());

        let done = (self.last_value - value).abs() < DECAY_REST_DELTA;
        self.last_value = value;

        Step { value, done }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    #[test]
    fn test_decay_moves_in_velocity_direction() {
        let mut decay = Decay::new(121.0, 3.0, 0.98);
        let first = decay.step(FRAME);
        assert!(first.value > 121.0);
        assert!(!first.done);

        let mut decay = Decay::new(-130.0, -4.0, 0.98);
        assert!(decay.step(FRAME).value < -130.0);
    }

    #[test]
    fn test_zero_step_does_not_finish_decay() {
        let mut decay = Decay::new(121.0, 3.0, 0.98);

        let idle = decay.step(Duration::ZERO);
        assert!(!idle.done);
        assert!((idle.value - 121.0).abs() < f64::EPSILON);

        let moved = decay.step(FRAME);
        assert!(!moved.done);
        assert!(moved.value > 121.0);
    }

    #[test]
    fn test_decay_stops_short_of_resting_value() {
        let mut decay = Decay::new(121.0, 5.0, 0.98);
        let limit = decay.resting_value();
        assert!((limit - 371.0).abs() < 1e-9);

        let mut last = decay.step(FRAME);
        let mut frames = 1;
        while !last.done {
            last = decay.step(FRAME);
            frames += 1;
            assert!(frames < 1_000, "decay never stopped");
        }
        assert!(last.value < limit);
        assert!(limit - last.value < 5.0);
    }

    #[test]
    fn test_zero_velocity_finishes_on_first_frame() {
        let mut decay = Decay::new(10.0, 0.0, 0.98);
        let step = decay.step(FRAME);
        assert!(step.done);
        assert_eq!(step.value, 10.0);
    }
}
