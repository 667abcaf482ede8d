//! Damped spring physics
//!
//! Springs are configured with the tension/friction pair familiar from mobile
//! animation toolkits and converted to a stiffness/damping oscillator with unit
//! mass. Position is solved in closed form from the elapsed time, so the result
//! does not depend on the frame rate.

use super::Step;
use std::time::Duration;

/// Displacement below which a spring may come to rest
const REST_DISPLACEMENT_THRESHOLD: f64 = 0.001;
/// Speed below which a spring may come to rest
const REST_SPEED_THRESHOLD: f64 = 0.001;
/// Oscillator mass
const MASS: f64 = 1.0;

/// Tension used when a configuration only names a friction
pub const DEFAULT_TENSION: f64 = 40.0;

/// Spring parameters in tension/friction form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Pull toward the target; higher is snappier
    pub tension: f64,
    /// Resistance; higher settles with less oscillation
    pub friction: f64,
}

impl SpringConfig {
    /// Spring with the default tension and the given friction
    pub const fn with_friction(friction: f64) -> Self {
        Self {
            tension: DEFAULT_TENSION,
            friction,
        }
    }

    /// Oscillator stiffness derived from tension
    pub fn stiffness(&self) -> f64 {
        (self.tension - 30.0) * 3.62 + 194.0
    }

    /// Oscillator damping derived from friction
    pub fn damping(&self) -> f64 {
        (self.friction - 8.0) * 3.0 + 25.0
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::with_friction(7.0)
    }
}

/// One running spring animation from `from` toward `to`
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    from: f64,
    to: f64,
    initial_velocity: f64,
    stiffness: f64,
    damping: f64,
    elapsed: f64,
}

impl Spring {
    /// Start a spring at `from` with zero velocity
    pub fn new(from: f64, to: f64, config: SpringConfig) -> Self {
        Self::with_velocity(from, to, 0.0, config)
    }

    /// Start a spring at `from` moving with `velocity` (units per second)
    pub fn with_velocity(from: f64, to: f64, velocity: f64, config: SpringConfig) -> Self {
        Self {
            from,
            to,
            initial_velocity: velocity,
            stiffness: config.stiffness(),
            damping: config.damping(),
            elapsed: 0.0,
        }
    }

    /// Target value
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Advance the spring by `dt`
    pub fn step(&mut self, dt: Duration) -> Step {
        self.elapsed += dt.as_secs_f64();
        let (position, velocity) = self.solve(self.elapsed);

        let at_rest = velocity.abs() <= REST_SPEED_THRESHOLD
            && (self.to - position).abs() <= REST_DISPLACEMENT_THRESHOLD;

        if at_rest || self.stiffness <= 0.0 {
            return Step {
                value: self.to,
                done: true,
            };
        }

        Step {
            value: position,
            done: false,
        }
    }

    /// Closed-form position and velocity at time `t` seconds
    fn solve(&self, t: f64) -> (f64, f64) {
        let c = self.damping;
        let k = self.stiffness;
        let v0 = -self.initial_velocity;
        let x0 = self.to - self.from;

        let zeta = c / (2.0 * (k * MASS).sqrt());
        let omega0 = (k / MASS).sqrt();

        if zeta < 1.0 {
            // Under-damped
            let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * t).exp();
            let (sin, cos) = (omega1 * t).sin_cos();
            let a = (v0 + zeta * omega0 * x0) / omega1;

            let position = self.to - envelope * (a * sin + x0 * cos);
            let velocity = zeta * omega0 * envelope * (sin * a + x0 * cos)
                - envelope * (cos * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin);
            (position, velocity)
        } else {
            // Critically damped; over-damped springs use the same form
            let envelope = (-omega0 * t).exp();
            let position = self.to - envelope * (x0 + (v0 + omega0 * x0) * t);
            let velocity = envelope * (v0 * (t * omega0 - 1.0) + t * x0 * omega0 * omega0);
            (position, velocity)
        }
    }
}
