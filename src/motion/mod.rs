//! Animation primitives
//!
//! Provides the physics and value containers the card controller animates:
//! spring and decay motions, scalar and 2D animated values, and
//! piecewise-linear interpolation for deriving visual properties.
//!
//! Everything here is advanced explicitly with [`AnimatedValue::tick`] /
//! [`AnimatedXY::tick`]; nothing reads the wall clock.

pub mod animated;
pub mod decay;
pub mod interpolation;
pub mod spring;

pub use animated::{AnimatedValue, AnimatedXY, AnimationEnd};
pub use decay::Decay;
pub use interpolation::{Extrapolate, Interpolation};
pub use spring::{Spring, SpringConfig};

use std::time::Duration;

/// Result of advancing a motion by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    /// Value after the frame
    pub value: f64,
    /// Whether the motion came to rest on this frame
    pub done: bool,
}

/// A running animation driving one scalar
#[derive(Debug, Clone, PartialEq)]
pub enum Motion {
    /// Spring toward a target
    Spring(Spring),
    /// Velocity decay
    Decay(Decay),
}

impl Motion {
    /// Advance by `dt`
    pub fn step(&mut self, dt: Duration) -> Step {
        match self {
            Self::Spring(spring) => spring.step(dt),
            Self::Decay(decay) => decay.step(dt),
        }
    }
}
