//! Configuration data models
//!
//! This module defines the data structures used for application configuration.
//! Every field has a default, so a partial `config.json` only overrides what it names.

use crate::error::{Result, StringError, SwipeCardError};
use crate::motion::SpringConfig;
use crate::motion::spring::DEFAULT_TENSION;
use crate::subjects::DEFAULT_SUBJECTS;
use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Card subjects as color names, shown in order
    pub subjects: Vec<String>,
    /// Gesture and animation tuning
    pub gesture: GestureSettings,
    /// Initial window size
    pub window: WindowState,
}

/// Gesture thresholds and animation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Horizontal distance a release must exceed to count as a swipe
    pub swipe_threshold: f64,
    /// Smallest horizontal throw speed (units/ms)
    pub min_release_velocity: f64,
    /// Largest horizontal throw speed (units/ms)
    pub max_release_velocity: f64,
    /// Decay factor applied per millisecond to a thrown card
    pub decay_deceleration: f64,
    /// Spring tension shared by the spring-back and entrance animations
    pub spring_tension: f64,
    /// Friction of the spring back to the rest position
    pub spring_back_friction: f64,
    /// Friction of the entrance (scale-in) spring
    pub entrance_friction: f64,
    /// Card scale on first display, before the entrance spring runs
    pub initial_entrance: f64,
}

/// Window size for the first frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            subjects: DEFAULT_SUBJECTS.iter().map(ToString::to_string).collect(),
            gesture: GestureSettings::default(),
            window: WindowState::default(),
        }
    }
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: 120.0,
            min_release_velocity: 3.0,
            max_release_velocity: 5.0,
            decay_deceleration: 0.98,
            spring_tension: DEFAULT_TENSION,
            spring_back_friction: 4.0,
            entrance_friction: 8.0,
            initial_entrance: 0.5,
        }
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 400,
            height: 700,
        }
    }
}

impl GestureSettings {
    /// Spring used to return the card to its rest position
    pub fn spring_back(&self) -> SpringConfig {
        SpringConfig {
            tension: self.spring_tension,
            friction: self.spring_back_friction,
        }
    }

    /// Spring used to scale a new card in
    pub fn entrance(&self) -> SpringConfig {
        SpringConfig {
            tension: self.spring_tension,
            friction: self.entrance_friction,
        }
    }

    /// Check that the settings describe a usable gesture model
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(SwipeCardError::ConfigError(StringError::new(msg)));

        if !(self.swipe_threshold.is_finite() && self.swipe_threshold > 0.0) {
            return invalid(format!(
                "swipe_threshold must be a positive number, got {}",
                self.swipe_threshold
            ));
        }
        if !(self.min_release_velocity >= 0.0
            && self.min_release_velocity <= self.max_release_velocity
            && self.max_release_velocity.is_finite())
        {
            return invalid(format!(
                "release velocity bounds must satisfy 0 <= min <= max, got [{}, {}]",
                self.min_release_velocity, self.max_release_velocity
            ));
        }
        if !(self.decay_deceleration > 0.0 && self.decay_deceleration < 1.0) {
            return invalid(format!(
                "decay_deceleration must be between 0 and 1 (exclusive), got {}",
                self.decay_deceleration
            ));
        }
        if !(self.spring_tension > 0.0 && self.spring_tension.is_finite()) {
            return invalid(format!(
                "spring_tension must be a positive number, got {}",
                self.spring_tension
            ));
        }
        for (name, friction) in [
            ("spring_back_friction", self.spring_back_friction),
            ("entrance_friction", self.entrance_friction),
        ] {
            if !(friction > 0.0 && friction.is_finite()) {
                return invalid(format!("{name} must be a positive number, got {friction}"));
            }
        }
        if !(0.0..=1.0).contains(&self.initial_entrance) {
            return invalid(format!(
                "initial_entrance must be within [0, 1], got {}",
                self.initial_entrance
            ));
        }
        Ok(())
    }
}
