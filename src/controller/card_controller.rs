//! Card interaction controller implementation
//!
//! Owns the drag position, the entrance value and the subject ring. The only
//! ways to change them are the gesture callbacks, `cycle_to_next_subject`,
//! `mount` and the per-frame `tick`.

use super::visuals::CardVisuals;
use crate::config::{AppConfig, ConfigManager, GestureSettings};
use crate::error::Result;
use crate::motion::{AnimatedValue, AnimatedXY, AnimationEnd};
use crate::subjects::{Subject, SubjectRing};
use std::time::Duration;
use tracing::{debug, info};

/// Which way a card was thrown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Thrown right
    Accept,
    /// Thrown left
    Reject,
}

/// What a release decided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// Past the swipe threshold: the card decays off-screen, then the next subject is shown
    Thrown(SwipeDirection),
    /// Under the threshold: the card springs back to its rest position
    Returned,
}

/// Gesture lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No pointer down and the card is not moving on its own
    Idle,
    /// Pointer down; moves update the drag position
    Dragging,
    /// Pointer released; the release animation is running
    Settling(ReleaseOutcome),
}

/// Clamp a horizontal release velocity's magnitude to `[min, max]`, keeping its sign
///
/// Zero counts as positive, so a still release is thrown right at `min`.
pub fn clamp_release_velocity(vx: f64, min: f64, max: f64) -> f64 {
    if vx >= 0.0 {
        vx.clamp(min, max)
    } else {
        -(-vx).clamp(min, max)
    }
}

/// Swipeable card state machine
#[derive(Debug, Clone)]
pub struct CardController {
    subjects: SubjectRing,
    settings: GestureSettings,
    /// Drag position
    pan: AnimatedXY,
    /// Entrance progress, also the card scale
    entrance: AnimatedValue,
    phase: GesturePhase,
    mounted: bool,
}

impl CardController {
    /// Create a controller showing the first subject
    pub fn new(subjects: SubjectRing, settings: GestureSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            subjects,
            pan: AnimatedXY::default(),
            entrance: AnimatedValue::new(settings.initial_entrance),
            settings,
            phase: GesturePhase::Idle,
            mounted: false,
        })
    }

    /// Create a controller from application configuration
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        ConfigManager::validate(config)?;
        let subjects = SubjectRing::new(config.subjects.iter().cloned())?;
        Self::new(subjects, config.gesture)
    }

    /// Start the entrance animation on first display
    ///
    /// Later calls do nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        info!("Card mounted showing '{}'", self.subjects.current());
        self.animate_entrance();
    }

    /// Pointer pressed: capture the current drag position as the offset baseline
    pub fn on_gesture_start(&mut self) {
        if let GesturePhase::Settling(ReleaseOutcome::Thrown(direction)) = self.phase {
            // Grabbing a thrown card completes the swipe right away
            debug!("Thrown card ({direction:?}) grabbed mid-flight, completing swipe");
            self.pan.stop();
            self.cycle_to_next_subject();
        } else if self.pan.stop().is_some() {
            debug!("Spring-back interrupted at {:?}", self.pan.get());
        }

        self.pan.extract_offset();
        self.phase = GesturePhase::Dragging;
    }

    /// Pointer moved by `(dx, dy)` since the previous event
    pub fn on_gesture_move(&mut self, dx: f64, dy: f64) {
        if self.phase != GesturePhase::Dragging {
            debug!("Ignoring move ({dx}, {dy}) outside a drag");
            return;
        }
        self.pan.nudge(dx, dy);
    }

    /// Pointer released with velocity `(vx, vy)` in units per millisecond
    ///
    /// Returns `None` if no drag was in progress.
    pub fn on_gesture_end(&mut self, vx: f64, vy: f64) -> Option<ReleaseOutcome> {
        if self.phase != GesturePhase::Dragging {
            debug!("Ignoring release outside a drag");
            return None;
        }

        self.pan.flatten_offset();
        let (x, y) = self.pan.get();
        let throw_vx = clamp_release_velocity(
            vx,
            self.settings.min_release_velocity,
            self.settings.max_release_velocity,
        );

        let outcome = if x.abs() > self.settings.swipe_threshold {
            let direction = if x > 0.0 {
                SwipeDirection::Accept
            } else {
                SwipeDirection::Reject
            };
            self.pan.decay(throw_vx, vy, self.settings.decay_deceleration);
            ReleaseOutcome::Thrown(direction)
        } else {
            self.pan.spring_to(0.0, 0.0, self.settings.spring_back());
            ReleaseOutcome::Returned
        };

        info!("Released at ({x:.1}, {y:.1}) with velocity ({vx:.2}, {vy:.2}): {outcome:?}");
        self.phase = GesturePhase::Settling(outcome);
        Some(outcome)
    }

    /// Show the next subject with a fresh entrance animation
    pub fn cycle_to_next_subject(&mut self) {
        self.pan.reset();
        self.entrance.set_value(0.0);
        self.subjects.advance();
        info!(
            "Showing subject '{}' ({}/{})",
            self.subjects.current(),
            self.subjects.index() + 1,
            self.subjects.len()
        );
        self.phase = GesturePhase::Idle;
        self.animate_entrance();
    }

    /// Advance all running animations by `dt`
    pub fn tick(&mut self, dt: Duration) {
        self.entrance.tick(dt);

        if self.pan.tick(dt) != Some(AnimationEnd::Finished) {
            return;
        }
        match self.phase {
            GesturePhase::Settling(ReleaseOutcome::Thrown(_)) => self.cycle_to_next_subject(),
            GesturePhase::Settling(ReleaseOutcome::Returned) => {
                debug!("Card back at rest");
                self.phase = GesturePhase::Idle;
            }
            GesturePhase::Idle | GesturePhase::Dragging => {}
        }
    }

    /// Whether any animation is still running
    pub fn is_animating(&self) -> bool {
        self.pan.is_animating() || self.entrance.is_animating()
    }

    /// Visual properties for the current state
    pub fn visuals(&self) -> CardVisuals {
        CardVisuals::derive(self.pan.get(), self.entrance.get())
    }

    /// Current drag position
    pub fn drag_position(&self) -> (f64, f64) {
        self.pan.get()
    }

    /// Current entrance value
    pub fn entrance(&self) -> f64 {
        self.entrance.get()
    }

    /// Gesture lifecycle state
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// The subject on the card
    pub fn current_subject(&self) -> &Subject {
        self.subjects.current()
    }

    /// Index of the subject on the card
    pub fn current_index(&self) -> usize {
        self.subjects.index()
    }

    /// All subjects
    pub fn subjects(&self) -> &SubjectRing {
        &self.subjects
    }

    /// Active gesture settings
    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    fn animate_entrance(&mut self) {
        self.entrance.spring_to(1.0, self.settings.entrance());
    }
}
