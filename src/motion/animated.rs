//! Animated scalar and 2D values
//!
//! An animated value is a plain number plus an offset, optionally driven by one
//! running [`Motion`]. Starting a new motion replaces the running one, and
//! writing the value directly stops it.

use super::{Decay, Motion, Spring, SpringConfig};
use std::time::Duration;

/// How a value's animation ended on a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// The motion ran to rest
    Finished,
    /// The motion was stopped or replaced before reaching rest
    Interrupted,
}

/// A scalar animated value
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f64,
    offset: f64,
    motion: Option<Motion>,
}

impl AnimatedValue {
    /// Create a value at rest
    pub fn new(value: f64) -> Self {
        Self {
            value,
            offset: 0.0,
            motion: None,
        }
    }

    /// Effective value (`value + offset`)
    pub fn get(&self) -> f64 {
        self.value + self.offset
    }

    /// Value excluding the offset
    pub fn raw(&self) -> f64 {
        self.value
    }

    /// Current offset
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether a motion is running
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// Set the value directly, stopping any running motion
    pub fn set_value(&mut self, value: f64) -> Option<AnimationEnd> {
        let end = self.stop();
        self.value = value;
        end
    }

    /// Set the offset added on top of the value
    pub fn set_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    /// Merge the offset into the value and zero the offset
    pub fn flatten_offset(&mut self) {
        self.value += self.offset;
        self.offset = 0.0;
    }

    /// Move the value into the offset and zero the value
    pub fn extract_offset(&mut self) {
        self.offset += self.value;
        self.value = 0.0;
    }

    /// Add `delta` to the value
    pub fn nudge(&mut self, delta: f64) {
        self.value += delta;
    }

    /// Spring the value toward `target`
    pub fn spring_to(&mut self, target: f64, config: SpringConfig) -> Option<AnimationEnd> {
        let end = self.stop();
        self.motion = Some(Motion::Spring(Spring::new(self.value, target, config)));
        end
    }

    /// Decay the value from its current position with `velocity` (units/ms)
    pub fn decay(&mut self, velocity: f64, deceleration: f64) -> Option<AnimationEnd> {
        let end = self.stop();
        self.motion = Some(Motion::Decay(Decay::new(self.value, velocity, deceleration)));
        end
    }

    /// Stop the running motion, leaving the value where it is
    ///
    /// Returns `Some(Interrupted)` if a motion was running.
    pub fn stop(&mut self) -> Option<AnimationEnd> {
        self.motion.take().map(|_| AnimationEnd::Interrupted)
    }

    /// Advance the running motion by `dt`
    ///
    /// Returns `Some(Finished)` on the frame the motion comes to rest.
    pub fn tick(&mut self, dt: Duration) -> Option<AnimationEnd> {
        let motion = self.motion.as_mut()?;
        let step = motion.step(dt);
        self.value = step.value;

        if step.done {
            self.motion = None;
            return Some(AnimationEnd::Finished);
        }
        None
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// A pair of animated values moved together
///
/// Joint animations (`spring_to`, `decay`) end when both axes are at rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimatedXY {
    /// Horizontal axis
    pub x: AnimatedValue,
    /// Vertical axis
    pub y: AnimatedValue,
    joint_pending: bool,
}

impl AnimatedXY {
    /// Create a 2D value at rest
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: AnimatedValue::new(x),
            y: AnimatedValue::new(y),
            joint_pending: false,
        }
    }

    /// Effective position
    pub fn get(&self) -> (f64, f64) {
        (self.x.get(), self.y.get())
    }

    /// Whether either axis is moving
    pub fn is_animating(&self) -> bool {
        self.x.is_animating() || self.y.is_animating()
    }

    /// Set both values, stopping any joint animation
    pub fn set_value(&mut self, x: f64, y: f64) -> Option<AnimationEnd> {
        let end = self.stop();
        self.x.set_value(x);
        self.y.set_value(y);
        end
    }

    /// Zero both values and offsets, stopping any joint animation
    pub fn reset(&mut self) -> Option<AnimationEnd> {
        let end = self.set_value(0.0, 0.0);
        self.x.set_offset(0.0);
        self.y.set_offset(0.0);
        end
    }

    /// See [`AnimatedValue::flatten_offset`]
    pub fn flatten_offset(&mut self) {
        self.x.flatten_offset();
        self.y.flatten_offset();
    }

    /// See [`AnimatedValue::extract_offset`]
    pub fn extract_offset(&mut self) {
        self.x.extract_offset();
        self.y.extract_offset();
    }

    /// Add a delta to both values
    pub fn nudge(&mut self, dx: f64, dy: f64) {
        self.x.nudge(dx);
        self.y.nudge(dy);
    }

    /// Spring both axes toward `(x, y)`
    pub fn spring_to(&mut self, x: f64, y: f64, config: SpringConfig) -> Option<AnimationEnd> {
        let end = self.stop();
        self.x.spring_to(x, config);
        self.y.spring_to(y, config);
        self.joint_pending = true;
        end
    }

    /// Decay both axes with their own velocity (units/ms)
    pub fn decay(&mut self, vx: f64, vy: f64, deceleration: f64) -> Option<AnimationEnd> {
        let end = self.stop();
        self.x.decay(vx, deceleration);
        self.y.decay(vy, deceleration);
        self.joint_pending = true;
        end
    }

    /// Stop both axes
    ///
    /// Returns `Some(Interrupted)` if a joint animation had not finished yet.
    pub fn stop(&mut self) -> Option<AnimationEnd> {
        self.x.stop();
        self.y.stop();
        std::mem::take(&mut self.joint_pending).then_some(AnimationEnd::Interrupted)
    }

    /// Advance both axes by `dt`
    ///
    /// Returns `Some(Finished)` on the frame the last moving axis comes to rest.
    pub fn tick(&mut self, dt: Duration) -> Option<AnimationEnd> {
        self.x.tick(dt);
        self.y.tick(dt);

        if self.joint_pending && !self.is_animating() {
            self.joint_pending = false;
            return Some(AnimationEnd::Finished);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn tick_until_end(xy: &mut AnimatedXY) -> usize {
        for frame in 1..=10_000 {
            if xy.tick(FRAME) == Some(AnimationEnd::Finished) {
                return frame;
            }
        }
        panic!("animation never finished");
    }

    #[test]
    fn test_offset_capture_and_flatten() {
        let mut value = AnimatedValue::new(40.0);
        value.extract_offset();
        assert_eq!(value.raw(), 0.0);
        assert_eq!(value.offset(), 40.0);
        assert_eq!(value.get(), 40.0);

        value.nudge(15.0);
        assert_eq!(value.get(), 55.0);

        value.flatten_offset();
        assert_eq!(value.raw(), 55.0);
        assert_eq!(value.offset(), 0.0);
    }

    #[test]
    fn test_set_value_interrupts_motion() {
        let mut value = AnimatedValue::new(0.0);
        assert_eq!(value.spring_to(1.0, SpringConfig::with_friction(8.0)), None);
        assert!(value.is_animating());

        assert_eq!(value.set_value(0.5), Some(AnimationEnd::Interrupted));
        assert!(!value.is_animating());
        assert_eq!(value.get(), 0.5);
    }

    #[test]
    fn test_new_motion_supersedes_running_one() {
        let mut xy = AnimatedXY::new(200.0, 0.0);
        xy.decay(4.0, 0.0, 0.98);
        xy.tick(FRAME);

        let end = xy.spring_to(0.0, 0.0, SpringConfig::with_friction(4.0));
        assert_eq!(end, Some(AnimationEnd::Interrupted));

        tick_until_end(&mut xy);
        assert_eq!(xy.get(), (0.0, 0.0));
    }

    #[test]
    fn test_joint_animation_waits_for_both_axes() {
        let mut xy = AnimatedXY::new(130.0, 0.0);
        // y has no velocity and stops on the first frame; x keeps going
        xy.decay(3.0, 0.0, 0.98);
        assert_eq!(xy.tick(FRAME), None);
        assert!(xy.x.is_animating());
        assert!(!xy.y.is_animating());

        let frames = tick_until_end(&mut xy);
        assert!(frames > 1);
        assert!(xy.get().0 > 130.0);
    }

    #[test]
    fn test_tick_without_animation_reports_nothing() {
        let mut xy = AnimatedXY::default();
        assert_eq!(xy.tick(FRAME), None);
        assert_eq!(xy.stop(), None);
    }

    #[test]
    fn test_reset_clears_offset() {
        let mut xy = AnimatedXY::new(30.0, -12.0);
        xy.extract_offset();
        xy.nudge(5.0, 5.0);
        xy.reset();
        assert_eq!(xy.get(), (0.0, 0.0));
        assert_eq!(xy.x.offset(), 0.0);
        assert_eq!(xy.y.offset(), 0.0);
    }
}
