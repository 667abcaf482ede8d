//! Pointer gesture tracking
//!
//! Turns the raw pointer positions delivered by the window into what the card
//! controller consumes: a start, incremental per-event deltas, and a release
//! velocity in units per millisecond.
//!
//! Timestamps are plain [`Duration`]s from any fixed epoch so the tracker can
//! be driven from tests without a clock.

use smallvec::SmallVec;
use std::time::Duration;

/// Samples older than this (relative to the newest) are ignored for velocity
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);

/// Maximum samples kept; a 100 ms window at high input rates stays inline
const MAX_SAMPLES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PointerSample {
    at: Duration,
    x: f64,
    y: f64,
}

/// Release velocity in units per millisecond
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    /// Horizontal component
    pub vx: f64,
    /// Vertical component
    pub vy: f64,
}

/// Tracks the active pointer between press and release
#[derive(Debug, Default)]
pub struct PointerTracker {
    samples: SmallVec<[PointerSample; MAX_SAMPLES]>,
    active: bool,
}

impl PointerTracker {
    /// Create an idle tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a gesture at the given pointer position
    pub fn begin(&mut self, x: f64, y: f64, at: Duration) {
        self.samples.clear();
        self.samples.push(PointerSample { at, x, y });
        self.active = true;
    }

    /// Record a move and return the delta since the previous sample
    ///
    /// Returns `None` when no gesture is active.
    pub fn advance(&mut self, x: f64, y: f64, at: Duration) -> Option<(f64, f64)> {
        if !self.active {
            return None;
        }
        let last = *self.samples.last()?;
        self.record(PointerSample { at, x, y });
        Some((x - last.x, y - last.y))
    }

    /// Finish the gesture and return the release velocity
    ///
    /// The final position is recorded first, so a release that lands away from
    /// the last move still counts toward the velocity.
    pub fn release(&mut self, x: f64, y: f64, at: Duration) -> Option<Velocity> {
        if !self.active {
            return None;
        }
        self.record(PointerSample { at, x, y });
        self.active = false;
        Some(self.velocity())
    }

    /// Delta between the last recorded sample and `(x, y)`
    ///
    /// Lets the caller flush a final move before releasing.
    pub fn pending_delta(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !self.active {
            return None;
        }
        self.samples.last().map(|last| (x - last.x, y - last.y))
    }

    fn record(&mut self, sample: PointerSample) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.remove(0);
        }
        self.samples.push(sample);

        // Drop samples that fell out of the velocity window, keeping at least two
        let newest = sample.at;
        while self.samples.len() > 2
            && newest.saturating_sub(self.samples[0].at) > VELOCITY_WINDOW
        {
            self.samples.remove(0);
        }
    }

    fn velocity(&self) -> Velocity {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return Velocity::default();
        };

        let elapsed_ms = last.at.saturating_sub(first.at).as_secs_f64() * 1000.0;
        if elapsed_ms <= 0.0 {
            return Velocity::default();
        }

        Velocity {
            vx: (last.x - first.x) / elapsed_ms,
            vy: (last.y - first.y) / elapsed_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_deltas_are_incremental() {
        let mut tracker = PointerTracker::new();
        tracker.begin(100.0, 100.0, ms(0));

        assert_eq!(tracker.advance(110.0, 98.0, ms(16)), Some((10.0, -2.0)));
        assert_eq!(tracker.advance(135.0, 98.0, ms(32)), Some((25.0, 0.0)));
    }

    #[test]
    fn test_inactive_tracker_ignores_input() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.advance(1.0, 1.0, ms(0)), None);
        assert_eq!(tracker.release(1.0, 1.0, ms(0)), None);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_release_velocity_in_units_per_ms() {
        let mut tracker = PointerTracker::new();
        tracker.begin(0.0, 0.0, ms(0));
        for i in 1..=5u32 {
            tracker.advance(f64::from(i) * 32.0, f64::from(i) * -8.0, ms(u64::from(i) * 16));
        }
        let velocity = tracker.release(192.0, -48.0, ms(96)).unwrap();
        assert!((velocity.vx - 2.0).abs() < 1e-9);
        assert!((velocity.vy + 0.5).abs() < 1e-9);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_velocity_uses_recent_window_only() {
        let mut tracker = PointerTracker::new();
        tracker.begin(0.0, 0.0, ms(0));
        // Slow drift, then a fast flick in the last 100 ms
        tracker.advance(10.0, 0.0, ms(500));
        tracker.advance(20.0, 0.0, ms(1000));
        tracker.advance(120.0, 0.0, ms(1050));
        let velocity = tracker.release(220.0, 0.0, ms(1100)).unwrap();
        assert!((velocity.vx - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_release_without_elapsed_time_is_still() {
        let mut tracker = PointerTracker::new();
        tracker.begin(5.0, 5.0, ms(10));
        let velocity = tracker.release(5.0, 5.0, ms(10)).unwrap();
        assert_eq!(velocity, Velocity::default());
    }

    #[test]
    fn test_pending_delta() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.pending_delta(3.0, 3.0), None);
        tracker.begin(1.0, 1.0, ms(0));
        assert_eq!(tracker.pending_delta(4.0, -1.0), Some((3.0, -2.0)));
    }
}
