//! Derived visual properties
//!
//! Pure mappings from the card's drag position and entrance value to what the
//! window draws. Nothing here holds state; the controller recomputes a
//! [`CardVisuals`] whenever the window asks for one.

use crate::motion::Interpolation;

/// Card tilt in degrees by horizontal drag
pub const ROTATION: Interpolation<3> =
    Interpolation::new([-200.0, 0.0, 200.0], [-30.0, 0.0, 30.0]);

/// Card opacity by horizontal drag
pub const CARD_OPACITY: Interpolation<3> =
    Interpolation::new([-200.0, 0.0, 200.0], [0.5, 1.0, 0.5]);

/// Accept indicator opacity by horizontal drag
pub const ACCEPT_OPACITY: Interpolation<2> = Interpolation::new([0.0, 150.0], [0.0, 1.0]);

/// Accept indicator scale by horizontal drag
pub const ACCEPT_SCALE: Interpolation<2> =
    Interpolation::new([0.0, 150.0], [0.5, 1.0]).clamped();

/// Reject indicator opacity by horizontal drag
pub const REJECT_OPACITY: Interpolation<2> = Interpolation::new([-150.0, 0.0], [1.0, 0.0]);

/// Reject indicator scale by horizontal drag
pub const REJECT_SCALE: Interpolation<2> =
    Interpolation::new([-150.0, 0.0], [1.0, 0.5]).clamped();

/// Opacity and scale of one swipe indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorVisuals {
    /// Opacity in [0, 1]
    pub opacity: f64,
    /// Uniform scale factor
    pub scale: f64,
}

/// Everything the window needs to draw one frame of the card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardVisuals {
    /// Horizontal translation from the rest position
    pub translate_x: f64,
    /// Vertical translation from the rest position
    pub translate_y: f64,
    /// Tilt in degrees, clockwise positive
    pub rotation_deg: f64,
    /// Card opacity in [0, 1]
    pub opacity: f64,
    /// Card scale from the entrance animation
    pub scale: f64,
    /// "Accept" indicator, shown while dragging right
    pub accept: IndicatorVisuals,
    /// "Reject" indicator, shown while dragging left
    pub reject: IndicatorVisuals,
}

impl CardVisuals {
    /// Derive the visuals for a drag position and entrance value
    pub fn derive(drag: (f64, f64), entrance: f64) -> Self {
        let (x, y) = drag;
        Self {
            translate_x: x,
            translate_y: y,
            rotation_deg: ROTATION.apply(x),
            opacity: unit(CARD_OPACITY.apply(x)),
            scale: entrance,
            accept: IndicatorVisuals {
                opacity: unit(ACCEPT_OPACITY.apply(x)),
                scale: ACCEPT_SCALE.apply(x),
            },
            reject: IndicatorVisuals {
                opacity: unit(REJECT_OPACITY.apply(x)),
                scale: REJECT_SCALE.apply(x),
            },
        }
    }
}

/// Opacity is a unit quantity; extrapolated values are limited to [0, 1]
fn unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
