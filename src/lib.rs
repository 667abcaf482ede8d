//! `SwipeCard` - Swipeable card widget
//!
//! A single card that follows drag gestures, tilts and fades with the drag,
//! and on release either springs back to rest or is thrown off-screen, after
//! which the next subject (a background color) scales in.
//!
//! The crate is split into a toolkit-independent core and a Slint shell that
//! lives in the binary:
//!
//! - `controller`: the card state machine and its derived visuals
//! - `motion`: spring/decay physics, animated values, interpolation
//! - `gesture`: pointer samples to deltas and release velocity
//! - `subjects`: the ring of subjects shown on the card
//! - `config`, `error`, `utils`: configuration, errors, logging

// Module declarations
pub mod config;
pub mod controller;
pub mod error;
pub mod gesture;
pub mod motion;
pub mod subjects;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use controller::{CardController, CardVisuals};
pub use error::{Result, SwipeCardError};
