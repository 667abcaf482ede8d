//! Card interaction controller module
//!
//! This module implements the swipeable card's behavior: it turns gesture
//! callbacks into drag-position updates, decides what a release means, runs
//! the resulting animations and rotates through the subjects.
//!
//! # Gesture lifecycle
//!
//! ```text
//! Idle ──start──▶ Dragging ──end──▶ Settling(outcome) ──animation done──▶ Idle
//!                   ▲   │move
//!                   └───┘
//! ```
//!
//! A release farther than the swipe threshold (120 units by default) from the
//! rest position throws the card: its horizontal velocity is clamped to a
//! magnitude of 3..=5 units/ms, it decays off-screen, and the next subject is
//! shown with a fresh entrance animation. Any shorter release springs the card
//! back to the origin.
//!
//! # Visuals
//!
//! [`CardVisuals`] is derived from the drag position and the entrance value on
//! every read; see [`visuals`] for the mappings.

pub mod card_controller;
pub mod visuals;

pub use card_controller::{
    CardController, GesturePhase, ReleaseOutcome, SwipeDirection, clamp_release_velocity,
};
pub use visuals::{CardVisuals, IndicatorVisuals};
