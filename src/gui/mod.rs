//! GUI module
//!
//! Provides the Slint window for the card and keeps it in sync with the card controller.

pub mod gui_controller;

pub use gui_controller::GuiController;
