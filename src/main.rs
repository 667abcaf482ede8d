//! `SwipeCard` - Swipeable card demo
//!
//! Opens a window with a single card. Drag it past the swipe threshold and
//! let go to throw it and bring in the next color; a shorter drag springs back.

#![expect(
    missing_docs,
    reason = "Slint-generated code from include_modules! lacks doc comments"
)]
#![allow(clippy::unwrap_used)] // Slint-generated code from include_modules! uses .unwrap() extensively

// GUI module is only in the binary, not the library
mod gui;

use anyhow::{Context, Result};
use gui::GuiController;
use swipecard::{
    CardController,
    config::ConfigManager,
    error::{SwipeCardError, get_user_friendly_error},
    utils,
};
use tracing::{error, info};

// Include Slint-generated code
slint::include_modules!();

fn main() -> Result<()> {
    let _log_guard = utils::init_logging().context("Failed to initialize logging system")?;

    info!("SwipeCard v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("Failed to load application configuration")?;
    info!(
        "Configuration loaded with {} subjects, swipe threshold {}",
        config.subjects.len(),
        config.gesture.swipe_threshold
    );

    let controller = CardController::from_config(&config)
        .inspect_err(report)
        .context("Failed to create card controller")?;

    let gui_controller =
        GuiController::new(controller, config.window).context("Failed to create GUI")?;

    gui_controller
        .run()
        .context("GUI event loop terminated with error")?;

    info!("SwipeCard shutting down");

    Ok(())
}

fn load_config() -> swipecard::Result<swipecard::config::AppConfig> {
    ConfigManager::load().inspect_err(report)
}

/// Log an error and print its user-facing explanation
fn report(e: &SwipeCardError) {
    error!("{e}");
    eprintln!("{}", get_user_friendly_error(e));
}
