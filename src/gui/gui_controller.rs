//! GUI controller
//!
//! Connects the Slint window to the card controller: pointer callbacks go
//! through a [`PointerTracker`] into the gesture handlers, and a repeating
//! frame timer advances the animations and pushes the derived visuals back
//! into the window's properties.
//!
//! The window reports pointer positions relative to the card, which itself
//! moves with the drag. They are shifted by the card translation currently on
//! screen before tracking, so deltas are measured in window space.

use crate::MainWindow;
use anyhow::{Context, Result};
use slint::{ComponentHandle, Timer, TimerMode};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use swipecard::CardController;
use swipecard::config::WindowState;
use swipecard::controller::CardVisuals;
use swipecard::gesture::PointerTracker;
use swipecard::subjects::Rgb;
use tracing::{debug, info};

/// Frame timer period (~60 Hz)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Longest step fed to the animations after a stalled frame
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

/// Controller plus the input/clock state the callbacks share
struct CardSession {
    controller: CardController,
    tracker: PointerTracker,
    epoch: Instant,
    last_frame: Instant,
    /// Card translation as last pushed to the window
    shown_offset: (f64, f64),
}

impl CardSession {
    fn new(controller: CardController) -> Self {
        let now = Instant::now();
        Self {
            controller,
            tracker: PointerTracker::new(),
            epoch: now,
            last_frame: now,
            shown_offset: (0.0, 0.0),
        }
    }

    /// Card-relative pointer position to window space
    fn to_window(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.shown_offset.0, y + self.shown_offset.1)
    }

    fn pointer_down(&mut self, x: f64, y: f64) {
        let (x, y) = self.to_window(x, y);
        let at = self.epoch.elapsed();
        self.tracker.begin(x, y, at);
        self.controller.on_gesture_start();
    }

    fn pointer_move(&mut self, x: f64, y: f64) {
        let (x, y) = self.to_window(x, y);
        let at = self.epoch.elapsed();
        if let Some((dx, dy)) = self.tracker.advance(x, y, at) {
            self.controller.on_gesture_move(dx, dy);
        }
    }

    fn pointer_up(&mut self, x: f64, y: f64) {
        let (x, y) = self.to_window(x, y);

        // The release position may differ from the last reported move
        if let Some((dx, dy)) = self.tracker.pending_delta(x, y) {
            self.controller.on_gesture_move(dx, dy);
        }

        let at = self.epoch.elapsed();
        if let Some(velocity) = self.tracker.release(x, y, at) {
            debug!("Pointer released at ({x:.1}, {y:.1})");
            self.controller.on_gesture_end(velocity.vx, velocity.vy);
        }
    }

    fn advance_frame(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).min(MAX_FRAME_STEP);
        self.last_frame = now;
        self.controller.tick(dt);
    }

    /// Visuals for the next frame; records the translation the window will show
    fn frame_visuals(&mut self) -> CardVisuals {
        let visuals = self.controller.visuals();
        self.shown_offset = (visuals.translate_x, visuals.translate_y);
        visuals
    }
}

/// Owns the main window and drives it from the card controller
pub struct GuiController {
    window: MainWindow,
    session: Rc<RefCell<CardSession>>,
    // Stops when dropped
    _frame_timer: Timer,
}

impl GuiController {
    /// Create the main window and wire it to `controller`
    pub fn new(controller: CardController, window_state: WindowState) -> Result<Self> {
        let window = MainWindow::new().context("Failed to create main window")?;

        #[expect(
            clippy::cast_precision_loss,
            reason = "Window dimensions are far below f32's exact integer range"
        )]
        window.window().set_size(slint::LogicalSize::new(
            window_state.width as f32,
            window_state.height as f32,
        ));

        let session = Rc::new(RefCell::new(CardSession::new(controller)));
        Self::wire_gestures(&window, &session);
        push_visuals(&window, &mut session.borrow_mut());

        let frame_timer = Timer::default();
        let weak_window = window.as_weak();
        let timer_session = Rc::clone(&session);
        frame_timer.start(TimerMode::Repeated, FRAME_INTERVAL, move || {
            let Some(window) = weak_window.upgrade() else {
                return;
            };
            let mut session = timer_session.borrow_mut();
            session.advance_frame();
            push_visuals(&window, &mut session);
        });

        Ok(Self {
            window,
            session,
            _frame_timer: frame_timer,
        })
    }

    fn wire_gestures(window: &MainWindow, session: &Rc<RefCell<CardSession>>) {
        let start_session = Rc::clone(session);
        window.on_gesture_start(move |x, y| {
            start_session
                .borrow_mut()
                .pointer_down(f64::from(x), f64::from(y));
        });

        let move_session = Rc::clone(session);
        window.on_gesture_move(move |x, y| {
            move_session
                .borrow_mut()
                .pointer_move(f64::from(x), f64::from(y));
        });

        let end_session = Rc::clone(session);
        window.on_gesture_end(move |x, y| {
            end_session
                .borrow_mut()
                .pointer_up(f64::from(x), f64::from(y));
        });
    }

    /// Show the window, start the entrance animation and run the event loop
    pub fn run(self) -> Result<()> {
        {
            let mut session = self.session.borrow_mut();
            session.last_frame = Instant::now();
            session.controller.mount();
        }

        info!("Starting Slint event loop");
        self.window
            .run()
            .context("Slint event loop terminated with error")?;
        Ok(())
    }
}

/// Copy the controller's derived visuals into the window
#[expect(
    clippy::cast_possible_truncation,
    reason = "Visual properties are f32 in Slint; f64 precision is not needed on screen"
)]
fn push_visuals(window: &MainWindow, session: &mut CardSession) {
    let visuals = session.frame_visuals();

    window.set_card_x(visuals.translate_x as f32);
    window.set_card_y(visuals.translate_y as f32);
    window.set_card_rotation(visuals.rotation_deg as f32);
    window.set_card_opacity(visuals.opacity as f32);
    window.set_card_scale(visuals.scale as f32);

    window.set_accept_opacity(visuals.accept.opacity as f32);
    window.set_accept_scale(visuals.accept.scale as f32);
    window.set_reject_opacity(visuals.reject.opacity as f32);
    window.set_reject_scale(visuals.reject.scale as f32);

    let Rgb { r, g, b } = session.controller.current_subject().color();
    window.set_card_color(slint::Color::from_rgb_u8(r, g, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipecard::config::GestureSettings;
    use swipecard::subjects::SubjectRing;

    fn session() -> CardSession {
        let controller = CardController::new(SubjectRing::default(), GestureSettings::default())
            .unwrap();
        CardSession::new(controller)
    }

    #[test]
    fn test_drag_follows_pointer_while_card_moves() {
        let mut session = session();
        session.pointer_down(100.0, 50.0);
        session.frame_visuals();

        // The card follows the pointer, so the card-relative position stays put
        // while the pointer travels 10 units per event in the window
        for _ in 0..3 {
            session.pointer_move(110.0, 50.0);
            session.frame_visuals();
        }

        let (x, y) = session.controller.drag_position();
        assert!((x - 30.0).abs() < 1e-9, "drag x = {x}");
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_moves_between_frames_use_last_shown_offset() {
        let mut session = session();
        session.pointer_down(100.0, 50.0);

        session.pointer_move(110.0, 50.0);
        session.pointer_move(120.0, 60.0);

        assert_eq!(session.controller.drag_position(), (20.0, 10.0));
        assert_eq!(session.shown_offset, (20.0, 10.0));
    }

    #[test]
    fn test_release_on_moved_card_has_no_extra_delta() {
        let mut session = session();
        session.pointer_down(100.0, 50.0);
        session.frame_visuals();
        session.pointer_move(110.0, 50.0);
        session.frame_visuals();

        // Pointer still at window x = 110, card shifted by 10
        session.pointer_up(100.0, 50.0);

        let (x, _) = session.controller.drag_position();
        assert!((x - 10.0).abs() < 1e-9, "drag x = {x}");
    }
}
