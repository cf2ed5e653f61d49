use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::gesture::TapRecognizer;
use hoopboard_core::{Event, Gesture, Target, UiMode};
use log::debug;
use std::time::Instant;

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        let taps = TapRecognizer::new(settings.multi_tap_window());
        let state = AppState::new(&settings.board, taps);

        log::set_max_level(settings.level_filter());
        tui_logger::set_default_level(settings.level_filter());

        Self { settings, state }
    }

    pub fn mode(&self) -> &UiMode {
        &self.state.session.mode
    }

    /// Every change to the game goes through the reducer here.
    pub fn dispatch(&mut self, event: Event) {
        self.state.session.apply(event);
    }

    // -----------------------------------------------------------------------
    // Gestures on the focused target
    // -----------------------------------------------------------------------

    pub fn focused(&mut self) -> Target {
        self.state.focus.resolve(&self.state.session)
    }

    /// A single tap. Taps on a score wait briefly so repeats can become
    /// double and triple taps; everything else fires immediately.
    pub fn tap(&mut self, now: Instant) {
        let target = self.focused();
        if matches!(target, Target::Score(_)) {
            if let Some(event) = self.state.taps.press(target, now) {
                self.dispatch(event);
            }
            return;
        }
        self.flush_taps();
        self.dispatch(Event::tap(target));
    }

    /// Explicit multi-tap without waiting on the recognizer.
    pub fn tap_count(&mut self, count: u8) {
        self.flush_taps();
        let target = self.focused();
        self.dispatch(Event::Gesture {
            kind: Gesture::from_tap_count(count),
            target,
        });
    }

    pub fn long_press(&mut self) {
        self.flush_taps();
        let target = self.focused();
        self.dispatch(Event::long_press(target));
    }

    pub fn toggle_clock(&mut self) {
        self.flush_taps();
        self.dispatch(Event::tap(Target::Timer));
    }

    /// Settle taps whose multi-tap window has passed.
    pub fn on_gesture_tick(&mut self, now: Instant) -> bool {
        match self.state.taps.poll(now) {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    pub fn on_clock_tick(&mut self) {
        self.dispatch(Event::Tick);
    }

    pub fn flush_taps(&mut self) {
        if let Some(event) = self.state.taps.flush() {
            debug!("flushing pending taps");
            self.dispatch(event);
        }
    }

    // -----------------------------------------------------------------------
    // Focus and view toggles
    // -----------------------------------------------------------------------

    pub fn focus_next(&mut self) {
        self.state.focus.next(&self.state.session);
    }

    pub fn focus_prev(&mut self) {
        self.state.focus.prev(&self.state.session);
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    pub fn toggle_help(&mut self) {
        self.state.show_help = !self.state.show_help;
    }

    pub fn exit_help(&mut self) {
        self.state.show_help = false;
    }

    // -----------------------------------------------------------------------
    // Clock popover helpers
    // -----------------------------------------------------------------------

    /// Nudge the configured seconds, keeping minutes as they are.
    pub fn step_countdown_seconds(&mut self, delta: i32) {
        let timer = &self.state.session.board.timer;
        let seconds = (timer.seconds() as i32 + delta).rem_euclid(60) as u32;
        let minutes = timer.minutes();
        self.dispatch(Event::SetCountdown { minutes, seconds });
    }
}
