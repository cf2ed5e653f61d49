use crate::app::App;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hoopboard_core::{Event, UiMode};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

pub async fn handle_key_bindings(key_event: KeyEvent, app: &Arc<Mutex<App>>) {
    let mut guard = app.lock().await;
    if apply_key(&mut guard, key_event, Instant::now()) == KeyOutcome::Quit {
        crate::cleanup_terminal();
        std::process::exit(0);
    }
}

/// Map a key press onto the app for the mode that's currently open.
pub fn apply_key(app: &mut App, key_event: KeyEvent, now: Instant) -> KeyOutcome {
    let code = key_event.code;
    let modifiers = key_event.modifiers;

    if let (Char('c'), KeyModifiers::CONTROL) = (code, modifiers) {
        return KeyOutcome::Quit;
    }

    if app.state.show_help {
        match code {
            Char('q') => return KeyOutcome::Quit,
            _ => app.exit_help(),
        }
        return KeyOutcome::Continue;
    }

    match app.mode().clone() {
        UiMode::Idle | UiMode::EditingTeam(_) => return board_keys(app, code, modifiers, now),
        UiMode::AddingPlayer { .. } => match code {
            KeyCode::Enter => app.dispatch(Event::Confirm),
            KeyCode::Esc => app.dispatch(Event::Cancel),
            KeyCode::Backspace => app.dispatch(Event::Backspace),
            Char(c) => app.dispatch(Event::Input(c)),
            _ => {}
        },
        UiMode::TeamSettings(_) => match code {
            KeyCode::Enter => app.dispatch(Event::Confirm),
            KeyCode::Esc => app.dispatch(Event::Cancel),
            KeyCode::Backspace => app.dispatch(Event::Backspace),
            KeyCode::Right | KeyCode::Up => app.dispatch(Event::Step(1)),
            KeyCode::Left | KeyCode::Down => app.dispatch(Event::Step(-1)),
            Char(c) => app.dispatch(Event::Input(c)),
            _ => {}
        },
        UiMode::ConfirmingDelete { .. } | UiMode::ConfirmingNextPeriod => match code {
            KeyCode::Enter | Char('y') => app.dispatch(Event::Confirm),
            KeyCode::Esc | Char('n') => app.dispatch(Event::Cancel),
            Char('t') => app.toggle_clock(),
            Char('q') => return KeyOutcome::Quit,
            _ => {}
        },
        UiMode::ConfiguringTimer => match code {
            KeyCode::Up | Char('+') | Char('k') => app.dispatch(Event::Step(1)),
            KeyCode::Down | Char('-') | Char('j') => app.dispatch(Event::Step(-1)),
            KeyCode::Right | Char('l') => app.step_countdown_seconds(1),
            KeyCode::Left | Char('h') => app.step_countdown_seconds(-1),
            Char('r') => app.dispatch(Event::ResetTimer),
            Char('t') => app.toggle_clock(),
            KeyCode::Enter => app.dispatch(Event::Confirm),
            KeyCode::Esc => app.dispatch(Event::Cancel),
            Char('q') => return KeyOutcome::Quit,
            _ => {}
        },
        UiMode::AdjustingScore(_) => match (code, modifiers) {
            (KeyCode::PageUp, _) | (KeyCode::Up, KeyModifiers::SHIFT) => app.dispatch(Event::Step(10)),
            (KeyCode::PageDown, _) | (KeyCode::Down, KeyModifiers::SHIFT) => {
                app.dispatch(Event::Step(-10))
            }
            (KeyCode::Up | Char('+') | Char('k'), _) => app.dispatch(Event::Step(1)),
            (KeyCode::Down | Char('-') | Char('j'), _) => app.dispatch(Event::Step(-1)),
            (KeyCode::Enter, _) => app.dispatch(Event::Confirm),
            (KeyCode::Esc, _) => app.dispatch(Event::Cancel),
            (Char('t'), _) => app.toggle_clock(),
            (Char('q'), _) => return KeyOutcome::Quit,
            _ => {}
        },
    }
    KeyOutcome::Continue
}

fn board_keys(app: &mut App, code: KeyCode, modifiers: KeyModifiers, now: Instant) -> KeyOutcome {
    match (code, modifiers) {
        (Char('q'), _) => return KeyOutcome::Quit,

        // Focus
        (KeyCode::Tab | KeyCode::Right | KeyCode::Down | Char('l') | Char('j'), _) => app.focus_next(),
        (KeyCode::BackTab | KeyCode::Left | KeyCode::Up | Char('h') | Char('k'), _) => app.focus_prev(),

        // Gestures
        (Char(' '), _) => app.tap(now),
        (Char('1'), _) => app.tap_count(1),
        (Char('2'), _) => app.tap_count(2),
        (Char('3'), _) => app.tap_count(3),
        (KeyCode::Enter, _) => app.long_press(),
        (Char('t'), _) => app.toggle_clock(),
        (KeyCode::Esc, _) => {
            app.flush_taps();
            app.dispatch(Event::Cancel);
        }

        // Global
        (Char('?'), _) => app.toggle_help(),
        (Char('f'), _) => app.toggle_full_screen(),
        (Char('"'), _) => app.toggle_show_logs(),

        _ => {}
    }
    KeyOutcome::Continue
}
