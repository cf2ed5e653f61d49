mod app;
mod components;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::state::app_settings::{AppSettings, config_path};
use crate::state::messages::UiEvent;
use crate::state::ticker::ClockTicker;
use crossterm::event::{self as crossterm_event, Event, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use log::{info, warn};
use std::io::Stdout;
use std::sync::Arc;
use std::time::Instant;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc};
use tokio::time::Duration;
use tui::{Terminal, backend::CrosstermBackend};

const GESTURE_TICK: Duration = Duration::from_millis(80);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args() {
        return Ok(());
    }

    better_panic::install();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    tui_logger::init_logger(log::LevelFilter::Trace)?;

    let app = Arc::new(Mutex::new(App::new(AppSettings::load())));
    info!("hoopboard {} started", env!("CARGO_PKG_VERSION"));

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Game clock, one tick per second
    let clock = ClockTicker::new(ui_event_tx.clone());
    let clock_task = tokio::spawn(clock.run());

    // Multi-tap settle tick
    let gesture_tx = ui_event_tx.clone();
    let gesture_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(GESTURE_TICK);
        loop {
            interval.tick().await;
            if gesture_tx.send(UiEvent::GestureTick).await.is_err() {
                break;
            }
        }
    });

    main_ui_loop(terminal, app, ui_event_rx).await;

    input_handler.abort();
    clock_task.abort();
    gesture_task.abort();

    Ok(())
}

fn handle_cli_args() -> bool {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return false;
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            true
        }
        "-V" | "--version" => {
            println!("hoopboard {}", env!("CARGO_PKG_VERSION"));
            true
        }
        "--print-config" => {
            if let Some(path) = config_path() {
                eprintln!("# {}", path.display());
            }
            let settings = AppSettings::load_reporting(|e| {
                eprintln!("warning: {e}; using default settings");
            });
            println!("{}", settings.to_json_pretty());
            true
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "hoopboard - basketball scoreboard for the terminal

Usage:
  hoopboard
  hoopboard --help
  hoopboard --version
  hoopboard --print-config

Environment:
  HOOPBOARD_CONFIG   Path to a JSON settings file
                     (default $XDG_CONFIG_HOME/hoopboard/config.json)
  HOOPBOARD_LOG      Log level: error, warn, info, debug or trace"
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    mut ui_events: mpsc::Receiver<UiEvent>,
) {
    {
        let mut app_guard = app.lock().await;
        draw::draw(&mut terminal, &mut app_guard);
    }

    while let Some(ui_event) = ui_events.recv().await {
        if handle_ui_event(ui_event, &app).await {
            let mut app_guard = app.lock().await;
            draw::draw(&mut terminal, &mut app_guard);
        }
    }
}

async fn handle_ui_event(ui_event: UiEvent, app: &Arc<Mutex<App>>) -> bool {
    match ui_event {
        UiEvent::KeyPressed(key_event) => {
            keys::handle_key_bindings(key_event, app).await;
            true
        }
        UiEvent::Resize => true,
        UiEvent::ClockTick => {
            let mut guard = app.lock().await;
            guard.on_clock_tick();
            true
        }
        UiEvent::GestureTick => {
            let mut guard = app.lock().await;
            guard.on_gesture_tick(Instant::now())
        }
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        match crossterm_event::read() {
            Ok(event) => {
                let ui_event = match event {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        Some(UiEvent::KeyPressed(key_event))
                    }
                    Event::Resize(_, _) => Some(UiEvent::Resize),
                    _ => None,
                };

                if let Some(ui_event) = ui_event
                    && ui_events.send(ui_event).await.is_err()
                {
                    break;
                }
            }
            Err(e) => warn!("failed to read terminal event: {e}"),
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

/// Restore the terminal. Best effort: runs from the panic hook too.
pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::MoveTo(0, 0));
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
