use crate::state::messages::UiEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

/// Drives the game clock at 1 Hz.
pub struct ClockTicker {
    ui_events: mpsc::Sender<UiEvent>,
    period: Duration,
}

impl ClockTicker {
    pub fn new(ui_events: mpsc::Sender<UiEvent>) -> Self {
        Self {
            ui_events,
            period: Duration::from_secs(1),
        }
    }

    pub async fn run(self) {
        let mut clock = interval(self.period);
        // A late tick must not make the clock jump two seconds at once.
        clock.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // Skip the immediate first tick so the clock doesn't lose a second on start.
        clock.tick().await;

        loop {
            clock.tick().await;
            if self.ui_events.send(UiEvent::ClockTick).await.is_err() {
                break;
            }
        }
    }
}
