pub const MAX_MINUTES: u32 = 60;
pub const MAX_SECONDS: u32 = 59;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
}

/// Game clock. `remaining` counts down once per tick while running and is
/// reloaded from the configured countdown when started from zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    minutes: u32,
    seconds: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new(minutes: u32, seconds: u32) -> Self {
        let mut timer = Self {
            minutes: 0,
            seconds: 0,
            remaining: 0,
            running: false,
        };
        timer.configure(minutes, seconds);
        timer
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reload value in seconds.
    pub fn countdown_interval(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    pub fn phase(&self) -> TimerPhase {
        match (self.running, self.remaining) {
            (true, _) => TimerPhase::Running,
            (false, 0) => TimerPhase::Idle,
            (false, _) => TimerPhase::Paused,
        }
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.running = false;
            return;
        }
        if self.remaining == 0 {
            self.remaining = self.countdown_interval();
        }
        // A 00:00 countdown has nothing to run.
        self.running = self.remaining > 0;
    }

    /// Advance one second. Returns true when this tick ran the clock out.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.remaining = 0;
        self.running = false;
    }

    /// Set the reload value. An in-progress countdown keeps its remaining time.
    pub fn configure(&mut self, minutes: u32, seconds: u32) {
        self.minutes = minutes.min(MAX_MINUTES);
        self.seconds = seconds.min(MAX_SECONDS);
    }

    /// Shift the configured minutes by `delta`, clamped to the valid range.
    pub fn step_minutes(&mut self, delta: i32) {
        let minutes = (self.minutes as i64 + delta as i64).clamp(0, MAX_MINUTES as i64);
        self.minutes = minutes as u32;
    }

    /// `MM:SS` of the remaining time, or of the configured countdown when idle.
    pub fn display(&self) -> String {
        let interval = if self.remaining > 0 {
            self.remaining
        } else {
            self.countdown_interval()
        };
        format!("{:02}:{:02}", interval / 60, interval % 60)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(20, 0)
    }
}
