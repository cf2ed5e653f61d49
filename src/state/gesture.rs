use hoopboard_core::{Event, Gesture, Target};
use std::time::{Duration, Instant};

pub const DEFAULT_MULTI_TAP: Duration = Duration::from_millis(350);

#[derive(Debug, Clone, Copy)]
struct PendingTaps {
    target: Target,
    count: u8,
    last: Instant,
}

/// Coalesces repeated taps on one target into double and triple taps.
///
/// A tap is held back until the multi-tap window passes without another tap
/// on the same target. The third tap fires straight away since nothing can
/// follow it.
#[derive(Debug)]
pub struct TapRecognizer {
    window: Duration,
    pending: Option<PendingTaps>,
}

impl TapRecognizer {
    pub fn new(window: Duration) -> Self {
        Self { window, pending: None }
    }

    /// Register a tap. May return a gesture that is now complete: either the
    /// previous target's taps (interrupted by this one) or a triple tap.
    pub fn press(&mut self, target: Target, now: Instant) -> Option<Event> {
        let mut settled = None;

        match self.pending.take() {
            Some(mut p) if p.target == target && now.duration_since(p.last) < self.window => {
                p.count += 1;
                p.last = now;
                if p.count >= 3 {
                    return Some(gesture_event(p));
                }
                self.pending = Some(p);
                return None;
            }
            Some(p) => settled = Some(gesture_event(p)),
            None => {}
        }

        self.pending = Some(PendingTaps { target, count: 1, last: now });
        settled
    }

    /// Emit the pending gesture once its window has passed.
    pub fn poll(&mut self, now: Instant) -> Option<Event> {
        let p = self.pending?;
        if now.duration_since(p.last) >= self.window {
            self.pending = None;
            return Some(gesture_event(p));
        }
        None
    }

    /// Emit whatever is pending right away.
    pub fn flush(&mut self) -> Option<Event> {
        self.pending.take().map(gesture_event)
    }

    #[cfg(test)]
    pub fn pending_count(&self) -> u8 {
        self.pending.map(|p| p.count).unwrap_or(0)
    }
}

impl Default for TapRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_MULTI_TAP)
    }
}

fn gesture_event(p: PendingTaps) -> Event {
    Event::Gesture {
        kind: Gesture::from_tap_count(p.count),
        target: p.target,
    }
}
