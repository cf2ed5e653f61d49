use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    /// One second of game clock.
    ClockTick,
    /// Fast poll that lets pending multi-taps settle.
    GestureTick,
}
