use tui::layout::{Constraint, Layout, Rect, Size};

pub const STATUS_BAR_HEIGHT: u16 = 1;
pub const TIMER_HEIGHT: u16 = 7;
pub const TEAMS_HEIGHT: u16 = 9;
pub const PERIOD_WIDTH: u16 = 14;

/// Pre-computed layout areas for the main draw loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutAreas {
    pub timer: Rect,
    pub home: Rect,
    pub period: Rect,
    pub guest: Rect,
    /// Foul row, or the roster sheet while a team is being edited.
    pub bottom: Rect,
    pub status_bar: Rect,
}

impl LayoutAreas {
    pub fn new(size: Size) -> Self {
        let rect = Rect::new(0, 0, size.width, size.height);
        Self::from_rect(rect, false)
    }

    pub fn update(&mut self, area: Rect, full_screen: bool) {
        *self = Self::from_rect(area, full_screen);
    }

    fn from_rect(area: Rect, full_screen: bool) -> Self {
        let status_height = if full_screen { 0 } else { STATUS_BAR_HEIGHT };
        let [timer_row, teams_row, bottom, status_bar] = Layout::vertical([
            Constraint::Length(TIMER_HEIGHT),
            Constraint::Length(TEAMS_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(status_height),
        ])
        .areas(area);

        let [_, timer, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(40),
            Constraint::Fill(1),
        ])
        .areas(timer_row);

        let [home, period, guest] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(PERIOD_WIDTH),
            Constraint::Fill(1),
        ])
        .areas(teams_row);

        LayoutAreas {
            timer,
            home,
            period,
            guest,
            bottom,
            status_bar,
        }
    }
}

/// Centered popover of at most `width` x `height` cells.
pub fn popover_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
