use crate::components::team_panel::{FOCUS_COLOR, name_badge};
use hoopboard_core::{PlayerId, Team};
use tui::buffer::Buffer;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::Line;
use tui::widgets::{Paragraph, Widget};

pub const ROSTER_COLUMNS: usize = 5;
const CELL_HEIGHT: u16 = 1;

/// Roster sheet shown in place of the foul row while a team is being edited.
pub struct RosterSheet<'a> {
    pub team: &'a Team,
    pub header_focused: bool,
    pub focused_player: Option<PlayerId>,
}

/// `#23 ·2` style label for one roster slot.
pub fn player_label(number: u32, fouls: u32) -> String {
    if fouls == 0 {
        format!("#{number}")
    } else {
        format!("#{number} ·{fouls}")
    }
}

impl Widget for RosterSheet<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, hint_area, grid_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        Paragraph::new(name_badge(self.team, self.header_focused))
            .alignment(Alignment::Center)
            .render(header_area, buf);
        Paragraph::new("tap a player to foul · hold a player to delete · hold the name to add")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .render(hint_area, buf);

        if self.team.players.is_empty() {
            Paragraph::new("NO PLAYERS")
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center)
                .render(grid_area, buf);
            return;
        }

        if grid_area.width == 0 || grid_area.height == 0 {
            return;
        }

        let col_width = (grid_area.width / ROSTER_COLUMNS as u16).max(1);
        for (idx, player) in self.team.players.iter().enumerate() {
            let row = (idx / ROSTER_COLUMNS) as u16;
            let col = (idx % ROSTER_COLUMNS) as u16;
            let y = grid_area.y + row * (CELL_HEIGHT + 1);
            if y >= grid_area.bottom() {
                break;
            }
            let cell = Rect::new(grid_area.x + col * col_width, y, col_width, CELL_HEIGHT);

            let style = if Some(player.id) == self.focused_player {
                Style::default()
                    .fg(Color::Black)
                    .bg(FOCUS_COLOR)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Paragraph::new(Line::from(player_label(player.number, player.fouls)))
                .style(style)
                .alignment(Alignment::Center)
                .render(cell, buf);
        }
    }
}
