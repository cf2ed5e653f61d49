use crate::components::digits::{BigDigits, GLYPH_HEIGHT};
use hoopboard_core::{Team, TeamColor};
use tui::buffer::Buffer;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

pub const FOCUS_COLOR: Color = Color::Yellow;
pub const SCORE_COLOR: Color = Color::Red;

pub fn team_color(color: TeamColor) -> Color {
    match color {
        TeamColor::Red => Color::Red,
        TeamColor::Blue => Color::Blue,
        TeamColor::Green => Color::Green,
        TeamColor::Yellow => Color::Yellow,
        TeamColor::Magenta => Color::Magenta,
        TeamColor::Cyan => Color::Cyan,
        TeamColor::White => Color::White,
        TeamColor::Orange => Color::Rgb(255, 165, 0),
        TeamColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
    }
}

/// Name badge in the team's color. Dark text on light backgrounds.
pub fn name_badge(team: &Team, focused: bool) -> Line<'static> {
    let fg = match team.color {
        TeamColor::Yellow | TeamColor::White | TeamColor::Cyan | TeamColor::Orange => Color::Black,
        _ => Color::White,
    };
    let mut style = Style::default()
        .bg(team_color(team.color))
        .fg(fg)
        .add_modifier(Modifier::BOLD);
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    Line::from(Span::styled(format!(" {} ", team.name), style))
}

/// One side of the board: name badge over a big score.
pub struct TeamPanel<'a> {
    pub team: &'a Team,
    pub name_focused: bool,
    pub score_focused: bool,
}

impl Widget for TeamPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [name_area, score_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

        let name = Paragraph::new(name_badge(self.team, self.name_focused)).alignment(Alignment::Center);
        let name = if self.name_focused {
            name.style(Style::default().fg(FOCUS_COLOR))
        } else {
            name
        };
        name.render(name_area, buf);

        let border = if self.score_focused { FOCUS_COLOR } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(score_area);
        block.render(score_area, buf);

        let score = self.team.display_score();
        let digits_area = if inner.height > GLYPH_HEIGHT {
            Rect { height: GLYPH_HEIGHT, ..inner }
        } else {
            inner
        };
        BigDigits::new(&score)
            .style(Style::default().fg(SCORE_COLOR))
            .render(digits_area, buf);
    }
}
