use chrono::Local;
use log::error;
use std::io::Stdout;
use tui::backend::CrosstermBackend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::App;
use crate::components::digits::BigDigits;
use crate::components::roster::RosterSheet;
use crate::components::team_panel::{FOCUS_COLOR, SCORE_COLOR, TeamPanel, name_badge};
use crate::ui::layout::{LayoutAreas, popover_area};
use hoopboard_core::{Scoreboard, Target, TeamRole, TimerPhase, UiMode};

const ORANGE: Color = Color::Rgb(255, 165, 0);
const LOG_PANE_HEIGHT: u16 = 10;

static HELP_LINES: &[(&str, &str)] = &[
    ("Tab / arrows / h j k l", "move focus"),
    ("Space", "tap (repeat quickly for double / triple)"),
    ("1 2 3", "single / double / triple tap"),
    ("Enter", "long-press"),
    ("t", "start / pause the clock"),
    ("Esc", "close the roster sheet"),
    ("f", "full screen"),
    ("\"", "show logs"),
    ("q", "quit"),
];

pub fn draw(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) {
    if let Err(e) = terminal.draw(|f| render(f, app)) {
        error!("draw failed: {e}");
    }
}

pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if area.width <= 10 || area.height <= 10 {
        f.render_widget(Paragraph::new("Too small"), area);
        return;
    }

    let board_area = if app.state.show_logs {
        let [board, logs] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(LOG_PANE_HEIGHT)]).areas(area);
        draw_logs(f, logs);
        board
    } else {
        area
    };

    let focus = app.focused();
    let mut layout = LayoutAreas::new(board_area.as_size());
    layout.update(board_area, app.settings.full_screen);

    let session = &app.state.session;
    let board = &session.board;
    // No focus highlight while a popover is open.
    let focus = if session.mode.is_modal() { None } else { Some(focus) };

    draw_timer(f, layout.timer, board, focus == Some(Target::Timer));
    draw_team(f, layout.home, board, TeamRole::Home, focus);
    draw_period(f, layout.period, board.period, focus == Some(Target::Period));
    draw_team(f, layout.guest, board, TeamRole::Guest, focus);

    match roster_team(&session.mode) {
        Some(team) => draw_roster(f, layout.bottom, board, team, focus),
        None => draw_foul_row(f, layout.bottom, board, focus),
    }

    if !app.settings.full_screen {
        draw_status_bar(f, layout.status_bar, app);
    }

    draw_popover(f, board_area, app);

    if app.state.show_help {
        draw_help(f, board_area);
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn focus_border<'a>(focused: bool, idle: Color) -> Block<'a> {
    default_border(if focused { FOCUS_COLOR } else { idle })
}

/// The team whose roster sheet is open, including prompts raised from it.
fn roster_team(mode: &UiMode) -> Option<TeamRole> {
    match mode {
        UiMode::EditingTeam(team)
        | UiMode::AddingPlayer { team, .. }
        | UiMode::ConfirmingDelete { team, .. } => Some(*team),
        _ => None,
    }
}

fn draw_timer(f: &mut Frame, area: Rect, board: &Scoreboard, focused: bool) {
    let title = match board.timer.phase() {
        TimerPhase::Running => " RUNNING ",
        TimerPhase::Paused => " PAUSED ",
        TimerPhase::Idle => " CLOCK ",
    };
    let block = focus_border(focused, Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let display = board.timer.display();
    f.render_widget(
        BigDigits::new(&display).style(Style::default().fg(ORANGE)),
        inner,
    );
}

fn draw_team(f: &mut Frame, area: Rect, board: &Scoreboard, role: TeamRole, focus: Option<Target>) {
    let area = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };
    f.render_widget(
        TeamPanel {
            team: board.team(role),
            name_focused: focus == Some(Target::TeamName(role)),
            score_focused: focus == Some(Target::Score(role)),
        },
        area,
    );
}

fn draw_period(f: &mut Frame, area: Rect, period: u32, focused: bool) {
    let [label, value] = Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).areas(area);
    f.render_widget(
        Paragraph::new("PERIOD")
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        Rect { y: label.y + 1, height: 1, ..label },
    );

    let block = focus_border(focused, Color::DarkGray);
    let inner = block.inner(value);
    f.render_widget(block, value);
    let text = period.to_string();
    f.render_widget(BigDigits::new(&text).style(Style::default().fg(ORANGE)), inner);
}

fn draw_foul_row(f: &mut Frame, area: Rect, board: &Scoreboard, focus: Option<Target>) {
    let [home, middle, guest] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Fill(1),
    ])
    .areas(area);

    let home_fouls = board.home.fouls().to_string();
    let guest_fouls = board.guest.fouls().to_string();
    let last_foul = board.last_fouled_display();

    draw_counter(f, home, "FOULS", &home_fouls, ORANGE, focus == Some(Target::Fouls(TeamRole::Home)));
    draw_counter(f, middle, "PLAYER · GAME", &last_foul, SCORE_COLOR, focus == Some(Target::LastFoul));
    draw_counter(f, guest, "FOULS", &guest_fouls, ORANGE, focus == Some(Target::Fouls(TeamRole::Guest)));
}

fn draw_counter(f: &mut Frame, area: Rect, label: &str, value: &str, color: Color, focused: bool) {
    let block = focus_border(focused, Color::DarkGray).title(Line::from(format!(" {label} ")).centered());
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(BigDigits::new(value).style(Style::default().fg(color)), inner);
}

fn draw_roster(f: &mut Frame, area: Rect, board: &Scoreboard, team: TeamRole, focus: Option<Target>) {
    let block = default_border(Color::White).title(" ROSTER ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let focused_player = match focus {
        Some(Target::Player(id)) => Some(id),
        _ => None,
    };
    f.render_widget(
        RosterSheet {
            team: board.team(team),
            header_focused: focus == Some(Target::Fouls(team)),
            focused_player,
        },
        inner,
    );
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let session = &app.state.session;
    let left = Line::from(vec![
        Span::styled(
            format!(" {} ", session.mode.label()),
            Style::default().fg(Color::Black).bg(Color::Gray),
        ),
        Span::raw(format!(
            "  {} {} – {} {}",
            session.board.home.name,
            session.board.home.score,
            session.board.guest.score,
            session.board.guest.name
        )),
    ]);
    let right = format!("{}  ?=help ", Local::now().format("%H:%M"));

    let [left_area, right_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(right.chars().count() as u16)])
            .areas(area);
    f.render_widget(Paragraph::new(left), left_area);
    f.render_widget(
        Paragraph::new(right)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right),
        right_area,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    f.render_widget(
        TuiLoggerWidget::default().block(default_border(Color::DarkGray).title(" Logs ")),
        area,
    );
}

// ---------------------------------------------------------------------------
// Popovers and prompts
// ---------------------------------------------------------------------------

fn draw_popover(f: &mut Frame, area: Rect, app: &App) {
    let board = &app.state.session.board;
    let key = Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::DarkGray);

    let (title, lines): (&str, Vec<Line>) = match &app.state.session.mode {
        UiMode::Idle | UiMode::EditingTeam(_) => return,
        UiMode::ConfirmingNextPeriod => (
            " Next period? ",
            vec![
                Line::from("This will reset the timer."),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Enter", key),
                    Span::raw(" Yes   "),
                    Span::styled("Esc", key),
                    Span::raw(" Cancel"),
                ]),
            ],
        ),
        UiMode::ConfirmingDelete { player, .. } => {
            let number = board
                .player(*player)
                .map(|(_, p)| p.number.to_string())
                .unwrap_or_else(|| "?".to_string());
            (
                " Delete player ",
                vec![
                    Line::from(format!("Are you sure you want to delete player #{number}?")),
                    Line::from(Span::styled("This cannot be undone.", dim)),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Enter", key),
                        Span::raw(" Delete   "),
                        Span::styled("Esc", key),
                        Span::raw(" Cancel"),
                    ]),
                ],
            )
        }
        UiMode::AddingPlayer { input, .. } => (
            " Add player ",
            vec![
                Line::from("Please enter player numbers, separated by a comma."),
                Line::from(""),
                Line::from(vec![
                    Span::styled("> ", key),
                    Span::raw(input.clone()),
                    Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
                ]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Enter", key),
                    Span::raw(" Add   "),
                    Span::styled("Esc", key),
                    Span::raw(" Cancel"),
                ]),
            ],
        ),
        UiMode::ConfiguringTimer => {
            let timer = &board.timer;
            (
                " Clock ",
                vec![
                    Line::from(vec![
                        Span::raw("Countdown  "),
                        Span::styled(
                            format!("{:02}:{:02}", timer.minutes(), timer.seconds()),
                            Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled("used the next time the clock starts from zero", dim)),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("↑/↓", key),
                        Span::raw(" minutes  "),
                        Span::styled("←/→", key),
                        Span::raw(" seconds  "),
                        Span::styled("r", key),
                        Span::raw(" reset  "),
                        Span::styled("Enter", key),
                        Span::raw(" done"),
                    ]),
                ],
            )
        }
        UiMode::AdjustingScore(team) => {
            let team = board.team(*team);
            (
                " Score ",
                vec![
                    Line::from(vec![
                        Span::raw(format!("{}  ", team.name)),
                        Span::styled(
                            team.score.to_string(),
                            Style::default().fg(SCORE_COLOR).add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("↑/↓", key),
                        Span::raw(" ±1  "),
                        Span::styled("PgUp/PgDn", key),
                        Span::raw(" ±10  "),
                        Span::styled("Enter", key),
                        Span::raw(" done"),
                    ]),
                ],
            )
        }
        UiMode::TeamSettings(team) => {
            let team = board.team(*team);
            (
                " Team ",
                vec![
                    Line::from(vec![
                        Span::raw("Name   "),
                        Span::raw(team.name.clone()),
                        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
                    ]),
                    Line::from(vec![Span::raw("Color  "), name_badge(team, false).spans[0].clone()]),
                    Line::from(Span::styled(format!("       {}", team.color), dim)),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("←/→", key),
                        Span::raw(" color  "),
                        Span::styled("Enter", key),
                        Span::raw(" done"),
                    ]),
                ],
            )
        }
    };

    let width = lines.iter().map(|l| l.width() as u16).max().unwrap_or(0) + 4;
    let height = lines.len() as u16 + 2;
    let popover = popover_area(area, width.max(30), height);
    f.render_widget(Clear, popover);
    f.render_widget(
        Paragraph::new(lines).block(default_border(FOCUS_COLOR).title(title)),
        popover,
    );
}

fn draw_help(f: &mut Frame, area: Rect) {
    let key = Style::default().fg(FOCUS_COLOR).add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![Span::styled(format!("{keys:<24}"), key), Span::raw(*action)])
        })
        .collect();
    let height = lines.len() as u16 + 2;
    let popover = popover_area(area, 70, height);
    f.render_widget(Clear, popover);
    f.render_widget(
        Paragraph::new(lines).block(default_border(Color::White).title(" Keys ")),
        popover,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::app_settings::AppSettings;
    use hoopboard_core::Event;
    use tui::backend::TestBackend;

    fn screen(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        terminal.draw(|f| render(f, app)).expect("draw");
        let buf = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_board_shows_team_names_and_labels() {
        let mut app = App::new(AppSettings::default());
        let text = screen(&mut app, 100, 32);
        assert!(text.contains(" HOME "));
        assert!(text.contains(" GUEST "));
        assert!(text.contains("PERIOD"));
        assert!(text.contains("FOULS"));
        assert!(text.contains("PLAYER · GAME"));
        assert!(text.contains("Board"));
    }

    #[test]
    fn test_next_period_prompt_is_drawn() {
        let mut app = App::new(AppSettings::default());
        app.dispatch(Event::tap(Target::Period));
        let text = screen(&mut app, 100, 32);
        assert!(text.contains("Next period?"));
        assert!(text.contains("This will reset the timer."));
    }

    #[test]
    fn test_roster_sheet_replaces_foul_row() {
        let mut app = App::new(AppSettings::default());
        app.state.session.board.add_players(TeamRole::Guest, "23,23");
        app.dispatch(Event::tap(Target::Fouls(TeamRole::Guest)));
        let text = screen(&mut app, 100, 32);
        assert!(text.contains("ROSTER"));
        assert_eq!(text.matches("#23").count(), 2);
        assert!(!text.contains("PLAYER · GAME"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::new(AppSettings::default());
        let text = screen(&mut app, 10, 10);
        assert!(text.contains("Too small"));
    }
}
