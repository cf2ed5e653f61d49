use crate::board::Scoreboard;
use crate::config::BoardConfig;
use crate::{PlayerId, TeamRole};
use log::debug;

/// Longest team name accepted from the settings popover.
pub const MAX_NAME_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    DoubleTap,
    TripleTap,
    LongPress,
}

impl Gesture {
    /// Points scored when this gesture lands on a team score.
    pub fn points(&self) -> Option<u32> {
        match self {
            Gesture::Tap => Some(1),
            Gesture::DoubleTap => Some(2),
            Gesture::TripleTap => Some(3),
            Gesture::LongPress => None,
        }
    }

    pub fn from_tap_count(count: u8) -> Self {
        match count {
            0 | 1 => Gesture::Tap,
            2 => Gesture::DoubleTap,
            _ => Gesture::TripleTap,
        }
    }
}

/// Anything on the board a gesture can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Timer,
    Period,
    Score(TeamRole),
    TeamName(TeamRole),
    Fouls(TeamRole),
    /// The PLAYER/GAME slot.
    LastFoul,
    Player(PlayerId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Gesture { kind: Gesture, target: Target },
    Confirm,
    Cancel,
    Input(char),
    Backspace,
    Step(i32),
    SetCountdown { minutes: u32, seconds: u32 },
    ResetTimer,
    Tick,
}

impl Event {
    pub fn tap(target: Target) -> Self {
        Event::Gesture { kind: Gesture::Tap, target }
    }

    pub fn long_press(target: Target) -> Self {
        Event::Gesture { kind: Gesture::LongPress, target }
    }
}

/// Which popover, sheet or prompt is open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Idle,
    /// Roster sheet for one team: tap a player to foul, hold to delete.
    EditingTeam(TeamRole),
    /// Name and color popover.
    TeamSettings(TeamRole),
    /// Score stepper popover.
    AdjustingScore(TeamRole),
    AddingPlayer { team: TeamRole, input: String },
    ConfirmingDelete { team: TeamRole, player: PlayerId },
    ConfirmingNextPeriod,
    ConfiguringTimer,
}

impl UiMode {
    pub fn label(&self) -> &'static str {
        match self {
            UiMode::Idle => "Board",
            UiMode::EditingTeam(_) => "Roster",
            UiMode::TeamSettings(_) => "Team settings",
            UiMode::AdjustingScore(_) => "Adjust score",
            UiMode::AddingPlayer { .. } => "Add player",
            UiMode::ConfirmingDelete { .. } => "Delete player",
            UiMode::ConfirmingNextPeriod => "Next period",
            UiMode::ConfiguringTimer => "Clock",
        }
    }

    /// Modal prompts swallow board gestures until they are answered.
    pub fn is_modal(&self) -> bool {
        !matches!(self, UiMode::Idle | UiMode::EditingTeam(_))
    }

    /// Prompts that take typed characters.
    pub fn accepts_text(&self) -> bool {
        matches!(self, UiMode::AddingPlayer { .. } | UiMode::TeamSettings(_))
    }
}

/// Board plus the open UI mode. This is everything the view renders.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub board: Scoreboard,
    pub mode: UiMode,
}

impl Session {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            board: Scoreboard::new(config),
            mode: UiMode::Idle,
        }
    }

    pub fn apply(&mut self, event: Event) {
        let session = std::mem::take(self);
        *self = reduce(session, event);
    }
}

/// Apply one event. Every mutation of the game goes through here.
pub fn reduce(session: Session, event: Event) -> Session {
    let Session { mut board, mode } = session;
    debug!("{:?} <- {:?}", mode, event);

    let mode = match (mode, event) {
        // The clock keeps running behind every popover.
        (mode, Event::Tick) => {
            board.tick();
            mode
        }

        // Roster sheet
        (UiMode::EditingTeam(team), Event::Gesture { kind: Gesture::Tap, target: Target::Player(id) })
            if board.team(team).player(id).is_some() =>
        {
            board.add_foul(id);
            UiMode::Idle
        }
        (
            UiMode::EditingTeam(team),
            Event::Gesture { kind: Gesture::LongPress, target: Target::Player(player) },
        ) if board.team(team).player(player).is_some() => UiMode::ConfirmingDelete { team, player },
        // The sheet header sits where the FOULS display was.
        (UiMode::EditingTeam(team), Event::Gesture { kind: Gesture::Tap, target: Target::Fouls(t) })
            if t == team =>
        {
            UiMode::Idle
        }
        (
            UiMode::EditingTeam(team),
            Event::Gesture { kind: Gesture::LongPress, target: Target::Fouls(t) },
        ) if t == team => UiMode::AddingPlayer { team, input: String::new() },
        (UiMode::EditingTeam(_), Event::Cancel) => UiMode::Idle,

        // Board gestures, available with or without the roster sheet open
        (mode @ (UiMode::Idle | UiMode::EditingTeam(_)), Event::Gesture { kind, target }) => {
            board_gesture(&mut board, mode, kind, target)
        }
        // The clock can be started or paused from any prompt that isn't taking text.
        (mode, Event::Gesture { kind: Gesture::Tap, target: Target::Timer }) if !mode.accepts_text() => {
            board.toggle_timer();
            mode
        }

        // Add player prompt
        (UiMode::AddingPlayer { team, mut input }, Event::Input(c)) => {
            input.push(c);
            UiMode::AddingPlayer { team, input }
        }
        (UiMode::AddingPlayer { team, mut input }, Event::Backspace) => {
            input.pop();
            UiMode::AddingPlayer { team, input }
        }
        (UiMode::AddingPlayer { team, input }, Event::Confirm) => {
            board.add_players(team, &input);
            UiMode::EditingTeam(team)
        }
        (UiMode::AddingPlayer { team, .. }, Event::Cancel) => UiMode::EditingTeam(team),

        // Delete player prompt
        (UiMode::ConfirmingDelete { team, player }, Event::Confirm) => {
            board.delete_player(team, player);
            UiMode::EditingTeam(team)
        }
        (UiMode::ConfirmingDelete { team, .. }, Event::Cancel) => UiMode::EditingTeam(team),

        // Next period prompt
        (UiMode::ConfirmingNextPeriod, Event::Confirm) => {
            board.confirm_next_period();
            UiMode::Idle
        }
        (UiMode::ConfirmingNextPeriod, Event::Cancel) => UiMode::Idle,

        // Clock popover
        (UiMode::ConfiguringTimer, Event::SetCountdown { minutes, seconds }) => {
            board.configure_countdown(minutes, seconds);
            UiMode::ConfiguringTimer
        }
        (UiMode::ConfiguringTimer, Event::Step(delta)) => {
            board.timer.step_minutes(delta);
            UiMode::ConfiguringTimer
        }
        (UiMode::ConfiguringTimer, Event::ResetTimer) => {
            board.reset_timer();
            UiMode::ConfiguringTimer
        }
        (UiMode::ConfiguringTimer, Event::Confirm | Event::Cancel) => UiMode::Idle,

        // Score stepper
        (UiMode::AdjustingScore(team), Event::Step(delta)) => {
            board.adjust_score(team, delta);
            UiMode::AdjustingScore(team)
        }
        (UiMode::AdjustingScore(_), Event::Confirm | Event::Cancel) => UiMode::Idle,

        // Team name and color, bound live
        (UiMode::TeamSettings(team), Event::Input(c)) => {
            let name = &mut board.team_mut(team).name;
            if name.chars().count() < MAX_NAME_LEN {
                name.push(c);
            }
            UiMode::TeamSettings(team)
        }
        (UiMode::TeamSettings(team), Event::Backspace) => {
            board.team_mut(team).name.pop();
            UiMode::TeamSettings(team)
        }
        (UiMode::TeamSettings(team), Event::Step(delta)) => {
            let color = board.team(team).color.shift(delta);
            board.set_team_color(team, color);
            UiMode::TeamSettings(team)
        }
        (UiMode::TeamSettings(team), Event::Confirm | Event::Cancel) => {
            // A blank name may be typed over but never kept.
            if board.team(team).name.trim().is_empty() {
                board.set_team_name(team, team.label());
            }
            UiMode::Idle
        }

        (mode, _) => mode,
    };

    Session { board, mode }
}

fn board_gesture(board: &mut Scoreboard, mode: UiMode, kind: Gesture, target: Target) -> UiMode {
    match (kind, target) {
        (Gesture::Tap, Target::Timer) => {
            board.toggle_timer();
            mode
        }
        (Gesture::LongPress, Target::Timer) => UiMode::ConfiguringTimer,
        (Gesture::Tap, Target::Period) => UiMode::ConfirmingNextPeriod,
        (Gesture::LongPress, Target::Score(team)) => UiMode::AdjustingScore(team),
        (kind, Target::Score(team)) => {
            if let Some(points) = kind.points() {
                board.increment_score(team, points);
            }
            mode
        }
        (Gesture::LongPress, Target::TeamName(team)) => UiMode::TeamSettings(team),
        (Gesture::Tap, Target::Fouls(team)) if mode == UiMode::Idle => UiMode::EditingTeam(team),
        (Gesture::LongPress, Target::LastFoul) if mode == UiMode::Idle => {
            board.undo_foul();
            mode
        }
        _ => mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: Session, events: impl IntoIterator<Item = Event>) -> Session {
        events.into_iter().fold(session, reduce)
    }

    fn gesture(kind: Gesture, target: Target) -> Event {
        Event::Gesture { kind, target }
    }

    fn with_roster(team: TeamRole, raw: &str) -> (Session, Vec<PlayerId>) {
        let mut session = Session::default();
        let ids = session.board.add_players(team, raw);
        (session, ids)
    }

    #[test]
    fn test_game_scenario() {
        let home = Target::Score(TeamRole::Home);
        let session = run(
            Session::default(),
            [
                gesture(Gesture::Tap, home),
                gesture(Gesture::DoubleTap, home),
                gesture(Gesture::TripleTap, home),
                Event::tap(Target::Period),
            ],
        );
        assert_eq!(session.board.home.score, 6);
        assert_eq!(session.mode, UiMode::ConfirmingNextPeriod);

        let session = run(session, [Event::Confirm, Event::tap(Target::Timer)]);
        assert_eq!(session.board.period, 2);
        assert_eq!(session.mode, UiMode::Idle);
        assert_eq!(session.board.timer.remaining(), 1200);

        let session = run(session, [Event::Tick]);
        assert_eq!(session.board.timer.remaining(), 1199);

        let session = run(session, std::iter::repeat_n(Event::Tick, 1300));
        assert_eq!(session.board.timer.remaining(), 0);
        assert!(!session.board.timer.is_running());
    }

    #[test]
    fn test_cancel_next_period_keeps_period() {
        let session = run(Session::default(), [Event::tap(Target::Period), Event::Cancel]);
        assert_eq!(session.board.period, 1);
        assert_eq!(session.mode, UiMode::Idle);
    }

    #[test]
    fn test_modal_prompt_swallows_board_gestures() {
        let session = run(
            Session::default(),
            [Event::tap(Target::Period), Event::tap(Target::Score(TeamRole::Guest))],
        );
        assert_eq!(session.board.guest.score, 0);
        assert_eq!(session.mode, UiMode::ConfirmingNextPeriod);
    }

    #[test]
    fn test_tick_runs_behind_popovers() {
        let session = run(
            Session::default(),
            [
                Event::tap(Target::Timer),
                Event::long_press(Target::Timer),
                Event::Tick,
            ],
        );
        assert_eq!(session.mode, UiMode::ConfiguringTimer);
        assert_eq!(session.board.timer.remaining(), 1199);
    }

    #[test]
    fn test_timer_popover() {
        let session = run(
            Session::default(),
            [
                Event::long_press(Target::Timer),
                Event::SetCountdown { minutes: 12, seconds: 30 },
                Event::Step(-2),
                Event::Confirm,
                Event::tap(Target::Timer),
            ],
        );
        assert_eq!(session.mode, UiMode::Idle);
        assert_eq!(session.board.timer.remaining(), 10 * 60 + 30);

        let session = run(
            session,
            [Event::long_press(Target::Timer), Event::ResetTimer, Event::Cancel],
        );
        assert_eq!(session.board.timer.remaining(), 0);
        assert!(!session.board.timer.is_running());
    }

    #[test]
    fn test_score_stepper() {
        let session = run(
            Session::default(),
            [
                Event::long_press(Target::Score(TeamRole::Guest)),
                Event::Step(10),
                Event::Step(-3),
                Event::Step(-100),
                Event::Step(2),
                Event::Confirm,
            ],
        );
        assert_eq!(session.board.guest.score, 2);
        assert_eq!(session.mode, UiMode::Idle);
    }

    #[test]
    fn test_team_settings_edit_name_and_color() {
        let mut events = vec![Event::long_press(Target::TeamName(TeamRole::Home))];
        events.extend(std::iter::repeat_n(Event::Backspace, 4));
        events.extend("BULLS".chars().map(Event::Input));
        events.push(Event::Step(1));
        events.push(Event::Confirm);
        let session = run(Session::default(), events);
        assert_eq!(session.board.home.name, "BULLS");
        assert_eq!(session.board.home.color, crate::TeamColor::Blue);
        assert_eq!(session.mode, UiMode::Idle);
    }

    #[test]
    fn test_team_name_is_length_capped() {
        let mut events = vec![Event::long_press(Target::TeamName(TeamRole::Guest))];
        events.extend(std::iter::repeat_n(Event::Input('X'), 40));
        let session = run(Session::default(), events);
        assert_eq!(session.board.guest.name.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn test_blank_team_name_falls_back_to_role_label() {
        let mut events = vec![Event::long_press(Target::TeamName(TeamRole::Guest))];
        events.extend(std::iter::repeat_n(Event::Backspace, 10));
        let session = run(Session::default(), events);
        assert_eq!(session.board.guest.name, "");

        let session = run(session, [Event::Input(' '), Event::Confirm]);
        assert_eq!(session.board.guest.name, "GUEST");
        assert_eq!(session.mode, UiMode::Idle);
    }

    #[test]
    fn test_long_roster_entry_keeps_every_number() {
        let raw = (10..30).map(|n| n.to_string()).collect::<Vec<_>>().join(", ");
        assert!(raw.len() > 64);

        let mut events = vec![
            Event::tap(Target::Fouls(TeamRole::Home)),
            Event::long_press(Target::Fouls(TeamRole::Home)),
        ];
        events.extend(raw.chars().map(Event::Input));
        events.push(Event::Confirm);
        let session = run(Session::default(), events);

        let numbers: Vec<u32> = session.board.home.players.iter().map(|p| p.number).collect();
        assert_eq!(numbers, (10..30).collect::<Vec<u32>>());
    }

    #[test]
    fn test_roster_add_players_flow() {
        let mut events = vec![
            Event::tap(Target::Fouls(TeamRole::Home)),
            Event::long_press(Target::Fouls(TeamRole::Home)),
        ];
        events.extend("5, 7, abc, 12".chars().map(Event::Input));
        events.push(Event::Confirm);
        let session = run(Session::default(), events);

        assert_eq!(session.mode, UiMode::EditingTeam(TeamRole::Home));
        let numbers: Vec<u32> = session.board.home.players.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![5, 7, 12]);
    }

    #[test]
    fn test_add_player_cancel_returns_to_roster() {
        let session = run(
            Session::default(),
            [
                Event::tap(Target::Fouls(TeamRole::Guest)),
                Event::long_press(Target::Fouls(TeamRole::Guest)),
                Event::Input('4'),
                Event::Backspace,
                Event::Input('8'),
                Event::Cancel,
            ],
        );
        assert_eq!(session.mode, UiMode::EditingTeam(TeamRole::Guest));
        assert!(session.board.guest.players.is_empty());
    }

    #[test]
    fn test_tap_player_fouls_and_closes_sheet() {
        let (session, ids) = with_roster(TeamRole::Guest, "11");
        let session = run(
            session,
            [Event::tap(Target::Fouls(TeamRole::Guest)), Event::tap(Target::Player(ids[0]))],
        );
        assert_eq!(session.mode, UiMode::Idle);
        assert_eq!(session.board.guest.fouls(), 1);
        assert_eq!(session.board.last_fouled, Some(ids[0]));
        assert_eq!(session.board.last_fouled_display(), "11  :  1");
    }

    #[test]
    fn test_long_press_last_foul_undoes() {
        let (session, ids) = with_roster(TeamRole::Home, "3");
        let session = run(
            session,
            [
                Event::tap(Target::Fouls(TeamRole::Home)),
                Event::tap(Target::Player(ids[0])),
                Event::long_press(Target::LastFoul),
                Event::long_press(Target::LastFoul),
            ],
        );
        assert_eq!(session.board.home.players[0].fouls, 0);
        assert_eq!(session.board.last_fouled, None);
    }

    #[test]
    fn test_delete_player_flow_by_identity() {
        let (session, ids) = with_roster(TeamRole::Guest, "23,23");
        let session = run(
            session,
            [
                Event::tap(Target::Fouls(TeamRole::Guest)),
                Event::long_press(Target::Player(ids[1])),
            ],
        );
        assert_eq!(
            session.mode,
            UiMode::ConfirmingDelete { team: TeamRole::Guest, player: ids[1] }
        );

        let session = run(session, [Event::Confirm]);
        assert_eq!(session.mode, UiMode::EditingTeam(TeamRole::Guest));
        assert_eq!(session.board.guest.players.len(), 1);
        assert_eq!(session.board.guest.players[0].id, ids[0]);
    }

    #[test]
    fn test_delete_cancel_keeps_player() {
        let (session, ids) = with_roster(TeamRole::Home, "2");
        let session = run(
            session,
            [
                Event::tap(Target::Fouls(TeamRole::Home)),
                Event::long_press(Target::Player(ids[0])),
                Event::Cancel,
            ],
        );
        assert_eq!(session.mode, UiMode::EditingTeam(TeamRole::Home));
        assert_eq!(session.board.home.players.len(), 1);
    }

    #[test]
    fn test_cannot_delete_other_teams_player_from_sheet() {
        let (session, ids) = with_roster(TeamRole::Guest, "6");
        let session = run(
            session,
            [
                Event::tap(Target::Fouls(TeamRole::Home)),
                Event::long_press(Target::Player(ids[0])),
            ],
        );
        assert_eq!(session.mode, UiMode::EditingTeam(TeamRole::Home));
    }

    #[test]
    fn test_cannot_foul_other_teams_player_from_sheet() {
        let (session, ids) = with_roster(TeamRole::Guest, "6");
        let session = run(
            session,
            [
                Event::tap(Target::Fouls(TeamRole::Home)),
                Event::tap(Target::Player(ids[0])),
            ],
        );
        assert_eq!(session.mode, UiMode::EditingTeam(TeamRole::Home));
        assert_eq!(session.board.guest.fouls(), 0);
        assert_eq!(session.board.last_fouled, None);
    }

    #[test]
    fn test_timer_toggles_behind_prompts() {
        let session = run(
            Session::default(),
            [Event::long_press(Target::Timer), Event::tap(Target::Timer)],
        );
        assert_eq!(session.mode, UiMode::ConfiguringTimer);
        assert!(session.board.timer.is_running());

        let session = run(
            session,
            [
                Event::Confirm,
                Event::tap(Target::Period),
                Event::tap(Target::Timer),
            ],
        );
        assert_eq!(session.mode, UiMode::ConfirmingNextPeriod);
        assert!(!session.board.timer.is_running());
    }

    #[test]
    fn test_timer_tap_ignored_while_typing() {
        let session = run(
            Session::default(),
            [
                Event::long_press(Target::TeamName(TeamRole::Home)),
                Event::tap(Target::Timer),
            ],
        );
        assert_eq!(session.mode, UiMode::TeamSettings(TeamRole::Home));
        assert!(!session.board.timer.is_running());
    }

    #[test]
    fn test_scoring_still_works_with_sheet_open() {
        let session = run(
            Session::default(),
            [
                Event::tap(Target::Fouls(TeamRole::Home)),
                gesture(Gesture::DoubleTap, Target::Score(TeamRole::Guest)),
                Event::tap(Target::Fouls(TeamRole::Home)),
            ],
        );
        assert_eq!(session.board.guest.score, 2);
        assert_eq!(session.mode, UiMode::Idle);
    }

    #[test]
    fn test_session_apply_matches_reduce() {
        let mut session = Session::default();
        session.apply(Event::tap(Target::Score(TeamRole::Home)));
        session.apply(Event::long_press(Target::Timer));
        assert_eq!(session.board.home.score, 1);
        assert_eq!(session.mode, UiMode::ConfiguringTimer);
    }

    #[test]
    fn test_gesture_points() {
        assert_eq!(Gesture::from_tap_count(1).points(), Some(1));
        assert_eq!(Gesture::from_tap_count(2).points(), Some(2));
        assert_eq!(Gesture::from_tap_count(5).points(), Some(3));
        assert_eq!(Gesture::LongPress.points(), None);
    }
}
