use crate::state::gesture::TapRecognizer;
use hoopboard_core::{BoardConfig, Session, Target, TeamRole, UiMode};

/// Targets on the upper half of the board, in focus order.
const BOARD_TARGETS: [Target; 6] = [
    Target::Timer,
    Target::TeamName(TeamRole::Home),
    Target::Score(TeamRole::Home),
    Target::Period,
    Target::TeamName(TeamRole::Guest),
    Target::Score(TeamRole::Guest),
];

/// Everything a gesture can land on in the current mode, in focus order.
pub fn focus_targets(session: &Session) -> Vec<Target> {
    let mut targets = BOARD_TARGETS.to_vec();
    match session.mode {
        UiMode::EditingTeam(team) => {
            targets.push(Target::Fouls(team));
            targets.extend(
                session
                    .board
                    .team(team)
                    .players
                    .iter()
                    .map(|p| Target::Player(p.id)),
            );
        }
        _ => targets.extend([
            Target::Fouls(TeamRole::Home),
            Target::LastFoul,
            Target::Fouls(TeamRole::Guest),
        ]),
    }
    targets
}

/// Keyboard stand-in for pointing at something on a touch screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRing {
    pub current: Target,
}

impl Default for FocusRing {
    fn default() -> Self {
        Self {
            current: Target::Score(TeamRole::Home),
        }
    }
}

impl FocusRing {
    pub fn next(&mut self, session: &Session) {
        self.step(session, 1);
    }

    pub fn prev(&mut self, session: &Session) {
        self.step(session, -1);
    }

    /// The focused target, or the first one if it disappeared (a deleted
    /// player, a closed roster sheet).
    pub fn resolve(&mut self, session: &Session) -> Target {
        let targets = focus_targets(session);
        if !targets.contains(&self.current) {
            self.current = targets[0];
        }
        self.current
    }

    fn step(&mut self, session: &Session, delta: i32) {
        let targets = focus_targets(session);
        let len = targets.len() as i32;
        let idx = targets.iter().position(|t| *t == self.current).unwrap_or(0) as i32;
        self.current = targets[(idx + delta).rem_euclid(len) as usize];
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub session: Session,
    pub focus: FocusRing,
    pub taps: TapRecognizer,
    pub show_logs: bool,
    pub show_help: bool,
}

impl AppState {
    pub fn new(config: &BoardConfig, taps: TapRecognizer) -> Self {
        Self {
            session: Session::new(config),
            taps,
            ..Self::default()
        }
    }
}
