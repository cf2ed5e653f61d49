pub mod board;
pub mod config;
pub mod event;
pub mod roster;
pub mod timer;

pub use board::Scoreboard;
pub use config::{BoardConfig, ConfigError, TeamConfig};
pub use event::{Event, Gesture, Session, Target, UiMode, reduce};
pub use timer::{Countdown, TimerPhase};

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Domain types
// ---------------------------------------------------------------------------

/// Fixed seat of a team on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TeamRole {
    #[default]
    Home,
    Guest,
}

impl TeamRole {
    pub fn label(&self) -> &'static str {
        match self {
            TeamRole::Home => "HOME",
            TeamRole::Guest => "GUEST",
        }
    }
}

/// Allocated by the scoreboard, never reused within a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub number: u32,
    pub fouls: u32,
}

impl Player {
    pub fn new(id: PlayerId, number: u32) -> Self {
        Self { id, number, fouls: 0 }
    }
}

#[derive(Debug, Clone)]
pub struct Team {
    pub role: TeamRole,
    pub name: String,
    pub color: TeamColor,
    pub score: u32,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(role: TeamRole, name: impl Into<String>, color: TeamColor) -> Self {
        Self {
            role,
            name: name.into(),
            color,
            score: 0,
            players: Vec::new(),
        }
    }

    /// Score padded to two digits; wider scores are shown as-is.
    pub fn display_score(&self) -> String {
        format!("{:02}", self.score)
    }

    /// Team fouls are always the roster sum so they can't drift from it.
    pub fn fouls(&self) -> u32 {
        self.players.iter().map(|p| p.fouls).sum()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }
}

// ---------------------------------------------------------------------------
// Team colors
// ---------------------------------------------------------------------------

/// Terminal-friendly team palette. Named colors cycle in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TeamColor {
    Red,
    Blue,
    Green,
    Yellow,
    Magenta,
    Cyan,
    White,
    Orange,
    Rgb(u8, u8, u8),
}

const PALETTE: [TeamColor; 8] = [
    TeamColor::Red,
    TeamColor::Blue,
    TeamColor::Green,
    TeamColor::Yellow,
    TeamColor::Magenta,
    TeamColor::Cyan,
    TeamColor::White,
    TeamColor::Orange,
];

impl TeamColor {
    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn prev(self) -> Self {
        self.shift(-1)
    }

    /// Move `steps` places through the named palette. RGB colors re-enter at Red.
    pub fn shift(self, steps: i32) -> Self {
        let Some(idx) = PALETTE.iter().position(|c| *c == self) else {
            return TeamColor::Red;
        };
        let len = PALETTE.len() as i32;
        let next = (idx as i32 + steps).rem_euclid(len);
        PALETTE[next as usize]
    }

    /// Parse a color name, `#rrggbb`, `#rgb` or `r,g,b`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "red" => return Some(TeamColor::Red),
            "blue" => return Some(TeamColor::Blue),
            "green" => return Some(TeamColor::Green),
            "yellow" => return Some(TeamColor::Yellow),
            "magenta" | "purple" => return Some(TeamColor::Magenta),
            "cyan" => return Some(TeamColor::Cyan),
            "white" => return Some(TeamColor::White),
            "orange" => return Some(TeamColor::Orange),
            _ => {}
        }

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.is_ascii() {
                return None;
            }
            if hex.len() == 6 {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                return Some(TeamColor::Rgb(r, g, b));
            } else if hex.len() == 3 {
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
                return Some(TeamColor::Rgb(r, g, b));
            }
            return None;
        }

        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() == 3 {
            let r = parts[0].trim().parse::<u8>().ok()?;
            let g = parts[1].trim().parse::<u8>().ok()?;
            let b = parts[2].trim().parse::<u8>().ok()?;
            return Some(TeamColor::Rgb(r, g, b));
        }

        None
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamColor::Red => write!(f, "red"),
            TeamColor::Blue => write!(f, "blue"),
            TeamColor::Green => write!(f, "green"),
            TeamColor::Yellow => write!(f, "yellow"),
            TeamColor::Magenta => write!(f, "magenta"),
            TeamColor::Cyan => write!(f, "cyan"),
            TeamColor::White => write!(f, "white"),
            TeamColor::Orange => write!(f, "orange"),
            TeamColor::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl TryFrom<String> for TeamColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TeamColor::parse(&value).ok_or_else(|| format!("invalid color: {value}"))
    }
}

impl From<TeamColor> for String {
    fn from(color: TeamColor) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_score_pads_single_digits() {
        let mut team = Team::new(TeamRole::Home, "HOME", TeamColor::Red);
        assert_eq!(team.display_score(), "00");
        team.score = 7;
        assert_eq!(team.display_score(), "07");
        team.score = 104;
        assert_eq!(team.display_score(), "104");
    }

    #[test]
    fn test_fouls_is_roster_sum() {
        let mut team = Team::new(TeamRole::Guest, "GUEST", TeamColor::Blue);
        assert_eq!(team.fouls(), 0);
        team.players.push(Player { id: PlayerId(1), number: 4, fouls: 2 });
        team.players.push(Player { id: PlayerId(2), number: 11, fouls: 3 });
        assert_eq!(team.fouls(), 5);
    }

    #[test]
    fn test_parse_color_named_and_case_insensitive() {
        assert_eq!(TeamColor::parse("red"), Some(TeamColor::Red));
        assert_eq!(TeamColor::parse("BLUE"), Some(TeamColor::Blue));
        assert_eq!(TeamColor::parse(" Orange "), Some(TeamColor::Orange));
        assert_eq!(TeamColor::parse("purple"), Some(TeamColor::Magenta));
    }

    #[test]
    fn test_parse_color_hex_and_tuple() {
        assert_eq!(TeamColor::parse("#FF6600"), Some(TeamColor::Rgb(255, 102, 0)));
        assert_eq!(TeamColor::parse("#f60"), Some(TeamColor::Rgb(255, 102, 0)));
        assert_eq!(TeamColor::parse("10, 20, 30"), Some(TeamColor::Rgb(10, 20, 30)));
    }

    #[test]
    fn test_parse_color_invalid() {
        assert_eq!(TeamColor::parse("chartreuse"), None);
        assert_eq!(TeamColor::parse("#12345"), None);
        assert_eq!(TeamColor::parse("1,2"), None);
        assert_eq!(TeamColor::parse("300,0,0"), None);
    }

    #[test]
    fn test_color_cycle_wraps() {
        assert_eq!(TeamColor::Red.next(), TeamColor::Blue);
        assert_eq!(TeamColor::Red.prev(), TeamColor::Orange);
        assert_eq!(TeamColor::Orange.next(), TeamColor::Red);
        assert_eq!(TeamColor::Rgb(1, 2, 3).next(), TeamColor::Red);
        assert_eq!(TeamColor::Blue.shift(9), TeamColor::Green);
    }

    #[test]
    fn test_color_display_round_trips_through_parse() {
        let rgb = TeamColor::Rgb(18, 52, 86);
        assert_eq!(rgb.to_string(), "#123456");
        assert_eq!(TeamColor::parse(&rgb.to_string()), Some(rgb));
    }
}
