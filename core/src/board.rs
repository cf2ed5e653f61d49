use crate::config::BoardConfig;
use crate::roster::parse_numbers;
use crate::timer::Countdown;
use crate::{Player, PlayerId, Team, TeamColor, TeamRole};
use log::{debug, info};

/// The whole game: two teams, the period, the clock and the foul display.
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub home: Team,
    pub guest: Team,
    pub period: u32,
    pub timer: Countdown,
    /// Shown in the PLAYER/GAME slot and used by the one-step foul undo.
    pub last_fouled: Option<PlayerId>,
    next_player_id: u64,
}

impl Scoreboard {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            home: Team::new(TeamRole::Home, config.home.name.clone(), config.home.color),
            guest: Team::new(TeamRole::Guest, config.guest.name.clone(), config.guest.color),
            period: 1,
            timer: Countdown::new(config.countdown_minutes, config.countdown_seconds),
            last_fouled: None,
            next_player_id: 1,
        }
    }

    pub fn team(&self, role: TeamRole) -> &Team {
        match role {
            TeamRole::Home => &self.home,
            TeamRole::Guest => &self.guest,
        }
    }

    pub fn team_mut(&mut self, role: TeamRole) -> &mut Team {
        match role {
            TeamRole::Home => &mut self.home,
            TeamRole::Guest => &mut self.guest,
        }
    }

    /// Find a player on either roster.
    pub fn player(&self, id: PlayerId) -> Option<(TeamRole, &Player)> {
        [&self.home, &self.guest]
            .into_iter()
            .find_map(|t| t.player(id).map(|p| (t.role, p)))
    }

    fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        if self.home.player(id).is_some() {
            return self.home.player_mut(id);
        }
        self.guest.player_mut(id)
    }

    // -----------------------------------------------------------------------
    // Clock and periods
    // -----------------------------------------------------------------------

    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
        debug!("clock {:?} at {}", self.timer.phase(), self.timer.display());
    }

    pub fn tick(&mut self) {
        if self.timer.tick() {
            info!("period {} clock expired", self.period);
        }
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    pub fn configure_countdown(&mut self, minutes: u32, seconds: u32) {
        self.timer.configure(minutes, seconds);
    }

    /// Advances the period and resets the clock to idle.
    pub fn confirm_next_period(&mut self) {
        self.period = self.period.saturating_add(1);
        self.timer.reset();
        info!("advanced to period {}", self.period);
    }

    // -----------------------------------------------------------------------
    // Scoring
    // -----------------------------------------------------------------------

    pub fn increment_score(&mut self, role: TeamRole, delta: u32) {
        let team = self.team_mut(role);
        team.score = team.score.saturating_add(delta);
    }

    /// Stepper adjustment: any signed step, floored at zero.
    pub fn adjust_score(&mut self, role: TeamRole, step: i32) {
        let team = self.team_mut(role);
        team.score = if step < 0 {
            team.score.saturating_sub(step.unsigned_abs())
        } else {
            team.score.saturating_add(step as u32)
        };
    }

    pub fn set_team_name(&mut self, role: TeamRole, name: impl Into<String>) {
        self.team_mut(role).name = name.into();
    }

    pub fn set_team_color(&mut self, role: TeamRole, color: TeamColor) {
        self.team_mut(role).color = color;
    }

    // -----------------------------------------------------------------------
    // Fouls and rosters
    // -----------------------------------------------------------------------

    pub fn add_foul(&mut self, id: PlayerId) {
        let Some(player) = self.player_mut(id) else {
            debug!("foul on unknown player {id:?} ignored");
            return;
        };
        player.fouls = player.fouls.saturating_add(1);
        debug!("foul on #{} ({} total)", player.number, player.fouls);
        self.last_fouled = Some(id);
    }

    /// Take back the most recent foul. Only one step of history is kept.
    pub fn undo_foul(&mut self) {
        let Some(id) = self.last_fouled.take() else {
            return;
        };
        if let Some(player) = self.player_mut(id) {
            player.fouls = player.fouls.saturating_sub(1);
            info!("undid foul on #{}", player.number);
        }
    }

    /// Append one player per valid number in `raw`. Returns the new ids.
    pub fn add_players(&mut self, role: TeamRole, raw: &str) -> Vec<PlayerId> {
        let numbers = parse_numbers(raw);
        let mut ids = Vec::with_capacity(numbers.len());
        for number in numbers {
            let id = PlayerId(self.next_player_id);
            self.next_player_id += 1;
            self.team_mut(role).players.push(Player::new(id, number));
            ids.push(id);
        }
        if !ids.is_empty() {
            info!("added {} player(s) to {}", ids.len(), role.label());
        }
        ids
    }

    /// Remove a player by identity. Returns false if it isn't on `role`'s roster.
    pub fn delete_player(&mut self, role: TeamRole, id: PlayerId) -> bool {
        let team = self.team_mut(role);
        let before = team.players.len();
        team.players.retain(|p| p.id != id);
        let removed = team.players.len() != before;
        if removed {
            if self.last_fouled == Some(id) {
                self.last_fouled = None;
            }
            info!("deleted player {id:?} from {}", role.label());
        }
        removed
    }

    /// PLAYER/GAME slot text: jersey number and that player's foul count.
    pub fn last_fouled_display(&self) -> String {
        match self.last_fouled.and_then(|id| self.player(id)) {
            Some((_, player)) => format!("{}  :  {}", player.number, player.fouls),
            None => "00  :  0".to_string(),
        }
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(&BoardConfig::default())
    }
}
