use crate::state::gesture::DEFAULT_MULTI_TAP;
use hoopboard_core::{BoardConfig, ConfigError};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

const CONFIG_ENV: &str = "HOOPBOARD_CONFIG";
const LOG_ENV: &str = "HOOPBOARD_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub board: BoardConfig,
    pub full_screen: bool,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: Option<String>,
    pub multi_tap_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            full_screen: false,
            log_level: None,
            multi_tap_ms: DEFAULT_MULTI_TAP.as_millis() as u64,
        }
    }
}

impl AppSettings {
    /// Read the config file if there is one. Problems are logged and the
    /// defaults are used instead.
    pub fn load() -> Self {
        Self::load_reporting(|e| log::warn!("{e}; using default settings"))
    }

    /// Like `load`, but hands a bad config file to `on_error`.
    pub fn load_reporting(on_error: impl FnOnce(&ConfigError)) -> Self {
        let mut settings = Self::from_optional_path(config_path().as_deref(), on_error);

        if let Ok(level) = std::env::var(LOG_ENV)
            && !level.trim().is_empty()
        {
            settings.log_level = Some(level);
        }
        settings
    }

    fn from_optional_path(
        path: Option<&std::path::Path>,
        on_error: impl FnOnce(&ConfigError),
    ) -> Self {
        match path {
            Some(path) if path.exists() => Self::from_path(path).unwrap_or_else(|e| {
                on_error(&e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: AppSettings =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        settings.board.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse::<LevelFilter>().ok())
            .unwrap_or(LevelFilter::Info)
    }

    pub fn multi_tap_window(&self) -> Duration {
        Duration::from_millis(self.multi_tap_ms.clamp(50, 2_000))
    }

    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// `$HOOPBOARD_CONFIG`, else the XDG config dir, else `~/.config`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    if let Ok(config_dir) = std::env::var("XDG_CONFIG_HOME")
        && !config_dir.trim().is_empty()
    {
        return Some(PathBuf::from(config_dir).join("hoopboard").join("config.json"));
    }
    if let Ok(home) = std::env::var("HOME")
        && !home.trim().is_empty()
    {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join("hoopboard")
                .join("config.json"),
        );
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoopboard_core::TeamColor;

    #[test]
    fn test_empty_object_is_defaults() {
        let settings = AppSettings::from_json("{}").expect("valid");
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_nested_board_config() {
        let settings = AppSettings::from_json(
            r#"{
                "full_screen": true,
                "log_level": "debug",
                "board": { "home": { "name": "CELTICS", "color": "green" }, "countdown_minutes": 12 }
            }"#,
        )
        .expect("valid");
        assert!(settings.full_screen);
        assert_eq!(settings.level_filter(), LevelFilter::Debug);
        assert_eq!(settings.board.home.name, "CELTICS");
        assert_eq!(settings.board.home.color, TeamColor::Green);
        assert_eq!(settings.board.countdown_minutes, 12);
    }

    #[test]
    fn test_invalid_board_is_rejected() {
        let err = AppSettings::from_json(r#"{"board": {"countdown_minutes": 90}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let settings = AppSettings {
            log_level: Some("loud".into()),
            ..AppSettings::default()
        };
        assert_eq!(settings.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_multi_tap_window_is_clamped() {
        let mut settings = AppSettings::default();
        assert_eq!(settings.multi_tap_window(), DEFAULT_MULTI_TAP);
        settings.multi_tap_ms = 1;
        assert_eq!(settings.multi_tap_window(), Duration::from_millis(50));
    }

    #[test]
    fn test_bad_config_file_is_reported_and_defaulted() {
        let path = std::env::temp_dir().join(format!("hoopboard-bad-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").expect("write");

        let mut reported = None;
        let settings = AppSettings::from_optional_path(Some(&path), |e| reported = Some(e.to_string()));
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings, AppSettings::default());
        let reported = reported.expect("error reported");
        assert!(reported.starts_with("invalid config json"), "{reported}");
    }

    #[test]
    fn test_missing_config_file_is_silent() {
        let path = std::env::temp_dir().join("hoopboard-does-not-exist.json");
        let mut reported = false;
        let settings = AppSettings::from_optional_path(Some(&path), |_| reported = true);
        assert_eq!(settings, AppSettings::default());
        assert!(!reported);
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let settings = AppSettings::default();
        let parsed = AppSettings::from_json(&settings.to_json_pretty()).expect("valid");
        assert_eq!(parsed, settings);
    }
}
