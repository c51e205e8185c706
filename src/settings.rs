//! Driver settings
//!
//! Read once at startup from an optional JSON file. Missing keys fall back to
//! the defaults, so a file only needs the values it changes. Gameplay
//! constants are not part of the file; unknown keys are rejected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Loop driver settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// RNG seed; derived from the clock when absent
    pub seed: Option<u64>,
    /// Stop after this many simulation ticks (runs forever when absent)
    pub max_ticks: Option<u64>,
    /// Let the autopilot play instead of idling
    pub autopilot: bool,
    /// Autopilot presses restart after a game over
    pub auto_restart: bool,
    /// Write every rendered scene to stdout as a JSON line
    pub print_scenes: bool,
    /// Log the HUD every N ticks (0 disables)
    pub hud_log_interval: u64,
    /// Sleep between frames to hold the tick rate; disable for fast replays
    pub realtime: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_ticks: None,
            autopilot: true,
            auto_restart: true,
            print_scenes: false,
            hud_log_interval: 600,
            realtime: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON text
    pub fn from_json(path: &Path, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(path, &json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Settings from the first command line argument, or defaults
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        match args.nth(1) {
            Some(path) => Self::load(PathBuf::from(path)),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Seed to use for this session
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(
            Path::new("test.json"),
            r#"{ "seed": 42, "max_ticks": 900 }"#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.effective_seed(), 42);
        assert_eq!(settings.max_ticks, Some(900));
        assert!(settings.autopilot);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Settings::from_json(Path::new("bad.json"), "{ seed: ").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_gameplay_constants_not_configurable() {
        let err = Settings::from_json(
            Path::new("t.json"),
            r#"{ "tuning": { "enemy_fire_chance": 1.0, "starting_lives": 255 } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("tuning"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_no_args_gives_defaults() {
        let args = vec!["space-invaders".to_string()];
        let settings = Settings::from_args(args.into_iter()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_round_trips_through_json() {
        let settings = Settings {
            seed: Some(7),
            max_ticks: Some(1000),
            print_scenes: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back = Settings::from_json(Path::new("mem"), &json).unwrap();
        assert_eq!(back, settings);
    }
}
