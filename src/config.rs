use crate::consts;
use crate::options::Options;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay options initially selected in the main menu
    #[serde(default)]
    pub(crate) options: Options,

    /// Rules of play
    #[serde(default)]
    pub(crate) rules: Rules,

    /// Settings for the log file
    #[serde(default)]
    pub(crate) logging: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("wordsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Fixed parameters of the game that are not exposed in the options menu
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawRules")]
pub(crate) struct Rules {
    /// Width & height of the square grid
    pub(crate) grid_size: u16,

    /// Time on the clock at the start of a game
    pub(crate) start_time: Duration,

    /// Time added to the clock at the start of each new round
    pub(crate) round_time: Duration,

    /// Bonus time awarded per point of score when a word is spelled
    pub(crate) bonus_per_point: Duration,
}

impl Default for Rules {
    fn default() -> Rules {
        Rules {
            grid_size: consts::GRID_SIZE,
            start_time: consts::START_TIME,
            round_time: consts::ROUND_TIME,
            bonus_per_point: consts::BONUS_PER_POINT,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawRules {
    grid_size: u16,
    start_time: u64,
    round_time: u64,
    bonus_per_point: u64,
}

impl Default for RawRules {
    fn default() -> RawRules {
        RawRules {
            grid_size: consts::GRID_SIZE,
            start_time: consts::START_TIME.as_secs(),
            round_time: consts::ROUND_TIME.as_secs(),
            bonus_per_point: consts::BONUS_PER_POINT.as_secs(),
        }
    }
}

impl TryFrom<RawRules> for Rules {
    type Error = RulesError;

    fn try_from(value: RawRules) -> Result<Rules, RulesError> {
        if !(consts::MIN_GRID_SIZE..=consts::MAX_GRID_SIZE).contains(&value.grid_size) {
            return Err(RulesError::GridSize(value.grid_size));
        }
        if value.start_time == 0 {
            return Err(RulesError::NoStartTime);
        }
        Ok(Rules {
            grid_size: value.grid_size,
            start_time: Duration::from_secs(value.start_time),
            round_time: Duration::from_secs(value.round_time),
            bonus_per_point: Duration::from_secs(value.bonus_per_point),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum RulesError {
    #[error(
        "grid-size must be between {min} and {max}, got {0}",
        min = consts::MIN_GRID_SIZE,
        max = consts::MAX_GRID_SIZE
    )]
    GridSize(u16),
    #[error("start-time must be greater than zero")]
    NoStartTime,
}

/// Where and how much to log
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct LogConfig {
    /// File to append log messages to.  If unset, nothing is logged.
    pub(crate) file: Option<PathBuf>,

    /// Maximum level of messages to log
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
