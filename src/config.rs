//! Runner configuration parsed from environment variables.

use std::time::Duration;

use puzzle::consts::DEFAULT_WIN_DELAY_MS;
use puzzle::input::InputSource;

pub const DEFAULT_MISDROPS: u32 = 1;
pub const DEFAULT_ROUNDS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value:?}")]
    NotANumber { var: &'static str, value: String },
    #[error("unknown PUZZLE_INPUT: {0} (expected pointer, touch or alternate)")]
    UnknownInput(String),
    #[error("PUZZLE_ROUNDS must be at least 1")]
    NoRounds,
}

/// Which input device the autoplayer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Pointer,
    Touch,
    /// Even-numbered drags use touch, odd ones the pointer.
    Alternate,
}

impl InputMode {
    /// Source for the `index`-th drag of a round.
    #[must_use]
    pub fn source_for(self, index: usize) -> InputSource {
        match self {
            Self::Pointer => InputSource::Pointer,
            Self::Touch => InputSource::Touch,
            Self::Alternate if index % 2 == 0 => InputSource::Touch,
            Self::Alternate => InputSource::Pointer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `None` draws a random seed at startup.
    pub seed: Option<u64>,
    pub win_delay: Duration,
    pub input: InputMode,
    pub misdrops: u32,
    pub rounds: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            win_delay: Duration::from_millis(DEFAULT_WIN_DELAY_MS),
            input: InputMode::Alternate,
            misdrops: DEFAULT_MISDROPS,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PUZZLE_SEED`: random when absent
    /// - `PUZZLE_WIN_DELAY_MS`: default 300
    /// - `PUZZLE_INPUT`: `pointer`, `touch` or `alternate` (default)
    /// - `PUZZLE_MISDROPS`: rejected drops per piece, default 1
    /// - `PUZZLE_ROUNDS`: default 1
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let seed = parse_number(&lookup, "PUZZLE_SEED")?;
        let win_delay = parse_number(&lookup, "PUZZLE_WIN_DELAY_MS")?
            .map_or(defaults.win_delay, Duration::from_millis);
        let input = parse_input(lookup("PUZZLE_INPUT").as_deref())?;
        let misdrops = parse_number(&lookup, "PUZZLE_MISDROPS")?.unwrap_or(defaults.misdrops);
        let rounds = parse_number(&lookup, "PUZZLE_ROUNDS")?.unwrap_or(defaults.rounds);
        if rounds == 0 {
            return Err(ConfigError::NoRounds);
        }

        Ok(Self { seed, win_delay, input, misdrops, rounds })
    }
}

fn parse_number<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::NotANumber { var, value })
}

fn parse_input(raw: Option<&str>) -> Result<InputMode, ConfigError> {
    match raw.map(str::trim).unwrap_or("alternate").to_ascii_lowercase().as_str() {
        "" | "alternate" => Ok(InputMode::Alternate),
        "pointer" | "mouse" => Ok(InputMode::Pointer),
        "touch" => Ok(InputMode::Touch),
        other => Err(ConfigError::UnknownInput(other.to_string())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
