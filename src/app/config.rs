//! Configuration for game sessions.

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, ai::Difficulty, session::GameMode};

/// Configuration for creating a [`crate::session::Session`].
///
/// # Examples
///
/// ```
/// use tictactoe_ai::{app::SessionConfig, ai::Difficulty, session::GameMode};
///
/// let config = SessionConfig::new(GameMode::PlayerVsPlayer)
///     .with_difficulty(Difficulty::Moderate)
///     .with_seed(42);
/// assert_eq!(config.mode, GameMode::PlayerVsComputer { difficulty: Difficulty::Moderate });
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Who plays O
    pub mode: GameMode,
    /// Random seed for the computer player (None = non-deterministic)
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Create a configuration for the given mode with no fixed seed.
    pub fn new(mode: GameMode) -> Self {
        Self { mode, seed: None }
    }

    /// Play against the computer at `difficulty`.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.mode = GameMode::PlayerVsComputer { difficulty };
        self
    }

    /// Set the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open config '{}'", path.display()),
            source,
        })?;
        Ok(serde_json::from_reader(file)?)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_is_hard_computer_opponent() {
        let config = SessionConfig::default();
        assert_eq!(
            config.mode,
            GameMode::PlayerVsComputer {
                difficulty: Difficulty::Hard
            }
        );
        assert_eq!(config.seed, None);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SessionConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.mode, GameMode::default());

        let config: SessionConfig =
            serde_json::from_str(r#"{"mode": "player_vs_player"}"#).unwrap();
        assert_eq!(config.mode, GameMode::PlayerVsPlayer);
    }

    #[test]
    fn json_roundtrip() {
        let config = SessionConfig::default()
            .with_difficulty(Difficulty::Easy)
            .with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SessionConfig::load_from_file("/nonexistent/session.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/session.json"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"mode": {{"player_vs_computer": {{"difficulty": "easy"}}}}, "seed": 12}}"#)
            .unwrap();

        let config = SessionConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.mode.difficulty(), Some(Difficulty::Easy));
        assert_eq!(config.seed, Some(12));
    }
}
