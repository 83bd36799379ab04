//! Difficulty tiers for the computer opponent

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How closely the computer follows the minimax policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Mostly random, occasionally perfect.
    Easy,
    /// Takes wins, blocks threats, otherwise a coin flip between random and perfect.
    Moderate,
    /// Always perfect.
    #[default]
    Hard,
}

impl Difficulty {
    /// Chance that a move is drawn uniformly at random instead of searched.
    ///
    /// Moderate only reaches this roll after its win and block checks.
    pub fn random_move_probability(self) -> f64 {
        match self {
            Difficulty::Easy => 0.7,
            Difficulty::Moderate => 0.5,
            Difficulty::Hard => 0.0,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "moderate" | "medium" => Ok(Difficulty::Moderate),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(crate::Error::ParseDifficulty {
                input: s.to_string(),
            }),
        }
    }
}
