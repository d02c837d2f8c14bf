use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Board sizes offered by the start menu.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Cards per row (and per column) of the square board.
    pub fn grid_side(self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    pub fn number_of_pairs(self) -> usize {
        self.grid_side() * self.grid_side() / 2
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    /// The board with exactly this many pairs, if there is one.
    pub fn for_pairs(number_of_pairs: usize) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.number_of_pairs() == number_of_pairs)
    }

    /// Pair counts that are not one of the three boards are treated as medium.
    pub fn from_pairs(number_of_pairs: usize) -> Difficulty {
        Difficulty::for_pairs(number_of_pairs).unwrap_or(Difficulty::Medium)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| GameError::UnknownDifficulty(s.to_string()))
    }
}
