//! User settings and best-time records, persisted by the host as JSON.
use crate::difficulty::Difficulty;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    System,
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = GameError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "system" => Ok(Theme::System),
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(GameError::UnknownTheme(s.to_string())),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub number_of_pairs: usize,
    pub sound_enabled: bool,
    pub music_enabled: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            number_of_pairs: Difficulty::Medium.number_of_pairs(),
            sound_enabled: true,
            music_enabled: true,
            theme: Theme::System,
        }
    }
}

impl Settings {
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_pairs(self.number_of_pairs)
    }
}

/// Fastest finish, in seconds, per board size.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Records {
    easy: Option<u64>,
    medium: Option<u64>,
    hard: Option<u64>,
}

impl Records {
    fn slot(&mut self, difficulty: Difficulty) -> &mut Option<u64> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    pub fn best_time(&self, difficulty: Difficulty) -> Option<u64> {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn best_time_for_label(&self, label: &str) -> Option<u64> {
        label.parse().ok().and_then(|d| self.best_time(d))
    }

    /// Stores `elapsed_secs` if there is no record yet or it beats the
    /// current one. Returns whether the record changed.
    pub fn update_best_time(&mut self, difficulty: Difficulty, elapsed_secs: u64) -> bool {
        let slot = self.slot(difficulty);
        match *slot {
            Some(best) if elapsed_secs >= best => false,
            _ => {
                *slot = Some(elapsed_secs);
                log::info!("new {} record: {}s", difficulty, elapsed_secs);
                true
            }
        }
    }

    /// Unknown labels are ignored.
    pub fn update_best_time_for_label(&mut self, label: &str, elapsed_secs: u64) -> bool {
        match label.parse() {
            Ok(difficulty) => self.update_best_time(difficulty, elapsed_secs),
            Err(_) => false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    pub settings: Settings,
    pub records: Records,
}

impl Preferences {
    pub fn from_json(json: &str) -> Result<Preferences> {
        if json.trim().is_empty() {
            return Ok(Preferences::default());
        }
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
