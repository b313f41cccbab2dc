use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Named presets offered on the new-game menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Impossible,
    /// Listed on the menu but has no board behind it yet.
    Custom,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
        Difficulty::Custom,
    ];

    /// Presets that can actually start a game.
    pub const PLAYABLE: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Impossible,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Impossible => "Impossible",
            Difficulty::Custom => "Custom",
        }
    }

    pub const fn config(self) -> Result<GameConfig> {
        match self {
            Difficulty::Easy => Ok(GameConfig::new_unchecked((9, 9), 10)),
            Difficulty::Medium => Ok(GameConfig::new_unchecked((16, 16), 40)),
            Difficulty::Hard => Ok(GameConfig::new_unchecked((16, 30), 99)),
            Difficulty::Impossible => Ok(GameConfig::new_unchecked((20, 40), 300)),
            Difficulty::Custom => Err(GameError::PresetUnavailable(self)),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(name))
            .ok_or(GameError::UnknownPreset)
    }
}
