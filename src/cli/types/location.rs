//! Home/away location of the shooting team.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the shooting team was playing at home or away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameLocation {
    Home,
    Away,
}

impl GameLocation {
    /// Lenient token parse: case-insensitive `home`/`away`, anything else is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "home" => Some(GameLocation::Home),
            "away" => Some(GameLocation::Away),
            _ => None,
        }
    }

    /// The `shot` column that holds the shooting team's id for this location.
    pub fn team_column(&self) -> &'static str {
        match self {
            GameLocation::Home => "home_team_id",
            GameLocation::Away => "away_team_id",
        }
    }
}

impl fmt::Display for GameLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameLocation::Home => "home",
            GameLocation::Away => "away",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_case_insensitive() {
        assert_eq!(GameLocation::from_token("HOME"), Some(GameLocation::Home));
        assert_eq!(GameLocation::from_token("Away"), Some(GameLocation::Away));
    }

    #[test]
    fn test_from_token_unknown_is_none() {
        assert_eq!(GameLocation::from_token("neutral"), None);
        assert_eq!(GameLocation::from_token(""), None);
    }
}
