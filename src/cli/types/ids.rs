//! ID types for players, teams and games.

use crate::error::ShotsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA player IDs.
///
/// # Examples
///
/// ```rust
/// use nba_shots::PlayerId;
///
/// let player_id = PlayerId::new(977);
/// assert_eq!(player_id.as_i64(), 977);
/// assert_eq!(player_id.to_string(), "977");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i64);

impl PlayerId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = ShotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(s, "player_id").map(Self)
    }
}

/// Type-safe wrapper for NBA team (franchise) IDs, e.g. `1610612747`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl TeamId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = ShotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(s, "team_id").map(Self)
    }
}

/// Type-safe wrapper for game IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub i64);

impl GameId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = ShotsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(s, "game_id").map(Self)
    }
}

fn parse_id(s: &str, field: &'static str) -> Result<i64, ShotsError> {
    s.trim().parse().map_err(|e: std::num::ParseIntError| {
        crate::error::FilterError::Format {
            field,
            value: s.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
