//! Data models for the storage layer

use crate::cli::types::ids::{GameId, PlayerId, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Player information stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
}

/// A season keyed by its end year, e.g. `2004` for `2003-04`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub year: i64,
    pub season_years: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub season_year: i64,
    pub game_date: NaiveDate,
}

/// One shot attempt as written by ingest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub player_id: PlayerId,
    pub game_id: GameId,
    pub team_id: TeamId,
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    pub season_year: i64,
    pub event_type: String,
    pub shot_made: bool,
    pub action_type: String,
    pub shot_type: String,
    pub basic_zone: String,
    pub zone_name: String,
    pub zone_abb: String,
    pub zone_range: String,
    pub loc_x: f64,
    pub loc_y: f64,
    pub shot_distance: i64,
    pub quarter: i64,
    pub mins_left: i64,
    pub secs_left: i64,
    pub total_time_left_secs: i64,
    pub position: String,
    pub position_group: String,
    pub game_date: NaiveDate,
}

/// Row returned by a shot search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShotRecord {
    pub id: i64,
    pub loc_x: f64,
    pub loc_y: f64,
    pub shot_made: bool,
    pub shot_type: String,
}

/// Everything derived from a batch of shot CSV rows, ready to load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotDataset {
    pub players: Vec<Player>,
    pub teams: Vec<Team>,
    pub seasons: Vec<Season>,
    pub games: Vec<Game>,
    pub shots: Vec<Shot>,
}
