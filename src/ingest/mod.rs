//! CSV ingest of historical shot data.
//!
//! Input files follow the layout of the public NBA shots dataset, one file
//! per season, 26 columns with a header row:
//!
//! ```text
//! SEASON_1, SEASON_2, TEAM_ID, TEAM_NAME, PLAYER_ID, PLAYER_NAME,
//! POSITION_GROUP, POSITION, GAME_DATE, GAME_ID, HOME_TEAM, AWAY_TEAM,
//! EVENT_TYPE, SHOT_MADE, ACTION_TYPE, SHOT_TYPE, BASIC_ZONE, ZONE_NAME,
//! ZONE_ABB, ZONE_RANGE, LOC_X, LOC_Y, SHOT_DISTANCE, QUARTER, MINS_LEFT,
//! SECS_LEFT
//! ```
//!
//! Files are parsed in parallel, then [`collect_dataset`] derives the
//! player, team, season and game tables from the shot rows.

pub mod teams;


use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use csv::StringRecord;
use rayon::prelude::*;

use crate::cli::types::ids::{GameId, PlayerId, TeamId};
use crate::error::IngestError;
use crate::storage::models::{Game, Player, Season, Shot, ShotDataset, Team};

pub const COLUMN_COUNT: usize = 26;

const GAME_DATE_FORMAT: &str = "%m-%d-%Y";

/// One CSV row, typed but not yet normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct RawShotRow {
    pub season_end_year: i64,
    pub season_years: String,
    pub team_id: i64,
    pub team_name: String,
    pub player_id: i64,
    pub player_name: String,
    pub position_group: String,
    pub position: String,
    pub game_date: NaiveDate,
    pub game_id: i64,
    pub home_team: String,
    pub away_team: String,
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
}

impl RawShotRow {
    /// Seconds left in the quarter when the shot was taken
    pub fn total_time_left_secs(&self) -> i64 {
        self.mins_left * 60 + self.secs_left
    }
}

/// Sorted list of `*.csv` files directly inside `dir`
pub fn discover_csv_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if path.is_file() && is_csv {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse every file in parallel. Rows keep file order, then line order.
pub fn read_shot_files(paths: &[PathBuf]) -> Result<Vec<RawShotRow>, IngestError> {
    let per_file: Vec<Vec<RawShotRow>> = paths
        .par_iter()
        .map(|path| read_shot_file(path))
        .collect::<Result<_, _>>()?;

    Ok(per_file.into_iter().flatten().collect())
}

pub fn read_shot_file(path: &Path) -> Result<Vec<RawShotRow>, IngestError> {
    let path_str = path.display().to_string();
    let csv_err = |source| IngestError::Csv {
        path: path_str.clone(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_err)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        rows.push(parse_record(&path_str, &record)?);
    }

    tracing::info!(path = %path_str, rows = rows.len(), "parsed shot file");
    Ok(rows)
}

/// Field-by-field cursor over one record, producing located errors.
struct RecordFields<'a> {
    path: &'a str,
    line: u64,
    record: &'a StringRecord,
}

impl RecordFields<'_> {
    fn text(&self, idx: usize) -> String {
        self.record.get(idx).unwrap_or_default().to_string()
    }

    fn parse<T: FromStr>(&self, idx: usize, column: &'static str) -> Result<T, IngestError> {
        let raw = self.record.get(idx).unwrap_or_default();
        raw.parse().map_err(|_| self.invalid(column, raw))
    }

    fn flag(&self, idx: usize, column: &'static str) -> Result<bool, IngestError> {
        let raw = self.record.get(idx).unwrap_or_default();
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(self.invalid(column, raw)),
        }
    }

    fn date(&self, idx: usize, column: &'static str) -> Result<NaiveDate, IngestError> {
        let raw = self.record.get(idx).unwrap_or_default();
        NaiveDate::parse_from_str(raw, GAME_DATE_FORMAT).map_err(|_| self.invalid(column, raw))
    }

    fn invalid(&self, column: &'static str, value: &str) -> IngestError {
        IngestError::InvalidValue {
            path: self.path.to_string(),
            line: self.line,
            column,
            value: value.to_string(),
        }
    }
}

pub fn parse_record(path: &str, record: &StringRecord) -> Result<RawShotRow, IngestError> {
    let line = record.position().map(|p| p.line()).unwrap_or_default();
    if record.len() != COLUMN_COUNT {
        return Err(IngestError::ColumnCount {
            path: path.to_string(),
            line,
            expected: COLUMN_COUNT,
            found: record.len(),
        });
    }

    let f = RecordFields { path, line, record };
    Ok(RawShotRow {
        season_end_year: f.parse(0, "SEASON_1")?,
        season_years: f.text(1),
        team_id: f.parse(2, "TEAM_ID")?,
        team_name: f.text(3),
        player_id: f.parse(4, "PLAYER_ID")?,
        player_name: f.text(5),
        position_group: f.text(6),
        position: f.text(7),
        game_date: f.date(8, "GAME_DATE")?,
        game_id: f.parse(9, "GAME_ID")?,
        home_team: f.text(10),
        away_team: f.text(11),
        event_type: f.text(12),
        shot_made: f.flag(13, "SHOT_MADE")?,
        action_type: f.text(14),
        shot_type: f.text(15),
        basic_zone: f.text(16),
        zone_name: f.text(17),
        zone_abb: f.text(18),
        zone_range: f.text(19),
        loc_x: f.parse(20, "LOC_X")?,
        loc_y: f.parse(21, "LOC_Y")?,
        shot_distance: f.parse(22, "SHOT_DISTANCE")?,
        quarter: f.parse(23, "QUARTER")?,
        mins_left: f.parse(24, "MINS_LEFT")?,
        secs_left: f.parse(25, "SECS_LEFT")?,
    })
}

fn resolve_team(abbreviation: &str) -> Result<TeamId, IngestError> {
    teams::team_id_for(abbreviation)
        .map(TeamId::new)
        .ok_or_else(|| IngestError::UnknownTeam(abbreviation.to_string()))
}

/// Derive the normalized tables from raw rows.
///
/// Players and games keep the first occurrence; teams keep the latest name
/// seen. Teams that only ever appear as an opponent are added under their
/// abbreviation so every game row has both of its teams.
pub fn collect_dataset(rows: &[RawShotRow]) -> Result<ShotDataset, IngestError> {
    let mut players: BTreeMap<i64, Player> = BTreeMap::new();
    let mut team_names: BTreeMap<i64, String> = BTreeMap::new();
    let mut seasons: BTreeMap<i64, Season> = BTreeMap::new();
    let mut games: BTreeMap<i64, Game> = BTreeMap::new();
    let mut shots = Vec::with_capacity(rows.len());

    for row in rows {
        let home_team_id = resolve_team(&row.home_team)?;
        let away_team_id = resolve_team(&row.away_team)?;

        players.entry(row.player_id).or_insert_with(|| Player {
            id: PlayerId::new(row.player_id),
            name: row.player_name.clone(),
        });

        if !row.team_name.is_empty() {
            team_names.insert(row.team_id, row.team_name.clone());
        }

        seasons.entry(row.season_end_year).or_insert_with(|| Season {
            year: row.season_end_year,
            season_years: row.season_years.clone(),
        });

        games.entry(row.game_id).or_insert_with(|| Game {
            id: GameId::new(row.game_id),
            home_team_id,
            away_team_id,
            season_year: row.season_end_year,
            game_date: row.game_date,
        });

        shots.push(Shot {
            player_id: PlayerId::new(row.player_id),
            game_id: GameId::new(row.game_id),
            team_id: TeamId::new(row.team_id),
            home_team_id,
            away_team_id,
            season_year: row.season_end_year,
            event_type: row.event_type.clone(),
            shot_made: row.shot_made,
            action_type: row.action_type.clone(),
            shot_type: row.shot_type.clone(),
            basic_zone: row.basic_zone.clone(),
            zone_name: row.zone_name.clone(),
            zone_abb: row.zone_abb.clone(),
            zone_range: row.zone_range.clone(),
            loc_x: row.loc_x,
            loc_y: row.loc_y,
            shot_distance: row.shot_distance,
            quarter: row.quarter,
            mins_left: row.mins_left,
            secs_left: row.secs_left,
            total_time_left_secs: row.total_time_left_secs(),
            position: row.position.clone(),
            position_group: row.position_group.clone(),
            game_date: row.game_date,
        });
    }

    for game in games.values() {
        for team_id in [game.home_team_id, game.away_team_id] {
            team_names.entry(team_id.as_i64()).or_insert_with(|| {
                teams::abbreviation_for(team_id.as_i64())
                    .unwrap_or_default()
                    .to_string()
            });
        }
    }

    let team_rows = team_names
        .into_iter()
        .map(|(id, name)| Team {
            id: TeamId::new(id),
            name,
            abbreviation: teams::abbreviation_for(id).unwrap_or_default().to_string(),
        })
        .collect();

    Ok(ShotDataset {
        players: players.into_values().collect(),
        teams: team_rows,
        seasons: seasons.into_values().collect(),
        games: games.into_values().collect(),
        shots,
    })
}
