//! Bulk loading of ingested shot data

use super::{models::*, schema::ShotDatabase};
use anyhow::Result;
use rusqlite::{params, Transaction};

const TABLES: [&str; 5] = ["player", "team", "season", "game", "shot"];

/// Row counts written by [`ShotDatabase::load_dataset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub players: usize,
    pub teams: usize,
    pub seasons: usize,
    pub games: usize,
    pub shots: usize,
}

impl ShotDatabase {
    /// True when every table is empty
    pub fn is_empty(&self) -> Result<bool> {
        for table in TABLES {
            let count: i64 =
                self.conn
                    .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                        row.get(0)
                    })?;
            if count > 0 {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn shot_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM shot", [], |row| row.get(0))?)
    }

    /// Clear all data from the database (useful for starting fresh)
    pub fn clear_all_data(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        delete_all(&tx)?;
        tx.commit()?;
        self.shot_cache.clear();
        Ok(())
    }

    /// Insert a whole dataset in one transaction. Nothing is written if any
    /// insert fails.
    pub fn load_dataset(&mut self, dataset: &ShotDataset) -> Result<LoadSummary> {
        let tx = self.conn.transaction()?;
        let summary = insert_dataset(&tx, dataset)?;

        // Dropping an uncommitted transaction rolls it back
        tx.commit()?;
        self.shot_cache.clear();

        log_summary("dataset loaded", &summary);
        Ok(summary)
    }

    /// Clear every table and load `dataset` in a single transaction.
    ///
    /// If any insert fails the delete is rolled back with it and the
    /// previous data stays in place.
    pub fn replace_dataset(&mut self, dataset: &ShotDataset) -> Result<LoadSummary> {
        let tx = self.conn.transaction()?;
        delete_all(&tx)?;
        let summary = insert_dataset(&tx, dataset)?;
        tx.commit()?;
        self.shot_cache.clear();

        log_summary("dataset replaced", &summary);
        Ok(summary)
    }
}

fn delete_all(tx: &Transaction) -> Result<()> {
    // Children first due to foreign keys
    for table in TABLES.iter().rev() {
        tx.execute(&format!("DELETE FROM {}", table), [])?;
    }
    Ok(())
}

fn insert_dataset(tx: &Transaction, dataset: &ShotDataset) -> Result<LoadSummary> {
    Ok(LoadSummary {
        players: insert_players(tx, &dataset.players)?,
        teams: insert_teams(tx, &dataset.teams)?,
        seasons: insert_seasons(tx, &dataset.seasons)?,
        games: insert_games(tx, &dataset.games)?,
        shots: insert_shots(tx, &dataset.shots)?,
    })
}

fn log_summary(message: &str, summary: &LoadSummary) {
    tracing::info!(
        players = summary.players,
        teams = summary.teams,
        seasons = summary.seasons,
        games = summary.games,
        shots = summary.shots,
        "{}",
        message
    );
}

fn insert_players(tx: &Transaction, players: &[Player]) -> Result<usize> {
    let mut stmt = tx.prepare("INSERT OR REPLACE INTO player (id, name) VALUES (?, ?)")?;
    for player in players {
        stmt.execute(params![player.id.as_i64(), player.name])?;
    }
    Ok(players.len())
}

fn insert_teams(tx: &Transaction, teams: &[Team]) -> Result<usize> {
    let mut stmt =
        tx.prepare("INSERT OR REPLACE INTO team (id, name, abbreviation) VALUES (?, ?, ?)")?;
    for team in teams {
        stmt.execute(params![team.id.as_i64(), team.name, team.abbreviation])?;
    }
    Ok(teams.len())
}

fn insert_seasons(tx: &Transaction, seasons: &[Season]) -> Result<usize> {
    let mut stmt =
        tx.prepare("INSERT OR REPLACE INTO season (year, season_years) VALUES (?, ?)")?;
    for season in seasons {
        stmt.execute(params![season.year, season.season_years])?;
    }
    Ok(seasons.len())
}

fn insert_games(tx: &Transaction, games: &[Game]) -> Result<usize> {
    let mut stmt = tx.prepare(
        "INSERT OR REPLACE INTO game (id, home_team_id, away_team_id, season_year, game_date)
         VALUES (?, ?, ?, ?, ?)",
    )?;
    for game in games {
        stmt.execute(params![
            game.id.as_i64(),
            game.home_team_id.as_i64(),
            game.away_team_id.as_i64(),
            game.season_year,
            game.game_date
        ])?;
    }
    Ok(games.len())
}

fn insert_shots(tx: &Transaction, shots: &[Shot]) -> Result<usize> {
    let mut stmt = tx.prepare(
        "INSERT INTO shot
         (player_id, game_id, team_id, home_team_id, away_team_id, season_year,
          event_type, shot_made, action_type, shot_type, basic_zone, zone_name,
          zone_abb, zone_range, loc_x, loc_y, shot_distance, qtr, mins_left,
          secs_left, total_time_left_secs, position, position_group, game_date)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )?;
    for shot in shots {
        stmt.execute(params![
            shot.player_id.as_i64(),
            shot.game_id.as_i64(),
            shot.team_id.as_i64(),
            shot.home_team_id.as_i64(),
            shot.away_team_id.as_i64(),
            shot.season_year,
            shot.event_type,
            shot.shot_made,
            shot.action_type,
            shot.shot_type,
            shot.basic_zone,
            shot.zone_name,
            shot.zone_abb,
            shot.zone_range,
            shot.loc_x,
            shot.loc_y,
            shot.shot_distance,
            shot.quarter,
            shot.mins_left,
            shot.secs_left,
            shot.total_time_left_secs,
            shot.position,
            shot.position_group,
            shot.game_date
        ])?;
    }
    Ok(shots.len())
}
