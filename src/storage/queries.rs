//! Shot search and entity lookups

use super::{models::*, schema::ShotDatabase};
use crate::cli::types::ids::{GameId, PlayerId, TeamId};
use crate::filters::ShotSearchFilter;
use crate::query::{QueryArg, ShotQuery};
use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use std::collections::BTreeSet;

impl ShotDatabase {
    /// Execute a rendered shot query, binding `args` in placeholder order.
    ///
    /// SQLite numbers `$1`, `$2`, ... by first appearance, which matches the
    /// numeric order the query builder emits them in.
    pub fn query_shots(&self, query: &str, args: &[QueryArg]) -> Result<Vec<ShotRecord>> {
        tracing::debug!(query, arg_count = args.len(), "running shot query");

        let mut stmt = self.conn.prepare(query)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(args.iter()), |row| {
            Ok(ShotRecord {
                id: row.get(0)?,
                loc_x: row.get(1)?,
                loc_y: row.get(2)?,
                shot_made: row.get(3)?,
                shot_type: row.get(4)?,
            })
        })?;

        let mut shots = Vec::new();
        for row in rows {
            shots.push(row?);
        }

        tracing::info!(count = shots.len(), "shot query returned");
        Ok(shots)
    }

    /// Build and run the shot search for `filter`, serving repeats from cache.
    pub fn get_shots(&mut self, filter: &ShotSearchFilter) -> Result<Vec<ShotRecord>> {
        self.run_shot_query(ShotQuery::build(filter))
    }

    /// Run an already built shot query through the cache.
    pub fn run_shot_query(&mut self, query: ShotQuery) -> Result<Vec<ShotRecord>> {
        let (query, args, _) = query.into_parts();
        let cache_key = (query, args);

        // Check cache first
        if let Some(cached) = self.shot_cache.get(&cache_key) {
            tracing::debug!(count = cached.len(), "shot query served from cache");
            return Ok(cached.clone());
        }

        let shots = self.query_shots(&cache_key.0, &cache_key.1)?;
        self.shot_cache.put(cache_key, shots.clone());
        Ok(shots)
    }

    pub fn get_player_by_id(&self, player_id: PlayerId) -> Result<Option<Player>> {
        let player = self
            .conn
            .query_row(
                "SELECT id, name FROM player WHERE id = ?",
                params![player_id.as_i64()],
                row_to_player,
            )
            .optional()?;
        Ok(player)
    }

    /// Case-insensitive substring match on player name. `%` and `_` in
    /// `name` match literally.
    pub fn get_players_by_name(&self, name: &str) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name FROM player WHERE name LIKE ? ESCAPE '\\' ORDER BY name",
        )?;
        let pattern = format!("%{}%", escape_like(name));
        let rows = stmt.query_map(params![pattern], row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    pub fn get_players_by_ids(&self, player_ids: &[PlayerId]) -> Result<Vec<Player>> {
        let ids: BTreeSet<i64> = player_ids.iter().map(PlayerId::as_i64).collect();

        let mut q = ShotQuery::new();
        let Some(cond) = q.id_condition("id", &ids) else {
            return Ok(Vec::new());
        };
        let query = format!("SELECT id, name FROM player WHERE {} ORDER BY id", cond);

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(rusqlite::params_from_iter(q.args().iter()), row_to_player)?;

        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    pub fn get_team_by_id(&self, team_id: TeamId) -> Result<Option<Team>> {
        let team = self
            .conn
            .query_row(
                "SELECT id, name, abbreviation FROM team WHERE id = ?",
                params![team_id.as_i64()],
                row_to_team,
            )
            .optional()?;
        Ok(team)
    }

    pub fn get_all_teams(&self) -> Result<Vec<Team>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, abbreviation FROM team ORDER BY abbreviation")?;
        let rows = stmt.query_map([], row_to_team)?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    pub fn get_season_by_year(&self, year: i64) -> Result<Option<Season>> {
        let season = self
            .conn
            .query_row(
                "SELECT year, season_years FROM season WHERE year = ?",
                params![year],
                row_to_season,
            )
            .optional()?;
        Ok(season)
    }

    pub fn get_all_seasons(&self) -> Result<Vec<Season>> {
        let mut stmt = self
            .conn
            .prepare("SELECT year, season_years FROM season ORDER BY year")?;
        let rows = stmt.query_map([], row_to_season)?;

        let mut seasons = Vec::new();
        for row in rows {
            seasons.push(row?);
        }
        Ok(seasons)
    }

    pub fn get_game_by_id(&self, game_id: GameId) -> Result<Option<Game>> {
        let game = self
            .conn
            .query_row(
                "SELECT id, home_team_id, away_team_id, season_year, game_date
                 FROM game WHERE id = ?",
                params![game_id.as_i64()],
                row_to_game,
            )
            .optional()?;
        Ok(game)
    }

    /// Most recent `amount` games, newest first
    pub fn get_last_games(&self, amount: u32) -> Result<Vec<Game>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, home_team_id, away_team_id, season_year, game_date
             FROM game ORDER BY game_date DESC, id DESC LIMIT ?",
        )?;
        let rows = stmt.query_map(params![amount], row_to_game)?;

        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }
}

/// Escape `LIKE` wildcards (and the escape character itself) with `\`.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn row_to_player(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: PlayerId::new(row.get(0)?),
        name: row.get(1)?,
    })
}

fn row_to_team(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: TeamId::new(row.get(0)?),
        name: row.get(1)?,
        abbreviation: row.get(2)?,
    })
}

fn row_to_season(row: &Row) -> rusqlite::Result<Season> {
    Ok(Season {
        year: row.get(0)?,
        season_years: row.get(1)?,
    })
}

fn row_to_game(row: &Row) -> rusqlite::Result<Game> {
    Ok(Game {
        id: GameId::new(row.get(0)?),
        home_team_id: TeamId::new(row.get(1)?),
        away_team_id: TeamId::new(row.get(2)?),
        season_year: row.get(3)?,
        game_date: row.get(4)?,
    })
}
