//! Database schema and connection management

use crate::error::ShotsError;
use crate::query::QueryArg;
use crate::storage::models::ShotRecord;
use anyhow::Result;
use dirs::data_dir;
use lru::LruCache;
use rusqlite::Connection;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

pub const DB_PATH_ENV_VAR: &str = "NBA_SHOTS_DB";

const SHOT_CACHE_CAPACITY: usize = 64;

/// Cache key for shot searches: rendered query text plus bound arguments.
pub type ShotCacheKey = (String, Vec<QueryArg>);

/// Database connection manager for shot data
pub struct ShotDatabase {
    pub(crate) conn: Connection,
    pub(crate) shot_cache: LruCache<ShotCacheKey, Vec<ShotRecord>>,
}

impl ShotDatabase {
    /// Open (or create) the database at `path` and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!(path = %path.display(), "opening shot database");
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, used by tests and dry runs
    pub fn new_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    pub(crate) fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute("PRAGMA foreign_keys = ON", [])?;
        let mut db = Self {
            conn,
            shot_cache: LruCache::new(
                NonZeroUsize::new(SHOT_CACHE_CAPACITY).expect("cache capacity is non-zero"),
            ),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Default location: `<data dir>/nba-shots/shots.db`
    pub fn default_path() -> std::result::Result<PathBuf, ShotsError> {
        let data_dir = data_dir().ok_or_else(|| ShotsError::MissingDatabasePath {
            env_var: DB_PATH_ENV_VAR.to_string(),
        })?;
        Ok(data_dir.join("nba-shots").join("shots.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS player (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS team (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                abbreviation TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS season (
                year INTEGER PRIMARY KEY,
                season_years TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS game (
                id INTEGER PRIMARY KEY,
                home_team_id INTEGER NOT NULL REFERENCES team(id),
                away_team_id INTEGER NOT NULL REFERENCES team(id),
                season_year INTEGER NOT NULL REFERENCES season(year),
                game_date TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS shot (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                player_id INTEGER NOT NULL REFERENCES player(id),
                game_id INTEGER NOT NULL REFERENCES game(id),
                team_id INTEGER NOT NULL REFERENCES team(id),
                home_team_id INTEGER NOT NULL,
                away_team_id INTEGER NOT NULL,
                season_year INTEGER NOT NULL,
                event_type TEXT NOT NULL,
                shot_made INTEGER NOT NULL,
                action_type TEXT NOT NULL,
                shot_type TEXT NOT NULL,
                basic_zone TEXT NOT NULL,
                zone_name TEXT NOT NULL,
                zone_abb TEXT NOT NULL,
                zone_range TEXT NOT NULL,
                loc_x REAL NOT NULL,
                loc_y REAL NOT NULL,
                shot_distance INTEGER NOT NULL,
                qtr INTEGER NOT NULL,
                mins_left INTEGER NOT NULL,
                secs_left INTEGER NOT NULL,
                total_time_left_secs INTEGER NOT NULL,
                position TEXT NOT NULL,
                position_group TEXT NOT NULL,
                game_date TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_shot_player ON shot(player_id);
            CREATE INDEX IF NOT EXISTS idx_shot_team_season ON shot(team_id, season_year);
            CREATE INDEX IF NOT EXISTS idx_shot_game_date ON shot(game_date);
            CREATE INDEX IF NOT EXISTS idx_game_date ON game(game_date);",
        )?;

        Ok(())
    }
}
