//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use types::ids::{GameId, PlayerId, TeamId};

use crate::filters::RawShotParams;

/// Shot search filters, passed through as raw strings and validated later.
#[derive(Debug, Clone, Default, Args)]
pub struct ShotFilterArgs {
    /// Player id(s), comma separated: `--player-id 977,2544`.
    #[clap(long)]
    pub player_id: Option<String>,

    /// Shooting team id(s), comma separated.
    #[clap(long)]
    pub team_id: Option<String>,

    /// Season end year(s), comma separated (2004 = 2003-04).
    #[clap(long)]
    pub season: Option<String>,

    /// Opponent team id(s), comma separated.
    #[clap(long)]
    pub opposing_team_id: Option<String>,

    /// First game date to include, YYYY-MM-DD.
    #[clap(long)]
    pub start_game_date: Option<String>,

    /// Last game date to include, YYYY-MM-DD.
    #[clap(long)]
    pub end_game_date: Option<String>,

    /// `home` or `away` for the shooting team. Other values are ignored.
    #[clap(long)]
    pub game_location: Option<String>,

    /// Quarter(s), comma separated. Overtime periods continue from 5.
    #[clap(long)]
    pub quarter: Option<String>,

    /// Start of the clock window as time left, M:SS (e.g. 12:00).
    #[clap(long)]
    pub start_time_left: Option<String>,

    /// End of the clock window as time left, M:SS (e.g. 0:00).
    #[clap(long)]
    pub end_time_left: Option<String>,
}

impl From<ShotFilterArgs> for RawShotParams {
    fn from(args: ShotFilterArgs) -> Self {
        RawShotParams {
            player_id: args.player_id,
            team_id: args.team_id,
            season: args.season,
            opposing_team_id: args.opposing_team_id,
            start_game_date: args.start_game_date,
            end_game_date: args.end_game_date,
            game_location: args.game_location,
            quarter: args.quarter,
            start_time_left: args.start_time_left,
            end_time_left: args.end_time_left,
        }
    }
}

#[derive(Debug, Parser)]
#[clap(name = "nba-shots", about = "NBA shot chart data CLI")]
pub struct NbaShots {
    /// SQLite database path (or set `NBA_SHOTS_DB` env var).
    #[clap(long, global = true)]
    pub db: Option<PathBuf>,

    /// Enable debug logging (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load shot CSV files into the database.
    Ingest {
        /// Directory to scan for `*.csv` files.
        #[clap(long)]
        dir: Option<PathBuf>,

        /// Individual CSV files to load.
        files: Vec<PathBuf>,

        /// Replace existing data instead of refusing a non-empty database.
        #[clap(long)]
        force: bool,
    },

    /// Search shots with optional filters.
    Shots {
        #[clap(flatten)]
        filters: ShotFilterArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Print the generated SQL and bound arguments before the results.
        #[clap(long)]
        show_query: bool,
    },

    /// Look up players by id, ids or name.
    #[clap(group(ArgGroup::new("lookup").required(true).args(["id", "ids", "name"])))]
    Player {
        #[clap(long)]
        id: Option<PlayerId>,

        /// Comma separated player ids.
        #[clap(long)]
        ids: Option<String>,

        /// Case-insensitive name substring.
        #[clap(long)]
        name: Option<String>,

        #[clap(long)]
        json: bool,
    },

    /// Look up a team, or list all teams.
    #[clap(group(ArgGroup::new("lookup").required(true).args(["id", "all"])))]
    Team {
        #[clap(long)]
        id: Option<TeamId>,

        #[clap(long)]
        all: bool,

        #[clap(long)]
        json: bool,
    },

    /// Look up a season by end year, or list all seasons.
    #[clap(group(ArgGroup::new("lookup").required(true).args(["year", "all"])))]
    Season {
        #[clap(long)]
        year: Option<i64>,

        #[clap(long)]
        all: bool,

        #[clap(long)]
        json: bool,
    },

    /// Look up a game, or list the most recent games.
    #[clap(group(ArgGroup::new("lookup").required(true).args(["id", "last"])))]
    Game {
        #[clap(long)]
        id: Option<GameId>,

        /// Number of most recent games to list.
        #[clap(long)]
        last: Option<u32>,

        #[clap(long)]
        json: bool,
    },
}
