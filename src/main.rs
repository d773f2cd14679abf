//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_shots::{
    cli::{Commands, NbaShots},
    commands::{
        ingest::{handle_ingest, IngestParams},
        lookup::{
            handle_game, handle_player, handle_season, handle_team, GameLookup, PlayerLookup,
            SeasonLookup, TeamLookup,
        },
        open_database,
        shots::{handle_shots, ShotsParams},
    },
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> Result<()> {
    let app = NbaShots::parse();

    // Logs go to stderr so JSON output on stdout stays clean
    let default_level = if app.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut db = open_database(app.db)?;

    match app.command {
        Commands::Ingest { dir, files, force } => {
            handle_ingest(&mut db, IngestParams { dir, files, force })?
        }

        Commands::Shots {
            filters,
            json,
            show_query,
        } => handle_shots(
            &mut db,
            ShotsParams {
                raw: filters.into(),
                as_json: json,
                show_query,
            },
        )?,

        Commands::Player {
            id,
            ids,
            name,
            json,
        } => {
            // clap's arg group guarantees exactly one selector
            let lookup = match (id, ids, name) {
                (Some(id), _, _) => PlayerLookup::Id(id),
                (_, Some(ids), _) => PlayerLookup::Ids(ids),
                (_, _, Some(name)) => PlayerLookup::Name(name),
                (None, None, None) => unreachable!("player lookup requires a selector"),
            };
            handle_player(&db, lookup, json)?
        }

        Commands::Team { id, all: _, json } => {
            let lookup = id.map_or(TeamLookup::All, TeamLookup::Id);
            handle_team(&db, lookup, json)?
        }

        Commands::Season { year, all: _, json } => {
            let lookup = year.map_or(SeasonLookup::All, SeasonLookup::Year);
            handle_season(&db, lookup, json)?
        }

        Commands::Game { id, last, json } => {
            let lookup = match (id, last) {
                (Some(id), _) => GameLookup::Id(id),
                (None, Some(amount)) => GameLookup::Last(amount),
                (None, None) => unreachable!("game lookup requires a selector"),
            };
            handle_game(&db, lookup, json)?
        }
    }

    Ok(())
}
