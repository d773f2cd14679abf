//! Command implementations for the NBA shots CLI

pub mod ingest;
pub mod lookup;
pub mod shots;


use std::path::PathBuf;

use serde::Serialize;

use crate::{storage::ShotDatabase, storage::schema::DB_PATH_ENV_VAR, Result};

/// Database path from the flag, else the env var, else the default data dir.
pub fn resolve_db_path(db_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = db_path {
        return Ok(path);
    }

    match std::env::var(DB_PATH_ENV_VAR) {
        Ok(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => ShotDatabase::default_path(),
    }
}

pub fn open_database(db_path: Option<PathBuf>) -> Result<ShotDatabase> {
    let path = resolve_db_path(db_path)?;
    Ok(ShotDatabase::open(&path)?)
}

/// Pretty-print any serializable value to stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
