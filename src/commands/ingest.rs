//! CSV ingest command

use std::path::PathBuf;

use crate::{
    error::ShotsError,
    ingest::{collect_dataset, discover_csv_files, read_shot_files},
    storage::{LoadSummary, ShotDatabase},
    Result,
};

/// Parameters for the ingest command
#[derive(Debug, Default)]
pub struct IngestParams {
    pub dir: Option<PathBuf>,
    pub files: Vec<PathBuf>,
    pub force: bool,
}

impl IngestParams {
    /// Explicit files first, then everything found in `dir`.
    pub fn resolve_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = self.files.clone();
        if let Some(dir) = &self.dir {
            files.extend(discover_csv_files(dir)?);
        }
        Ok(files)
    }
}

/// Read, normalize and load the given files into `db`.
///
/// Refuses to touch a database that already has data unless `force` is
/// set. Files are fully parsed before the database is touched, and a
/// forced reload swaps the old data out in the same transaction as the
/// load, so any failure leaves the existing data as it was.
pub fn ingest_files(db: &mut ShotDatabase, files: &[PathBuf], force: bool) -> Result<LoadSummary> {
    let has_data = !db.is_empty()?;
    if has_data && !force {
        return Err(ShotsError::DatabaseNotEmpty);
    }

    let rows = read_shot_files(files)?;
    tracing::info!(rows = rows.len(), files = files.len(), "parsed shot rows");

    let dataset = collect_dataset(&rows)?;
    if has_data {
        tracing::info!("replacing existing data");
        return Ok(db.replace_dataset(&dataset)?);
    }
    Ok(db.load_dataset(&dataset)?)
}

/// Handle the ingest command
pub fn handle_ingest(db: &mut ShotDatabase, params: IngestParams) -> Result<()> {
    let files = params.resolve_files()?;
    if files.is_empty() {
        println!("No CSV files to ingest");
        return Ok(());
    }

    println!("Ingesting {} file(s)...", files.len());
    let summary = ingest_files(db, &files, params.force)?;

    println!("✓ Ingest complete");
    println!("  players: {}", summary.players);
    println!("  teams:   {}", summary.teams);
    println!("  seasons: {}", summary.seasons);
    println!("  games:   {}", summary.games);
    println!("  shots:   {}", summary.shots);

    Ok(())
}
