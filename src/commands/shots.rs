//! Shot search command

use crate::{
    filters::{RawShotParams, ShotSearchFilter},
    query::ShotQuery,
    storage::{ShotDatabase, ShotRecord},
    Result,
};

use super::print_json;

/// Parameters for the shots command
#[derive(Debug, Default)]
pub struct ShotsParams {
    pub raw: RawShotParams,
    pub as_json: bool,
    pub show_query: bool,
}

/// Validate raw parameters and run the search against `db`.
pub fn search_shots(db: &mut ShotDatabase, raw: &RawShotParams) -> Result<Vec<ShotRecord>> {
    let filter = ShotSearchFilter::from_raw(raw)?;
    tracing::debug!(?filter, "validated shot filter");
    Ok(db.get_shots(&filter)?)
}

/// Handle the shots command
pub fn handle_shots(db: &mut ShotDatabase, params: ShotsParams) -> Result<()> {
    let filter = ShotSearchFilter::from_raw(&params.raw)?;
    let query = ShotQuery::build(&filter);

    if params.show_query {
        println!("{}", query.query_string());
        for (i, arg) in query.args().iter().enumerate() {
            println!("  ${} = {}", i + 1, arg);
        }
        println!();
    }

    let shots = db.run_shot_query(query)?;

    if params.as_json {
        print_json(&shots)?;
        return Ok(());
    }

    for shot in &shots {
        println!("{}", format_shot_line(shot));
    }

    let made = shots.iter().filter(|s| s.shot_made).count();
    println!("{}", format_summary(made, shots.len()));

    Ok(())
}

pub fn format_shot_line(shot: &ShotRecord) -> String {
    format!(
        "{:>10}  ({:>6.2}, {:>6.2})  {:<6}  {}",
        shot.id,
        shot.loc_x,
        shot.loc_y,
        if shot.shot_made { "MADE" } else { "MISSED" },
        shot.shot_type
    )
}

/// `"<made>/<total> made (<pct>%)"`, or a no-match line for zero shots.
pub fn format_summary(made: usize, total: usize) -> String {
    if total == 0 {
        return "No shots matched".to_string();
    }
    let pct = made as f64 / total as f64 * 100.0;
    format!("{}/{} made ({:.1}%)", made, total, pct)
}
