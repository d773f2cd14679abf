//! Franchise id / abbreviation table.
//!
//! Shot rows name the home and away teams by abbreviation only, so game
//! rows need this table to resolve them to team ids. Relocated franchises
//! keep their current id under their historical codes.

const TEAM_ABBREVIATIONS: [(i64, &str); 30] = [
    (1610612737, "ATL"),
    (1610612738, "BOS"),
    (1610612739, "CLE"),
    (1610612740, "NOP"),
    (1610612741, "CHI"),
    (1610612742, "DAL"),
    (1610612743, "DEN"),
    (1610612744, "GSW"),
    (1610612745, "HOU"),
    (1610612746, "LAC"),
    (1610612747, "LAL"),
    (1610612748, "MIA"),
    (1610612749, "MIL"),
    (1610612750, "MIN"),
    (1610612751, "BKN"),
    (1610612752, "NYK"),
    (1610612753, "ORL"),
    (1610612754, "IND"),
    (1610612755, "PHI"),
    (1610612756, "PHX"),
    (1610612757, "POR"),
    (1610612758, "SAC"),
    (1610612759, "SAS"),
    (1610612760, "OKC"),
    (1610612761, "TOR"),
    (1610612762, "UTA"),
    (1610612763, "MEM"),
    (1610612764, "WAS"),
    (1610612765, "DET"),
    (1610612766, "CHA"),
];

const HISTORICAL_ABBREVIATIONS: [(&str, i64); 4] = [
    ("SEA", 1610612760),
    ("NOH", 1610612740),
    ("NOK", 1610612740),
    ("NJN", 1610612751),
];

/// Current abbreviation for a franchise id
pub fn abbreviation_for(team_id: i64) -> Option<&'static str> {
    TEAM_ABBREVIATIONS
        .iter()
        .find(|(id, _)| *id == team_id)
        .map(|(_, abbrev)| *abbrev)
}

/// Franchise id for a current or historical abbreviation
pub fn team_id_for(abbreviation: &str) -> Option<i64> {
    TEAM_ABBREVIATIONS
        .iter()
        .find(|(_, abbrev)| *abbrev == abbreviation)
        .map(|(id, _)| *id)
        .or_else(|| {
            HISTORICAL_ABBREVIATIONS
                .iter()
                .find(|(abbrev, _)| *abbrev == abbreviation)
                .map(|(_, id)| *id)
        })
}
