//! Player, team, season and game lookups

use crate::{
    cli::types::ids::{GameId, PlayerId, TeamId},
    error::ShotsError,
    filters::parse_id_list,
    storage::ShotDatabase,
    Result,
};

use super::print_json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerLookup {
    Id(PlayerId),
    /// Comma separated id list, validated like a shot filter field
    Ids(String),
    Name(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamLookup {
    Id(TeamId),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonLookup {
    Year(i64),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLookup {
    Id(GameId),
    Last(u32),
}

pub fn handle_player(db: &ShotDatabase, lookup: PlayerLookup, as_json: bool) -> Result<()> {
    let players = match lookup {
        PlayerLookup::Id(id) => {
            let player = db.get_player_by_id(id)?.ok_or_else(|| ShotsError::NotFound {
                entity: "player",
                key: id.to_string(),
            })?;
            vec![player]
        }
        PlayerLookup::Ids(list) => {
            let ids: Vec<PlayerId> = parse_id_list("ids", Some(&list))?
                .into_iter()
                .map(PlayerId::new)
                .collect();
            db.get_players_by_ids(&ids)?
        }
        PlayerLookup::Name(name) => db.get_players_by_name(&name)?,
    };

    if as_json {
        return print_json(&players);
    }
    for player in &players {
        println!("{:>10}  {}", player.id, player.name);
    }
    Ok(())
}

pub fn handle_team(db: &ShotDatabase, lookup: TeamLookup, as_json: bool) -> Result<()> {
    let teams = match lookup {
        TeamLookup::Id(id) => {
            let team = db.get_team_by_id(id)?.ok_or_else(|| ShotsError::NotFound {
                entity: "team",
                key: id.to_string(),
            })?;
            vec![team]
        }
        TeamLookup::All => db.get_all_teams()?,
    };

    if as_json {
        return print_json(&teams);
    }
    for team in &teams {
        println!("{:>10}  {:<4} {}", team.id, team.abbreviation, team.name);
    }
    Ok(())
}

pub fn handle_season(db: &ShotDatabase, lookup: SeasonLookup, as_json: bool) -> Result<()> {
    let seasons = match lookup {
        SeasonLookup::Year(year) => {
            let season = db.get_season_by_year(year)?.ok_or_else(|| ShotsError::NotFound {
                entity: "season",
                key: year.to_string(),
            })?;
            vec![season]
        }
        SeasonLookup::All => db.get_all_seasons()?,
    };

    if as_json {
        return print_json(&seasons);
    }
    for season in &seasons {
        println!("{}  {}", season.year, season.season_years);
    }
    Ok(())
}

pub fn handle_game(db: &ShotDatabase, lookup: GameLookup, as_json: bool) -> Result<()> {
    let games = match lookup {
        GameLookup::Id(id) => {
            let game = db.get_game_by_id(id)?.ok_or_else(|| ShotsError::NotFound {
                entity: "game",
                key: id.to_string(),
            })?;
            vec![game]
        }
        GameLookup::Last(amount) => db.get_last_games(amount)?,
    };

    if as_json {
        return print_json(&games);
    }
    for game in &games {
        println!(
            "{:>10}  {}  {} vs {}  (season {})",
            game.id, game.game_date, game.home_team_id, game.away_team_id, game.season_year
        );
    }
    Ok(())
}
