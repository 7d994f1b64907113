use crate::data_fetcher::models::{Coach, GamePlayers, PlayerInfo, TeamRoster, Umpire};
use crate::data_fetcher::xml::XmlNode;
use crate::error::AppError;
use tracing::warn;

/// Rosters, coaching staffs and umpires from `players.xml`.
pub fn process_players(xml: &str) -> Result<GamePlayers, AppError> {
    let root = XmlNode::parse(xml)?;
    let mut players = GamePlayers::default();

    for team in root.find_all("team") {
        match team.attr("type") {
            Some("home") => players.home = team_roster(team),
            Some("away") => players.away = team_roster(team),
            other => warn!("Ignoring <team> with type {:?} in players.xml", other),
        }
    }

    if let Some(umpires) = root.find("umpires") {
        players.umpires = umpires
            .find_all("umpire")
            .map(|umpire| Umpire {
                id: umpire.attr_or_default("id"),
                name: umpire.attr_or_default("name"),
                position: umpire.attr_or_default("position"),
                attributes: umpire.attributes.clone(),
            })
            .collect();
    }

    Ok(players)
}

fn team_roster(team: &XmlNode) -> TeamRoster {
    TeamRoster {
        id: team.attr_or_default("id"),
        name: team.attr_or_default("name"),
        players: team
            .find_all("player")
            .map(|player| PlayerInfo {
                id: player.attr_or_default("id"),
                first: player.attr_or_default("first"),
                last: player.attr_or_default("last"),
                number: player.attr_or_default("num"),
                position: player.attr_or_default("position"),
                team_abbrev: player.attr_or_default("team_abbrev"),
                bats: player.attr_or_default("bats"),
                throws: player.attr_or_default("rl"),
                status: player.attr_or_default("status"),
                attributes: player.attributes.clone(),
            })
            .collect(),
        coaches: team
            .find_all("coach")
            .map(|coach| Coach {
                id: coach.attr_or_default("id"),
                first: coach.attr_or_default("first"),
                last: coach.attr_or_default("last"),
                number: coach.attr_or_default("num"),
                position: coach.attr_or_default("position"),
                attributes: coach.attributes.clone(),
            })
            .collect(),
    }
}
