use crate::data_fetcher::models::{LeagueInfo, TeamInfo};
use crate::data_fetcher::xml::XmlNode;
use crate::error::AppError;

fn league_node(root: &XmlNode) -> Result<&XmlNode, AppError> {
    root.require("leagues")?.require("league")
}

/// League properties from `mlb_properties.xml`.
pub fn process_league(xml: &str) -> Result<LeagueInfo, AppError> {
    let root = XmlNode::parse(xml)?;
    let league = league_node(&root)?;

    Ok(LeagueInfo {
        id: league.attr_or_default("id"),
        club: league.attr_or_default("club"),
        club_full_name: league.attr_or_default("club_full_name"),
        attributes: league.attributes.clone(),
    })
}

/// Every club listed in `mlb_properties.xml`.
pub fn process_teams(xml: &str) -> Result<Vec<TeamInfo>, AppError> {
    let root = XmlNode::parse(xml)?;
    let teams = league_node(&root)?.require("teams")?;

    Ok(teams
        .find_all("team")
        .map(|team| TeamInfo {
            team_id: team.attr_or_default("team_id"),
            club: team.attr_or_default("club"),
            club_full_name: team.attr_or_default("club_full_name"),
            club_common_name: team.attr_or_default("club_common_name"),
            team_code: team.attr_or_default("team_code"),
            division: team.attr_or_default("division"),
            league: team.attr_or_default("league"),
            attributes: team.attributes.clone(),
        })
        .collect())
}
