use crate::data_fetcher::models::{
    GameId, GameKind, GameScoreboard, PitcherRecord, TeamFilter, TeamLine,
};
use crate::data_fetcher::xml::XmlNode;
use crate::error::AppError;
use tracing::{debug, warn};

/// Root element of the error document mlb.com serves for missing days.
const ERROR_DOCUMENT_ROOT: &str = "data";

const SCOREBOARD_ROOT: &str = "scoreboard";

/// Parses every game listed in a `scoreboard.xml` document.
pub fn parse_scoreboard(xml: &str) -> Result<Vec<GameScoreboard>, AppError> {
    let root = XmlNode::parse(xml)?;

    if root.name == ERROR_DOCUMENT_ROOT {
        debug!("Scoreboard is an error document, no games");
        return Ok(Vec::new());
    }
    if root.name != SCOREBOARD_ROOT {
        return Err(AppError::xml_structure(format!(
            "expected <{}> root, found <{}>",
            SCOREBOARD_ROOT, root.name
        )));
    }

    let mut games = Vec::new();
    for node in &root.children {
        let Some(kind) = GameKind::from_tag(&node.name) else {
            continue;
        };

        match process_game(node, kind) {
            Ok(game) => games.push(game),
            Err(e) => warn!("Skipping malformed <{}> entry: {}", node.name, e),
        }
    }

    debug!("Parsed {} games from scoreboard", games.len());
    Ok(games)
}

/// Parses a scoreboard and keeps the games matching `filter`.
pub fn process_scoreboard(
    xml: &str,
    filter: &TeamFilter,
) -> Result<Vec<GameScoreboard>, AppError> {
    Ok(parse_scoreboard(xml)?
        .into_iter()
        .filter(|game| filter.matches(&game.home, &game.away))
        .collect())
}

fn process_game(node: &XmlNode, kind: GameKind) -> Result<GameScoreboard, AppError> {
    let game = node.require("game")?;
    let game_id = GameId::parse(game.require_attr("id")?)?;

    let teams: Vec<&XmlNode> = node.find_all("team").collect();
    let [home, away] = teams.as_slice() else {
        return Err(AppError::xml_structure(format!(
            "game {} lists {} teams, expected 2",
            game_id,
            teams.len()
        )));
    };

    let mut scoreboard = GameScoreboard {
        game_id,
        kind,
        league: game.attr_or_default("league"),
        status: game.attr_or_default("status"),
        start_time: game.attr_or_default("start_time"),
        home: team_line(home),
        away: team_line(away),
        winning_pitcher: None,
        losing_pitcher: None,
        save_pitcher: None,
        home_probable_pitcher: None,
        away_probable_pitcher: None,
    };

    match kind {
        GameKind::Final | GameKind::InProgress => {
            scoreboard.winning_pitcher = node.find("w_pitcher").and_then(pitcher_record);
            scoreboard.losing_pitcher = node.find("l_pitcher").and_then(pitcher_record);
            scoreboard.save_pitcher = node.find("sv_pitcher").and_then(pitcher_record);
        }
        GameKind::Scheduled => {
            let mut probables = node.find_all("p_pitcher");
            scoreboard.home_probable_pitcher = probables.next().and_then(pitcher_record);
            scoreboard.away_probable_pitcher = probables.next().and_then(pitcher_record);
        }
    }

    Ok(scoreboard)
}

fn team_line(team: &XmlNode) -> TeamLine {
    let totals = team.find("gameteam");
    TeamLine {
        name: team.attr_or_default("name"),
        code: team.attr_or_default("code"),
        runs: totals.map_or(0, |t| t.count("R")),
        hits: totals.map_or(0, |t| t.count("H")),
        errors: totals.map_or(0, |t| t.count("E")),
    }
}

/// Pitchers without a name are placeholders and count as missing.
fn pitcher_record(node: &XmlNode) -> Option<PitcherRecord> {
    let name = node
        .find("pitcher")
        .and_then(|pitcher| pitcher.attr("name"))
        .or_else(|| node.attr("name"))
        .map(str::trim)
        .filter(|name| !name.is_empty())?;

    Some(PitcherRecord {
        name: name.to_string(),
        wins: node.count("wins"),
        losses: node.count("losses"),
        saves: node.count("saves"),
    })
}
