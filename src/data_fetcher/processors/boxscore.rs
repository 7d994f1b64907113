use crate::data_fetcher::models::{
    BatterStats, GameBoxScore, GameId, InningScore, PitcherStats, PlayerStats, TeamStats,
    TeamTotals, Totals,
};
use crate::data_fetcher::xml::XmlNode;
use crate::error::AppError;

/// Which side a `<pitching>`/`<batting>` block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Home,
    Away,
}

fn side(node: &XmlNode) -> Result<Side, AppError> {
    match node.require_attr("team_flag")? {
        "home" => Ok(Side::Home),
        "away" => Ok(Side::Away),
        other => Err(AppError::xml_structure(format!(
            "<{}> has unknown team_flag '{}'",
            node.name, other
        ))),
    }
}

fn box_score_root(xml: &str) -> Result<XmlNode, AppError> {
    let root = XmlNode::parse(xml)?;
    if root.name != "boxscore" {
        return Err(AppError::xml_structure(format!(
            "expected <boxscore> root, found <{}>",
            root.name
        )));
    }
    Ok(root)
}

/// Line score of a game from `boxscore.xml`.
pub fn process_box_score(xml: &str, game_id: &GameId) -> Result<GameBoxScore, AppError> {
    let root = box_score_root(xml)?;
    let linescore = root.require("linescore")?;

    let innings = linescore
        .find_all("inning_line_score")
        .enumerate()
        .map(|(index, inning)| InningScore {
            inning: inning
                .parse_attr("inning")
                .unwrap_or(index as u32 + 1),
            home: inning.parse_attr("home"),
            away: inning.parse_attr("away"),
        })
        .collect();

    let team_name = |prefix: &str| {
        root.attr(&format!("{prefix}_fname"))
            .or_else(|| root.attr(&format!("{prefix}_sname")))
            .unwrap_or_default()
            .to_string()
    };

    Ok(GameBoxScore {
        game_id: game_id.clone(),
        home_team: team_name("home"),
        away_team: team_name("away"),
        innings,
        home_totals: Totals {
            runs: linescore.count("home_team_runs"),
            hits: linescore.count("home_team_hits"),
            errors: linescore.count("home_team_errors"),
        },
        away_totals: Totals {
            runs: linescore.count("away_team_runs"),
            hits: linescore.count("away_team_hits"),
            errors: linescore.count("away_team_errors"),
        },
    })
}

/// Individual pitching and batting lines for both teams.
pub fn process_player_stats(xml: &str) -> Result<PlayerStats, AppError> {
    let root = box_score_root(xml)?;
    let mut stats = PlayerStats::default();

    for pitching in root.find_all("pitching") {
        let pitchers = pitching.find_all("pitcher").map(pitcher_stats).collect();
        match side(pitching)? {
            Side::Home => stats.home_pitching = pitchers,
            Side::Away => stats.away_pitching = pitchers,
        }
    }

    for batting in root.find_all("batting") {
        let batters = batting.find_all("batter").map(batter_stats).collect();
        match side(batting)? {
            Side::Home => stats.home_batting = batters,
            Side::Away => stats.away_batting = batters,
        }
    }

    Ok(stats)
}

/// Team totals for both teams.
pub fn process_team_stats(xml: &str) -> Result<TeamStats, AppError> {
    let root = box_score_root(xml)?;
    let mut stats = TeamStats::default();

    for pitching in root.find_all("pitching") {
        match side(pitching)? {
            Side::Home => stats.home_pitching = team_totals(pitching),
            Side::Away => stats.away_pitching = team_totals(pitching),
        }
    }
    for batting in root.find_all("batting") {
        match side(batting)? {
            Side::Home => stats.home_batting = team_totals(batting),
            Side::Away => stats.away_batting = team_totals(batting),
        }
    }

    Ok(stats)
}

fn pitcher_stats(node: &XmlNode) -> PitcherStats {
    PitcherStats {
        id: node.attr_or_default("id"),
        name: node.attr_or_default("name"),
        full_name: node.attr_or_default("name_display_first_last"),
        outs: node.count("out"),
        batters_faced: node.count("bf"),
        hits: node.count("h"),
        runs: node.count("r"),
        earned_runs: node.count("er"),
        walks: node.count("bb"),
        strikeouts: node.count("so"),
        home_runs: node.count("hr"),
        pitches: node.count("np"),
        strikes: node.count("s"),
        era: node.attr_or_default("era"),
        win: node.flag("win"),
        loss: node.flag("loss"),
        save: node.flag("save"),
        note: node.attr_or_default("note"),
        attributes: node.attributes.clone(),
    }
}

fn batter_stats(node: &XmlNode) -> BatterStats {
    BatterStats {
        id: node.attr_or_default("id"),
        name: node.attr_or_default("name"),
        full_name: node.attr_or_default("name_display_first_last"),
        position: node.attr_or_default("pos"),
        batting_order: node.parse_attr("bo"),
        at_bats: node.count("ab"),
        runs: node.count("r"),
        hits: node.count("h"),
        doubles: node.count("d"),
        triples: node.count("t"),
        home_runs: node.count("hr"),
        rbi: node.count("rbi"),
        walks: node.count("bb"),
        strikeouts: node.count("so"),
        left_on_base: node.count("lob"),
        stolen_bases: node.count("sb"),
        avg: node.attr_or_default("avg"),
        attributes: node.attributes.clone(),
    }
}

fn team_totals(node: &XmlNode) -> TeamTotals {
    TeamTotals {
        runs: node.count("r"),
        hits: node.count("h"),
        home_runs: node.count("hr"),
        walks: node.count("bb"),
        strikeouts: node.count("so"),
        attributes: node.attributes.clone(),
    }
}
