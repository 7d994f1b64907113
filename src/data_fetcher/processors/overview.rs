use crate::data_fetcher::models::{GameOverview, InningScore, Record, Totals};
use crate::data_fetcher::xml::XmlNode;
use crate::error::AppError;

/// Builds the game overview from `linescore.xml`.
pub fn process_overview(xml: &str) -> Result<GameOverview, AppError> {
    let root = XmlNode::parse(xml)?;
    if root.name != "game" {
        return Err(AppError::xml_structure(format!(
            "expected <game> root in linescore, found <{}>",
            root.name
        )));
    }

    let time = root.attr_or_default("time");
    let start_time = match root.attr("ampm").map(str::trim) {
        Some(ampm) if !ampm.is_empty() && !time.is_empty() => format!("{time} {ampm}"),
        _ => time,
    };

    let innings = root
        .find_all("linescore")
        .enumerate()
        .map(|(index, inning)| InningScore {
            inning: inning.parse_attr("inning").unwrap_or(index as u32 + 1),
            home: inning.parse_attr("home_inning_runs"),
            away: inning.parse_attr("away_inning_runs"),
        })
        .collect();

    Ok(GameOverview {
        id: root.attr_or_default("id"),
        venue: root.attr_or_default("venue"),
        status: root.attr_or_default("status"),
        inning: root.parse_attr("inning"),
        top_inning: root.flag("top_inning"),
        home_team_name: root.attr_or_default("home_team_name"),
        away_team_name: root.attr_or_default("away_team_name"),
        home_code: root.attr_or_default("home_name_abbrev"),
        away_code: root.attr_or_default("away_name_abbrev"),
        home: Totals {
            runs: root.count("home_team_runs"),
            hits: root.count("home_team_hits"),
            errors: root.count("home_team_errors"),
        },
        away: Totals {
            runs: root.count("away_team_runs"),
            hits: root.count("away_team_hits"),
            errors: root.count("away_team_errors"),
        },
        home_record: Record {
            wins: root.count("home_win"),
            losses: root.count("home_loss"),
        },
        away_record: Record {
            wins: root.count("away_win"),
            losses: root.count("away_loss"),
        },
        start_time,
        innings,
        attributes: root.attributes.clone(),
    })
}
