use crate::data_fetcher::models::{Action, AtBat, GameEvent, GameEvents, InningEvents, Pitch};
use crate::data_fetcher::xml::XmlNode;
use crate::error::AppError;

/// Play by play from `game_events.xml`, in the order the document lists it.
pub fn process_game_events(xml: &str) -> Result<GameEvents, AppError> {
    let root = XmlNode::parse(xml)?;

    let innings = root
        .find_all("inning")
        .enumerate()
        .map(|(index, inning)| InningEvents {
            num: inning.parse_attr("num").unwrap_or(index as u32 + 1),
            top: inning.find("top").map(half_inning).unwrap_or_default(),
            bottom: inning.find("bottom").map(half_inning).unwrap_or_default(),
        })
        .collect();

    Ok(GameEvents { innings })
}

fn half_inning(node: &XmlNode) -> Vec<GameEvent> {
    node.children
        .iter()
        .filter_map(|child| match child.name.as_str() {
            "atbat" => Some(GameEvent::AtBat(at_bat(child))),
            "action" => Some(GameEvent::Action(action(child))),
            _ => None,
        })
        .collect()
}

fn at_bat(node: &XmlNode) -> AtBat {
    AtBat {
        num: node.parse_attr("num"),
        batter: node.attr_or_default("batter"),
        pitcher: node.attr_or_default("pitcher"),
        balls: node.count("b"),
        strikes: node.count("s"),
        outs: node.count("o"),
        event: node.attr_or_default("event"),
        description: node.attr_or_default("des"),
        home_team_runs: node.parse_attr("home_team_runs"),
        away_team_runs: node.parse_attr("away_team_runs"),
        pitches: node.find_all("pitch").map(pitch).collect(),
        attributes: node.attributes.clone(),
    }
}

fn pitch(node: &XmlNode) -> Pitch {
    Pitch {
        description: node.attr_or_default("des"),
        result: node.attr_or_default("type"),
        pitch_type: node.attr_or_default("pitch_type"),
        start_speed: node.parse_attr("start_speed"),
        attributes: node.attributes.clone(),
    }
}

fn action(node: &XmlNode) -> Action {
    Action {
        player: node.attr_or_default("player"),
        balls: node.count("b"),
        strikes: node.count("s"),
        outs: node.count("o"),
        event: node.attr_or_default("event"),
        description: node.attr_or_default("des"),
        attributes: node.attributes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::GAME_EVENTS_XML;

    #[test]
    fn test_innings_and_halves() {
        let events = process_game_events(GAME_EVENTS_XML).unwrap();
        assert_eq!(events.innings.len(), 2);
        assert_eq!(events.innings[0].num, 1);
        assert_eq!(events.innings[0].top.len(), 3);
        assert_eq!(events.innings[0].bottom.len(), 1);
        assert!(events.innings[1].bottom.is_empty());
    }

    #[test]
    fn test_document_order_is_kept() {
        let events = process_game_events(GAME_EVENTS_XML).unwrap();
        let kinds: Vec<&str> = events.innings[0].top.iter().map(GameEvent::event).collect();
        assert_eq!(kinds, vec!["Single", "Stolen Base 2B", "Strikeout"]);
    }

    #[test]
    fn test_at_bat_details() {
        let events = process_game_events(GAME_EVENTS_XML).unwrap();
        let GameEvent::AtBat(first) = &events.innings[0].top[0] else {
            panic!("expected an at-bat");
        };

        assert_eq!(first.num, Some(1));
        assert_eq!(first.batter, "572761");
        assert_eq!(first.pitches.len(), 2);
        assert_eq!(first.pitches[0].result, "B");
        assert_eq!(first.pitches[1].pitch_type, "FF");
        assert_eq!(first.pitches[1].start_speed, Some(93.4));
        assert_eq!(events.at_bats().count(), 4);
    }

    #[test]
    fn test_game_without_innings() {
        let events = process_game_events("<game/>").unwrap();
        assert!(events.innings.is_empty());
    }
}
