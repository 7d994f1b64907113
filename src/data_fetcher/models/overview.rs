use super::boxscore::{InningScore, Totals};
use std::collections::BTreeMap;

/// Win/loss record as of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
}

/// Game summary from the root element of `linescore.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameOverview {
    pub id: String,
    pub venue: String,
    pub status: String,
    pub inning: Option<u32>,
    pub top_inning: bool,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_code: String,
    pub away_code: String,
    pub home: Totals,
    pub away: Totals,
    pub home_record: Record,
    pub away_record: Record,
    /// Local start time as published, e.g. `7:05 PM`
    pub start_time: String,
    pub innings: Vec<InningScore>,
    /// All root attributes, including those without a typed field
    pub attributes: BTreeMap<String, String>,
}

impl GameOverview {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
