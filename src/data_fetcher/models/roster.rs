use super::lookup::QueryResults;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A player on a 40-man roster. The lookup service sends every value as a
/// string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterPlayer {
    pub player_id: String,
    pub name_display_first_last: String,
    pub name_first: String,
    pub name_last: String,
    pub jersey_number: String,
    pub position_txt: String,
    pub primary_position: String,
    pub bats: String,
    pub throws: String,
    pub birth_date: String,
    pub height_feet: String,
    pub height_inches: String,
    pub weight: String,
    pub team_id: String,
    pub team_abbrev: String,
    pub team_name: String,
    pub status_code: String,
    pub pro_debut_date: String,
    pub college: String,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    pub roster_40: RosterEnvelope,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEnvelope {
    #[serde(rename = "queryResults")]
    pub query_results: QueryResults<RosterPlayer>,
}

/// A team's 40-man roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub team_id: String,
    pub last_update: NaiveDateTime,
    pub players: Vec<RosterPlayer>,
}
