use super::lookup::QueryResults;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Injury {
    pub player_id: String,
    pub name_first: String,
    pub name_last: String,
    pub position: String,
    pub team_id: String,
    pub team_name: String,
    pub league_id: String,
    pub injury_status: String,
    pub injury_desc: String,
    pub injury_update: String,
    pub due_back: String,
    pub insert_ts: String,
    pub display_ts: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjuryResponse {
    pub wsfb_news_injury: InjuryEnvelope,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InjuryEnvelope {
    #[serde(rename = "queryResults")]
    pub query_results: QueryResults<Injury>,
}

/// Disabled list entries of one team.
#[derive(Debug, Clone, PartialEq)]
pub struct Injuries {
    pub team_id: String,
    pub last_update: NaiveDateTime,
    pub injuries: Vec<Injury>,
}
