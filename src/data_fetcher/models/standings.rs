use super::lookup::{OneOrMany, QueryResults};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A team's row in the standings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsTeam {
    pub team_id: String,
    pub team_full: String,
    pub team_short: String,
    pub team_abbrev: String,
    pub division_id: String,
    pub division: String,
    pub w: String,
    pub l: String,
    pub pct: String,
    pub gb: String,
    pub place: String,
    pub streak: String,
    pub last_ten: String,
    pub home: String,
    pub away: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueStandings {
    pub league_id: String,
    #[serde(rename = "queryResults")]
    pub query_results: QueryResults<StandingsTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsReport {
    pub standings_all_date: OneOrMany<LeagueStandings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsSchedule {
    pub standings_all_date_rptr: StandingsReport,
}

/// Response of both the current and the historical standings services; only
/// the top level key differs between the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    #[serde(alias = "historical_standings_schedule_date")]
    pub standings_schedule_date: StandingsSchedule,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Division {
    pub name: String,
    pub teams: Vec<StandingsTeam>,
}

/// Division standings of both leagues for one day.
#[derive(Debug, Clone, PartialEq)]
pub struct Standings {
    pub last_update: NaiveDateTime,
    pub divisions: Vec<Division>,
}

impl Standings {
    pub fn division(&self, name: &str) -> Option<&Division> {
        self.divisions.iter().find(|division| division.name == name)
    }
}
