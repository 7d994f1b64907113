//! Rosters, standings and injuries from the mlb.com JSON lookup services

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::data_fetcher::models::{
    Injuries, InjuryResponse, Roster, RosterResponse, Standings, StandingsResponse,
};
use crate::data_fetcher::processors::{process_injuries, process_roster, process_standings};
use crate::error::AppError;

use super::Gameday;
use super::date_logic::today;
use super::fetch_utils::fetch_json;
use super::urls::{build_injury_url, build_roster_url, build_standings_url};

impl Gameday {
    /// The 40-man roster of a team, e.g. `"112"` for the Cubs.
    #[instrument(skip(self))]
    pub async fn roster(&self, team_id: &str) -> Result<Roster, AppError> {
        let url = build_roster_url(&self.config.lookup_url, team_id);
        let response: RosterResponse = fetch_json(&self.client, &url).await?;
        let roster = process_roster(response, team_id)?;
        info!("Roster of team {} has {} players", team_id, roster.players.len());
        Ok(roster)
    }

    /// Division standings as of `date`.
    #[instrument(skip(self))]
    pub async fn standings(&self, date: NaiveDate) -> Result<Standings, AppError> {
        let url = build_standings_url(&self.config.lookup_url, date, today());
        let response: StandingsResponse = fetch_json(&self.client, &url).await?;
        process_standings(response, &url)
    }

    /// Current disabled list entries of a team.
    #[instrument(skip(self))]
    pub async fn injuries(&self, team_id: &str) -> Result<Injuries, AppError> {
        let url = build_injury_url(&self.config.lookup_url);
        let response: InjuryResponse = fetch_json(&self.client, &url).await?;
        process_injuries(response, team_id)
    }
}
