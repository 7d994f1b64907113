use crate::constants::leagues::{AL_DIVISIONS, AMERICAN_LEAGUE_ID, NATIONAL_LEAGUE_ID, NL_DIVISIONS};
use crate::data_fetcher::models::{
    Division, Injuries, InjuryResponse, Roster, RosterResponse, Standings, StandingsResponse,
    StandingsTeam,
};
use crate::error::AppError;
use chrono::NaiveDateTime;

/// Parses the `created` stamp of a lookup response (`YYYY-MM-DDTHH:MM:SS`,
/// sometimes with fractional seconds).
pub fn parse_last_update(created: &str) -> Result<NaiveDateTime, AppError> {
    let created = created.trim();
    NaiveDateTime::parse_from_str(created, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(created, "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(|e| {
            AppError::datetime_parse_error(format!("Invalid last update '{created}': {e}"))
        })
}

pub fn process_roster(response: RosterResponse, team_id: &str) -> Result<Roster, AppError> {
    let results = response.roster_40.query_results;
    Ok(Roster {
        team_id: team_id.to_string(),
        last_update: parse_last_update(&results.created)?,
        players: results.into_rows(),
    })
}

/// Keeps only the injuries of `team_id`; the service reports the whole league.
pub fn process_injuries(response: InjuryResponse, team_id: &str) -> Result<Injuries, AppError> {
    let results = response.wsfb_news_injury.query_results;
    let last_update = parse_last_update(&results.created)?;
    let injuries = results
        .into_rows()
        .into_iter()
        .filter(|injury| injury.team_id == team_id)
        .collect();

    Ok(Injuries {
        team_id: team_id.to_string(),
        last_update,
        injuries,
    })
}

/// Groups standings rows into the six divisions, AL first when the response
/// lists it first.
pub fn process_standings(response: StandingsResponse, url: &str) -> Result<Standings, AppError> {
    let leagues: Vec<_> = response
        .standings_schedule_date
        .standings_all_date_rptr
        .standings_all_date
        .into();

    let Some(first) = leagues.first() else {
        return Err(AppError::api_no_data("Standings response lists no leagues", url));
    };
    let last_update = parse_last_update(&first.query_results.created)?;

    let mut divisions = Vec::new();
    for league in leagues {
        let table = match league.league_id.as_str() {
            AMERICAN_LEAGUE_ID => AL_DIVISIONS,
            NATIONAL_LEAGUE_ID => NL_DIVISIONS,
            other => return Err(AppError::unknown_league(other)),
        };

        let rows = league.query_results.into_rows();
        for (division_id, name) in table {
            let teams: Vec<StandingsTeam> = rows
                .iter()
                .filter(|team| team.division_id == division_id)
                .cloned()
                .collect();
            divisions.push(Division {
                name: name.to_string(),
                teams,
            });
        }
    }

    Ok(Standings {
        last_update,
        divisions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{INJURIES_JSON, ROSTER_JSON, ROSTER_SINGLE_JSON, STANDINGS_JSON};
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_last_update_formats() {
        let stamp = parse_last_update("2017-04-02T09:15:30").unwrap();
        assert_eq!((stamp.year(), stamp.month(), stamp.day()), (2017, 4, 2));
        assert_eq!((stamp.hour(), stamp.minute(), stamp.second()), (9, 15, 30));

        assert!(parse_last_update("2017-04-02T09:15:30.123").is_ok());
        assert!(matches!(
            parse_last_update("yesterday"),
            Err(AppError::DateTimeParse(_))
        ));
    }

    #[test]
    fn test_roster() {
        let response: RosterResponse = serde_json::from_str(ROSTER_JSON).unwrap();
        let roster = process_roster(response, "112").unwrap();
        assert_eq!(roster.team_id, "112");
        assert_eq!(roster.players.len(), 2);
        assert_eq!(roster.players[1].name_display_first_last, "Kris Bryant");
    }

    #[test]
    fn test_roster_with_single_player() {
        let response: RosterResponse = serde_json::from_str(ROSTER_SINGLE_JSON).unwrap();
        let roster = process_roster(response, "112").unwrap();
        assert_eq!(roster.players.len(), 1);
    }

    #[test]
    fn test_injuries_filtered_by_team() {
        let response: InjuryResponse = serde_json::from_str(INJURIES_JSON).unwrap();
        let injuries = process_injuries(response, "112").unwrap();
        assert_eq!(injuries.injuries.len(), 1);
        assert_eq!(injuries.injuries[0].name_last, "Schwarber");

        let response: InjuryResponse = serde_json::from_str(INJURIES_JSON).unwrap();
        assert!(process_injuries(response, "999").unwrap().injuries.is_empty());
    }

    #[test]
    fn test_standings_grouped_by_division() {
        let response: StandingsResponse = serde_json::from_str(STANDINGS_JSON).unwrap();
        let standings = process_standings(response, "http://test").unwrap();

        let names: Vec<&str> = standings.divisions.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["AL East", "AL Central", "AL West", "NL East", "NL Central", "NL West"]
        );

        let central = standings.division("NL Central").unwrap();
        assert_eq!(central.teams.len(), 2);
        assert_eq!(central.teams[0].team_full, "Chicago Cubs");
        assert!(standings.division("AL West").unwrap().teams.is_empty());
    }

    #[test]
    fn test_unknown_league_is_rejected() {
        let json = r#"{"standings_schedule_date":{"standings_all_date_rptr":{"standings_all_date":[{"league_id":"999","queryResults":{"created":"2016-06-01T09:00:00","row":[]}}]}}}"#;
        let response: StandingsResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            process_standings(response, "http://test"),
            Err(AppError::UnknownLeague { .. })
        ));
    }

    #[test]
    fn test_empty_standings_are_no_data() {
        let json = r#"{"standings_schedule_date":{"standings_all_date_rptr":{"standings_all_date":[]}}}"#;
        let response: StandingsResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            process_standings(response, "http://test"),
            Err(AppError::ApiNoData { .. })
        ));
    }
}
