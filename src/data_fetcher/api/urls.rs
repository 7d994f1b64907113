//! URL building utilities for the GameDay tree and the lookup services

use crate::constants::files;
use crate::data_fetcher::models::GameId;
use chrono::{Datelike, NaiveDate};

/// Builds the directory URL of one day in the GameDay tree.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use mlbgame::data_fetcher::api::build_day_url;
///
/// let date = NaiveDate::from_ymd_opt(2015, 4, 5).unwrap();
/// let url = build_day_url("http://gd2.mlb.com/components/game/mlb", date);
/// assert_eq!(url, "http://gd2.mlb.com/components/game/mlb/year_2015/month_04/day_05/");
/// ```
pub fn build_day_url(base: &str, date: NaiveDate) -> String {
    format!(
        "{}/year_{}/month_{:02}/day_{:02}/",
        base.trim_end_matches('/'),
        date.year(),
        date.month(),
        date.day()
    )
}

/// Builds the URL of a day's `scoreboard.xml`.
pub fn build_scoreboard_url(base: &str, date: NaiveDate) -> String {
    format!("{}{}", build_day_url(base, date), files::SCOREBOARD)
}

/// Builds the URL of a file inside a game's `gid_` directory.
///
/// # Example
/// ```
/// use mlbgame::data_fetcher::api::build_game_file_url;
/// use mlbgame::data_fetcher::models::GameId;
///
/// let id = GameId::parse("2015_04_05_slnmlb_chnmlb_1").unwrap();
/// let url = build_game_file_url("http://gd2.mlb.com/components/game/mlb", &id, "boxscore.xml");
/// assert_eq!(
///     url,
///     "http://gd2.mlb.com/components/game/mlb/year_2015/month_04/day_05/gid_2015_04_05_slnmlb_chnmlb_1/boxscore.xml"
/// );
/// ```
pub fn build_game_file_url(base: &str, game_id: &GameId, file: &str) -> String {
    format!(
        "{}{}/{}",
        build_day_url(base, game_id.date()),
        game_id.gid(),
        file
    )
}

/// Builds the 40-man roster lookup URL for a team.
pub fn build_roster_url(lookup_base: &str, team_id: &str) -> String {
    format!(
        "{}/lookup/json/named.roster_40.bam?team_id={}",
        lookup_base.trim_end_matches('/'),
        team_id
    )
}

/// Builds the standings lookup URL. The current standings and the
/// historical standings live behind different services.
pub fn build_standings_url(lookup_base: &str, date: NaiveDate, today: NaiveDate) -> String {
    let base = lookup_base.trim_end_matches('/');
    let season = date.year();
    let game_date = date.format("%Y/%m/%d");

    if date == today {
        format!(
            "{base}/lookup/json/named.standings_schedule_date.bam?season={season}&schedule_game_date.game_date=%27{game_date}%27&sit_code=%27h0%27&league_id=103&league_id=104&all_star_sw=%27N%27&version=2"
        )
    } else {
        format!(
            "{base}/lookup/json/named.historical_standings_schedule_date.bam?season={season}&game_date=%27{game_date}%27&sit_code=%27h0%27&league_id=103&league_id=104&all_star_sw=%27N%27&version=48"
        )
    }
}

/// Builds the injury report lookup URL. The report covers every team.
pub fn build_injury_url(lookup_base: &str) -> String {
    format!(
        "{}/fantasylookup/json/named.wsfb_news_injury.bam",
        lookup_base.trim_end_matches('/')
    )
}
