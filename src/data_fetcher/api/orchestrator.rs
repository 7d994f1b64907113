//! Entry point tying the local database, the GameDay tree and the parsers together.

use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::constants::{DEFAULT_SCOREBOARD_XML, files};
use crate::data_fetcher::models::{
    GameBoxScore, GameEvents, GameId, GameOverview, GamePlayers, GameScoreboard, LeagueInfo,
    PlayerStats, TeamFilter, TeamInfo, TeamStats,
};
use crate::data_fetcher::processors::{
    process_box_score, process_game_events, process_league, process_overview,
    process_player_stats, process_players, process_scoreboard, process_team_stats, process_teams,
};
use crate::error::AppError;
use crate::store::LocalStore;

use super::date_logic::{DateQuery, is_mutable_day, today};
use super::fetch_utils::fetch_text;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_game_file_url, build_scoreboard_url};

/// Reads games from the local database and falls back to mlb.com.
///
/// Every request is awaited in turn; nothing is fetched concurrently.
///
/// # Example
/// ```rust,no_run
/// use mlbgame::data_fetcher::api::Gameday;
/// use mlbgame::data_fetcher::models::TeamFilter;
///
/// #[tokio::main]
/// async fn main() -> Result<(), mlbgame::AppError> {
///     let gameday = Gameday::from_default_config().await?;
///     let date = chrono::NaiveDate::from_ymd_opt(2015, 4, 5).unwrap();
///
///     for game in gameday.day(date, &TeamFilter::home("Cubs")).await? {
///         println!("{game}");
///         let box_score = gameday.box_score(&game.game_id).await?;
///         println!("{box_score}");
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Gameday {
    pub(super) client: Client,
    pub(super) config: Config,
    store: LocalStore,
}

impl Gameday {
    /// Creates a reader using the database at the configured data directory.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let store = LocalStore::open(&config);
        Self::with_store(config, store)
    }

    pub fn with_store(config: Config, store: LocalStore) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Gameday {
            client,
            config,
            store,
        })
    }

    /// Loads the configuration file (or defaults) and creates a reader.
    pub async fn from_default_config() -> Result<Self, AppError> {
        Self::new(Config::load().await?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    /// Downloads a day's `scoreboard.xml`. `None` when mlb.com has no
    /// scoreboard for the day.
    #[instrument(skip(self))]
    pub async fn fetch_scoreboard_xml(&self, date: NaiveDate) -> Result<Option<String>, AppError> {
        let url = build_scoreboard_url(&self.config.gameday_url, date);
        match fetch_text(&self.client, &url).await {
            Ok(xml) => Ok(Some(xml)),
            Err(AppError::ApiNotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Downloads a file from a game's directory. A 404 means the id does not
    /// name a game.
    #[instrument(skip(self))]
    pub async fn fetch_game_file(&self, game_id: &GameId, file: &str) -> Result<String, AppError> {
        let url = build_game_file_url(&self.config.gameday_url, game_id, file);
        fetch_text(&self.client, &url).await.map_err(|e| match e {
            AppError::ApiNotFound { .. } => AppError::game_not_found(game_id.as_str()),
            other => other,
        })
    }

    /// Scoreboard document of a day, from the database when it holds a copy
    /// that can no longer change.
    pub async fn scoreboard_xml(&self, date: NaiveDate) -> Result<String, AppError> {
        if !is_mutable_day(date, today())
            && let Some(xml) = self.store.read_scoreboard(date).await?
        {
            debug!("Using stored scoreboard for {date}");
            return Ok(xml);
        }

        Ok(self
            .fetch_scoreboard_xml(date)
            .await?
            .unwrap_or_else(|| DEFAULT_SCOREBOARD_XML.to_string()))
    }

    /// Box score document of a game, from the database when stored.
    pub async fn box_score_xml(&self, game_id: &GameId) -> Result<String, AppError> {
        if let Some(xml) = self.store.read_box_score(game_id).await? {
            debug!("Using stored box score for {game_id}");
            return Ok(xml);
        }
        self.fetch_game_file(game_id, files::BOX_SCORE).await
    }

    /// Games of one day matching `filter`.
    pub async fn day(
        &self,
        date: NaiveDate,
        filter: &TeamFilter,
    ) -> Result<Vec<GameScoreboard>, AppError> {
        let xml = self.scoreboard_xml(date).await?;
        process_scoreboard(&xml, filter)
    }

    /// Games of every date in `query`, one list per day that had matching
    /// games, in calendar order.
    pub async fn games(
        &self,
        query: &DateQuery,
        filter: &TeamFilter,
    ) -> Result<Vec<Vec<GameScoreboard>>, AppError> {
        let dates = query.dates();
        info!("Loading games for {} dates", dates.len());

        let mut results = Vec::new();
        for date in dates {
            let games = self.day(date, filter).await?;
            if !games.is_empty() {
                results.push(games);
            }
        }
        Ok(results)
    }

    pub async fn box_score(&self, game_id: &GameId) -> Result<GameBoxScore, AppError> {
        let xml = self.box_score_xml(game_id).await?;
        process_box_score(&xml, game_id)
    }

    pub async fn player_stats(&self, game_id: &GameId) -> Result<PlayerStats, AppError> {
        let xml = self.box_score_xml(game_id).await?;
        process_player_stats(&xml)
    }

    pub async fn team_stats(&self, game_id: &GameId) -> Result<TeamStats, AppError> {
        let xml = self.box_score_xml(game_id).await?;
        process_team_stats(&xml)
    }

    pub async fn overview(&self, game_id: &GameId) -> Result<GameOverview, AppError> {
        let xml = self.fetch_game_file(game_id, files::LINESCORE).await?;
        process_overview(&xml)
    }

    pub async fn game_events(&self, game_id: &GameId) -> Result<GameEvents, AppError> {
        let xml = self.fetch_game_file(game_id, files::GAME_EVENTS).await?;
        process_game_events(&xml)
    }

    pub async fn players(&self, game_id: &GameId) -> Result<GamePlayers, AppError> {
        let xml = self.fetch_game_file(game_id, files::PLAYERS).await?;
        process_players(&xml)
    }

    #[instrument(skip(self))]
    async fn properties_xml(&self) -> Result<String, AppError> {
        let url = &self.config.properties_url;
        fetch_text(&self.client, url).await.map_err(|e| match e {
            AppError::ApiNotFound { url } => AppError::properties_unavailable(url),
            other => other,
        })
    }

    pub async fn league(&self) -> Result<LeagueInfo, AppError> {
        process_league(&self.properties_xml().await?)
    }

    pub async fn teams(&self) -> Result<Vec<TeamInfo>, AppError> {
        process_teams(&self.properties_xml().await?)
    }
}

/// Flattens per-day results of [`Gameday::games`] into one list.
pub fn combine_games(games: Vec<Vec<GameScoreboard>>) -> Vec<GameScoreboard> {
    games.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{
        BOXSCORE_XML, GAME_EVENTS_XML, LINESCORE_XML, PLAYERS_XML, PROPERTIES_XML,
        SCOREBOARD_XML, TestDataBuilder,
    };
    use tempfile::TempDir;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, path_regex},
    };

    const OPENER_DIR: &str = "/year_2015/month_04/day_05/gid_2015_04_05_slnmlb_chnmlb_1";

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn gameday(mock_server: &MockServer) -> (Gameday, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            gameday_url: mock_server.uri(),
            properties_url: format!("{}/properties/mlb_properties.xml", mock_server.uri()),
            lookup_url: mock_server.uri(),
            data_dir: Some(dir.path().to_string_lossy().to_string()),
            log_file_path: None,
            http_timeout_seconds: 5,
        };
        (Gameday::new(config).unwrap(), dir)
    }

    async fn serve(mock_server: &MockServer, route: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(mock_server)
            .await;
    }

    async fn request_count(mock_server: &MockServer) -> usize {
        mock_server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }

    #[tokio::test]
    async fn test_day_fetches_and_filters() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/year_2015/month_04/day_05/scoreboard.xml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SCOREBOARD_XML))
            .expect(2)
            .mount(&mock_server)
            .await;
        let (gameday, _dir) = gameday(&mock_server);

        let all = gameday.day(date(2015, 4, 5), &TeamFilter::all()).await.unwrap();
        assert_eq!(all.len(), 3);

        let cubs = gameday
            .day(date(2015, 4, 5), &TeamFilter::home("Cubs"))
            .await
            .unwrap();
        assert_eq!(cubs.len(), 1);
    }

    #[tokio::test]
    async fn test_day_without_scoreboard_has_no_games() {
        let mock_server = MockServer::start().await;
        serve(&mock_server, "/year_2015/month_01/day_01/scoreboard.xml", 404, "").await;
        let (gameday, _dir) = gameday(&mock_server);

        let games = gameday.day(date(2015, 1, 1), &TeamFilter::all()).await.unwrap();
        assert!(games.is_empty());
    }

    #[tokio::test]
    async fn test_stored_scoreboard_is_used_without_network() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/year_2015/month_04/day_05/scoreboard.xml"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&mock_server)
            .await;
        let (gameday, _dir) = gameday(&mock_server);
        gameday
            .store()
            .write_scoreboard(date(2015, 4, 5), SCOREBOARD_XML)
            .await
            .unwrap();

        let games = gameday.day(date(2015, 4, 5), &TeamFilter::all()).await.unwrap();
        assert_eq!(games.len(), 3);
    }

    #[tokio::test]
    async fn test_games_over_query_and_combine() {
        let mock_server = MockServer::start().await;
        serve(
            &mock_server,
            "/year_2016/month_07/day_04/scoreboard.xml",
            200,
            &TestDataBuilder::scoreboard(&[TestDataBuilder::final_game(
                "2016_07_04_nynmlb_chnmlb_1",
                ("Cubs", "chn", 4),
                ("Mets", "nyn", 2),
            )]),
        )
        .await;
        serve(
            &mock_server,
            "/year_2016/month_07/day_05/scoreboard.xml",
            200,
            &TestDataBuilder::scoreboard(&[
                TestDataBuilder::final_game("2016_07_05_nynmlb_chnmlb_1", ("Cubs", "chn", 1), ("Mets", "nyn", 5)),
                TestDataBuilder::final_game("2016_07_05_slnmlb_pitmlb_1", ("Pirates", "pit", 3), ("Cardinals", "sln", 2)),
            ]),
        )
        .await;
        serve(&mock_server, "/year_2016/month_07/day_06/scoreboard.xml", 404, "").await;
        let (gameday, _dir) = gameday(&mock_server);

        let query = DateQuery {
            years: vec![2016],
            months: Some(vec![7]),
            days: Some(vec![4, 5, 6]),
        };
        let per_day = gameday.games(&query, &TeamFilter::all()).await.unwrap();
        assert_eq!(per_day.len(), 2);
        assert_eq!(per_day[1].len(), 2);
        assert_eq!(combine_games(per_day).len(), 3);

        let cubs = gameday.games(&query, &TeamFilter::home("chn")).await.unwrap();
        assert_eq!(combine_games(cubs).len(), 2);
    }

    #[tokio::test]
    async fn test_box_score_store_first_then_network() {
        let mock_server = MockServer::start().await;
        serve(&mock_server, &format!("{OPENER_DIR}/boxscore.xml"), 200, BOXSCORE_XML).await;
        let (gameday, _dir) = gameday(&mock_server);
        let id = GameId::parse("2015_04_05_slnmlb_chnmlb_1").unwrap();

        let box_score = gameday.box_score(&id).await.unwrap();
        assert_eq!(box_score.away_totals.runs, 3);
        assert_eq!(request_count(&mock_server).await, 1);

        gameday
            .store()
            .write_box_score(&id, &TestDataBuilder::box_score(9, 9))
            .await
            .unwrap();
        let stored = gameday.box_score(&id).await.unwrap();
        assert_eq!(stored.home_totals.runs, 9);
        assert_eq!(request_count(&mock_server).await, 1);
    }

    #[tokio::test]
    async fn test_stats_from_box_score() {
        let mock_server = MockServer::start().await;
        serve(&mock_server, &format!("{OPENER_DIR}/boxscore.xml"), 200, BOXSCORE_XML).await;
        let (gameday, _dir) = gameday(&mock_server);
        let id = GameId::parse("2015_04_05_slnmlb_chnmlb_1").unwrap();

        let players = gameday.player_stats(&id).await.unwrap();
        assert_eq!(players.away_pitching.len(), 2);
        let teams = gameday.team_stats(&id).await.unwrap();
        assert_eq!(teams.away_batting.hits, 9);
    }

    #[tokio::test]
    async fn test_game_files() {
        let mock_server = MockServer::start().await;
        serve(&mock_server, &format!("{OPENER_DIR}/linescore.xml"), 200, LINESCORE_XML).await;
        serve(&mock_server, &format!("{OPENER_DIR}/game_events.xml"), 200, GAME_EVENTS_XML).await;
        serve(&mock_server, &format!("{OPENER_DIR}/players.xml"), 200, PLAYERS_XML).await;
        let (gameday, _dir) = gameday(&mock_server);
        let id = GameId::parse("2015_04_05_slnmlb_chnmlb_1").unwrap();

        assert_eq!(gameday.overview(&id).await.unwrap().venue, "Wrigley Field");
        assert_eq!(gameday.game_events(&id).await.unwrap().innings.len(), 2);
        assert_eq!(gameday.players(&id).await.unwrap().umpires.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_game_is_game_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex("gid_2015_04_05_xxxmlb_yyymlb_1"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;
        let (gameday, _dir) = gameday(&mock_server);
        let id = GameId::parse("2015_04_05_xxxmlb_yyymlb_1").unwrap();

        let err = gameday.overview(&id).await.unwrap_err();
        assert!(matches!(err, AppError::GameNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Could not find a game with that id: 2015_04_05_xxxmlb_yyymlb_1"
        );
        assert!(matches!(
            gameday.box_score(&id).await,
            Err(AppError::GameNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_league_and_teams() {
        let mock_server = MockServer::start().await;
        serve(&mock_server, "/properties/mlb_properties.xml", 200, PROPERTIES_XML).await;
        let (gameday, _dir) = gameday(&mock_server);

        assert_eq!(gameday.league().await.unwrap().club, "mlb");
        let teams = gameday.teams().await.unwrap();
        assert_eq!(teams[1].to_string(), "St. Louis Cardinals (STL)");
    }

    #[tokio::test]
    async fn test_missing_properties_file() {
        let mock_server = MockServer::start().await;
        serve(&mock_server, "/properties/mlb_properties.xml", 404, "").await;
        let (gameday, _dir) = gameday(&mock_server);

        assert!(matches!(
            gameday.league().await,
            Err(AppError::PropertiesUnavailable { .. })
        ));
    }
}
