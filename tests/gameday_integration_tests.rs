use chrono::NaiveDate;
use mlbgame::{
    Config, DateQuery, GameId, Gameday, LocalStore, TeamFilter, combine_games,
    testing_utils::{BOXSCORE_XML, LINESCORE_XML, SCOREBOARD_XML, TestDataBuilder},
};
use tempfile::{TempDir, tempdir};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex},
};

const DAY_URL: &str = "/components/game/mlb/year_2015/month_04";

fn opening_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 4, 5).unwrap()
}

fn gameday(mock_server: &MockServer) -> (Gameday, TempDir) {
    let dir = tempdir().unwrap();
    let config = Config {
        gameday_url: format!("{}/components/game/mlb", mock_server.uri()),
        properties_url: format!("{}/properties/mlb_properties.xml", mock_server.uri()),
        lookup_url: mock_server.uri(),
        data_dir: Some(dir.path().to_string_lossy().to_string()),
        log_file_path: None,
        http_timeout_seconds: 5,
    };
    (Gameday::new(config).unwrap(), dir)
}

#[tokio::test]
async fn test_day_is_read_from_network_without_touching_the_store() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DAY_URL}/day_05/scoreboard.xml")))
        .respond_with(ResponseTemplate::new(200).set_body_string(SCOREBOARD_XML))
        .expect(1)
        .mount(&mock_server)
        .await;
    let (gameday, _dir) = gameday(&mock_server);

    let games = gameday.day(opening_day(), &TeamFilter::all()).await.unwrap();
    assert_eq!(games.len(), 3);
    assert_eq!(games[0].to_string(), "Cardinals (3) at Cubs (0)");

    assert!(!gameday.store().has_scoreboard(opening_day()).await);
}

#[tokio::test]
async fn test_stored_scoreboard_is_preferred_for_settled_days() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("scoreboard.xml$"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TestDataBuilder::scoreboard(&[])))
        .expect(0)
        .mount(&mock_server)
        .await;
    let (gameday, _dir) = gameday(&mock_server);
    gameday
        .store()
        .write_scoreboard(opening_day(), SCOREBOARD_XML)
        .await
        .unwrap();

    let games = gameday.day(opening_day(), &TeamFilter::home("Cubs")).await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].game_id.as_str(), "2015_04_05_slnmlb_chnmlb_1");
}

#[tokio::test]
async fn test_day_without_scoreboard_has_no_games() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex("scoreboard.xml$"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;
    let (gameday, _dir) = gameday(&mock_server);

    let games = gameday.day(opening_day(), &TeamFilter::all()).await.unwrap();
    assert!(games.is_empty());
}

#[tokio::test]
async fn test_month_query_keeps_days_with_games() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{DAY_URL}/day_05/scoreboard.xml")))
        .respond_with(ResponseTemplate::new(200).set_body_string(SCOREBOARD_XML))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{DAY_URL}/day_06/scoreboard.xml")))
        .respond_with(ResponseTemplate::new(200).set_body_string(TestDataBuilder::scoreboard(&[
            TestDataBuilder::final_game(
                "2015_04_06_slnmlb_chnmlb_1",
                ("Cubs", "chn", 2),
                ("Cardinals", "sln", 1),
            ),
        ])))
        .mount(&mock_server)
        .await;
    // Every other day of the month is unknown to the server and answers 404
    let (gameday, _dir) = gameday(&mock_server);

    let filter = TeamFilter {
        home: Some("Cubs".to_string()),
        away: Some("Cubs".to_string()),
    };
    let days = gameday.games(&DateQuery::month(2015, 4), &filter).await.unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].len(), 1);

    let games = combine_games(days);
    assert_eq!(games.len(), 2);
    assert_eq!(games[1].winning_team(), Some("Cubs"));
}

#[tokio::test]
async fn test_box_score_comes_from_store_and_overview_from_network() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "{DAY_URL}/day_05/gid_2015_04_05_slnmlb_chnmlb_1/linescore.xml"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_string(LINESCORE_XML))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("boxscore.xml$"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;
    let (gameday, _dir) = gameday(&mock_server);
    let game_id = GameId::parse("2015_04_05_slnmlb_chnmlb_1").unwrap();
    gameday
        .store()
        .write_box_score(&game_id, BOXSCORE_XML)
        .await
        .unwrap();

    let box_score = gameday.box_score(&game_id).await.unwrap();
    assert_eq!(box_score.away_totals.runs, 3);
    assert_eq!(box_score.home_totals.errors, 1);

    let overview = gameday.overview(&game_id).await.unwrap();
    assert_eq!(overview.venue, "Wrigley Field");
    assert_eq!(overview.home_team_name, "Cubs");
}

#[tokio::test]
async fn test_unknown_game_is_reported() {
    let mock_server = MockServer::start().await;
    let (gameday, _dir) = gameday(&mock_server);
    let game_id = GameId::parse("2015_04_05_slnmlb_chnmlb_2").unwrap();

    let err = gameday.box_score(&game_id).await.unwrap_err();
    assert!(matches!(err, mlbgame::AppError::GameNotFound { .. }));
}

#[tokio::test]
async fn test_store_round_trip_through_gzip() {
    let dir = tempdir().unwrap();
    let store = LocalStore::new(dir.path());
    let game_id = GameId::parse("2015_04_05_slnmlb_chnmlb_1").unwrap();

    let path = store.write_box_score(&game_id, BOXSCORE_XML).await.unwrap();
    assert!(path.ends_with(
        "year_2015/month_04/day_05/gid_2015_04_05_slnmlb_chnmlb_1/boxscore.xml.gz"
    ));
    assert_eq!(
        store.read_box_score(&game_id).await.unwrap().as_deref(),
        Some(BOXSCORE_XML)
    );

    store.write_scoreboard(opening_day(), SCOREBOARD_XML).await.unwrap();
    assert_eq!(store.stored_days().await.unwrap(), vec![opening_day()]);
}
