//! Application-wide constants and configuration values
//!
//! Endpoint templates, defaults and tuning values live here so the
//! fetchers, the local database and the update tool agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 8;

/// Default endpoints
pub mod endpoints {
    /// Root of the GameDay directory tree (`year_YYYY/month_MM/day_DD/...`)
    pub const GAMEDAY_URL: &str = "http://gd2.mlb.com/components/game/mlb";

    /// League and team properties document
    pub const PROPERTIES_URL: &str = "http://mlb.mlb.com/properties/mlb_properties.xml";

    /// Host serving the JSON lookup services (rosters, standings, injuries)
    pub const LOOKUP_URL: &str = "http://mlb.mlb.com";
}

/// File names inside the GameDay tree
pub mod files {
    pub const SCOREBOARD: &str = "scoreboard.xml";
    pub const BOX_SCORE: &str = "boxscore.xml";
    pub const GAME_EVENTS: &str = "game_events.xml";
    pub const LINESCORE: &str = "linescore.xml";
    pub const PLAYERS: &str = "players.xml";

    /// Suffix appended to files stored in the local database
    pub const GZIP_SUFFIX: &str = ".gz";
}

/// Update tool defaults
pub mod update {
    /// First day covered by the historical database
    pub const DEFAULT_START_DATE: &str = "01-01-2012";

    /// Date format accepted by `--start` and `--end`
    pub const CLI_DATE_FORMAT: &str = "%m-%d-%Y";

    /// Days before today whose stored scoreboards are still refreshed
    pub const MUTABLE_DAYS: i64 = 1;
}

/// Scoreboard served when mlb.com has no scoreboard for a day
pub const DEFAULT_SCOREBOARD_XML: &str =
    r#"<?xml version="1.0" encoding="UTF-8"?><scoreboard></scoreboard>"#;

/// Retry configuration
pub mod retry {
    /// Maximum number of retry attempts for a single request
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Initial backoff before the first retry (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;

    /// Retry delay for rate limit errors (seconds)
    pub const RATE_LIMIT_DELAY_SECONDS: u64 = 60;

    /// Retry delay for server errors (seconds)
    pub const SERVER_ERROR_DELAY_SECONDS: u64 = 5;

    /// Retry delay for service unavailable errors (seconds)
    pub const SERVICE_UNAVAILABLE_DELAY_SECONDS: u64 = 30;

    /// Retry delay for network timeout errors (seconds)
    pub const NETWORK_TIMEOUT_DELAY_SECONDS: u64 = 2;

    /// Retry delay for network connection errors (seconds)
    pub const NETWORK_CONNECTION_DELAY_SECONDS: u64 = 10;
}

/// Environment variable names
pub mod env_vars {
    pub const GAMEDAY_URL: &str = "MLBGAME_GAMEDAY_URL";
    pub const PROPERTIES_URL: &str = "MLBGAME_PROPERTIES_URL";
    pub const LOOKUP_URL: &str = "MLBGAME_LOOKUP_URL";
    pub const DATA_DIR: &str = "MLBGAME_DATA_DIR";
    pub const LOG_FILE: &str = "MLBGAME_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "MLBGAME_HTTP_TIMEOUT";
}

/// MLB league identifiers used by the lookup services
pub mod leagues {
    pub const AMERICAN_LEAGUE_ID: &str = "103";
    pub const NATIONAL_LEAGUE_ID: &str = "104";

    /// (division id, display name) pairs for the American League
    pub const AL_DIVISIONS: [(&str, &str); 3] = [
        ("201", "AL East"),
        ("202", "AL Central"),
        ("200", "AL West"),
    ];

    /// (division id, display name) pairs for the National League
    pub const NL_DIVISIONS: [(&str, &str); 3] = [
        ("204", "NL East"),
        ("205", "NL Central"),
        ("203", "NL West"),
    ];
}
