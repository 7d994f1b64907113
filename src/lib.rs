//! MLB GameDay client library
//!
//! This library reads Major League Baseball game data published as GameDay
//! XML files (scoreboards, box scores, line scores, play-by-play and
//! rosters) and the mlb.com JSON lookup services. Downloaded documents can
//! be kept in a local gzip database, which the `mlbgame-update` tool fills.
//!
//! # Examples
//!
//! ```rust,no_run
//! use mlbgame::{DateQuery, Gameday, TeamFilter, combine_games};
//! use mlbgame::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let gameday = Gameday::from_default_config().await?;
//!
//!     // Every Cubs game of June 2016, home or away
//!     let filter = TeamFilter {
//!         home: Some("Cubs".to_string()),
//!         away: Some("Cubs".to_string()),
//!     };
//!     let days = gameday.games(&DateQuery::month(2016, 6), &filter).await?;
//!
//!     for game in combine_games(days) {
//!         println!("{game}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod store;
pub mod testing_utils;
pub mod updater;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{DateQuery, Gameday, combine_games};
pub use data_fetcher::models::{
    GameBoxScore, GameEvents, GameId, GameOverview, GamePlayers, GameScoreboard, Injuries,
    LeagueInfo, PlayerStats, Roster, Standings, TeamFilter, TeamInfo, TeamStats,
};
pub use error::AppError;
pub use store::LocalStore;
pub use updater::{UpdateOptions, UpdateSummary, run_update};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
