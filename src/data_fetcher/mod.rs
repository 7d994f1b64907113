pub mod api;
pub mod models;
pub mod processors;
pub mod xml;

pub use api::{DateQuery, Gameday, combine_games};
pub use models::{GameId, GameScoreboard, TeamFilter};
