pub mod date_logic;
pub mod fetch_utils;
pub mod http_client;
mod lookup_api;
mod orchestrator;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
pub use fetch_utils::{fetch_json, fetch_text};
pub use date_logic::{DateQuery, days_in_range, is_mutable_day, parse_cli_date, today};
pub use orchestrator::{Gameday, combine_games};
