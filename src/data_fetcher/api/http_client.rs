//! HTTP client construction

use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Creates the client shared by every GameDay and lookup request.
///
/// One client is built per [`Gameday`](super::Gameday) so the update walk
/// reuses pooled connections to gd2.mlb.com across thousands of days.
/// Retries are handled by the fetch helpers, not by the client.
pub fn create_http_client_with_timeout(timeout_seconds: u64) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .user_agent(USER_AGENT)
        .build()
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS)
        .expect("Failed to create test HTTP client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_the_crate() {
        assert!(USER_AGENT.starts_with("mlbgame/"));
    }

    #[test]
    fn test_client_builds_with_short_timeout() {
        assert!(create_http_client_with_timeout(1).is_ok());
        let _client = create_test_http_client();
    }
}
