//! Generic HTTP fetching utilities with retry logic and error handling

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// Maps a non-success HTTP status to the matching error variant.
fn status_error(status: reqwest::StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Fetches a document as text.
///
/// Transient failures (timeouts, connection errors, 429 and 5xx responses)
/// are retried with exponential backoff, honouring `Retry-After`. Every
/// other failure is returned straight away, including 404 which callers
/// translate into their own "not there" meaning.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch
///
/// # Returns
/// * `Result<String, AppError>` - Response body or error; an empty body is
///   [`AppError::ApiNoData`]
#[instrument(skip(client))]
pub async fn fetch_text(client: &Client, url: &str) -> Result<String, AppError> {
    debug!("Fetching {url}");

    let mut attempt = 0u32;
    let mut backoff = Duration::from_millis(retry::BASE_DELAY_MS);
    let response = loop {
        match client.get(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if (status.as_u16() == 429 || status.is_server_error())
                    && attempt < retry::MAX_ATTEMPTS
                {
                    let retry_after = resp
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|h| h.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .map(Duration::from_secs);
                    let wait = retry_after.unwrap_or(backoff);
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status,
                        url,
                        wait,
                        attempt + 1,
                        retry::MAX_ATTEMPTS
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                break resp;
            }
            Err(e) => {
                if (e.is_timeout() || e.is_connect()) && attempt < retry::MAX_ATTEMPTS {
                    warn!(
                        "Request error {} for {}. Retrying in {:?} (attempt {}/{})",
                        e,
                        url,
                        backoff,
                        attempt + 1,
                        retry::MAX_ATTEMPTS
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                    backoff = backoff.saturating_mul(2);
                    continue;
                }
                error!("Request failed for URL {}: {}", url, e);
                return if e.is_timeout() {
                    Err(AppError::network_timeout(url))
                } else if e.is_connect() {
                    Err(AppError::network_connection(url, e.to_string()))
                } else {
                    Err(AppError::ApiFetch(e))
                };
            }
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let err = status_error(status, url);
        // Missing days and games are routine in the GameDay tree
        if status.as_u16() == 404 {
            debug!("Not found: {url}");
        } else {
            error!("HTTP {} (URL: {})", status.as_u16(), url);
        }
        return Err(err);
    }

    let body = response.text().await.map_err(|e| {
        error!("Failed to read response body from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;

    debug!("Response length: {} bytes", body.len());

    if body.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url));
    }

    Ok(body)
}

/// Fetches and deserializes a JSON lookup response.
///
/// Parse failures are classified as malformed JSON when the body does not
/// look like JSON at all, otherwise as an unexpected structure.
#[instrument(skip(client))]
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let body = fetch_text(client, url).await?;

    serde_json::from_str::<T>(&body).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            body.chars().take(200).collect::<String>()
        );

        let trimmed = body.trim_start();
        if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
