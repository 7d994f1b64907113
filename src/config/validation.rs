use crate::error::AppError;
use std::path::Path;

/// Validates a single endpoint URL.
///
/// Endpoints must be absolute `http://` or `https://` URLs; mlb.com still
/// serves the GameDay tree over plain HTTP, so both schemes are accepted.
pub fn validate_url(name: &str, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| {
            AppError::config_error(format!("{name} must start with http:// or https://"))
        })?;

    if rest.is_empty() || rest.starts_with('/') {
        return Err(AppError::config_error(format!("{name} is missing a host")));
    }

    Ok(())
}

/// Validates the configuration settings
///
/// # Validation Rules
/// - Every endpoint must be a non-empty http(s) URL with a host
/// - If a data directory is provided, it cannot be empty
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - HTTP timeout must be positive
pub fn validate_config(
    endpoints: &[(&str, &str)],
    data_dir: &Option<String>,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
) -> Result<(), AppError> {
    for (name, url) in endpoints {
        validate_url(name, url)?;
    }

    if let Some(dir) = data_dir
        && dir.trim().is_empty()
    {
        return Err(AppError::config_error("Data directory cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    Ok(())
}
