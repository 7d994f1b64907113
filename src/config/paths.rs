use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("mlbgame")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("mlbgame")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

/// Returns the default location of the local game database.
///
/// Uses the platform data directory (e.g., ~/.local/share on Linux) so the
/// database survives config resets.
pub fn get_default_data_dir() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("mlbgame")
        .join("gameday")
        .to_string_lossy()
        .to_string()
}
