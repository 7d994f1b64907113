// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use mlbgame::config::Config;
use mlbgame::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load config first to fail early if there's an issue
    let mut config = Config::load().await?;
    if let Some(data_dir) = &args.data_dir {
        config.data_dir = Some(data_dir.clone());
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }

    if args.list_config {
        commands::handle_list_config_command(&config);
        return Ok(());
    }

    let (log_file_path, _guard) = logging::setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let summary = commands::handle_update_command(&args, config).await?;
    if !summary.failures.is_empty() {
        tracing::warn!(
            "{} days could not be updated, rerun to retry them",
            summary.failures.len()
        );
    }

    Ok(())
}
