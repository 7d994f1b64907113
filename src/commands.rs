use crate::cli::Args;
use mlbgame::config::Config;
use mlbgame::data_fetcher::api::{parse_cli_date, today};
use mlbgame::error::AppError;
use mlbgame::updater::{UpdateOptions, UpdateSummary, run_update};
use mlbgame::{Gameday, LocalStore};
use tracing::info;

/// Handles the --list-config command with the settings this run would use.
pub fn handle_list_config_command(config: &Config) {
    config.display();
}

/// Turns the command line dates into update options.
pub fn update_options(args: &Args) -> Result<UpdateOptions, AppError> {
    let start = parse_cli_date(&args.start)?;
    let end = match &args.end {
        Some(end) => parse_cli_date(end)?,
        None => today(),
    };

    if start > end {
        return Err(AppError::config_error(format!(
            "Start date {} must not be after end date {}",
            args.start,
            end.format("%m-%d-%Y")
        )));
    }

    Ok(UpdateOptions {
        start,
        end,
        more: args.more,
        hide: args.hide,
    })
}

/// Handles the default update run.
pub async fn handle_update_command(args: &Args, config: Config) -> Result<UpdateSummary, AppError> {
    let options = update_options(args)?;
    let store = LocalStore::open(&config);
    info!("Game database: {}", store.root().display());

    let gameday = Gameday::with_store(config, store)?;
    run_update(&gameday, &options).await
}
