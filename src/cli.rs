use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use mlbgame::constants::update::DEFAULT_START_DATE;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Whether log records are echoed to stdout next to the progress line.
///
/// Only with `--debug`, and never when `--hide` keeps stdout quiet.
pub fn logs_to_stdout(args: &Args) -> bool {
    args.debug && !args.hide
}

/// MLB GameDay database updater
///
/// Downloads daily scoreboards (and optionally box scores) from the MLB
/// GameDay service into the local game database. Days that are already
/// stored and can no longer change are skipped, so repeated runs only fetch
/// what is new.
///
/// Dates use the MM-DD-YYYY format.
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    /// Hide progress output. Logs still go to the log file.
    #[arg(long)]
    pub hide: bool,

    /// Also download box scores of finished games.
    #[arg(short = 'm', long)]
    pub more: bool,

    /// First day to update.
    #[arg(short = 's', long, value_name = "MM-DD-YYYY", default_value = DEFAULT_START_DATE)]
    pub start: String,

    /// Last day to update. Defaults to today.
    #[arg(short = 'e', long, value_name = "MM-DD-YYYY")]
    pub end: Option<String>,

    /// Use this directory as the game database for this run.
    #[arg(long = "data-dir", help_heading = "Configuration")]
    pub data_dir: Option<String>,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Configuration")]
    pub log_file: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Echo log records to stdout as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,
}
