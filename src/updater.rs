//! Refreshes the local game database from mlb.com.

use chrono::NaiveDate;
use std::fmt;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

use crate::constants::files;
use crate::data_fetcher::api::{Gameday, days_in_range, is_mutable_day, today};
use crate::data_fetcher::models::GameScoreboard;
use crate::data_fetcher::processors::parse_scoreboard;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Also store box scores of finished games
    pub more: bool,
    /// No progress output on stdout
    pub hide: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub days_scanned: usize,
    pub scoreboards_written: usize,
    /// Stored scoreboards that can no longer change
    pub scoreboards_skipped: usize,
    pub box_scores_written: usize,
    pub box_scores_skipped: usize,
    /// Finished games whose box score mlb.com does not have
    pub box_scores_missing: usize,
    /// Days with at least one failed request
    pub failures: Vec<NaiveDate>,
    /// Days held by the database after the run
    pub days_stored: usize,
}

impl UpdateSummary {
    fn record_failure(&mut self, date: NaiveDate) {
        if self.failures.last() != Some(&date) {
            self.failures.push(date);
        }
    }
}

impl fmt::Display for UpdateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Days scanned: {}", self.days_scanned)?;
        writeln!(
            f,
            "Scoreboards: {} written, {} already stored",
            self.scoreboards_written, self.scoreboards_skipped
        )?;
        write!(
            f,
            "Box scores: {} written, {} already stored, {} missing",
            self.box_scores_written, self.box_scores_skipped, self.box_scores_missing
        )?;
        write!(f, "\nDatabase: {} days stored", self.days_stored)?;
        if !self.failures.is_empty() {
            let days: Vec<String> = self
                .failures
                .iter()
                .map(|date| date.format("%m-%d-%Y").to_string())
                .collect();
            write!(f, "\nFailed days ({}): {}", days.len(), days.join(", "))?;
        }
        Ok(())
    }
}

/// Walks `[start, end]` one day at a time and stores what is new.
pub async fn run_update(
    gameday: &Gameday,
    options: &UpdateOptions,
) -> Result<UpdateSummary, AppError> {
    run_update_with_today(gameday, options, today()).await
}

/// [`run_update`] with an injected current date.
#[instrument(skip(gameday))]
pub async fn run_update_with_today(
    gameday: &Gameday,
    options: &UpdateOptions,
    today: NaiveDate,
) -> Result<UpdateSummary, AppError> {
    if options.start > options.end {
        return Err(AppError::config_error(format!(
            "Start date {} is after end date {}",
            options.start, options.end
        )));
    }

    let total = (options.end - options.start).num_days() + 1;
    info!(
        "Updating {} days from {} to {} (box scores: {})",
        total, options.start, options.end, options.more
    );

    let mut summary = UpdateSummary::default();
    let mut progress = Progress::new(total, options.hide);

    for date in days_in_range(options.start, options.end) {
        summary.days_scanned += 1;
        update_day(gameday, options, today, date, &mut summary).await?;
        progress.advance(summary.days_scanned);
    }

    progress.finish();
    summary.days_stored = gameday.store().stored_days().await?.len();
    info!(
        "Update finished: {} scoreboards written, {} box scores written, {} failed days",
        summary.scoreboards_written,
        summary.box_scores_written,
        summary.failures.len()
    );
    if !options.hide {
        println!("{summary}");
    }

    Ok(summary)
}

/// Network failures are recorded in `summary`; only store errors are returned.
async fn update_day(
    gameday: &Gameday,
    options: &UpdateOptions,
    today: NaiveDate,
    date: NaiveDate,
    summary: &mut UpdateSummary,
) -> Result<(), AppError> {
    let store = gameday.store();

    let stored = if is_mutable_day(date, today) {
        None
    } else {
        stored_games(gameday, date).await
    };

    let games = match stored {
        Some(games) => {
            debug!("Scoreboard for {date} already stored");
            summary.scoreboards_skipped += 1;
            if !options.more {
                return Ok(());
            }
            games
        }
        None => match gameday.fetch_scoreboard_xml(date).await {
            Ok(Some(xml)) => {
                let games = match parse_scoreboard(&xml) {
                    Ok(games) => games,
                    Err(e) => {
                        warn!("Scoreboard for {date} is not valid GameDay XML: {e}");
                        summary.record_failure(date);
                        return Ok(());
                    }
                };
                store.write_scoreboard(date, &xml).await?;
                summary.scoreboards_written += 1;
                games
            }
            Ok(None) => {
                debug!("No scoreboard for {date}");
                return Ok(());
            }
            Err(e) => {
                warn!("Failed to fetch scoreboard for {date}: {e}");
                summary.record_failure(date);
                return Ok(());
            }
        },
    };

    if !options.more {
        return Ok(());
    }

    for game in games.iter().filter(|game| game.is_final()) {
        if store.has_box_score(&game.game_id).await {
            summary.box_scores_skipped += 1;
            continue;
        }

        match gameday.fetch_game_file(&game.game_id, files::BOX_SCORE).await {
            Ok(box_score) => {
                store.write_box_score(&game.game_id, &box_score).await?;
                summary.box_scores_written += 1;
            }
            Err(e) if e.is_not_found() => {
                debug!("No box score for {}", game.game_id);
                summary.box_scores_missing += 1;
            }
            Err(e) => {
                warn!("Failed to fetch box score for {}: {}", game.game_id, e);
                summary.record_failure(date);
            }
        }
    }

    Ok(())
}

/// Games of a stored scoreboard. `None` when the day is not stored or the
/// stored copy cannot be read back, so the day is fetched again.
async fn stored_games(gameday: &Gameday, date: NaiveDate) -> Option<Vec<GameScoreboard>> {
    let xml = match gameday.store().read_scoreboard(date).await {
        Ok(xml) => xml?,
        Err(e) => {
            warn!("Stored scoreboard for {date} is unreadable, fetching it again: {e}");
            return None;
        }
    };

    match parse_scoreboard(&xml) {
        Ok(games) => Some(games),
        Err(e) => {
            warn!("Stored scoreboard for {date} is not valid, fetching it again: {e}");
            None
        }
    }
}

/// `Loading games (NN%)` line, redrawn in place when the percentage changes.
struct Progress {
    total: i64,
    hide: bool,
    last_percent: Option<i64>,
}

impl Progress {
    fn new(total: i64, hide: bool) -> Self {
        Progress {
            total: total.max(1),
            hide,
            last_percent: None,
        }
    }

    fn advance(&mut self, done: usize) {
        if self.hide {
            return;
        }
        let percent = (done as i64 * 100 / self.total).min(100);
        if self.last_percent == Some(percent) {
            return;
        }
        self.last_percent = Some(percent);

        let mut stdout = std::io::stdout();
        let _ = write!(stdout, "\rLoading games ({percent:02}%)");
        let _ = stdout.flush();
    }

    fn finish(&self) {
        if !self.hide && self.last_percent.is_some() {
            println!();
        }
    }
}
