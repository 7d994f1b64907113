//! Local game database.
//!
//! Files are stored gzip-compressed under the same directory layout as the
//! GameDay tree:
//!
//! ```text
//! {root}/year_2015/month_04/day_05/scoreboard.xml.gz
//! {root}/year_2015/month_04/day_05/gid_2015_04_05_slnmlb_chnmlb_1/boxscore.xml.gz
//! ```

use crate::config::Config;
use crate::constants::files;
use crate::data_fetcher::models::GameId;
use crate::error::AppError;
use chrono::{Datelike, NaiveDate};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        LocalStore { root: root.into() }
    }

    /// Opens the database at the configured data directory.
    pub fn open(config: &Config) -> Self {
        Self::new(config.data_dir_path())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn day_dir(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(format!("year_{}", date.year()))
            .join(format!("month_{:02}", date.month()))
            .join(format!("day_{:02}", date.day()))
    }

    pub fn scoreboard_path(&self, date: NaiveDate) -> PathBuf {
        self.day_dir(date)
            .join(format!("{}{}", files::SCOREBOARD, files::GZIP_SUFFIX))
    }

    pub fn box_score_path(&self, game_id: &GameId) -> PathBuf {
        self.day_dir(game_id.date())
            .join(game_id.gid())
            .join(format!("{}{}", files::BOX_SCORE, files::GZIP_SUFFIX))
    }

    /// Stored scoreboard of a day, `None` when the day was never stored.
    pub async fn read_scoreboard(&self, date: NaiveDate) -> Result<Option<String>, AppError> {
        read_gz(&self.scoreboard_path(date)).await
    }

    pub async fn read_box_score(&self, game_id: &GameId) -> Result<Option<String>, AppError> {
        read_gz(&self.box_score_path(game_id)).await
    }

    pub async fn write_scoreboard(&self, date: NaiveDate, xml: &str) -> Result<PathBuf, AppError> {
        let path = self.scoreboard_path(date);
        write_gz(&path, xml).await?;
        Ok(path)
    }

    pub async fn write_box_score(&self, game_id: &GameId, xml: &str) -> Result<PathBuf, AppError> {
        let path = self.box_score_path(game_id);
        write_gz(&path, xml).await?;
        Ok(path)
    }

    pub async fn has_scoreboard(&self, date: NaiveDate) -> bool {
        exists(&self.scoreboard_path(date)).await
    }

    pub async fn has_box_score(&self, game_id: &GameId) -> bool {
        exists(&self.box_score_path(game_id)).await
    }

    /// Dates with a stored scoreboard, oldest first.
    pub async fn stored_days(&self) -> Result<Vec<NaiveDate>, AppError> {
        let mut days = Vec::new();

        for (year, year_dir) in numbered_dirs(&self.root, "year_").await? {
            for (month, month_dir) in numbered_dirs(&year_dir, "month_").await? {
                for (day, _) in numbered_dirs(&month_dir, "day_").await? {
                    let Some(date) = NaiveDate::from_ymd_opt(year as i32, month, day) else {
                        warn!("Ignoring impossible date directory {year}-{month}-{day}");
                        continue;
                    };
                    if self.has_scoreboard(date).await {
                        days.push(date);
                    }
                }
            }
        }

        days.sort();
        Ok(days)
    }
}

fn io_error(path: &Path, e: impl std::fmt::Display) -> AppError {
    AppError::store_error(path.display().to_string(), e.to_string())
}

async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

async fn read_gz(path: &Path) -> Result<Option<String>, AppError> {
    let compressed = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(io_error(path, e)),
    };

    let mut contents = String::new();
    GzDecoder::new(compressed.as_slice())
        .read_to_string(&mut contents)
        .map_err(|e| io_error(path, format!("corrupt gzip data: {e}")))?;

    debug!("Read {} bytes from {}", contents.len(), path.display());
    Ok(Some(contents))
}

/// Writes through a temporary sibling so readers never see a partial file.
async fn write_gz(path: &Path, contents: &str) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| io_error(parent, e))?;
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(contents.as_bytes())
        .map_err(|e| io_error(path, e))?;
    let compressed = encoder.finish().map_err(|e| io_error(path, e))?;

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    tokio::fs::write(&temp_path, &compressed)
        .await
        .map_err(|e| io_error(&temp_path, e))?;
    tokio::fs::rename(&temp_path, path)
        .await
        .map_err(|e| io_error(path, e))?;

    debug!("Stored {} ({} bytes)", path.display(), compressed.len());
    Ok(())
}

/// Subdirectories named `{prefix}{number}`, e.g. `month_04`.
async fn numbered_dirs(dir: &Path, prefix: &str) -> Result<Vec<(u32, PathBuf)>, AppError> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(io_error(dir, e)),
    };

    let mut found = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(dir, e))? {
        let name = entry.file_name();
        let Some(number) = name
            .to_str()
            .and_then(|name| name.strip_prefix(prefix))
            .and_then(|number| number.parse::<u32>().ok())
        else {
            continue;
        };
        if entry.path().is_dir() {
            found.push((number, entry.path()));
        }
    }

    Ok(found)
}
