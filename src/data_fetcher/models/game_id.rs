use crate::error::AppError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// GameDay game identifier, e.g. `2015_04_05_slnmlb_chnmlb_1`.
///
/// The id encodes the date, the away and home team codes (3-letter club
/// code followed by the sport code) and the game number for doubleheaders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId {
    raw: String,
    date: NaiveDate,
    away_team: String,
    home_team: String,
    game_number: u32,
}

impl GameId {
    /// Parses an id with or without the `gid_` directory prefix.
    pub fn parse(id: &str) -> Result<Self, AppError> {
        let trimmed = id.trim();
        let raw = trimmed.strip_prefix("gid_").unwrap_or(trimmed);
        let parts: Vec<&str> = raw.split('_').collect();

        if parts.len() != 6 {
            return Err(AppError::invalid_game_id(
                id,
                format!("expected 6 '_' separated segments, found {}", parts.len()),
            ));
        }

        let year = parts[0]
            .parse::<i32>()
            .map_err(|_| AppError::invalid_game_id(id, "year is not a number"))?;
        let month = parts[1]
            .parse::<u32>()
            .map_err(|_| AppError::invalid_game_id(id, "month is not a number"))?;
        let day = parts[2]
            .parse::<u32>()
            .map_err(|_| AppError::invalid_game_id(id, "day is not a number"))?;
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| AppError::invalid_game_id(id, "date does not exist"))?;

        let away_team = parts[3];
        let home_team = parts[4];
        for team in [away_team, home_team] {
            if team.len() < 3 || !team.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(AppError::invalid_game_id(
                    id,
                    format!("'{team}' is not a team code"),
                ));
            }
        }

        let game_number = parts[5]
            .parse::<u32>()
            .map_err(|_| AppError::invalid_game_id(id, "game number is not a number"))?;

        Ok(GameId {
            raw: raw.to_string(),
            date,
            away_team: away_team.to_string(),
            home_team: home_team.to_string(),
            game_number,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Away team with sport suffix, e.g. `slnmlb`.
    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    /// Home team with sport suffix, e.g. `chnmlb`.
    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    /// 3-letter club code of the away team, e.g. `sln`.
    pub fn away_code(&self) -> &str {
        &self.away_team[..3]
    }

    /// 3-letter club code of the home team, e.g. `chn`.
    pub fn home_code(&self) -> &str {
        &self.home_team[..3]
    }

    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    /// Directory name used in the GameDay tree, e.g. `gid_2015_04_05_slnmlb_chnmlb_1`.
    pub fn gid(&self) -> String {
        format!("gid_{}", self.raw)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for GameId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameId::parse(s)
    }
}
