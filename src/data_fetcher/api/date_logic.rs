//! Date parsing, ranges and mutability rules

use crate::constants::update::{CLI_DATE_FORMAT, MUTABLE_DAYS};
use crate::error::AppError;
use chrono::{Local, NaiveDate};

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `MM-DD-YYYY` date as accepted by `--start` and `--end`.
pub fn parse_cli_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), CLI_DATE_FORMAT).map_err(|e| {
        AppError::datetime_parse_error(format!(
            "Invalid date '{value}', expected MM-DD-YYYY: {e}"
        ))
    })
}

/// Every day from `start` through `end`, both included.
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Whether a stored file for `date` may still change and must be refetched.
///
/// Scoreboards of today and yesterday are rewritten on update: late games
/// finish after midnight and in-progress games are stored mid-game.
pub fn is_mutable_day(date: NaiveDate, today: NaiveDate) -> bool {
    (today - date).num_days() <= MUTABLE_DAYS
}

/// Calendar selection for multi-day queries. Missing months or days mean
/// all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateQuery {
    pub years: Vec<i32>,
    pub months: Option<Vec<u32>>,
    pub days: Option<Vec<u32>>,
}

impl DateQuery {
    pub fn year(year: i32) -> Self {
        DateQuery {
            years: vec![year],
            months: None,
            days: None,
        }
    }

    pub fn month(year: i32, month: u32) -> Self {
        DateQuery {
            years: vec![year],
            months: Some(vec![month]),
            days: None,
        }
    }

    pub fn day(year: i32, month: u32, day: u32) -> Self {
        DateQuery {
            years: vec![year],
            months: Some(vec![month]),
            days: Some(vec![day]),
        }
    }

    /// Expands years x months x days into real dates in calendar order.
    /// Combinations that do not exist (February 30th) are skipped.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let all_months: Vec<u32> = (1..=12).collect();
        let all_days: Vec<u32> = (1..=31).collect();
        let months = self.months.as_deref().unwrap_or(&all_months);
        let days = self.days.as_deref().unwrap_or(&all_days);

        let mut dates = Vec::new();
        for &year in &self.years {
            for &month in months {
                for &day in days {
                    if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                        dates.push(date);
                    }
                }
            }
        }
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_parse_cli_date() {
        assert_eq!(parse_cli_date("04-05-2015").unwrap(), date(2015, 4, 5));
        assert_eq!(parse_cli_date(" 01-01-2012 ").unwrap(), date(2012, 1, 1));
        for bad in ["2015-04-05", "13-01-2015", "02-30-2016", "", "today"] {
            assert!(
                matches!(parse_cli_date(bad), Err(AppError::DateTimeParse(_))),
                "'{bad}' should be rejected"
            );
        }
    }

    #[test]
    fn test_days_in_range_is_inclusive() {
        let days: Vec<NaiveDate> = days_in_range(date(2016, 2, 28), date(2016, 3, 1)).collect();
        assert_eq!(days, vec![date(2016, 2, 28), date(2016, 2, 29), date(2016, 3, 1)]);

        assert_eq!(days_in_range(date(2016, 3, 1), date(2016, 3, 1)).count(), 1);
        assert_eq!(days_in_range(date(2016, 3, 2), date(2016, 3, 1)).count(), 0);
    }

    #[test]
    fn test_mutable_days() {
        let today = date(2017, 6, 10);
        assert!(is_mutable_day(today, today));
        assert!(is_mutable_day(date(2017, 6, 9), today));
        assert!(!is_mutable_day(date(2017, 6, 8), today));
        assert!(is_mutable_day(date(2017, 6, 11), today));
    }

    #[test]
    fn test_query_skips_impossible_dates() {
        let february = DateQuery::month(2015, 2).dates();
        assert_eq!(february.len(), 28);
        assert_eq!(february.first(), Some(&date(2015, 2, 1)));
        assert_eq!(february.last(), Some(&date(2015, 2, 28)));

        assert_eq!(DateQuery::year(2016).dates().len(), 366);
        assert_eq!(DateQuery::day(2015, 4, 31).dates(), Vec::<NaiveDate>::new());
    }

    #[test]
    fn test_query_with_selected_days() {
        let query = DateQuery {
            years: vec![2015, 2016],
            months: Some(vec![4]),
            days: Some(vec![5, 6]),
        };
        assert_eq!(
            query.dates(),
            vec![date(2015, 4, 5), date(2015, 4, 6), date(2016, 4, 5), date(2016, 4, 6)]
        );
    }
}
