//! Resolution of free-form, bilingual day arguments into calendar dates.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use thiserror::Error;

/// Display format for resolved dates (DD/MM/YYYY)
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Shortest argument accepted, single letters are ambiguous between weekdays
const MIN_ARGUMENT_LEN: usize = 2;

const TODAY: [&str; 2] = ["today", "vandaag"];

const RELATIVE_OFFSETS: [(&str, u64); 3] = [("tomorrow", 1), ("morgen", 1), ("overmorgen", 2)];

/// Weekday names matched by prefix. English entries come first and win ties.
const WEEKDAYS: [(&str, Weekday); 14] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
    ("maandag", Weekday::Mon),
    ("dinsdag", Weekday::Tue),
    ("woensdag", Weekday::Wed),
    ("donderdag", Weekday::Thu),
    ("vrijdag", Weekday::Fri),
    ("zaterdag", Weekday::Sat),
    ("zondag", Weekday::Sun),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("Argument \"{0}\" is too short, use at least 2 characters.")]
    TooShort(String),
    #[error("Unable to parse argument \"{0}\".")]
    Unrecognized(String),
    #[error("\"{0}\" is not a valid date.")]
    InvalidDate(String),
}

/// One way of reading an argument: a cheap applicability check and the resolver
/// that runs when it holds. A resolver returning `None` means the argument was
/// meant for this strategy but does not describe a real date.
struct Strategy {
    name: &'static str,
    applies: fn(&str) -> bool,
    resolve: fn(&str, NaiveDate) -> Option<NaiveDate>,
}

/// Strategies in priority order, the first applicable one decides
const STRATEGIES: [Strategy; 5] = [
    Strategy {
        name: "today",
        applies: |arg| TODAY.iter().any(|keyword| *keyword == arg),
        resolve: |_, today| Some(today),
    },
    Strategy {
        name: "relative offset",
        applies: |arg| RELATIVE_OFFSETS.iter().any(|(keyword, _)| *keyword == arg),
        resolve: resolve_offset,
    },
    Strategy {
        name: "weekday",
        applies: |arg| WEEKDAYS.iter().any(|(name, _)| name.starts_with(arg)),
        resolve: resolve_weekday,
    },
    Strategy {
        name: "day/month",
        applies: |arg| arg.contains('/'),
        resolve: resolve_day_month,
    },
    Strategy {
        name: "iso date",
        applies: |arg| arg.contains('-'),
        resolve: resolve_iso_date,
    },
];

/// Resolves a day argument relative to `now`
///
/// # Arguments
/// * `argument` - Raw argument, `None` means today
/// * `now` - Reference moment for relative and symbolic arguments
/// * `skip_weekends` - Move Saturdays and Sundays forward to the next Monday
///
/// # Returns
/// * `Result<NaiveDate, DateParseError>` - Resolved date or the reason it failed
///
/// # Supported Formats
/// * "today", "vandaag"
/// * "tomorrow", "morgen", "overmorgen"
/// * Any prefix of an English or Dutch weekday, at least 2 characters
/// * "DD/MM", "DD/MM/YY", "DD/MM/YYYY"
/// * "YYYY-mm-DD", "YY-mm-DD" and "mm-DD"
pub fn resolve(
    argument: Option<&str>,
    now: NaiveDateTime,
    skip_weekends: bool,
) -> Result<NaiveDate, DateParseError> {
    let today = now.date();

    let date = match argument {
        None => today,
        Some(raw) => resolve_argument(raw, today)?,
    };

    if skip_weekends {
        return Ok(skip_weekend(date));
    }
    Ok(date)
}

fn resolve_argument(raw: &str, today: NaiveDate) -> Result<NaiveDate, DateParseError> {
    let argument = raw.trim().to_lowercase();

    if argument.chars().count() < MIN_ARGUMENT_LEN {
        return Err(DateParseError::TooShort(raw.to_string()));
    }

    let Some(strategy) = STRATEGIES.iter().find(|s| (s.applies)(&argument)) else {
        return Err(DateParseError::Unrecognized(raw.to_string()));
    };

    log::debug!("Resolving \"{}\" as {}", argument, strategy.name);
    (strategy.resolve)(&argument, today).ok_or_else(|| DateParseError::InvalidDate(raw.to_string()))
}

fn resolve_offset(argument: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (_, offset) = RELATIVE_OFFSETS
        .iter()
        .find(|(keyword, _)| *keyword == argument)?;
    today.checked_add_days(Days::new(*offset))
}

fn resolve_weekday(argument: &str, today: NaiveDate) -> Option<NaiveDate> {
    let (_, weekday) = WEEKDAYS.iter().find(|(name, _)| name.starts_with(argument))?;
    next_weekday(today, *weekday)
}

/// Next occurrence of `weekday` strictly after `today`, so 1 to 7 days ahead
fn next_weekday(today: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = today.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();

    let days = match (7 + target - current) % 7 {
        0 => 7,
        n => n,
    };
    today.checked_add_days(Days::new(u64::from(days)))
}

/// Parses "DD/MM", "DD/MM/YY" and "DD/MM/YYYY".
///
/// Without a year the current one is used, unless that day already passed,
/// then it rolls over to next year.
fn resolve_day_month(argument: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = argument.split('/').map(str::trim).collect();

    let (day, month, year) = match parts.as_slice() {
        [day, month] => (parse_number(day)?, parse_number(month)?, None),
        [day, month, year] => (parse_number(day)?, parse_number(month)?, Some(parse_year(year)?)),
        _ => return None,
    };

    date_or_next_year(year, month, day, today)
}

/// Parses "YYYY-mm-DD", "YY-mm-DD" and "mm-DD", the last one rolling over like "DD/MM"
fn resolve_iso_date(argument: &str, today: NaiveDate) -> Option<NaiveDate> {
    let parts: Vec<&str> = argument.split('-').map(str::trim).collect();

    let (year, month, day) = match parts.as_slice() {
        [month, day] => (None, parse_number(month)?, parse_number(day)?),
        [year, month, day] => (Some(parse_year(year)?), parse_number(month)?, parse_number(day)?),
        _ => return None,
    };

    date_or_next_year(year, month, day, today)
}

/// Builds the date, picking this year or next when `year` is absent
fn date_or_next_year(year: Option<i32>, month: u32, day: u32, today: NaiveDate) -> Option<NaiveDate> {
    let year = year.unwrap_or_else(|| {
        if (month, day) < (today.month(), today.day()) {
            today.year() + 1
        } else {
            today.year()
        }
    });

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_number(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Two-digit years are read as 20YY
fn parse_year(raw: &str) -> Option<i32> {
    let year = i32::try_from(parse_number(raw)?).ok()?;
    match raw.len() {
        2 => Some(2000 + year),
        4 => Some(year),
        _ => None,
    }
}

/// Moves a Saturday or Sunday forward to the following Monday
pub fn skip_weekend(date: NaiveDate) -> NaiveDate {
    let days = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    date.checked_add_days(Days::new(days)).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Wednesday 21 October 2026, noon
    fn wednesday() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 21)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn no_argument_is_today() {
        assert_eq!(resolve(None, wednesday(), false), Ok(date(2026, 10, 21)));
    }

    #[test]
    fn no_argument_on_saturday_skips_to_monday() {
        assert_eq!(resolve(None, at(2026, 10, 24), true), Ok(date(2026, 10, 26)));
        assert_eq!(resolve(None, at(2026, 10, 24), false), Ok(date(2026, 10, 24)));
    }

    #[test]
    fn explicit_today_in_both_languages() {
        for arg in ["today", "vandaag", "TODAY"] {
            assert_eq!(resolve(Some(arg), wednesday(), false), Ok(date(2026, 10, 21)));
        }
    }

    #[test]
    fn relative_offsets() {
        let tomorrow = resolve(Some("tomorrow"), wednesday(), false);
        assert_eq!(tomorrow, Ok(date(2026, 10, 22)));
        assert_eq!(resolve(Some("morgen"), wednesday(), false), tomorrow);
        assert_eq!(resolve(Some("overmorgen"), wednesday(), false), Ok(date(2026, 10, 23)));
    }

    #[test]
    fn monday_on_a_wednesday_is_five_days_ahead() {
        assert_eq!(resolve(Some("monday"), wednesday(), false), Ok(date(2026, 10, 26)));
        assert_eq!(resolve(Some("Maandag"), wednesday(), false), Ok(date(2026, 10, 26)));
    }

    #[test]
    fn same_weekday_advances_a_full_week() {
        assert_eq!(resolve(Some("wednesday"), wednesday(), false), Ok(date(2026, 10, 28)));
        assert_eq!(resolve(Some("woe"), wednesday(), false), Ok(date(2026, 10, 28)));
    }

    #[test]
    fn every_weekday_prefix_lands_on_that_weekday_within_a_week() {
        for offset in 0..7 {
            let now = wednesday() + chrono::Duration::days(offset);
            for (name, weekday) in WEEKDAYS {
                for len in MIN_ARGUMENT_LEN..=name.len() {
                    let resolved = resolve(Some(&name[..len]), now, false).unwrap();
                    let ahead = (resolved - now.date()).num_days();

                    assert_eq!(resolved.weekday(), weekday, "{} on {}", &name[..len], now);
                    assert!((1..=7).contains(&ahead), "{} on {}", &name[..len], now);
                }
            }
        }
    }

    #[test]
    fn prefix_ties_follow_table_order() {
        // "mo" only matches English, "ma" only Dutch, both Monday
        assert_eq!(resolve(Some("mo"), wednesday(), false), Ok(date(2026, 10, 26)));
        assert_eq!(resolve(Some("ma"), wednesday(), false), Ok(date(2026, 10, 26)));
        // "do" is donderdag, not a typo'd English day
        assert_eq!(resolve(Some("do"), wednesday(), false), Ok(date(2026, 10, 22)));
    }

    #[test]
    fn single_character_is_too_short() {
        for arg in ["t", "m", "z", "1"] {
            assert_eq!(
                resolve(Some(arg), wednesday(), false),
                Err(DateParseError::TooShort(arg.to_string()))
            );
        }
    }

    #[test]
    fn day_month_in_the_past_rolls_to_next_year() {
        assert_eq!(resolve(Some("15/03"), wednesday(), false), Ok(date(2027, 3, 15)));
    }

    #[test]
    fn day_month_today_or_later_stays_this_year() {
        assert_eq!(resolve(Some("15/03"), at(2026, 3, 15), false), Ok(date(2026, 3, 15)));
        assert_eq!(resolve(Some("15/03"), at(2026, 2, 1), false), Ok(date(2026, 3, 15)));
    }

    #[test]
    fn explicit_years() {
        assert_eq!(resolve(Some("1/2/27"), wednesday(), false), Ok(date(2027, 2, 1)));
        assert_eq!(resolve(Some("01/02/2025"), wednesday(), false), Ok(date(2025, 2, 1)));
        assert_eq!(resolve(Some("2025-02-01"), wednesday(), false), Ok(date(2025, 2, 1)));
    }

    #[test]
    fn dashed_dates_with_short_or_missing_year() {
        assert_eq!(resolve(Some("26-11-03"), wednesday(), false), Ok(date(2026, 11, 3)));
        assert_eq!(resolve(Some("11-03"), wednesday(), false), Ok(date(2026, 11, 3)));
        assert_eq!(resolve(Some("03-15"), wednesday(), false), Ok(date(2027, 3, 15)));
        assert_eq!(resolve(Some("10-21"), wednesday(), false), Ok(date(2026, 10, 21)));
    }

    #[test]
    fn malformed_dashed_dates_fail() {
        for arg in ["026-11-03", "2026-13-01", "11-32", "2026-11-03-01", "-11", "ab-cd"] {
            assert_eq!(
                resolve(Some(arg), wednesday(), false),
                Err(DateParseError::InvalidDate(arg.to_string())),
                "{arg}"
            );
        }
    }

    #[test]
    fn numeric_saturday_skips_to_monday() {
        assert_eq!(resolve(Some("24/10"), wednesday(), true), Ok(date(2026, 10, 26)));
        assert_eq!(resolve(Some("24/10"), wednesday(), false), Ok(date(2026, 10, 24)));
    }

    #[test]
    fn weekday_sunday_skips_to_monday() {
        assert_eq!(resolve(Some("zondag"), wednesday(), true), Ok(date(2026, 10, 26)));
    }

    #[test]
    fn malformed_numeric_dates_fail() {
        for arg in ["32/01", "15/13", "29/02/2027", "1/2/3", "a/b", "1/2/3/4", "+1/2", "12/"] {
            assert_eq!(
                resolve(Some(arg), wednesday(), false),
                Err(DateParseError::InvalidDate(arg.to_string())),
                "{arg}"
            );
        }
    }

    #[test]
    fn unknown_words_fail() {
        assert_eq!(
            resolve(Some("someday"), wednesday(), false),
            Err(DateParseError::Unrecognized("someday".to_string()))
        );
        assert_eq!(
            resolve(Some("tom"), wednesday(), false),
            Err(DateParseError::Unrecognized("tom".to_string()))
        );
    }
}
