use crate::errors::{OseError, Result};
use crate::models::quote::{DateRange, FilterPolicy};
use crate::util;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Csv,
    Plot,
    Current,
}

impl Mode {
    fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "plot" => Some(Self::Plot),
            "current" => Some(Self::Current),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub ticker: String,
    pub mode: Mode,
    pub range: DateRange,
    pub policy: FilterPolicy,
}

/// Validate the raw CLI arguments into run options. Problems are
/// collected, not short-circuited, so the user sees everything wrong
/// with the invocation in one pass. `current` mode ignores dates.
pub fn build_options(
    ticker: &str,
    mode_token: &str,
    date_args: &[String],
    inclusive: bool,
    today: NaiveDate,
) -> Result<RunOptions> {
    let mut problems = Vec::new();

    let mode = Mode::parse(mode_token);
    if mode.is_none() {
        problems.push(format!(
            "Mode '{}' not recognized. Try csv, plot or current.",
            mode_token
        ));
    }

    let mut from = DateRange::sentinel_start();
    let mut to = today;

    if mode != Some(Mode::Current) {
        match date_args.len() {
            0 => {}
            1 => match util::parse_yyyymmdd(&date_args[0]) {
                Ok(date) => from = date,
                Err(_) => problems.push(format!(
                    "Could not parse from-date '{}'. Expected YYYYMMDD.",
                    date_args[0]
                )),
            },
            2 => {
                match util::parse_yyyymmdd(&date_args[0]) {
                    Ok(date) => from = date,
                    Err(_) => problems.push(format!(
                        "Could not parse from-date '{}'. Expected YYYYMMDD.",
                        date_args[0]
                    )),
                }
                match util::parse_yyyymmdd(&date_args[1]) {
                    Ok(date) => to = date,
                    Err(_) => problems.push(format!(
                        "Could not parse to-date '{}'. Expected YYYYMMDD.",
                        date_args[1]
                    )),
                }
            }
            n => problems.push(format!("Expected at most 2 date arguments, got {}.", n)),
        }

        if problems.is_empty() && from > to {
            problems.push(format!(
                "From-date {} is after to-date {}.",
                from.format("%Y%m%d"),
                to.format("%Y%m%d")
            ));
        }
    }

    if !problems.is_empty() {
        return Err(OseError::arguments(problems));
    }

    Ok(RunOptions {
        ticker: ticker.to_string(),
        // Unknown mode was pushed as a problem above.
        mode: mode.unwrap(),
        range: DateRange::new(from, to),
        policy: if inclusive {
            FilterPolicy::Inclusive
        } else {
            FilterPolicy::Exclusive
        },
    })
}
