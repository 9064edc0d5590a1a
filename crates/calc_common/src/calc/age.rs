//! Age from date of birth, in calendar years/months/days

use crate::api::AgeResult;
use crate::error::CalcError;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Parse an ISO-8601 date of birth. A full date-time is accepted and only
/// its date part is kept.
pub fn parse_dob(input: &str) -> Result<NaiveDate, CalcError> {
    let text = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date);
    }
    text.parse::<NaiveDateTime>()
        .map(|dt| dt.date())
        .map_err(|_| CalcError::InvalidDate(input.to_string()))
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Age of someone born on `dob` as of `today`.
///
/// Days are borrowed from the month preceding `today`'s month. When the
/// birth day does not exist in that month (born on the 31st, previous month
/// has 30 days) the anniversary falls on that month's last day.
pub fn compute_age(dob: NaiveDate, today: NaiveDate) -> Result<AgeResult, CalcError> {
    if dob > today {
        return Err(CalcError::DobInFuture);
    }

    let mut years = today.year() - dob.year();
    let mut months = today.month() as i32 - dob.month() as i32;
    let mut days = today.day() as i32 - dob.day() as i32;

    if days < 0 {
        months -= 1;
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        let prev_len = days_in_month(prev_year, prev_month) as i32;
        days = today.day() as i32 + prev_len - (dob.day() as i32).min(prev_len);
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(AgeResult {
        years,
        months,
        days,
        total_days: (today - dob).num_days(),
    })
}
