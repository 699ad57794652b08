//! Calendar-date helpers shared by the lifecycle manager and the sync engine.
//!
//! Two different range conventions live side by side on purpose: hotel
//! *nights* cover `[start, end)` (the checkout day is not a night), while a
//! trip's *days* cover `[start, end]` (the final day still gets an itinerary
//! entry even though no night follows it).

use chrono::NaiveDate;

use crate::{EngineError, ResultEngine};

/// Display date format used by clients (`31/12/2024`).
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Dates from `start` inclusive to `end` exclusive.
///
/// `start >= end` yields an empty iterator, never a negative-length or
/// infinite one.
pub fn nights(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> + Clone {
    start.iter_days().take_while(move |date| *date < end)
}

/// Dates from `start` to `end`, both inclusive.
pub fn trip_days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> + Clone {
    start.iter_days().take_while(move |date| *date <= end)
}

/// Number of nights in `[start, end)`; zero for same-day or inverted ranges.
pub fn night_count(start: NaiveDate, end: NaiveDate) -> u32 {
    if start >= end {
        return 0;
    }
    u32::try_from((end - start).num_days()).unwrap_or(0)
}

/// Cost attributed to each covered unit: `total / max(1, nights)`.
///
/// The `max(1, ..)` keeps a same-day range from dividing by zero and makes a
/// single-night stay carry the full cost.
pub fn cost_per_night(total_minor: i64, start: NaiveDate, end: NaiveDate) -> i64 {
    total_minor / i64::from(night_count(start, end).max(1))
}

/// Splits `total_minor` over `nights` shares, remainder on the first share,
/// so the shares always sum back to the total.
pub fn night_shares(total_minor: i64, nights: u32) -> Vec<i64> {
    if nights == 0 {
        return Vec::new();
    }
    let nights = i64::from(nights);
    let base = total_minor / nights;
    let remainder = total_minor - base * nights;
    (0..nights)
        .map(|night| if night == 0 { base + remainder } else { base })
        .collect()
}

/// Parse a client display date (`%d/%m/%Y`).
pub fn parse_display_date(value: &str) -> ResultEngine<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DISPLAY_FORMAT)
        .map_err(|_| EngineError::InvalidDate(format!("expected dd/mm/yyyy, got \"{value}\"")))
}

/// Format a calendar date for clients (`%d/%m/%Y`).
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
