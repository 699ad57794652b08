//! Itinerary entries: one manual entry per trip day, plus derived entries
//! materialized by the sync engine for hotel nights and transport legs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::RecordSource;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryEntry {
    pub id: String,
    pub trip_id: String,
    pub date: NaiveDate,
    /// Free-text note for the day (manual entries only).
    pub day_note: Option<String>,
    /// Title of the night/event (hotel name, leg description, or user text).
    pub title: Option<String>,
    /// Cost share attributed to this entry, in integer cents.
    pub cost_minor: Option<i64>,
    pub source: RecordSource,
    /// Back-reference to the spend synthesized alongside a derived entry.
    pub spend_id: Option<String>,
}

impl ItineraryEntry {
    /// A blank per-day entry, created as part of the trip skeleton.
    pub fn day(trip_id: String, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id,
            date,
            day_note: None,
            title: None,
            cost_minor: None,
            source: RecordSource::Manual,
            spend_id: None,
        }
    }

    /// An entry materialized by the sync engine for one covered date.
    pub fn derived(
        trip_id: String,
        date: NaiveDate,
        title: String,
        cost_minor: i64,
        source: RecordSource,
        spend_id: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id,
            date,
            day_note: None,
            title: Some(title),
            cost_minor: Some(cost_minor),
            source,
            spend_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_entries_are_manual_and_blank() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let entry = ItineraryEntry::day("t1".to_string(), date);
        assert!(entry.source.is_manual());
        assert!(entry.day_note.is_none());
        assert!(entry.cost_minor.is_none());
    }
}
