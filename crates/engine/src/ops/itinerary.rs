//! Itinerary entry CRUD.
//!
//! Only manual entries are editable here: rows owned by a hotel or transport
//! are rebuilt wholesale on resynchronize, so an in-place edit would silently
//! vanish on the next sync.

use chrono::NaiveDate;

use crate::store::Collection;
use crate::{EngineError, ItineraryEntry, ResultEngine};

use super::Engine;

impl Engine {
    /// Return a trip's itinerary, ordered by date.
    pub fn itinerary_for_trip(&self, trip_id: &str) -> ResultEngine<Vec<ItineraryEntry>> {
        self.require_trip(trip_id)?;
        let mut entries: Vec<ItineraryEntry> = self.load(Collection::ItineraryEntries)?;
        entries.retain(|entry| entry.trip_id == trip_id);
        entries.sort_by_key(|entry| entry.date);
        Ok(entries)
    }

    /// Add a manual entry (an extra event besides the per-day skeleton).
    pub fn new_itinerary_entry(
        &self,
        trip_id: &str,
        date: NaiveDate,
        day_note: Option<String>,
        title: Option<String>,
        cost_minor: Option<i64>,
    ) -> ResultEngine<ItineraryEntry> {
        self.require_trip(trip_id)?;

        let mut entry = ItineraryEntry::day(trip_id.to_string(), date);
        entry.day_note = day_note;
        entry.title = title;
        entry.cost_minor = cost_minor;

        let mut entries: Vec<ItineraryEntry> = self.load(Collection::ItineraryEntries)?;
        entries.push(entry.clone());
        self.save(Collection::ItineraryEntries, &entries)?;
        Ok(entry)
    }

    /// Patch a manual entry's notes, title or cost.
    pub fn update_itinerary_entry(
        &self,
        entry_id: &str,
        day_note: Option<Option<String>>,
        title: Option<Option<String>>,
        cost_minor: Option<Option<i64>>,
    ) -> ResultEngine<ItineraryEntry> {
        let mut entries: Vec<ItineraryEntry> = self.load(Collection::ItineraryEntries)?;
        let entry = entries
            .iter_mut()
            .find(|entry| entry.id == entry_id)
            .ok_or_else(|| EngineError::KeyNotFound("itinerary entry not exists".to_string()))?;

        if !entry.source.is_manual() {
            return Err(EngineError::Validation(
                "entry is managed by its hotel/transport record".to_string(),
            ));
        }

        if let Some(day_note) = day_note {
            entry.day_note = day_note;
        }
        if let Some(title) = title {
            entry.title = title;
        }
        if let Some(cost_minor) = cost_minor {
            entry.cost_minor = cost_minor;
        }

        let updated = entry.clone();
        self.save(Collection::ItineraryEntries, &entries)?;
        Ok(updated)
    }
}
