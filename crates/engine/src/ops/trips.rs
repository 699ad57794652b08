use std::collections::HashSet;

use chrono::NaiveDate;

use crate::store::Collection;
use crate::{
    Budget, BudgetKind, EngineError, Hotel, ItineraryEntry, PackingList, ResultEngine, Spend,
    Transport, Trip, dates,
};

use super::{Engine, normalize_required_name};

impl Engine {
    /// Create a trip and synthesize its derived skeleton: one blank itinerary
    /// entry per day (final day included) and the two system budgets.
    pub fn new_trip(
        &self,
        name: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> ResultEngine<Trip> {
        let name = normalize_required_name(name, "trip")?;
        if end_date < start_date {
            return Err(EngineError::InvalidDate(
                "trip end date before start date".to_string(),
            ));
        }

        let trip = Trip::new(name, start_date, end_date);

        let mut trips: Vec<Trip> = self.load(Collection::Trips)?;
        trips.push(trip.clone());
        self.save(Collection::Trips, &trips)?;

        let mut entries: Vec<ItineraryEntry> = self.load(Collection::ItineraryEntries)?;
        for date in dates::trip_days(start_date, end_date) {
            entries.push(ItineraryEntry::day(trip.id.clone(), date));
        }
        self.save(Collection::ItineraryEntries, &entries)?;

        let mut budgets: Vec<Budget> = self.load(Collection::Budgets)?;
        budgets.push(Budget::system(trip.id.clone(), BudgetKind::Accommodation));
        budgets.push(Budget::system(trip.id.clone(), BudgetKind::Transport));
        self.save(Collection::Budgets, &budgets)?;

        tracing::info!(trip_id = %trip.id, "created trip");
        Ok(trip)
    }

    /// Return a trip by id.
    pub fn trip(&self, trip_id: &str) -> ResultEngine<Trip> {
        self.require_trip(trip_id)
    }

    /// Return all trips.
    pub fn trips(&self) -> ResultEngine<Vec<Trip>> {
        self.load(Collection::Trips)
    }

    /// Patch the trip row. The itinerary skeleton is not reshaped on date
    /// changes; callers wanting a rebuilt skeleton delete and recreate.
    pub fn update_trip(
        &self,
        trip_id: &str,
        name: Option<&str>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> ResultEngine<Trip> {
        let mut trips: Vec<Trip> = self.load(Collection::Trips)?;
        let trip = trips
            .iter_mut()
            .find(|trip| trip.id == trip_id)
            .ok_or_else(|| EngineError::KeyNotFound("trip not exists".to_string()))?;

        if let Some(name) = name {
            trip.name = normalize_required_name(name, "trip")?;
        }
        if let Some(start_date) = start_date {
            trip.start_date = start_date;
        }
        if let Some(end_date) = end_date {
            trip.end_date = end_date;
        }
        if trip.end_date < trip.start_date {
            return Err(EngineError::InvalidDate(
                "trip end date before start date".to_string(),
            ));
        }

        let updated = trip.clone();
        self.save(Collection::Trips, &trips)?;
        Ok(updated)
    }

    /// Delete a trip and every record referencing it, across every
    /// collection. The store offers no cross-collection transaction, so this
    /// is an ordered sequence of independent replace-alls; a failure leaves
    /// the earlier steps in place.
    pub fn delete_trip(&self, trip_id: &str) -> ResultEngine<()> {
        // 1) trip row
        let mut trips: Vec<Trip> = self.load(Collection::Trips)?;
        let before = trips.len();
        trips.retain(|trip| trip.id != trip_id);
        if trips.len() == before {
            return Err(EngineError::KeyNotFound("trip not exists".to_string()));
        }
        self.save(Collection::Trips, &trips)?;

        // 2) itinerary entries
        let mut entries: Vec<ItineraryEntry> = self.load(Collection::ItineraryEntries)?;
        entries.retain(|entry| entry.trip_id != trip_id);
        self.save(Collection::ItineraryEntries, &entries)?;

        // 3) packing lists
        let mut lists: Vec<PackingList> = self.load(Collection::PackingLists)?;
        lists.retain(|list| list.trip_id != trip_id);
        self.save(Collection::PackingLists, &lists)?;

        // 4) hotels and transports (their derived rows fell in steps 2 and 6)
        let mut hotels: Vec<Hotel> = self.load(Collection::Hotels)?;
        hotels.retain(|hotel| hotel.trip_id != trip_id);
        self.save(Collection::Hotels, &hotels)?;

        let mut transports: Vec<Transport> = self.load(Collection::Transports)?;
        transports.retain(|transport| transport.trip_id != trip_id);
        self.save(Collection::Transports, &transports)?;

        // 5) budgets, remembering their ids
        let mut budgets: Vec<Budget> = self.load(Collection::Budgets)?;
        let removed_budgets: HashSet<String> = budgets
            .iter()
            .filter(|budget| budget.trip_id == trip_id)
            .map(|budget| budget.id.clone())
            .collect();
        budgets.retain(|budget| budget.trip_id != trip_id);
        self.save(Collection::Budgets, &budgets)?;

        // 6) spends, including those reachable only via the removed budgets
        let mut spends: Vec<Spend> = self.load(Collection::Spends)?;
        spends.retain(|spend| {
            spend.trip_id != trip_id && !removed_budgets.contains(&spend.budget_id)
        });
        self.save(Collection::Spends, &spends)?;

        tracing::info!(trip_id, "deleted trip and dependent records");
        Ok(())
    }
}
