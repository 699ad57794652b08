//! The stay/leg sync engine.
//!
//! A hotel or transport record fans out into one derived spend and
//! one-or-more derived itinerary entries, all tagged with the source record's
//! id. Resynchronize is a full teardown followed by a fresh synthesize,
//! never an in-place patch: an edit can change the night count, the per-night
//! split and the budget category at once, and partial patching cannot express
//! a changed night count. The strategy is private to this module; callers
//! only see the three operations.

use chrono::NaiveDate;

use crate::store::Collection;
use crate::{
    Budget, BudgetKind, Hotel, ItineraryEntry, RecordSource, ResultEngine, Spend, Transport, dates,
};

use super::Engine;

impl Engine {
    /// Delete every derived spend and itinerary entry tagged with `link_id`.
    ///
    /// Safe to call again after completion: nothing is left to match, so the
    /// second call writes nothing.
    pub(crate) fn teardown_derived(&self, link_id: &str) -> ResultEngine<()> {
        let mut spends: Vec<Spend> = self.load(Collection::Spends)?;
        let removed: Vec<Spend> = spends
            .iter()
            .filter(|spend| spend.source.link_id() == Some(link_id))
            .cloned()
            .collect();
        if !removed.is_empty() {
            spends.retain(|spend| spend.source.link_id() != Some(link_id));
            self.save(Collection::Spends, &spends)?;
            for spend in &removed {
                self.apply_spend_deleted(spend)?;
            }
        }

        let mut entries: Vec<ItineraryEntry> = self.load(Collection::ItineraryEntries)?;
        let before = entries.len();
        entries.retain(|entry| entry.source.link_id() != Some(link_id));
        if entries.len() != before {
            self.save(Collection::ItineraryEntries, &entries)?;
        }
        Ok(())
    }

    /// Fan a hotel out into its derived records: one spend against the
    /// trip's accommodation budget (cost > 0 only) and one itinerary entry
    /// per covered night. A same-day stay synthesizes no nights but still
    /// gets its spend; cost attribution and itinerary presence are
    /// independent concerns.
    pub(crate) fn synthesize_hotel(&self, hotel: &Hotel) -> ResultEngine<()> {
        let source = RecordSource::Hotel {
            hotel_id: hotel.id.clone(),
        };
        let spend_id = self.synthesize_spend(
            &hotel.trip_id,
            BudgetKind::Accommodation,
            &hotel.name,
            hotel.start_date,
            hotel.cost_minor,
            source.clone(),
        )?;

        let covered: Vec<NaiveDate> = dates::nights(hotel.start_date, hotel.end_date).collect();
        if covered.is_empty() {
            return Ok(());
        }

        let shares = dates::night_shares(hotel.cost_minor, covered.len() as u32);
        let mut entries: Vec<ItineraryEntry> = self.load(Collection::ItineraryEntries)?;
        for (date, share) in covered.into_iter().zip(shares) {
            entries.push(ItineraryEntry::derived(
                hotel.trip_id.clone(),
                date,
                hotel.name.clone(),
                share,
                source.clone(),
                spend_id.clone(),
            ));
        }
        self.save(Collection::ItineraryEntries, &entries)
    }

    /// Fan a transport leg out into one spend against the trip's transport
    /// budget (cost > 0 only) and a single itinerary entry at the departure
    /// date.
    pub(crate) fn synthesize_transport(&self, transport: &Transport) -> ResultEngine<()> {
        let source = RecordSource::Transport {
            transport_id: transport.id.clone(),
        };
        let spend_id = self.synthesize_spend(
            &transport.trip_id,
            BudgetKind::Transport,
            &transport.describe(),
            transport.start_date,
            transport.cost_minor,
            source.clone(),
        )?;

        let mut entries: Vec<ItineraryEntry> = self.load(Collection::ItineraryEntries)?;
        entries.push(ItineraryEntry::derived(
            transport.trip_id.clone(),
            transport.start_date,
            transport.describe(),
            transport.cost_minor,
            source,
            spend_id,
        ));
        self.save(Collection::ItineraryEntries, &entries)
    }

    /// Tear down everything tagged with the source id, then rebuild from the
    /// record's current state.
    pub(crate) fn resynchronize_hotel(&self, hotel: &Hotel) -> ResultEngine<()> {
        self.teardown_derived(&hotel.id)?;
        self.synthesize_hotel(hotel)
    }

    /// Tear down everything tagged with the source id, then rebuild from the
    /// record's current state.
    pub(crate) fn resynchronize_transport(&self, transport: &Transport) -> ResultEngine<()> {
        self.teardown_derived(&transport.id)?;
        self.synthesize_transport(transport)
    }

    /// Create the derived spend, if there is anything to attribute.
    ///
    /// A cost of exactly 0 suppresses the spend entirely (no zero-amount
    /// rows). A trip missing its system budget skips the spend with a
    /// warning and synthesis carries on with the itinerary entries.
    fn synthesize_spend(
        &self,
        trip_id: &str,
        budget_kind: BudgetKind,
        name: &str,
        date: NaiveDate,
        cost_minor: i64,
        source: RecordSource,
    ) -> ResultEngine<Option<String>> {
        if cost_minor <= 0 {
            return Ok(None);
        }

        let budgets: Vec<Budget> = self.load(Collection::Budgets)?;
        let Some(budget) = budgets
            .into_iter()
            .find(|budget| budget.trip_id == trip_id && budget.kind == budget_kind)
        else {
            tracing::warn!(
                trip_id,
                ?budget_kind,
                "trip is missing its system budget; derived spend skipped"
            );
            return Ok(None);
        };

        let spend = Spend::new(
            trip_id.to_string(),
            budget.id,
            name.to_string(),
            date,
            cost_minor,
            source,
        );
        let spend_id = spend.id.clone();

        let mut spends: Vec<Spend> = self.load(Collection::Spends)?;
        spends.push(spend.clone());
        self.save(Collection::Spends, &spends)?;

        self.apply_spend_created(&spend)?;
        Ok(Some(spend_id))
    }
}
