use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use crate::store::{Collection, RecordStore, StoreError};
use crate::{EngineError, ResultEngine, Trip};

mod budgets;
mod hotels;
mod itinerary;
mod packing;
mod spends;
mod sync;
mod transports;
mod trips;

/// The cascade engine. Holds the injected record store; every operation is a
/// sequence of whole-collection read-modify-writes against it.
pub struct Engine {
    store: Arc<dyn RecordStore>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").finish_non_exhaustive()
    }
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Read a whole collection into typed records.
    pub(crate) fn load<T: DeserializeOwned>(&self, collection: Collection) -> ResultEngine<Vec<T>> {
        let raw = self.store.read_all(collection)?;
        raw.into_iter()
            .map(|value| {
                serde_json::from_value(value).map_err(|err| {
                    EngineError::Store(StoreError::Corrupt {
                        collection: collection.as_str(),
                        message: err.to_string(),
                    })
                })
            })
            .collect()
    }

    /// Replace a whole collection with typed records.
    pub(crate) fn save<T: Serialize>(
        &self,
        collection: Collection,
        records: &[T],
    ) -> ResultEngine<()> {
        let raw = records
            .iter()
            .map(|record| {
                serde_json::to_value(record).map_err(|err| {
                    EngineError::Store(StoreError::Corrupt {
                        collection: collection.as_str(),
                        message: err.to_string(),
                    })
                })
            })
            .collect::<ResultEngine<Vec<_>>>()?;
        self.store.write_all(collection, raw)?;
        Ok(())
    }

    /// Look up a trip or fail; creates of dependent records go through this
    /// so no record is ever written with a dangling `trip_id`.
    pub(crate) fn require_trip(&self, trip_id: &str) -> ResultEngine<Trip> {
        let trips: Vec<Trip> = self.load(Collection::Trips)?;
        trips
            .into_iter()
            .find(|trip| trip.id == trip_id)
            .ok_or_else(|| EngineError::KeyNotFound("trip not exists".to_string()))
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    store: Option<Arc<dyn RecordStore>>,
}

impl EngineBuilder {
    /// Pass the required record store
    pub fn store(mut self, store: Arc<dyn RecordStore>) -> EngineBuilder {
        self.store = Some(store);
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> ResultEngine<Engine> {
        let store = self
            .store
            .ok_or_else(|| EngineError::Validation("missing record store".to_string()))?;
        Ok(Engine { store })
    }
}

fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::Validation(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

fn ensure_non_negative_amount(amount_minor: i64, label: &str) -> ResultEngine<()> {
    if amount_minor < 0 {
        return Err(EngineError::Validation(format!(
            "{label} must be >= 0, got {amount_minor}"
        )));
    }
    Ok(())
}
