//! Trip-planning core: entities, the record store seam, and the cascade
//! engine that keeps derived records (itinerary nights, spend line items,
//! budget totals) synchronized with their sources (trips, hotel stays,
//! transport legs, manual spends).
//!
//! The store offers no transactions across collections; every cascade is an
//! ordered sequence of whole-collection read-modify-writes, and a failure
//! mid-cascade leaves the completed steps in place (no compensating
//! transaction). See the operation docs in [`ops`] for the per-cascade step
//! order.

pub use budget::{ACCOMMODATION_BUDGET_NAME, Budget, BudgetKind, TRANSPORT_BUDGET_NAME};
pub use commands::{
    NewHotelCmd, NewSpendCmd, NewTransportCmd, UpdateHotelCmd, UpdateSpendCmd, UpdateTransportCmd,
};
pub use error::EngineError;
pub use hotel::Hotel;
pub use itinerary::ItineraryEntry;
pub use ops::{Engine, EngineBuilder};
pub use packing::{PackingItem, PackingList};
pub use source::RecordSource;
pub use spend::Spend;
pub use store::{Collection, JsonFileStore, MemoryStore, RecordStore, StoreError};
pub use transport::{Transport, TransportMode};
pub use trip::Trip;

mod budget;
mod commands;
pub mod dates;
mod error;
mod hotel;
mod itinerary;
mod ops;
mod packing;
mod source;
mod spend;
pub mod store;
mod transport;
mod trip;

type ResultEngine<T> = Result<T, EngineError>;
