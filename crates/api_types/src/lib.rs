//! Request/response bodies shared by the server and its clients.
//!
//! Dates travel as display strings (`dd/mm/yyyy`); amounts are integer cents
//! (`*_minor`). Ids are opaque strings.

use serde::{Deserialize, Deserializer, Serialize};

/// Distinguishes an absent PATCH field from an explicit `null`.
///
/// Annotate an `Option<Option<T>>` field with
/// `#[serde(default, deserialize_with = "some_or_null")]`: a missing field
/// stays `None` (leave unchanged), `null` becomes `Some(None)` (clear), and a
/// value becomes `Some(Some(v))`.
fn some_or_null<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

pub mod trip {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TripNew {
        pub name: String,
        pub start_date: String,
        pub end_date: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TripUpdate {
        pub name: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TripView {
        pub id: String,
        pub name: String,
        pub start_date: String,
        pub end_date: String,
    }
}

pub mod itinerary {
    use super::*;

    /// A manual extra entry besides the per-day skeleton.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryNew {
        pub trip_id: String,
        pub date: String,
        pub day_note: Option<String>,
        pub title: Option<String>,
        pub cost_minor: Option<i64>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct EntryUpdate {
        #[serde(default, deserialize_with = "some_or_null")]
        pub day_note: Option<Option<String>>,
        #[serde(default, deserialize_with = "some_or_null")]
        pub title: Option<Option<String>>,
        #[serde(default, deserialize_with = "some_or_null")]
        pub cost_minor: Option<Option<i64>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct EntryView {
        pub id: String,
        pub trip_id: String,
        pub date: String,
        pub day_note: Option<String>,
        pub title: Option<String>,
        pub cost_minor: Option<i64>,
        /// `manual`, `hotel` or `transport`.
        pub source: String,
        /// Id of the owning hotel/transport for derived entries.
        pub link_id: Option<String>,
        pub spend_id: Option<String>,
    }
}

pub mod budget {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetNew {
        pub trip_id: String,
        pub name: String,
        pub total_minor: Option<i64>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct BudgetUpdate {
        pub name: Option<String>,
        #[serde(default, deserialize_with = "some_or_null")]
        pub total_minor: Option<Option<i64>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetView {
        pub id: String,
        pub trip_id: String,
        pub name: String,
        /// `accommodation`, `transport` or `custom`.
        pub kind: String,
        pub total_minor: Option<i64>,
        pub spent_minor: i64,
    }
}

pub mod spend {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SpendNew {
        pub trip_id: String,
        pub budget_id: String,
        pub name: String,
        pub date: String,
        pub amount_minor: i64,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct SpendUpdate {
        pub budget_id: Option<String>,
        pub name: Option<String>,
        pub date: Option<String>,
        pub amount_minor: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SpendView {
        pub id: String,
        pub trip_id: String,
        pub budget_id: String,
        pub name: String,
        pub date: String,
        pub amount_minor: i64,
        /// `manual`, `hotel` or `transport`.
        pub source: String,
        pub link_id: Option<String>,
    }
}

pub mod hotel {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HotelNew {
        pub trip_id: String,
        pub name: String,
        pub place: String,
        pub address: Option<String>,
        pub cost_minor: i64,
        pub start_date: String,
        /// Checkout day, excluded from the covered nights.
        pub end_date: String,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct HotelUpdate {
        pub name: Option<String>,
        pub place: Option<String>,
        #[serde(default, deserialize_with = "some_or_null")]
        pub address: Option<Option<String>>,
        pub cost_minor: Option<i64>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct HotelView {
        pub id: String,
        pub trip_id: String,
        pub name: String,
        pub place: String,
        pub address: Option<String>,
        pub cost_minor: i64,
        pub start_date: String,
        pub end_date: String,
    }
}

pub mod transport {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransportNew {
        pub trip_id: String,
        /// `flight`, `train`, `bus`, `car`, `ferry` or `other`.
        pub mode: String,
        pub from: String,
        pub to: String,
        pub identifier: Option<String>,
        pub cost_minor: i64,
        pub start_date: String,
        /// `HH:MM`, optional.
        pub depart_time: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct TransportUpdate {
        pub mode: Option<String>,
        pub from: Option<String>,
        pub to: Option<String>,
        #[serde(default, deserialize_with = "some_or_null")]
        pub identifier: Option<Option<String>>,
        pub cost_minor: Option<i64>,
        pub start_date: Option<String>,
        #[serde(default, deserialize_with = "some_or_null")]
        pub depart_time: Option<Option<String>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransportView {
        pub id: String,
        pub trip_id: String,
        pub mode: String,
        pub from: String,
        pub to: String,
        pub identifier: Option<String>,
        pub cost_minor: i64,
        pub start_date: String,
        pub depart_time: Option<String>,
    }
}

pub mod packing {
    use super::*;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct PackingItemBody {
        pub name: String,
        #[serde(default)]
        pub checked: bool,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PackingListNew {
        pub trip_id: String,
        pub name: String,
        #[serde(default)]
        pub items: Vec<PackingItemBody>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct PackingListUpdate {
        pub name: Option<String>,
        pub items: Option<Vec<PackingItemBody>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct PackingListView {
        pub id: String,
        pub trip_id: String,
        pub name: String,
        pub items: Vec<PackingItemBody>,
    }
}
