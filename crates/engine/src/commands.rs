//! Command structs for engine operations.
//!
//! These types group parameters for write operations on spends, hotels and
//! transport legs, keeping call sites readable and avoiding long argument
//! lists.

use chrono::{NaiveDate, NaiveTime};

use crate::TransportMode;

/// Create a manual spend.
#[derive(Clone, Debug)]
pub struct NewSpendCmd {
    pub trip_id: String,
    pub budget_id: String,
    pub name: String,
    pub date: NaiveDate,
    pub amount_minor: i64,
}

/// Patch a spend; `None` keeps the current value.
#[derive(Clone, Debug, Default)]
pub struct UpdateSpendCmd {
    pub budget_id: Option<String>,
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub amount_minor: Option<i64>,
}

/// Create a hotel stay.
#[derive(Clone, Debug)]
pub struct NewHotelCmd {
    pub trip_id: String,
    pub name: String,
    pub place: String,
    pub address: Option<String>,
    pub cost_minor: i64,
    pub start_date: NaiveDate,
    /// Checkout date, exclusive.
    pub end_date: NaiveDate,
}

/// Patch a hotel stay; `None` keeps the current value. Any change triggers a
/// full resynchronize of the derived records.
#[derive(Clone, Debug, Default)]
pub struct UpdateHotelCmd {
    pub name: Option<String>,
    pub place: Option<String>,
    pub address: Option<Option<String>>,
    pub cost_minor: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Create a transport leg.
#[derive(Clone, Debug)]
pub struct NewTransportCmd {
    pub trip_id: String,
    pub mode: TransportMode,
    pub from: String,
    pub to: String,
    pub identifier: Option<String>,
    pub cost_minor: i64,
    pub start_date: NaiveDate,
    pub depart_time: Option<NaiveTime>,
}

/// Patch a transport leg; `None` keeps the current value. Any change triggers
/// a full resynchronize of the derived records.
#[derive(Clone, Debug, Default)]
pub struct UpdateTransportCmd {
    pub mode: Option<TransportMode>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub identifier: Option<Option<String>>,
    pub cost_minor: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub depart_time: Option<Option<NaiveTime>>,
}
