//! A spend line item: manually entered or fanned out from a hotel/transport
//! record by the sync engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::RecordSource;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spend {
    pub id: String,
    pub trip_id: String,
    pub budget_id: String,
    pub name: String,
    pub date: NaiveDate,
    /// Amount in integer cents; always >= 0 (zero-amount derived spends are
    /// suppressed by the sync engine before they reach the store).
    pub amount_minor: i64,
    pub source: RecordSource,
}

impl Spend {
    pub fn new(
        trip_id: String,
        budget_id: String,
        name: String,
        date: NaiveDate,
        amount_minor: i64,
        source: RecordSource,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id,
            budget_id,
            name,
            date,
            amount_minor,
            source,
        }
    }
}
