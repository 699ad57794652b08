//! Hotel stays. A stay covers the nights in `[start_date, end_date)`; the
//! checkout day is not a night.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub place: String,
    pub address: Option<String>,
    /// Total cost of the stay in integer cents.
    pub cost_minor: i64,
    pub start_date: NaiveDate,
    /// Checkout date, exclusive.
    pub end_date: NaiveDate,
}

impl Hotel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trip_id: String,
        name: String,
        place: String,
        address: Option<String>,
        cost_minor: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id,
            name,
            place,
            address,
            cost_minor,
            start_date,
            end_date,
        }
    }
}
