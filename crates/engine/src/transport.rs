//! Transport legs: one dated movement between two places.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Flight,
    Train,
    Bus,
    Car,
    Ferry,
    Other,
}

impl TransportMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Car => "car",
            Self::Ferry => "ferry",
            Self::Other => "other",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transport {
    pub id: String,
    pub trip_id: String,
    pub mode: TransportMode,
    pub from: String,
    pub to: String,
    /// Carrier reference (flight number, train number, plate, ...).
    pub identifier: Option<String>,
    /// Total cost of the leg in integer cents.
    pub cost_minor: i64,
    pub start_date: NaiveDate,
    pub depart_time: Option<NaiveTime>,
}

impl Transport {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trip_id: String,
        mode: TransportMode,
        from: String,
        to: String,
        identifier: Option<String>,
        cost_minor: i64,
        start_date: NaiveDate,
        depart_time: Option<NaiveTime>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id,
            mode,
            from,
            to,
            identifier,
            cost_minor,
            start_date,
            depart_time,
        }
    }

    /// Short description used as the derived itinerary title.
    pub fn describe(&self) -> String {
        format!("{} {} - {}", self.mode.as_str(), self.from, self.to)
    }
}
