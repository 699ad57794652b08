//! Provenance of derived records.
//!
//! Spends and itinerary entries carry the id of the hotel or transport leg
//! that produced them; the sync engine uses that link id to find and remove
//! exactly the rows it owns during resynchronize/teardown. Manually entered
//! rows carry [`RecordSource::Manual`].

use serde::{Deserialize, Serialize};

/// Where a spend or itinerary entry came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordSource {
    Manual,
    Hotel { hotel_id: String },
    Transport { transport_id: String },
}

impl RecordSource {
    pub fn is_manual(&self) -> bool {
        matches!(self, Self::Manual)
    }

    /// The link id, if the record was derived from a source record.
    pub fn link_id(&self) -> Option<&str> {
        match self {
            Self::Manual => None,
            Self::Hotel { hotel_id } => Some(hotel_id),
            Self::Transport { transport_id } => Some(transport_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_id_only_for_derived_records() {
        assert_eq!(RecordSource::Manual.link_id(), None);
        let source = RecordSource::Hotel {
            hotel_id: "h1".to_string(),
        };
        assert_eq!(source.link_id(), Some("h1"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let source = RecordSource::Transport {
            transport_id: "t1".to_string(),
        };
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(value["kind"], "transport");
        assert_eq!(value["transport_id"], "t1");
    }
}
