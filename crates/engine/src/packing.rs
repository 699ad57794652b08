//! Packing lists. Plain CRUD, no cascade relationships.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    pub name: String,
    pub checked: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingList {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub items: Vec<PackingItem>,
}

impl PackingList {
    pub fn new(trip_id: String, name: String, items: Vec<PackingItem>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id,
            name,
            items,
        }
    }
}
