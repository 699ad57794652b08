//! Packing list CRUD. No cascade relationships.

use crate::store::Collection;
use crate::{EngineError, PackingItem, PackingList, ResultEngine};

use super::{Engine, normalize_required_name};

impl Engine {
    pub fn new_packing_list(
        &self,
        trip_id: &str,
        name: &str,
        items: Vec<PackingItem>,
    ) -> ResultEngine<PackingList> {
        let name = normalize_required_name(name, "packing list")?;
        self.require_trip(trip_id)?;

        let list = PackingList::new(trip_id.to_string(), name, items);
        let mut lists: Vec<PackingList> = self.load(Collection::PackingLists)?;
        lists.push(list.clone());
        self.save(Collection::PackingLists, &lists)?;
        Ok(list)
    }

    pub fn packing_lists_for_trip(&self, trip_id: &str) -> ResultEngine<Vec<PackingList>> {
        self.require_trip(trip_id)?;
        let lists: Vec<PackingList> = self.load(Collection::PackingLists)?;
        Ok(lists
            .into_iter()
            .filter(|list| list.trip_id == trip_id)
            .collect())
    }

    /// Rename a list and/or replace its items.
    pub fn update_packing_list(
        &self,
        list_id: &str,
        name: Option<&str>,
        items: Option<Vec<PackingItem>>,
    ) -> ResultEngine<PackingList> {
        let mut lists: Vec<PackingList> = self.load(Collection::PackingLists)?;
        let list = lists
            .iter_mut()
            .find(|list| list.id == list_id)
            .ok_or_else(|| EngineError::KeyNotFound("packing list not exists".to_string()))?;

        if let Some(name) = name {
            list.name = normalize_required_name(name, "packing list")?;
        }
        if let Some(items) = items {
            list.items = items;
        }

        let updated = list.clone();
        self.save(Collection::PackingLists, &lists)?;
        Ok(updated)
    }

    pub fn delete_packing_list(&self, list_id: &str) -> ResultEngine<()> {
        let mut lists: Vec<PackingList> = self.load(Collection::PackingLists)?;
        let before = lists.len();
        lists.retain(|list| list.id != list_id);
        if lists.len() == before {
            return Err(EngineError::KeyNotFound(
                "packing list not exists".to_string(),
            ));
        }
        self.save(Collection::PackingLists, &lists)
    }
}
