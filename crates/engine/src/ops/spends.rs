//! Manual spend CRUD, routed through the aggregate maintainer.

use crate::store::Collection;
use crate::{
    Budget, EngineError, NewSpendCmd, RecordSource, ResultEngine, Spend, UpdateSpendCmd,
};

use super::{Engine, ensure_non_negative_amount, normalize_required_name};

impl Engine {
    /// Create a manually entered spend.
    ///
    /// The budget is allowed to be missing (spend-before-budget is an
    /// accepted gap): the row is persisted either way and the aggregate step
    /// degrades to a warning.
    pub fn new_spend(&self, cmd: NewSpendCmd) -> ResultEngine<Spend> {
        let name = normalize_required_name(&cmd.name, "spend")?;
        ensure_non_negative_amount(cmd.amount_minor, "spend amount")?;
        self.require_trip(&cmd.trip_id)?;

        let budgets: Vec<Budget> = self.load(Collection::Budgets)?;
        if !budgets.iter().any(|budget| budget.id == cmd.budget_id) {
            tracing::warn!(
                budget_id = %cmd.budget_id,
                "creating spend against a missing budget"
            );
        }

        let spend = Spend::new(
            cmd.trip_id,
            cmd.budget_id,
            name,
            cmd.date,
            cmd.amount_minor,
            RecordSource::Manual,
        );

        let mut spends: Vec<Spend> = self.load(Collection::Spends)?;
        spends.push(spend.clone());
        self.save(Collection::Spends, &spends)?;

        self.apply_spend_created(&spend)?;
        Ok(spend)
    }

    /// Return a trip's spends.
    pub fn spends_for_trip(&self, trip_id: &str) -> ResultEngine<Vec<Spend>> {
        self.require_trip(trip_id)?;
        let spends: Vec<Spend> = self.load(Collection::Spends)?;
        Ok(spends
            .into_iter()
            .filter(|spend| spend.trip_id == trip_id)
            .collect())
    }

    /// Patch a spend. Moving it between budgets decrements the old budget
    /// and increments the new one as two separate deltas.
    ///
    /// Only manual spends are editable here: rows owned by a hotel or
    /// transport mirror their source record's cost and are rebuilt wholesale
    /// on resynchronize, so an in-place edit would silently vanish.
    pub fn update_spend(&self, spend_id: &str, cmd: UpdateSpendCmd) -> ResultEngine<Spend> {
        let mut spends: Vec<Spend> = self.load(Collection::Spends)?;
        let spend = spends
            .iter_mut()
            .find(|spend| spend.id == spend_id)
            .ok_or_else(|| EngineError::KeyNotFound("spend not exists".to_string()))?;

        if !spend.source.is_manual() {
            return Err(EngineError::Validation(
                "spend is managed by its hotel/transport record".to_string(),
            ));
        }

        let old = spend.clone();

        if let Some(name) = cmd.name {
            spend.name = normalize_required_name(&name, "spend")?;
        }
        if let Some(date) = cmd.date {
            spend.date = date;
        }
        if let Some(amount_minor) = cmd.amount_minor {
            ensure_non_negative_amount(amount_minor, "spend amount")?;
            spend.amount_minor = amount_minor;
        }
        if let Some(budget_id) = cmd.budget_id {
            spend.budget_id = budget_id;
        }

        let updated = spend.clone();
        self.save(Collection::Spends, &spends)?;

        self.apply_spend_updated(&old, &updated)?;
        Ok(updated)
    }

    /// Delete a manual spend and roll its amount out of the owning budget.
    /// Derived spends only go away through their hotel/transport record, so
    /// no itinerary entry is ever left pointing at a deleted spend.
    pub fn delete_spend(&self, spend_id: &str) -> ResultEngine<()> {
        let mut spends: Vec<Spend> = self.load(Collection::Spends)?;
        let removed = spends
            .iter()
            .find(|spend| spend.id == spend_id)
            .cloned()
            .ok_or_else(|| EngineError::KeyNotFound("spend not exists".to_string()))?;

        if !removed.source.is_manual() {
            return Err(EngineError::Validation(
                "spend is managed by its hotel/transport record".to_string(),
            ));
        }

        spends.retain(|spend| spend.id != spend_id);
        self.save(Collection::Spends, &spends)?;

        self.apply_spend_deleted(&removed)?;
        Ok(())
    }
}
