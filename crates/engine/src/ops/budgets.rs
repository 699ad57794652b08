//! Budget CRUD and the aggregate maintainer.
//!
//! `spent_minor` is denormalized: it moves by delta on every spend event and
//! is never recomputed on the hot path. Exactly-once application of each
//! event keeps it equal to the sum of the budget's spends; idempotency is the
//! caller's responsibility (the sync engine enforces it through link ids).

use crate::store::Collection;
use crate::{Budget, BudgetKind, EngineError, ResultEngine, Spend};

use super::{Engine, ensure_non_negative_amount, normalize_required_name};

impl Engine {
    /// Move a budget's running total by `delta_minor`.
    ///
    /// A missing budget drops the event with a warning instead of failing
    /// the caller, so the spend write that preceded it stays in place.
    pub fn apply_delta(&self, budget_id: &str, delta_minor: i64) -> ResultEngine<()> {
        let mut budgets: Vec<Budget> = self.load(Collection::Budgets)?;
        match budgets.iter_mut().find(|budget| budget.id == budget_id) {
            Some(budget) => {
                budget.spent_minor += delta_minor;
                self.save(Collection::Budgets, &budgets)
            }
            None => {
                tracing::warn!(
                    budget_id,
                    delta_minor,
                    "spend event references a missing budget; aggregate left untouched"
                );
                Ok(())
            }
        }
    }

    pub(crate) fn apply_spend_created(&self, spend: &Spend) -> ResultEngine<()> {
        self.apply_delta(&spend.budget_id, spend.amount_minor)
    }

    /// A budget move is two separate deltas, never a cross-budget no-op.
    pub(crate) fn apply_spend_updated(&self, old: &Spend, new: &Spend) -> ResultEngine<()> {
        if old.budget_id == new.budget_id {
            return self.apply_delta(&new.budget_id, new.amount_minor - old.amount_minor);
        }
        self.apply_delta(&old.budget_id, -old.amount_minor)?;
        self.apply_delta(&new.budget_id, new.amount_minor)
    }

    pub(crate) fn apply_spend_deleted(&self, spend: &Spend) -> ResultEngine<()> {
        self.apply_delta(&spend.budget_id, -spend.amount_minor)
    }

    /// Add a custom budget to a trip.
    pub fn new_budget(
        &self,
        trip_id: &str,
        name: &str,
        total_minor: Option<i64>,
    ) -> ResultEngine<Budget> {
        let name = normalize_required_name(name, "budget")?;
        if let Some(total) = total_minor {
            ensure_non_negative_amount(total, "budget total")?;
        }
        self.require_trip(trip_id)?;

        let mut budgets: Vec<Budget> = self.load(Collection::Budgets)?;
        if budgets
            .iter()
            .any(|budget| budget.trip_id == trip_id && budget.name == name)
        {
            return Err(EngineError::ExistingKey(name));
        }

        let budget = Budget::new(trip_id.to_string(), name, BudgetKind::Custom, total_minor);
        budgets.push(budget.clone());
        self.save(Collection::Budgets, &budgets)?;
        Ok(budget)
    }

    /// Return a trip's budgets.
    pub fn budgets_for_trip(&self, trip_id: &str) -> ResultEngine<Vec<Budget>> {
        self.require_trip(trip_id)?;
        let budgets: Vec<Budget> = self.load(Collection::Budgets)?;
        Ok(budgets
            .into_iter()
            .filter(|budget| budget.trip_id == trip_id)
            .collect())
    }

    /// Return a budget by id.
    pub fn budget(&self, budget_id: &str) -> ResultEngine<Budget> {
        let budgets: Vec<Budget> = self.load(Collection::Budgets)?;
        budgets
            .into_iter()
            .find(|budget| budget.id == budget_id)
            .ok_or_else(|| EngineError::KeyNotFound("budget not exists".to_string()))
    }

    /// Patch a budget. System budgets keep their name; the target ceiling
    /// stays editable on every budget (`Some(None)` clears it).
    pub fn update_budget(
        &self,
        budget_id: &str,
        name: Option<&str>,
        total_minor: Option<Option<i64>>,
    ) -> ResultEngine<Budget> {
        let mut budgets: Vec<Budget> = self.load(Collection::Budgets)?;
        let index = budgets
            .iter()
            .position(|budget| budget.id == budget_id)
            .ok_or_else(|| EngineError::KeyNotFound("budget not exists".to_string()))?;

        if let Some(name) = name {
            if budgets[index].kind.is_system() {
                return Err(EngineError::Validation(
                    "system budgets cannot be renamed".to_string(),
                ));
            }
            let name = normalize_required_name(name, "budget")?;
            // Renames obey the same per-trip uniqueness as creates.
            if budgets.iter().any(|other| {
                other.id != budget_id
                    && other.trip_id == budgets[index].trip_id
                    && other.name == name
            }) {
                return Err(EngineError::ExistingKey(name));
            }
            budgets[index].name = name;
        }
        if let Some(total) = total_minor {
            if let Some(total) = total {
                ensure_non_negative_amount(total, "budget total")?;
            }
            budgets[index].total_minor = total;
        }

        let updated = budgets[index].clone();
        self.save(Collection::Budgets, &budgets)?;
        Ok(updated)
    }

    /// Delete a custom budget together with its spends. System budgets only
    /// go away with their trip.
    pub fn delete_budget(&self, budget_id: &str) -> ResultEngine<()> {
        let mut budgets: Vec<Budget> = self.load(Collection::Budgets)?;
        let budget = budgets
            .iter()
            .find(|budget| budget.id == budget_id)
            .ok_or_else(|| EngineError::KeyNotFound("budget not exists".to_string()))?;
        if budget.kind.is_system() {
            return Err(EngineError::Validation(
                "system budgets cannot be deleted".to_string(),
            ));
        }

        budgets.retain(|budget| budget.id != budget_id);
        self.save(Collection::Budgets, &budgets)?;

        let mut spends: Vec<Spend> = self.load(Collection::Spends)?;
        spends.retain(|spend| spend.budget_id != budget_id);
        self.save(Collection::Spends, &spends)?;
        Ok(())
    }
}
