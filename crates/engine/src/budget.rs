//! Budgets group spends per trip and carry a denormalized running total.
//!
//! `spent_minor` is maintained incrementally by the aggregate maintainer in
//! [`ops::budgets`], never recomputed from scratch on the hot path.
//!
//! [`ops::budgets`]: crate::ops

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display names of the two budgets every trip starts with.
pub const ACCOMMODATION_BUDGET_NAME: &str = "Accommodation";
pub const TRANSPORT_BUDGET_NAME: &str = "Transport";

/// Identifies the two system budgets structurally, instead of comparing
/// display names. System budgets are created with the trip and are not
/// user-deletable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetKind {
    Accommodation,
    Transport,
    Custom,
}

impl BudgetKind {
    pub fn is_system(self) -> bool {
        !matches!(self, Self::Custom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accommodation => "accommodation",
            Self::Transport => "transport",
            Self::Custom => "custom",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub trip_id: String,
    pub name: String,
    pub kind: BudgetKind,
    /// Target ceiling; `None` means no target set.
    pub total_minor: Option<i64>,
    /// Running aggregate over the budget's spends.
    pub spent_minor: i64,
}

impl Budget {
    pub fn new(trip_id: String, name: String, kind: BudgetKind, total_minor: Option<i64>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            trip_id,
            name,
            kind,
            total_minor,
            spent_minor: 0,
        }
    }

    /// One of the two budgets synthesized at trip creation.
    pub fn system(trip_id: String, kind: BudgetKind) -> Self {
        let name = match kind {
            BudgetKind::Accommodation => ACCOMMODATION_BUDGET_NAME,
            BudgetKind::Transport => TRANSPORT_BUDGET_NAME,
            BudgetKind::Custom => "Custom",
        };
        Self::new(trip_id, name.to_string(), kind, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_budgets_start_empty() {
        let budget = Budget::system("t1".to_string(), BudgetKind::Accommodation);
        assert_eq!(budget.spent_minor, 0);
        assert_eq!(budget.total_minor, None);
        assert_eq!(budget.name, ACCOMMODATION_BUDGET_NAME);
        assert!(budget.kind.is_system());
    }

    #[test]
    fn custom_budgets_are_not_system() {
        assert!(!BudgetKind::Custom.is_system());
    }
}
