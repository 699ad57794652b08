//! Budget API endpoints.
//!
//! `spent_minor` is maintained by the engine; clients never post it.

use api_types::budget::{BudgetNew, BudgetUpdate, BudgetView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn view(budget: engine::Budget) -> BudgetView {
    BudgetView {
        id: budget.id,
        trip_id: budget.trip_id,
        name: budget.name,
        kind: budget.kind.as_str().to_string(),
        total_minor: budget.total_minor,
        spent_minor: budget.spent_minor,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<BudgetView>>, ServerError> {
    let budgets = state.engine.budgets_for_trip(&trip_id)?;
    Ok(Json(budgets.into_iter().map(view).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BudgetNew>,
) -> Result<(StatusCode, Json<BudgetView>), ServerError> {
    let budget = state
        .engine
        .new_budget(&payload.trip_id, &payload.name, payload.total_minor)?;

    Ok((StatusCode::CREATED, Json(view(budget))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BudgetUpdate>,
) -> Result<Json<BudgetView>, ServerError> {
    let budget = state
        .engine
        .update_budget(&id, payload.name.as_deref(), payload.total_minor)?;
    Ok(Json(view(budget)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_budget(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
