//! Spend API endpoints.
//!
//! Only manual spends are created here; hotel/transport spends come from the
//! sync engine and carry the owning record in `source`/`link_id`.

use api_types::spend::{SpendNew, SpendUpdate, SpendView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::dates::{format_display_date, parse_display_date};
use engine::{NewSpendCmd, UpdateSpendCmd};

use crate::{ServerError, server::ServerState, source_parts};

fn view(spend: engine::Spend) -> SpendView {
    let (source, link_id) = source_parts(&spend.source);
    SpendView {
        id: spend.id,
        trip_id: spend.trip_id,
        budget_id: spend.budget_id,
        name: spend.name,
        date: format_display_date(spend.date),
        amount_minor: spend.amount_minor,
        source: source.to_string(),
        link_id,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<SpendView>>, ServerError> {
    let spends = state.engine.spends_for_trip(&trip_id)?;
    Ok(Json(spends.into_iter().map(view).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SpendNew>,
) -> Result<(StatusCode, Json<SpendView>), ServerError> {
    let spend = state.engine.new_spend(NewSpendCmd {
        trip_id: payload.trip_id,
        budget_id: payload.budget_id,
        name: payload.name,
        date: parse_display_date(&payload.date)?,
        amount_minor: payload.amount_minor,
    })?;

    Ok((StatusCode::CREATED, Json(view(spend))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SpendUpdate>,
) -> Result<Json<SpendView>, ServerError> {
    let date = payload
        .date
        .as_deref()
        .map(parse_display_date)
        .transpose()?;

    let spend = state.engine.update_spend(
        &id,
        UpdateSpendCmd {
            budget_id: payload.budget_id,
            name: payload.name,
            date,
            amount_minor: payload.amount_minor,
        },
    )?;
    Ok(Json(view(spend)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_spend(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
