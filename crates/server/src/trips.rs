//! Trip API endpoints.
//!
//! Creating a trip synthesizes its itinerary skeleton and system budgets;
//! deleting one cascades across every collection. Both run inside the one
//! request.

use api_types::trip::{TripNew, TripUpdate, TripView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::dates::{format_display_date, parse_display_date};

use crate::{ServerError, server::ServerState};

fn view(trip: engine::Trip) -> TripView {
    TripView {
        id: trip.id,
        name: trip.name,
        start_date: format_display_date(trip.start_date),
        end_date: format_display_date(trip.end_date),
    }
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TripNew>,
) -> Result<(StatusCode, Json<TripView>), ServerError> {
    let start = parse_display_date(&payload.start_date)?;
    let end = parse_display_date(&payload.end_date)?;
    let trip = state.engine.new_trip(&payload.name, start, end)?;

    Ok((StatusCode::CREATED, Json(view(trip))))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<TripView>>, ServerError> {
    let trips = state.engine.trips()?;
    Ok(Json(trips.into_iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<TripView>, ServerError> {
    let trip = state.engine.trip(&id)?;
    Ok(Json(view(trip)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TripUpdate>,
) -> Result<Json<TripView>, ServerError> {
    let start = payload
        .start_date
        .as_deref()
        .map(parse_display_date)
        .transpose()?;
    let end = payload
        .end_date
        .as_deref()
        .map(parse_display_date)
        .transpose()?;

    let trip = state
        .engine
        .update_trip(&id, payload.name.as_deref(), start, end)?;
    Ok(Json(view(trip)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_trip(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
