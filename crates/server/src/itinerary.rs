//! Itinerary API endpoints.
//!
//! Entries derived from hotels/transports are read-only here; the engine
//! rejects patches against them.

use api_types::itinerary::{EntryNew, EntryUpdate, EntryView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::dates::{format_display_date, parse_display_date};

use crate::{ServerError, server::ServerState, source_parts};

fn view(entry: engine::ItineraryEntry) -> EntryView {
    let (source, link_id) = source_parts(&entry.source);
    EntryView {
        id: entry.id,
        trip_id: entry.trip_id,
        date: format_display_date(entry.date),
        day_note: entry.day_note,
        title: entry.title,
        cost_minor: entry.cost_minor,
        source: source.to_string(),
        link_id,
        spend_id: entry.spend_id,
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<EntryView>>, ServerError> {
    let entries = state.engine.itinerary_for_trip(&trip_id)?;
    Ok(Json(entries.into_iter().map(view).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EntryNew>,
) -> Result<(StatusCode, Json<EntryView>), ServerError> {
    let date = parse_display_date(&payload.date)?;
    let entry = state.engine.new_itinerary_entry(
        &payload.trip_id,
        date,
        payload.day_note,
        payload.title,
        payload.cost_minor,
    )?;

    Ok((StatusCode::CREATED, Json(view(entry))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EntryUpdate>,
) -> Result<Json<EntryView>, ServerError> {
    let entry = state.engine.update_itinerary_entry(
        &id,
        payload.day_note,
        payload.title,
        payload.cost_minor,
    )?;
    Ok(Json(view(entry)))
}
