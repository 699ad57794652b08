//! Hotel stay API endpoints.
//!
//! Every mutation resynchronizes the stay's derived spend and itinerary
//! nights inside the request.

use api_types::hotel::{HotelNew, HotelUpdate, HotelView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::dates::{format_display_date, parse_display_date};
use engine::{NewHotelCmd, UpdateHotelCmd};

use crate::{ServerError, server::ServerState};

fn view(hotel: engine::Hotel) -> HotelView {
    HotelView {
        id: hotel.id,
        trip_id: hotel.trip_id,
        name: hotel.name,
        place: hotel.place,
        address: hotel.address,
        cost_minor: hotel.cost_minor,
        start_date: format_display_date(hotel.start_date),
        end_date: format_display_date(hotel.end_date),
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<HotelView>>, ServerError> {
    let hotels = state.engine.hotels_for_trip(&trip_id)?;
    Ok(Json(hotels.into_iter().map(view).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<HotelNew>,
) -> Result<(StatusCode, Json<HotelView>), ServerError> {
    let hotel = state.engine.new_hotel(NewHotelCmd {
        trip_id: payload.trip_id,
        name: payload.name,
        place: payload.place,
        address: payload.address,
        cost_minor: payload.cost_minor,
        start_date: parse_display_date(&payload.start_date)?,
        end_date: parse_display_date(&payload.end_date)?,
    })?;

    Ok((StatusCode::CREATED, Json(view(hotel))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<HotelUpdate>,
) -> Result<Json<HotelView>, ServerError> {
    let start_date = payload
        .start_date
        .as_deref()
        .map(parse_display_date)
        .transpose()?;
    let end_date = payload
        .end_date
        .as_deref()
        .map(parse_display_date)
        .transpose()?;

    let hotel = state.engine.update_hotel(
        &id,
        UpdateHotelCmd {
            name: payload.name,
            place: payload.place,
            address: payload.address,
            cost_minor: payload.cost_minor,
            start_date,
            end_date,
        },
    )?;
    Ok(Json(view(hotel)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_hotel(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
