//! Transport leg API endpoints.

use api_types::transport::{TransportNew, TransportUpdate, TransportView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveTime;
use engine::dates::{format_display_date, parse_display_date};
use engine::{NewTransportCmd, TransportMode, UpdateTransportCmd};

use crate::{ServerError, server::ServerState};

fn parse_mode(value: &str) -> Result<TransportMode, ServerError> {
    match value {
        "flight" => Ok(TransportMode::Flight),
        "train" => Ok(TransportMode::Train),
        "bus" => Ok(TransportMode::Bus),
        "car" => Ok(TransportMode::Car),
        "ferry" => Ok(TransportMode::Ferry),
        "other" => Ok(TransportMode::Other),
        other => Err(ServerError::Generic(format!(
            "unknown transport mode \"{other}\""
        ))),
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, ServerError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| ServerError::Generic(format!("expected hh:mm, got \"{value}\"")))
}

fn view(transport: engine::Transport) -> TransportView {
    TransportView {
        id: transport.id,
        trip_id: transport.trip_id,
        mode: transport.mode.as_str().to_string(),
        from: transport.from,
        to: transport.to,
        identifier: transport.identifier,
        cost_minor: transport.cost_minor,
        start_date: format_display_date(transport.start_date),
        depart_time: transport
            .depart_time
            .map(|time| time.format("%H:%M").to_string()),
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<TransportView>>, ServerError> {
    let transports = state.engine.transports_for_trip(&trip_id)?;
    Ok(Json(transports.into_iter().map(view).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TransportNew>,
) -> Result<(StatusCode, Json<TransportView>), ServerError> {
    let depart_time = payload.depart_time.as_deref().map(parse_time).transpose()?;
    let transport = state.engine.new_transport(NewTransportCmd {
        trip_id: payload.trip_id,
        mode: parse_mode(&payload.mode)?,
        from: payload.from,
        to: payload.to,
        identifier: payload.identifier,
        cost_minor: payload.cost_minor,
        start_date: parse_display_date(&payload.start_date)?,
        depart_time,
    })?;

    Ok((StatusCode::CREATED, Json(view(transport))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TransportUpdate>,
) -> Result<Json<TransportView>, ServerError> {
    let mode = payload.mode.as_deref().map(parse_mode).transpose()?;
    let start_date = payload
        .start_date
        .as_deref()
        .map(parse_display_date)
        .transpose()?;
    let depart_time = match payload.depart_time {
        None => None,
        Some(None) => Some(None),
        Some(Some(value)) => Some(Some(parse_time(&value)?)),
    };

    let transport = state.engine.update_transport(
        &id,
        UpdateTransportCmd {
            mode,
            from: payload.from,
            to: payload.to,
            identifier: payload.identifier,
            cost_minor: payload.cost_minor,
            start_date,
            depart_time,
        },
    )?;
    Ok(Json(view(transport)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_transport(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
