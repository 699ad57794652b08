//! Packing list API endpoints. Plain CRUD, no cascades.

use api_types::packing::{PackingItemBody, PackingListNew, PackingListUpdate, PackingListView};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use engine::PackingItem;

use crate::{ServerError, server::ServerState};

fn item(body: PackingItemBody) -> PackingItem {
    PackingItem {
        name: body.name,
        checked: body.checked,
    }
}

fn view(list: engine::PackingList) -> PackingListView {
    PackingListView {
        id: list.id,
        trip_id: list.trip_id,
        name: list.name,
        items: list
            .items
            .into_iter()
            .map(|item| PackingItemBody {
                name: item.name,
                checked: item.checked,
            })
            .collect(),
    }
}

pub async fn list(
    State(state): State<ServerState>,
    Path(trip_id): Path<String>,
) -> Result<Json<Vec<PackingListView>>, ServerError> {
    let lists = state.engine.packing_lists_for_trip(&trip_id)?;
    Ok(Json(lists.into_iter().map(view).collect()))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<PackingListNew>,
) -> Result<(StatusCode, Json<PackingListView>), ServerError> {
    let items = payload.items.into_iter().map(item).collect();
    let list = state
        .engine
        .new_packing_list(&payload.trip_id, &payload.name, items)?;

    Ok((StatusCode::CREATED, Json(view(list))))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<PackingListUpdate>,
) -> Result<Json<PackingListView>, ServerError> {
    let items = payload
        .items
        .map(|items| items.into_iter().map(item).collect());
    let list = state
        .engine
        .update_packing_list(&id, payload.name.as_deref(), items)?;
    Ok(Json(view(list)))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    state.engine.delete_packing_list(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
