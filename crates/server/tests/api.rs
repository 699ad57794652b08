use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    let engine = engine::Engine::builder()
        .store(Arc::new(engine::MemoryStore::new()))
        .build()
        .expect("engine builds with a store");
    server::app(engine)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

async fn create_trip(app: &Router) -> String {
    let (status, trip) = send(
        app,
        "POST",
        "/trips",
        Some(json!({
            "name": "Paris",
            "start_date": "01/06/2024",
            "end_date": "05/06/2024",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    trip["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn trip_creation_synthesizes_skeleton() {
    let app = app();
    let trip_id = create_trip(&app).await;

    let (status, itinerary) = send(&app, "GET", &format!("/trips/{trip_id}/itinerary"), None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = itinerary.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["date"], "01/06/2024");
    assert_eq!(entries[4]["date"], "05/06/2024");

    let (status, budgets) = send(&app, "GET", &format!("/trips/{trip_id}/budgets"), None).await;
    assert_eq!(status, StatusCode::OK);
    let budgets = budgets.as_array().unwrap();
    assert_eq!(budgets.len(), 2);
    assert!(budgets.iter().all(|budget| budget["spent_minor"] == 0));
}

#[tokio::test]
async fn hotel_cascade_round_trip() {
    let app = app();
    let trip_id = create_trip(&app).await;

    let (status, hotel) = send(
        &app,
        "POST",
        "/hotels",
        Some(json!({
            "trip_id": trip_id,
            "name": "Hotel du Nord",
            "place": "Paris",
            "address": null,
            "cost_minor": 20000,
            "start_date": "01/06/2024",
            "end_date": "03/06/2024",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let hotel_id = hotel["id"].as_str().unwrap().to_string();

    let (_, spends) = send(&app, "GET", &format!("/trips/{trip_id}/spends"), None).await;
    let spends = spends.as_array().unwrap();
    assert_eq!(spends.len(), 1);
    assert_eq!(spends[0]["amount_minor"], 20000);
    assert_eq!(spends[0]["source"], "hotel");
    assert_eq!(spends[0]["link_id"], hotel_id.as_str());

    let (_, budgets) = send(&app, "GET", &format!("/trips/{trip_id}/budgets"), None).await;
    let accommodation = budgets
        .as_array()
        .unwrap()
        .iter()
        .find(|budget| budget["kind"] == "accommodation")
        .unwrap()
        .clone();
    assert_eq!(accommodation["spent_minor"], 20000);

    let (_, itinerary) = send(&app, "GET", &format!("/trips/{trip_id}/itinerary"), None).await;
    let nights: Vec<_> = itinerary
        .as_array()
        .unwrap()
        .iter()
        .filter(|entry| entry["link_id"] == hotel_id.as_str())
        .collect();
    assert_eq!(nights.len(), 2);
    assert!(nights.iter().all(|entry| entry["cost_minor"] == 10000));

    let (status, _) = send(&app, "DELETE", &format!("/hotels/{hotel_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, spends) = send(&app, "GET", &format!("/trips/{trip_id}/spends"), None).await;
    assert!(spends.as_array().unwrap().is_empty());

    let (_, budgets) = send(&app, "GET", &format!("/trips/{trip_id}/budgets"), None).await;
    let accommodation = budgets
        .as_array()
        .unwrap()
        .iter()
        .find(|budget| budget["kind"] == "accommodation")
        .unwrap()
        .clone();
    assert_eq!(accommodation["spent_minor"], 0);
}

#[tokio::test]
async fn trip_delete_cascades_in_one_request() {
    let app = app();
    let trip_id = create_trip(&app).await;

    send(
        &app,
        "POST",
        "/hotels",
        Some(json!({
            "trip_id": trip_id,
            "name": "Hotel du Nord",
            "place": "Paris",
            "address": null,
            "cost_minor": 20000,
            "start_date": "01/06/2024",
            "end_date": "03/06/2024",
        })),
    )
    .await;

    let (status, _) = send(&app, "DELETE", &format!("/trips/{trip_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "GET", &format!("/trips/{trip_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &format!("/trips/{trip_id}/spends"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_trip_is_404_with_error_body() {
    let app = app();
    let (status, body) = send(&app, "GET", "/trips/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn malformed_date_is_422() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/trips",
        Some(json!({
            "name": "Paris",
            "start_date": "2024-06-01",
            "end_date": "05/06/2024",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn duplicate_budget_name_is_409() {
    let app = app();
    let trip_id = create_trip(&app).await;

    let body = json!({ "trip_id": trip_id, "name": "Food", "total_minor": null });
    let (status, _) = send(&app, "POST", "/budgets", Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, "POST", "/budgets", Some(body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn system_budget_delete_is_422() {
    let app = app();
    let trip_id = create_trip(&app).await;

    let (_, budgets) = send(&app, "GET", &format!("/trips/{trip_id}/budgets"), None).await;
    let budget_id = budgets.as_array().unwrap()[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, _) = send(&app, "DELETE", &format!("/budgets/{budget_id}"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn manual_entry_patch_clears_with_null() {
    let app = app();
    let trip_id = create_trip(&app).await;

    let (_, itinerary) = send(&app, "GET", &format!("/trips/{trip_id}/itinerary"), None).await;
    let entry_id = itinerary.as_array().unwrap()[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, entry) = send(
        &app,
        "PATCH",
        &format!("/itinerary/{entry_id}"),
        Some(json!({ "day_note": "Louvre" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["day_note"], "Louvre");

    let (status, entry) = send(
        &app,
        "PATCH",
        &format!("/itinerary/{entry_id}"),
        Some(json!({ "day_note": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(entry["day_note"].is_null());
}

#[tokio::test]
async fn unknown_transport_mode_is_400() {
    let app = app();
    let trip_id = create_trip(&app).await;

    let (status, _) = send(
        &app,
        "POST",
        "/transports",
        Some(json!({
            "trip_id": trip_id,
            "mode": "zeppelin",
            "from": "Milano",
            "to": "Paris",
            "identifier": null,
            "cost_minor": 8900,
            "start_date": "01/06/2024",
            "depart_time": null,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
