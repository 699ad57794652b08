use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{app, run, run_with_listener, spawn_with_listener};

mod budgets;
mod hotels;
mod itinerary;
mod packing;
mod server;
mod spends;
mod transports;
mod trips;

pub mod types {
    pub mod trip {
        pub use api_types::trip::{TripNew, TripUpdate, TripView};
    }

    pub mod itinerary {
        pub use api_types::itinerary::{EntryNew, EntryUpdate, EntryView};
    }

    pub mod budget {
        pub use api_types::budget::{BudgetNew, BudgetUpdate, BudgetView};
    }

    pub mod spend {
        pub use api_types::spend::{SpendNew, SpendUpdate, SpendView};
    }

    pub mod hotel {
        pub use api_types::hotel::{HotelNew, HotelUpdate, HotelView};
    }

    pub mod transport {
        pub use api_types::transport::{TransportNew, TransportUpdate, TransportView};
    }

    pub mod packing {
        pub use api_types::packing::{
            PackingItemBody, PackingListNew, PackingListUpdate, PackingListView,
        };
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

//TODO: Find a better solution
#[derive(Serialize)]
struct Error {
    error: String,
}

/// Split a record source into the wire pair (`source`, `link_id`).
fn source_parts(source: &engine::RecordSource) -> (&'static str, Option<String>) {
    match source {
        engine::RecordSource::Manual => ("manual", None),
        engine::RecordSource::Hotel { hotel_id } => ("hotel", Some(hotel_id.clone())),
        engine::RecordSource::Transport { transport_id } => {
            ("transport", Some(transport_id.clone()))
        }
    }
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::ExistingKey(_) => StatusCode::CONFLICT,
        EngineError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        EngineError::Validation(_) | EngineError::InvalidDate(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Store(store_err) => {
            tracing::error!("store error: {store_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::StoreError;

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_conflict_maps_to_409() {
        let res = ServerError::from(EngineError::ExistingKey("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn engine_validation_maps_to_422() {
        let res = ServerError::from(EngineError::Validation("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn engine_bad_date_maps_to_422() {
        let res = ServerError::from(EngineError::InvalidDate("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn store_failure_maps_to_500() {
        let err = EngineError::Store(StoreError::Poisoned);
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn generic_maps_to_400() {
        let res = ServerError::Generic("bad".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
