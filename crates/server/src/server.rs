use axum::{
    Router,
    routing::{get, patch, post},
};

use std::sync::Arc;

use crate::{budgets, hotels, itinerary, packing, spends, transports, trips};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/trips", post(trips::create).get(trips::list))
        .route(
            "/trips/{id}",
            get(trips::get).patch(trips::update).delete(trips::delete),
        )
        .route("/trips/{id}/itinerary", get(itinerary::list))
        .route("/trips/{id}/budgets", get(budgets::list))
        .route("/trips/{id}/spends", get(spends::list))
        .route("/trips/{id}/hotels", get(hotels::list))
        .route("/trips/{id}/transports", get(transports::list))
        .route("/trips/{id}/packing", get(packing::list))
        .route("/itinerary", post(itinerary::create))
        .route("/itinerary/{id}", patch(itinerary::update))
        .route("/budgets", post(budgets::create))
        .route(
            "/budgets/{id}",
            patch(budgets::update).delete(budgets::delete),
        )
        .route("/spends", post(spends::create))
        .route("/spends/{id}", patch(spends::update).delete(spends::delete))
        .route("/hotels", post(hotels::create))
        .route("/hotels/{id}", patch(hotels::update).delete(hotels::delete))
        .route("/transports", post(transports::create))
        .route(
            "/transports/{id}",
            patch(transports::update).delete(transports::delete),
        )
        .route("/packing", post(packing::create))
        .route(
            "/packing/{id}",
            patch(packing::update).delete(packing::delete),
        )
        .with_state(state)
}

/// Router over the given engine, for driving requests in-process.
pub fn app(engine: Engine) -> Router {
    router(ServerState {
        engine: Arc::new(engine),
    })
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
