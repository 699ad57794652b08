use std::sync::Arc;

use settings::Store;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "viaggio={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let store: Arc<dyn engine::RecordStore> = match settings.server.store {
        Store::Memory => Arc::new(engine::MemoryStore::new()),
        Store::Json(path) => {
            tracing::info!("Using JSON store at {path}");
            Arc::new(engine::JsonFileStore::new(path)?)
        }
    };
    let engine = engine::Engine::builder().store(store).build()?;

    let bind = settings
        .server
        .bind
        .unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    server::run_with_listener(engine, listener).await?;

    Ok(())
}
