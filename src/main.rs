//! Breed registry server: connect the store, ensure the schema, seed from CSV, serve.

use breed_registry::{build_router, connect, import_breeds, AppState, ServiceConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("breed_registry=info,tower_http=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let store = connect(&config.database_url, config.max_connections).await?;
    store.ping().await?;
    store.ensure_schema().await?;
    tracing::info!("breeds table ensured");

    if config.skip_import {
        tracing::info!("skipping breed import");
    } else {
        import_breeds(store.as_ref(), &config.breeds_file).await?;
    }

    let app = build_router(AppState::new(store), &config.api_prefix);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
