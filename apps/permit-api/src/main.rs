//! Permit API server binary

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use permit_api::{router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("permit_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Initializing permit API...");
    let config = Config::from_env()?;
    let addr = config.socket_addr();
    let state = Arc::new(AppState::new(config));

    let app = router(state);

    info!("Starting permit API on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
