//! Missive server entry point.

use missive_models::GeminiClient;
use missive_server::{ApiState, GenerationService, ServiceConfig, create_router};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    missive_core::observability::init_tracing("missive_server=debug,info");

    let config = ServiceConfig::from_env();
    let service = Arc::new(GenerationService::<GeminiClient>::new(
        config.model().clone(),
    ));
    let state = ApiState::new(service, config.auth_token().clone());
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "Missive server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    info!("Shutting down Missive server");
}
