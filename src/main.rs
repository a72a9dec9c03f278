use actor_framework::tracing::setup_tracing;
use restaurant_orders::api::{self, AppState};
use restaurant_orders::config::AppConfig;
use restaurant_orders::lifecycle::RestaurantSystem;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AppConfig::load()?;
    info!(
        addr = %config.server.addr(),
        policy = ?config.reactions.policy,
        admin_auth = config.auth.admin_token.is_some(),
        "Starting restaurant service"
    );

    let system = RestaurantSystem::new(&config);
    let state = AppState::new(system.clients.clone(), config.auth.admin_token.clone());

    let listener = tokio::net::TcpListener::bind(config.server.addr()).await?;
    info!(addr = %listener.local_addr()?, "HTTP API listening");
    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
