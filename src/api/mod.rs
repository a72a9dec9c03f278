//! HTTP surface.
//!
//! - `GET /health`
//! - `POST /comments/:comment_id/react` and `GET /comments/:comment_id/reactions`
//! - `POST /orders`
//! - `PATCH|PUT /orders/status` (admin)
//! - `DELETE /restaurants/:restaurant_id`

pub mod error;
pub mod handlers;

pub use error::ApiError;

use crate::lifecycle::Clients;
use axum::routing::{delete, get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub clients: Clients,
    pub admin_token: Option<Arc<str>>,
}

impl AppState {
    pub fn new(clients: Clients, admin_token: Option<String>) -> Self {
        Self {
            clients,
            admin_token: admin_token.map(Arc::from),
        }
    }
}

/// Build the axum router (separated for testing).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/comments/:comment_id/react", post(handlers::react))
        .route("/comments/:comment_id/reactions", get(handlers::reactions))
        .route("/orders", post(handlers::place_order))
        .route(
            "/orders/status",
            axum::routing::patch(handlers::bulk_status).put(handlers::bulk_status),
        )
        .route("/restaurants/:restaurant_id", delete(handlers::delete_restaurant))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
