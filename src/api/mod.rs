pub mod health;
pub mod webhook;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Webhook (the platform posts to the root URL; /webhook for generic integrations)
        .route("/", post(webhook::handle_webhook))
        .route("/webhook", post(webhook::handle_webhook))
        .with_state(state)
}
