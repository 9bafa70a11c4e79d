// Greeting route definitions

use axum::{routing::get, Router};

use super::handler;
use crate::config::state::AppState;

/// Creates the router for the versioned greeting endpoints
pub fn greeting_routes() -> Router<AppState> {
    Router::new()
        .route("/v1/hello", get(handler::hello_handler))
        .route("/v1/goodbye", get(handler::goodbye_handler))
}
