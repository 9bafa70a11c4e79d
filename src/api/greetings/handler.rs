// Greeting handlers

use axum::extract::State;
use tracing::{info, instrument};

use crate::api::greetings::model::User;
use crate::config::state::AppState;

/// Responds with the static hello greeting
#[instrument(skip(_state))]
pub async fn hello_handler(State(_state): State<AppState>) -> String {
    info!("Hello endpoint called");

    let user: User = User {
        name: "World".to_string(),
    };

    format!("Hello, {}!", user.name)
}

/// Responds with the static goodbye greeting
#[instrument(skip(_state))]
pub async fn goodbye_handler(State(_state): State<AppState>) -> String {
    info!("Goodbye endpoint called");

    let user: User = User {
        name: "World".to_string(),
    };

    format!("Goodbye, {}!", user.name)
}
