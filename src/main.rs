// Start of file: /src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use greetings_api::config::state::AppState;
use greetings_api::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;

    tracing::info!("Starting in '{}' environment", state.environment.environment);

    let app: Router = server::create_app(state.clone());

    // A failed bind (port in use, permission denied) propagates here
    // and terminates the process.
    let listener: TcpListener = server::setup_listener(&state.environment).await?;

    println!(
        "Server listening on: {}://{}",
        state.environment.protocol,
        listener.local_addr()?
    );

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: /src/main.rs
