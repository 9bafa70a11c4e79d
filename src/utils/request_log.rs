// Start of file: /src/utils/request_log.rs

use std::{convert::Infallible, time::Instant};

use axum::{
    body::Body,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

/*
    * Logs method, path, status, and latency for every request.
    * The response body passes through untouched.
*/
pub async fn request_log(
    req: Request<Body>,
    next: Next,
) -> Result<Response, Infallible> {
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    let start: Instant = Instant::now();

    let response: Response = next.run(req).await;

    info!(
        "{} {} -> {} in {} ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );

    Ok(response)
}

// End of file: /src/utils/request_log.rs
