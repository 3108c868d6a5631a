pub mod health;
pub mod metrics;
pub mod summary;

use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;
use crate::error::AppError;

/// Build the summary routes: the root and every other path accept POST and OPTIONS
pub fn summary_routes() -> Router<AppState> {
    let endpoint = || {
        post(summary::summarize)
            .options(summary::preflight)
            .fallback(method_not_allowed)
    };

    Router::new()
        .route("/", endpoint())
        .route("/{*path}", endpoint())
}

/// Any other method on a known path gets the JSON error envelope
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
