//! health-summary-server library crate
//!
//! Exposes `build_app`, `config` and the platform capability traits for
//! integration tests. The actual binary entrypoint is in `main.rs`.

mod ai;
pub mod config;
mod error;
mod middleware;
mod routes;

use std::sync::{Arc, OnceLock};

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tower_http::trace::TraceLayer;

use config::{Config, ProjectCredentials};

pub use ai::{PlatformClient, PlatformError, SUMMARY_MODEL, TextGenerator};
pub use middleware::TokenVerifier;

/// Per-router state shared (read-only) by every request
#[derive(Clone)]
pub struct AppState {
    /// `None` when either platform secret is missing; requests then fail fast
    pub credentials: Option<ProjectCredentials>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub generator: Arc<dyn TextGenerator>,
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// with stand-in collaborators and without binding to a TCP port.
pub fn build_app(
    config: &Config,
    verifier: Arc<dyn TokenVerifier>,
    generator: Arc<dyn TextGenerator>,
) -> Router {
    let state = AppState {
        credentials: config.credentials(),
        verifier,
        generator,
    };

    let prometheus_handle = prometheus_handle();

    // Operational routes; OPTIONS still answers the preflight everywhere
    let public_routes = Router::new()
        .route(
            "/health",
            get(routes::health::check)
                .options(routes::summary::preflight)
                .fallback(routes::method_not_allowed),
        )
        .route(
            "/metrics",
            get(routes::metrics::get)
                .options(routes::summary::preflight)
                .fallback(routes::method_not_allowed),
        )
        .layer(Extension(prometheus_handle));

    let summary_routes =
        routes::summary_routes().layer(axum_mw::from_fn(middleware::audit_middleware));

    Router::new()
        .merge(public_routes)
        .merge(summary_routes)
        .with_state(state)
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(axum_mw::from_fn(middleware::cors_middleware))
        // 5xx responses are logged once, by AppError
        .layer(TraceLayer::new_for_http().on_failure(()))
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}

/// Handle to the process-wide Prometheus recorder.
///
/// The recorder is installed on first use; every later app (e.g. one per
/// integration test) renders from the same installed recorder.
fn prometheus_handle() -> PrometheusHandle {
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    HANDLE
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if metrics::set_global_recorder(recorder).is_err() {
                tracing::warn!("Global metrics recorder already installed, /metrics may be empty");
            }
            handle
        })
        .clone()
}
