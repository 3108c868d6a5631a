//! Prometheus metrics endpoint
//!
//! Besides the per-request `http_requests_total` and
//! `http_request_duration_seconds` series recorded by the metrics middleware,
//! the summary handler contributes:
//! - `summaries_generated_total`: summaries returned with status 200
//! - `summary_failures_total`: requests answered with "Failed to generate summary"

use axum::{Extension, response::IntoResponse};
use metrics_exporter_prometheus::PrometheusHandle;

/// GET /metrics - Render the shared recorder in Prometheus text format
pub async fn get(Extension(handle): Extension<PrometheusHandle>) -> impl IntoResponse {
    handle.render()
}
