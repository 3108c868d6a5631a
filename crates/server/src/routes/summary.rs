//! Health summary endpoint (POST and preflight on any path)

use axum::{
    Json,
    body::to_bytes,
    extract::{Request, State},
    http::StatusCode,
};
use health_summary_core::{Language, SummaryRequest};
use serde::Serialize;

use crate::AppState;
use crate::ai;
use crate::error::AppError;
use crate::middleware::{authorize, bearer_token};

/// Largest request body read before giving up
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Response body for a generated summary
#[derive(Serialize)]
pub struct SummaryResponse {
    summary: String,
}

/// OPTIONS - Cross-origin preflight; CORS headers are added by middleware
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// POST - Summarize a patient's records
///
/// Runs the config guard, authorization gate and payload validation in that
/// order, then compiles the prompt and asks the platform for one completion.
pub async fn summarize(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<SummaryResponse>, AppError> {
    let credentials = state.credentials.as_ref().ok_or(AppError::MissingConfig)?;

    let (parts, body) = request.into_parts();
    authorize(
        state.verifier.as_ref(),
        credentials,
        bearer_token(&parts.headers),
    )
    .await?;

    // The body is only read once the caller is known to be authorized
    let body = to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| AppError::SummaryFailed(format!("Failed to read request body: {e}")))?;
    let input = SummaryRequest::from_slice(&body)?.validate()?;

    tracing::info!(
        records = input.records.len(),
        allergies = input.allergies.len(),
        language = input.language.map(Language::code).unwrap_or("en"),
        "Generating health summary"
    );

    let summary = ai::generate_summary(state.generator.as_ref(), credentials, &input).await?;

    metrics::counter!("summaries_generated_total").increment(1);
    tracing::info!(summary_bytes = summary.len(), "Health summary generated");

    Ok(Json(SummaryResponse { summary }))
}
