//! Bearer token authorization against the platform's auth service

use async_trait::async_trait;
use axum::http::{HeaderMap, header::AUTHORIZATION};

use crate::ai::PlatformError;
use crate::config::ProjectCredentials;
use crate::error::AppError;

/// Token verification capability of the platform's auth service
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// `Ok(true)` only for a token the auth service accepts
    async fn verify(
        &self,
        credentials: &ProjectCredentials,
        token: Option<&str>,
    ) -> Result<bool, PlatformError>;
}

/// Extract the credential from the `Authorization` header.
///
/// A `Bearer ` scheme prefix is stripped; a missing, blank or non-ASCII header is `None`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
        .unwrap_or(value)
        .trim();

    (!token.is_empty()).then_some(token)
}

/// Ask the verifier about `token`. Errors from the verifier reject the request.
pub async fn authorize(
    verifier: &dyn TokenVerifier,
    credentials: &ProjectCredentials,
    token: Option<&str>,
) -> Result<(), AppError> {
    match verifier.verify(credentials, token).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            tracing::info!(token_present = token.is_some(), "Rejected request credential");
            Err(AppError::Unauthorized)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Token verification failed, rejecting request");
            Err(AppError::Unauthorized)
        }
    }
}
