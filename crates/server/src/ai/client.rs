//! HTTP client for the Blink platform project API (token verification and text generation)

use async_trait::async_trait;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;

use super::generator::TextGenerator;
use crate::config::ProjectCredentials;
use crate::middleware::auth::TokenVerifier;

/// Client for the platform's auth and AI endpoints
#[derive(Clone)]
pub struct PlatformClient {
    http: reqwest::Client,
    base_url: String,
}

/// Failures talking to the platform
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Platform API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[derive(Serialize)]
struct VerifyRequest<'a> {
    token: Option<&'a str>,
}

#[derive(Deserialize)]
struct VerifyResponse {
    valid: bool,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    text: String,
}

/// Error detail from the platform API
#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl PlatformClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, credentials: &ProjectCredentials, path: &str) -> String {
        format!(
            "{}/api/projects/{}/{}",
            self.base_url.trim_end_matches('/'),
            credentials.project_id,
            path
        )
    }

    /// POST a JSON body to a project endpoint and decode the JSON reply
    async fn post<B, R>(
        &self,
        credentials: &ProjectCredentials,
        path: &str,
        body: &B,
    ) -> Result<R, PlatformError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.endpoint(credentials, path))
            .bearer_auth(&credentials.secret_key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiError>(&body) {
                Ok(api_err) => api_err.error.message,
                Err(_) => body,
            };
            return Err(PlatformError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<R>()
            .await
            .map_err(|e| PlatformError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TokenVerifier for PlatformClient {
    async fn verify(
        &self,
        credentials: &ProjectCredentials,
        token: Option<&str>,
    ) -> Result<bool, PlatformError> {
        let response: VerifyResponse = self
            .post(credentials, "auth/verify", &VerifyRequest { token })
            .await?;
        Ok(response.valid)
    }
}

#[async_trait]
impl TextGenerator for PlatformClient {
    async fn generate(
        &self,
        credentials: &ProjectCredentials,
        prompt: &str,
        model: &str,
    ) -> Result<String, PlatformError> {
        let response: GenerateResponse = self
            .post(credentials, "ai/text", &GenerateRequest { prompt, model })
            .await?;
        Ok(response.text)
    }
}
