//! Server configuration

use std::fmt;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_PLATFORM_URL: &str = "https://core.blink.new";

/// Server configuration loaded from environment variables
pub struct Config {
    pub bind_address: String,
    pub project_id: Option<String>,
    pub secret_key: Option<String>,
    pub platform_url: String,
}

/// Credentials for the AI platform project that owns auth and generation
#[derive(Clone)]
pub struct ProjectCredentials {
    pub project_id: String,
    pub secret_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // An empty secret is as good as a missing one
        let secret = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into()),
            project_id: secret("BLINK_PROJECT_ID"),
            secret_key: secret("BLINK_SECRET_KEY"),
            platform_url: lookup("BLINK_API_URL").unwrap_or_else(|| DEFAULT_PLATFORM_URL.into()),
        }
    }

    /// Both deployment secrets, or `None` if either is missing
    pub fn credentials(&self) -> Option<ProjectCredentials> {
        Some(ProjectCredentials {
            project_id: self.project_id.clone()?,
            secret_key: self.secret_key.clone()?,
        })
    }
}

impl fmt::Debug for ProjectCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectCredentials")
            .field("project_id", &self.project_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
