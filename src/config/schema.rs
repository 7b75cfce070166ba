//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so minimal configs stay minimal; only the base
//! URL and credentials genuinely have to be supplied.

use serde::{Deserialize, Serialize};

/// Root configuration for a [`SessionClient`](crate::http::SessionClient).
///
/// Immutable once the client is constructed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root URL of the remote service (e.g. "https://example.com").
    pub base_url: String,

    /// Login credentials.
    pub credentials: CredentialsConfig,

    /// User-Agent header sent on every request.
    pub user_agent: String,

    /// Name of the session cookie issued by the service.
    pub session_cookie: String,

    /// Relative path of the login endpoint.
    pub login_path: String,

    /// Retry behavior.
    pub retries: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            credentials: CredentialsConfig::default(),
            user_agent: default_user_agent(),
            session_cookie: "laravel_session".to_string(),
            login_path: "/login".to_string(),
            retries: RetryConfig::default(),
        }
    }
}

/// Username/password pair for the login form.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum attempts per request before the failure surfaces.
    pub max_attempts: u32,

    /// Backoff unit in milliseconds; attempt N waits N times this unit.
    pub backoff_unit_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            backoff_unit_ms: 2000,
        }
    }
}

/// Default User-Agent: crate name and version plus the transport library.
pub fn default_user_agent() -> String {
    format!(
        "{}/{} (rust; reqwest)",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.session_cookie, "laravel_session");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.retries.max_attempts, 5);
        assert_eq!(config.retries.backoff_unit_ms, 2000);
        assert!(config.user_agent.starts_with("session-client/"));
    }

    #[test]
    fn test_minimal_toml() {
        let config: ClientConfig = toml::from_str(
            r#"
            base_url = "https://example.com"

            [credentials]
            username = "someone"
            password = "hunter2"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.credentials.username, "someone");
        assert_eq!(config.retries.max_attempts, 5);
    }
}
