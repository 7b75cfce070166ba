//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check URL shape and credential presence
//! - Validate value ranges (attempt budget at least 1)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ClientConfig → Result<(), Vec<ValidationError>>
//! - Runs before a config is accepted into a client

use thiserror::Error;
use url::Url;

use crate::config::schema::ClientConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("base_url '{0}' is not a valid http(s) URL")]
    InvalidBaseUrl(String),

    #[error("credentials.{0} must not be empty")]
    MissingCredential(&'static str),

    #[error("login_path must start with '/'")]
    InvalidLoginPath,

    #[error("retries.max_attempts must be at least 1")]
    ZeroAttempts,
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ClientConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        _ => errors.push(ValidationError::InvalidBaseUrl(config.base_url.clone())),
    }

    if config.credentials.username.is_empty() {
        errors.push(ValidationError::MissingCredential("username"));
    }
    if config.credentials.password.is_empty() {
        errors.push(ValidationError::MissingCredential("password"));
    }
    if !config.login_path.starts_with('/') {
        errors.push(ValidationError::InvalidLoginPath);
    }
    if config.retries.max_attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
