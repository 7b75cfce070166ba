//! Request descriptors and URL assembly.
//!
//! # Responsibilities
//! - Describe one client call (verb, path, payload, auth requirement)
//! - Join relative paths onto the configured base URL
//!
//! # Design Decisions
//! - Descriptors are immutable once constructed; one per call site
//! - URL joining normalizes slashes rather than trusting callers

use reqwest::Method;

/// Immutable description of one client call.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP verb.
    pub method: Method,

    /// Path relative to the configured base URL.
    pub path: String,

    /// Optional form-encoded payload.
    pub form: Option<Vec<(String, String)>>,

    /// Whether a missing session triggers an implicit login before the call.
    pub authenticated: bool,
}

impl RequestDescriptor {
    /// Authenticated request without a payload.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            form: None,
            authenticated: true,
        }
    }

    /// Attach a form-encoded payload.
    pub fn with_form(mut self, form: Vec<(String, String)>) -> Self {
        self.form = Some(form);
        self
    }

    /// Mark the call as not requiring a session.
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

/// Join a path onto the base URL with exactly one separator.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
