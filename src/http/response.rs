//! Per-attempt response classification.
//!
//! # Responsibilities
//! - Reduce each response to a tagged outcome the retry loop dispatches on
//! - Recognize redirects to the login page (stale or missing session)
//!
//! # Design Decisions
//! - Tagged enum instead of exception-style control flow; the loop stays flat
//! - Redirects are data, not errors: a non-login redirect is a success value
//! - 503 is deliberately absent from the transient set; the remote service
//!   uses it for hard maintenance outages

use reqwest::StatusCode;
use url::Url;

use crate::http::error::ClientError;
use crate::resilience::retries::is_transient_status;

/// Outcome of a single request attempt.
#[derive(Debug)]
pub enum AttemptOutcome {
    /// 2xx; the response body is the result.
    Success,
    /// 302 to somewhere other than the login page; the location is the result.
    Redirect(String),
    /// 302 to the login page; the session is stale or absent.
    LoginRedirect,
    /// Transient server error; retry after backoff.
    Transient(u16),
    /// Terminal failure; surfaced to the caller unchanged.
    Fatal(ClientError),
}

/// Classify one response by status and `Location` header.
///
/// Body retrieval for `Success` is left to the caller; classification never
/// consumes the response.
pub fn classify(status: StatusCode, location: Option<&str>, login_path: &str) -> AttemptOutcome {
    if status.is_success() {
        return AttemptOutcome::Success;
    }

    if status == StatusCode::FOUND {
        return match location {
            Some(target) if is_login_redirect(target, login_path) => AttemptOutcome::LoginRedirect,
            Some(target) => AttemptOutcome::Redirect(target.to_string()),
            None => AttemptOutcome::Fatal(ClientError::Response {
                status: status.as_u16(),
            }),
        };
    }

    if is_transient_status(status) {
        return AttemptOutcome::Transient(status.as_u16());
    }

    if status == StatusCode::NOT_FOUND {
        return AttemptOutcome::Fatal(ClientError::NotFound);
    }

    if status.is_server_error() {
        return AttemptOutcome::Fatal(ClientError::Server {
            status: status.as_u16(),
        });
    }

    AttemptOutcome::Fatal(ClientError::Response {
        status: status.as_u16(),
    })
}

/// Whether a redirect target points at the login page.
///
/// The target may be an absolute URL or a bare path; only the path component
/// is compared, so `/login?next=...` still counts and `/relogin` does not.
pub fn is_login_redirect(location: &str, login_path: &str) -> bool {
    let path = match Url::parse(location) {
        Ok(url) => url.path().to_string(),
        Err(_) => location
            .split(['?', '#'])
            .next()
            .unwrap_or(location)
            .to_string(),
    };
    path.trim_end_matches('/') == login_path.trim_end_matches('/')
}
