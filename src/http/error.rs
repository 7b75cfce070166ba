//! Error taxonomy for the session client.

use thiserror::Error;

/// Errors surfaced by [`SessionClient`](crate::http::SessionClient) operations.
///
/// Transient conditions (connection resets, the retryable 5xx set) are
/// handled inside the retry loop and only appear here once the attempt
/// budget is exhausted.
#[derive(Debug, Error)]
pub enum ClientError {
    /// An authenticated call had no valid session and re-login did not
    /// produce one, or the server redirected an unauthenticated call to
    /// the login page.
    #[error("unauthorized: session rejected by the remote service")]
    Unauthorized,

    /// The login flow itself was rejected (invalid credentials).
    #[error("login failed: credentials rejected")]
    Login,

    /// Server responded 404 for the requested path.
    #[error("resource not found")]
    NotFound,

    /// Non-transient 5xx response, or retries exhausted while the last
    /// observed status was a server error.
    #[error("server error: status {status}")]
    Server { status: u16 },

    /// Any other unexpected response status.
    #[error("unexpected response: status {status}")]
    Response { status: u16 },

    /// Non-transient transport failure, propagated unchanged.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
