//! Session-authenticated HTTP client with transparent retry and re-login.
//!
//! # Responsibilities
//! - Own the lazily-created connection pool
//! - Obtain and refresh the session token via the login flow
//! - Retry transient failures with linear backoff
//! - Surface the typed error taxonomy to callers
//!
//! # Design Decisions
//! - Redirects are inspected, never auto-followed
//! - Session capture is a side effect of generic response handling, not a
//!   separate login-only code path
//! - A forced re-auth retry does not consume the transient budget; the
//!   re-issued request runs with a fresh budget

use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use reqwest::header::{COOKIE, LOCATION, USER_AGENT};
use reqwest::Method;
use uuid::Uuid;

use crate::auth::session::{extract_session_cookie, SessionStore};
use crate::config::ClientConfig;
use crate::http::error::{ClientError, ClientResult};
use crate::http::request::{join_url, RequestDescriptor};
use crate::http::response::{classify, AttemptOutcome};
use crate::resilience::backoff::linear_backoff;
use crate::resilience::retries::is_transient_transport;

/// Result of running the transient retry loop once for a descriptor.
enum Performed {
    /// Body text, or the redirect location for non-login redirects.
    Done(String),
    /// The server redirected an authenticated call to the login page.
    AuthExpired,
}

/// Resilient session client.
///
/// Safe to share across tasks: the session token sits behind an atomic
/// reference (last writer wins) and the pool behind a mutex. The only
/// suspension points are network I/O and the backoff sleep, so dropping a
/// `request()` future aborts the in-flight attempt; nothing keeps retrying
/// in the background.
pub struct SessionClient {
    config: ClientConfig,
    session: SessionStore,
    /// Lazily-created transport. The lock makes concurrent first use build
    /// exactly one pool; `close()` takes it out under the same lock.
    transport: Mutex<Option<reqwest::Client>>,
}

impl SessionClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            session: SessionStore::new(),
            transport: Mutex::new(None),
        }
    }

    /// Whether a session token is currently held.
    pub fn has_session(&self) -> bool {
        self.session.is_active()
    }

    /// Perform one call against the remote service.
    ///
    /// Returns the response body for 2xx responses, or the `Location` target
    /// for redirects that do not point at the login page (several endpoints
    /// signal success by redirecting to the created resource).
    ///
    /// An authenticated call with no session logs in first. If the server
    /// answers with a redirect to the login page mid-flight, the client
    /// re-authenticates once and re-issues the request before giving up
    /// with [`ClientError::Unauthorized`].
    pub async fn request(&self, descriptor: &RequestDescriptor) -> ClientResult<String> {
        let request_id = Uuid::new_v4();

        if descriptor.authenticated && !self.session.is_active() {
            tracing::debug!(request_id = %request_id, "No session held, logging in first");
            self.login().await?;
        }

        match self.perform(descriptor, request_id).await? {
            Performed::Done(result) => Ok(result),
            Performed::AuthExpired => {
                tracing::debug!(request_id = %request_id, "Session stale, re-authenticating");
                self.session.clear();
                self.login().await?;
                match self.perform(descriptor, request_id).await? {
                    Performed::Done(result) => Ok(result),
                    Performed::AuthExpired => Err(ClientError::Unauthorized),
                }
            }
        }
    }

    /// Authenticate against the login endpoint.
    ///
    /// The token itself is captured by the generic response handling; this
    /// method only drives the form POST and rewraps an unauthorized outcome
    /// as [`ClientError::Login`] so callers can tell bad credentials apart
    /// from an expired session.
    pub async fn login(&self) -> ClientResult<()> {
        let descriptor = RequestDescriptor::new(Method::POST, self.config.login_path.clone())
            .with_form(vec![
                (
                    "username".to_string(),
                    self.config.credentials.username.clone(),
                ),
                (
                    "password".to_string(),
                    self.config.credentials.password.clone(),
                ),
            ])
            .unauthenticated();

        let request_id = Uuid::new_v4();
        match self.perform(&descriptor, request_id).await {
            Ok(Performed::Done(_)) => {
                tracing::debug!(request_id = %request_id, "Login succeeded");
                Ok(())
            }
            // The login call is unauthenticated, so a bounce back to the
            // login page surfaces as Unauthorized; both mean rejected
            // credentials here.
            Ok(Performed::AuthExpired) | Err(ClientError::Unauthorized) => {
                Err(ClientError::Login)
            }
            Err(other) => Err(other),
        }
    }

    /// Release the connection pool. Idempotent; safe before first use.
    ///
    /// A later request lazily re-creates the pool, so `close()` does not
    /// retire the client itself.
    pub fn close(&self) {
        if self.lock_transport().take().is_some() {
            tracing::debug!("Connection pool released");
        }
    }

    /// Run the transient retry loop for one descriptor.
    async fn perform(
        &self,
        descriptor: &RequestDescriptor,
        request_id: Uuid,
    ) -> ClientResult<Performed> {
        let url = join_url(&self.config.base_url, &descriptor.path);
        let max_attempts = self.config.retries.max_attempts;
        let unit = Duration::from_millis(self.config.retries.backoff_unit_ms);

        let mut tries: u32 = 0;
        let mut last_status: Option<u16> = None;

        loop {
            tracing::debug!(
                request_id = %request_id,
                method = %descriptor.method,
                url = %url,
                attempt = tries,
                "Sending request"
            );

            let response = match self.send_once(descriptor, &url).await {
                Ok(response) => response,
                Err(err) if is_transient_transport(&err) => {
                    tracing::warn!(
                        request_id = %request_id,
                        attempt = tries,
                        error = %err,
                        "Transient transport failure"
                    );
                    tries += 1;
                    if tries >= max_attempts {
                        return Err(exhausted(last_status, Some(err)));
                    }
                    tokio::time::sleep(linear_backoff(tries, unit)).await;
                    continue;
                }
                Err(err) => return Err(ClientError::Transport(err)),
            };

            // Capture a refreshed session cookie regardless of the status
            // classification below.
            if let Some(token) =
                extract_session_cookie(response.headers(), &self.config.session_cookie)
            {
                tracing::debug!(request_id = %request_id, "Session cookie updated");
                self.session.set(token);
            }

            let status = response.status();
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);

            match classify(status, location.as_deref(), &self.config.login_path) {
                AttemptOutcome::Success => {
                    let body = response.text().await.map_err(ClientError::Transport)?;
                    return Ok(Performed::Done(body));
                }
                AttemptOutcome::Redirect(target) => {
                    tracing::debug!(request_id = %request_id, location = %target, "Redirect result");
                    return Ok(Performed::Done(target));
                }
                AttemptOutcome::LoginRedirect => {
                    return if descriptor.authenticated {
                        Ok(Performed::AuthExpired)
                    } else {
                        self.session.clear();
                        Err(ClientError::Unauthorized)
                    };
                }
                AttemptOutcome::Transient(code) => {
                    tracing::warn!(
                        request_id = %request_id,
                        attempt = tries,
                        status = code,
                        "Transient server error"
                    );
                    last_status = Some(code);
                    tries += 1;
                    if tries >= max_attempts {
                        return Err(exhausted(last_status, None));
                    }
                    tokio::time::sleep(linear_backoff(tries, unit)).await;
                }
                AttemptOutcome::Fatal(error) => return Err(error),
            }
        }
    }

    /// Issue a single attempt. No retries, no redirect following.
    async fn send_once(
        &self,
        descriptor: &RequestDescriptor,
        url: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let client = self.transport()?;
        let mut request = client
            .request(descriptor.method.clone(), url)
            .header(USER_AGENT, &self.config.user_agent);

        if let Some(token) = self.session.get() {
            request = request.header(
                COOKIE,
                format!("{}={}", self.config.session_cookie, token),
            );
        }
        if let Some(form) = &descriptor.form {
            request = request.form(form);
        }

        request.send().await
    }

    /// Get the pool, creating it on first use.
    fn transport(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut guard = self.lock_transport();
        if let Some(client) = guard.as_ref() {
            // reqwest clients are handles onto a shared pool; cloning is cheap.
            return Ok(client.clone());
        }

        tracing::debug!(base_url = %self.config.base_url, "Creating connection pool");
        let client = build_transport()?;
        *guard = Some(client.clone());
        Ok(client)
    }

    /// Lock the transport slot, recovering from a poisoned lock (a panicked
    /// holder cannot leave the Option in a bad state).
    fn lock_transport(&self) -> MutexGuard<'_, Option<reqwest::Client>> {
        match self.transport.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("base_url", &self.config.base_url)
            .field("session_active", &self.session.is_active())
            .finish()
    }
}

/// Build the underlying pool: no automatic redirects, no ambient timeouts.
/// Callers impose their own end-to-end deadlines.
fn build_transport() -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
}

/// Error for an exhausted retry budget, based on the last observed failure.
fn exhausted(last_status: Option<u16>, transport: Option<reqwest::Error>) -> ClientError {
    match (last_status, transport) {
        (Some(status), _) if status >= 500 => ClientError::Server { status },
        (Some(status), _) => ClientError::Response { status },
        (None, Some(err)) => ClientError::Transport(err),
        // Exhaustion always records a failure first; this arm is unreachable.
        (None, None) => ClientError::Server { status: 0 },
    }
}
