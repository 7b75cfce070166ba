//! Resilient session-authenticated HTTP client.
//!
//! Owns a lazily-initialized connection pool, a session token obtained via a
//! login flow, and a bounded retry loop that re-authenticates on session
//! expiry and retries transient server errors. Callers depend on it only
//! through `request()`, `login()`, and `close()`; they never touch the
//! session token directly.
//!
//! # Architecture Overview
//!
//! ```text
//! caller
//!     → http/client.rs    (request / login / close, retry loop)
//!         → http/request.rs   (descriptor, URL assembly)
//!         → auth/session.rs   (token store, cookie capture)
//!         → resilience/       (backoff schedule, transient classification)
//!         → http/response.rs  (per-attempt tagged outcome)
//!     ← body text | redirect location | typed error
//!
//! Cross-cutting:
//!     config/         (schema, TOML loading, validation)
//!     observability/  (tracing setup, per-call request IDs)
//! ```
//!
//! # Session lifecycle
//!
//! ```text
//! NO_SESSION → AUTHENTICATING → SESSION_ACTIVE
//!      ▲                              │
//!      └──── 302 to the login page ───┘
//! ```

pub mod auth;
pub mod config;
pub mod http;
pub mod observability;
pub mod resilience;

pub use config::{ClientConfig, CredentialsConfig, RetryConfig};
pub use http::client::SessionClient;
pub use http::error::{ClientError, ClientResult};
pub use http::request::RequestDescriptor;
