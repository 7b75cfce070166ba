//! Authentication subsystem.
//!
//! # Data Flow
//! ```text
//! login response (Set-Cookie)
//!     → session.rs (extract token, atomic store)
//!     → subsequent requests read the token for the Cookie header
//!
//! On 302-to-login:
//!     → token cleared, login flow re-runs, new token supersedes the old
//! ```

pub mod session;

pub use session::SessionStore;
