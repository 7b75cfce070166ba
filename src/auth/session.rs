//! Session token storage and cookie capture.
//!
//! # Responsibilities
//! - Hold the opaque session token behind an atomic reference
//! - Extract the session cookie from response headers
//!
//! # Design Decisions
//! - Last writer wins; readers always see a complete token, never a torn one
//! - The store never decides *when* to write; the request pipeline does

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use reqwest::header::{HeaderMap, SET_COOKIE};

/// Shared, atomically-updated session token.
///
/// Written from inside the request pipeline whenever the server sets a
/// fresh session cookie; cleared when the server signals the session is
/// no longer valid. At most one live token exists per client instance.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: ArcSwapOption<String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            token: ArcSwapOption::const_empty(),
        }
    }

    /// Current token, if a session is active.
    pub fn get(&self) -> Option<Arc<String>> {
        self.token.load_full()
    }

    /// Whether a session token is currently held.
    pub fn is_active(&self) -> bool {
        self.token.load().is_some()
    }

    /// Replace the token. The new value supersedes any prior one atomically.
    pub fn set(&self, token: String) {
        self.token.store(Some(Arc::new(token)));
    }

    /// Drop the token (session invalidated by the server).
    pub fn clear(&self) {
        self.token.store(None);
    }
}

/// Extract the named cookie's value from the response's `Set-Cookie` headers.
///
/// Attributes after the first `;` (Path, HttpOnly, ...) are ignored; only
/// the opaque value matters to the session protocol.
pub fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for value in headers.get_all(SET_COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        let pair = raw.split(';').next().unwrap_or(raw);
        if let Some((cookie_name, cookie_value)) = pair.split_once('=') {
            if cookie_name.trim() == name {
                return Some(cookie_value.trim().to_string());
            }
        }
    }
    None
}
