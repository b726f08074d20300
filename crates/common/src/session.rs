//! Staff session identity.
//!
//! The session is issued elsewhere; the POS only reads it. Components that need
//! the signed-in staff member receive a [`SessionProvider`] at construction
//! instead of reading the cookie store themselves.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the cookie carrying the serialized staff record.
pub const CURRENT_USER_COOKIE: &str = "currentUser";

/// Errors that can occur while decoding a session cookie.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The cookie value is not valid percent-encoded UTF-8.
    #[error("Cookie value is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The decoded value is not a staff record.
    #[error("Malformed staff record: {0}")]
    Record(#[from] serde_json::Error),
}

/// The staff member operating the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl StaffUser {
    /// Creates a staff user.
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl std::fmt::Display for StaffUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}::{} {}", self.id, self.first_name, self.last_name)
    }
}

/// Source of the current staff identity.
pub trait SessionProvider: Send + Sync {
    /// Returns the signed-in staff member, if any.
    fn current_user(&self) -> Option<StaffUser>;
}

/// A fixed identity, useful for tests and single-operator terminals.
#[derive(Debug, Clone, Default)]
pub struct StaticSession(Option<StaffUser>);

impl StaticSession {
    pub fn new(user: Option<StaffUser>) -> Self {
        Self(user)
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl SessionProvider for StaticSession {
    fn current_user(&self) -> Option<StaffUser> {
        self.0.clone()
    }
}

/// Session read from a request's `Cookie` header.
#[derive(Debug, Clone, Default)]
pub struct CookieSession {
    user: Option<StaffUser>,
}

impl CookieSession {
    /// Parses the `currentUser` cookie out of a raw `Cookie` header.
    ///
    /// A missing or malformed cookie yields an anonymous session.
    pub fn from_cookie_header(header: &str) -> Self {
        let user = header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == CURRENT_USER_COOKIE)
            .and_then(|(_, value)| match decode_staff_cookie(value) {
                Ok(user) => Some(user),
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring unreadable session cookie");
                    None
                }
            });

        Self { user }
    }
}

impl SessionProvider for CookieSession {
    fn current_user(&self) -> Option<StaffUser> {
        self.user.clone()
    }
}

/// Decodes a percent-encoded JSON staff record.
pub fn decode_staff_cookie(value: &str) -> Result<StaffUser, SessionError> {
    let decoded = urlencoding::decode(value)?;
    Ok(serde_json::from_str(&decoded)?)
}
