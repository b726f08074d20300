//! Shared types for the kiosk POS workspace.

pub mod session;
pub mod types;

pub use session::{
    CURRENT_USER_COOKIE, CookieSession, SessionError, SessionProvider, StaffUser, StaticSession,
};
pub use types::{CheckoutId, ProductId};
