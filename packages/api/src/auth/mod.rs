//! Session-based authentication helpers.

#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use session::{session_user_id, SESSION_USER_ID_KEY};
