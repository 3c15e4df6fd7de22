//! # Persistence traits
//!
//! All reads and writes of forms and users go through [`FormStore`] and
//! [`UserStore`], so the same handlers work against PostgreSQL (`backend::PgStore`)
//! or the in-memory [`crate::MemoryStore`] used by tests and local development.
//!
//! The traits are object safe (`async_trait`) and `Send + Sync`, so a service can
//! hold them as `Arc<dyn FormStore>` in shared state.

use async_trait::async_trait;

use crate::models::{Form, PasswordHash, User};

/// Errors surfaced by a store implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing database failed (connection, constraint, decoding...).
    #[error("store backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A lock guarding in-memory state was poisoned by a panicking writer.
    #[error("store state poisoned")]
    Poisoned,

    /// A value that should be a PHC password hash is not one.
    #[error("invalid password hash")]
    InvalidPasswordHash,
}

impl StoreError {
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(err))
    }
}

/// Whether an upsert created a new row or updated an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// Async interface over form records.
#[async_trait]
pub trait FormStore: Send + Sync {
    /// Look up a form by id.
    async fn get_form(&self, id: &str) -> Result<Option<Form>, StoreError>;

    /// Set `is_published` and advance `updated_at` in one write.
    ///
    /// Returns `Ok(None)` when no form has this id; nothing is written then.
    async fn set_published(&self, id: &str, is_published: bool)
        -> Result<Option<Form>, StoreError>;
}

/// Async interface over user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by (normalized) email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by id.
    async fn find_user_by_id(&self, id: uuid::Uuid) -> Result<Option<User>, StoreError>;

    /// Insert `(email, name, hash)` if no user has this email, otherwise replace
    /// only the password hash of the existing user.
    async fn upsert_credentials(
        &self,
        email: &str,
        name: &str,
        password_hash: &PasswordHash,
    ) -> Result<(User, UpsertOutcome), StoreError>;
}
