//! # Credential seeding
//!
//! [`seed_credentials`] creates a user with a hashed password, or rotates the
//! password hash of an existing user with the same email. The display name is only
//! written on creation. Used by the `seed-user` admin binary; never called by the
//! service itself.

use std::fmt;

use store::{normalize_email, UpsertOutcome, User, UserStore};
use thiserror::Error;

use crate::password::{hash_password, PasswordError, WorkFactor};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,

    #[error("Name is required")]
    MissingName,

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Store(#[from] store::StoreError),
}

/// Who to seed.
#[derive(Clone)]
pub struct SeedRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

impl fmt::Debug for SeedRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedRequest")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub struct SeedReport {
    pub user: User,
    pub outcome: UpsertOutcome,
}

/// Exactly one `@`, with something on both sides and no whitespace.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Validate, hash, upsert.
pub async fn seed_credentials(
    users: &dyn UserStore,
    request: &SeedRequest,
    work: WorkFactor,
) -> Result<SeedReport, SeedError> {
    let email = normalize_email(&request.email);
    let name = request.name.trim();

    if !is_plausible_email(&email) {
        return Err(SeedError::InvalidEmail);
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SeedError::PasswordTooShort);
    }
    if name.is_empty() {
        return Err(SeedError::MissingName);
    }

    let hash = hash_password(&request.password, work)?;
    let (user, outcome) = users.upsert_credentials(&email, name, &hash).await?;

    tracing::info!(email = %user.email, user_id = %user.id, ?outcome, "seeded credentials");
    Ok(SeedReport { user, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::{verify_password, TEST_WORK_FACTOR};
    use store::MemoryStore;

    fn request(email: &str, name: &str, password: &str) -> SeedRequest {
        SeedRequest {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_rejects_invalid_input() {
        let store = MemoryStore::new();
        let cases = [
            (request("", "Ada", "long enough"), "Invalid email address"),
            (request("ada.example.com", "Ada", "long enough"), "Invalid email address"),
            (request("@", "Ada", "long enough"), "Invalid email address"),
            (request("ada@", "Ada", "long enough"), "Invalid email address"),
            (request("@example.com", "Ada", "long enough"), "Invalid email address"),
            (request("ada@@example.com", "Ada", "long enough"), "Invalid email address"),
            (request("ada lovelace@example.com", "Ada", "long enough"), "Invalid email address"),
            (request("ada@example.com", "Ada", "short"), "Password must be at least 8 characters"),
            (request("ada@example.com", "  ", "long enough"), "Name is required"),
        ];
        for (req, message) in cases {
            let err = seed_credentials(&store, &req, TEST_WORK_FACTOR)
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), message);
        }
        assert_eq!(store.user_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_email_is_normalized() {
        let store = MemoryStore::new();
        let report = seed_credentials(
            &store,
            &request("  Ada@Example.com ", "Ada", "long enough"),
            TEST_WORK_FACTOR,
        )
        .await
        .unwrap();
        assert_eq!(report.user.email, "ada@example.com");
        assert!(verify_password("long enough", &report.user.password_hash).unwrap());
    }

    #[test]
    fn test_debug_redacts_password() {
        let printed = format!("{:?}", request("a@b.c", "A", "super secret"));
        assert!(!printed.contains("super secret"));
        assert!(printed.contains("<redacted>"));
    }
}
