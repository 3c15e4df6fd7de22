//! # Domain models for forms and users
//!
//! Defines the records persisted by a [`crate::FormStore`] / [`crate::UserStore`].
//! These types are `Serialize + Deserialize` so they can cross the server/client
//! boundary via Dioxus server functions and the JSON HTTP API.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Form`] | A form record. JSON uses camelCase (`isPublished`, `updatedAt`). `is_published` is a free-standing boolean, not a workflow state. |
//! | [`User`] | A user row. Holds a [`PasswordHash`], never a plaintext password. |
//! | [`UserInfo`] | The client-safe projection of [`User`] (no hash, no timestamps). |
//! | [`PasswordHash`] | A PHC-format hash string (`$argon2id$v=19$...`). Construction checks the shape so plaintext can't slip into the column. |
//!
//! ## Timestamps
//!
//! [`next_update_timestamp`] computes the `updated_at` value for a write: the current
//! time, bumped by one microsecond when the clock has not moved past the previous
//! value. Every write therefore strictly advances `updated_at`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repo::StoreError;

/// A form record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    /// Opaque identifier (path-supplied by clients).
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Form {
    /// A new unpublished form stamped with the current time.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            is_published: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full user record.
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// A password hash in PHC string format.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap a PHC string, rejecting anything that doesn't look like one.
    ///
    /// PHC strings start with `$`, name the algorithm, and carry at least a salt and
    /// a hash segment: `$<alg>[$v=<version>][$<params>]$<salt>$<hash>`.
    pub fn from_phc(phc: impl Into<String>) -> Result<Self, StoreError> {
        let phc = phc.into();
        let segments: Vec<&str> = phc.split('$').collect();
        let well_formed = phc.starts_with('$')
            && segments.len() >= 4
            && segments[1..].iter().all(|s| !s.is_empty())
            && !phc.chars().any(char::is_whitespace);
        if !well_formed {
            return Err(StoreError::InvalidPasswordHash);
        }
        Ok(Self(phc))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Never print the hash itself.
impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// The `updated_at` value for a write following `previous`.
pub fn next_update_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Normalize an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_serializes_camel_case() {
        let form = Form::new("abc123", "Feedback");
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["id"], "abc123");
        assert_eq!(json["isPublished"], false);
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("is_published").is_none());
    }

    #[test]
    fn phc_strings_are_accepted() {
        let phc = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNo";
        let hash = PasswordHash::from_phc(phc).unwrap();
        assert_eq!(hash.as_str(), phc);
    }

    #[test]
    fn plaintext_is_rejected_as_hash() {
        for candidate in ["hunter22", "", "$", "$argon2id", "$argon2id$$salt$hash", "$a$b $c"] {
            assert!(
                PasswordHash::from_phc(candidate).is_err(),
                "accepted {candidate:?}"
            );
        }
    }

    #[test]
    fn debug_does_not_leak_hash() {
        let hash = PasswordHash::from_phc("$argon2id$v=19$c2FsdA$aGFzaA").unwrap();
        assert_eq!(format!("{hash:?}"), "PasswordHash(..)");
    }

    #[test]
    fn update_timestamp_always_advances() {
        let future = Utc::now() + Duration::seconds(60);
        assert!(next_update_timestamp(future) > future);

        let past = Utc::now() - Duration::seconds(60);
        assert!(next_update_timestamp(past) > past);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut info = UserInfo {
            id: "1".to_string(),
            email: "ada@example.com".to_string(),
            name: None,
        };
        assert_eq!(info.display_name(), "ada@example.com");
        info.name = Some("Ada".to_string());
        assert_eq!(info.display_name(), "Ada");
    }

    #[test]
    fn emails_are_normalized() {
        assert_eq!(normalize_email("  Ada@Example.COM "), "ada@example.com");
    }
}
