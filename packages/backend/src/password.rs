//! # Password hashing and verification: Argon2id
//!
//! - [`hash_password`]: generates a random salt via [`OsRng`], hashes the plaintext
//!   with Argon2id at the requested [`WorkFactor`], and returns a [`PasswordHash`]
//!   holding the PHC string (e.g. `$argon2id$v=19$m=19456,t=2,p=1$...`). This is the
//!   only way new hashes are produced, and it is what lands in `users.password_hash`.
//!
//! - [`verify_password`]: checks a plaintext against a stored hash. The cost
//!   parameters are read back from the PHC string, so hashes produced with any
//!   work factor verify. Returns `Ok(false)` on mismatch.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use store::PasswordHash;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("invalid work factor: {0}")]
    WorkFactor(String),

    #[error("failed to hash password: {0}")]
    Hash(String),

    #[error("invalid password hash: {0}")]
    InvalidHash(String),
}

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkFactor {
    /// Memory cost in KiB.
    pub memory_kib: u32,
    /// Number of passes.
    pub iterations: u32,
    /// Degree of parallelism (lanes).
    pub parallelism: u32,
}

impl Default for WorkFactor {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl WorkFactor {
    fn hasher(&self) -> Result<Argon2<'static>, PasswordError> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordError::WorkFactor(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hash a password using Argon2id.
pub fn hash_password(password: &str, work: WorkFactor) -> Result<PasswordHash, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = work
        .hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;
    PasswordHash::from_phc(hash.to_string()).map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Verify a password against a stored hash.
pub fn verify_password(password: &str, hash: &PasswordHash) -> Result<bool, PasswordError> {
    let parsed =
        PhcHash::new(hash.as_str()).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
pub(crate) const TEST_WORK_FACTOR: WorkFactor = WorkFactor {
    memory_kib: 64,
    iterations: 1,
    parallelism: 1,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("correct horse", TEST_WORK_FACTOR).unwrap();
        assert!(hash.as_str().starts_with("$argon2id$"));
        assert_ne!(hash.as_str(), "correct horse");
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let a = hash_password("same", TEST_WORK_FACTOR).unwrap();
        let b = hash_password("same", TEST_WORK_FACTOR).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_work_factor_is_encoded() {
        let hash = hash_password("pw", TEST_WORK_FACTOR).unwrap();
        assert!(hash.as_str().contains("m=64,t=1,p=1"));
    }

    #[test]
    fn test_invalid_work_factor() {
        let work = WorkFactor {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        };
        assert!(matches!(
            hash_password("pw", work),
            Err(PasswordError::WorkFactor(_))
        ));
    }
}
