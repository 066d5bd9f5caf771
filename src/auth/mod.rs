use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand_core::OsRng;

use crate::{AppError, Result};

/// Capability for entities that can be logged in with a credential.
pub trait Authenticatable {
    fn verify_credential(&self, credential: &str) -> bool;
}

/// Hash a plaintext password with Argon2id and a fresh random salt.
/// The plaintext never leaves this function.
pub fn hash_password(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| AppError::InternalError(format!("failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-format hash.
///
/// Fails closed: a malformed stored hash or a mismatch both yield false,
/// never an error. Comparison is constant-time inside argon2.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    let parsed = match PasswordHash::new(stored_hash) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("s3cret").unwrap();
        assert!(verify_password("s3cret", &hash));
        assert!(!verify_password("s3cret!", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = hash_password("same input").unwrap();
        let b = hash_password("same input").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_fails_closed_on_garbage_hash() {
        assert!(!verify_password("anything", ""));
        assert!(!verify_password("anything", "plaintext-left-over"));
        assert!(!verify_password("anything", "$argon2id$corrupt"));
    }
}
