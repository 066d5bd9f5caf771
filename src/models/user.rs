use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::{self, Authenticatable};
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Rowid assigned by the database; 0 until persisted.
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a user ready for insertion, hashing the supplied password.
    pub fn new(full_name: String, email: String, password: &str) -> Result<Self> {
        let now = Utc::now();
        Ok(Self {
            id: 0,
            full_name,
            email,
            password_hash: auth::hash_password(password)?,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the stored hash with a salted one-way hash of `plaintext`.
    /// The plaintext itself is never stored.
    pub fn set_password(&mut self, plaintext: &str) -> Result<()> {
        self.password_hash = auth::hash_password(plaintext)?;
        Ok(())
    }

    /// True iff `plaintext` matches the stored hash. Mismatches and
    /// malformed hashes both return false.
    pub fn check_password(&self, plaintext: &str) -> bool {
        auth::verify_password(plaintext, &self.password_hash)
    }
}

impl Authenticatable for User {
    fn verify_credential(&self, credential: &str) -> bool {
        self.check_password(credential)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(
            "Ada Lovelace".to_string(),
            "ada@example.com".to_string(),
            "correct horse battery staple",
        )
        .expect("hashing failed")
    }

    #[test]
    fn test_check_password_after_set_password() {
        let user = test_user();
        assert!(user.check_password("correct horse battery staple"));
        assert!(!user.check_password("correct horse battery stapl"));
        assert!(!user.check_password(""));
    }

    #[test]
    fn test_set_password_replaces_hash() {
        let mut user = test_user();
        let old_hash = user.password_hash.clone();
        user.set_password("a different secret").unwrap();
        assert_ne!(user.password_hash, old_hash);
        assert!(user.check_password("a different secret"));
        assert!(!user.check_password("correct horse battery staple"));
    }

    #[test]
    fn test_plaintext_never_stored() {
        let user = test_user();
        assert!(!user.password_hash.contains("correct horse battery staple"));
    }

    #[test]
    fn test_check_password_fails_closed_on_malformed_hash() {
        let mut user = test_user();
        user.password_hash = "not-a-phc-string".to_string();
        assert!(!user.check_password("correct horse battery staple"));
    }

    #[test]
    fn test_verify_credential_matches_check_password() {
        let user = test_user();
        assert!(user.verify_credential("correct horse battery staple"));
        assert!(!user.verify_credential("nope"));
    }
}
