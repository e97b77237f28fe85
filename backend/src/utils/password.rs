//! Password hashing and verification.
//!
//! Wraps bcrypt with the fixed work factor used for every stored credential.
//! The plaintext secret only ever exists in memory during these two calls.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{hash, verify};

/// Fixed bcrypt cost. Raising it invalidates nothing (old hashes carry
/// their own cost) but slows every new registration and login.
const HASH_COST: u32 = 10;

/// Hashes a plaintext password for storage.
pub fn hash_password(senha: &str) -> ServiceResult<String> {
    hash(senha, HASH_COST)
        .map_err(|e| ServiceError::internal(format!("Password hashing failed: {e}")))
}

/// Verifies a plaintext password against a stored hash.
pub fn verify_password(senha: &str, senha_hash: &str) -> ServiceResult<bool> {
    verify(senha, senha_hash)
        .map_err(|e| ServiceError::internal(format!("Password verification failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_never_the_plaintext() {
        let hashed = hash_password("s3nha123").unwrap();
        assert_ne!(hashed, "s3nha123");
        assert!(hashed.starts_with("$2"));
    }

    #[test]
    fn verify_accepts_correct_password() {
        let hashed = hash_password("s3nha123").unwrap();
        assert!(verify_password("s3nha123", &hashed).unwrap());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hashed = hash_password("s3nha123").unwrap();
        assert!(!verify_password("wrong", &hashed).unwrap());
    }

    #[test]
    fn same_password_hashes_differently() {
        // Per-record salt: two registrations with the same secret must not
        // produce equal stored values.
        let a = hash_password("s3nha123").unwrap();
        let b = hash_password("s3nha123").unwrap();
        assert_ne!(a, b);
    }
}
