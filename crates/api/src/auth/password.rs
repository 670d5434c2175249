//! Argon2id password hashing and verification.
//!
//! Hashes use the PHC string format so algorithm parameters and the
//! per-password random salt are embedded in the stored value.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default(); // Argon2id with default params
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_round_trip() {
        let password = "rotunda-granite-047";
        let hash = hash_password(password).expect("hashing should succeed");

        assert!(hash.starts_with("$argon2id$"), "expected argon2id PHC prefix");
        assert!(verify_password(password, &hash).expect("verification should run"));
    }

    #[test]
    fn wrong_password_does_not_verify() {
        let hash = hash_password("correct-password").expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &hash).expect("verification should run"));
    }

    #[test]
    fn same_password_hashes_differently_each_time() {
        let a = hash_password("repeatable").expect("hashing should succeed");
        let b = hash_password("repeatable").expect("hashing should succeed");
        assert_ne!(a, b, "salts must differ");
    }

    #[test]
    fn garbage_hash_is_an_error_not_a_mismatch() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
