use argon2::{password_hash::{PasswordHasher, SaltString}, Argon2};
use rand::rngs::OsRng;

use crate::errors::ServiceError;

/// Hash with argon2 defaults and a fresh random salt, returning the PHC string.
pub fn hash_password(plain: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServiceError::Hash(e.to_string()))
}

/// `false` for a wrong password and for a malformed hash.
#[cfg(test)]
pub(crate) fn verify_password(plain: &str, hash: &str) -> bool {
    use argon2::{password_hash::PasswordVerifier, PasswordHash};
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok(),
        Err(_) => false,
    }
}
