use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Argon2id hash in PHC string form, with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// `Ok(false)` for a wrong password; `Err` only if `hash` is not a PHC string.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_password_verifies() {
        let hash = hash_password("exasecure-demo").unwrap();
        assert!(verify_password("exasecure-demo", &hash).unwrap());
    }

    #[test]
    fn wrong_password_does_not() {
        let hash = hash_password("exasecure-demo").unwrap();
        assert!(!verify_password("exasecure-dem0", &hash).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2"));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify_password("anything", "plaintext-not-a-hash").is_err());
    }
}
