use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::sync::OnceLock;

pub struct PasswordManager;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        INSTANCE.get_or_init(|| {
            let params = match Params::new(
                64 * 1024, // 64MB Memory (m)
                3,         // 3 Iterations (t)
                4,         // 4 Parallelism lanes (p)
                None,      // Default hash length (32 bytes)
            ) {
                Ok(params) => params,
                Err(_) => Params::default(),
            };

            Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
        })
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        let result = Self::engine().verify_password(password.as_bytes(), &parsed_hash);

        match result {
            Ok(_) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Hash with the live parameters, verified against when the account does
    /// not exist so unknown emails cost the same as wrong passwords.
    pub fn dummy_hash() -> &'static str {
        DUMMY_HASH.get_or_init(|| {
            Self::hash_password("dummy_password_for_timing").unwrap_or_else(|e| {
                log::error!("Failed to generate dummy hash: {}", e);
                "$argon2id$v=19$m=65536,t=3,p=4$dW5rbm93bl9zYWx0X2R1bW15$E2LvWPx3FxvDaJxEMpLLBfWbLkPXfYHrF8z9CGCX3eI".to_string()
            })
        })
    }
}

/// Minimum password rules applied on sign up, reset and change.
pub struct PasswordPolicy;

impl PasswordPolicy {
    pub const MIN_LENGTH: usize = 8;

    pub fn validate(password: &str) -> Result<(), &'static str> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err("validation.password_short");
        }

        let has_letter = password.chars().any(char::is_alphabetic);
        let has_digit = password.chars().any(|c| c.is_ascii_digit());

        if !(has_letter && has_digit) {
            return Err("validation.password_mix");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = PasswordManager::hash_password("s3cret-pass").expect("hashing should work");

        assert!(hash.starts_with("$argon2id$"));
        assert!(PasswordManager::verify_password("s3cret-pass", &hash).unwrap());
        assert!(!PasswordManager::verify_password("wrong-pass1", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(PasswordManager::verify_password("anything", "not-a-hash").is_err());
    }

    #[test]
    fn test_password_policy() {
        assert!(PasswordPolicy::validate("abc12345").is_ok());
        assert_eq!(
            PasswordPolicy::validate("abc123"),
            Err("validation.password_short")
        );
        assert_eq!(
            PasswordPolicy::validate("abcdefghij"),
            Err("validation.password_mix")
        );
        assert_eq!(
            PasswordPolicy::validate("1234567890"),
            Err("validation.password_mix")
        );
    }
}
