//! Password hashing and verification.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::OnceLock,
};

use argon2::{
    Argon2,
    password_hash::{
        Error as HashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use rand::{Rng, distributions::Alphanumeric};
use thiserror::Error;
use tracing::warn;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::validation::{FieldErrors, MIN_PASSWORD_LENGTH};

const GENERATED_PASSWORD_LENGTH: usize = 24;

/// Plaintext password supplied by a caller.
///
/// The buffer is wiped on drop and never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Random alphanumeric password for operator-provisioned accounts.
    #[must_use]
    pub fn generate() -> Self {
        Self(
            rand::thread_rng()
                .sample_iter(&Alphanumeric)
                .take(GENERATED_PASSWORD_LENGTH)
                .map(char::from)
                .collect(),
        )
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Reject passwords that are too short for the given field.
    ///
    /// # Errors
    ///
    /// Returns a field error when the password is shorter than [`MIN_PASSWORD_LENGTH`].
    pub fn check_length(&self, field: &str) -> Result<(), FieldErrors> {
        if self.0.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(FieldErrors::single(field, "too_short"));
        }

        Ok(())
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Password(<redacted>)")
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Stored argon2 PHC string.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for PasswordDigest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("PasswordDigest(<redacted>)")
    }
}

impl From<String> for PasswordDigest {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash(#[source] HashError),
}

/// Hash a password with argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns an error if hashing fails.
pub fn hash_password(password: &Password) -> Result<PasswordDigest, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.expose().as_bytes(), &salt)
        .map(|hash| PasswordDigest(hash.to_string()))
        .map_err(PasswordError::Hash)
}

/// Verify a password against a stored digest in constant time.
///
/// A digest that cannot be parsed never verifies.
#[must_use]
pub fn verify_password(password: &Password, digest: &PasswordDigest) -> bool {
    let parsed = match PasswordHash::new(digest.as_str()) {
        Ok(parsed) => parsed,
        Err(source) => {
            warn!("stored password digest could not be parsed: {source}");

            return false;
        }
    };

    Argon2::default()
        .verify_password(password.expose().as_bytes(), &parsed)
        .is_ok()
}

/// Spend the same work as a real verification when no account matched, so
/// response timing does not reveal whether an identifier exists.
pub fn verify_dummy(password: &Password) {
    static DUMMY: OnceLock<Option<PasswordDigest>> = OnceLock::new();

    let dummy = DUMMY.get_or_init(|| hash_password(&Password::generate()).ok());

    if let Some(digest) = dummy {
        let _matched = verify_password(password, digest);
    }
}
