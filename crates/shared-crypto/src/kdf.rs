//! # Password-Based Key Derivation
//!
//! PBKDF2-HMAC-SHA256 via the RustCrypto `pbkdf2` crate.
//!
//! ## Security Properties
//!
//! - **Salt**: 128-bit, drawn from the OS CSPRNG per derivation
//! - **Output**: 256-bit key, zeroized on drop
//! - **Iterations**: chosen by the caller; this module enforces only `> 0`

use crate::random::random_array;
use crate::{CryptoError, SecretKey};
use sha2::Sha256;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// Random salt mixed into key derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    /// Create from bytes.
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, checking its length.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidSaltLength` unless the slice is exactly
    /// 16 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let arr: [u8; SALT_LEN] =
            bytes
                .try_into()
                .map_err(|_| CryptoError::InvalidSaltLength {
                    expected: SALT_LEN,
                    actual: bytes.len(),
                })?;
        Ok(Self(arr))
    }

    /// Generate a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::RandomSourceUnavailable` if the OS random source fails.
    pub fn generate() -> Result<Self, CryptoError> {
        Ok(Self(random_array()?))
    }

    /// Get inner bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}

/// Derive a 256-bit key from a password with PBKDF2-HMAC-SHA256.
///
/// The password is taken as UTF-8 bytes. Output is deterministic for the
/// same password, salt and iteration count.
///
/// # Errors
///
/// Returns `CryptoError::KeyDerivationFailed` if `iterations` is zero.
pub fn pbkdf2_sha256(
    password: &str,
    salt: &Salt,
    iterations: u32,
) -> Result<SecretKey, CryptoError> {
    if iterations == 0 {
        return Err(CryptoError::KeyDerivationFailed(
            "iteration count must be positive".to_string(),
        ));
    }

    let mut bytes = [0u8; 32];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut bytes);
    let key = SecretKey::from_bytes(bytes);
    zeroize::Zeroize::zeroize(&mut bytes);
    Ok(key)
}
