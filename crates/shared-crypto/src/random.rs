//! # Secure Randomness
//!
//! Every salt and nonce in this crate comes from here. The source is the
//! operating system CSPRNG; a general-purpose PRNG is never used.

use crate::CryptoError;
use rand::rngs::OsRng;
use rand::RngCore;

/// Fill a fixed-size array from the OS random source.
///
/// # Errors
///
/// Returns `CryptoError::RandomSourceUnavailable` if the OS refuses to
/// provide entropy. Callers treat this as fatal.
pub fn random_array<const N: usize>() -> Result<[u8; N], CryptoError> {
    let mut bytes = [0u8; N];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::RandomSourceUnavailable(e.to_string()))?;
    Ok(bytes)
}
