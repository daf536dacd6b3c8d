//! Envelope codec configuration
//!
//! The wire record carries no KDF parameters, so both the sealing and the
//! opening side must agree on `kdf_iterations`.

use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;

/// Lowest PBKDF2 iteration count accepted.
pub const MIN_KDF_ITERATIONS: u32 = 100_000;

/// Default PBKDF2 iteration count.
pub const DEFAULT_KDF_ITERATIONS: u32 = 100_000;

/// Envelope codec configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeConfig {
    /// PBKDF2-HMAC-SHA256 iteration count
    pub kdf_iterations: u32,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            kdf_iterations: DEFAULT_KDF_ITERATIONS,
        }
    }
}

impl EnvelopeConfig {
    /// Validate the key-derivation cost
    pub fn validate(&self) -> Result<(), EnvelopeError> {
        if self.kdf_iterations < MIN_KDF_ITERATIONS {
            return Err(EnvelopeError::InvalidConfig(format!(
                "kdf_iterations must be at least {}, got {}",
                MIN_KDF_ITERATIONS, self.kdf_iterations
            )));
        }
        Ok(())
    }

    /// Builder-style method to set the iteration count
    pub fn with_kdf_iterations(mut self, iterations: u32) -> Self {
        self.kdf_iterations = iterations;
        self
    }
}

/// Builder for EnvelopeConfig with validation
#[derive(Default)]
pub struct EnvelopeConfigBuilder {
    kdf_iterations: Option<u32>,
}

impl EnvelopeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kdf_iterations(mut self, iterations: u32) -> Self {
        self.kdf_iterations = Some(iterations);
        self
    }

    pub fn build(self) -> Result<EnvelopeConfig, EnvelopeError> {
        let config = EnvelopeConfig {
            kdf_iterations: self.kdf_iterations.unwrap_or(DEFAULT_KDF_ITERATIONS),
        };
        config.validate()?;
        Ok(config)
    }
}
