//! Envelope Codec Service
//!
//! Composes key derivation, AEAD and the payload adapter into
//! `seal` / `open`.
//!
//! State machine per call: key derived → sealed or opened → done. Nothing
//! survives between calls.

use serde::{de::DeserializeOwned, Serialize};
use shared_crypto::{decrypt, encrypt, pbkdf2_sha256, Salt, SecretKey};

use crate::domain::{Envelope, EnvelopeConfig, SchedulePayload};
use crate::error::EnvelopeError;

/// Envelope codec bound to a key-derivation configuration.
#[derive(Clone, Debug, Default)]
pub struct EnvelopeCodec {
    config: EnvelopeConfig,
}

impl EnvelopeCodec {
    /// Create a codec with a validated configuration.
    pub fn new(config: EnvelopeConfig) -> Result<Self, EnvelopeError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EnvelopeConfig {
        &self.config
    }

    /// Derive the 256-bit envelope key from a password and salt.
    pub fn derive_key(&self, password: &str, salt: &Salt) -> Result<SecretKey, EnvelopeError> {
        Ok(pbkdf2_sha256(password, salt, self.config.kdf_iterations)?)
    }

    /// Seal raw bytes under a password.
    ///
    /// Salt and nonce are fresh CSPRNG draws on every call.
    pub fn seal(&self, payload: &[u8], password: &str) -> Result<Envelope, EnvelopeError> {
        let salt = Salt::generate()?;
        let key = self.derive_key(password, &salt)?;
        let (ciphertext, nonce) = encrypt(&key, payload)?;

        tracing::debug!(
            kdf_iterations = self.config.kdf_iterations,
            payload_len = payload.len(),
            ciphertext_len = ciphertext.len(),
            "Sealed envelope"
        );

        Envelope::from_parts(salt, nonce, ciphertext)
    }

    /// Open an envelope, returning the original bytes.
    ///
    /// A wrong password and a modified envelope both yield
    /// `EnvelopeError::AuthenticationFailed`.
    pub fn open(&self, envelope: &Envelope, password: &str) -> Result<Vec<u8>, EnvelopeError> {
        let key = self.derive_key(password, envelope.salt())?;

        match decrypt(&key, envelope.ciphertext(), envelope.nonce()) {
            Ok(plaintext) => {
                tracing::debug!(plaintext_len = plaintext.len(), "Opened envelope");
                Ok(plaintext)
            }
            Err(e) => {
                tracing::warn!("Envelope failed authentication");
                Err(e.into())
            }
        }
    }

    /// Seal any serializable value as JSON.
    pub fn seal_json<T: Serialize>(&self, value: &T, password: &str) -> Result<Envelope, EnvelopeError> {
        let bytes =
            serde_json::to_vec(value).map_err(|e| EnvelopeError::Serialization(e.to_string()))?;
        self.seal(&bytes, password)
    }

    /// Open an envelope sealed with [`EnvelopeCodec::seal_json`].
    pub fn open_json<T: DeserializeOwned>(
        &self,
        envelope: &Envelope,
        password: &str,
    ) -> Result<T, EnvelopeError> {
        let bytes = self.open(envelope, password)?;
        serde_json::from_slice(&bytes).map_err(|e| EnvelopeError::Serialization(e.to_string()))
    }

    /// Seal a schedule payload in its canonical encoding.
    pub fn seal_schedule(
        &self,
        payload: &SchedulePayload,
        password: &str,
    ) -> Result<Envelope, EnvelopeError> {
        self.seal(&payload.to_bytes()?, password)
    }

    /// Open an envelope sealed with [`EnvelopeCodec::seal_schedule`].
    pub fn open_schedule(
        &self,
        envelope: &Envelope,
        password: &str,
    ) -> Result<SchedulePayload, EnvelopeError> {
        SchedulePayload::from_bytes(&self.open(envelope, password)?)
    }
}
