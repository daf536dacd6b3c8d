//! # BC-02 Envelope Codec
//!
//! Seals structured schedule data under a password into a tamper-evident
//! envelope, and opens it again.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`):
//!   - `Envelope` / `WireEnvelope`: salt, nonce, ciphertext and their base64 record
//!   - `SchedulePayload`: canonical plaintext encoding of projector output
//!   - `EnvelopeConfig`: key-derivation cost with validation
//!
//! - **Service Layer** (`service.rs`):
//!   - `EnvelopeCodec`: `derive_key`, `seal`, `open` and typed helpers
//!
//! ## Security
//!
//! - PBKDF2-HMAC-SHA256, at least 100 000 iterations, 16-byte random salt
//! - AES-256-GCM, 12-byte random nonce, 16-byte tag, no associated data
//! - Wrong password and tampering are reported as the same error
//! - Derived keys are zeroized on drop and never logged
//!
//! ## Usage Example
//!
//! ```ignore
//! use bc_02_envelope_codec::{Envelope, EnvelopeCodec, SchedulePayload};
//!
//! let codec = EnvelopeCodec::default();
//! let envelope = codec.seal_schedule(&SchedulePayload::from(records), "pw")?;
//! let json = envelope.to_json()?;
//!
//! let reopened = Envelope::from_json(&json)?;
//! let payload = codec.open_schedule(&reopened, "pw")?;
//! ```

pub mod domain;
pub mod error;
pub mod service;

use shared_crypto::SecretKey;

// Re-exports for convenience
pub use domain::{
    Envelope, EnvelopeConfig, EnvelopeConfigBuilder, SchedulePayload, WireEnvelope,
    DEFAULT_KDF_ITERATIONS, MIN_KDF_ITERATIONS,
};
pub use error::{EnvelopeError, ErrorKind};
pub use service::EnvelopeCodec;
pub use shared_crypto::{Nonce, Salt};

/// 32-byte key derived from a password; zeroized on drop.
pub type DerivedKey = SecretKey;

/// Derive a key with the default iteration count.
pub fn derive_key(password: &str, salt: &Salt) -> Result<DerivedKey, EnvelopeError> {
    EnvelopeCodec::default().derive_key(password, salt)
}

/// Seal bytes with the default configuration.
pub fn seal(payload: &[u8], password: &str) -> Result<Envelope, EnvelopeError> {
    EnvelopeCodec::default().seal(payload, password)
}

/// Open an envelope with the default configuration.
pub fn open(envelope: &Envelope, password: &str) -> Result<Vec<u8>, EnvelopeError> {
    EnvelopeCodec::default().open(envelope, password)
}
