//! Error types for the Envelope Codec

use shared_crypto::CryptoError;
use thiserror::Error;

/// Broad failure category, for callers that only need to tell kinds apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad configuration, malformed envelope record, or unusable payload
    InvalidInput,
    /// Wrong password or altered envelope; the two are indistinguishable
    AuthenticationFailure,
    /// Secure random source or key derivation unavailable
    ResourceExhaustion,
}

/// Errors that can occur while sealing or opening an envelope.
///
/// No variant ever carries key material, the password, or plaintext.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Invalid envelope configuration: {0}")]
    InvalidConfig(String),

    #[error("Malformed envelope field '{field}': {reason}")]
    MalformedEnvelope { field: &'static str, reason: String },

    #[error("Envelope authentication failed")]
    AuthenticationFailed,

    #[error("Resource exhausted: {0}")]
    ResourceExhausted(String),

    #[error("Payload serialization error: {0}")]
    Serialization(String),
}

impl EnvelopeError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvelopeError::InvalidConfig(_)
            | EnvelopeError::MalformedEnvelope { .. }
            | EnvelopeError::Serialization(_) => ErrorKind::InvalidInput,
            EnvelopeError::AuthenticationFailed => ErrorKind::AuthenticationFailure,
            EnvelopeError::ResourceExhausted(_) => ErrorKind::ResourceExhaustion,
        }
    }
}

impl From<CryptoError> for EnvelopeError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::DecryptionFailed => EnvelopeError::AuthenticationFailed,
            CryptoError::RandomSourceUnavailable(reason)
            | CryptoError::KeyDerivationFailed(reason) => EnvelopeError::ResourceExhausted(reason),
            CryptoError::InvalidSaltLength { expected, actual } => {
                EnvelopeError::MalformedEnvelope {
                    field: "salt",
                    reason: format!("expected {} bytes, got {}", expected, actual),
                }
            }
            CryptoError::InvalidNonceLength { expected, actual } => {
                EnvelopeError::MalformedEnvelope {
                    field: "nonce",
                    reason: format!("expected {} bytes, got {}", expected, actual),
                }
            }
            CryptoError::EncryptionFailed(_) => EnvelopeError::InvalidConfig(err.to_string()),
        }
    }
}
