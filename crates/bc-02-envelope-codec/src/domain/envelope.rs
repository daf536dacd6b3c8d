//! Envelope and its wire record
//!
//! The wire record is a JSON object with exactly three fields, `salt`,
//! `nonce` and `ciphertext`, each standard padded base64 of the raw bytes.
//!
//! INVARIANTS:
//! - salt decodes to 16 bytes, nonce to 12 bytes
//! - ciphertext is at least one 16-byte tag long
//! - A malformed record is rejected before any key derivation

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use shared_crypto::{Nonce, Salt, TAG_LEN};

use crate::error::EnvelopeError;

/// Sealed payload: everything needed, besides the password, to open it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    salt: Salt,
    nonce: Nonce,
    ciphertext: Vec<u8>,
}

/// Wire form of an [`Envelope`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireEnvelope {
    pub salt: String,
    pub nonce: String,
    pub ciphertext: String,
}

impl Envelope {
    /// Assemble an envelope, checking the ciphertext can hold a tag.
    pub fn from_parts(salt: Salt, nonce: Nonce, ciphertext: Vec<u8>) -> Result<Self, EnvelopeError> {
        if ciphertext.len() < TAG_LEN {
            return Err(EnvelopeError::MalformedEnvelope {
                field: "ciphertext",
                reason: format!(
                    "expected at least {} bytes, got {}",
                    TAG_LEN,
                    ciphertext.len()
                ),
            });
        }
        Ok(Self {
            salt,
            nonce,
            ciphertext,
        })
    }

    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    pub fn nonce(&self) -> &Nonce {
        &self.nonce
    }

    /// Ciphertext including the trailing authentication tag.
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Encode to the base64 wire record.
    pub fn to_wire(&self) -> WireEnvelope {
        WireEnvelope {
            salt: STANDARD.encode(self.salt.as_bytes()),
            nonce: STANDARD.encode(self.nonce.as_bytes()),
            ciphertext: STANDARD.encode(&self.ciphertext),
        }
    }

    /// Decode and validate a wire record.
    pub fn from_wire(wire: &WireEnvelope) -> Result<Self, EnvelopeError> {
        let salt = Salt::from_slice(&decode_field("salt", &wire.salt)?)?;
        let nonce = Nonce::from_slice(&decode_field("nonce", &wire.nonce)?)?;
        let ciphertext = decode_field("ciphertext", &wire.ciphertext)?;
        Self::from_parts(salt, nonce, ciphertext)
    }

    /// Pretty JSON wire record.
    pub fn to_json(&self) -> Result<String, EnvelopeError> {
        serde_json::to_string_pretty(&self.to_wire())
            .map_err(|e| EnvelopeError::Serialization(e.to_string()))
    }

    /// Parse a JSON wire record.
    pub fn from_json(text: &str) -> Result<Self, EnvelopeError> {
        let wire: WireEnvelope =
            serde_json::from_str(text).map_err(|e| EnvelopeError::MalformedEnvelope {
                field: "record",
                reason: e.to_string(),
            })?;
        Self::from_wire(&wire)
    }
}

impl TryFrom<&WireEnvelope> for Envelope {
    type Error = EnvelopeError;

    fn try_from(wire: &WireEnvelope) -> Result<Self, Self::Error> {
        Envelope::from_wire(wire)
    }
}

impl From<&Envelope> for WireEnvelope {
    fn from(envelope: &Envelope) -> Self {
        envelope.to_wire()
    }
}

fn decode_field(field: &'static str, value: &str) -> Result<Vec<u8>, EnvelopeError> {
    STANDARD
        .decode(value)
        .map_err(|e| EnvelopeError::MalformedEnvelope {
            field,
            reason: e.to_string(),
        })
}
