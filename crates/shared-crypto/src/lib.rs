//! # Shared Crypto - Envelope Cryptographic Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `kdf` | PBKDF2-HMAC-SHA256 | Password to 256-bit key |
//! | `symmetric` | AES-256-GCM | Authenticated encryption |
//! | `random` | OS CSPRNG | Salts and nonces |
//!
//! ## Security Properties
//!
//! - **AES-256-GCM**: 96-bit random nonce, 128-bit tag, no associated data
//! - **PBKDF2**: vetted RustCrypto implementation, caller-chosen iterations
//! - **Keys**: zeroized on drop, no `Debug` impl

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod kdf;
pub mod random;
pub mod symmetric;

// Re-exports
pub use errors::CryptoError;
pub use kdf::{pbkdf2_sha256, Salt, SALT_LEN};
pub use symmetric::{
    decrypt, encrypt, encrypt_with_nonce, Nonce, SecretKey, KEY_LEN, NONCE_LEN, TAG_LEN,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
