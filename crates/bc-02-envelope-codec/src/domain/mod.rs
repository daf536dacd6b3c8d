//! Domain Layer - Envelope types, wire format and payload adapter
//!
//! RULES:
//! - No I/O operations
//! - No key material in any type that implements `Debug`

pub mod config;
pub mod envelope;
pub mod payload;

pub use config::{
    EnvelopeConfig, EnvelopeConfigBuilder, DEFAULT_KDF_ITERATIONS, MIN_KDF_ITERATIONS,
};
pub use envelope::{Envelope, WireEnvelope};
pub use payload::SchedulePayload;
