//! Error types for the Schedule Projector

use thiserror::Error;

/// Errors that can occur while projecting a milestone schedule.
///
/// Every variant is an invalid-input condition: the same input always
/// fails the same way, so nothing here is worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Invalid date '{input}': {reason} (expected MM/DD/YYYY)")]
    InvalidDate { input: String, reason: String },

    #[error("Date out of representable range: {0}")]
    DateOutOfRange(String),

    #[error("Invalid cycle count: {count} (must be between 1 and {max})")]
    InvalidCycleCount { count: u32, max: u32 },

    #[error("Invalid offset table: {0}")]
    InvalidTable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown milestone name: {0}")]
    UnknownMilestone(String),
}
