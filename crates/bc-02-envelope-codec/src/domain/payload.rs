//! Schedule payload adapter
//!
//! Fixes the plaintext representation sealed into an envelope: canonical
//! JSON, dates as `MM/DD/YYYY`, fields in declaration order. No
//! cryptographic role.

use bc_01_schedule_projector::{CycleEntry, Milestone, MilestoneRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EnvelopeError;

/// Structured data that can be sealed into an envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "records", rename_all = "snake_case")]
pub enum SchedulePayload {
    /// One cycle's `(milestone, date)` pairs
    Cycle(Vec<CycleEntry>),
    /// A sorted multi-cycle projection
    Projection(Vec<MilestoneRecord>),
}

impl SchedulePayload {
    /// Canonical byte encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EnvelopeError> {
        serde_json::to_vec(self).map_err(|e| EnvelopeError::Serialization(e.to_string()))
    }

    /// Decode the canonical byte encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EnvelopeError> {
        serde_json::from_slice(bytes).map_err(|e| EnvelopeError::Serialization(e.to_string()))
    }

    /// Human-readable pretty JSON.
    pub fn to_pretty_json(&self) -> Result<String, EnvelopeError> {
        serde_json::to_string_pretty(self).map_err(|e| EnvelopeError::Serialization(e.to_string()))
    }

    /// Number of dated entries.
    pub fn len(&self) -> usize {
        match self {
            SchedulePayload::Cycle(entries) => entries.len(),
            SchedulePayload::Projection(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(cycle_index, milestone, date)` rows; a single cycle is cycle 0.
    pub fn rows(&self) -> Vec<(u32, Milestone, NaiveDate)> {
        match self {
            SchedulePayload::Cycle(entries) => {
                entries.iter().map(|e| (0, e.milestone, e.date)).collect()
            }
            SchedulePayload::Projection(records) => records
                .iter()
                .map(|r| (r.cycle_index, r.milestone, r.date))
                .collect(),
        }
    }
}

impl From<Vec<MilestoneRecord>> for SchedulePayload {
    fn from(records: Vec<MilestoneRecord>) -> Self {
        SchedulePayload::Projection(records)
    }
}

impl From<Vec<(Milestone, NaiveDate)>> for SchedulePayload {
    fn from(cycle: Vec<(Milestone, NaiveDate)>) -> Self {
        SchedulePayload::Cycle(cycle.into_iter().map(Into::into).collect())
    }
}
