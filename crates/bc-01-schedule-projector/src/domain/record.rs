//! Projection output types

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::calendar::{format_date, mdy_date};
use super::milestone::Milestone;

/// One projected milestone.
///
/// Field order is the serialized order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneRecord {
    /// Zero-based cycle the milestone belongs to
    pub cycle_index: u32,
    /// Which milestone this is
    pub milestone: Milestone,
    /// Calendar date of the milestone
    #[serde(with = "mdy_date")]
    pub date: NaiveDate,
    /// Days between the projection origin and `date`
    pub days_from_origin: i64,
}

/// One `(name, date)` pair of a single cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleEntry {
    pub milestone: Milestone,
    #[serde(with = "mdy_date")]
    pub date: NaiveDate,
}

impl From<(Milestone, NaiveDate)> for CycleEntry {
    fn from((milestone, date): (Milestone, NaiveDate)) -> Self {
        Self { milestone, date }
    }
}

/// Single-cycle calculator view: calculator label to date, in table order.
///
/// Serializes as an ordered map of label to `MM/DD/YYYY`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleSummary {
    entries: Vec<CycleEntry>,
}

impl CycleSummary {
    pub(crate) fn new(entries: Vec<CycleEntry>) -> Self {
        Self { entries }
    }

    /// Look up a date by calculator label or table name.
    pub fn get(&self, key: &str) -> Option<NaiveDate> {
        self.entries
            .iter()
            .find(|e| e.milestone.summary_key() == key || e.milestone.as_str() == key)
            .map(|e| e.date)
    }

    /// `(label, MM/DD/YYYY)` pairs in table order.
    pub fn labelled(&self) -> Vec<(&'static str, String)> {
        self.entries
            .iter()
            .map(|e| (e.milestone.summary_key(), format_date(e.date)))
            .collect()
    }

    /// Underlying entries.
    pub fn entries(&self) -> &[CycleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CycleSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(entry.milestone.summary_key(), &format_date(entry.date))?;
        }
        map.end()
    }
}
