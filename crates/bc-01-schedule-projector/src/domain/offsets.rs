//! Milestone offset table
//!
//! The day offsets, from a cycle anchor, at which each milestone falls.
//! The standard table is a fixed contract; custom tables exist so the
//! projection can be exercised independently of it.

use serde::{Deserialize, Serialize};

use super::milestone::Milestone;
use crate::error::ScheduleError;

/// Standard milestone offsets, in days from the cycle anchor.
pub const STANDARD_OFFSETS: [(Milestone, i64); 9] = [
    (Milestone::BillingCycleStart, 0),
    (Milestone::BillInApp, 4),
    (Milestone::BillPdfReady, 10),
    (Milestone::FundsAvailPreAutopay, 16),
    (Milestone::AutopayDraft, 18),
    (Milestone::BillIsDue, 20),
    (Milestone::BillingCycleClose, 30),
    (Milestone::ServiceSuspensionRisk, 37),
    (Milestone::NumberLossRisk, 90),
];

/// One row of an offset table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneOffset {
    pub milestone: Milestone,
    pub offset_days: i64,
}

impl From<(Milestone, i64)> for MilestoneOffset {
    fn from((milestone, offset_days): (Milestone, i64)) -> Self {
        Self {
            milestone,
            offset_days,
        }
    }
}

/// Ordered milestone offset table.
///
/// Row order is emission order: `compute_cycle` yields milestones in this
/// order, and projection ties are broken by it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MilestoneOffset>", into = "Vec<MilestoneOffset>")]
pub struct OffsetTable {
    entries: Vec<MilestoneOffset>,
}

impl OffsetTable {
    /// The standard nine-milestone table.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_OFFSETS.iter().copied().map(Into::into).collect(),
        }
    }

    /// Build a custom table.
    ///
    /// Rejects an empty table and any milestone listed twice. Offsets may be
    /// negative and need not be monotonic.
    pub fn new(entries: Vec<MilestoneOffset>) -> Result<Self, ScheduleError> {
        if entries.is_empty() {
            return Err(ScheduleError::InvalidTable(
                "table must contain at least one milestone".to_string(),
            ));
        }

        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.milestone == entry.milestone) {
                return Err(ScheduleError::InvalidTable(format!(
                    "milestone {} listed more than once",
                    entry.milestone
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Rows in emission order.
    pub fn entries(&self) -> &[MilestoneOffset] {
        &self.entries
    }

    /// Number of milestones per cycle.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offset for a milestone, if the table lists it.
    pub fn offset_of(&self, milestone: Milestone) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| e.milestone == milestone)
            .map(|e| e.offset_days)
    }
}

impl Default for OffsetTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<MilestoneOffset>> for OffsetTable {
    type Error = ScheduleError;

    fn try_from(entries: Vec<MilestoneOffset>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<OffsetTable> for Vec<MilestoneOffset> {
    fn from(table: OffsetTable) -> Self {
        table.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_matches_contract() {
        let table = OffsetTable::standard();
        assert_eq!(table.len(), 9);
        assert_eq!(table.offset_of(Milestone::BillingCycleStart), Some(0));
        assert_eq!(table.offset_of(Milestone::BillIsDue), Some(20));
        assert_eq!(table.offset_of(Milestone::NumberLossRisk), Some(90));
    }

    #[test]
    fn test_standard_table_is_monotonic_in_declaration_order() {
        let table = OffsetTable::standard();
        let milestones: Vec<_> = table.entries().iter().map(|e| e.milestone).collect();
        assert_eq!(milestones, Milestone::ALL.to_vec());
        assert!(table
            .entries()
            .windows(2)
            .all(|w| w[0].offset_days < w[1].offset_days));
    }

    #[test]
    fn test_rejects_empty_table() {
        let result = OffsetTable::new(vec![]);
        assert!(matches!(result, Err(ScheduleError::InvalidTable(_))));
    }

    #[test]
    fn test_rejects_duplicate_milestone() {
        let result = OffsetTable::new(vec![
            (Milestone::BillIsDue, 20).into(),
            (Milestone::BillIsDue, 21).into(),
        ]);
        assert!(matches!(result, Err(ScheduleError::InvalidTable(_))));
    }

    #[test]
    fn test_custom_table_keeps_order() {
        let table = OffsetTable::new(vec![
            (Milestone::BillIsDue, 20).into(),
            (Milestone::BillingCycleStart, -3).into(),
        ])
        .unwrap();
        assert_eq!(table.entries()[0].milestone, Milestone::BillIsDue);
        assert_eq!(table.offset_of(Milestone::BillingCycleStart), Some(-3));
        assert_eq!(table.offset_of(Milestone::NumberLossRisk), None);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[{"milestone":"bill_is_due","offset_days":1},{"milestone":"bill_is_due","offset_days":2}]"#;
        assert!(serde_json::from_str::<OffsetTable>(json).is_err());

        let json = r#"[{"milestone":"bill_is_due","offset_days":1}]"#;
        let table: OffsetTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.len(), 1);
    }
}
