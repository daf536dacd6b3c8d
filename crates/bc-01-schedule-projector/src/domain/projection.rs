//! Cycle computation and multi-cycle projection
//!
//! INVARIANTS:
//! - `compute_cycle` emits exactly one date per table row, in table order
//! - `project` output is sorted non-decreasing by `days_from_origin`
//! - Equal `days_from_origin` keeps emission order (cycle, then table row)

use chrono::NaiveDate;

use super::calendar::{advance_by_months, shift_days};
use super::milestone::Milestone;
use super::offsets::OffsetTable;
use super::record::MilestoneRecord;
use crate::error::ScheduleError;

/// Apply every table offset to one cycle anchor.
pub fn compute_cycle_with(
    table: &OffsetTable,
    anchor: NaiveDate,
) -> Result<Vec<(Milestone, NaiveDate)>, ScheduleError> {
    table
        .entries()
        .iter()
        .map(|entry| Ok((entry.milestone, shift_days(anchor, entry.offset_days)?)))
        .collect()
}

/// Project `cycle_count` monthly cycles from `origin` and order the result.
///
/// Cycle `i` is anchored at `origin + i months`. `max_cycles` bounds the
/// amount of work a single call may request.
pub fn project_with(
    table: &OffsetTable,
    origin: NaiveDate,
    cycle_count: u32,
    max_cycles: u32,
) -> Result<Vec<MilestoneRecord>, ScheduleError> {
    if cycle_count == 0 || cycle_count > max_cycles {
        return Err(ScheduleError::InvalidCycleCount {
            count: cycle_count,
            max: max_cycles,
        });
    }

    let mut records = Vec::with_capacity(cycle_count as usize * table.len());

    for cycle_index in 0..cycle_count {
        let months = i32::try_from(cycle_index).map_err(|_| ScheduleError::InvalidCycleCount {
            count: cycle_count,
            max: max_cycles,
        })?;
        let anchor = advance_by_months(origin, months)?;

        for (milestone, date) in compute_cycle_with(table, anchor)? {
            records.push(MilestoneRecord {
                cycle_index,
                milestone,
                date,
                days_from_origin: date.signed_duration_since(origin).num_days(),
            });
        }
    }

    // sort_by_key is stable: ties keep emission order
    records.sort_by_key(|r| r.days_from_origin);

    tracing::debug!(
        origin = %origin,
        cycle_count,
        record_count = records.len(),
        "Projected milestone schedule"
    );

    Ok(records)
}
