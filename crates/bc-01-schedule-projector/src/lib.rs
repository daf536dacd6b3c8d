//! # BC-01 Schedule Projector
//!
//! Derives billing-cycle milestone dates from a cycle start date and
//! projects them across consecutive monthly cycles.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure calendar logic, no I/O
//!   - `OffsetTable`: Ordered milestone day offsets (`STANDARD_OFFSETS`)
//!   - `advance_by_months`: Month stepping with end-of-month clamping
//!   - `compute_cycle_with` / `project_with`: Cycle and projection core
//!   - `ScheduleConfig`: Configuration with validation
//!
//! - **Service Layer** (`service.rs`):
//!   - `ScheduleProjector`: Table + config bound to the domain functions
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: one cycle yields exactly one record per table row
//! - **INVARIANT-2**: projection output is sorted by `days_from_origin`,
//!   ties in emission order (cycle index, then table row)
//! - **INVARIANT-3**: cycle `i` is anchored at origin + `i` calendar months,
//!   day clamped to the target month's length
//!
//! ## Usage Example
//!
//! ```ignore
//! use bc_01_schedule_projector::{parse_origin_date, project};
//!
//! let origin = parse_origin_date("06/22/2025")?;
//! let records = project(origin, 5)?;
//! assert_eq!(records.len(), 45);
//! assert_eq!(records[0].days_from_origin, 0);
//! ```

pub mod domain;
pub mod error;
pub mod service;

use chrono::NaiveDate;

// Re-exports for convenience
pub use domain::{
    advance_by_months, format_date, parse_origin_date, CycleEntry, CycleSummary, Milestone,
    MilestoneOffset, MilestoneRecord, OffsetTable, ScheduleConfig, ScheduleConfigBuilder,
    DATE_FORMAT, STANDARD_OFFSETS,
};
pub use error::ScheduleError;
pub use service::ScheduleProjector;

/// Milestones of one cycle under the standard table, in table order.
pub fn compute_cycle(anchor: NaiveDate) -> Result<Vec<(Milestone, NaiveDate)>, ScheduleError> {
    ScheduleProjector::standard().compute_cycle(anchor)
}

/// Project `cycle_count` cycles under the standard table.
pub fn project(origin: NaiveDate, cycle_count: u32) -> Result<Vec<MilestoneRecord>, ScheduleError> {
    ScheduleProjector::standard().project(origin, cycle_count)
}
