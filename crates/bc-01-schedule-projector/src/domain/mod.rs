//! Domain Layer - Pure calendar logic
//!
//! This layer contains:
//! - Milestone names and the offset table
//! - Calendar month/day arithmetic
//! - Cycle computation and multi-cycle projection
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod calendar;
pub mod config;
pub mod milestone;
pub mod offsets;
pub mod projection;
pub mod record;

pub use calendar::{
    advance_by_months, format_date, mdy_date, parse_origin_date, shift_days, DATE_FORMAT,
};
pub use config::{ScheduleConfig, ScheduleConfigBuilder, MAX_CYCLE_COUNT};
pub use milestone::Milestone;
pub use offsets::{MilestoneOffset, OffsetTable, STANDARD_OFFSETS};
pub use projection::{compute_cycle_with, project_with};
pub use record::{CycleEntry, CycleSummary, MilestoneRecord};
