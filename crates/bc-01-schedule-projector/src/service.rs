//! Schedule Projector Service
//!
//! Binds an offset table and a configuration to the pure domain functions.

use chrono::NaiveDate;

use crate::domain::{
    compute_cycle_with, project_with, CycleSummary, Milestone, MilestoneRecord, OffsetTable,
    ScheduleConfig,
};
use crate::error::ScheduleError;

/// Schedule Projector
///
/// Stateless apart from its table and configuration; every call is
/// independent.
#[derive(Clone, Debug, Default)]
pub struct ScheduleProjector {
    table: OffsetTable,
    config: ScheduleConfig,
}

impl ScheduleProjector {
    /// Projector over the standard offset table with default configuration.
    pub fn standard() -> Self {
        Self::default()
    }

    /// Projector over a custom table and configuration.
    pub fn new(table: OffsetTable, config: ScheduleConfig) -> Result<Self, ScheduleError> {
        config.validate()?;
        Ok(Self { table, config })
    }

    pub fn table(&self) -> &OffsetTable {
        &self.table
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// `(milestone, date)` pairs for the cycle anchored at `anchor`, in
    /// table order.
    pub fn compute_cycle(
        &self,
        anchor: NaiveDate,
    ) -> Result<Vec<(Milestone, NaiveDate)>, ScheduleError> {
        compute_cycle_with(&self.table, anchor)
    }

    /// Records for `cycle_count` monthly cycles, sorted by days from origin.
    pub fn project(
        &self,
        origin: NaiveDate,
        cycle_count: u32,
    ) -> Result<Vec<MilestoneRecord>, ScheduleError> {
        project_with(&self.table, origin, cycle_count, self.config.max_cycle_count)
    }

    /// Projection using the configured projection cycle count.
    pub fn project_default(&self, origin: NaiveDate) -> Result<Vec<MilestoneRecord>, ScheduleError> {
        self.project(origin, self.config.projection_cycle_count)
    }

    /// Records for the configured calculator cycle count.
    pub fn calculate(&self, origin: NaiveDate) -> Result<Vec<MilestoneRecord>, ScheduleError> {
        self.project(origin, self.config.calculator_cycle_count)
    }

    /// Single-cycle calculator view keyed by calculator label.
    pub fn summarize(&self, origin: NaiveDate) -> Result<CycleSummary, ScheduleError> {
        let entries = self
            .compute_cycle(origin)?
            .into_iter()
            .map(Into::into)
            .collect();
        Ok(CycleSummary::new(entries))
    }
}
