//! Projector configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use bc_01_schedule_projector::domain::ScheduleConfigBuilder;
//!
//! let config = ScheduleConfigBuilder::new()
//!     .projection_cycle_count(12)
//!     .build()
//!     .expect("Valid config");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Hard ceiling on cycles per projection (one hundred years of months).
pub const MAX_CYCLE_COUNT: u32 = 1200;

/// Schedule projector configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Cycles produced by the single-cycle calculator
    pub calculator_cycle_count: u32,
    /// Cycles produced by the projection view (current + following months)
    pub projection_cycle_count: u32,
    /// Largest cycle count a caller may request
    pub max_cycle_count: u32,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            calculator_cycle_count: 1,
            projection_cycle_count: 5,
            max_cycle_count: MAX_CYCLE_COUNT,
        }
    }
}

impl ScheduleConfig {
    /// Validate cycle counts
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.max_cycle_count == 0 || self.max_cycle_count > MAX_CYCLE_COUNT {
            return Err(ScheduleError::InvalidConfig(format!(
                "max_cycle_count must be between 1 and {}",
                MAX_CYCLE_COUNT
            )));
        }

        for (name, count) in [
            ("calculator_cycle_count", self.calculator_cycle_count),
            ("projection_cycle_count", self.projection_cycle_count),
        ] {
            if count == 0 || count > self.max_cycle_count {
                return Err(ScheduleError::InvalidConfig(format!(
                    "{} must be between 1 and {}, got {}",
                    name, self.max_cycle_count, count
                )));
            }
        }

        Ok(())
    }
}

/// Builder for ScheduleConfig with validation
#[derive(Default)]
pub struct ScheduleConfigBuilder {
    calculator_cycle_count: Option<u32>,
    projection_cycle_count: Option<u32>,
    max_cycle_count: Option<u32>,
}

impl ScheduleConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculator_cycle_count(mut self, count: u32) -> Self {
        self.calculator_cycle_count = Some(count);
        self
    }

    pub fn projection_cycle_count(mut self, count: u32) -> Self {
        self.projection_cycle_count = Some(count);
        self
    }

    pub fn max_cycle_count(mut self, count: u32) -> Self {
        self.max_cycle_count = Some(count);
        self
    }

    /// Build the ScheduleConfig, validating all parameters
    pub fn build(self) -> Result<ScheduleConfig, ScheduleError> {
        let defaults = ScheduleConfig::default();

        let config = ScheduleConfig {
            calculator_cycle_count: self
                .calculator_cycle_count
                .unwrap_or(defaults.calculator_cycle_count),
            projection_cycle_count: self
                .projection_cycle_count
                .unwrap_or(defaults.projection_cycle_count),
            max_cycle_count: self.max_cycle_count.unwrap_or(defaults.max_cycle_count),
        };

        config.validate()?;
        Ok(config)
    }
}
