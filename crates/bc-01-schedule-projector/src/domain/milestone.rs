//! Milestone names
//!
//! The nine named events of one billing cycle, in table order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// A named, dated event within a billing cycle.
///
/// Declaration order is the order of the standard offset table. Both the
/// table name and the calculator's short label deserialize to the same
/// variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    BillingCycleStart,
    #[serde(alias = "bill_in_tlife_app")]
    BillInApp,
    BillPdfReady,
    #[serde(alias = "funds_avail_pre_ap")]
    FundsAvailPreAutopay,
    AutopayDraft,
    BillIsDue,
    BillingCycleClose,
    ServiceSuspensionRisk,
    NumberLossRisk,
}

impl Milestone {
    /// All milestones in table order.
    pub const ALL: [Milestone; 9] = [
        Milestone::BillingCycleStart,
        Milestone::BillInApp,
        Milestone::BillPdfReady,
        Milestone::FundsAvailPreAutopay,
        Milestone::AutopayDraft,
        Milestone::BillIsDue,
        Milestone::BillingCycleClose,
        Milestone::ServiceSuspensionRisk,
        Milestone::NumberLossRisk,
    ];

    /// Table name, as used in projection records and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Milestone::BillingCycleStart => "billing_cycle_start",
            Milestone::BillInApp => "bill_in_app",
            Milestone::BillPdfReady => "bill_pdf_ready",
            Milestone::FundsAvailPreAutopay => "funds_avail_pre_autopay",
            Milestone::AutopayDraft => "autopay_draft",
            Milestone::BillIsDue => "bill_is_due",
            Milestone::BillingCycleClose => "billing_cycle_close",
            Milestone::ServiceSuspensionRisk => "service_suspension_risk",
            Milestone::NumberLossRisk => "number_loss_risk",
        }
    }

    /// Short label printed by the single-cycle calculator.
    ///
    /// Differs from [`Milestone::as_str`] only for the in-app bill and the
    /// pre-autopay funds milestones.
    pub fn summary_key(&self) -> &'static str {
        match self {
            Milestone::BillInApp => "bill_in_tlife_app",
            Milestone::FundsAvailPreAutopay => "funds_avail_pre_ap",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Milestone {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Milestone::ALL
            .into_iter()
            .find(|m| m.as_str() == s || m.summary_key() == s)
            .ok_or_else(|| ScheduleError::UnknownMilestone(s.to_string()))
    }
}
