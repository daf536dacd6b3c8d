//! Plain-text rendering for terminal output.

use bc_01_schedule_projector::{format_date, CycleSummary, MilestoneRecord};
use bc_02_envelope_codec::SchedulePayload;

const LABEL_WIDTH: usize = 22;

/// One `label  MM/DD/YYYY` line per milestone.
pub fn render_summary(summary: &CycleSummary) -> String {
    render_labelled(&summary.labelled())
}

/// Table of a sorted projection.
pub fn render_records(records: &[MilestoneRecord]) -> String {
    let mut out = format!(
        "{:>5}  {:<LABEL_WIDTH$}  {:<10}  {:>6}\n",
        "CYCLE", "MILESTONE", "DATE", "DAYS"
    );
    for record in records {
        out.push_str(&format!(
            "{:>5}  {:<LABEL_WIDTH$}  {:<10}  {:>6}\n",
            record.cycle_index,
            record.milestone.as_str(),
            format_date(record.date),
            record.days_from_origin
        ));
    }
    out
}

/// Either view, depending on what was sealed.
pub fn render_payload(payload: &SchedulePayload) -> String {
    match payload {
        SchedulePayload::Cycle(entries) => render_labelled(
            &entries
                .iter()
                .map(|e| (e.milestone.summary_key(), format_date(e.date)))
                .collect::<Vec<_>>(),
        ),
        SchedulePayload::Projection(records) => render_records(records),
    }
}

fn render_labelled(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(label, date)| format!("{label:<LABEL_WIDTH$}  {date}\n"))
        .collect()
}
