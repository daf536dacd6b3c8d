//! # Integration Test Flows
//!
//! Schedules produced by `bc-01-schedule-projector` sealed and reopened by
//! `bc-02-envelope-codec`, through the textual wire record.
//!
//! ## Flows Tested:
//!
//! 1. **Calculator → seal → record → open**: single-cycle view survives intact
//! 2. **Projection → seal → record → open**: sorted multi-cycle records survive
//! 3. **Custom table → codec**: non-standard tables flow through unchanged
//! 4. **Configuration mismatch**: codecs must agree on the derivation cost

#[cfg(test)]
mod tests {
    use bc_01_schedule_projector::{
        format_date, parse_origin_date, Milestone, MilestoneOffset, OffsetTable, ScheduleConfig,
        ScheduleProjector,
    };
    use bc_02_envelope_codec::{
        Envelope, EnvelopeCodec, EnvelopeConfig, ErrorKind, SchedulePayload, WireEnvelope,
    };
    use chrono::NaiveDate;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const PASSWORD: &str = "correct horse battery staple";

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Seal, render the record as text, parse it back and open it.
    fn through_the_wire(codec: &EnvelopeCodec, payload: &SchedulePayload) -> SchedulePayload {
        let record = codec.seal_schedule(payload, PASSWORD).unwrap().to_json().unwrap();
        let envelope = Envelope::from_json(&record).unwrap();
        codec.open_schedule(&envelope, PASSWORD).unwrap()
    }

    // =============================================================================
    // CALCULATOR FLOW
    // =============================================================================

    #[test]
    fn test_calculator_view_survives_envelope() {
        let projector = ScheduleProjector::standard();
        let codec = EnvelopeCodec::default();
        let origin = parse_origin_date("06/22/2025").unwrap();

        let payload = SchedulePayload::from(projector.compute_cycle(origin).unwrap());
        let opened = through_the_wire(&codec, &payload);
        assert_eq!(opened, payload);

        // Opened rows carry the same calculator labels and dates
        let summary = projector.summarize(origin).unwrap();
        let reopened_labels: Vec<(&str, String)> = opened
            .rows()
            .into_iter()
            .map(|(_, milestone, date)| (milestone.summary_key(), format_date(date)))
            .collect();
        assert_eq!(reopened_labels, summary.labelled());
        assert_eq!(summary.get("bill_is_due"), Some(ymd(2025, 7, 12)));
    }

    #[test]
    fn test_summary_sealed_as_json_map() {
        let codec = EnvelopeCodec::default();
        let summary = ScheduleProjector::standard()
            .summarize(ymd(2025, 6, 22))
            .unwrap();

        let envelope = codec.seal_json(&summary, PASSWORD).unwrap();
        let map: serde_json::Map<String, serde_json::Value> =
            codec.open_json(&envelope, PASSWORD).unwrap();

        assert_eq!(map.len(), 9);
        assert_eq!(map["bill_in_tlife_app"], "06/26/2025");
        assert_eq!(map["funds_avail_pre_ap"], "07/08/2025");
        assert_eq!(map["number_loss_risk"], "09/20/2025");
    }

    // =============================================================================
    // PROJECTION FLOW
    // =============================================================================

    #[test]
    fn test_leap_year_projection_survives_envelope() {
        let projector = ScheduleProjector::standard();
        let codec = EnvelopeCodec::default();

        let records = projector.project(ymd(2024, 1, 31), 13).unwrap();
        let payload = SchedulePayload::from(records.clone());
        let opened = through_the_wire(&codec, &payload);

        let SchedulePayload::Projection(reopened) = opened else {
            panic!("projection reopened as a different payload kind");
        };
        assert_eq!(reopened, records);

        // Month-end anchors clamp through February of a leap year
        let anchors: Vec<NaiveDate> = reopened
            .iter()
            .filter(|r| r.milestone == Milestone::BillingCycleStart)
            .map(|r| r.date)
            .collect();
        assert_eq!(anchors[1], ymd(2024, 2, 29));
        assert_eq!(anchors[12], ymd(2025, 1, 31));

        // Sort order is preserved by the encoding
        assert!(reopened
            .windows(2)
            .all(|w| w[0].days_from_origin <= w[1].days_from_origin));
    }

    #[test]
    fn test_record_fields_accepted_in_any_order() {
        let codec = EnvelopeCodec::default();
        let payload = SchedulePayload::from(
            ScheduleProjector::standard()
                .project_default(ymd(2025, 6, 22))
                .unwrap(),
        );
        let wire = codec.seal_schedule(&payload, PASSWORD).unwrap().to_wire();

        let reordered = format!(
            r#"{{"ciphertext":"{}","nonce":"{}","salt":"{}"}}"#,
            wire.ciphertext, wire.nonce, wire.salt
        );
        let parsed: WireEnvelope = serde_json::from_str(&reordered).unwrap();
        assert_eq!(parsed, wire);

        let envelope = Envelope::from_json(&reordered).unwrap();
        assert_eq!(codec.open_schedule(&envelope, PASSWORD).unwrap(), payload);
    }

    // =============================================================================
    // CUSTOM TABLES AND CONFIGURATION
    // =============================================================================

    #[test]
    fn test_custom_table_flows_through_codec() {
        let table = OffsetTable::new(vec![
            MilestoneOffset::from((Milestone::BillingCycleStart, 0)),
            MilestoneOffset::from((Milestone::BillPdfReady, -3)),
            MilestoneOffset::from((Milestone::BillIsDue, 14)),
        ])
        .unwrap();
        let projector = ScheduleProjector::new(table, ScheduleConfig::default()).unwrap();

        let records = projector.project(ymd(2025, 3, 1), 2).unwrap();
        assert_eq!(records[0].milestone, Milestone::BillPdfReady);
        assert_eq!(records[0].days_from_origin, -3);

        let payload = SchedulePayload::from(records);
        assert_eq!(through_the_wire(&EnvelopeCodec::default(), &payload), payload);
    }

    #[test]
    fn test_codecs_must_agree_on_iterations() {
        let payload = SchedulePayload::from(
            ScheduleProjector::standard()
                .compute_cycle(ymd(2025, 6, 22))
                .unwrap(),
        );
        let sealed = EnvelopeCodec::default()
            .seal_schedule(&payload, PASSWORD)
            .unwrap();

        let other = EnvelopeCodec::new(EnvelopeConfig::default().with_kdf_iterations(120_000)).unwrap();
        let err = other.open_schedule(&sealed, PASSWORD).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailure);
    }

    #[test]
    fn test_invalid_inputs_fail_before_any_crypto() {
        assert!(parse_origin_date("13/01/2025").is_err());
        assert!(ScheduleProjector::standard().project(ymd(2025, 1, 1), 0).is_err());

        let err = EnvelopeCodec::new(EnvelopeConfig::default().with_kdf_iterations(1_000)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
