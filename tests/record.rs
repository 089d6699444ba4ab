#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timeplot::libs::record::{parse_records, RecordError};

    #[test]
    fn test_parse_valid_batch() {
        let body = r#"[
            {"fields": {"date": "2024-01-01", "user": "alice", "seconds": 30}},
            {"fields": {"date": "2024-01-02", "user": "bob", "seconds": 45}}
        ]"#;

        let records = parse_records(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(records[0].user, "alice");
        assert_eq!(records[0].seconds, 30);
        assert_eq!(records[1].user, "bob");
    }

    #[test]
    fn test_parse_empty_array_is_not_an_error() {
        let records = parse_records("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_rejects_non_array_body() {
        let err = parse_records(r#"{"fields": {}}"#).unwrap_err();
        assert!(matches!(err, RecordError::InvalidBatch(_)));
    }

    #[test]
    fn test_parse_rejects_missing_field_with_index() {
        let body = r#"[
            {"fields": {"date": "2024-01-01", "user": "alice", "seconds": 30}},
            {"fields": {"date": "2024-01-02", "seconds": 45}}
        ]"#;

        let err = parse_records(body).unwrap_err();

        match err {
            RecordError::Malformed { index, .. } => assert_eq!(index, 1),
            other => panic!("expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_missing_envelope() {
        let body = r#"[{"date": "2024-01-01", "user": "alice", "seconds": 30}]"#;

        let err = parse_records(body).unwrap_err();
        assert!(matches!(err, RecordError::Malformed { index: 0, .. }));
    }

    #[test]
    fn test_parse_rejects_invalid_date() {
        let body = r#"[{"fields": {"date": "01/02/2024", "user": "alice", "seconds": 30}}]"#;

        let err = parse_records(body).unwrap_err();

        match err {
            RecordError::InvalidDate { index, date } => {
                assert_eq!(index, 0);
                assert_eq!(date, "01/02/2024");
            }
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_negative_seconds() {
        let body = r#"[{"fields": {"date": "2024-01-01", "user": "alice", "seconds": -5}}]"#;

        let err = parse_records(body).unwrap_err();

        match err {
            RecordError::NegativeSeconds { index, seconds } => {
                assert_eq!(index, 0);
                assert_eq!(seconds, -5);
            }
            other => panic!("expected NegativeSeconds, got {:?}", other),
        }
    }

    #[test]
    fn test_one_bad_record_rejects_the_whole_batch() {
        let body = r#"[
            {"fields": {"date": "2024-01-01", "user": "alice", "seconds": 30}},
            {"fields": {"date": "not-a-date", "user": "bob", "seconds": 45}},
            {"fields": {"date": "2024-01-03", "user": "carol", "seconds": 60}}
        ]"#;

        assert!(parse_records(body).is_err());
    }
}
