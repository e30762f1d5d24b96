use masters_core::{Declaration, Entry, EntryValidationError, TABLE_COLUMNS};

const DECLARED: Declaration = Declaration {
    snatch: 100,
    clean_jerk: 120,
    entry_total: 270,
};

#[test]
fn compute_derives_snatch_metrics_without_snatch_taken() {
    let entry = Entry::compute("7", DECLARED, None);

    assert_eq!(entry.start_no, "7");
    assert_eq!(entry.snatch_plus_minus, 4);
    assert_eq!(entry.min_snatch, 96);
    assert_eq!(entry.snatch_taken, None);
    assert_eq!(entry.cj_plus_minus, None);
    assert_eq!(entry.min_cj, None);
    entry.validate().unwrap();
}

#[test]
fn compute_derives_clean_jerk_metrics_with_snatch_taken() {
    let entry = Entry::compute("7", DECLARED, Some(125));

    assert_eq!(entry.cj_plus_minus, Some(29));
    assert_eq!(entry.min_cj, Some(91));
    entry.validate().unwrap();
}

#[test]
fn validate_rejects_tampered_snatch_metrics() {
    let mut entry = Entry::compute("7", DECLARED, None);
    entry.min_snatch = 90;

    let err = entry.validate().unwrap_err();
    assert!(matches!(
        err,
        EntryValidationError::SnatchMetricsMismatch { expected, .. } if expected.minimum == 96
    ));
}

#[test]
fn validate_rejects_cj_metrics_without_snatch_taken() {
    let mut entry = Entry::compute("7", DECLARED, None);
    entry.cj_plus_minus = Some(29);

    let err = entry.validate().unwrap_err();
    assert!(matches!(
        err,
        EntryValidationError::CleanJerkMetricsMismatch { expected: None, .. }
    ));
}

#[test]
fn table_cells_follow_column_order_and_blank_missing_values() {
    let cells = Entry::compute("Alice", DECLARED, None).table_cells();

    assert_eq!(cells.len(), TABLE_COLUMNS.len());
    assert_eq!(cells[0], "Alice");
    assert_eq!(cells[3], "270");
    assert_eq!(cells[5], "96");
    assert_eq!(cells[6], "");
    assert_eq!(cells[8], "");
}

#[test]
fn entry_serialization_uses_snake_case_fields() {
    let entry = Entry::compute("12", DECLARED, Some(125));

    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["start_no"], "12");
    assert_eq!(json["clean_jerk"], 120);
    assert_eq!(json["entry_total"], 270);
    assert_eq!(json["snatch_plus_minus"], 4);
    assert_eq!(json["min_cj"], 91);

    let decoded: Entry = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, entry);
}
