//! Export Round-Trip Tests
//!
//! Tests that exported files read back to the same values:
//! - designation, distance and velocity exactly
//! - empty name as no name, missing diameter as unknown

use neodb::database::NeoDatabase;
use neodb::filters::{create_filters, limit, Criteria};
use neodb::model::time::cd_to_datetime;
use neodb::model::{CloseApproach, NearEarthObject};
use neodb::writer::{write_results, CsvRow, JsonEntry, WriterError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn sample_db() -> NeoDatabase {
    NeoDatabase::new(
        vec![
            NearEarthObject::new("433", Some("Eros".to_string()), 16.84, false),
            NearEarthObject::new("2020 AB", None, f64::NAN, true),
        ],
        vec![
            CloseApproach::new(
                "433",
                Some(cd_to_datetime("1975-Jan-23 07:44").unwrap()),
                0.151_133_476_823_413_4,
                5.762_342_381_729_18,
            ),
            CloseApproach::new("2020 AB", None, 0.002_138_421_9, 12.107_553_1),
        ],
    )
}

fn assert_neo_round_trip(original: &NearEarthObject, back: &NearEarthObject) {
    assert_eq!(back.designation(), original.designation());
    assert_eq!(back.name(), original.name());
    assert_eq!(back.hazardous(), original.hazardous());
    if original.has_known_diameter() {
        assert_eq!(back.diameter().to_bits(), original.diameter().to_bits());
    } else {
        assert!(!back.has_known_diameter());
    }
}

fn assert_approach_round_trip(original: &CloseApproach, back: &CloseApproach) {
    assert_eq!(back.designation(), original.designation());
    assert_eq!(back.time(), original.time());
    assert_eq!(back.distance().to_bits(), original.distance().to_bits());
    assert_eq!(back.velocity().to_bits(), original.velocity().to_bits());
}

// =============================================================================
// JSON Tests
// =============================================================================

/// JSON export reads back to the same records.
#[test]
fn test_json_round_trip() {
    let db = sample_db();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.json");

    let written = write_results(db.query(&[]), &path).unwrap();
    assert_eq!(written, 2);

    let text = std::fs::read_to_string(&path).unwrap();
    let entries: Vec<JsonEntry> = serde_json::from_str(&text).unwrap();
    assert_eq!(entries.len(), 2);

    for (entry, original) in entries.into_iter().zip(db.approaches()) {
        let neo_record = entry.neo.clone().unwrap();
        let neo = NearEarthObject::from_record(neo_record);
        assert_neo_round_trip(db.neo_of(original).unwrap(), &neo);

        let approach = CloseApproach::from_record(neo.designation(), &entry.approach_record()).unwrap();
        assert_approach_round_trip(original, &approach);
    }
}

// =============================================================================
// CSV Tests
// =============================================================================

/// CSV export reads back to the same records.
#[test]
fn test_csv_round_trip() {
    let db = sample_db();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.csv");

    write_results(db.query(&[]), &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<CsvRow> = reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), 2);

    for (row, original) in rows.into_iter().zip(db.approaches()) {
        let (approach_record, neo_record) = row.into_records();
        let neo = NearEarthObject::from_record(neo_record.unwrap());
        assert_neo_round_trip(db.neo_of(original).unwrap(), &neo);

        let approach = CloseApproach::from_record(neo.designation(), &approach_record).unwrap();
        assert_approach_round_trip(original, &approach);
    }
}

/// Limits apply to exports too.
#[test]
fn test_limited_export() {
    let db = sample_db();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("first.csv");

    let written = write_results(limit(db.query(&[]), Some(1)), &path).unwrap();
    assert_eq!(written, 1);
}

/// Unknown extensions are refused before anything is written.
#[test]
fn test_unknown_extension() {
    let db = sample_db();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("results.xml");

    let err = write_results(db.query(&[]), &path).unwrap_err();
    assert!(matches!(err, WriterError::UnsupportedFormat(_)));
    assert!(!path.exists());
}

/// A query that fails mid-export leaves no partial file behind.
#[test]
fn test_failed_export_removes_file() {
    let db = NeoDatabase::new(
        vec![NearEarthObject::new("433", None, 16.84, false)],
        vec![
            CloseApproach::new("433", None, 0.15, 5.1),
            CloseApproach::new("2099 ZZ", None, 0.01, 9.0),
        ],
    );
    let filters = create_filters(&Criteria {
        diameter_min: Some(1.0),
        ..Criteria::default()
    });
    let dir = TempDir::new().unwrap();

    for name in ["out.json", "out.csv"] {
        let path = dir.path().join(name);
        let err = write_results(db.query(&filters), &path).unwrap_err();
        assert!(matches!(err, WriterError::Query(_)));
        assert!(!path.exists());
    }
}
