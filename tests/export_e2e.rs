// tests/export_e2e.rs
// Export-path tests: hint resolution, dated default name, headers, delimiters.

use eco_scrape::config::options::{ExportFormat, ExportOptions};
use eco_scrape::file::{dated_stem, write_export_single};
use eco_scrape::records::{EventRecord, EventTable};

fn sample_table() -> EventTable {
    EventTable {
        records: vec![
            EventRecord {
                id: "493001".into(),
                datetime: "2026/08/03 08:30:00".into(),
                area: "United States".into(),
                impact: 3,
                indicator: "ISM Manufacturing PMI (Jul)".into(),
                actual: Some("48.9".into()),
                forecast: Some("49.5".into()),
                previous: Some("49.0".into()),
                link: "https://uk.investing.com/economic-calendar/ism-manufacturing-pmi-173".into(),
            },
            EventRecord {
                id: "493005".into(),
                datetime: "2026/08/07 12:30:00".into(),
                area: "United States".into(),
                impact: 3,
                indicator: "Nonfarm Payrolls (Jul)".into(),
                actual: None,
                forecast: Some("110K".into()),
                previous: Some("73K".into()),
                link: "https://uk.investing.com/economic-calendar/nonfarm-payrolls-227".into(),
            },
        ],
    }
}

#[test]
fn explicit_file_path_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("week.csv");

    let export = ExportOptions {
        out: Some(target.clone()),
        ..ExportOptions::default()
    };
    let table = sample_table();
    let written = write_export_single(&export, &Some(EventTable::headers()), &table.to_rows()).unwrap();

    assert_eq!(written, target);
    let content = std::fs::read_to_string(&written).unwrap();
    assert!(content.starts_with("Date,Area,Impact,Indicator,Actual,Forecast,Previous,Link"));
    assert!(content.contains("2026/08/03 08:30:00,United States,3,ISM Manufacturing PMI (Jul),48.9,49.5,49.0,"));
    // A missing value exports as an empty cell, never a sentinel glyph.
    assert!(content.contains("Nonfarm Payrolls (Jul),,110K,73K,"));
}

#[test]
fn directory_hint_gets_the_dated_default_name() {
    let dir = tempfile::tempdir().unwrap();

    let export = ExportOptions {
        out: Some(dir.path().to_path_buf()),
        ..ExportOptions::default()
    };
    let table = sample_table();
    let written = write_export_single(&export, &Some(EventTable::headers()), &table.to_rows()).unwrap();

    let name = written.file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(name, format!("{}.csv", dated_stem()));
    assert!(name.starts_with("Economic_Calendar_"));
}

#[test]
fn tsv_format_switches_delimiter_and_extension() {
    let dir = tempfile::tempdir().unwrap();

    let export = ExportOptions {
        format: ExportFormat::Tsv,
        out: Some(dir.path().to_path_buf()),
        include_headers: false,
    };
    let table = sample_table();
    let written = write_export_single(&export, &Some(EventTable::headers()), &table.to_rows()).unwrap();

    assert!(written.to_string_lossy().ends_with(".tsv"));
    let content = std::fs::read_to_string(&written).unwrap();
    assert!(!content.contains("Date\tArea")); // headers suppressed
    assert!(content.contains("United States\t3\t"));
}

#[test]
fn fields_containing_the_delimiter_are_quoted() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("quoted.csv");

    let mut table = sample_table();
    table.records[0].indicator = "GDP, first estimate (QoQ)".into();

    let export = ExportOptions {
        out: Some(target),
        ..ExportOptions::default()
    };
    let written = write_export_single(&export, &Some(EventTable::headers()), &table.to_rows()).unwrap();

    let content = std::fs::read_to_string(&written).unwrap();
    assert!(content.contains("\"GDP, first estimate (QoQ)\""));
}
