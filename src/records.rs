// src/records.rs
//! Typed records for the economic calendar and the fixed export schema.

use std::fmt;

/// Export schema, in column order.
pub const HEADERS: [&str; 8] = [
    "Date",
    "Area",
    "Impact",
    "Indicator",
    "Actual",
    "Forecast",
    "Previous",
    "Link",
];

/// The three id-keyed value kinds a data row carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Actual,
    Forecast,
    Previous,
}

impl FieldKind {
    /// Structural match for the trailing part of an `event-<id>-<kind>`
    /// class token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "actual" => Some(FieldKind::Actual),
            "forecast" => Some(FieldKind::Forecast),
            "previous" => Some(FieldKind::Previous),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Actual => "actual",
            FieldKind::Forecast => "forecast",
            FieldKind::Previous => "previous",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled indicator release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventRecord {
    /// Event id, unique within one snapshot.
    pub id: String,
    /// Raw release datetime attribute, passed through unparsed.
    pub datetime: String,
    /// Country or geographic area the release targets.
    pub area: String,
    /// Same-class run count of the row's impact markers; see
    /// [`impact_run_count`].
    pub impact: u8,
    pub indicator: String,
    pub actual: Option<String>,
    pub forecast: Option<String>,
    pub previous: Option<String>,
    /// Absolute link to the indicator detail page.
    pub link: String,
}

impl EventRecord {
    /// Stringify into the export schema; missing values become empty cells.
    pub fn to_row(&self) -> Vec<String> {
        let opt = |v: &Option<String>| v.clone().unwrap_or_default();
        vec![
            self.datetime.clone(),
            self.area.clone(),
            self.impact.to_string(),
            self.indicator.clone(),
            opt(&self.actual),
            opt(&self.forecast),
            opt(&self.previous),
            self.link.clone(),
        ]
    }
}

/// Why a `<tr>` was rejected as a data row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No event id attribute: day separators, header rows.
    MissingRowId,
    MissingDatetime,
    MissingAreaCell,
    MissingIndicatorCell,
    MissingImpactCell,
    MissingValueCell(FieldKind),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingRowId => f.write_str("no event id"),
            SkipReason::MissingDatetime => f.write_str("no release datetime"),
            SkipReason::MissingAreaCell => f.write_str("no area cell"),
            SkipReason::MissingIndicatorCell => f.write_str("no indicator cell"),
            SkipReason::MissingImpactCell => f.write_str("no impact cell"),
            SkipReason::MissingValueCell(kind) => write!(f, "no {kind} cell"),
        }
    }
}

/// Tagged per-row result: decorative rows are expected, not errors.
#[derive(Clone, Debug)]
pub enum RowOutcome {
    Data(EventRecord),
    Skipped(SkipReason),
}

/// Ordered collection of records, in source document order. Never re-sorted.
#[derive(Clone, Debug, Default)]
pub struct EventTable {
    pub records: Vec<EventRecord>,
}

impl EventTable {
    pub fn headers() -> Vec<String> {
        HEADERS.iter().map(|h| h.to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(EventRecord::to_row).collect()
    }
}

/// Impact of a release = length of the *leading* run of markers sharing the
/// first marker's class. `[A, A, B]` counts 2; `[A, B, A]` counts 1 — a
/// non-contiguous repeat of the first class is not part of the run.
pub fn impact_run_count(marker_classes: &[String]) -> u8 {
    let Some(first) = marker_classes.first() else {
        return 0;
    };
    let run = marker_classes.iter().take_while(|c| *c == first).count();
    u8::try_from(run).unwrap_or(u8::MAX)
}
