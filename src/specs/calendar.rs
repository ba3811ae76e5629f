// src/specs/calendar.rs
//! Scraping spec for the economic calendar page.
//!
//! The calendar table is picked out of every `<table>` on the page by its
//! `id` attribute. Data rows key their three value cells (actual / forecast
//! / previous) off a row id carried in class tokens of the shape
//! `event-<id>-<kind>`, so each row's cells are parsed **once** into a
//! field-kind map instead of probing the document with id-built string
//! patterns. Rows that do not fit (day separators, injected banners) are
//! skipped with a tagged reason, never silently.

use crate::config::consts::CALENDAR_TABLE_ID;
use crate::core::html::{attr_ci, class_tokens, inner_after_open_tag, next_element_block_ci, strip_tags, tag_opener};
use crate::core::sanitize::{cell_text, collapse_ws, decode_entities, NBSP};
use crate::error::{ScrapeError, ScrapeResult};
use crate::records::{impact_run_count, EventRecord, EventTable, FieldKind, RowOutcome, SkipReason};

/// Everything one snapshot yields: the kept records plus, for testability,
/// every rejected `<tr>` with its reason.
#[derive(Clone, Debug)]
pub struct Extraction {
    pub table: EventTable,
    /// (row index within the table body, reason) per rejected row.
    pub skipped: Vec<(usize, SkipReason)>,
}

/// Parse a stabilized snapshot into calendar records.
/// `base_url` is the site root used to absolutize detail links.
pub fn extract(doc: &str, base_url: &str) -> ScrapeResult<Extraction> {
    let table_block = locate_calendar_table(doc)?;

    // Rows live in <tbody>; tolerate its absence by scanning the table body
    // directly (decorative rows are skip-tagged either way).
    let rows_scope = match next_element_block_ci(table_block, "tbody", 0) {
        Some((s, e)) => inner_after_open_tag(&table_block[s..e]),
        None => inner_after_open_tag(table_block),
    };

    let mut table = EventTable::default();
    let mut skipped = Vec::new();

    let mut pos = 0usize;
    let mut index = 0usize;
    while let Some((tr_s, tr_e)) = next_element_block_ci(&rows_scope, "tr", pos) {
        let tr = &rows_scope[tr_s..tr_e];
        pos = tr_e;
        match resolve_row(tr, base_url) {
            RowOutcome::Data(record) => table.records.push(record),
            RowOutcome::Skipped(reason) => skipped.push((index, reason)),
        }
        index += 1;
    }

    Ok(Extraction { table, skipped })
}

/// Linear scan in document order; first table whose `id` matches wins.
/// Tables lacking the attribute are passed over without complaint.
fn locate_calendar_table(doc: &str) -> ScrapeResult<&str> {
    let mut pos = 0usize;
    while let Some((ts, te)) = next_element_block_ci(doc, "table", pos) {
        let block = &doc[ts..te];
        pos = te;
        if attr_ci(tag_opener(block), "id").as_deref() == Some(CALENDAR_TABLE_ID) {
            return Ok(block);
        }
    }
    Err(ScrapeError::TableNotFound)
}

/// Field-kind → cell-text map filled by one pass over a row's cells.
/// First match per kind wins.
#[derive(Default)]
struct ValueCells {
    actual: Option<String>,
    forecast: Option<String>,
    previous: Option<String>,
}

impl ValueCells {
    fn set(&mut self, kind: FieldKind, text: String) {
        let slot = match kind {
            FieldKind::Actual => &mut self.actual,
            FieldKind::Forecast => &mut self.forecast,
            FieldKind::Previous => &mut self.previous,
        };
        if slot.is_none() {
            *slot = Some(text);
        }
    }
}

/// Resolve one `<tr>` into a record or a tagged skip.
fn resolve_row(tr: &str, base_url: &str) -> RowOutcome {
    use SkipReason::*;

    let opener = tag_opener(tr);

    // Day separators and header rows carry no event id.
    let row_id = match attr_ci(opener, "id").and_then(|id| id.split('_').nth(1).map(str::to_string)) {
        Some(id) if !id.is_empty() => id,
        _ => return RowOutcome::Skipped(MissingRowId),
    };
    let Some(datetime) = attr_ci(opener, "data-event-datetime") else {
        return RowOutcome::Skipped(MissingDatetime);
    };

    // One pass over the cells; everything after is plain lookups.
    let mut area: Option<String> = None;
    let mut indicator: Option<(String, String)> = None;
    let mut marker_classes: Option<Vec<String>> = None;
    let mut values = ValueCells::default();

    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_element_block_ci(tr, "td", pos) {
        let td = &tr[td_s..td_e];
        pos = td_e;
        let tokens = class_tokens(tag_opener(td));

        if area.is_none() && tokens.iter().any(|t| t == "flagCur") {
            area = flag_title(td);
            continue;
        }
        if marker_classes.is_none() && tokens.iter().any(|t| t == "sentiment") {
            marker_classes = Some(impact_markers(td));
            continue;
        }
        if indicator.is_none() && tokens.iter().any(|t| t == "event") {
            indicator = anchor_parts(td);
            continue;
        }
        for token in &tokens {
            if let Some(kind) = value_kind(token, &row_id) {
                values.set(kind, cell_text(&inner_after_open_tag(td)));
            }
        }
    }

    // Checks mirror the source row shape, in source order.
    let Some(area) = area else {
        return RowOutcome::Skipped(MissingAreaCell);
    };
    let Some((raw_name, href)) = indicator else {
        return RowOutcome::Skipped(MissingIndicatorCell);
    };
    let Some(marker_classes) = marker_classes else {
        return RowOutcome::Skipped(MissingImpactCell);
    };
    let Some(actual) = values.actual else {
        return RowOutcome::Skipped(MissingValueCell(FieldKind::Actual));
    };
    let Some(forecast) = values.forecast else {
        return RowOutcome::Skipped(MissingValueCell(FieldKind::Forecast));
    };
    let Some(previous) = values.previous else {
        return RowOutcome::Skipped(MissingValueCell(FieldKind::Previous));
    };

    RowOutcome::Data(EventRecord {
        id: row_id,
        datetime,
        area,
        impact: impact_run_count(&marker_classes),
        indicator: indicator_name(&raw_name),
        actual: sentinel_to_none(actual),
        forecast: sentinel_to_none(forecast),
        previous: sentinel_to_none(previous),
        link: format!("{base_url}{href}"),
    })
}

/// Structural parse of an `event-<id>-<kind>` class token. The id must match
/// this row's id; unrelated classes fall through.
fn value_kind(token: &str, row_id: &str) -> Option<FieldKind> {
    let mut parts = token.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("event"), Some(id), Some(kind)) if id == row_id => FieldKind::from_token(kind),
        _ => None,
    }
}

/// The `title` of the first `<span>` in the flag cell names the area.
fn flag_title(td: &str) -> Option<String> {
    let (s, e) = next_element_block_ci(td, "span", 0)?;
    attr_ci(tag_opener(&td[s..e]), "title").map(|t| collapse_ws(&decode_entities(&t)))
}

/// First class token of each `<i>` marker, in document order.
fn impact_markers(td: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((s, e)) = next_element_block_ci(td, "i", pos) {
        let opener = tag_opener(&td[s..e]);
        pos = e;
        if let Some(first) = class_tokens(opener).into_iter().next() {
            out.push(first);
        }
    }
    out
}

/// Indicator anchor: raw text (entities decoded, tags stripped, whitespace
/// untouched) plus the relative href. Both are required.
fn anchor_parts(td: &str) -> Option<(String, String)> {
    let (s, e) = next_element_block_ci(td, "a", 0)?;
    let a = &td[s..e];
    let href = attr_ci(tag_opener(a), "href")?;
    let text = decode_entities(&strip_tags(&inner_after_open_tag(a)));
    Some((text, href))
}

/// The anchor text leads with a decorative character; drop it, then collapse
/// whitespace.
fn indicator_name(raw: &str) -> String {
    let mut chars = raw.chars();
    chars.next();
    collapse_ws(chars.as_str())
}

/// A cell whose whole content is the single no-data glyph maps to `None`;
/// anything else passes through untouched.
fn sentinel_to_none(text: String) -> Option<String> {
    if text.chars().eq([NBSP]) { None } else { Some(text) }
}
