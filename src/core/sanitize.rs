// src/core/sanitize.rs

use super::html::strip_tags;

/// The "no data" glyph the calendar renders into empty value cells.
pub const NBSP: char = '\u{a0}';

/// Decode the handful of entities the calendar emits.
/// `&nbsp;` becomes U+00A0 rather than a plain space: empty value cells
/// consist of exactly that character and it must stay distinguishable from
/// ordinary whitespace.
pub fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", "\u{a0}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Collapse runs of ASCII whitespace into a single space and trim the ends.
/// ASCII-only on purpose: U+00A0 counts as Unicode whitespace and a Unicode
/// trim would erase the sentinel.
pub fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_ascii_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim_matches(' ').to_string()
}

/// Text content of one table cell: tags stripped, entities decoded, ASCII
/// whitespace collapsed. A cell holding only the sentinel yields "\u{a0}".
pub fn cell_text(inner: &str) -> String {
    collapse_ws(&decode_entities(&strip_tags(inner)))
}
