// src/core/html.rs
// Low-level HTML string scanning helpers.
// Deliberately naive but tailored to the calendar page structure: flat
// tables, no same-name nesting inside a scanned block, ASCII tag and
// attribute names. Case-insensitive on tag/attribute names only.

/// Fast ASCII-only lowercasing; byte offsets stay aligned with the input.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Find the next complete element block `<tag ...>…</tag>` from `from`
/// onwards. Takes the bare tag name and enforces a name boundary, so asking
/// for `i` will not stop at `<img>` or `<input>`. Self-closing openers
/// (`<i .../>`) count as a whole block. Returns byte offsets spanning the
/// opening tag through the end of the closing tag.
pub fn next_element_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lower(s);
    let open_pat = format!("<{}", to_lower(tag));
    let close_pat = format!("</{}", to_lower(tag));

    let mut search = from;
    loop {
        let start = lc.get(search..)?.find(&open_pat)? + search;
        let after = start + open_pat.len();
        match lc.as_bytes().get(after) {
            Some(b'>') | Some(b'/') => {}
            Some(c) if c.is_ascii_whitespace() => {}
            // Name continues ("<i" inside "<img"); keep looking.
            _ => {
                search = after;
                continue;
            }
        }

        let open_end = s[start..].find('>')? + start + 1;
        if s[start..open_end].ends_with("/>") {
            return Some((start, open_end));
        }

        let close_rel = lc[open_end..].find(&close_pat)?;
        let close_start = open_end + close_rel;
        let end = s[close_start..].find('>')? + close_start + 1;
        return Some((start, end));
    }
}

/// The opener text of a block: everything between `<` and the first `>`.
/// `<td class="x" id="y">…</td>` → `td class="x" id="y"`.
pub fn tag_opener(block: &str) -> &str {
    let end = block.find('>').unwrap_or(block.len());
    block
        .get(1..end)
        .unwrap_or("")
        .trim()
        .trim_end_matches('/')
}

/// Attribute lookup on a tag opener, case-insensitive on the attribute name.
/// Handles double-quoted, single-quoted and unquoted values; the value is
/// returned with its original casing.
pub fn attr_ci(opener: &str, name: &str) -> Option<String> {
    let lc = to_lower(opener);
    let pat = format!("{}=", to_lower(name));

    let mut search = 0usize;
    loop {
        let at = lc.get(search..)?.find(&pat)? + search;
        // Require a boundary so `id=` does not match inside `data-row-id=`.
        if at > 0 && !lc.as_bytes()[at - 1].is_ascii_whitespace() {
            search = at + pat.len();
            continue;
        }

        let val = &opener[at + pat.len()..];
        let (quote, start) = match val.as_bytes().first() {
            Some(b'"') => ('"', 1),
            Some(b'\'') => ('\'', 1),
            _ => ('\0', 0),
        };
        let end = if quote != '\0' {
            val[start..].find(quote).map(|e| start + e)
        } else {
            val.find(|c: char| c.is_ascii_whitespace() || c == '>')
        }
        .unwrap_or(val.len());

        return Some(val[start..end].to_string());
    }
}

/// Class tokens of a tag opener, split on ASCII whitespace.
/// A missing class attribute yields an empty list, not an error.
pub fn class_tokens(opener: &str) -> Vec<String> {
    attr_ci(opener, "class")
        .map(|v| v.split_ascii_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Given a complete block like `<td ...>INNER</td>`, return INNER without
/// the wrapping tags (it may still contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return block[open_end + 1..close_start].to_string();
            }
        }
    }
    String::new()
}

/// Remove all `<...>` tags, keeping the text content verbatim.
/// No whitespace normalization here; see `core::sanitize` for that.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
