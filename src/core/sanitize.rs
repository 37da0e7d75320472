// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace('\u{a0}', " ").replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Token cleanup for names and short labels: entities decoded, whitespace runs
/// collapsed, ends trimmed.
pub fn clean_text(s: &str) -> String {
    normalize_ws(&normalize_entities(s))
}

/// Bout-page fragment cleanup: line breaks and double spaces are layout, not text.
/// Single spaces inside the fragment survive.
pub fn clean_fragment(s: &str) -> String {
    s.replace(['\n', '\r'], "").replace("  ", "")
}

/// Separator tokens (`&nbsp;`, blank cells) carry no data.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(|c| c.is_whitespace() || c == '\u{a0}') || s.trim() == "&nbsp;"
}

/// Drop a leading `Label:` (and one space after it).
/// The label needs at least one character and ends at its first colon, so
/// `"Time: 4:12"` → `"4:12"` and an unlabeled fragment comes back unchanged.
pub fn strip_label(s: &str) -> &str {
    let mut chars = s.char_indices();
    // the label is never empty
    if chars.next().is_none() { return s; }
    for (i, ch) in chars {
        if ch == ':' {
            let rest = &s[i + 1..];
            return rest.strip_prefix(' ').unwrap_or(rest);
        }
    }
    s
}

/// Leading ASCII digits of `s` (after trimming), if any.
pub fn leading_digits(s: &str) -> Option<&str> {
    let t = s.trim_start();
    let end = t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());
    if end == 0 { None } else { Some(&t[..end]) }
}
