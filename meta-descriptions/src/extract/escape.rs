//! HTML attribute escaping.

/// Returns the escaped form of a character, if it needs escaping.
const fn entity(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#x27;"),
        _ => None,
    }
}

/// Escapes `&`, `<`, `>` and both quote characters so the text is safe
/// inside a double- or single-quoted attribute value.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match entity(ch) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(ch),
        }
    }
    out
}

/// Number of chars `ch` occupies once escaped.
#[must_use]
pub const fn escaped_len(ch: char) -> usize {
    match entity(ch) {
        Some(escaped) => escaped.len(),
        None => 1,
    }
}

/// Escapes the longest prefix of `text` whose escaped form fits in
/// `max_chars` chars. Entities are never split.
pub(crate) fn escape_html_bounded(text: &str, max_chars: usize) -> String {
    let mut out = String::with_capacity(text.len().min(max_chars * 4));
    let mut used = 0;
    for ch in text.chars() {
        let width = escaped_len(ch);
        if used + width > max_chars {
            break;
        }
        used += width;
        match entity(ch) {
            Some(escaped) => out.push_str(escaped),
            None => out.push(ch),
        }
    }
    out
}
