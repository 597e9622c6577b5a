//! Markup stripping for console lines flagged `is_markup`.
//!
//! The service occasionally sends status lines containing simple inline
//! markup (`<b>`, `<span class=..>`). A terminal renders the text content,
//! so tags are removed and the handful of entities that appear in practice
//! are decoded.

/// Remove `<...>` tags and decode common entities.
///
/// An unterminated `<` is kept verbatim rather than swallowing the rest of
/// the line.
pub fn strip_markup_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                // No closing bracket; keep the tail as-is
                out.push_str(&rest[open..]);
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);

    decode_entities(&out)
}

fn decode_entities(input: &str) -> String {
    input
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
