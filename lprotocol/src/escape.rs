//! Minimal HTML escaping for untrusted reply text.

/// Escapes `&`, `<`, and `>`. Must run before any markup is injected so
/// model output is never treated as trusted HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }

    escaped
}
