//! Sentinel directive extraction from raw reply text.

use std::sync::LazyLock;

use regex::Regex;

use crate::ParsedReply;

/// Content marking a code-editor request inside a sentinel span.
pub const CODE_REQUEST: &str = "CODE_REQUEST";

static DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.+?)\}\}").expect("sentinel pattern"));

/// Extracts at most one directive from a raw reply.
///
/// The first `{{...}}` span wins; any later double-brace spans are left as
/// literal text. A span whose content contains `CODE_REQUEST` sets the
/// code-request flag and suppresses options regardless of pipe characters.
/// Otherwise the content splits on `|`, each option trimmed, empty pieces
/// dropped. Exactly the first span is removed from the display text.
///
/// Pure and infallible: input without a span comes back unchanged.
pub fn parse_reply(raw: &str) -> ParsedReply {
    let Some(captures) = DIRECTIVE.captures(raw) else {
        return ParsedReply::plain(raw);
    };

    let span = captures.get(0).expect("whole match");
    let content = captures.get(1).map(|group| group.as_str()).unwrap_or("");

    let mut display_text = String::with_capacity(raw.len());
    display_text.push_str(&raw[..span.start()]);
    display_text.push_str(&raw[span.end()..]);
    let display_text = display_text.trim().to_string();

    if content.contains(CODE_REQUEST) {
        return ParsedReply {
            display_text,
            options: None,
            is_code_request: true,
        };
    }

    let options: Vec<String> = content
        .split('|')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();

    ParsedReply {
        display_text,
        options: (!options.is_empty()).then_some(options),
        is_code_request: false,
    }
}
