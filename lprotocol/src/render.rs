//! Display-text rendering into ordered, category-aware segments.

use std::sync::LazyLock;

use lcommon::CourseCategory;
use regex::Regex;

use crate::{RenderSegment, escape_html, highlight_code};

static FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("fence pattern"));

static MATH_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\$(.+?)\$\$").expect("math block pattern"));

static QUOTE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^> (.*)$").expect("quote line pattern"));

static LONG_QUOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]{20,}?)""#).expect("long quote pattern"));

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));

static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\* (.*)$").expect("list item pattern"));

static INLINE_MATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([^$\n]+?)\$").expect("inline math pattern"));

static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_+#.\-]{1,20}$").expect("language tag pattern"));

/// Renders directive-free display text into an ordered segment sequence.
///
/// Fenced code spans become [`RenderSegment::CodeBlock`]s in every
/// category. `Math` courses additionally split `$$...$$` blocks out of the
/// prose and style inline `$...$` spans; `Letters` courses extract `> `
/// lines and long double-quoted passages as [`RenderSegment::Quote`]s.
/// Whatever prose remains gets markdown-lite formatting with HTML escaping
/// applied first.
///
/// Never fails: an unterminated fence, `$$`, or quote simply stays literal
/// for the rest of its span.
pub fn render_reply(text: &str, category: CourseCategory) -> Vec<RenderSegment> {
    let mut segments = Vec::new();
    if text.is_empty() {
        return segments;
    }

    let mut cursor = 0;
    for found in FENCE.captures_iter(text) {
        let span = found.get(0).expect("whole match");
        if span.start() > cursor {
            render_plain(&text[cursor..span.start()], category, &mut segments);
        }

        segments.push(code_segment(found.get(1).map_or("", |group| group.as_str())));
        cursor = span.end();
    }

    if cursor < text.len() {
        render_plain(&text[cursor..], category, &mut segments);
    }

    segments
}

fn code_segment(body: &str) -> RenderSegment {
    let source = strip_language_tag(body);
    RenderSegment::CodeBlock {
        html: highlight_code(source),
        source: source.to_string(),
    }
}

// The first fence line is a language tag like `rust` or `c++`, not code.
fn strip_language_tag(body: &str) -> &str {
    match body.split_once('\n') {
        Some((first, rest)) if first.trim().is_empty() || LANGUAGE_TAG.is_match(first.trim()) => {
            rest
        }
        _ => body,
    }
}

fn render_plain(chunk: &str, category: CourseCategory, segments: &mut Vec<RenderSegment>) {
    if category == CourseCategory::Letters {
        render_quotes(chunk, category, segments);
    } else {
        render_math(chunk, category, segments);
    }
}

fn render_quotes(chunk: &str, category: CourseCategory, segments: &mut Vec<RenderSegment>) {
    let mut cursor = 0;
    loop {
        let rest = &chunk[cursor..];
        let line = QUOTE_LINE.captures(rest);
        let quoted = LONG_QUOTE.captures(rest);
        let earliest = match (line, quoted) {
            (None, None) => break,
            (Some(found), None) | (None, Some(found)) => found,
            (Some(line), Some(quoted)) => {
                let line_at = line.get(0).expect("whole match").start();
                let quoted_at = quoted.get(0).expect("whole match").start();
                if line_at <= quoted_at { line } else { quoted }
            }
        };

        let span = earliest.get(0).expect("whole match");
        if span.start() > 0 {
            render_math(&rest[..span.start()], category, segments);
        }

        let passage = earliest.get(1).map_or("", |group| group.as_str());
        segments.push(RenderSegment::Quote(passage.to_string()));
        cursor += span.end();
    }

    if cursor < chunk.len() {
        render_math(&chunk[cursor..], category, segments);
    }
}

fn render_math(chunk: &str, category: CourseCategory, segments: &mut Vec<RenderSegment>) {
    if category != CourseCategory::Math {
        push_plain(chunk, category, segments);
        return;
    }

    let mut cursor = 0;
    for found in MATH_BLOCK.captures_iter(chunk) {
        let span = found.get(0).expect("whole match");
        if span.start() > cursor {
            push_plain(&chunk[cursor..span.start()], category, segments);
        }

        let formula = found.get(1).map_or("", |group| group.as_str());
        segments.push(RenderSegment::MathBlock(formula.trim().to_string()));
        cursor = span.end();
    }

    if cursor < chunk.len() {
        push_plain(&chunk[cursor..], category, segments);
    }
}

fn push_plain(text: &str, category: CourseCategory, segments: &mut Vec<RenderSegment>) {
    if text.is_empty() {
        return;
    }

    segments.push(RenderSegment::PlainText(format_inline(text, category)));
}

// Escaping runs before any markup is injected; the replacements below only
// ever see already-escaped text.
fn format_inline(text: &str, category: CourseCategory) -> String {
    let mut html = escape_html(text);
    html = BOLD.replace_all(&html, "<strong>$1</strong>").into_owned();
    html = LIST_ITEM.replace_all(&html, "<li>$1</li>").into_owned();
    if category == CourseCategory::Math {
        html = INLINE_MATH
            .replace_all(&html, "<span class=\"math-inline\">$1</span>")
            .into_owned();
    }

    html.replace('\n', "<br/>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_html(segment: &RenderSegment) -> &str {
        match segment {
            RenderSegment::PlainText(html) => html,
            other => panic!("expected plain text, got {other:?}"),
        }
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(render_reply("", CourseCategory::Other).is_empty());
    }

    #[test]
    fn fenced_code_becomes_a_code_block_in_every_category() {
        for category in [
            CourseCategory::Math,
            CourseCategory::Programming,
            CourseCategory::Letters,
            CourseCategory::Other,
        ] {
            let segments = render_reply("before\n```rust\nlet x = 1;\n```\nafter", category);
            assert_eq!(segments.len(), 3, "category {category}");
            assert!(segments[1].is_code_block());
        }
    }

    #[test]
    fn language_tag_line_is_dropped_from_code() {
        let segments = render_reply("```python\nprint(1)\n```", CourseCategory::Programming);
        match &segments[0] {
            RenderSegment::CodeBlock { source, .. } => assert_eq!(source, "print(1)\n"),
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn first_code_line_survives_when_not_a_tag() {
        let segments = render_reply("```x = 1\ny = 2\n```", CourseCategory::Programming);
        match &segments[0] {
            RenderSegment::CodeBlock { source, .. } => assert_eq!(source, "x = 1\ny = 2\n"),
            other => panic!("expected code block, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_fence_stays_literal() {
        let segments = render_reply("broken ```let x = 1;", CourseCategory::Programming);
        assert_eq!(segments.len(), 1);
        assert!(plain_html(&segments[0]).contains("```let x = 1;"));
    }

    #[test]
    fn math_block_round_trips_formula_exactly() {
        let segments = render_reply("$$x^2$$", CourseCategory::Math);
        assert_eq!(segments, vec![RenderSegment::MathBlock("x^2".to_string())]);
    }

    #[test]
    fn math_blocks_interleave_with_prose_in_order() {
        let segments = render_reply("Recall $$a^2+b^2=c^2$$ from before.", CourseCategory::Math);
        assert_eq!(segments.len(), 3);
        assert!(plain_html(&segments[0]).contains("Recall"));
        assert_eq!(segments[1], RenderSegment::MathBlock("a^2+b^2=c^2".to_string()));
        assert!(plain_html(&segments[2]).contains("from before."));
    }

    #[test]
    fn unterminated_math_block_stays_literal() {
        let segments = render_reply("lonely $$x^2", CourseCategory::Math);
        assert_eq!(segments.len(), 1);
        assert!(plain_html(&segments[0]).contains("$$x^2"));
    }

    #[test]
    fn inline_math_is_styled_only_in_math_courses() {
        let styled = render_reply("solve $x+1$ now", CourseCategory::Math);
        assert!(plain_html(&styled[0]).contains("<span class=\"math-inline\">x+1</span>"));

        let unstyled = render_reply("solve $x+1$ now", CourseCategory::Other);
        assert!(plain_html(&unstyled[0]).contains("$x+1$"));
    }

    #[test]
    fn quote_lines_become_quote_segments_in_letters() {
        let segments = render_reply("As the poet wrote:\n> so much depends\nindeed", CourseCategory::Letters);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1], RenderSegment::Quote("so much depends".to_string()));
    }

    #[test]
    fn long_quoted_runs_become_quote_segments_in_letters() {
        let text = "Note \"a passage comfortably over twenty characters\" here.";
        let segments = render_reply(text, CourseCategory::Letters);
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[1],
            RenderSegment::Quote("a passage comfortably over twenty characters".to_string())
        );
    }

    #[test]
    fn short_quotes_stay_inline_in_letters() {
        let segments = render_reply("just \"short\" words", CourseCategory::Letters);
        assert_eq!(segments.len(), 1);
        assert!(plain_html(&segments[0]).contains("\"short\""));
    }

    #[test]
    fn other_category_never_wraps_quotes() {
        let text = "Note \"a passage comfortably over twenty characters\" here.\n> aside";
        let segments = render_reply(text, CourseCategory::Other);
        assert_eq!(segments.len(), 1);
        assert!(plain_html(&segments[0]).contains("&gt; aside"));
    }

    #[test]
    fn markdown_lite_applies_in_every_category() {
        let segments = render_reply("**key** point\n* first\n* second", CourseCategory::Other);
        let html = plain_html(&segments[0]);
        assert!(html.contains("<strong>key</strong>"));
        assert!(html.contains("<li>first</li>"));
        assert!(html.contains("<li>second</li>"));
        assert!(html.contains("<br/>"));
    }

    #[test]
    fn plain_text_is_escaped_before_markup_injection() {
        let segments = render_reply("**<b>bold</b>**", CourseCategory::Other);
        let html = plain_html(&segments[0]);
        assert_eq!(html, "<strong>&lt;b&gt;bold&lt;/b&gt;</strong>");
    }

    #[test]
    fn segment_order_matches_document_order() {
        let text = "intro\n```\ncode\n```\nmiddle $$f$$ outro";
        let segments = render_reply(text, CourseCategory::Math);
        assert!(segments[0].is_plain_text());
        assert!(segments[1].is_code_block());
        assert!(segments[2].is_plain_text());
        assert_eq!(segments[3], RenderSegment::MathBlock("f".to_string()));
        assert!(segments[4].is_plain_text());
    }
}
