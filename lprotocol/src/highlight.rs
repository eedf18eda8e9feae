//! Safe single-pass syntax highlighter for fenced code bodies.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::escape_html;

// One combined alternation so each character is claimed by at most one
// token class: strings, then comments, then keywords, then numbers.
// A keyword or number inside an already-matched string or comment span
// can never be re-matched.
static TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?m)(?P<string>"[^"\n]*"|'[^'\n]*'|`[^`]*`)"#,
        r"|(?P<comment>//[^\n]*|/\*[\s\S]*?\*/|#[^\n]*)",
        r"|(?P<keyword>\b(?:",
        "class|struct|enum|interface|type|impl|implements|extends|",
        "public|private|protected|function|fn|def|const|let|var|",
        "if|else|for|while|loop|match|break|continue|return|",
        "import|export|from|async|await|new|this|self|typeof|",
        "void|int|float|double|string|bool",
        r")\b)",
        r"|(?P<number>\b\d+(?:\.\d+)?\b)",
    ))
    .expect("token pattern")
});

/// Escapes the code body, then wraps recognized tokens in style spans.
///
/// Escaping happens before tokenizing so the injected span markup is never
/// itself escaped, and a `<script>` in the source can only ever reach the
/// output as `&lt;script&gt;`. Unrecognized text passes through unchanged.
pub fn highlight_code(code: &str) -> String {
    if code.is_empty() {
        return String::new();
    }

    let safe = escape_html(code);
    TOKENS
        .replace_all(&safe, |captures: &Captures| {
            let token = &captures[0];
            let class = if captures.name("string").is_some() {
                "code-string"
            } else if captures.name("comment").is_some() {
                "code-comment"
            } else if captures.name("keyword").is_some() {
                "code-keyword"
            } else {
                "code-number"
            };

            format!("<span class=\"{class}\">{token}</span>")
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping_happens_before_token_spans() {
        let html = highlight_code("if x < 3 { return; }");
        assert!(html.contains("&lt;"));
        assert!(html.contains("<span class=\"code-keyword\">if</span>"));
        assert!(html.contains("<span class=\"code-keyword\">return</span>"));
    }

    #[test]
    fn script_tags_never_survive_unescaped() {
        let html = highlight_code("<script>alert('x')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn keywords_inside_strings_are_not_rehighlighted() {
        let html = highlight_code("let msg = \"return if else\";");
        assert!(html.contains("<span class=\"code-string\">\"return if else\"</span>"));
        assert!(!html.contains("\"return</span>"));
    }

    #[test]
    fn numbers_inside_comments_are_not_rehighlighted() {
        let html = highlight_code("// retry 3 times");
        assert!(html.contains("<span class=\"code-comment\">// retry 3 times</span>"));
        assert!(!html.contains("code-number"));
    }

    #[test]
    fn numbers_and_decimals_get_spans() {
        let html = highlight_code("let pi = 3.14;");
        assert!(html.contains("<span class=\"code-number\">3.14</span>"));
    }

    #[test]
    fn block_comments_span_lines() {
        let html = highlight_code("/* first\nsecond */ let x = 1;");
        assert!(html.contains("<span class=\"code-comment\">/* first\nsecond */</span>"));
        assert!(html.contains("<span class=\"code-keyword\">let</span>"));
    }

    #[test]
    fn plain_identifiers_pass_through() {
        assert_eq!(highlight_code("frobnicate"), "frobnicate");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(highlight_code(""), "");
    }
}
