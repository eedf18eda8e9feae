//! Parsed-reply and render-segment value types.

/// Result of sentinel extraction over one raw model reply.
///
/// Derived, never stored: recomputing from the same input yields the same
/// value. `options` and `is_code_request` are mutually exclusive; the
/// code request wins when both grammars appear in the first sentinel span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    /// Reply text with the first sentinel span removed.
    pub display_text: String,
    /// Multiple-choice options, in reply order, each trimmed.
    pub options: Option<Vec<String>>,
    /// Whether the reply asked the UI to reveal the code editor.
    pub is_code_request: bool,
}

impl ParsedReply {
    /// A reply carrying no directive at all.
    pub fn plain(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            options: None,
            is_code_request: false,
        }
    }
}

/// One unit of the displayable sequence produced from a reply.
///
/// Segment order matches the left-to-right order of the source text.
/// `PlainText` and the `html` half of `CodeBlock` hold markup with
/// HTML-special characters already escaped; `MathBlock` and `Quote` hold
/// the raw extracted text for the consumer to style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderSegment {
    PlainText(String),
    CodeBlock { source: String, html: String },
    MathBlock(String),
    Quote(String),
}

impl RenderSegment {
    pub fn is_plain_text(&self) -> bool {
        matches!(self, Self::PlainText(_))
    }

    pub fn is_code_block(&self) -> bool {
        matches!(self, Self::CodeBlock { .. })
    }
}
