//! Tutor reply protocol: sentinel directive extraction and safe rendering.
//!
//! Model replies carry structured instructional intent inside free text:
//! a double-brace sentinel span for multiple-choice options or a
//! code-editor request, plus markdown-lite prose with fenced code, math
//! delimiters, and quotations. This crate turns a raw reply into a
//! [`ParsedReply`] (directive extracted, display text cleaned) and then
//! into an ordered sequence of [`RenderSegment`] values safe for
//! structured display.
//!
//! Both stages are pure functions that never fail: malformed or partial
//! syntax degrades to literal text.
//!
//! ```rust
//! use lcommon::CourseCategory;
//! use lprotocol::{parse_reply, render_reply, RenderSegment};
//!
//! let reply = parse_reply("Is 2+2=4? {{Yes|No}}");
//! assert_eq!(reply.display_text, "Is 2+2=4?");
//! assert_eq!(reply.options.as_deref(), Some(&["Yes".to_string(), "No".to_string()][..]));
//!
//! let segments = render_reply(&reply.display_text, CourseCategory::Math);
//! assert!(matches!(segments[0], RenderSegment::PlainText(_)));
//! ```

mod escape;
mod highlight;
mod render;
mod sentinel;
mod types;

pub mod prelude {
    pub use crate::{
        ParsedReply, RenderSegment, escape_html, highlight_code, parse_reply, render_reply,
    };
}

pub use escape::escape_html;
pub use highlight::highlight_code;
pub use render::render_reply;
pub use sentinel::parse_reply;
pub use types::{ParsedReply, RenderSegment};
