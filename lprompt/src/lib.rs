//! System-instruction composition for tutoring conversations.
//!
//! The composer turns a [`lcommon::CourseContext`] into the single
//! instruction string that pins the external model's behavior for one
//! course: a context clause, a persona clause picked by category, and a
//! rules clause restating the sentinel grammars. The protocol is stateless
//! from the model's point of view, so callers resend this string on every
//! turn.
//!
//! ```rust
//! use lcommon::{CourseCategory, CourseContext};
//! use lprompt::compose_system_instruction;
//!
//! let course = CourseContext::new("Intro to Loops", CourseCategory::Programming)
//!     .with_syllabus(r#"["for-loops","while-loops"]"#);
//! let instruction = compose_system_instruction(&course);
//!
//! assert!(instruction.contains("Intro to Loops"));
//! assert!(instruction.contains("for-loops, while-loops"));
//! assert!(instruction.contains("{{CODE_REQUEST}}"));
//! ```

mod composer;
mod persona;

pub mod prelude {
    pub use crate::{
        compose_system_instruction, extract_topic_array, persona, syllabus_request_prompt,
        syllabus_topics,
    };
}

pub use composer::{
    compose_system_instruction, extract_topic_array, syllabus_request_prompt, syllabus_topics,
};
pub use persona::persona;
