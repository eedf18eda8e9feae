//! Shared utilities and strongly-typed common values for workspace crates.
//!
//! ```rust
//! use lcommon::{ChatTurn, CourseCategory, CourseContext, SessionId, Speaker};
//!
//! let session = SessionId::from("session-1");
//! let course = CourseContext::new("Intro to Loops", CourseCategory::Programming)
//!     .with_syllabus(r#"["for-loops","while-loops"]"#);
//! let turn = ChatTurn::user("How do I exit a loop early?");
//!
//! assert_eq!(session.as_str(), "session-1");
//! assert_eq!(course.category, CourseCategory::Programming);
//! assert_eq!(turn.speaker, Speaker::User);
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use lcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Cross-crate identifier newtypes.
    //!
    //! ```rust
    //! use lcommon::SessionId;
    //!
    //! let session = SessionId::new("session-42");
    //! assert_eq!(session.to_string(), "session-42");
    //! ```

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SessionId(String);

    impl SessionId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for SessionId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for SessionId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for SessionId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub mod course {
    //! Course metadata consumed by the prompt composer and renderer.
    //!
    //! The syllabus is carried as the raw stored string: it may be a JSON
    //! array of topics, free text, or absent. Decoding and fallback are the
    //! prompt composer's concern.
    //!
    //! ```rust
    //! use lcommon::{CourseCategory, CourseContext};
    //!
    //! let course = CourseContext::new("Calculus I", CourseCategory::Math);
    //! assert!(course.syllabus.is_none());
    //! assert_eq!(CourseCategory::parse("programming"), CourseCategory::Programming);
    //! assert_eq!(CourseCategory::parse("astrology"), CourseCategory::Other);
    //! ```

    use std::fmt::{Display, Formatter};

    /// Closed set of course subject categories. Unknown inputs map to
    /// [`CourseCategory::Other`], never to an error.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum CourseCategory {
        Math,
        Programming,
        Letters,
        #[default]
        Other,
    }

    impl CourseCategory {
        pub fn parse(value: &str) -> Self {
            match value.trim().to_ascii_lowercase().as_str() {
                "math" | "mathematics" => Self::Math,
                "programming" | "code" => Self::Programming,
                "letters" | "literature" => Self::Letters,
                _ => Self::Other,
            }
        }

        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Math => "math",
                Self::Programming => "programming",
                Self::Letters => "letters",
                Self::Other => "other",
            }
        }
    }

    impl Display for CourseCategory {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(self.as_str())
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CourseContext {
        pub title: String,
        pub category: CourseCategory,
        pub syllabus: Option<String>,
    }

    impl CourseContext {
        pub fn new(title: impl Into<String>, category: CourseCategory) -> Self {
            Self {
                title: title.into(),
                category,
                syllabus: None,
            }
        }

        pub fn with_syllabus(mut self, syllabus: impl Into<String>) -> Self {
            self.syllabus = Some(syllabus.into());
            self
        }
    }
}

pub mod turn {
    //! Conversation turn primitives.
    //!
    //! Turns are immutable once created; the surrounding application owns
    //! the ordered log they are appended to.
    //!
    //! ```rust
    //! use lcommon::{ChatTurn, Speaker};
    //!
    //! let turn = ChatTurn::model("Is 2+2=4? {{Yes|No}}");
    //! assert_eq!(turn.speaker, Speaker::Model);
    //! assert!(turn.text.contains("{{"));
    //! ```

    use std::time::SystemTime;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Speaker {
        User,
        Model,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct ChatTurn {
        pub speaker: Speaker,
        pub text: String,
        pub created_at: SystemTime,
    }

    impl ChatTurn {
        pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
            Self {
                speaker,
                text: text.into(),
                created_at: SystemTime::now(),
            }
        }

        pub fn user(text: impl Into<String>) -> Self {
            Self::new(Speaker::User, text)
        }

        pub fn model(text: impl Into<String>) -> Self {
            Self::new(Speaker::Model, text)
        }
    }
}

pub use context::SessionId;
pub use course::{CourseCategory, CourseContext};
pub use future::BoxFuture;
pub use turn::{ChatTurn, Speaker};
