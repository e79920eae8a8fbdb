//! # captionmark
//!
//! Finds URLs, `@mentions`, `#hashtags` and a leading reply mention in short
//! social text, and optionally renders each one as a link.
//!
//! ```
//! use captionmark_engine::{Parser, ParserOptions};
//!
//! let parser = Parser::new(ParserOptions::default()).unwrap();
//! let result = parser.parse("@jane look at #sunset on www.example.com");
//!
//! assert_eq!(result.reply.as_deref(), Some("jane"));
//! assert_eq!(result.user_texts(), ["jane"]);
//! assert_eq!(result.tag_texts(), ["sunset"]);
//! assert_eq!(result.url_texts(), ["www.example.com"]);
//! assert!(result.html.unwrap().contains(r#"href="https://www.example.com""#));
//! ```

pub mod disambiguate;
pub mod engine;
pub mod error;
pub mod format;
pub mod options;
pub mod patterns;
pub mod result;
pub mod span;

// Re-export key types for easier usage
pub use engine::{Parser, parse, reply::detect_reply};
pub use error::EntityError;
pub use format::{DefaultFormatter, Formatter, LinkTargets};
pub use options::{ParserOptions, UNLIMITED_URL_LENGTH};
pub use result::{Entity, EntityKind, ParseResult};
pub use span::Span;
