//! taglint Lexer
//!
//! Finds markup-like tags (`<div>`, `</div>`, `<br/>`, `<Foo.Bar ... />`)
//! in source text, one line at a time, and turns each into a typed
//! [`TagToken`]. Attribute content is skipped, never parsed. The scan is
//! purely lexical: it does not know about strings, comments, or tags
//! spanning lines, and it never fails; malformed input just produces
//! fewer tokens.
//!
//! # Example
//!
//! ```
//! use taglint_lexer::{Scanner, TagKind};
//!
//! let tokens = Scanner::scan_line("<div class=\"hero\">", 1);
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].kind, TagKind::Open);
//! assert_eq!(tokens[0].name, "div");
//! ```

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{is_void_element, Span, TagKind, TagToken, VOID_ELEMENTS};
