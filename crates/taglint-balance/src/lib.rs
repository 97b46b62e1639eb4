//! taglint Balance
//!
//! The structural checks behind `taglint`: tag nesting balance
//! ([`check_lines`] / [`check_source`]) and delimiter balance
//! ([`check_braces`]). Both are pure single-pass functions of their input
//! with no process-wide state; they never touch the filesystem.
//!
//! # Example
//!
//! ```
//! use taglint_balance::{check_source, BalanceError};
//!
//! assert!(check_source("<ul><li>one</li></ul>").is_ok());
//!
//! let err = check_source("</div>").unwrap_err();
//! assert_eq!(
//!     err,
//!     BalanceError::UnexpectedClosing { name: "div".into(), line: 1 }
//! );
//! ```

pub mod braces;
pub mod checker;

pub use braces::{check_braces, BraceIssue, OpenDelimiter};
pub use checker::{check_lines, check_source};

/// The first tag-structure violation found in a scan.
///
/// The checker short-circuits: one scan surfaces at most one error, and
/// later problems in the same input stay undiscovered until the input is
/// fixed and re-checked.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BalanceError {
    /// A closing tag appeared with no open ancestor at all.
    #[error("Unexpected closing tag </{name}> at line {line}")]
    UnexpectedClosing { name: String, line: usize },

    /// A closing tag appeared while the innermost open tag has a
    /// different name.
    #[error("Mismatched closing tag. Expected </{expected}> but found </{found}> at line {line}")]
    MismatchedClosing {
        expected: String,
        found: String,
        line: usize,
    },

    /// Input ran out with tags still open. `open` is the nesting stack in
    /// push order: outermost first, innermost last.
    #[error("Unclosed tags at EOF: {open:?}")]
    UnclosedAtEof { open: Vec<String> },
}
