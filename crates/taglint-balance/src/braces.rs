//! Delimiter balance: `{ }`, `( )`, `[ ]` over the whole source.
//!
//! Unlike the tag checker this one accumulates issues and keeps
//! scanning; one pass reports every problem site. The scan has no
//! string or comment awareness (same limitation as the tag scan), so a
//! stray `}` inside a string literal is reported.

use std::fmt;

/// An opening delimiter still on the stack, with where it appeared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenDelimiter {
    pub delimiter: char,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for OpenDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' at {}:{}", self.delimiter, self.line, self.column)
    }
}

/// A single delimiter-balance problem.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BraceIssue {
    /// A closing delimiter with nothing open.
    #[error("Unexpected closing '{found}' at line {line}, column {column}")]
    UnexpectedClosing {
        found: char,
        line: usize,
        column: usize,
    },

    /// A closing delimiter that does not match the innermost opener.
    #[error(
        "Mismatched closing '{found}' at line {line}, column {column}. \
         Expected '{expected}' for opening at line {opened_line}, column {opened_column}"
    )]
    Mismatched {
        found: char,
        line: usize,
        column: usize,
        expected: char,
        opened_line: usize,
        opened_column: usize,
    },

    /// Openers left on the stack when input ran out, in push order.
    #[error("Unclosed delimiters at EOF: {}", list_open(.open))]
    UnclosedAtEof { open: Vec<OpenDelimiter> },
}

fn list_open(open: &[OpenDelimiter]) -> String {
    open.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn expected_closer(opener: char) -> char {
    match opener {
        '{' => '}',
        '(' => ')',
        _ => ']',
    }
}

/// Scan the whole source for delimiter balance, returning every issue
/// found in scan order. An empty vector means balanced.
///
/// On a mismatch the innermost opener is popped and the scan continues,
/// so one bad closer produces one issue rather than invalidating the
/// rest of the file.
pub fn check_braces(source: &str) -> Vec<BraceIssue> {
    let mut issues = Vec::new();
    let mut stack: Vec<OpenDelimiter> = Vec::new();
    let mut line = 1;
    let mut column = 1;

    for c in source.chars() {
        match c {
            '{' | '(' | '[' => stack.push(OpenDelimiter {
                delimiter: c,
                line,
                column,
            }),
            '}' | ')' | ']' => match stack.pop() {
                None => issues.push(BraceIssue::UnexpectedClosing {
                    found: c,
                    line,
                    column,
                }),
                Some(opened) => {
                    let expected = expected_closer(opened.delimiter);
                    if expected != c {
                        issues.push(BraceIssue::Mismatched {
                            found: c,
                            line,
                            column,
                            expected,
                            opened_line: opened.line,
                            opened_column: opened.column,
                        });
                    }
                }
            },
            _ => {}
        }

        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    if !stack.is_empty() {
        issues.push(BraceIssue::UnclosedAtEof { open: stack });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // =========================================================================
    // Balanced inputs
    // =========================================================================

    #[test]
    fn test_empty_source() {
        assert_eq!(check_braces(""), vec![]);
    }

    #[test]
    fn test_balanced_mixed() {
        assert_eq!(check_braces("fn main() { let x = [1, (2)]; }"), vec![]);
    }

    #[test]
    fn test_balanced_across_lines() {
        assert_eq!(check_braces("{\n  (\n    []\n  )\n}"), vec![]);
    }

    // =========================================================================
    // Unexpected closers
    // =========================================================================

    #[test]
    fn test_unexpected_closing() {
        assert_eq!(
            check_braces(")"),
            vec![BraceIssue::UnexpectedClosing {
                found: ')',
                line: 1,
                column: 1,
            }]
        );
    }

    #[test]
    fn test_scan_continues_after_unexpected_closing() {
        assert_eq!(
            check_braces("}]"),
            vec![
                BraceIssue::UnexpectedClosing {
                    found: '}',
                    line: 1,
                    column: 1,
                },
                BraceIssue::UnexpectedClosing {
                    found: ']',
                    line: 1,
                    column: 2,
                },
            ]
        );
    }

    // =========================================================================
    // Mismatches
    // =========================================================================

    #[test]
    fn test_mismatched_closing() {
        assert_eq!(
            check_braces("(]"),
            vec![BraceIssue::Mismatched {
                found: ']',
                line: 1,
                column: 2,
                expected: ')',
                opened_line: 1,
                opened_column: 1,
            }]
        );
    }

    #[test]
    fn test_interleaved_pairs_report_both_sides() {
        // `([)]`: the `)` closes `[` wrongly, then the `]` closes `(`
        // wrongly. Two issues, stack empty at the end.
        assert_eq!(
            check_braces("([)]"),
            vec![
                BraceIssue::Mismatched {
                    found: ')',
                    line: 1,
                    column: 3,
                    expected: ']',
                    opened_line: 1,
                    opened_column: 2,
                },
                BraceIssue::Mismatched {
                    found: ']',
                    line: 1,
                    column: 4,
                    expected: ')',
                    opened_line: 1,
                    opened_column: 1,
                },
            ]
        );
    }

    #[test]
    fn test_mismatch_then_unclosed() {
        let issues = check_braces("((]");
        assert_eq!(issues.len(), 2);
        assert!(matches!(issues[0], BraceIssue::Mismatched { .. }));
        assert!(matches!(
            &issues[1],
            BraceIssue::UnclosedAtEof { open } if open.len() == 1
        ));
    }

    // =========================================================================
    // Unclosed at EOF
    // =========================================================================

    #[test]
    fn test_unclosed_at_eof_in_push_order() {
        assert_eq!(
            check_braces("{\n  ("),
            vec![BraceIssue::UnclosedAtEof {
                open: vec![
                    OpenDelimiter {
                        delimiter: '{',
                        line: 1,
                        column: 1,
                    },
                    OpenDelimiter {
                        delimiter: '(',
                        line: 2,
                        column: 3,
                    },
                ],
            }]
        );
    }

    // =========================================================================
    // Known limitation and display
    // =========================================================================

    #[test]
    fn test_no_string_awareness() {
        // The closer inside the string literal is reported; the scan has
        // no notion of strings.
        let issues = check_braces(r#"let s = "}";"#);
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], BraceIssue::UnexpectedClosing { found: '}', .. }));
    }

    #[test]
    fn test_mismatched_display() {
        let issues = check_braces("(]");
        assert_eq!(
            issues[0].to_string(),
            "Mismatched closing ']' at line 1, column 2. \
             Expected ')' for opening at line 1, column 1"
        );
    }

    #[test]
    fn test_unclosed_display() {
        let issues = check_braces("{(");
        assert_eq!(
            issues[0].to_string(),
            "Unclosed delimiters at EOF: '{' at 1:1, '(' at 1:2"
        );
    }
}
