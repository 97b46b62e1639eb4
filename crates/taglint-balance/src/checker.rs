//! The tag balance validator: a single pass over the input lines with a
//! function-local nesting stack. First violation wins; a clean pass over
//! every line with an empty stack at the end is the balanced verdict.

use crate::BalanceError;
use taglint_lexer::{is_void_element, Scanner, TagKind};

/// Validate tag nesting over any ordered sequence of lines.
///
/// Lines are numbered from 1 in scan order; tags within a line are
/// handled left to right. Void elements are ignored outright, whatever
/// their syntax (`<br>`, `</br>`, `<br/>` all count for nothing), and a
/// self-closing tag is taken as balanced on the spot even for elements
/// where self-closing makes no semantic sense. Names match by exact,
/// case-sensitive equality.
///
/// The input can be any line source (`str::split('\n')`, lines read from
/// a file); the checker only ever looks at one line at a time.
pub fn check_lines<I, S>(lines: I) -> Result<(), BalanceError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut open: Vec<String> = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        for token in Scanner::scan_line(line.as_ref(), idx + 1) {
            if is_void_element(&token.name) {
                continue;
            }
            match token.kind {
                TagKind::SelfClose => {}
                TagKind::Close => match open.pop() {
                    None => {
                        return Err(BalanceError::UnexpectedClosing {
                            name: token.name,
                            line: token.span.line,
                        });
                    }
                    Some(expected) if expected != token.name => {
                        return Err(BalanceError::MismatchedClosing {
                            expected,
                            found: token.name,
                            line: token.span.line,
                        });
                    }
                    Some(_) => {}
                },
                TagKind::Open => open.push(token.name),
            }
        }
    }

    if open.is_empty() {
        Ok(())
    } else {
        Err(BalanceError::UnclosedAtEof { open })
    }
}

/// Validate tag nesting over a whole source string.
pub fn check_source(source: &str) -> Result<(), BalanceError> {
    check_lines(source.split('\n'))
}
