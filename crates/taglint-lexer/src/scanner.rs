use crate::token::{Span, TagKind, TagToken};

/// Line-oriented tag scanner.
///
/// Finds every non-overlapping substring of the shape
/// `< [/] name [attributes] [/] >` in a single line and classifies it.
/// Everything between the name and the terminating `>` is attribute
/// content: it is never searched for nested tags, and only a `/` sitting
/// immediately before the `>` marks the tag self-closing.
///
/// The scan is strictly single-line. A tag whose `<...>` span crosses a
/// line boundary is not recognized. Tags inside string literals or
/// comments are not excluded either; both are known limitations of the
/// lexical approach, kept as-is.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    tokens: Vec<TagToken>,
}

impl Scanner {
    /// Create a scanner for one line of source. `number` is the 1-based
    /// line number stamped on every token.
    pub fn new(line: &str, number: usize) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
            line: number,
            tokens: Vec::new(),
        }
    }

    /// Scan a single line, returning its tag tokens in order of appearance.
    pub fn scan_line(line: &str, number: usize) -> Vec<TagToken> {
        let mut scanner = Scanner::new(line, number);
        scanner.scan_tokens();
        scanner.tokens
    }

    /// Scan a whole source, line by line. Lines are numbered from 1.
    pub fn scan(source: &str) -> Vec<TagToken> {
        let mut tokens = Vec::new();
        for (idx, line) in source.split('\n').enumerate() {
            tokens.extend(Scanner::scan_line(line, idx + 1));
        }
        tokens
    }

    /// Scan all tag tokens out of the line.
    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            if self.peek() == '<' {
                self.scan_tag();
            } else {
                self.advance();
            }
        }
    }

    /// Attempt to read one tag starting at the current `<`.
    ///
    /// On success the scanner is left just past the terminating `>`. On
    /// failure (no name, or no `>` left on the line) no token is emitted
    /// and the scanner resumes immediately after the `<`, so a later `<`
    /// on the same line still gets its chance.
    fn scan_tag(&mut self) {
        let start = self.pos;
        let mut cursor = start + 1;

        let closing = self.char_at(cursor) == Some('/');
        if closing {
            cursor += 1;
        }

        let name_start = cursor;
        while self.char_at(cursor).is_some_and(is_name_char) {
            cursor += 1;
        }
        if cursor == name_start {
            // `<` not followed by a tag name; not a tag.
            self.pos = start + 1;
            return;
        }
        let name: String = self.chars[name_start..cursor].iter().collect();

        // The tag extends to the first `>` on the line, swallowing any
        // interior `<` as attribute content.
        let mut gt = cursor;
        while let Some(c) = self.char_at(gt) {
            if c == '>' {
                break;
            }
            gt += 1;
        }
        if self.char_at(gt).is_none() {
            self.pos = start + 1;
            return;
        }

        let self_closing = gt > cursor && self.chars[gt - 1] == '/';
        let kind = if self_closing {
            TagKind::SelfClose
        } else if closing {
            TagKind::Close
        } else {
            TagKind::Open
        };

        let span = Span::new(start, gt + 1, self.line, start + 1);
        self.tokens.push(TagToken::new(kind, name, span));
        self.pos = gt + 1;
    }

    // --- Helpers ---

    fn char_at(&self, idx: usize) -> Option<char> {
        self.chars.get(idx).copied()
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.pos]
        }
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}

/// Tag names are ASCII letters, digits, and `.` (component names like
/// `Foo.Bar` keep the dot).
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}
