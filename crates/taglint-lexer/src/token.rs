/// A position in source text, tracking line and column for error reporting.
///
/// `start` and `end` are character offsets within the token's line
/// (the scanner works a line at a time); `line` is 1-based, `column`
/// is the 1-based column of the opening `<`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// Classification of a tag token.
///
/// A tag carrying both a leading and a trailing slash (`</x/>`) classifies
/// as `SelfClose`: the trailing slash wins, so such a tag never reaches the
/// closing-tag logic downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `<name ...>`
    Open,
    /// `</name ...>`
    Close,
    /// `<name ... />` (or `</name ... />`)
    SelfClose,
}

/// A tag token produced by the scanner.
///
/// `name` is the raw tag name, one or more ASCII letters, digits, or `.`
/// characters, preserved case-sensitively (`Foo.Bar` stays `Foo.Bar`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    pub kind: TagKind,
    pub name: String,
    pub span: Span,
}

impl TagToken {
    pub fn new(kind: TagKind, name: String, span: Span) -> Self {
        Self { kind, name, span }
    }
}

/// Void elements: tags that never take a closing tag, however written.
/// Checked case-sensitively, before any nesting logic sees the token.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Check if a tag name is a void element.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}
