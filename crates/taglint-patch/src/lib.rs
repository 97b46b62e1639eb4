//! taglint Patch
//!
//! Line-range edits on text files: replace an inclusive range, insert
//! before a line, move a block after another line. All positions are
//! 1-based, the way an editor (and the checker's diagnostics) number
//! lines.
//!
//! The splicing itself is pure: [`splice_lines`], [`insert_lines`] and
//! [`move_lines`] work on a `Vec<String>` and never touch a file. The
//! file-level operations are thin read/modify/write wrappers on top.
//! Every operation validates its positions against the actual line
//! count first, so a bad range fails with [`PatchError`] before
//! anything is written.
//!
//! Files are split on `'\n'` and rejoined with `'\n'`: a trailing
//! newline shows up as a final empty entry and survives the round-trip,
//! and CRLF data passes through untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A 1-based inclusive line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered. Only meaningful for a validated range.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    fn validate(&self, line_count: usize) -> Result<(), PatchError> {
        if self.start == 0 || self.end < self.start || self.end > line_count {
            return Err(PatchError::InvalidRange {
                start: self.start,
                end: self.end,
                line_count,
            });
        }
        Ok(())
    }

    fn contains(&self, line: usize) -> bool {
        line >= self.start && line <= self.end
    }
}

/// Patching error: bad positions, or I/O on the underlying file.
#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("line range {start}..={end} is out of bounds for a {line_count}-line file")]
    InvalidRange {
        start: usize,
        end: usize,
        line_count: usize,
    },

    #[error("insert position {line} is out of bounds for a {line_count}-line file")]
    InvalidInsert { line: usize, line_count: usize },

    #[error(
        "move target line {after} must lie outside lines {start}..={end} \
         and within the file ({line_count} lines)"
    )]
    InvalidMoveTarget {
        after: usize,
        start: usize,
        end: usize,
        line_count: usize,
    },
}

/// Replace `range` with `replacement` in place. An empty replacement
/// deletes the range.
pub fn splice_lines(
    lines: &mut Vec<String>,
    range: LineRange,
    replacement: &[String],
) -> Result<(), PatchError> {
    range.validate(lines.len())?;
    lines.splice(range.start - 1..=range.end - 1, replacement.iter().cloned());
    Ok(())
}

/// Insert `inserted` so its first line becomes line `line`. Valid
/// positions run from 1 to one past the last line (append).
pub fn insert_lines(
    lines: &mut Vec<String>,
    line: usize,
    inserted: &[String],
) -> Result<(), PatchError> {
    if line == 0 || line > lines.len() + 1 {
        return Err(PatchError::InvalidInsert {
            line,
            line_count: lines.len(),
        });
    }
    lines.splice(line - 1..line - 1, inserted.iter().cloned());
    Ok(())
}

/// Move the block `range` so it sits immediately after line `after`
/// (numbered before the move). `after == 0` moves the block to the top;
/// `after` may not fall inside the range being moved.
pub fn move_lines(
    lines: &mut Vec<String>,
    range: LineRange,
    after: usize,
) -> Result<(), PatchError> {
    range.validate(lines.len())?;
    if after > lines.len() || range.contains(after) {
        return Err(PatchError::InvalidMoveTarget {
            after,
            start: range.start,
            end: range.end,
            line_count: lines.len(),
        });
    }

    let block: Vec<String> = lines
        .splice(range.start - 1..=range.end - 1, std::iter::empty())
        .collect();
    let at = if after < range.start {
        after
    } else {
        after - range.len()
    };
    lines.splice(at..at, block);
    Ok(())
}

/// Replace lines `range.start..=range.end` of the file with `replacement`.
pub fn replace_range(
    path: &Path,
    range: LineRange,
    replacement: &[String],
) -> Result<(), PatchError> {
    let mut lines = read_lines(path)?;
    splice_lines(&mut lines, range, replacement)?;
    write_lines(path, &lines)
}

/// Insert `inserted` into the file so its first line becomes line `line`.
pub fn insert_at(path: &Path, line: usize, inserted: &[String]) -> Result<(), PatchError> {
    let mut lines = read_lines(path)?;
    insert_lines(&mut lines, line, inserted)?;
    write_lines(path, &lines)
}

/// Move the file's lines `range.start..=range.end` to after line `after`.
pub fn move_range(path: &Path, range: LineRange, after: usize) -> Result<(), PatchError> {
    let mut lines = read_lines(path)?;
    move_lines(&mut lines, range, after)?;
    write_lines(path, &lines)
}

fn read_lines(path: &Path) -> Result<Vec<String>, PatchError> {
    let content = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.split('\n').map(str::to_string).collect())
}

fn write_lines(path: &Path, lines: &[String]) -> Result<(), PatchError> {
    fs::write(path, lines.join("\n")).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })
}
