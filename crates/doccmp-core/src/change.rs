//! Result types produced by the comparison engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// How a line took part in the line-level alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTag {
    /// Present in both documents
    Equal,
    /// Only present in the first document
    Delete,
    /// Only present in the second document
    Insert,
}

impl LineTag {
    /// Two-character marker used by the raw line diff
    pub fn marker(self) -> &'static str {
        match self {
            LineTag::Equal => "  ",
            LineTag::Delete => "- ",
            LineTag::Insert => "+ ",
        }
    }
}

/// One step of the line alignment walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineChange {
    pub tag: LineTag,
    pub text: String,
}

impl LineChange {
    pub fn new(tag: LineTag, text: impl Into<String>) -> Self {
        Self {
            tag,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(LineTag::Equal, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(LineTag::Delete, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(LineTag::Insert, text)
    }

    /// Check if this is an actual change (not a shared line)
    pub fn is_change(&self) -> bool {
        self.tag != LineTag::Equal
    }
}

impl fmt::Display for LineChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag.marker(), self.text)
    }
}

/// Line-level classification of two documents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// Lines matched in both documents, once per matched pair
    pub identical: Vec<String>,
    /// Lines of the first document left unmatched
    pub only_in_first: Vec<String>,
    /// Lines of the second document left unmatched
    pub only_in_second: Vec<String>,
    /// `only_in_first` followed by `only_in_second`
    pub combined_different: Vec<String>,
    /// The alignment walk in order
    pub changes: Vec<LineChange>,
}

impl AlignmentResult {
    /// Number of lines matched in both documents
    pub fn matches(&self) -> usize {
        self.identical.len()
    }

    /// True when neither side has unmatched lines
    pub fn is_identical(&self) -> bool {
        self.combined_different.is_empty()
    }

    /// Iterate over the changed lines of the walk
    pub fn significant_changes(&self) -> impl Iterator<Item = &LineChange> {
        self.changes.iter().filter(|c| c.is_change())
    }
}

/// The kind of a word-level edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditKind {
    /// Old tokens were swapped for new ones
    Replace,
    /// Tokens were added
    Insert,
    /// Tokens were removed
    Delete,
}

impl EditKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EditKind::Replace => "replace",
            EditKind::Insert => "insert",
            EditKind::Delete => "delete",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single non-equal edit between two tokenized lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditOp {
    pub kind: EditKind,
    /// Token span in the first line
    pub old: Range<usize>,
    /// Token span in the second line
    pub new: Range<usize>,
}

impl EditOp {
    pub fn new(kind: EditKind, old: Range<usize>, new: Range<usize>) -> Self {
        Self { kind, old, new }
    }

    /// Tokens of the first line covered by this edit
    pub fn old_slice<'a>(&self, tokens: &'a [&'a str]) -> &'a [&'a str] {
        &tokens[self.old.clone()]
    }

    /// Tokens of the second line covered by this edit
    pub fn new_slice<'a>(&self, tokens: &'a [&'a str]) -> &'a [&'a str] {
        &tokens[self.new.clone()]
    }
}

/// Word-level differences of one position-paired line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDiffEntry {
    /// 0-based index of the pair in both documents
    pub index: usize,
    pub line1: String,
    pub line2: String,
    /// Non-equal edits, left to right
    pub ops: Vec<EditOp>,
}

impl WordDiffEntry {
    /// 1-based line number for display
    pub fn line_number(&self) -> usize {
        self.index + 1
    }

    pub fn old_tokens(&self) -> Vec<&str> {
        tokenize_words(&self.line1)
    }

    pub fn new_tokens(&self) -> Vec<&str> {
        tokenize_words(&self.line2)
    }
}

/// Split a line into whitespace-delimited words
pub fn tokenize_words(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
