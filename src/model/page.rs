//! Page-level types.

use serde::{Deserialize, Serialize};

/// Area kinds that never contribute body text.
const NON_TEXT_KINDS: &[&str] = &["decoration", "line", "caption"];

/// Areas scoring above this are treated as tabular and skipped.
const TABLE_SCORE_THRESHOLD: i64 = 4;

/// A single scanned page of the corpus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page ordinal within the corpus (0-indexed, assigned by sort order
    /// of the source file names)
    pub index: usize,

    /// Content areas on the page, in reading order
    pub areas: Vec<Area>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            areas: Vec::new(),
        }
    }

    /// Add an area to the page.
    pub fn add_area(&mut self, area: Area) {
        self.areas.push(area);
    }

    /// Get the number of areas on the page.
    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Check if the page has no areas.
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Get the number of lines across all areas.
    pub fn line_count(&self) -> usize {
        self.areas.iter().map(|a| a.lines.len()).sum()
    }
}

/// A contiguous content region within a page.
///
/// The layout classifier may tag an area with a content kind
/// (`decoration`, `line`, `caption`, `table`, ...) and a table-confidence
/// score. Both are optional; an untagged area is textual.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Area {
    /// Content-kind tag assigned by the layout classifier
    pub kind: Option<String>,

    /// Table-confidence score assigned by the layout classifier
    pub table_score: Option<i64>,

    /// Text lines in the area, in reading order
    pub lines: Vec<Line>,
}

impl Area {
    /// Create a new untagged area.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an area with a content-kind tag.
    pub fn with_kind(kind: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    /// Create an area with a table-confidence score.
    pub fn with_table_score(score: i64) -> Self {
        Self {
            table_score: Some(score),
            ..Self::default()
        }
    }

    /// Add a line to the area.
    pub fn add_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Whether this area holds body text.
    ///
    /// Decorative, separator-line and caption areas are not textual, and
    /// neither is an area whose table score exceeds the threshold. A score
    /// of exactly the threshold still counts as text.
    pub fn is_textual(&self) -> bool {
        if let Some(ref kind) = self.kind {
            if NON_TEXT_KINDS.contains(&kind.as_str()) {
                return false;
            }
        }
        match self.table_score {
            Some(score) => score <= TABLE_SCORE_THRESHOLD,
            None => true,
        }
    }
}

/// One recognized text line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Line {
    /// Recognized words, in reading order
    pub words: Vec<Word>,
}

impl Line {
    /// Create a new empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a line from word strings.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Word::new).collect(),
        }
    }

    /// The line's text: words joined by single spaces, in order.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// An atomic recognized token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// The recognized text
    pub text: String,
}

impl Word {
    /// Create a new word.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
