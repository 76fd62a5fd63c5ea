//! Boundary coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a single line within a corpus.
///
/// All three indices are 0-based: `page` into the corpus, `area` into that
/// page, `line` into that area. A coordinate is only meaningful against the
/// corpus it was resolved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Page index within the corpus
    pub page: usize,

    /// Area index within the page
    pub area: usize,

    /// Line index within the area
    pub line: usize,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(page: usize, area: usize, line: usize) -> Self {
        Self { page, area, line }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {}, area {}, line {}", self.page, self.area, self.line)
    }
}
