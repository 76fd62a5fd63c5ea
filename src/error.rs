//! Error types for the methex library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::section::HeadingClass;

/// Result type alias for methex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during methods-section extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading page files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error parsing hOCR page markup.
    #[error("hOCR markup error: {0}")]
    Markup(String),

    /// A heading pattern failed to compile.
    #[error("Heading pattern error: {0}")]
    Pattern(String),

    /// A page file name carries no digits to derive its ordinal from.
    #[error("No page ordinal in file name: {}", .0.display())]
    MissingOrdinal(PathBuf),

    /// A boundary search was attempted on a corpus with zero pages.
    #[error("Corpus is empty")]
    EmptyCorpus,

    /// The full corpus was scanned without an accepted heading match.
    #[error("No {class} heading found in {corpus}")]
    SectionNotFound {
        /// The heading class that was searched for.
        class: HeadingClass,
        /// Identifier of the scanned corpus.
        corpus: String,
    },

    /// A coordinate's page index is not valid for the corpus.
    #[error("Page {0} is out of range (corpus has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// A coordinate's area index is not valid for its page.
    #[error("Area {area} is out of range on page {page} ({count} areas)")]
    AreaOutOfRange {
        /// Page the coordinate points into.
        page: usize,
        /// The offending area index.
        area: usize,
        /// Number of areas on that page.
        count: usize,
    },

    /// The start boundary lies on a later page than the end boundary.
    #[error("Section start on page {start} lies after its end on page {end}")]
    InvalidSpan {
        /// Page index of the start boundary.
        start: usize,
        /// Page index of the end boundary.
        end: usize,
    },
}
