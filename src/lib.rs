//! # methex
//!
//! Methods-section extraction from hOCR-scanned scientific papers.
//!
//! Given the per-page hOCR documents of a scanned paper, methex finds the
//! heading that opens the Methods section, the heading that closes it
//! (Discussion, Results, ...), and stitches everything between the two
//! boundaries into a single text, skipping tables, captions and page
//! decorations along the way.
//!
//! ## Quick Start
//!
//! ```no_run
//! use methex::{extract_methods, Corpus};
//!
//! fn main() -> methex::Result<()> {
//!     // Load the per-page hOCR files of one paper
//!     let corpus = Corpus::from_dir("paper/tesseract")?;
//!
//!     // Find both boundaries and stitch the text between them
//!     let extraction = extract_methods(&corpus)?;
//!     println!("{}", extraction.text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! - **Heading matching**: heuristic patterns over enumerated heading
//!   spellings (including known OCR garbles), with a prose filter that
//!   rejects long or punctuated matches
//! - **Boundary location**: depth-first scan in reading order; the first
//!   accepted heading per class wins
//! - **Stitching**: same-page, adjacent-page and multi-page sections are
//!   reassembled in page order, with non-textual areas filtered out
//!
//! A failed boundary search is a hard error: without both boundaries the
//! extraction cannot be trusted, so there is no partial output.

pub mod corpus;
pub mod error;
pub mod model;
pub mod parser;
pub mod section;

// Re-export commonly used types
pub use corpus::{select_hocr_files, Corpus};
pub use error::{Error, Result};
pub use model::{Area, Coordinate, Line, Page, Word};
pub use parser::HocrParser;
pub use section::{
    filter_text, locate, locate_from, stitch, HeadingClass, HeadingMatch,
    HeadingPattern,
};

use std::path::Path;

/// Parse a single hOCR page source.
///
/// # Arguments
///
/// * `index` - The page's ordinal within its corpus
/// * `source` - The hOCR markup
///
/// # Example
///
/// ```
/// let page = methex::parse_hocr(
///     0,
///     r#"<div class="ocr_carea">
///        <span class="ocr_line"><span class="ocrx_word">Methods</span></span>
///        </div>"#,
/// ).unwrap();
/// assert_eq!(page.area_count(), 1);
/// ```
pub fn parse_hocr(index: usize, source: &str) -> Result<Page> {
    HocrParser::new()?.parse(index, source)
}

/// Parse a single hOCR page file.
pub fn parse_hocr_file<P: AsRef<Path>>(index: usize, path: P) -> Result<Page> {
    let source = std::fs::read_to_string(path)?;
    parse_hocr(index, &source)
}

/// Locate the heading that opens the Methods section.
pub fn find_methods_start(corpus: &Corpus) -> Result<Coordinate> {
    locate(corpus, &HeadingPattern::new(HeadingClass::MethodsStart)?)
}

/// Locate the heading that ends the Methods section (the start of the
/// Discussion, Results or an equivalent following section).
pub fn find_methods_end(corpus: &Corpus) -> Result<Coordinate> {
    locate(corpus, &HeadingPattern::new(HeadingClass::SectionEnd)?)
}

/// A completed extraction: the stitched section text plus the boundary
/// coordinates that produced it.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The stitched Methods-section text
    pub text: String,

    /// Where the Methods heading was found
    pub start: Coordinate,

    /// Where the section-ending heading was found
    pub end: Coordinate,
}

/// Options for methods-section extraction.
///
/// # Example
///
/// ```
/// use methex::ExtractOptions;
///
/// let options = ExtractOptions::new().with_skip_pages(2);
/// assert_eq!(options.skip_pages, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Number of leading pages to skip before searching for boundaries
    pub skip_pages: usize,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the given number of leading pages (title pages, abstracts)
    /// during both boundary searches.
    pub fn with_skip_pages(mut self, pages: usize) -> Self {
        self.skip_pages = pages;
        self
    }
}

/// Run the full extraction pipeline on a corpus.
///
/// Searches for the start and end boundaries in two independent passes,
/// then stitches the text between them.
///
/// # Errors
///
/// Propagates `EmptyCorpus` and `SectionNotFound` from the boundary
/// searches; either aborts the extraction with no output.
pub fn extract_methods(corpus: &Corpus) -> Result<Extraction> {
    extract_methods_with_options(corpus, &ExtractOptions::default())
}

/// Run the full extraction pipeline with custom options.
pub fn extract_methods_with_options(
    corpus: &Corpus,
    options: &ExtractOptions,
) -> Result<Extraction> {
    let start = locate_from(
        corpus,
        &HeadingPattern::new(HeadingClass::MethodsStart)?,
        options.skip_pages,
    )?;
    let end = locate_from(
        corpus,
        &HeadingPattern::new(HeadingClass::SectionEnd)?,
        options.skip_pages,
    )?;

    log::debug!("methods section spans {} to {}", start, end);

    let text = stitch(corpus, start, end)?;
    Ok(Extraction { text, start, end })
}
