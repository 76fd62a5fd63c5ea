//! Corpus discovery and page traversal.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::Page;
use crate::parser::HocrParser;

/// The full ordered set of page documents for one paper.
///
/// Pages are materialized up front so boundary searches and stitching can
/// both walk the same sequence, and stitching can index into it at random.
#[derive(Debug, Clone)]
pub struct Corpus {
    id: String,
    pages: Vec<Page>,
}

impl Corpus {
    /// Create a corpus from already-parsed pages.
    pub fn new(id: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            id: id.into(),
            pages,
        }
    }

    /// Load a corpus from a directory of hOCR page files.
    ///
    /// Files are discovered with [`select_hocr_files`] and parsed in page
    /// order; each page's ordinal is its position in that order.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let files = select_hocr_files(dir)?;
        let parser = HocrParser::new()?;

        let mut pages = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            let source = fs::read_to_string(file)?;
            pages.push(parser.parse(index, &source)?);
        }

        log::debug!("loaded {} pages from {}", pages.len(), dir.display());
        Ok(Self::new(dir.display().to_string(), pages))
    }

    /// Identifier of the corpus, used in error reports.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The pages of the corpus, in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Check if the corpus has no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Get a page by index.
    pub fn get_page(&self, index: usize) -> Result<&Page> {
        self.pages
            .get(index)
            .ok_or(Error::PageOutOfRange(index, self.pages.len()))
    }

    /// Iterate pages in order with their indices, skipping pages before
    /// `start`. Each call yields a fresh traversal.
    pub fn pages_from(
        &self,
        start: usize,
    ) -> impl Iterator<Item = (usize, &Page)> {
        self.pages.iter().enumerate().skip(start)
    }
}

/// List the hOCR files in `dir`, ordered by the page number embedded in
/// each file's stem.
///
/// Page files carry their ordinal as digits somewhere in the name
/// (`page-2.html`, `paper_010.html`); the digits are concatenated and
/// compared numerically, so `page-2` sorts before `page-10`. A stem
/// without digits is an error.
pub fn select_hocr_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut keyed: Vec<(u64, PathBuf)> = Vec::new();

    for entry in fs::read_dir(dir.as_ref())? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        keyed.push((page_ordinal(&path)?, path));
    }

    keyed.sort_by_key(|(ordinal, _)| *ordinal);
    Ok(keyed.into_iter().map(|(_, path)| path).collect())
}

/// Extract the page ordinal from a file's stem digits.
fn page_ordinal(path: &Path) -> Result<u64> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let digits: String = stem.chars().filter(|c| c.is_ascii_digit()).collect();
    digits
        .parse()
        .map_err(|_| Error::MissingOrdinal(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Area, Line};
    use std::fs::File;
    use std::io::Write;

    fn page_with_text(index: usize, text: &str) -> Page {
        let mut area = Area::new();
        area.add_line(Line::from_words(text.split(' ')));
        let mut page = Page::new(index);
        page.add_area(area);
        page
    }

    #[test]
    fn test_get_page_out_of_range() {
        let corpus = Corpus::new("c", vec![page_with_text(0, "only")]);
        assert!(corpus.get_page(0).is_ok());
        assert!(matches!(
            corpus.get_page(1),
            Err(Error::PageOutOfRange(1, 1))
        ));
    }

    #[test]
    fn test_pages_from_skips_and_restarts() {
        let corpus = Corpus::new(
            "c",
            vec![
                page_with_text(0, "zero"),
                page_with_text(1, "one"),
                page_with_text(2, "two"),
            ],
        );

        let indices: Vec<usize> =
            corpus.pages_from(1).map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 2]);

        // A second traversal starts over.
        let again: Vec<usize> =
            corpus.pages_from(0).map(|(i, _)| i).collect();
        assert_eq!(again, vec![0, 1, 2]);
    }

    #[test]
    fn test_select_hocr_files_numeric_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["page-10.html", "page-2.html", "page-1.html"] {
            File::create(dir.path().join(name)).unwrap();
        }
        // Non-hOCR files are ignored.
        File::create(dir.path().join("notes.txt")).unwrap();

        let files = select_hocr_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["page-1.html", "page-2.html", "page-10.html"]);
    }

    #[test]
    fn test_select_hocr_files_requires_digits() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("cover.html")).unwrap();

        let result = select_hocr_files(dir.path());
        assert!(matches!(result, Err(Error::MissingOrdinal(_))));
    }

    #[test]
    fn test_from_dir_parses_in_order() {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in [
            ("p2.html", "second"),
            ("p1.html", "first"),
        ] {
            let mut file = File::create(dir.path().join(name)).unwrap();
            write!(
                file,
                "<div class=\"ocr_carea\"><span class=\"ocr_line\">\
                 <span class=\"ocrx_word\">{}</span></span></div>",
                body
            )
            .unwrap();
        }

        let corpus = Corpus::from_dir(dir.path()).unwrap();
        assert_eq!(corpus.page_count(), 2);
        assert_eq!(corpus.pages()[0].areas[0].lines[0].text(), "first");
        assert_eq!(corpus.pages()[1].areas[0].lines[0].text(), "second");
        assert_eq!(corpus.pages()[1].index, 1);
    }
}
