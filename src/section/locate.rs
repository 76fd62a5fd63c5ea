//! Boundary location.

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::model::Coordinate;

use super::heading::HeadingPattern;

/// Find the first line in document order that begins a heading of
/// `pattern`'s class.
///
/// Scans depth-first in reading order (page, then area, then line); the
/// first accepted match wins. Repeated calls on the same corpus return the
/// same coordinate.
///
/// # Errors
///
/// `EmptyCorpus` when the corpus has no pages; `SectionNotFound` when the
/// scan exhausts the corpus without an accepted match.
pub fn locate(corpus: &Corpus, pattern: &HeadingPattern) -> Result<Coordinate> {
    locate_from(corpus, pattern, 0)
}

/// Same as [`locate`], starting the scan at page index `start_page`.
pub fn locate_from(
    corpus: &Corpus,
    pattern: &HeadingPattern,
    start_page: usize,
) -> Result<Coordinate> {
    if corpus.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    for (page_index, page) in corpus.pages_from(start_page) {
        for (area_index, area) in page.areas.iter().enumerate() {
            for (line_index, line) in area.lines.iter().enumerate() {
                if pattern.matches(&line.text()) {
                    let coordinate =
                        Coordinate::new(page_index, area_index, line_index);
                    log::debug!(
                        "{} heading found at {}",
                        pattern.class(),
                        coordinate
                    );
                    return Ok(coordinate);
                }
            }
        }
    }

    Err(Error::SectionNotFound {
        class: pattern.class(),
        corpus: corpus.id().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Area, Line, Page};
    use crate::section::HeadingClass;

    fn text_area(lines: &[&str]) -> Area {
        let mut area = Area::new();
        for line in lines {
            area.add_line(Line::from_words(line.split(' ')));
        }
        area
    }

    fn page(index: usize, areas: Vec<Area>) -> Page {
        let mut page = Page::new(index);
        for area in areas {
            page.add_area(area);
        }
        page
    }

    fn methods_pattern() -> HeadingPattern {
        HeadingPattern::new(HeadingClass::MethodsStart).unwrap()
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::new("empty", Vec::new());
        let result = locate(&corpus, &methods_pattern());
        assert!(matches!(result, Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_not_found_names_class_and_corpus() {
        let corpus = Corpus::new(
            "paper/tesseract",
            vec![page(0, vec![text_area(&["Just prose here"])])],
        );
        match locate(&corpus, &methods_pattern()) {
            Err(Error::SectionNotFound { class, corpus }) => {
                assert_eq!(class, HeadingClass::MethodsStart);
                assert_eq!(corpus, "paper/tesseract");
            }
            other => panic!("expected SectionNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_earliest_match_wins() {
        // Matches on page 0 area 1 line 1 and on page 1; the first in
        // document order must win.
        let corpus = Corpus::new(
            "c",
            vec![
                page(
                    0,
                    vec![
                        text_area(&["Introduction text"]),
                        text_area(&["More introduction", "Methods"]),
                    ],
                ),
                page(1, vec![text_area(&["Methods"])]),
            ],
        );
        let coordinate = locate(&corpus, &methods_pattern()).unwrap();
        assert_eq!(coordinate, Coordinate::new(0, 1, 1));
    }

    #[test]
    fn test_locate_is_deterministic() {
        let corpus = Corpus::new(
            "c",
            vec![page(0, vec![text_area(&["intro", "Methods", "body"])])],
        );
        let pattern = methods_pattern();
        let first = locate(&corpus, &pattern).unwrap();
        let second = locate(&corpus, &pattern).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_prose_match_is_skipped() {
        // The prose mention on page 0 fails the filter; the real heading
        // on page 1 is returned instead.
        let corpus = Corpus::new(
            "c",
            vec![
                page(
                    0,
                    vec![text_area(&[
                        "Methods of this kind were described before, elsewhere.",
                    ])],
                ),
                page(1, vec![text_area(&["Methods"])]),
            ],
        );
        let coordinate = locate(&corpus, &methods_pattern()).unwrap();
        assert_eq!(coordinate, Coordinate::new(1, 0, 0));
    }

    #[test]
    fn test_locate_from_skips_leading_pages() {
        let corpus = Corpus::new(
            "c",
            vec![
                page(0, vec![text_area(&["Methods"])]),
                page(1, vec![text_area(&["Methods"])]),
            ],
        );
        let coordinate =
            locate_from(&corpus, &methods_pattern(), 1).unwrap();
        assert_eq!(coordinate, Coordinate::new(1, 0, 0));
    }
}
