//! hOCR page parsing.
//!
//! Parses one hOCR (HTML) page source into the document model:
//! `div.ocr_carea` elements become areas, `span.ocr_line` lines and
//! `span.ocrx_word` words. Layout-classification attributes (`ts:type`,
//! `ts:table-score`) are carried through for the area filter.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::model::{Area, Line, Page, Word};

const AREA_SELECTOR: &str = "div.ocr_carea";
const LINE_SELECTOR: &str = "span.ocr_line";
const WORD_SELECTOR: &str = "span.ocrx_word";

/// Attribute naming the layout classifier's content-kind tag.
const KIND_ATTR: &str = "ts:type";

/// Attribute carrying the layout classifier's table-confidence score.
const TABLE_SCORE_ATTR: &str = "ts:table-score";

/// Parser for hOCR page markup.
pub struct HocrParser {
    area_selector: Selector,
    line_selector: Selector,
    word_selector: Selector,
}

impl HocrParser {
    /// Create a new hOCR parser.
    pub fn new() -> Result<Self> {
        Ok(Self {
            area_selector: parse_selector(AREA_SELECTOR)?,
            line_selector: parse_selector(LINE_SELECTOR)?,
            word_selector: parse_selector(WORD_SELECTOR)?,
        })
    }

    /// Parse one page of hOCR markup.
    ///
    /// `index` is the page's ordinal within its corpus. Markup that holds
    /// no content areas parses to an empty page rather than an error; OCR
    /// output regularly contains blank pages.
    pub fn parse(&self, index: usize, source: &str) -> Result<Page> {
        let html = Html::parse_document(source);
        let mut page = Page::new(index);

        for area_element in html.select(&self.area_selector) {
            page.add_area(self.parse_area(index, area_element)?);
        }

        log::debug!(
            "parsed page {}: {} areas, {} lines",
            index,
            page.area_count(),
            page.line_count()
        );
        Ok(page)
    }

    fn parse_area(&self, page_index: usize, element: ElementRef) -> Result<Area> {
        let mut area = Area::new();

        if let Some(kind) = element.value().attr(KIND_ATTR) {
            area.kind = Some(kind.to_string());
        }
        if let Some(raw) = element.value().attr(TABLE_SCORE_ATTR) {
            let score = raw.trim().parse::<i64>().map_err(|_| {
                Error::Markup(format!(
                    "invalid {} {:?} on page {}",
                    TABLE_SCORE_ATTR, raw, page_index
                ))
            })?;
            area.table_score = Some(score);
        }

        for line_element in element.select(&self.line_selector) {
            let mut line = Line::new();
            for word_element in line_element.select(&self.word_selector) {
                let text = word_element.text().collect::<String>();
                line.words.push(Word::new(text.trim()));
            }
            area.add_line(line);
        }

        Ok(area)
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| Error::Markup(format!("selector {:?}: {}", css, e)))
}
