//! Textual-area filtering.

use crate::model::Page;

/// Flatten the textual areas of `page` to their lines of text.
///
/// `start` and `end` bound the area range half-open (start inclusive,
/// end exclusive): `None` defaults to the page start and the page end
/// respectively, and out-of-range bounds saturate. Decorative, separator-line, caption and
/// high-scoring tabular areas are skipped entirely; the remaining lines
/// are joined with single newlines in reading order. Empty lines survive
/// the join unchanged.
pub fn filter_text(page: &Page, start: Option<usize>, end: Option<usize>) -> String {
    let end = end.unwrap_or(page.areas.len()).min(page.areas.len());
    let start = start.unwrap_or(0).min(end);

    let mut lines = Vec::new();
    for area in &page.areas[start..end] {
        if !area.is_textual() {
            continue;
        }
        for line in &area.lines {
            lines.push(line.text());
        }
    }
    lines.join("\n")
}
