//! Cross-page section stitching.

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::model::{Coordinate, Page};

use super::filter::filter_text;

/// Reconstruct the ordered text of the section between `start` and `end`.
///
/// When both boundaries fall on the same page, the span covers the areas
/// from `start.area` up to but excluding `end.area`. When the section
/// spans pages, it covers the start page from `start.area` onward, every
/// strictly intervening page in full, and the end page from its first
/// area through `end.area` inclusive. Fragments are joined with single
/// newlines in page order.
///
/// The end area is excluded in the same-page case but included in the
/// multi-page case. Downstream consumers depend on this asymmetry, so
/// both cases keep their bounds; do not unify them.
///
/// # Errors
///
/// `PageOutOfRange`/`AreaOutOfRange` when either coordinate does not
/// resolve against the corpus, `InvalidSpan` when `start` lies on a later
/// page than `end`.
pub fn stitch(corpus: &Corpus, start: Coordinate, end: Coordinate) -> Result<String> {
    let start_page = resolve_page(corpus, start)?;
    let end_page = resolve_page(corpus, end)?;

    if start.page > end.page {
        return Err(Error::InvalidSpan {
            start: start.page,
            end: end.page,
        });
    }

    if start.page == end.page {
        // Both boundaries on one page: slice that page alone.
        return Ok(filter_text(start_page, Some(start.area), Some(end.area)));
    }

    log::debug!(
        "stitching pages {}..={} ({} -> {})",
        start.page,
        end.page,
        start,
        end
    );

    let mut fragments = Vec::with_capacity(end.page - start.page + 1);

    // Start page: from the opening heading's area to the end of the page.
    fragments.push(filter_text(start_page, Some(start.area), None));

    // Entire pages between the two boundaries.
    for page in &corpus.pages()[start.page + 1..end.page] {
        fragments.push(filter_text(page, None, None));
    }

    // End page: everything up to and including the closing boundary's area.
    fragments.push(filter_text(end_page, None, Some(end.area + 1)));

    Ok(fragments.join("\n"))
}

/// Resolve a coordinate's page, checking both page and area indices.
fn resolve_page(corpus: &Corpus, coordinate: Coordinate) -> Result<&Page> {
    let page = corpus.get_page(coordinate.page)?;
    if coordinate.area >= page.area_count() {
        return Err(Error::AreaOutOfRange {
            page: coordinate.page,
            area: coordinate.area,
            count: page.area_count(),
        });
    }
    Ok(page)
}
