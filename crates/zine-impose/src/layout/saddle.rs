//! Saddle-stitch imposition
//!
//! Sheets are nested, folded once and stapled through the fold. For 8 pages
//! (1-based page numbers, short-edge duplex):
//!
//! ```text
//! Sheet 0 front:  [ 8 | 1 ]    Sheet 0 back:  [ 7 | 2 ]
//! Sheet 1 front:  [ 6 | 3 ]    Sheet 1 back:  [ 5 | 4 ]
//! ```
//!
//! The page count is padded up to a multiple of 4; padding slots stay blank.

use super::{Booklet, FaceLayout, SheetLayout, SheetSide};
use crate::constants::PAGES_PER_SHEET;
use crate::options::BookletOptions;
use crate::types::*;
use log::{debug, error, warn};

// =============================================================================
// Counting
// =============================================================================

/// Page count rounded up to a whole number of sheets
pub fn padded_page_count(page_count: usize) -> usize {
    page_count.div_ceil(PAGES_PER_SHEET) * PAGES_PER_SHEET
}

/// Number of physical sheets needed for `page_count` pages
pub fn sheet_count(page_count: usize) -> usize {
    padded_page_count(page_count) / PAGES_PER_SHEET
}

// =============================================================================
// Slot Indices
// =============================================================================

/// The four source indices carried by one sheet (0-based, may point at padding)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetIndices {
    pub front_left: usize,
    pub front_right: usize,
    pub back_left: usize,
    pub back_right: usize,
}

impl SheetIndices {
    /// Compute the slot indices for sheet `sheet` of a booklet with
    /// `padded_count` pages.
    ///
    /// The back face assumes the printer duplexes with "flip on short edge":
    /// the back-left/back-right pair is already swapped for that flip, so no
    /// mirroring happens at render time. Printing with a long-edge flip puts
    /// the inner pages in the wrong halves.
    pub fn for_sheet(padded_count: usize, sheet: usize) -> Result<Self> {
        let padded = padded_count as i64;
        let i = sheet as i64;

        Ok(Self {
            front_left: checked_slot(padded - 1 - 2 * i, padded_count)?,
            front_right: checked_slot(2 * i, padded_count)?,
            back_left: checked_slot(padded - 2 - 2 * i, padded_count)?,
            back_right: checked_slot(2 * i + 1, padded_count)?,
        })
    }

    /// Indices in slot order: front-left, front-right, back-left, back-right
    pub fn as_array(&self) -> [usize; 4] {
        [
            self.front_left,
            self.front_right,
            self.back_left,
            self.back_right,
        ]
    }
}

/// Reject indices outside `0..padded_count`. Never clamp.
fn checked_slot(index: i64, padded_count: usize) -> Result<usize> {
    let in_range = index >= 0 && (index as usize) < padded_count;
    if !in_range {
        error!(
            "slot index {} outside 0..{}, refusing to impose",
            index, padded_count
        );
        debug_assert!(in_range, "slot index {} outside 0..{}", index, padded_count);
        return Err(ImposeError::InvariantViolation {
            index,
            padded: padded_count,
        });
    }
    Ok(index as usize)
}

// =============================================================================
// Imposition
// =============================================================================

/// Impose `pages` onto saddle-stitch sheets.
///
/// Produces one [`SheetLayout`] per physical sheet, outermost first. Slots
/// whose index is past the last real page are `None` and render blank.
pub fn impose<P: Page>(pages: &[P], options: &BookletOptions) -> Result<Booklet> {
    let page_size = resolve_page_size(pages, options)?;
    let total_pages = pages.len();
    let padded = padded_page_count(total_pages);
    let num_sheets = padded / PAGES_PER_SHEET;

    let real = |idx: usize| (idx < total_pages).then_some(idx);

    let mut sheets = Vec::with_capacity(num_sheets);
    for i in 0..num_sheets {
        let indices = SheetIndices::for_sheet(padded, i)?;
        debug!(
            "sheet {}: front [{} | {}], back [{} | {}]",
            i, indices.front_left, indices.front_right, indices.back_left, indices.back_right
        );

        sheets.push(SheetLayout {
            index: i,
            front: FaceLayout {
                side: SheetSide::Front,
                left: real(indices.front_left),
                right: real(indices.front_right),
            },
            back: FaceLayout {
                side: SheetSide::Back,
                left: real(indices.back_left),
                right: real(indices.back_right),
            },
        });
    }

    Ok(Booklet {
        page_size,
        source_pages: total_pages,
        padded_pages: padded,
        sheets,
    })
}

/// Work out the booklet page size and check every page against it
fn resolve_page_size<P: Page>(pages: &[P], options: &BookletOptions) -> Result<PageSize> {
    let first = pages.first().ok_or(ImposeError::EmptyInput)?.size();
    let expected = options.page_size.unwrap_or(first);

    if !expected.is_valid() {
        return Err(ImposeError::Config(format!(
            "Page size must be positive, got {}",
            expected
        )));
    }
    if !expected.is_portrait() {
        warn!("booklet page size {} is landscape", expected);
    }

    for (index, page) in pages.iter().enumerate() {
        let found = page.size();
        if found.approx_eq(expected) {
            continue;
        }
        match options.dimension_policy {
            DimensionPolicy::Strict => {
                return Err(ImposeError::DimensionMismatch {
                    index,
                    expected,
                    found,
                });
            }
            DimensionPolicy::UseFirst => {
                warn!(
                    "page {} is {}, laying it out as {}",
                    index + 1,
                    found,
                    expected
                );
            }
        }
    }

    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "outside 0..4"))]
    fn test_checked_slot_rejects_negative() {
        match checked_slot(-1, 4) {
            Err(ImposeError::InvariantViolation { index, padded }) => {
                assert_eq!(index, -1);
                assert_eq!(padded, 4);
            }
            other => panic!("Expected InvariantViolation, got {:?}", other),
        }
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "outside 0..4"))]
    fn test_checked_slot_rejects_upper_bound() {
        assert!(matches!(
            checked_slot(4, 4),
            Err(ImposeError::InvariantViolation { index: 4, padded: 4 })
        ));
    }

    #[test]
    fn test_checked_slot_accepts_bounds() {
        assert_eq!(checked_slot(3, 4).unwrap(), 3);
        assert_eq!(checked_slot(0, 4).unwrap(), 0);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "outside 0..4"))]
    fn test_for_sheet_past_last_sheet() {
        // Sheet 2 of a 4-page booklet runs front-left below zero
        let result = SheetIndices::for_sheet(4, 2);
        assert!(matches!(
            result,
            Err(ImposeError::InvariantViolation { padded: 4, .. })
        ));
    }
}
