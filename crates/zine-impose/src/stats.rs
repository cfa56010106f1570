use crate::constants::PAGES_PER_SHEET;
use crate::layout::padded_page_count;
use crate::types::*;

/// Calculate statistics for a booklet of `source_pages` pages
pub fn calculate_statistics(source_pages: usize) -> Result<BookletStatistics> {
    if source_pages == 0 {
        return Err(ImposeError::EmptyInput);
    }

    // Pad to multiple of 4
    let padded_pages = padded_page_count(source_pages);
    let sheets = padded_pages / PAGES_PER_SHEET;

    Ok(BookletStatistics {
        source_pages,
        padded_pages,
        blank_pages_added: padded_pages - source_pages,
        sheets,
        // Front and back of each sheet
        output_faces: sheets * 2,
    })
}
