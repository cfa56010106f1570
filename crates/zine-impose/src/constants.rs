//! Shared constants for booklet imposition
//!
//! Page geometry is expressed in PDF points throughout the crate.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert points to inches
#[inline]
pub fn pt_to_in(pt: f32) -> f32 {
    pt / POINTS_PER_INCH
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// Half-letter page width in points (5.5")
pub const HALF_LETTER_WIDTH_PT: f32 = 5.5 * POINTS_PER_INCH;

/// Half-letter page height in points (8.5")
pub const HALF_LETTER_HEIGHT_PT: f32 = 8.5 * POINTS_PER_INCH;

/// Fallback dimensions for source pages without a MediaBox
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (HALF_LETTER_WIDTH_PT, HALF_LETTER_HEIGHT_PT);

/// Two pages at or below this difference (points, per axis) count as the same size
pub const DIMENSION_TOLERANCE_PT: f32 = 0.01;

// =============================================================================
// Saddle Stitch
// =============================================================================

/// Pages carried by one folded sheet (two per face, two faces)
pub const PAGES_PER_SHEET: usize = 4;

/// Pages side by side on one face
pub const SLOTS_PER_FACE: usize = 2;
