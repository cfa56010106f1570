use crate::constants::{DIMENSION_TOLERANCE_PT, HALF_LETTER_HEIGHT_PT, HALF_LETTER_WIDTH_PT, pt_to_in};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImposeError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to impose")]
    EmptyInput,
    #[error("Page at index {index} is {found} but the booklet expects {expected}")]
    DimensionMismatch {
        /// 0-based position of the offending page
        index: usize,
        expected: PageSize,
        found: PageSize,
    },
    #[error("Internal invariant violated: slot index {index} outside 0..{padded}")]
    InvariantViolation { index: i64, padded: usize },
}

pub type Result<T> = std::result::Result<T, ImposeError>;

/// Size of a single portrait page, in points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    pub fn new(width_pt: f32, height_pt: f32) -> Self {
        Self {
            width_pt,
            height_pt,
        }
    }

    /// 5.5" × 8.5", the zine's native page
    pub fn half_letter() -> Self {
        Self::new(HALF_LETTER_WIDTH_PT, HALF_LETTER_HEIGHT_PT)
    }

    /// Size of the landscape sheet holding two of these pages side by side
    pub fn sheet(self) -> Self {
        Self::new(self.width_pt * 2.0, self.height_pt)
    }

    pub fn is_portrait(self) -> bool {
        self.height_pt >= self.width_pt
    }

    /// Both dimensions finite and strictly positive
    pub fn is_valid(self) -> bool {
        self.width_pt.is_finite()
            && self.height_pt.is_finite()
            && self.width_pt > 0.0
            && self.height_pt > 0.0
    }

    /// Equal within [`DIMENSION_TOLERANCE_PT`] on both axes
    pub fn approx_eq(self, other: PageSize) -> bool {
        (self.width_pt - other.width_pt).abs() <= DIMENSION_TOLERANCE_PT
            && (self.height_pt - other.height_pt).abs() <= DIMENSION_TOLERANCE_PT
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::half_letter()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}×{}pt ({:.2}\"×{:.2}\")",
            self.width_pt,
            self.height_pt,
            pt_to_in(self.width_pt),
            pt_to_in(self.height_pt)
        )
    }
}

/// Something the imposer can place on a sheet.
///
/// The imposer only cares about a page's size and its position in the input
/// sequence; how the page was produced is none of its business.
pub trait Page {
    fn size(&self) -> PageSize;
}

impl Page for PageSize {
    fn size(&self) -> PageSize {
        *self
    }
}

impl<P: Page + ?Sized> Page for &P {
    fn size(&self) -> PageSize {
        (**self).size()
    }
}

/// What to do when input pages disagree on size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DimensionPolicy {
    /// Reject the input with [`ImposeError::DimensionMismatch`]
    #[default]
    Strict,
    /// Lay every page out using the booklet page size and keep going.
    ///
    /// Pages are never scaled: a larger page is clipped to its slot and a
    /// smaller one leaves the rest of the slot empty.
    UseFirst,
}

/// Statistics about a booklet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BookletStatistics {
    /// Number of source pages
    pub source_pages: usize,
    /// Source pages rounded up to a multiple of 4
    pub padded_pages: usize,
    /// Number of blank slots added for padding
    pub blank_pages_added: usize,
    /// Physical sheets of paper
    pub sheets: usize,
    /// Output PDF pages (front and back of every sheet)
    pub output_faces: usize,
}
