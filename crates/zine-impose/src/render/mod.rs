//! Sheet renderers for imposition
//!
//! A [`Booklet`] only describes where pages go. Renderers turn that
//! description into something concrete:
//! - [`PdfSheetRenderer`] builds the print-ready PDF with lopdf
//! - [`PlanRenderer`] writes a human-readable sheet plan

mod pdf;
mod plan;
mod xobject;

pub use pdf::PdfSheetRenderer;
pub use plan::PlanRenderer;
pub use xobject::{copy_object_deep, create_page_xobject, get_page_box, get_page_dimensions};

use crate::layout::Booklet;
use crate::types::Result;

/// Serialization step applied to an imposed booklet
pub trait SheetRenderer {
    type Output;

    fn render(&mut self, booklet: &Booklet) -> Result<Self::Output>;
}
