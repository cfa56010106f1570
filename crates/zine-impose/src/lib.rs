pub mod constants;
pub mod impose;
pub mod layout;
mod options;
pub mod render;
mod stats;
mod types;

pub use impose::{
    SourcePage, impose_document, impose_document_sync, load_pdf, plan_booklet, save_pdf,
    source_pages,
};
pub use layout::{
    Booklet, FaceLayout, SheetIndices, SheetLayout, SheetSide, SlotPosition, impose,
    padded_page_count, sheet_count,
};
pub use options::*;
pub use render::{PdfSheetRenderer, PlanRenderer, SheetRenderer};
pub use stats::calculate_statistics;
pub use types::*;
