//! Booklet imposition for PDF documents
//!
//! This module glues the pure layout to lopdf:
//! 1. Collect source pages and their sizes
//! 2. Compute the saddle-stitch sheet layout
//! 3. Render the sheets into a new PDF

mod io;

pub use io::{load_pdf, save_pdf};

use crate::layout::{Booklet, impose};
use crate::options::BookletOptions;
use crate::render::{PdfSheetRenderer, SheetRenderer, get_page_dimensions};
use crate::types::*;
use lopdf::{Document, ObjectId};
use log::info;

/// A page of the source document, as the imposer sees it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourcePage {
    pub id: ObjectId,
    pub size: PageSize,
}

impl Page for SourcePage {
    fn size(&self) -> PageSize {
        self.size
    }
}

/// Source pages in document order
pub fn source_pages(doc: &Document) -> Result<Vec<SourcePage>> {
    // get_pages is keyed by 1-based page number, so values come out in order
    doc.get_pages()
        .into_values()
        .map(|id| {
            let (width, height) = get_page_dimensions(doc, id)?;
            Ok(SourcePage {
                id,
                size: PageSize::new(width, height),
            })
        })
        .collect()
}

/// Impose a whole document into a saddle-stitch booklet
pub async fn impose_document(source: &Document, options: &BookletOptions) -> Result<Document> {
    let source = source.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || impose_document_sync(&source, &options)).await?
}

/// Blocking version of [`impose_document`]
pub fn impose_document_sync(source: &Document, options: &BookletOptions) -> Result<Document> {
    let pages = source_pages(source)?;
    let booklet = plan_booklet(&pages, options)?;

    let page_ids: Vec<ObjectId> = pages.iter().map(|page| page.id).collect();
    PdfSheetRenderer::new(source, &page_ids).render(&booklet)
}

/// Compute the booklet layout for a set of source pages
pub fn plan_booklet(pages: &[SourcePage], options: &BookletOptions) -> Result<Booklet> {
    let booklet = impose(pages, options)?;
    info!(
        "imposed {} pages onto {} sheets ({} blank slots) at {}",
        booklet.source_pages,
        booklet.sheet_count(),
        booklet.blank_slots(),
        booklet.page_size
    );
    Ok(booklet)
}
