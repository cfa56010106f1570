//! PDF output for imposed booklets

use super::SheetRenderer;
use super::xobject::{create_page_xobject, get_page_box};
use crate::layout::{Booklet, FaceLayout};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use log::debug;
use std::collections::HashMap;

/// Renders a booklet into a new PDF, one output page per sheet face.
///
/// Each source page becomes a Form XObject and is drawn untransformed apart
/// from a translation into its slot.
pub struct PdfSheetRenderer<'a> {
    source: &'a Document,
    page_ids: &'a [ObjectId],
    /// Source object -> output object, shared by every face
    object_cache: HashMap<ObjectId, ObjectId>,
    /// Source page index -> (XObject id, MediaBox)
    xobjects: HashMap<usize, (ObjectId, [f32; 4])>,
}

impl<'a> PdfSheetRenderer<'a> {
    /// `page_ids[i]` must be the object id of source page `i`
    pub fn new(source: &'a Document, page_ids: &'a [ObjectId]) -> Self {
        Self {
            source,
            page_ids,
            object_cache: HashMap::new(),
            xobjects: HashMap::new(),
        }
    }

    /// Embed a source page once and reuse the XObject afterwards
    fn page_xobject(
        &mut self,
        output: &mut Document,
        source_idx: usize,
    ) -> Result<Option<(ObjectId, [f32; 4])>> {
        if let Some(&entry) = self.xobjects.get(&source_idx) {
            return Ok(Some(entry));
        }

        // No such source page: leave the slot blank, same as padding
        let Some(&page_id) = self.page_ids.get(source_idx) else {
            return Ok(None);
        };

        let xobject_id =
            create_page_xobject(output, self.source, page_id, &mut self.object_cache)?;
        let media_box = get_page_box(self.source, page_id)?;
        self.xobjects.insert(source_idx, (xobject_id, media_box));
        Ok(Some((xobject_id, media_box)))
    }

    /// Render one face of a sheet to the output document
    fn render_face(
        &mut self,
        output: &mut Document,
        face: &FaceLayout,
        page_size: PageSize,
        parent_pages_id: ObjectId,
    ) -> Result<ObjectId> {
        let sheet = page_size.sheet();

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(parent_pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(sheet.width_pt),
                Object::Real(sheet.height_pt),
            ]),
        );

        let mut content_ops = Vec::new();
        let mut xobjects = Dictionary::new();

        for (position, source_idx) in face.placements() {
            let Some((xobject_id, [llx, lly, _, _])) = self.page_xobject(output, source_idx)?
            else {
                continue;
            };

            let xobject_name = format!("P{}", source_idx);
            xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));

            // Shift the page's own origin onto the slot corner; no scaling.
            // Clip to the slot so an oversize page can't cover its neighbour.
            let slot_x = position.x_offset(page_size);
            content_ops.push(placement_command(
                &xobject_name,
                slot_x,
                page_size,
                slot_x - llx,
                0.0 - lly,
            ));
        }

        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let content = content_ops.join("");
        let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        page_dict.set("Contents", Object::Reference(content_id));
        page_dict.set("Resources", Object::Dictionary(resources));

        Ok(output.add_object(page_dict))
    }
}

impl SheetRenderer for PdfSheetRenderer<'_> {
    type Output = Document;

    fn render(&mut self, booklet: &Booklet) -> Result<Document> {
        if booklet.sheets.is_empty() {
            return Err(ImposeError::EmptyInput);
        }

        let mut output = Document::with_version("1.7");
        let pages_tree_id = output.new_object_id();
        let mut face_ids = Vec::with_capacity(booklet.sheet_count() * 2);

        // Front then back of each sheet, in feed order
        for face in booklet.faces() {
            let page_id = self.render_face(&mut output, face, booklet.page_size, pages_tree_id)?;
            face_ids.push(page_id);
        }

        write_page_tree(&mut output, pages_tree_id, &face_ids);
        debug!(
            "rendered {} faces for {} sheets",
            face_ids.len(),
            booklet.sheet_count()
        );
        Ok(output)
    }
}

/// Content stream command drawing an XObject translated by (tx, ty), clipped
/// to the page-sized slot starting at `slot_x`
fn placement_command(
    xobject_name: &str,
    slot_x: f32,
    slot: PageSize,
    tx: f32,
    ty: f32,
) -> String {
    format!(
        "q {} 0 {} {} re W n 1 0 0 1 {} {} cm /{} Do Q\n",
        slot_x, slot.width_pt, slot.height_pt, tx, ty, xobject_name
    )
}

/// Point the reserved pages node at the faces, in feed order, and add the catalog
fn write_page_tree(output: &mut Document, pages_tree_id: ObjectId, face_ids: &[ObjectId]) {
    let kids = face_ids.iter().copied().map(Object::Reference).collect();
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(face_ids.len() as i64)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    output.trailer.set("Root", catalog_id);
}
