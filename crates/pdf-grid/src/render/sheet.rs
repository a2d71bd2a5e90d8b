//! Output sheet rendering
//!
//! The grid sheet is a single page. Cells are drawn in slot order into one
//! content stream; every embedded source page becomes a Form XObject named
//! after its slot.

use crate::constants::BORDER_LINE_WIDTH;
use crate::layout::{GridSlot, Placement, Rect};
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::xobject::{SourcePage, create_page_xobject};

/// Builder for the single-page grid document
pub struct GridSheet {
    output: Document,
    pages_id: ObjectId,
    content_ops: Vec<String>,
    xobjects: Dictionary,
}

impl GridSheet {
    pub fn new() -> Self {
        let mut output = Document::with_version("1.7");
        let pages_id = output.new_object_id();
        Self {
            output,
            pages_id,
            content_ops: Vec::new(),
            xobjects: Dictionary::new(),
        }
    }

    /// Embed a source page and draw it at its placement.
    ///
    /// Nothing is drawn if the page cannot be copied into the output.
    pub fn draw_page(
        &mut self,
        slot: GridSlot,
        source: &SourcePage,
        placement: &Placement,
    ) -> Result<()> {
        let mut cache: HashMap<ObjectId, ObjectId> = HashMap::new();
        let xobject_id = create_page_xobject(&mut self.output, source, &mut cache)?;

        let xobject_name = format!("P{}", slot.index());
        self.xobjects
            .set(xobject_name.as_bytes(), Object::Reference(xobject_id));
        self.content_ops.push(placement_command(
            &xobject_name,
            placement,
            &source.media_box,
        ));
        Ok(())
    }

    /// Stroke a rectangle outline
    pub fn outline(&mut self, rect: &Rect, color: (f32, f32, f32)) {
        self.content_ops.push(outline_command(rect, color));
    }

    /// Assemble the page, page tree and catalog.
    pub fn finish(mut self, sheet_width_pt: f32, sheet_height_pt: f32) -> Document {
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(self.xobjects));

        let content = self.content_ops.join("");
        let content_id = self
            .output
            .add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let page_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(self.pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(sheet_width_pt),
                    Object::Real(sheet_height_pt),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
            ("Resources", Object::Dictionary(resources)),
        ]));

        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(vec![Object::Reference(page_id)])),
            ("Count", Object::Integer(1)),
        ]);
        self.output
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        self.output
    }
}

impl Default for GridSheet {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Content Stream Commands
// =============================================================================

/// Generate the content stream command that draws a page XObject.
///
/// The XObject keeps the source's own coordinates, so the MediaBox origin
/// is shifted onto the placement origin.
fn placement_command(xobject_name: &str, placement: &Placement, media_box: &Rect) -> String {
    let scale = placement.scale;
    let tx = placement.content.x - scale * media_box.x;
    let ty = placement.content.y - scale * media_box.y;
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        scale, scale, tx, ty, xobject_name
    )
}

/// Generate a stroked rectangle in the given RGB color.
fn outline_command(rect: &Rect, (r, g, b): (f32, f32, f32)) -> String {
    format!(
        "q {} {} {} RG {} w {} {} {} {} re S Q\n",
        r, g, b, BORDER_LINE_WIDTH, rect.x, rect.y, rect.width, rect.height
    )
}
