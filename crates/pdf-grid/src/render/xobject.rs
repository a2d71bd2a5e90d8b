//! XObject creation for grid composition
//!
//! This module handles turning the first page of a source PDF into a Form
//! XObject in the output document, which is then drawn into its cell with
//! a scale-and-translate transformation.

use crate::constants::DEFAULT_PAGE_DIMENSIONS;
use crate::layout::Rect;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// The page of a decoded source that gets drawn into a cell
#[derive(Debug, Clone)]
pub struct SourcePage {
    pub document: Document,
    pub page_id: ObjectId,
    /// Normalized MediaBox of the page, in the source's own coordinates
    pub media_box: Rect,
}

impl SourcePage {
    /// Intrinsic (width, height) of the page in points
    pub fn size(&self) -> (f32, f32) {
        (self.media_box.width, self.media_box.height)
    }
}

// =============================================================================
// XObject Creation
// =============================================================================

/// Create a Form XObject from a source page.
///
/// # Arguments
/// * `output` - The output document to add the XObject to
/// * `source` - The source page
/// * `cache` - Objects already copied from this source document. Object ids
///   are only meaningful within one document, so never share a cache
///   between sources.
pub fn create_page_xobject(
    output: &mut Document,
    source: &SourcePage,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let doc = &source.document;
    let page_dict = doc.get_dictionary(source.page_id)?;

    let content_data = get_page_content(doc, page_dict)?;

    let bbox = &source.media_box;
    let mut xobject_dict = Dictionary::new();
    xobject_dict.set("Type", Object::Name(b"XObject".to_vec()));
    xobject_dict.set("Subtype", Object::Name(b"Form".to_vec()));
    xobject_dict.set(
        "BBox",
        Object::Array(vec![
            Object::Real(bbox.x),
            Object::Real(bbox.y),
            Object::Real(bbox.right()),
            Object::Real(bbox.top()),
        ]),
    );
    xobject_dict.set("FormType", Object::Integer(1));

    // Resources may live on an ancestor Pages node
    if let Some(resources) = inherited_attribute(doc, source.page_id, b"Resources") {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, doc, &resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()), // No content = blank page
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Stream(stream) => Ok(stream_data(stream)),
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            _ => Ok(Vec::new()),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

/// Concatenate multiple content streams
fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                result.extend_from_slice(&stream_data(stream));
                result.push(b'\n');
            }
        }
    }

    Ok(result)
}

fn stream_data(stream: &Stream) -> Vec<u8> {
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// `Parent` entries are dropped so that copying resources never drags the
/// source's page tree along. Reference cycles are handled by reserving the
/// new id before descending.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => Ok(Object::Stream(Stream {
            dict: copy_dictionary(output, source, &stream.dict, cache)?,
            content: stream.content.clone(),
            allows_compression: stream.allows_compression,
            start_position: None,
        })),
        // Primitive types: just clone
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        if key.as_slice() == b"Parent" {
            continue;
        }
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Attributes
// =============================================================================

/// Look up a page attribute, walking up the page tree when the page itself
/// does not carry it. References are resolved.
pub fn inherited_attribute(doc: &Document, page_id: ObjectId, key: &[u8]) -> Option<Object> {
    let mut node_id = page_id;

    // Bounded walk; a malformed tree may loop
    for _ in 0..64 {
        let node = doc.get_dictionary(node_id).ok()?;
        if let Ok(value) = node.get(key) {
            return Some(resolve(doc, value).clone());
        }
        node_id = node.get(b"Parent").and_then(Object::as_reference).ok()?;
    }

    None
}

fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Get the page's MediaBox as a normalized rectangle.
///
/// Falls back to US Letter when the page tree has no usable MediaBox.
pub fn get_media_box(doc: &Document, page_id: ObjectId) -> Rect {
    let fallback = Rect::new(0.0, 0.0, DEFAULT_PAGE_DIMENSIONS.0, DEFAULT_PAGE_DIMENSIONS.1);

    let Some(Object::Array(values)) = inherited_attribute(doc, page_id, b"MediaBox") else {
        return fallback;
    };

    let coords: Option<Vec<f32>> = values
        .iter()
        .map(|obj| extract_number(resolve(doc, obj)))
        .collect();

    match coords.as_deref() {
        Some(&[x0, y0, x1, y1]) => Rect::new(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs()),
        _ => fallback,
    }
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
