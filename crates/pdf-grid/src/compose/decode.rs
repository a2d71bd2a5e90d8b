//! Source decoding

use crate::render::{SourcePage, get_media_box};
use crate::types::SlotError;
use lopdf::Document;

/// Decode a source PDF and pick its first page.
///
/// Every failure is a per-slot error; none of them abort a generation.
pub(crate) fn decode_source(bytes: &[u8]) -> Result<SourcePage, SlotError> {
    let document = Document::load_mem(bytes).map_err(|e| SlotError::Decode(e.to_string()))?;

    // lopdf decrypts empty-password files on load and drops /Encrypt, leaving
    // only the recorded encryption state behind
    if document.encryption_state.is_some() || document.is_encrypted() {
        return Err(SlotError::Encrypted);
    }

    let page_id = document
        .get_pages()
        .values()
        .next()
        .copied()
        .ok_or(SlotError::NoPages)?;

    let media_box = get_media_box(&document, page_id);

    Ok(SourcePage {
        document,
        page_id,
        media_box,
    })
}
