use lopdf::Document;

use super::ExtractionError;

/// Extract text from a PDF, page by page in document order. Pages whose
/// extraction yields nothing (image-only pages, extraction failures) are
/// skipped; surviving pages are joined with a newline.
pub fn extract_pdf_text(content: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(content)
        .map_err(|e| ExtractionError::CorruptDocument(e.to_string()))?;

    // Reject before any extraction attempt; content-level decryption is
    // out of scope.
    if doc.is_encrypted() {
        return Err(ExtractionError::EncryptedDocument);
    }

    let pages = doc.get_pages();
    let page_count = pages.len();

    let mut page_texts: Vec<String> = Vec::with_capacity(page_count);

    for page_number in pages.keys() {
        let page_text = doc.extract_text(&[*page_number]).unwrap_or_default();
        if !page_text.trim().is_empty() {
            page_texts.push(page_text);
        }
    }

    let extracted = page_texts.join("\n");

    // Scanned or image-only PDFs end up here; the page count gives the
    // caller something to diagnose with.
    if extracted.trim().is_empty() {
        return Err(ExtractionError::NoExtractableText { page_count });
    }

    tracing::info!(
        page_count,
        chars = extracted.len(),
        "PDF text extraction complete"
    );

    Ok(extracted)
}
