mod pdf_extractor;
mod text_decoder;

pub use pdf_extractor::extract_pdf_text;
pub use text_decoder::decode_text;

use crate::domain::DocumentKind;

/// Convert raw document bytes of a known kind into a decoded string.
pub fn extract_text(content: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
    match kind {
        DocumentKind::Pdf => extract_pdf_text(content),
        DocumentKind::Text => decode_text(content),
    }
}

/// Extraction failures all stem from the input document, not server state;
/// the endpoint layer reports them as 400-class processing errors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("PDF is encrypted and cannot be processed")]
    EncryptedDocument,
    #[error(
        "no extractable text found in PDF ({page_count} pages); the document \
         may be image-based, scanned, or have text extraction restrictions"
    )]
    NoExtractableText { page_count: usize },
    #[error("invalid or corrupted PDF file: {0}")]
    CorruptDocument(String),
    #[error("unable to decode content with any supported encoding")]
    UndecodableText,
}
