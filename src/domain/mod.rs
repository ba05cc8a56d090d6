mod blob_metadata;
mod blob_reference;
mod document_kind;
mod extracted_text;

pub use blob_metadata::BlobMetadata;
pub use blob_reference::{BlobReference, InvalidReference};
pub use document_kind::DocumentKind;
pub use extracted_text::{DEFAULT_MAX_CHARS, ExtractedText, TRANSLATION_MAX_CHARS};
