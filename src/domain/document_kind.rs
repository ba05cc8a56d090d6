/// Logical document kind for extraction purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pdf,
    Text,
}

const PDF_MAGIC: &[u8] = b"%PDF";

const TEXT_EXTENSIONS: &[&str] = &[".txt", ".md", ".csv", ".json", ".xml"];

impl DocumentKind {
    /// Determine the document kind from content-type header, filename
    /// extension, and magic bytes, in that precedence order. Explicit
    /// metadata is trusted over the filename, the filename over content
    /// inspection, and anything unrecognized falls back to `Text`.
    pub fn detect(content_type: Option<&str>, filename: Option<&str>, content: &[u8]) -> Self {
        if let Some(content_type) = content_type {
            let lowered = content_type.to_lowercase();
            if lowered.contains("pdf") {
                return Self::Pdf;
            }
            if lowered.contains("text") {
                return Self::Text;
            }
        }

        if let Some(filename) = filename {
            let lowered = filename.to_lowercase();
            if lowered.ends_with(".pdf") {
                return Self::Pdf;
            }
            if TEXT_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
                return Self::Text;
            }
        }

        if content.starts_with(PDF_MAGIC) {
            return Self::Pdf;
        }

        Self::Text
    }
}
