/// Default character budget for text handed to the derivation provider.
pub const DEFAULT_MAX_CHARS: usize = 100_000;

/// Tighter budget for translation, which consumes more output tokens per
/// input character than the other tasks.
pub const TRANSLATION_MAX_CHARS: usize = 50_000;

/// Normalized text ready for derivation, with a flag recording whether the
/// character budget forced a cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub content: String,
    pub was_truncated: bool,
}

impl ExtractedText {
    /// Enforce a maximum character budget. Truncation is a plain character
    /// prefix cut with no attempt to respect sentence or paragraph
    /// boundaries; applying the same budget twice is a no-op.
    pub fn within_budget(text: String, max_chars: usize) -> Self {
        match text.char_indices().nth(max_chars) {
            None => Self {
                content: text,
                was_truncated: false,
            },
            Some((cut, _)) => {
                tracing::warn!(
                    length = text.chars().count(),
                    max_chars,
                    "text exceeds budget, truncating"
                );
                let mut content = text;
                content.truncate(cut);
                Self {
                    content,
                    was_truncated: true,
                }
            }
        }
    }
}
