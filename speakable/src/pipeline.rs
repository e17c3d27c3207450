//! End-to-end preparation of a reply for speech synthesis.

use crate::cleaner::normalize_for_speech;
use crate::markup::contains_markup;
use crate::prose::flatten_markup;
use crate::segmenter::{segment_with_limit, DEFAULT_MAX_CHUNK_CHARS};

/// Options for [`prepare`].
#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// Maximum chunk length in characters.
    pub max_chunk_chars: usize,
    /// Flatten structural markup to prose when the detector fires.
    pub flatten_markup: bool,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
            flatten_markup: true,
        }
    }
}

/// Prepare a reply for speech synthesis.
///
/// Markup detection gates the flatten step, the text is normalized, and the
/// result is segmented into chunks ready to go out one request apiece. The
/// whole pass is pure; callers may invoke it concurrently without
/// coordination.
pub fn prepare(text: &str, options: &PrepareOptions) -> Vec<String> {
    let flattened;
    let text = if options.flatten_markup && contains_markup(text) {
        flattened = flatten_markup(text);
        flattened.as_str()
    } else {
        text
    };

    let normalized = normalize_for_speech(text);
    segment_with_limit(&normalized, options.max_chunk_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prose_passes_through() {
        let chunks = prepare("A short reply.", &PrepareOptions::default());
        assert_eq!(chunks, vec!["A short reply."]);
    }

    #[test]
    fn test_markup_is_flattened_before_chunking() {
        let chunks = prepare("# Status\n\nAll **good**.", &PrepareOptions::default());
        assert_eq!(chunks, vec!["Status\n\nAll good."]);
    }

    #[test]
    fn test_flattening_can_be_disabled() {
        let chunks = prepare(
            "# Status",
            &PrepareOptions {
                flatten_markup: false,
                ..Default::default()
            },
        );
        assert_eq!(chunks, vec!["# Status"]);
    }

    #[test]
    fn test_long_reply_is_chunked() {
        let text = format!("{}\n\n{}", "a".repeat(3000), "b".repeat(3000));
        let chunks = prepare(&text, &PrepareOptions::default());
        assert!(chunks.len() >= 2);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= DEFAULT_MAX_CHUNK_CHARS);
        }
    }

    #[test]
    fn test_empty_reply_yields_one_empty_chunk() {
        let chunks = prepare("", &PrepareOptions::default());
        assert_eq!(chunks, vec![String::new()]);
    }
}
