//! Greedy text segmentation for speech-synthesis request limits.
//!
//! Speech APIs accept a bounded number of characters per request, so a long
//! reply has to be cut into an ordered sequence of chunks. Cutting mid-word
//! or mid-sentence produces audible artifacts at chunk joins, so each window
//! is split at the furthest natural boundary available: paragraph break,
//! then sentence break, then word break, then a hard cut as the last resort.
//!
//! Segmentation is lossless: separators stay attached to the chunk they end,
//! so concatenating the chunks reproduces the input exactly.

/// Default maximum chunk size in characters (typical speech API limit).
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 4096;

/// Split text into chunks of at most [`DEFAULT_MAX_CHUNK_CHARS`] characters.
pub fn segment(text: &str) -> Vec<String> {
    segment_with_limit(text, DEFAULT_MAX_CHUNK_CHARS)
}

/// Split text into chunks of at most `max_chars` characters.
///
/// # Arguments
/// * `text` - The text to segment
/// * `max_chars` - Maximum chunk length in characters (clamped to at least 1)
///
/// # Returns
/// A non-empty list of chunks whose concatenation equals `text`. Input that
/// already fits the limit (including the empty string) comes back as a
/// single chunk.
pub fn segment_with_limit(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let remaining = chars.len() - start;
        if remaining <= max_chars {
            chunks.push(chars[start..].iter().collect());
            break;
        }

        let window = &chars[start..start + max_chars];
        let split = find_paragraph_break(window)
            .or_else(|| find_sentence_break(window))
            .or_else(|| find_word_break(window))
            .unwrap_or(max_chars);

        chunks.push(chars[start..start + split].iter().collect());
        start += split;
    }

    chunks
}

/// Furthest split point after a paragraph break (double newline) in the
/// window, or `None` if the window contains no paragraph break.
fn find_paragraph_break(window: &[char]) -> Option<usize> {
    (1..window.len())
        .rev()
        .find(|&i| window[i] == '\n' && window[i - 1] == '\n')
        .map(|i| i + 1)
}

/// Furthest split point after a sentence end (terminal punctuation followed
/// by whitespace). The trailing whitespace run stays with the sentence so
/// the split is lossless.
fn find_sentence_break(window: &[char]) -> Option<usize> {
    let i = (1..window.len())
        .rev()
        .find(|&i| window[i].is_whitespace() && is_terminal(window[i - 1]))?;
    Some(end_of_whitespace(window, i))
}

/// Furthest split point after any whitespace, so a hard cut never lands
/// mid-word when a word boundary exists in the window.
fn find_word_break(window: &[char]) -> Option<usize> {
    let i = (1..window.len())
        .rev()
        .find(|&i| window[i].is_whitespace() && !window[i - 1].is_whitespace())?;
    Some(end_of_whitespace(window, i))
}

/// Extend a split point through the rest of a whitespace run, capped at the
/// window edge so the chunk never exceeds the limit.
fn end_of_whitespace(window: &[char], mut i: usize) -> usize {
    while i < window.len() && window[i].is_whitespace() {
        i += 1;
    }
    i
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}
