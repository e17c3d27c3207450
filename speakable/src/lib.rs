//! speakable - prepare assistant replies for speech synthesis.
//!
//! A reply that goes out to a speech API needs three things done to it:
//! structural markup flattened to prose (gated by a cheap detector), smart
//! punctuation and junk characters normalized away, and the whole thing cut
//! into chunks that fit the API's per-request character limit without
//! splitting mid-word. All of it is pure string processing; the HTTP side
//! of speech synthesis lives elsewhere.

pub mod cleaner;
pub mod config;
pub mod markup;
pub mod pipeline;
pub mod prose;
pub mod segmenter;

pub use cleaner::normalize_for_speech;
pub use markup::contains_markup;
pub use pipeline::{prepare, PrepareOptions};
pub use prose::flatten_markup;
pub use segmenter::{segment, segment_with_limit, DEFAULT_MAX_CHUNK_CHARS};
