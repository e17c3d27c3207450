//! Markup detection for assistant replies.
//!
//! Replies that contain structural markdown (tables, code fences, headers,
//! links, lists) read badly when fed to a speech engine verbatim, so the
//! pipeline flattens them to prose first. This module is the gate: a fixed
//! ordered list of independent line-level predicates, no markdown parser.
//! Precision over recall is fine here; a false positive only triggers an
//! extra idempotent flatten pass.

use once_cell::sync::Lazy;
use regex::Regex;

/// A line beginning with one to six hashes and a space.
static HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6} ").unwrap());

/// A fence delimiter line: three or more backticks, optionally indented.
static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*```").unwrap());

/// An inline `[text](url)` link.
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]+\]\([^)]+\)").unwrap());

/// A bullet or ordered-list item, optionally indented.
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*(?:[-*]|\d+\.) ").unwrap());

/// A table separator row made of dashes, pipes, and alignment colons.
static TABLE_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*:?-+[-\s:|]*\|[-\s:|]*$").unwrap());

/// Decide whether a text block contains structural markup that should be
/// flattened before being spoken.
///
/// Empty input is plain prose by definition. The scan is pure, stateless,
/// and case-sensitive; it never fails.
pub fn contains_markup(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    HEADER.is_match(text)
        || FENCE.is_match(text)
        || LINK.is_match(text)
        || BULLET.is_match(text)
        || text.lines().any(is_table_row)
}

/// A delimited table row has at least two pipes; a separator row may have
/// fewer but consists only of dashes, pipes, and colons.
pub(crate) fn is_table_row(line: &str) -> bool {
    line.matches('|').count() >= 2 || TABLE_SEPARATOR.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_markup() {
        assert!(!contains_markup(""));
    }

    #[test]
    fn test_plain_prose_is_not_markup() {
        assert!(!contains_markup("plain prose."));
        assert!(!contains_markup("Two sentences here. Nothing fancy at all."));
    }

    #[test]
    fn test_table() {
        assert!(contains_markup("| a | b |\n| - | - |\n| 1 | 2 |"));
    }

    #[test]
    fn test_table_separator_row_alone() {
        assert!(contains_markup("---|---"));
    }

    #[test]
    fn test_code_fence() {
        assert!(contains_markup("```\ncode\n```"));
        assert!(contains_markup("```rust\nfn main() {}\n```"));
    }

    #[test]
    fn test_header() {
        assert!(contains_markup("# Heading\ntext"));
        assert!(contains_markup("###### Small heading"));
        // Seven hashes is not a header, and neither is a hash without a space.
        assert!(!contains_markup("####### too deep"));
        assert!(!contains_markup("#hashtag"));
    }

    #[test]
    fn test_link() {
        assert!(contains_markup("[link](http://x)"));
        assert!(contains_markup("see [the docs](https://example.com) for more"));
        assert!(!contains_markup("brackets [alone] and (parens) apart"));
    }

    #[test]
    fn test_bullet_list() {
        assert!(contains_markup("- item one\n- item two"));
        assert!(contains_markup("* starred item"));
        assert!(contains_markup("1. first\n2. second"));
        assert!(!contains_markup("-no space after dash"));
    }

    #[test]
    fn test_header_mid_text() {
        assert!(contains_markup("intro paragraph\n\n## Details\nmore text"));
    }
}
