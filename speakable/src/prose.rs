//! Markdown-to-prose flattening for speech output.
//!
//! Rewrites structural markdown into something a listener can follow:
//! fence delimiters and table separator rows disappear, table rows become
//! comma-joined cells, headers and bullet markers lose their punctuation,
//! links collapse to their text. Inline code content is kept since the
//! identifiers are usually the point of the sentence.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::markup::is_table_row;

static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\([^)]*\)").unwrap());
static INLINE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]*\)").unwrap());
static HEADER_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#{1,6} ").unwrap());
static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s*)[-*] ").unwrap());
static SEPARATOR_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\|?[-\s:|]+$").unwrap());

/// Flatten structural markdown in `text` into plain prose.
///
/// Idempotent: running the output through again changes nothing.
pub fn flatten_markup(text: &str) -> String {
    let mut out: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.trim_start().starts_with("```") {
            // Fence delimiter; the fenced content itself is kept.
            continue;
        }

        if is_table_row(line) {
            if SEPARATOR_ROW.is_match(line) {
                continue;
            }
            out.push(flatten_table_row(line));
            continue;
        }

        let line = HEADER_MARKER.replace(line, "");
        let line = BULLET_MARKER.replace(&line, "$1");
        out.push(flatten_inline(&line));
    }

    out.join("\n")
}

/// Join the cells of a table row with commas so the row reads as a clause.
fn flatten_table_row(line: &str) -> String {
    let cells: Vec<String> = line
        .split('|')
        .map(|cell| flatten_inline(cell.trim()))
        .filter(|cell| !cell.is_empty())
        .collect();
    cells.join(", ")
}

/// Strip inline markup: images and links collapse to their text, emphasis
/// asterisks and backticks are dropped. Underscores stay because they show
/// up inside identifiers.
fn flatten_inline(line: &str) -> String {
    let line = IMAGE.replace_all(line, "$1");
    let line = INLINE_LINK.replace_all(&line, "$1");
    line.replace(['*', '`'], "")
}
