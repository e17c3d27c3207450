//! Normalization of text before speech synthesis.
//!
//! Smart punctuation, zero-width characters, and stray control bytes all
//! make TTS engines stumble or produce audible noise, so everything is
//! mapped down to plain ASCII punctuation and tidy whitespace first.

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]{2,}").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Normalize a text block for speech synthesis.
///
/// Replaces smart quotes, dashes, and ellipses with ASCII equivalents,
/// drops zero-width and control characters (newlines and tabs survive),
/// collapses whitespace runs, and trims the result.
pub fn normalize_for_speech(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{2032}' => out.push('\''),
            '\u{201c}' | '\u{201d}' | '\u{2033}' | '\u{00ab}' | '\u{00bb}' => out.push('"'),
            '\u{2013}' | '\u{2014}' | '\u{2011}' | '\u{2012}' | '\u{2015}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{00a0}' => out.push(' '),
            '\u{200b}' | '\u{200c}' | '\u{200d}' | '\u{feff}' => {}
            c if c.is_control() && c != '\n' && c != '\t' => {}
            c => out.push(c),
        }
    }

    let out = SPACE_RUN.replace_all(&out, " ");
    let out = BLANK_RUN.replace_all(&out, "\n\n");
    out.trim().to_string()
}
