// crates/reflow-core/src/stats.rs
//
// Per-text statistics for a given width. Everything is derived from the input
// alone; nothing is cached between calls.

use crate::chunk::chunks;
use crate::format::count;
use crate::repr::text_norm::{normalize_newlines, strip_newlines, LF};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextStats {
    pub width: usize,
    pub total_chars: usize,
    pub logical_lines: usize,
    pub blank_lines: usize,
    pub longest_line: usize,
    pub chunks: usize,
    /// Lines in the formatted output: logical lines plus synthetic breaks.
    pub output_lines: usize,
    pub content_digest: String,
}

impl TextStats {
    pub fn compute(text: &str, width: usize) -> Self {
        let norm = normalize_newlines(text);

        let mut logical_lines = 0usize;
        let mut blank_lines = 0usize;
        let mut longest_line = 0usize;
        let mut total_chunks = 0usize;
        let mut output_lines = 0usize;

        for line in norm.split(LF) {
            logical_lines += 1;
            let len = line.chars().count();
            longest_line = longest_line.max(len);
            if len == 0 {
                blank_lines += 1;
                output_lines += 1;
                continue;
            }
            let k = chunks(line, width).count();
            total_chunks += k;
            output_lines += k;
        }

        Self {
            width,
            total_chars: count(text),
            logical_lines,
            blank_lines,
            longest_line,
            chunks: total_chunks,
            output_lines,
            content_digest: content_digest(text),
        }
    }
}

/// BLAKE3 hex of the text with every break removed.
///
/// Identical for any break style and for the output of `format` at any width.
pub fn content_digest(text: &str) -> String {
    blake3::hash(strip_newlines(text).as_bytes())
        .to_hex()
        .to_string()
}
