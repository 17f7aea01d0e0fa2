// crates/reflow-core/src/format.rs

use crate::chunk::wrap_line;
use crate::repr::text_norm::{normalize_newlines, strip_newlines, LF};

/// Normalize breaks, then reflow every logical line to chunks of `n` code points.
///
/// Lines are split with `str::split` rather than `str::lines` so blank lines and a
/// trailing break survive; the number of logical lines never changes.
pub fn format(text: &str, n: usize) -> String {
    let norm = normalize_newlines(text);
    let mut out = String::with_capacity(norm.len() + norm.len() / n.max(1));
    for (i, line) in norm.split(LF).enumerate() {
        if i > 0 {
            out.push(LF);
        }
        out.push_str(&wrap_line(line, n));
    }
    out
}

/// Number of code points in `text` once every recognized break is removed.
pub fn count(text: &str) -> usize {
    strip_newlines(text).chars().count()
}
