// crates/reflow-core/src/repr/text_norm.rs
//
// Line-ending normalization (code-point level).
// Goal: every recognized break becomes one LF so line splitting is deterministic
// across platforms and editors.
//
// Rules:
// - CRLF is one break, consumed as a unit (never two).
// - Lone CR, lone LF, U+2028 and U+2029 are one break each.
// - Every other code point passes through unchanged.

pub const LF: char = '\n';
pub const CR: char = '\r';
pub const LINE_SEPARATOR: char = '\u{2028}';
pub const PARAGRAPH_SEPARATOR: char = '\u{2029}';

/// True for any code point that starts or forms a recognized line break.
pub fn is_line_break(c: char) -> bool {
    matches!(c, LF | CR | LINE_SEPARATOR | PARAGRAPH_SEPARATOR)
}

pub fn normalize_newlines(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut it = input.chars().peekable();
    while let Some(c) = it.next() {
        if c == CR {
            // CRLF -> LF
            if it.peek() == Some(&LF) {
                it.next();
            }
            out.push(LF);
            continue;
        }
        if is_line_break(c) {
            out.push(LF);
            continue;
        }
        out.push(c);
    }
    out
}

/// Remove every recognized break without inserting anything in its place.
/// A CRLF pair disappears the same way a lone CR or LF does, so the result
/// does not depend on which break style the input used.
pub fn strip_newlines(input: &str) -> String {
    input.chars().filter(|&c| !is_line_break(c)).collect()
}
