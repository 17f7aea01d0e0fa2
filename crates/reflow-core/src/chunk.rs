// crates/reflow-core/src/chunk.rs
//
// Per-line chunking. A "character" is one Unicode scalar value (a Rust `char`):
// digits, letters, symbols, ideographs and emoji all count as one unit. A ZWJ
// emoji sequence or a base + combining mark is several units and may be split.

use crate::repr::text_norm::LF;

/// Borrowed chunk segments of a single logical line.
///
/// Every segment holds exactly `n` code points except possibly the last.
/// `n == 0` yields the whole line as one segment. An empty line yields nothing.
#[derive(Clone, Debug)]
pub struct Chunks<'a> {
    rest: &'a str,
    n: usize,
}

pub fn chunks(line: &str, n: usize) -> Chunks<'_> {
    Chunks { rest: line, n }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let cut = if self.n == 0 {
            self.rest.len()
        } else {
            self.rest
                .char_indices()
                .nth(self.n)
                .map(|(i, _)| i)
                .unwrap_or(self.rest.len())
        };
        let (head, tail) = self.rest.split_at(cut);
        self.rest = tail;
        Some(head)
    }
}

impl std::iter::FusedIterator for Chunks<'_> {}

/// Insert a break after every `n`-th code point of `line`, never after the last one.
/// `n == 0` returns the line unchanged.
pub fn wrap_line(line: &str, n: usize) -> String {
    if n == 0 {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + line.len() / n);
    for (i, seg) in chunks(line, n).enumerate() {
        if i > 0 {
            out.push(LF);
        }
        out.push_str(seg);
    }
    out
}
