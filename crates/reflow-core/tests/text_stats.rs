use reflow_core::stats::content_digest;
use reflow_core::{format, TextStats};

#[test]
fn stats_for_small_text() {
    let st = TextStats::compute("abcde\n\nxy", 2);
    assert_eq!(st.width, 2);
    assert_eq!(st.total_chars, 7);
    assert_eq!(st.logical_lines, 3);
    assert_eq!(st.blank_lines, 1);
    assert_eq!(st.longest_line, 5);
    assert_eq!(st.chunks, 4);
    assert_eq!(st.output_lines, 5);
    assert_eq!(format("abcde\n\nxy", 2).split('\n').count(), st.output_lines);
}

#[test]
fn zero_width_counts_one_chunk_per_line() {
    let st = TextStats::compute("abc\r\nde", 0);
    assert_eq!(st.chunks, 2);
    assert_eq!(st.output_lines, 2);
}

#[test]
fn empty_text_is_one_blank_line() {
    let st = TextStats::compute("", 4);
    assert_eq!(st.total_chars, 0);
    assert_eq!(st.logical_lines, 1);
    assert_eq!(st.blank_lines, 1);
    assert_eq!(st.chunks, 0);
}

#[test]
fn digest_ignores_break_style_and_width() {
    let a = content_digest("ab\r\ncd");
    assert_eq!(a, content_digest("ab\ncd"));
    assert_eq!(a, content_digest("ab\rcd"));
    assert_eq!(a, content_digest(&format("ab\r\ncd", 1)));
    assert_ne!(a, content_digest("ab\ncx"));
    assert_eq!(a.len(), 64);
}
