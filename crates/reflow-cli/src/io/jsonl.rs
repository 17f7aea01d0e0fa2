// crates/reflow-cli/src/io/jsonl.rs

use reflow_core::TextStats;

/// One JSON object per stats report, no trailing newline.
/// All fields are integers or hex strings, so no escaping is needed.
pub fn stats_line(st: &TextStats) -> String {
    format!(
        "{{\"width\":{},\"total_chars\":{},\"logical_lines\":{},\"blank_lines\":{},\"longest_line\":{},\"chunks\":{},\"output_lines\":{},\"content_blake3\":\"{}\"}}",
        st.width,
        st.total_chars,
        st.logical_lines,
        st.blank_lines,
        st.longest_line,
        st.chunks,
        st.output_lines,
        st.content_digest
    )
}

/// Write a stats report as a JSONL line to stdout.
pub fn write_stats_stdout(st: &TextStats) -> anyhow::Result<()> {
    println!("{}", stats_line(st));
    Ok(())
}
