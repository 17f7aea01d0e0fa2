use clap::Args;
use reflow_core::validate::DEFAULT_WIDTH;
use reflow_core::TextStats;

use crate::io::{jsonl, text};

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Input text path ("-" or omitted reads stdin)
    #[arg(long)]
    pub r#in: Option<String>,

    /// Chunk width the report is computed for
    #[arg(
        long,
        short = 'n',
        env = "REFLOW_WIDTH",
        default_value_t = DEFAULT_WIDTH,
        value_parser = super::width_arg,
        allow_negative_numbers = true
    )]
    pub width: usize,

    /// Print one JSON object on stdout instead of the report on stderr
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: StatsArgs) -> anyhow::Result<()> {
    let input = text::read_input(args.r#in.as_deref())?;
    let st = TextStats::compute(&input, args.width);

    if args.json {
        return jsonl::write_stats_stdout(&st);
    }

    eprintln!("--- stats ---");
    eprintln!("file            = {}", args.r#in.as_deref().unwrap_or("-"));
    eprintln!("width           = {}", st.width);
    eprintln!("total_chars     = {}", st.total_chars);
    eprintln!("logical_lines   = {}", st.logical_lines);
    eprintln!("blank_lines     = {}", st.blank_lines);
    eprintln!("longest_line    = {}", st.longest_line);
    eprintln!("chunks          = {}", st.chunks);
    eprintln!("output_lines    = {}", st.output_lines);
    eprintln!("content_blake3  = {}", st.content_digest);

    Ok(())
}
