use clap::Args;
use reflow_core::validate::DEFAULT_WIDTH;

use crate::io::text;

#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Input text path ("-" or omitted reads stdin)
    #[arg(long)]
    pub r#in: Option<String>,

    /// Insert a line break after every N code points (values below 1 become 1)
    #[arg(
        long,
        short = 'n',
        env = "REFLOW_WIDTH",
        default_value_t = DEFAULT_WIDTH,
        value_parser = super::width_arg,
        allow_negative_numbers = true
    )]
    pub width: usize,

    /// Output path; if omitted, writes to stdout
    #[arg(long)]
    pub out: Option<String>,
}

pub fn run(args: FormatArgs) -> anyhow::Result<()> {
    let input = text::read_input(args.r#in.as_deref())?;
    let out = reflow_core::format(&input, args.width);

    text::write_output(args.out.as_deref(), &out)?;
    tracing::info!(
        width = args.width,
        total_chars = reflow_core::count(&input),
        in_bytes = input.len(),
        out_bytes = out.len(),
        "format ok"
    );
    Ok(())
}
