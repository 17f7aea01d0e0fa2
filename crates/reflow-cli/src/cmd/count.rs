use clap::Args;

use crate::io::text;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Input text path ("-" or omitted reads stdin)
    #[arg(long)]
    pub r#in: Option<String>,
}

pub fn run(args: CountArgs) -> anyhow::Result<()> {
    let input = text::read_input(args.r#in.as_deref())?;
    let n = reflow_core::count(&input);
    println!("{n}");
    tracing::info!(in_bytes = input.len(), total_chars = n, "count ok");
    Ok(())
}
