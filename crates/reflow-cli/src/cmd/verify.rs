use clap::Args;
use reflow_core::repr::text_norm::{normalize_newlines, LF};
use reflow_core::stats::content_digest;
use reflow_core::validate::DEFAULT_WIDTH;

use crate::io::text;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Original (unformatted) text path
    #[arg(long)]
    pub r#in: String,

    /// Formatted text path to check against the original
    #[arg(long)]
    pub formatted: String,

    /// Maximum code points allowed per output line
    #[arg(
        long,
        short = 'n',
        env = "REFLOW_WIDTH",
        default_value_t = DEFAULT_WIDTH,
        value_parser = super::width_arg,
        allow_negative_numbers = true
    )]
    pub width: usize,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let original = text::read_input(Some(&args.r#in))?;
    let formatted = text::read_input(Some(&args.formatted))?;

    let want = content_digest(&original);
    let got = content_digest(&formatted);
    if want != got {
        anyhow::bail!("content mismatch: original blake3={want} formatted blake3={got}");
    }

    let norm = normalize_newlines(&formatted);
    for (i, line) in norm.split(LF).enumerate() {
        let len = line.chars().count();
        if len > args.width {
            anyhow::bail!(
                "line {} has {} code points (width {})",
                i + 1,
                len,
                args.width
            );
        }
    }

    let exact = reflow_core::format(&original, args.width) == formatted;
    eprintln!(
        "verify ok: width={} content_blake3={} exact={}",
        args.width, want, exact
    );
    Ok(())
}
