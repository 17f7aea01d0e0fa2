// crates/reflow-cli/src/io/text.rs

use anyhow::Context;
use std::io::{Read, Write};

/// Read UTF-8 text from a file, or from stdin when `path` is absent or "-".
pub fn read_input(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        None | Some("-") => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("read text from stdin")?;
            Ok(s)
        }
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read text {p}")),
    }
}

/// Write text byte-exact to a file, or to stdout when `path` is absent or "-".
pub fn write_output(path: Option<&str>, text: &str) -> anyhow::Result<()> {
    match path {
        None | Some("-") => {
            let mut out = std::io::stdout().lock();
            out.write_all(text.as_bytes())
                .and_then(|_| out.flush())
                .context("write text to stdout")?;
            Ok(())
        }
        Some(p) => std::fs::write(p, text).with_context(|| format!("write text {p}")),
    }
}
