// crates/reflow-cli/src/cmd/mod.rs

pub mod count;
pub mod format;
pub mod stats;
pub mod verify;

/// clap value parser for every `--width`: integers below 1 clamp to 1,
/// anything that is not an integer is an error.
pub fn width_arg(s: &str) -> Result<usize, String> {
    reflow_core::validate::parse_width(s).map_err(|e| e.to_string())
}
