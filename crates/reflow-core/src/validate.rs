use std::num::IntErrorKind;

use crate::error::{ReflowError, Result};

/// Initial width of the interactive tool.
pub const DEFAULT_WIDTH: usize = 2;

/// Boundary policy for a live user control: anything below 1 becomes 1.
pub fn clamp_width(n: i64) -> usize {
    usize::try_from(n.max(1)).unwrap_or(usize::MAX)
}

/// Strict variant for callers that prefer to reject instead of clamp.
pub fn validate_width(n: i64) -> Result<usize> {
    if n < 1 {
        return Err(ReflowError::Validation(format!(
            "width must be >= 1 (got {n})"
        )));
    }
    Ok(clamp_width(n))
}

/// Parse a user-supplied width. Non-integers are rejected, never read as zero;
/// integers below 1 are clamped, and so are integers too large for `i64`.
pub fn parse_width(s: &str) -> Result<usize> {
    match s.trim().parse::<i64>() {
        Ok(n) => Ok(clamp_width(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(usize::MAX),
            IntErrorKind::NegOverflow => Ok(1),
            _ => Err(ReflowError::InvalidWidth(s.to_string())),
        },
    }
}
