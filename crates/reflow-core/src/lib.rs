pub mod error;
pub mod validate;

pub mod repr;
pub mod chunk;
pub mod format;
pub mod stats;

pub use crate::error::{ReflowError, Result};
pub use crate::format::{count, format};
pub use crate::stats::TextStats;
