//! Placeholder tokens and the per-statement registry that issues them.
//!
//! Literal values never enter SQL text. Each one is handed to a [`Registry`],
//! which stores it for out-of-band binding and returns a [`Placeholder`] that
//! renders as `prefix + id` (`$1`, `$2`, ...).
//!
//! # Example
//!
//! ```ignore
//! use pgclause::Registry;
//!
//! let mut registry = Registry::new();
//! let table = registry.allocate("users")?;
//! let column = registry.allocate("age")?;
//! assert_eq!(format!("{table} {column}"), "$1 $2");
//! assert_eq!(registry.bound_values()?, vec!["users".into(), "age".into()]);
//! ```

mod registry;
mod value;

#[cfg(test)]
mod tests;

pub use registry::{Registry, SubQuery};
pub use value::Value;

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// An opaque, render-safe stand-in for one bound value.
///
/// A token is only meaningful to the registry lifetime that issued it; the
/// registry checks this through the token's generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    id: u32,
    prefix: Arc<str>,
    generation: u64,
}

impl Placeholder {
    pub(crate) fn new(id: u32, prefix: Arc<str>, generation: u64) -> Self {
        Self {
            id,
            prefix,
            generation,
        }
    }

    /// Numeric id, unique within the issuing registry.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Prefix written before the id.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The wire-format name, e.g. `$3`.
    pub fn name(&self) -> String {
        self.to_string()
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.id)
    }
}

/// Locate `prefix<digits>` tokens in SQL text.
///
/// A prefix directly preceded by an identifier character is part of that
/// identifier (`my_var$1`), not a parameter reference.
pub(crate) fn scan_tokens(sql: &str, prefix: &str) -> Vec<(Range<usize>, u32)> {
    let mut found = Vec::new();
    let bytes = sql.as_bytes();
    let mut from = 0;

    while let Some(offset) = sql[from..].find(prefix) {
        let start = from + offset;
        let digits_start = start + prefix.len();
        let mut end = digits_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }

        let glued = start > 0 && {
            let prev = bytes[start - 1];
            prev == b'_' || prev.is_ascii_alphanumeric()
        };

        if end > digits_start && !glued {
            if let Ok(id) = sql[digits_start..end].parse::<u32>() {
                found.push((start..end, id));
            }
            from = end;
        } else {
            from = digits_start;
        }
    }

    found
}
