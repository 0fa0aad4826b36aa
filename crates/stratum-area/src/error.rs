//! Error types for area construction.

use std::fmt;

/// Errors arising from [`Area`](crate::Area) construction.
///
/// Queries themselves never fail with an error; indeterminate results
/// are encoded in their return values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AreaError {
    /// Width or height of zero tiles.
    EmptyArea,
    /// A dimension does not fit the coordinate space.
    DimensionTooLarge {
        /// Which dimension overflowed.
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// Largest accepted value.
        max: u32,
    },
}

impl fmt::Display for AreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArea => write!(f, "area must span at least one tile on each axis"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} of {value} exceeds the maximum of {max}")
            }
        }
    }
}

impl std::error::Error for AreaError {}
