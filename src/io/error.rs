//! Error types for catalog validation, map preconditions and generation failures

use std::fmt;

use crate::spatial::location::Location;

/// Main error type for all tiling operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilingError {
    /// A tile type failed construction-time validation
    InvalidTileType {
        /// Name of the offending tile type (may be empty)
        name: String,
        /// Description of what's wrong with the definition
        reason: String,
    },

    /// The catalog as a whole violates the input contract
    ///
    /// Occurs when the catalog is empty, holds two types with the same name,
    /// or mixes tile sizes.
    InvalidCatalog {
        /// Description of the violated requirement
        reason: String,
    },

    /// Precondition violation on an argument
    InvalidArgument {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Removal was requested at a location holding no tile
    MissingTile {
        /// The empty location
        location: Location,
    },

    /// A draw was requested from a chooser with zero total weight
    NoOptions,

    /// No tile type can legally be placed anywhere on the filtered frontier
    ///
    /// The catalog is insufficient for the current frontier; the caller needs a
    /// richer catalog or a less restrictive location filter.
    UnsatisfiableCatalog {
        /// Generation iteration when this occurred
        iteration: usize,
        /// Number of filtered frontier locations that were examined
        frontier_size: usize,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileType { name, reason } => {
                write!(f, "Invalid tile type '{name}': {reason}")
            }
            Self::InvalidCatalog { reason } => {
                write!(f, "Invalid catalog: {reason}")
            }
            Self::InvalidArgument {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid argument '{parameter}' = '{value}': {reason}")
            }
            Self::MissingTile { location } => {
                write!(f, "No tile present at {location}")
            }
            Self::NoOptions => {
                write!(f, "No options available: total weight is zero")
            }
            Self::UnsatisfiableCatalog {
                iteration,
                frontier_size,
            } => {
                write!(
                    f,
                    "No legal tile type at iteration {iteration} ({frontier_size} frontier locations)"
                )
            }
        }
    }
}

impl std::error::Error for TilingError {}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Create an invalid argument error
pub fn invalid_argument(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidArgument {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid tile type error
pub fn invalid_tile_type(name: &impl ToString, reason: &impl ToString) -> TilingError {
    TilingError::InvalidTileType {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid catalog error
pub fn invalid_catalog(reason: &impl ToString) -> TilingError {
    TilingError::InvalidCatalog {
        reason: reason.to_string(),
    }
}
