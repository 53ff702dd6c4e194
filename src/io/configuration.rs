//! Generation constants and runtime configuration defaults

use crate::spatial::location::Location;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Location opened as the first frontier cell when the map holds no tiles
pub const ORIGIN: Location = Location::new(0, 0);

/// Offsets of the cells whose frontier membership can change when a tile is removed
///
/// Four orthogonal neighbours, four cells at distance two and four diagonal
/// neighbours. The removed cell itself is refreshed separately.
pub const REMOVAL_REFRESH_OFFSETS: [(i32, i32); 12] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (0, 2),
    (2, 0),
    (0, -2),
    (-2, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

/// Runtime parameters for a generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for the deterministic random source
    pub seed: u64,
    /// Location opened when generation starts from an empty map
    pub origin: Location,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            origin: ORIGIN,
        }
    }
}

impl GeneratorConfig {
    /// Configuration with the given seed and the default origin
    pub const fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            origin: ORIGIN,
        }
    }
}
