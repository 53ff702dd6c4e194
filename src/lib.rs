//! Edge-matched square tile map generation with chronological backtracking
//!
//! Tiles from a catalog are placed one at a time on an unbounded grid so that
//! every shared edge is compatible. When a placement leaves some frontier
//! cell impossible to fill, recent placements are undone and the offending
//! choices excluded until the frontier is satisfiable again.

#![forbid(unsafe_code)]

/// Generation loop, tile selection and repair
pub mod algorithm;
/// Error handling and configuration
pub mod io;
/// Weighted selection and unbiased random ranges
pub mod math;
/// Locations, filters, listeners and the live map state
pub mod spatial;
/// Tile, edge and orientation model
pub mod tiles;

pub use algorithm::{GenerationReport, Generator};
pub use io::configuration::GeneratorConfig;
pub use io::error::{Result, TilingError};
pub use spatial::{Location, MapState, Side};
pub use tiles::{Catalog, Edge, Orientation, Tile, TileType, Unit};
