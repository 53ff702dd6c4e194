//! Tile, edge and orientation model
//!
//! Catalog data is built once, validated at construction and shared by
//! reference for the rest of the run.

/// Validated tile type collections
pub mod catalog;
/// Directional edge matching
pub mod edge;
/// Rotations and their coordinate transforms
pub mod orientation;
/// Placed tile instances
pub mod tile;
/// Immutable catalog entries
pub mod tile_type;
/// Cell content tokens
pub mod unit;

pub use catalog::Catalog;
pub use edge::Edge;
pub use orientation::Orientation;
pub use tile::Tile;
pub use tile_type::TileType;
pub use unit::Unit;
