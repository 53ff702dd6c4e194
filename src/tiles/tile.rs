//! Placed tile instances: a tile type seen through an orientation

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::io::error::{Result, invalid_argument};
use crate::spatial::location::Side;
use crate::tiles::edge::Edge;
use crate::tiles::orientation::Orientation;
use crate::tiles::tile_type::TileType;
use crate::tiles::unit::Unit;

/// A tile type paired with the orientation it is placed in
///
/// Two tiles are equal when their type names and orientations are equal.
#[derive(Debug, Clone)]
pub struct Tile {
    tile_type: Arc<TileType>,
    orientation: Orientation,
}

impl Tile {
    /// Create a tile instance
    pub const fn new(tile_type: Arc<TileType>, orientation: Orientation) -> Self {
        Self {
            tile_type,
            orientation,
        }
    }

    /// The catalog entry this tile instantiates
    pub const fn tile_type(&self) -> &Arc<TileType> {
        &self.tile_type
    }

    /// Orientation applied to the type's canonical data
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Side length of the unit grid
    pub fn size(&self) -> usize {
        self.tile_type.size()
    }

    /// Unit shown at `(x, y)` after applying the orientation
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if either coordinate lies outside `[0, N)`
    pub fn unit(&self, x: usize, y: usize) -> Result<&Unit> {
        let size = self.size();
        if x >= size || y >= size {
            return Err(invalid_argument(
                "coordinates",
                &format!("({x}, {y})"),
                &format!("must lie within a {size}x{size} tile"),
            ));
        }
        let (cx, cy) = self.orientation.transform(x, y, size);
        self.tile_type.unit(cx, cy).ok_or_else(|| {
            invalid_argument(
                "coordinates",
                &format!("({x}, {y})"),
                &"transformed coordinates fall outside the unit grid",
            )
        })
    }

    /// Edge presented on the given side after applying the orientation
    pub fn edge(&self, side: Side) -> &Edge {
        self.tile_type.edge(self.orientation.canonical_side(side))
    }

    /// Sides this tile grows the frontier from, rotated into map directions
    pub fn open_sides(&self) -> impl Iterator<Item = Side> + '_ {
        self.tile_type
            .open_sides()
            .iter()
            .map(|&side| self.orientation.world_side(side))
    }

    /// Whether this tile grows the frontier from the given map side
    pub fn has_open_side(&self, side: Side) -> bool {
        let canonical = self.orientation.canonical_side(side);
        self.tile_type.open_sides().contains(&canonical)
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation && self.tile_type.name() == other.tile_type.name()
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tile_type.name().hash(state);
        self.orientation.hash(state);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.tile_type.name(), self.orientation)
    }
}
