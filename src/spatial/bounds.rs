//! Axis-aligned bounding boxes in map coordinates

use crate::spatial::location::Location;

/// Axis-aligned bounding box for filter bounds and map extent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    /// Minimum coordinates `[x, y]` (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates `[x, y]` (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Box spanning the two corners, in either order
    pub fn new(a: Location, b: Location) -> Self {
        Self {
            min: [a.x.min(b.x), a.y.min(b.y)],
            max: [a.x.max(b.x), a.y.max(b.y)],
        }
    }

    /// Box of `width` by `height` cells whose minimum corner is `origin`
    ///
    /// Zero dimensions are treated as one cell. The far corner is clamped to
    /// the coordinate range.
    pub fn from_size(origin: Location, width: u32, height: u32) -> Self {
        let far = |start: i32, size: u32| {
            i32::try_from(i64::from(start) + i64::from(size.max(1)) - 1).unwrap_or(i32::MAX)
        };
        Self {
            min: [origin.x, origin.y],
            max: [far(origin.x, width), far(origin.y, height)],
        }
    }

    /// Single-cell box
    pub const fn point(location: Location) -> Self {
        Self {
            min: [location.x, location.y],
            max: [location.x, location.y],
        }
    }

    /// Check if a location is within the bounds
    pub const fn contains(&self, location: Location) -> bool {
        location.x >= self.min[0]
            && location.x <= self.max[0]
            && location.y >= self.min[1]
            && location.y <= self.max[1]
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: [self.min[0].min(other.min[0]), self.min[1].min(other.min[1])],
            max: [self.max[0].max(other.max[0]), self.max[1].max(other.max[1])],
        }
    }

    /// Smallest box containing this box and the location
    pub fn including(&self, location: Location) -> Self {
        self.union(&Self::point(location))
    }

    /// Bounds as `(min_x, min_y, max_x, max_y)`
    pub const fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (self.min[0], self.min[1], self.max[0], self.max[1])
    }

    /// Number of columns covered
    pub const fn width(&self) -> u64 {
        self.max[0].abs_diff(self.min[0]) as u64 + 1
    }

    /// Number of rows covered
    pub const fn height(&self) -> u64 {
        self.max[1].abs_diff(self.min[1]) as u64 + 1
    }
}
