//! Grid locations and the four sides of a square cell
//!
//! `y` grows towards the top side: the Top neighbour of `(x, y)` is
//! `(x, y + 1)` and the Right neighbour is `(x + 1, y)`.

use std::fmt;

/// One side of a square cell, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    /// Side facing `y + 1`
    Top,
    /// Side facing `x + 1`
    Right,
    /// Side facing `y - 1`
    Bottom,
    /// Side facing `x - 1`
    Left,
}

impl Side {
    /// All sides in canonical order {top, right, bottom, left}
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Position of this side in canonical order
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// Side at the given canonical position, wrapping modulo 4
    pub const fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Self::Top,
            1 => Self::Right,
            2 => Self::Bottom,
            _ => Self::Left,
        }
    }

    /// The side facing this one across a shared edge
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Unit step `(dx, dy)` towards the neighbour on this side
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Top => (0, 1),
            Self::Right => (1, 0),
            Self::Bottom => (0, -1),
            Self::Left => (-1, 0),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// Integer cell coordinates on the unbounded map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate, growing towards the top
    pub y: i32,
}

impl Location {
    /// Create a location
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Location shifted by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Orthogonal neighbour on the given side
    pub const fn neighbor(self, side: Side) -> Self {
        let (dx, dy) = side.offset();
        self.offset(dx, dy)
    }

    /// All four orthogonal neighbours paired with the side they lie on
    pub const fn neighbors(self) -> [(Side, Self); 4] {
        [
            (Side::Top, self.neighbor(Side::Top)),
            (Side::Right, self.neighbor(Side::Right)),
            (Side::Bottom, self.neighbor(Side::Bottom)),
            (Side::Left, self.neighbor(Side::Left)),
        ]
    }

    /// Manhattan distance to another location
    pub const fn manhattan_distance(self, other: Self) -> u64 {
        self.x.abs_diff(other.x) as u64 + self.y.abs_diff(other.y) as u64
    }

    /// Squared Euclidean distance to another location, saturating at `u64::MAX`
    pub const fn squared_distance(self, other: Self) -> u64 {
        let dx = self.x.abs_diff(other.x) as u64;
        let dy = self.y.abs_diff(other.y) as u64;
        dx.saturating_mul(dx).saturating_add(dy.saturating_mul(dy))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Location {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
