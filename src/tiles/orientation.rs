//! The four rotations a tile can be placed in
//!
//! For an `N`x`N` grid, a placed tile looks up its canonical unit at:
//! - Upright: `(x, y)`
//! - Clockwise: `(N-1-y, x)`
//! - Flipped: `(N-1-x, N-1-y)`
//! - CounterClockwise: `(y, N-1-x)`
//!
//! Edge lookups rotate the requested side index by `0`, `-1`, `-2` and `-3`
//! (mod 4) respectively.

use std::fmt;

use crate::spatial::location::Side;

/// Rotation applied to a tile type's canonical data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Orientation {
    /// No rotation
    Upright,
    /// Rotated a quarter turn clockwise
    Clockwise,
    /// Rotated a half turn
    Flipped,
    /// Rotated a quarter turn counterclockwise
    CounterClockwise,
}

impl Orientation {
    /// All orientations in quarter-turn order
    pub const ALL: [Self; 4] = [
        Self::Upright,
        Self::Clockwise,
        Self::Flipped,
        Self::CounterClockwise,
    ];

    /// Number of clockwise quarter turns this orientation represents
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::Upright => 0,
            Self::Clockwise => 1,
            Self::Flipped => 2,
            Self::CounterClockwise => 3,
        }
    }

    /// Orientation for a number of clockwise quarter turns, wrapping modulo 4
    pub const fn from_quarter_turns(turns: usize) -> Self {
        match turns % 4 {
            0 => Self::Upright,
            1 => Self::Clockwise,
            2 => Self::Flipped,
            _ => Self::CounterClockwise,
        }
    }

    /// This orientation turned one more quarter clockwise
    pub const fn rotated_clockwise(self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + 1)
    }

    /// Both rotations applied one after the other
    pub const fn compose(self, other: Self) -> Self {
        Self::from_quarter_turns(self.quarter_turns() + other.quarter_turns())
    }

    /// Canonical grid coordinates shown at `(x, y)` of an `size`x`size` tile
    ///
    /// Callers guarantee `x < size` and `y < size`.
    pub const fn transform(self, x: usize, y: usize, size: usize) -> (usize, usize) {
        let last = size - 1;
        match self {
            Self::Upright => (x, y),
            Self::Clockwise => (last - y, x),
            Self::Flipped => (last - x, last - y),
            Self::CounterClockwise => (y, last - x),
        }
    }

    /// Canonical side whose edge appears on `side` after rotation
    pub const fn canonical_side(self, side: Side) -> Side {
        Side::from_index(side.index() + 4 - self.quarter_turns())
    }

    /// Side a canonical side ends up on after rotation
    pub const fn world_side(self, canonical: Side) -> Side {
        Side::from_index(canonical.index() + self.quarter_turns())
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Upright => "upright",
            Self::Clockwise => "clockwise",
            Self::Flipped => "flipped",
            Self::CounterClockwise => "counterclockwise",
        };
        f.write_str(name)
    }
}
