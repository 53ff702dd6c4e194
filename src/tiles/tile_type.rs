//! Immutable catalog entries describing one kind of tile
//!
//! A tile type owns a square grid of units, four edges in canonical order
//! {top, right, bottom, left}, the orientations it may be placed in and the
//! sides it is allowed to grow the frontier from. All validation happens at
//! construction so generation can treat the data as trusted.

use ndarray::Array2;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::io::error::{Result, invalid_tile_type};
use crate::spatial::location::Side;
use crate::tiles::edge::Edge;
use crate::tiles::orientation::Orientation;
use crate::tiles::unit::Unit;

/// A catalog entry: name, selection weight, unit grid, edges and placement rules
#[derive(Debug, Clone)]
pub struct TileType {
    name: String,
    weight: u32,
    /// Canonical units indexed `[x, y]`, `y` growing towards the top edge
    units: Array2<Unit>,
    edges: [Edge; 4],
    orientations: Vec<Orientation>,
    open_sides: Vec<Side>,
}

impl TileType {
    /// Create a tile type from rows of units
    ///
    /// Rows are given top row first, as they read on the page. The type
    /// starts out allowed in all four orientations and open on all four sides.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileType` if the name is empty or the rows do not form
    /// a non-empty square grid
    pub fn new(name: &str, weight: u32, rows: Vec<Vec<Unit>>, edges: [Edge; 4]) -> Result<Self> {
        if name.is_empty() {
            return Err(invalid_tile_type(&name, &"name must not be empty"));
        }

        let size = rows.len();
        if size == 0 {
            return Err(invalid_tile_type(&name, &"unit grid must not be empty"));
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(invalid_tile_type(
                &name,
                &format!(
                    "unit grid must be square: row {row} has {} units, expected {size}",
                    cells.len()
                ),
            ));
        }

        // Top row first on the page means the highest y comes first
        let cells: Vec<Unit> = (0..size)
            .flat_map(|x| (0..size).map(move |y| (x, y)))
            .filter_map(|(x, y)| {
                rows.get(size - 1 - y)
                    .and_then(|row| row.get(x))
                    .cloned()
            })
            .collect();
        let units = Array2::from_shape_vec((size, size), cells).map_err(|error| {
            invalid_tile_type(&name, &format!("unit grid could not be built: {error}"))
        })?;

        Ok(Self {
            name: name.to_string(),
            weight,
            units,
            edges,
            orientations: Orientation::ALL.to_vec(),
            open_sides: Side::ALL.to_vec(),
        })
    }

    /// Create a tile type whose `size`x`size` grid holds a single unit
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileType` if the name is empty or `size` is zero
    pub fn filled(
        name: &str,
        weight: u32,
        size: usize,
        unit: &Unit,
        edges: [Edge; 4],
    ) -> Result<Self> {
        Self::new(name, weight, vec![vec![unit.clone(); size]; size], edges)
    }

    /// Restrict the orientations this type may be placed in
    ///
    /// Symmetric types list only the orientations that produce distinct
    /// placements.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileType` if the set is empty or holds duplicates
    pub fn with_orientations(mut self, orientations: &[Orientation]) -> Result<Self> {
        if orientations.is_empty() {
            return Err(invalid_tile_type(
                &self.name,
                &"orientation set must not be empty",
            ));
        }
        if !all_distinct(orientations) {
            return Err(invalid_tile_type(
                &self.name,
                &"orientation set must not hold duplicates",
            ));
        }
        self.orientations = orientations.to_vec();
        Ok(self)
    }

    /// Restrict the canonical sides this type may grow the frontier from
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileType` if the set is empty or holds duplicates
    pub fn with_open_sides(mut self, open_sides: &[Side]) -> Result<Self> {
        if open_sides.is_empty() {
            return Err(invalid_tile_type(
                &self.name,
                &"open edge set must not be empty",
            ));
        }
        if !all_distinct(open_sides) {
            return Err(invalid_tile_type(
                &self.name,
                &"open edge set must not hold duplicates",
            ));
        }
        self.open_sides = open_sides.to_vec();
        Ok(self)
    }

    /// Name identifying this type within its catalog
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Selection weight relative to the other catalog entries
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Side length `N` of the unit grid
    pub fn size(&self) -> usize {
        self.units.nrows()
    }

    /// Canonical unit at `(x, y)`, if inside the grid
    pub fn unit(&self, x: usize, y: usize) -> Option<&Unit> {
        self.units.get((x, y))
    }

    /// Canonical edge on the given side
    pub const fn edge(&self, side: Side) -> &Edge {
        match side {
            Side::Top => &self.edges[0],
            Side::Right => &self.edges[1],
            Side::Bottom => &self.edges[2],
            Side::Left => &self.edges[3],
        }
    }

    /// All edges in canonical order
    pub const fn edges(&self) -> &[Edge; 4] {
        &self.edges
    }

    /// Orientations producing distinct placements of this type
    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }

    /// Canonical sides this type may grow the frontier from
    pub fn open_sides(&self) -> &[Side] {
        &self.open_sides
    }
}

fn all_distinct<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|value| seen.insert(value))
}

impl PartialEq for TileType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for TileType {}

impl Hash for TileType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
