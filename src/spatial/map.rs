//! Live map state: placed tiles, the frontier and per-location bookkeeping
//!
//! The map owns every mutable collection of a generation run. Locations are
//! plain value keys; tiles share their catalog data through `Arc`.
//!
//! Frontier invariant: a location is in the frontier only if it holds no tile
//! and an orthogonal neighbour holds a tile with an open side facing it. The
//! one exception is the origin opened on an empty map.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use crate::io::configuration::REMOVAL_REFRESH_OFFSETS;
use crate::io::error::{Result, TilingError, invalid_argument};
use crate::spatial::bounds::BoundingBox;
use crate::spatial::filter::LocationFilter;
use crate::spatial::listener::{ListenerRegistry, MapEvent, MapListener};
use crate::spatial::location::Location;
use crate::tiles::catalog::Catalog;
use crate::tiles::orientation::Orientation;
use crate::tiles::tile::Tile;
use crate::tiles::tile_type::TileType;

/// Placed tiles, frontier, placement ages, exclusions and listeners
pub struct MapState {
    tiles: BTreeMap<Location, Tile>,
    frontier: BTreeSet<Location>,
    /// Placement order stamp per occupied location
    ages: HashMap<Location, u64>,
    next_age: u64,
    /// Tiles proven unplaceable per location; entries are never removed
    exclusions: HashMap<Location, HashSet<Tile>>,
    listeners: ListenerRegistry,
    filter: Box<dyn LocationFilter>,
    tile_size: usize,
}

impl MapState {
    /// Create an empty map for tiles of side length `tile_size`
    pub fn new(tile_size: usize, filter: impl LocationFilter + 'static) -> Self {
        Self {
            tiles: BTreeMap::new(),
            frontier: BTreeSet::new(),
            ages: HashMap::new(),
            next_age: 0,
            exclusions: HashMap::new(),
            listeners: ListenerRegistry::new(),
            filter: Box::new(filter),
            tile_size,
        }
    }

    /// Create an empty map sized for the tiles of `catalog`
    pub fn for_catalog(catalog: &Catalog, filter: impl LocationFilter + 'static) -> Self {
        Self::new(catalog.tile_size(), filter)
    }

    /// Attach a listener to a lifecycle event
    pub fn add_listener(&mut self, event: MapEvent, listener: impl MapListener + 'static) {
        self.listeners.register(event, Box::new(listener));
    }

    /// Number of listeners attached to `event`
    pub const fn listener_count(&self, event: MapEvent) -> usize {
        self.listeners.count(event)
    }

    /// Store `tile` at an unoccupied `location` and grow the frontier
    ///
    /// The location must be empty; this is the caller's responsibility and is
    /// only checked in debug builds. Use [`MapState::seed`] for validated
    /// placement of caller-provided tiles.
    pub fn place(&mut self, location: Location, tile: Tile) {
        debug_assert!(
            !self.tiles.contains_key(&location),
            "place called on occupied location {location}"
        );

        self.dispatch(MapEvent::BeforePlace, location);

        self.frontier.remove(&location);
        let opened: Vec<Location> = tile
            .open_sides()
            .map(|side| location.neighbor(side))
            .collect();
        self.tiles.insert(location, tile);
        self.ages.insert(location, self.next_age);
        self.next_age += 1;

        for neighbor in opened {
            if !self.tiles.contains_key(&neighbor) {
                self.frontier.insert(neighbor);
            }
        }

        self.dispatch(MapEvent::AfterPlace, location);
    }

    /// Place a caller-provided tile after checking it fits this map
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the location is occupied or the tile's
    /// size differs from the map's tile size
    pub fn seed(&mut self, location: Location, tile: Tile) -> Result<()> {
        if self.tiles.contains_key(&location) {
            return Err(invalid_argument(
                "location",
                &location,
                &"already holds a tile",
            ));
        }
        if tile.size() != self.tile_size {
            return Err(invalid_argument(
                "tile",
                &tile,
                &format!(
                    "has size {}, map uses size {}",
                    tile.size(),
                    self.tile_size
                ),
            ));
        }
        self.place(location, tile);
        Ok(())
    }

    /// Erase the tile at `location` and recompute the surrounding frontier
    ///
    /// Frontier membership is recomputed for the location itself and the
    /// twelve cells within reach of it: orthogonal neighbours, cells two steps
    /// away, and diagonal neighbours.
    ///
    /// # Errors
    ///
    /// Returns `MissingTile` if no tile exists at `location`
    pub fn remove(&mut self, location: Location) -> Result<Tile> {
        if !self.tiles.contains_key(&location) {
            return Err(TilingError::MissingTile { location });
        }

        self.dispatch(MapEvent::BeforeRemove, location);

        let tile = self
            .tiles
            .remove(&location)
            .ok_or(TilingError::MissingTile { location })?;
        self.ages.remove(&location);

        self.refresh_frontier(location);
        for (dx, dy) in REMOVAL_REFRESH_OFFSETS {
            self.refresh_frontier(location.offset(dx, dy));
        }

        self.dispatch(MapEvent::AfterRemove, location);
        Ok(tile)
    }

    /// Whether `tile_type` in `orientation` may be placed at `location`
    ///
    /// Every occupied orthogonal neighbour's facing edge must match the
    /// candidate's facing edge, and the candidate must not be excluded there.
    pub fn is_legal(
        &self,
        tile_type: &Arc<TileType>,
        location: Location,
        orientation: Orientation,
    ) -> bool {
        self.is_legal_tile(&Tile::new(Arc::clone(tile_type), orientation), location)
    }

    /// Whether an already built tile may be placed at `location`
    pub fn is_legal_tile(&self, tile: &Tile, location: Location) -> bool {
        if self.is_excluded(location, tile) {
            return false;
        }
        location.neighbors().into_iter().all(|(side, neighbor)| {
            self.tiles.get(&neighbor).is_none_or(|placed| {
                placed.edge(side.opposite()).matches(tile.edge(side))
            })
        })
    }

    /// Record that `tile` can never be placed at `location` this run
    ///
    /// Returns whether the exclusion is new.
    pub fn exclude(&mut self, location: Location, tile: Tile) -> bool {
        self.exclusions.entry(location).or_default().insert(tile)
    }

    /// Whether `tile` has been excluded at `location`
    pub fn is_excluded(&self, location: Location, tile: &Tile) -> bool {
        self.exclusions
            .get(&location)
            .is_some_and(|excluded| excluded.contains(tile))
    }

    /// Tiles excluded at `location`
    pub fn excluded(&self, location: Location) -> impl Iterator<Item = &Tile> {
        self.exclusions.get(&location).into_iter().flatten()
    }

    /// Total number of exclusions recorded across all locations
    pub fn exclusion_count(&self) -> usize {
        self.exclusions.values().map(HashSet::len).sum()
    }

    /// Tile placed at `location`, if any
    pub fn tile_at(&self, location: Location) -> Option<&Tile> {
        self.tiles.get(&location)
    }

    /// Whether `location` holds a tile
    pub fn is_occupied(&self, location: Location) -> bool {
        self.tiles.contains_key(&location)
    }

    /// Placement order stamp of the tile at `location`; larger is more recent
    pub fn age(&self, location: Location) -> Option<u64> {
        self.ages.get(&location).copied()
    }

    /// Placed tiles in ascending location order
    pub fn tiles(&self) -> impl Iterator<Item = (Location, &Tile)> {
        self.tiles.iter().map(|(&location, tile)| (location, tile))
    }

    /// Number of placed tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tiles are placed
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Frontier locations in ascending order, ignoring the filter
    pub fn frontier(&self) -> impl Iterator<Item = Location> + '_ {
        self.frontier.iter().copied()
    }

    /// Whether `location` is in the unfiltered frontier
    pub fn is_frontier(&self, location: Location) -> bool {
        self.frontier.contains(&location)
    }

    /// Number of unfiltered frontier locations
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Frontier locations admitted by the location filter
    pub fn filtered_frontier(&self) -> Vec<Location> {
        self.filter.filter(self.frontier.iter().copied().collect())
    }

    /// Side length shared by every tile on this map
    pub const fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Union of the filter's declared bounds and the extent of placed tiles
    ///
    /// Returns `None` for an empty map under an unbounded filter.
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.tiles
            .keys()
            .fold(self.filter.bounds(), |bounds, &location| {
                Some(bounds.map_or_else(
                    || BoundingBox::point(location),
                    |current| current.including(location),
                ))
            })
    }

    /// Open `location` as a frontier cell on a map without tiles
    ///
    /// Returns whether the location was newly opened. Has no effect once any
    /// tile is placed.
    pub fn open_origin(&mut self, location: Location) -> bool {
        self.tiles.is_empty() && self.frontier.insert(location)
    }

    /// Set frontier membership of one cell from its neighbours' open sides
    fn refresh_frontier(&mut self, location: Location) {
        let open = !self.tiles.contains_key(&location)
            && location.neighbors().into_iter().any(|(side, neighbor)| {
                self.tiles
                    .get(&neighbor)
                    .is_some_and(|placed| placed.has_open_side(side.opposite()))
            });
        if open {
            self.frontier.insert(location);
        } else {
            self.frontier.remove(&location);
        }
    }

    fn dispatch(&mut self, event: MapEvent, location: Location) {
        // Listeners borrow the map immutably, so they are detached while running
        let mut listeners = std::mem::take(&mut self.listeners);
        listeners.dispatch(event, self, location);
        self.listeners = listeners;
    }
}

impl fmt::Debug for MapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapState")
            .field("tiles", &self.tiles.len())
            .field("frontier", &self.frontier.len())
            .field("exclusions", &self.exclusion_count())
            .field("listeners", &self.listeners)
            .field("tile_size", &self.tile_size)
            .finish_non_exhaustive()
    }
}

