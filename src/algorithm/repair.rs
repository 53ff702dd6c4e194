//! Chronological backtracking when a placement leaves an unfillable frontier cell
//!
//! Starting from the tile just placed, each cycle excludes the tile at the
//! cursor from its location, removes it together with every later placement
//! that grew from it, and checks the frontier again. While bad cells remain
//! the cursor moves to the most recently placed surviving neighbour, or to the
//! most recently placed tile anywhere once the cursor has no neighbour left.
//!
//! Exclusions are never lifted and every cycle removes at least the cursor's
//! tile, so repair always terminates. An empty map has no bad cells.

use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::{debug, trace, warn};

use crate::algorithm::feasibility::has_bad_cell;
use crate::io::error::{Result, TilingError};
use crate::spatial::{Location, MapState};
use crate::tiles::catalog::Catalog;

/// Summary of one repair pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairOutcome {
    /// Exclude-and-remove cycles performed
    pub cycles: usize,
    /// Tiles removed across all cycles
    pub removals: usize,
    /// New exclusions recorded
    pub exclusions: usize,
    /// Whether the frontier is free of bad cells afterwards
    pub resolved: bool,
}

/// Backtrack from the placement at `placed` until no bad frontier cell remains
///
/// Returns immediately with zero cycles when the placement left no bad cell.
/// A cursor with no occupied neighbour hands over to the newest tile on the
/// map. The pass only reports `resolved: false` when `placed` holds no tile.
///
/// # Errors
///
/// Returns `MissingTile` if the map changes underneath a cascade, which only
/// happens if the map's bookkeeping is inconsistent
pub fn repair(state: &mut MapState, catalog: &Catalog, placed: Location) -> Result<RepairOutcome> {
    let mut outcome = RepairOutcome::default();
    if !has_bad_cell(state, catalog) {
        outcome.resolved = true;
        return Ok(outcome);
    }

    let mut cursor = placed;
    loop {
        let Some(tile) = state.tile_at(cursor).cloned() else {
            warn!(%cursor, "repair cursor holds no tile");
            return Ok(outcome);
        };

        debug!(%cursor, %tile, cycle = outcome.cycles, "excluding tile and backtracking");
        if state.exclude(cursor, tile) {
            outcome.exclusions += 1;
        }
        outcome.removals += cascade_remove(state, cursor)?;
        outcome.cycles += 1;

        if !has_bad_cell(state, catalog) {
            outcome.resolved = true;
            return Ok(outcome);
        }

        let next = most_recent_neighbor(state, cursor).or_else(|| {
            warn!(%cursor, "no placed neighbour left, backtracking from the newest tile");
            most_recent_tile(state)
        });
        match next {
            Some(next) => cursor = next,
            None => return Ok(outcome),
        }
    }
}

/// Remove the tile at `start` and every later tile that grew from it
///
/// A tile is dependent when it is reachable through an open side of a traced
/// tile and was placed strictly after it. Removal runs newest first.
/// Returns the number of tiles removed.
///
/// # Errors
///
/// Returns `MissingTile` if `start` holds no tile
pub fn cascade_remove(state: &mut MapState, start: Location) -> Result<usize> {
    if !state.is_occupied(start) {
        return Err(TilingError::MissingTile { location: start });
    }

    let mut doomed = dependent_tiles(state, start);
    doomed.sort_by_key(|&(_, age)| Reverse(age));

    for &(location, age) in &doomed {
        trace!(%location, age, "cascade removal");
        state.remove(location)?;
    }
    Ok(doomed.len())
}

/// `start` and the placements causally dependent on it, paired with their ages
pub fn dependent_tiles(state: &MapState, start: Location) -> Vec<(Location, u64)> {
    let Some(start_age) = state.age(start) else {
        return Vec::new();
    };

    let mut visited = HashSet::from([start]);
    let mut pending = vec![(start, start_age)];
    let mut found = Vec::new();

    while let Some((location, age)) = pending.pop() {
        found.push((location, age));
        let Some(tile) = state.tile_at(location) else {
            continue;
        };
        for side in tile.open_sides() {
            let neighbor = location.neighbor(side);
            if let Some(neighbor_age) = state.age(neighbor)
                && neighbor_age > age
                && visited.insert(neighbor)
            {
                pending.push((neighbor, neighbor_age));
            }
        }
    }
    found
}

/// Most recently placed orthogonal neighbour of `location` still holding a tile
pub fn most_recent_neighbor(state: &MapState, location: Location) -> Option<Location> {
    location
        .neighbors()
        .into_iter()
        .filter_map(|(_, neighbor)| state.age(neighbor).map(|age| (age, neighbor)))
        .max_by_key(|&(age, _)| age)
        .map(|(_, neighbor)| neighbor)
}

/// Most recently placed tile anywhere on the map
pub fn most_recent_tile(state: &MapState) -> Option<Location> {
    state
        .tiles()
        .filter_map(|(location, _)| state.age(location).map(|age| (age, location)))
        .max_by_key(|&(age, _)| age)
        .map(|(_, location)| location)
}
