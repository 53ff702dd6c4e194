//! Legality queries over the catalog and the frontier
//!
//! A frontier cell is "bad" when no tile type of the catalog, in any of its
//! distinct orientations, can legally be placed there.

use std::sync::Arc;

use crate::spatial::{Location, MapState};
use crate::tiles::catalog::Catalog;
use crate::tiles::orientation::Orientation;
use crate::tiles::tile_type::TileType;

/// Whether some distinct orientation of `tile_type` is legal at `location`
pub fn fits_at(state: &MapState, tile_type: &Arc<TileType>, location: Location) -> bool {
    tile_type
        .orientations()
        .iter()
        .any(|&orientation| state.is_legal(tile_type, location, orientation))
}

/// Whether `tile_type` can legally be placed at any of `candidates`
pub fn is_type_legal(state: &MapState, tile_type: &Arc<TileType>, candidates: &[Location]) -> bool {
    candidates
        .iter()
        .any(|&location| fits_at(state, tile_type, location))
}

/// Every legal `(location, orientation)` pair for `tile_type` among `candidates`
///
/// Pairs are ordered by candidate, then by the type's orientation order.
pub fn legal_placements(
    state: &MapState,
    tile_type: &Arc<TileType>,
    candidates: &[Location],
) -> Vec<(Location, Orientation)> {
    candidates
        .iter()
        .flat_map(|&location| {
            tile_type
                .orientations()
                .iter()
                .filter(move |&&orientation| state.is_legal(tile_type, location, orientation))
                .map(move |&orientation| (location, orientation))
        })
        .collect()
}

/// Whether no catalog entry fits at `location`
pub fn is_bad_cell(state: &MapState, catalog: &Catalog, location: Location) -> bool {
    !catalog
        .iter()
        .any(|tile_type| fits_at(state, tile_type, location))
}

/// Unfiltered frontier cells that no catalog entry fits
pub fn find_bad_cells(state: &MapState, catalog: &Catalog) -> Vec<Location> {
    state
        .frontier()
        .filter(|&location| is_bad_cell(state, catalog, location))
        .collect()
}

/// Whether the unfiltered frontier holds at least one bad cell
pub fn has_bad_cell(state: &MapState, catalog: &Catalog) -> bool {
    state
        .frontier()
        .any(|location| is_bad_cell(state, catalog, location))
}
