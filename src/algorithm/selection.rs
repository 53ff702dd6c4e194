//! The two random draws of each generation step
//!
//! First a tile type is drawn by catalog weight among the types that fit
//! somewhere on the filtered frontier, then a location and orientation is
//! drawn uniformly among that type's legal placements.

use rand::RngCore;
use std::sync::Arc;

use crate::algorithm::feasibility::{is_type_legal, legal_placements};
use crate::io::error::{Result, TilingError};
use crate::math::chooser::WeightedChooser;
use crate::math::random::UnbiasedRangeGenerator;
use crate::spatial::{Location, MapState};
use crate::tiles::catalog::Catalog;
use crate::tiles::orientation::Orientation;
use crate::tiles::tile_type::TileType;

/// Chooser over the catalog entries legal somewhere among `candidates`
///
/// # Errors
///
/// Returns `InvalidArgument` if the summed catalog weights overflow
pub fn legal_type_chooser(
    state: &MapState,
    catalog: &Catalog,
    candidates: &[Location],
) -> Result<WeightedChooser<Arc<TileType>>> {
    let mut chooser = WeightedChooser::new();
    for tile_type in catalog.iter() {
        if is_type_legal(state, tile_type, candidates) {
            chooser.add_option(Arc::clone(tile_type), u64::from(tile_type.weight()))?;
        }
    }
    Ok(chooser)
}

/// Draw a tile type by weight among those legal on the filtered frontier
///
/// # Errors
///
/// Returns `UnsatisfiableCatalog` if no legal type carries positive weight
pub fn choose_tile_type<R: RngCore>(
    state: &MapState,
    catalog: &Catalog,
    candidates: &[Location],
    random: &mut UnbiasedRangeGenerator<R>,
    iteration: usize,
) -> Result<Arc<TileType>> {
    let chooser = legal_type_chooser(state, catalog, candidates)?;
    if !chooser.options_available() {
        return Err(TilingError::UnsatisfiableCatalog {
            iteration,
            frontier_size: candidates.len(),
        });
    }
    chooser.into_choice(random)
}

/// Draw a legal location and orientation for `tile_type`, all equally likely
///
/// # Errors
///
/// Returns `NoOptions` if the type has no legal placement among `candidates`
pub fn choose_placement<R: RngCore>(
    state: &MapState,
    tile_type: &Arc<TileType>,
    candidates: &[Location],
    random: &mut UnbiasedRangeGenerator<R>,
) -> Result<(Location, Orientation)> {
    let mut chooser = WeightedChooser::new();
    for placement in legal_placements(state, tile_type, candidates) {
        chooser.add_option(placement, 1)?;
    }
    chooser.into_choice(random)
}
