//! Generation loop orchestrating selection, placement and repair
//!
//! Each step draws a tile type among those that fit somewhere on the filtered
//! frontier, draws one of its legal placements, places it and repairs any
//! frontier cell the placement made unfillable. Generation ends when the
//! filtered frontier is empty.

use rand::RngCore;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::algorithm::repair::repair;
use crate::algorithm::selection::{choose_placement, choose_tile_type};
use crate::io::configuration::GeneratorConfig;
use crate::io::error::{Result, invalid_argument};
use crate::math::random::UnbiasedRangeGenerator;
use crate::spatial::MapState;
use crate::tiles::catalog::Catalog;
use crate::tiles::tile::Tile;

/// Counters describing a generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Selection steps performed
    pub iterations: usize,
    /// Tiles placed by the generator (seeded tiles excluded)
    pub placements: usize,
    /// Tiles removed while repairing
    pub removals: usize,
    /// Placements that left a bad frontier cell and triggered repair
    pub repairs: usize,
    /// Exclude-and-remove cycles across all repairs
    pub repair_cycles: usize,
    /// Exclusions recorded across all repairs
    pub exclusions: usize,
}

/// Seeded generator filling a map from a catalog
#[derive(Debug)]
pub struct Generator<R = StdRng> {
    catalog: Catalog,
    config: GeneratorConfig,
    random: UnbiasedRangeGenerator<R>,
    report: GenerationReport,
}

impl Generator<StdRng> {
    /// Create a generator seeded from `config`
    pub fn new(catalog: Catalog, config: GeneratorConfig) -> Self {
        Self::with_random(catalog, config, UnbiasedRangeGenerator::seeded(config.seed))
    }
}

impl<R: RngCore> Generator<R> {
    /// Create a generator drawing from a caller-supplied random source
    ///
    /// The seed in `config` is ignored.
    pub const fn with_rng(catalog: Catalog, config: GeneratorConfig, rng: R) -> Self {
        Self::with_random(catalog, config, UnbiasedRangeGenerator::new(rng))
    }

    const fn with_random(
        catalog: Catalog,
        config: GeneratorConfig,
        random: UnbiasedRangeGenerator<R>,
    ) -> Self {
        Self {
            catalog,
            config,
            random,
            report: GenerationReport {
                iterations: 0,
                placements: 0,
                removals: 0,
                repairs: 0,
                repair_cycles: 0,
                exclusions: 0,
            },
        }
    }

    /// Catalog tiles are drawn from
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Configuration this generator was built with
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Counters accumulated since the last call to [`Generator::generate`]
    pub const fn report(&self) -> GenerationReport {
        self.report
    }

    /// Fill `state` until its filtered frontier is empty
    ///
    /// An empty map starts from the configured origin. On error the map is
    /// left as it was at the point of failure.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The map's tile size differs from the catalog's
    /// - No catalog entry fits anywhere on the filtered frontier
    pub fn generate(&mut self, state: &mut MapState) -> Result<GenerationReport> {
        self.report = GenerationReport::default();
        while self.step(state)? {}
        debug!(
            placements = self.report.placements,
            repairs = self.report.repairs,
            removals = self.report.removals,
            tiles = state.len(),
            "generation finished"
        );
        Ok(self.report)
    }

    /// Perform one select-place-repair step
    ///
    /// Returns `false` without changing the map once the filtered frontier is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The map's tile size differs from the catalog's
    /// - No catalog entry fits anywhere on the filtered frontier
    pub fn step(&mut self, state: &mut MapState) -> Result<bool> {
        if state.tile_size() != self.catalog.tile_size() {
            return Err(invalid_argument(
                "state",
                &state.tile_size(),
                &format!(
                    "map tile size differs from catalog tile size {}",
                    self.catalog.tile_size()
                ),
            ));
        }

        if state.is_empty() {
            state.open_origin(self.config.origin);
        }

        let candidates = state.filtered_frontier();
        if candidates.is_empty() {
            return Ok(false);
        }
        self.report.iterations += 1;

        let tile_type = choose_tile_type(
            state,
            &self.catalog,
            &candidates,
            &mut self.random,
            self.report.iterations,
        )?;
        let (location, orientation) =
            choose_placement(state, &tile_type, &candidates, &mut self.random)?;

        debug!(
            iteration = self.report.iterations,
            %location,
            tile_type = tile_type.name(),
            %orientation,
            candidates = candidates.len(),
            "placing tile"
        );
        state.place(location, Tile::new(tile_type, orientation));
        self.report.placements += 1;

        let outcome = repair(state, &self.catalog, location)?;
        if outcome.cycles > 0 {
            self.report.repairs += 1;
            self.report.repair_cycles += outcome.cycles;
            self.report.removals += outcome.removals;
            self.report.exclusions += outcome.exclusions;
            debug!(
                %location,
                cycles = outcome.cycles,
                removals = outcome.removals,
                resolved = outcome.resolved,
                "repaired frontier"
            );
        }
        if !outcome.resolved {
            warn!(%location, "repair left an unfillable frontier cell");
        }

        Ok(true)
    }
}
