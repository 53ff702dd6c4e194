//! Tests for the weighted type draw and the uniform placement draw

#[cfg(test)]
mod tests {
    use crate::support::{ScriptedRng, grass, roads, spike};
    use edgetile::algorithm::selection::{choose_placement, choose_tile_type, legal_type_chooser};
    use edgetile::math::random::UnbiasedRangeGenerator;
    use edgetile::spatial::filter::Unbounded;
    use edgetile::{Catalog, Location, MapState, Orientation, Tile, TilingError};
    use std::sync::Arc;

    fn road_stub(catalog: &Catalog) -> MapState {
        let straight = Arc::clone(catalog.get("straight").unwrap());
        let mut map = MapState::for_catalog(catalog, Unbounded);
        map.place(Location::new(0, 0), Tile::new(straight, Orientation::Upright));
        map
    }

    // Tests only types legal on the candidates enter the chooser, with catalog weights
    // Verified by adding every catalog entry
    #[test]
    fn test_legal_type_chooser() {
        let catalog = roads(false);
        let map = road_stub(&catalog);

        let chooser = legal_type_chooser(&map, &catalog, &[Location::new(0, 1)]).unwrap();
        assert_eq!(chooser.len(), 4);
        assert_eq!(chooser.total_weight(), 7);

        let chooser = legal_type_chooser(&map, &catalog, &[Location::new(1, 0)]).unwrap();
        assert_eq!(chooser.total_weight(), 12);
    }

    // Tests the type draw maps the random value onto weighted ranges
    // Verified by drawing uniformly over types
    #[test]
    fn test_choose_tile_type_by_weight() {
        let catalog = roads(false);
        let map = road_stub(&catalog);
        let candidates = [Location::new(0, 1)];

        // Draws drop the low bit, so 3 << 1 yields 3: past straight's range [0, 3)
        let mut random = UnbiasedRangeGenerator::new(ScriptedRng::new(vec![0, 3 << 1, 6 << 1]));
        let names: Vec<String> = (0..3)
            .map(|_| {
                choose_tile_type(&map, &catalog, &candidates, &mut random, 1)
                    .unwrap()
                    .name()
                    .to_owned()
            })
            .collect();

        assert_eq!(names, ["straight", "bend", "crossing"]);
        assert_eq!(random.rng_mut().consumed(), 3);
    }

    // Tests no legal type reports the iteration and frontier size
    // Verified by returning NoOptions instead
    #[test]
    fn test_unsatisfiable_catalog() {
        let catalog = Catalog::new(vec![spike()]).unwrap();
        let mut map = MapState::for_catalog(&catalog, Unbounded);
        map.place(Location::new(0, 0), Tile::new(Arc::new(grass()), Orientation::Upright));
        let mut random = UnbiasedRangeGenerator::seeded(1);

        assert_eq!(
            choose_tile_type(&map, &catalog, &[Location::new(1, 0)], &mut random, 5)
                .map(|tile_type| tile_type.name().to_owned()),
            Err(TilingError::UnsatisfiableCatalog {
                iteration: 5,
                frontier_size: 1
            })
        );
    }

    // Tests placements are drawn uniformly from the legal list
    // Verified by always returning the first legal placement
    #[test]
    fn test_choose_placement() {
        let catalog = roads(false);
        let map = road_stub(&catalog);
        let bend = catalog.get("bend").unwrap();
        let above = Location::new(0, 1);

        let mut random = UnbiasedRangeGenerator::new(ScriptedRng::new(vec![0, 1 << 1]));
        assert_eq!(
            choose_placement(&map, bend, &[above], &mut random),
            Ok((above, Orientation::Clockwise))
        );
        assert_eq!(
            choose_placement(&map, bend, &[above], &mut random),
            Ok((above, Orientation::Flipped))
        );

        let field = catalog.get("field").unwrap();
        assert_eq!(
            choose_placement(&map, field, &[above], &mut random),
            Err(TilingError::NoOptions)
        );
    }
}
