//! Tests for lifecycle listener registration and dispatch

#[cfg(test)]
mod tests {
    use crate::support::grass;
    use edgetile::spatial::filter::Unbounded;
    use edgetile::spatial::listener::{ListenerRegistry, MapEvent};
    use edgetile::{Location, MapState, Orientation, Tile};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    type Log = Rc<RefCell<Vec<(&'static str, Location)>>>;

    fn recorder(log: &Log, label: &'static str) -> impl FnMut(&MapState, Location) + 'static {
        let log = Rc::clone(log);
        move |_: &MapState, location| log.borrow_mut().push((label, location))
    }

    // Tests place and remove fire their before and after events in order
    // Verified by dispatching AfterPlace before the tile is stored
    #[test]
    fn test_lifecycle_order() {
        let log: Log = Rc::default();
        let mut map = MapState::new(3, Unbounded);
        map.add_listener(MapEvent::BeforePlace, recorder(&log, "before place"));
        map.add_listener(MapEvent::AfterPlace, recorder(&log, "after place"));
        map.add_listener(MapEvent::BeforeRemove, recorder(&log, "before remove"));
        map.add_listener(MapEvent::AfterRemove, recorder(&log, "after remove"));

        let at = Location::new(2, -1);
        map.place(at, Tile::new(Arc::new(grass()), Orientation::Upright));
        map.remove(at).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                ("before place", at),
                ("after place", at),
                ("before remove", at),
                ("after remove", at),
            ]
        );
    }

    // Tests listeners observe the map state at their point in the lifecycle
    // Verified by notifying BeforePlace after insertion
    #[test]
    fn test_listeners_see_map_state() {
        let seen: Rc<RefCell<Vec<bool>>> = Rc::default();
        let mut map = MapState::new(3, Unbounded);
        for event in [MapEvent::BeforePlace, MapEvent::AfterPlace] {
            let seen = Rc::clone(&seen);
            map.add_listener(event, move |state: &MapState, location| {
                seen.borrow_mut().push(state.is_occupied(location));
            });
        }

        map.place(Location::new(0, 0), Tile::new(Arc::new(grass()), Orientation::Upright));

        assert_eq!(*seen.borrow(), vec![false, true]);
    }

    // Tests listeners on one event run in registration order and survive dispatch
    // Verified by dropping listeners after the first dispatch
    #[test]
    fn test_registration_order_is_kept() {
        let log: Log = Rc::default();
        let mut map = MapState::new(3, Unbounded);
        map.add_listener(MapEvent::AfterPlace, recorder(&log, "first"));
        map.add_listener(MapEvent::AfterPlace, recorder(&log, "second"));

        let grass = Arc::new(grass());
        map.place(Location::new(0, 0), Tile::new(Arc::clone(&grass), Orientation::Upright));
        map.place(Location::new(1, 0), Tile::new(grass, Orientation::Upright));

        let labels: Vec<&str> = log.borrow().iter().map(|&(label, _)| label).collect();
        assert_eq!(labels, ["first", "second", "first", "second"]);
        assert_eq!(map.listener_count(MapEvent::AfterPlace), 2);
        assert_eq!(map.listener_count(MapEvent::BeforeRemove), 0);
    }

    // Tests the registry counts listeners per event
    // Verified by storing every listener in one list
    #[test]
    fn test_registry_counts() {
        let mut registry = ListenerRegistry::new();
        registry.register(MapEvent::AfterRemove, Box::new(|_: &MapState, _: Location| {}));
        assert_eq!(registry.count(MapEvent::AfterRemove), 1);
        assert_eq!(registry.count(MapEvent::AfterPlace), 0);
    }
}
