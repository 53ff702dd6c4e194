//! Synchronous lifecycle notifications for map mutations
//!
//! Listeners run on the caller's thread in registration order. They receive
//! the map by shared reference and so cannot place or remove tiles.

use std::fmt;

use crate::spatial::location::Location;
use crate::spatial::map::MapState;

/// Point in the place/remove lifecycle a listener is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapEvent {
    /// Before a tile is stored at a location
    BeforePlace,
    /// After a tile is stored and the frontier updated
    AfterPlace,
    /// Before a tile is erased from a location
    BeforeRemove,
    /// After a tile is erased and the frontier recomputed
    AfterRemove,
}

/// Receiver of map lifecycle notifications
pub trait MapListener {
    /// Called with the map and the location being changed
    fn notify(&mut self, state: &MapState, location: Location);
}

impl<F> MapListener for F
where
    F: FnMut(&MapState, Location),
{
    fn notify(&mut self, state: &MapState, location: Location) {
        self(state, location);
    }
}

/// Ordered listener lists, one per lifecycle event
#[derive(Default)]
pub struct ListenerRegistry {
    before_place: Vec<Box<dyn MapListener>>,
    after_place: Vec<Box<dyn MapListener>>,
    before_remove: Vec<Box<dyn MapListener>>,
    after_remove: Vec<Box<dyn MapListener>>,
}

impl ListenerRegistry {
    /// Create an empty registry
    pub const fn new() -> Self {
        Self {
            before_place: Vec::new(),
            after_place: Vec::new(),
            before_remove: Vec::new(),
            after_remove: Vec::new(),
        }
    }

    /// Append a listener to the list for `event`
    pub fn register(&mut self, event: MapEvent, listener: Box<dyn MapListener>) {
        self.list_mut(event).push(listener);
    }

    /// Number of listeners attached to `event`
    pub const fn count(&self, event: MapEvent) -> usize {
        match event {
            MapEvent::BeforePlace => self.before_place.len(),
            MapEvent::AfterPlace => self.after_place.len(),
            MapEvent::BeforeRemove => self.before_remove.len(),
            MapEvent::AfterRemove => self.after_remove.len(),
        }
    }

    /// Notify every listener attached to `event`, in registration order
    pub fn dispatch(&mut self, event: MapEvent, state: &MapState, location: Location) {
        for listener in self.list_mut(event) {
            listener.notify(state, location);
        }
    }

    const fn list_mut(&mut self, event: MapEvent) -> &mut Vec<Box<dyn MapListener>> {
        match event {
            MapEvent::BeforePlace => &mut self.before_place,
            MapEvent::AfterPlace => &mut self.after_place,
            MapEvent::BeforeRemove => &mut self.before_remove,
            MapEvent::AfterRemove => &mut self.after_remove,
        }
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("before_place", &self.before_place.len())
            .field("after_place", &self.after_place.len())
            .field("before_remove", &self.before_remove.len())
            .field("after_remove", &self.after_remove.len())
            .finish()
    }
}
