//! Policies selecting which frontier locations generation may fill
//!
//! The generation loop only draws from the filtered frontier and stops once
//! the filter returns nothing. Filters also declare bounds, which feed the
//! map's reported extent.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use crate::spatial::bounds::BoundingBox;
use crate::spatial::listener::MapListener;
use crate::spatial::location::Location;
use crate::spatial::map::MapState;

/// Bounds and selects candidate frontier locations
pub trait LocationFilter {
    /// Declared bounds of the area this filter admits, if finite
    fn bounds(&self) -> Option<BoundingBox>;

    /// Subset of `candidates` generation may fill next
    ///
    /// Candidates arrive in ascending location order; implementations keep
    /// that order.
    fn filter(&self, candidates: Vec<Location>) -> Vec<Location>;
}

impl<F: LocationFilter + ?Sized> LocationFilter for Box<F> {
    fn bounds(&self) -> Option<BoundingBox> {
        (**self).bounds()
    }

    fn filter(&self, candidates: Vec<Location>) -> Vec<Location> {
        (**self).filter(candidates)
    }
}

/// Admits every location and declares no bounds
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl LocationFilter for Unbounded {
    fn bounds(&self) -> Option<BoundingBox> {
        None
    }

    fn filter(&self, candidates: Vec<Location>) -> Vec<Location> {
        candidates
    }
}

/// Admits locations inside a rectangle
#[derive(Debug, Clone, Copy)]
pub struct BoundedFilter {
    bounds: BoundingBox,
}

impl BoundedFilter {
    /// Filter admitting exactly the cells of `bounds`
    pub const fn new(bounds: BoundingBox) -> Self {
        Self { bounds }
    }

    /// Filter admitting a `width` by `height` rectangle with its minimum corner at the origin
    pub fn with_size(width: u32, height: u32) -> Self {
        Self::new(BoundingBox::from_size(Location::new(0, 0), width, height))
    }
}

impl LocationFilter for BoundedFilter {
    fn bounds(&self) -> Option<BoundingBox> {
        Some(self.bounds)
    }

    fn filter(&self, mut candidates: Vec<Location>) -> Vec<Location> {
        candidates.retain(|&location| self.bounds.contains(location));
        candidates
    }
}

/// Grows the map outwards from a centre, one distance ring at a time
///
/// Only candidates within `max_radius` are admitted, and of those only the
/// ones closest to the centre, so generation fills rings in order.
#[derive(Debug, Clone, Copy)]
pub struct RadiusFilter {
    center: Location,
    max_radius: u32,
}

impl RadiusFilter {
    /// Filter growing around `center` up to `max_radius` cells away
    pub const fn new(center: Location, max_radius: u32) -> Self {
        Self { center, max_radius }
    }
}

impl LocationFilter for RadiusFilter {
    fn bounds(&self) -> Option<BoundingBox> {
        let radius = i32::try_from(self.max_radius).unwrap_or(i32::MAX);
        Some(BoundingBox::new(
            Location::new(
                self.center.x.saturating_sub(radius),
                self.center.y.saturating_sub(radius),
            ),
            Location::new(
                self.center.x.saturating_add(radius),
                self.center.y.saturating_add(radius),
            ),
        ))
    }

    fn filter(&self, candidates: Vec<Location>) -> Vec<Location> {
        let limit = u64::from(self.max_radius) * u64::from(self.max_radius);
        let within: Vec<(u64, Location)> = candidates
            .into_iter()
            .map(|location| (location.squared_distance(self.center), location))
            .filter(|&(distance, _)| distance <= limit)
            .collect();
        nearest(within)
    }
}

/// Keeps generation next to the most recent placement
///
/// The last placement is learnt through the listener returned by
/// [`ProximityFilter::tracker`], which must be attached to the map's
/// `AfterPlace` event. Before the first placement the inner filter's
/// result is returned unchanged.
#[derive(Debug, Clone)]
pub struct ProximityFilter<F> {
    inner: F,
    last_placed: Rc<Cell<Option<Location>>>,
}

impl<F: LocationFilter> ProximityFilter<F> {
    /// Wrap `inner`, which supplies the bounds and the first selection pass
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            last_placed: Rc::new(Cell::new(None)),
        }
    }

    /// Listener recording each placement for this filter
    pub fn tracker(&self) -> ProximityTracker {
        ProximityTracker {
            last_placed: Rc::clone(&self.last_placed),
        }
    }

    /// Most recent placement seen by the tracker
    pub fn last_placed(&self) -> Option<Location> {
        self.last_placed.get()
    }
}

impl<F: LocationFilter> LocationFilter for ProximityFilter<F> {
    fn bounds(&self) -> Option<BoundingBox> {
        self.inner.bounds()
    }

    fn filter(&self, candidates: Vec<Location>) -> Vec<Location> {
        let admitted = self.inner.filter(candidates);
        match self.last_placed.get() {
            Some(anchor) => nearest(
                admitted
                    .into_iter()
                    .map(|location| (location.manhattan_distance(anchor), location))
                    .collect(),
            ),
            None => admitted,
        }
    }
}

/// `AfterPlace` listener feeding a [`ProximityFilter`]
#[derive(Debug, Clone)]
pub struct ProximityTracker {
    last_placed: Rc<Cell<Option<Location>>>,
}

impl MapListener for ProximityTracker {
    fn notify(&mut self, _state: &MapState, location: Location) {
        self.last_placed.set(Some(location));
    }
}

/// Excludes a dynamically maintained set of cells, such as blocked doorways
#[derive(Debug, Clone)]
pub struct BlockedFilter<F> {
    inner: F,
    blocked: BlockedCells,
}

impl<F: LocationFilter> BlockedFilter<F> {
    /// Wrap `inner` with an initially empty blocked set
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            blocked: BlockedCells::default(),
        }
    }

    /// Shared handle for blocking and unblocking cells
    pub fn handle(&self) -> BlockedCells {
        self.blocked.clone()
    }
}

impl<F: LocationFilter> LocationFilter for BlockedFilter<F> {
    fn bounds(&self) -> Option<BoundingBox> {
        self.inner.bounds()
    }

    fn filter(&self, candidates: Vec<Location>) -> Vec<Location> {
        let mut admitted = self.inner.filter(candidates);
        admitted.retain(|&location| !self.blocked.is_blocked(location));
        admitted
    }
}

/// Shared set of cells a [`BlockedFilter`] refuses
///
/// Clones share the same set, so a listener holding one can block cells the
/// filter then skips.
#[derive(Debug, Clone, Default)]
pub struct BlockedCells {
    cells: Rc<RefCell<BTreeSet<Location>>>,
}

impl BlockedCells {
    /// Refuse `location` from now on; returns whether it was newly blocked
    pub fn block(&self, location: Location) -> bool {
        self.cells.borrow_mut().insert(location)
    }

    /// Admit `location` again; returns whether it was blocked
    pub fn unblock(&self, location: Location) -> bool {
        self.cells.borrow_mut().remove(&location)
    }

    /// Whether `location` is currently refused
    pub fn is_blocked(&self, location: Location) -> bool {
        self.cells.borrow().contains(&location)
    }

    /// Number of blocked cells
    pub fn len(&self) -> usize {
        self.cells.borrow().len()
    }

    /// Whether no cells are blocked
    pub fn is_empty(&self) -> bool {
        self.cells.borrow().is_empty()
    }
}

/// Locations sharing the smallest distance, in their original order
fn nearest(scored: Vec<(u64, Location)>) -> Vec<Location> {
    let Some(best) = scored.iter().map(|&(distance, _)| distance).min() else {
        return Vec::new();
    };
    scored
        .into_iter()
        .filter(|&(distance, _)| distance == best)
        .map(|(_, location)| location)
        .collect()
}
