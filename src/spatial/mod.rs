//! Map coordinates, frontier bookkeeping and the live map state
//!
//! This module contains spatial-related functionality including:
//! - Locations, sides and bounding boxes
//! - Location filters bounding where generation may grow
//! - Listener dispatch for place/remove lifecycle events
//! - The map state owning placed tiles, frontier, ages and exclusions

/// Axis-aligned bounding boxes
pub mod bounds;
/// Frontier location filters
pub mod filter;
/// Place/remove lifecycle listeners
pub mod listener;
/// Grid locations and cell sides
pub mod location;
/// Live map state and frontier management
pub mod map;

pub use bounds::BoundingBox;
pub use location::{Location, Side};
pub use map::MapState;
