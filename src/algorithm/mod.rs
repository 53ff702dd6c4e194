//! Generation algorithm: legality, selection, repair and the driving loop

/// Generation loop and run report
pub mod executor;
/// Legality queries and bad frontier cell detection
pub mod feasibility;
/// Chronological backtracking repair
pub mod repair;
/// Weighted tile type and uniform placement draws
pub mod selection;

pub use executor::{GenerationReport, Generator};
