//! Random selection primitives used by the generation loop

/// Weighted selection over contiguous integer ranges
pub mod chooser;
/// Unbiased bounded integer generation
pub mod random;
