//! Weighted random selection over a dynamic list of options
//!
//! Options occupy contiguous integer ranges in insertion order: option `i`
//! covers `[start_i, start_i + weight_i)`. A draw picks `v` uniformly from
//! `[0, total_weight)` and returns the option whose range contains `v`, so
//! zero-weight options can never be drawn.

use rand::RngCore;

use crate::io::error::{Result, TilingError, invalid_argument};
use crate::math::random::UnbiasedRangeGenerator;

/// Accumulates weighted options and draws one of them
#[derive(Debug, Clone)]
pub struct WeightedChooser<T> {
    options: Vec<T>,
    /// Exclusive end of each option's range
    range_ends: Vec<u64>,
    total_weight: u64,
}

impl<T> Default for WeightedChooser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedChooser<T> {
    /// Create an empty chooser
    pub const fn new() -> Self {
        Self {
            options: Vec::new(),
            range_ends: Vec::new(),
            total_weight: 0,
        }
    }

    /// Append an option occupying the next `weight` values of the range
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the total weight would overflow
    pub fn add_option(&mut self, value: T, weight: u64) -> Result<()> {
        let end = self
            .total_weight
            .checked_add(weight)
            .ok_or_else(|| invalid_argument("weight", &weight, &"total weight overflows"))?;
        self.options.push(value);
        self.range_ends.push(end);
        self.total_weight = end;
        Ok(())
    }

    /// Whether a draw can succeed (total weight is positive)
    pub const fn options_available(&self) -> bool {
        self.total_weight > 0
    }

    /// Sum of all option weights
    pub const fn total_weight(&self) -> u64 {
        self.total_weight
    }

    /// Number of options added, including zero-weight ones
    pub const fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether no options have been added
    pub const fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index of the option whose range contains `value`
    ///
    /// Returns `None` when `value` is not below the total weight.
    pub fn index_for(&self, value: u64) -> Option<usize> {
        if value >= self.total_weight {
            return None;
        }
        // First range ending after value; empty ranges end at their start and are skipped
        Some(self.range_ends.partition_point(|&end| end <= value))
    }

    /// Draw an option with probability proportional to its weight
    ///
    /// # Errors
    ///
    /// Returns `NoOptions` if the total weight is zero
    pub fn choose<R: RngCore>(&self, random: &mut UnbiasedRangeGenerator<R>) -> Result<&T> {
        let index = self.draw_index(random)?;
        self.options.get(index).ok_or(TilingError::NoOptions)
    }

    /// Draw an option and take ownership of it
    ///
    /// # Errors
    ///
    /// Returns `NoOptions` if the total weight is zero
    pub fn into_choice<R: RngCore>(mut self, random: &mut UnbiasedRangeGenerator<R>) -> Result<T> {
        let index = self.draw_index(random)?;
        if index < self.options.len() {
            Ok(self.options.swap_remove(index))
        } else {
            Err(TilingError::NoOptions)
        }
    }

    fn draw_index<R: RngCore>(&self, random: &mut UnbiasedRangeGenerator<R>) -> Result<usize> {
        if !self.options_available() {
            return Err(TilingError::NoOptions);
        }
        let value = random.next(self.total_weight)?;
        self.index_for(value).ok_or(TilingError::NoOptions)
    }
}
