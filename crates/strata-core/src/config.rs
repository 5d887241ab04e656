//! Container configuration parameters.

use crate::error::VectorError;

/// Configuration for a type-erased storage container.
///
/// Controls element width, the initial slot count, and the growth
/// policy. Validated at construction; all values are immutable after
/// the container is created.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorConfig {
    /// Width of one logical element in bytes.
    ///
    /// Must be non-zero. Fixed for the container's lifetime.
    pub element_size: usize,

    /// Number of elements allocated and exposed at creation.
    ///
    /// The container starts with `size == capacity == initial_count`.
    /// Default: 0 (no allocation).
    pub initial_count: usize,

    /// Multiplier applied to capacity when an append finds the block full.
    ///
    /// Must be finite and strictly positive. Factors at or below 1.0 are
    /// accepted; growth then falls back to one extra slot per append.
    /// Default: 2.0.
    pub growth_factor: f64,
}

impl VectorConfig {
    /// Default growth factor (doubling).
    pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

    /// Default initial element count.
    pub const DEFAULT_INITIAL_COUNT: usize = 0;

    /// Create a config for elements of `element_size` bytes.
    ///
    /// Uses default values for all other parameters.
    pub fn new(element_size: usize) -> Self {
        Self {
            element_size,
            initial_count: Self::DEFAULT_INITIAL_COUNT,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Set the initial element count.
    pub fn initial_count(mut self, count: usize) -> Self {
        self.initial_count = count;
        self
    }

    /// Set the growth factor.
    pub fn growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Check every parameter.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::InvalidConfig`] if:
    /// - `element_size` is zero
    /// - `growth_factor` is NaN, infinite, or not positive
    ///
    /// Returns [`VectorError::CapacityOverflow`] if the initial block
    /// size in bytes does not fit in `usize`.
    pub fn validate(&self) -> Result<(), VectorError> {
        if self.element_size == 0 {
            return Err(VectorError::InvalidConfig {
                reason: "element_size must be non-zero".to_string(),
            });
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 0.0 {
            return Err(VectorError::InvalidConfig {
                reason: format!(
                    "growth_factor must be finite and > 0, got {}",
                    self.growth_factor
                ),
            });
        }
        self.initial_count
            .checked_mul(self.element_size)
            .ok_or(VectorError::CapacityOverflow {
                requested: self.initial_count,
                element_size: self.element_size,
            })?;
        Ok(())
    }
}
