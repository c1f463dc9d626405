//! Configuration for SeqVec
//!
//! Growth policy for the vector's buffer, with a builder and sensible defaults.

use crate::error::{Result, SeqVecError};

/// Capacity a vector grows to on its first allocation
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

/// Multiplier applied to the capacity of a full buffer
pub const DEFAULT_GROWTH_FACTOR: usize = 2;

/// How a vector grows when it runs out of slots
///
/// - Empty buffer (capacity 0): grow to `initial_capacity`
/// - Full buffer: grow to `capacity * growth_factor`
///
/// The defaults (10, then doubling) are what `Vector::new()` uses; the
/// capacity-related guarantees of the container assume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Capacity of the first allocation
    pub initial_capacity: usize,

    /// Multiplier for subsequent growth (must be >= 2)
    pub growth_factor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_factor: DEFAULT_GROWTH_FACTOR,
        }
    }
}

impl GrowthPolicy {
    /// Create a new policy builder
    pub fn builder() -> GrowthPolicyBuilder {
        GrowthPolicyBuilder::default()
    }

    /// Check that the policy always makes progress
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(SeqVecError::Config(
                "initial_capacity must be at least 1".to_string(),
            ));
        }
        if self.growth_factor < 2 {
            return Err(SeqVecError::Config(format!(
                "growth_factor must be at least 2, got {}",
                self.growth_factor
            )));
        }
        Ok(())
    }

    /// Capacity to grow to when a buffer of `current` slots is full
    pub fn next_capacity(&self, current: usize) -> usize {
        if current == 0 {
            self.initial_capacity
        } else {
            current.saturating_mul(self.growth_factor)
        }
    }
}

/// Builder for GrowthPolicy
#[derive(Default)]
pub struct GrowthPolicyBuilder {
    policy: GrowthPolicy,
}

impl GrowthPolicyBuilder {
    /// Set the capacity of the first allocation
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.policy.initial_capacity = capacity;
        self
    }

    /// Set the growth multiplier
    pub fn growth_factor(mut self, factor: usize) -> Self {
        self.policy.growth_factor = factor;
        self
    }

    /// Validate and return the policy
    pub fn build(self) -> Result<GrowthPolicy> {
        self.policy.validate()?;
        Ok(self.policy)
    }
}
