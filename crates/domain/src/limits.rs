// crates/domain/src/limits.rs
use multab_shared_kernel::{DomainError, DomainResult};
use serde::Serialize;

/// Inclusive value bounds plus the largest allowed `end - start` per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Limits {
    min: i32,
    max: i32,
    max_span: u32,
}

impl Limits {
    pub const DEFAULT_MIN: i32 = -50;
    pub const DEFAULT_MAX: i32 = 50;
    pub const DEFAULT_MAX_SPAN: u32 = 100;

    /// # Errors
    /// Returns [`DomainError::InvalidLimits`] when `min > max`.
    pub fn new(min: i32, max: i32, max_span: u32) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::InvalidLimits {
                reason: format!("minimum {min} is greater than maximum {max}"),
            });
        }
        Ok(Self { min, max, max_span })
    }

    #[inline]
    pub const fn min(&self) -> i32 {
        self.min
    }

    #[inline]
    pub const fn max(&self) -> i32 {
        self.max
    }

    #[inline]
    pub const fn max_span(&self) -> u32 {
        self.max_span
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.min) && value <= i64::from(self.max)
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
            max_span: Self::DEFAULT_MAX_SPAN,
        }
    }
}
