use clap::ValueEnum;
use std::num::NonZeroUsize;

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum RampStyle {
    /// Concurrency doubles at each stage.
    Doubling,
    /// Concurrency grows by a fixed step at each stage.
    Linear,
}

/// A strictly positive count, for flags where zero would be meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveUsize(NonZeroUsize);

impl PositiveUsize {
    #[must_use]
    pub fn new(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl std::str::FromStr for PositiveUsize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|err| ValidationError::InvalidNumber { source: err })?;
        Self::new(value).ok_or(ValidationError::ValueTooSmall { min: 1 })
    }
}
