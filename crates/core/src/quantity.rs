//! Quantities

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
    ops::RangeInclusive,
    str::FromStr,
};

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Quantities offered by the product pickers.
pub const QUANTITY_CHOICES: RangeInclusive<u32> = 1..=10;

/// Errors produced when parsing a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Zero units were requested.
    #[error("quantity must be at least 1")]
    Zero,

    /// The input was not a non-negative whole number.
    #[error("invalid quantity: {0}")]
    Invalid(String),
}

/// A positive number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] when `units` is zero.
    pub fn new(units: u32) -> Result<Self, QuantityError> {
        NonZeroU32::new(units).map(Self).ok_or(QuantityError::Zero)
    }

    /// Number of units.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// One more unit, saturating at `u32::MAX`.
    #[must_use]
    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer unit; decrementing a single unit removes the line.
    pub fn decremented(self) -> QuantityUpdate {
        QuantityUpdate::from(self.get() - 1)
    }

    /// The quantities offered by the product pickers.
    pub fn choices() -> impl Iterator<Item = Self> {
        QUANTITY_CHOICES.filter_map(|units| Self::new(units).ok())
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(units: u32) -> Result<Self, Self::Error> {
        Self::new(units)
    }
}

impl FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let units: u32 = input
            .trim()
            .parse()
            .map_err(|_parse_error| QuantityError::Invalid(input.to_string()))?;

        Self::new(units)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.get())
    }
}

/// Requested quantity for an existing cart line.
///
/// Zero means the line is removed rather than updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// Remove the line.
    Remove,

    /// Set the line to the given quantity.
    Set(Quantity),
}

impl From<u32> for QuantityUpdate {
    fn from(units: u32) -> Self {
        Quantity::new(units).map_or(Self::Remove, Self::Set)
    }
}
