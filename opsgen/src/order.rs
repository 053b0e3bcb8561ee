//! Order Validation and Position Sequencing
//!
//! Validates the requested arity and enumerates the 1-based member
//! positions it spans.

use std::ops::RangeInclusive;

use crate::{GeneratorError, GeneratorResult};

/// A validated arity with restartable position sequences.
///
/// The sequence for order N is `1, 2, ..., N`. Every accessor returns a
/// fresh iterator, so the same instance can drive any number of passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderIterator {
    order: u32,
}

impl OrderIterator {
    /// Validates `order` and creates the sequence over its positions.
    ///
    /// Fails with [`GeneratorError::InvalidOrder`] when `order` is less
    /// than 1. The failure is raised here, never during iteration.
    pub fn new(order: i32) -> GeneratorResult<Self> {
        if order < 1 {
            return Err(GeneratorError::InvalidOrder { order });
        }
        Ok(Self {
            order: order as u32,
        })
    }

    /// The validated arity.
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Positions 1 through the order.
    pub fn positions(&self) -> RangeInclusive<u32> {
        1..=self.order
    }

    /// Positions from `start` through the order; empty when `start`
    /// exceeds the order. Values of `start` below 1 are treated as 1.
    pub fn positions_from(&self, start: u32) -> RangeInclusive<u32> {
        start.max(1)..=self.order
    }
}
