//! Handler Slot Collections
//!
//! A positional collection of per-member handlers, validated complete at
//! construction time.

use crate::{GeneratorError, GeneratorResult};

/// Ordered handler slots for positions `1..=N`.
///
/// Construction walks the supplied entries in position order and fails on
/// the first absent one, so a partially filled collection is never
/// observable. Position `k` holds exactly the `k`-th handler; dispatch
/// through the collection never touches any other slot.
#[derive(Debug, Clone)]
pub struct HandlerSlots<T> {
    slots: Vec<T>,
}

impl<T> HandlerSlots<T> {
    /// Builds a collection from one optional entry per position.
    ///
    /// Fails with [`GeneratorError::NullHandler`] naming the first absent
    /// position, or with [`GeneratorError::InvalidOrder`] when no entries
    /// are supplied at all.
    pub fn new<I>(entries: I) -> GeneratorResult<Self>
    where
        I: IntoIterator<Item = Option<T>>,
    {
        let mut slots = Vec::new();
        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                Some(handler) => slots.push(handler),
                None => {
                    return Err(GeneratorError::NullHandler {
                        position: index as u32 + 1,
                    });
                }
            }
        }
        if slots.is_empty() {
            return Err(GeneratorError::InvalidOrder { order: 0 });
        }
        Ok(Self { slots })
    }

    /// The number of positions.
    pub fn order(&self) -> u32 {
        self.slots.len() as u32
    }

    /// The handler at the 1-based `position`, if in range.
    pub fn get(&self, position: u32) -> Option<&T> {
        position
            .checked_sub(1)
            .and_then(|index| self.slots.get(index as usize))
    }

    /// Iterates `(position, handler)` pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &T)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, handler)| (index as u32 + 1, handler))
    }
}
