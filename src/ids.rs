//! Identifier Allocation
//!
//! One monotonic counter shared by columns and tasks, seeded past every
//! identifier already present so loaded data can never collide. Once the
//! counter passes `Id::MAX` the smallest free identifier is reused.

use crate::models::Id;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    /// `None` once the counter has run past `Id::MAX`
    next: Option<Id>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl IdAllocator {
    /// Start after the largest identifier in `existing`
    pub fn seeded<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = Id>,
    {
        let next = match existing.into_iter().max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    /// Next identifier for which `in_use` is false
    ///
    /// The counter never hands out an identifier twice; `in_use` is only
    /// consulted after it is exhausted. Returns 0 if every identifier is taken.
    pub fn next_id(&mut self, in_use: impl Fn(Id) -> bool) -> Id {
        if let Some(id) = self.next {
            self.next = id.checked_add(1);
            return id;
        }
        (1..=Id::MAX).find(|id| !in_use(*id)).unwrap_or(0)
    }
}
