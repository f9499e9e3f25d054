// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Positional error container for batch operations.
//!
//! A `MultiError` has exactly one slot per item of the batch it reports
//! on. It only counts as an error when at least one slot holds a failure;
//! [`MultiError::into_result`] turns an all-clear container into `Ok(())`.

use std::fmt;

/// Outcome of one batch position
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<E> {
    /// The operation at this position succeeded
    Absent,
    /// The operation at this position failed
    Failed(E),
    /// The operation was never attempted because the batch aborted earlier
    Skipped,
}

impl<E> Slot<E> {
    pub fn failure(&self) -> Option<&E> {
        match self {
            Slot::Failed(e) => Some(e),
            Slot::Absent | Slot::Skipped => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiError<E> {
    slots: Vec<Slot<E>>,
}

impl<E> MultiError<E> {
    /// Allocate `len` absent slots
    pub fn new(len: usize) -> Self {
        Self { slots: (0..len).map(|_| Slot::Absent).collect() }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Record a failure at `index`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, err: E) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Slot::Failed(err);
        }
    }

    /// Mark every still-absent slot from `start` onwards as skipped
    pub fn skip_from(&mut self, start: usize) {
        for slot in self.slots.iter_mut().skip(start) {
            if matches!(slot, Slot::Absent) {
                *slot = Slot::Skipped;
            }
        }
    }

    /// The failure at `index`, or `None` for absent, skipped and out-of-range slots
    pub fn get(&self, index: usize) -> Option<&E> {
        self.slots.get(index).and_then(Slot::failure)
    }

    pub fn slot(&self, index: usize) -> Option<&Slot<E>> {
        self.slots.get(index)
    }

    pub fn slots(&self) -> &[Slot<E>] {
        &self.slots
    }

    /// Failures with their positions, in batch order
    pub fn failures(&self) -> impl Iterator<Item = (usize, &E)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| s.failure().map(|e| (i, e)))
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn has_failures(&self) -> bool {
        self.slots.iter().any(|s| matches!(s, Slot::Failed(_)))
    }

    /// `Ok(())` when no slot holds a failure, otherwise the container itself
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_failures() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl<E: fmt::Display> fmt::Display for MultiError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (n, (index, err)) in self.failures().enumerate() {
            if n > 0 {
                f.write_str("; ")?;
            }
            write!(f, "[{index}] {err}")?;
        }
        Ok(())
    }
}

impl<E: std::error::Error> std::error::Error for MultiError<E> {}

#[cfg(test)]
#[path = "multi_error_tests.rs"]
mod tests;
