//! Reference counter interface mirroring `Neo.VM/IReferenceCounter.cs`.

use crate::stack_item::StackItem;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Interface describing the behaviour required by the VM reference counter.
///
/// Code that hands freshly built values to the engine registers them through
/// this interface so the engine's accounting stays exact, without depending on
/// how the engine tracks its object graph.
pub trait IReferenceCounter: Send + Sync {
    /// Returns the total number of references currently tracked.
    fn count(&self) -> usize;

    /// Registers a new compound item that nothing refers to yet.
    fn add_zero_referred(&self, item: &StackItem);

    /// Adds a parent/child reference relationship for compound items.
    fn add_reference(&self, item: &StackItem, parent: &StackItem);

    /// Removes a parent/child reference relationship.
    fn remove_reference(&self, item: &StackItem, parent: &StackItem);
}

/// Thread-safe counter that only keeps totals.
#[derive(Debug, Default)]
pub struct ReferenceCounter {
    references_count: AtomicUsize,
    zero_referred_count: AtomicUsize,
}

impl ReferenceCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of compound items registered through `add_zero_referred`.
    pub fn zero_referred_count(&self) -> usize {
        self.zero_referred_count.load(Ordering::Relaxed)
    }
}

impl IReferenceCounter for ReferenceCounter {
    fn count(&self) -> usize {
        self.references_count.load(Ordering::Relaxed)
    }

    fn add_zero_referred(&self, item: &StackItem) {
        if item.is_compound() {
            self.zero_referred_count.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn add_reference(&self, _item: &StackItem, _parent: &StackItem) {
        self.references_count.fetch_add(1, Ordering::Relaxed);
    }

    fn remove_reference(&self, _item: &StackItem, _parent: &StackItem) {
        // Saturate rather than wrap on an unbalanced remove.
        let _ = self
            .references_count
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |c| c.checked_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_references() {
        let counter = ReferenceCounter::new();
        let parent = StackItem::from_array(vec![StackItem::from_int(1)]);
        let child = StackItem::from_int(1);

        counter.add_zero_referred(&parent);
        counter.add_zero_referred(&child);
        counter.add_reference(&child, &parent);
        assert_eq!(counter.count(), 1);
        assert_eq!(counter.zero_referred_count(), 1);

        counter.remove_reference(&child, &parent);
        counter.remove_reference(&child, &parent);
        assert_eq!(counter.count(), 0);
    }
}
