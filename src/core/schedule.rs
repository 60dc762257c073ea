//! Time-ordered queue of deferred one-shot actions.
//!
//! Actions are scheduled against the simulation's accumulated elapsed time and
//! drained once per tick. Entries with equal due times fire in the order they
//! were scheduled.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

struct Entry<A> {
    due: f64,
    seq: u64,
    action: A,
}

impl<A> PartialEq for Entry<A> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<A> Eq for Entry<A> {}

impl<A> PartialOrd for Entry<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A> Ord for Entry<A> {
    // Reversed so the max-heap pops the earliest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .total_cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-heap of actions keyed by due time.
pub struct DeferredQueue<A> {
    heap: BinaryHeap<Entry<A>>,
    next_seq: u64,
}

impl<A> DeferredQueue<A> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Schedule `action` to fire once the clock reaches `due` seconds.
    pub fn schedule(&mut self, due: f64, action: A) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { due, seq, action });
    }

    /// Remove and return every action due at or before `now`, earliest first.
    pub fn drain_due(&mut self, now: f64) -> Vec<A> {
        let mut due = Vec::new();
        while self.heap.peek().is_some_and(|e| e.due <= now) {
            if let Some(entry) = self.heap.pop() {
                due.push(entry.action);
            }
        }
        due
    }

    /// Drop pending actions for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&A) -> bool) {
        self.heap.retain(|e| keep(&e.action));
    }

    /// Due time of the next pending action
    #[inline]
    pub fn next_due(&self) -> Option<f64> {
        self.heap.peek().map(|e| e.due)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<A> Default for DeferredQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}
