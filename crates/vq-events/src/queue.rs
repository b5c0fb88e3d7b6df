//! `EventQueue`: pending events ordered by simulated time.
//!
//! # Performance note
//!
//! `BinaryHeap` gives O(log n) push and pop.  Each entry carries a monotonic
//! sequence number taken at push time, so equal timestamps pop in insertion
//! order and the heap behaves exactly like a stable sort of the pending list.
//!
//! [`EventQueue::earliest`] is a linear scan.  It is only called when a
//! customer has to wait, and the heap holds one entry per in-service or
//! waiting customer plus two recurring events.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use vq_core::{CustomerId, SimTime};

use crate::{Event, EventKind};

struct Entry {
    event: Event,
    seq:   u64,
}

impl Entry {
    #[inline]
    fn key(&self) -> (SimTime, u64) {
        (self.event.time, self.seq)
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    // Reversed: `BinaryHeap` is a max-heap and we want the smallest key on top.
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// A min-priority queue of [`Event`]s keyed by `(time, insertion order)`.
#[derive(Default)]
pub struct EventQueue {
    heap:     BinaryHeap<Entry>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `event` to the queue.
    pub fn push(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { event, seq });
    }

    /// Shorthand for `push(Event::new(kind, time, customer))`.
    pub fn schedule(&mut self, kind: EventKind, time: SimTime, customer: CustomerId) {
        self.push(Event::new(kind, time, customer));
    }

    /// Remove and return the event with the smallest time (earliest pushed
    /// among equals), or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|entry| entry.event)
    }

    /// Time of the event `pop` would return next.
    pub fn peek_time(&self) -> Option<SimTime> {
        self.heap.peek().map(|entry| entry.event.time)
    }

    /// Time of the earliest queued event of `kind`, without removing it.
    pub fn earliest(&self, kind: EventKind) -> Option<SimTime> {
        self.earliest_matching(|e| e.kind == kind).map(|e| e.time)
    }

    /// The earliest queued event satisfying `pred`, without removing it.
    pub fn earliest_matching<P>(&self, pred: P) -> Option<&Event>
    where
        P: Fn(&Event) -> bool,
    {
        self.heap
            .iter()
            .filter(|entry| pred(&entry.event))
            .min_by_key(|entry| entry.key())
            .map(|entry| &entry.event)
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
