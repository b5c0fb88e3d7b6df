//! Per-customer record of every extracted event.
//!
//! The history is indexed by [`CustomerId`]: slot 0 is the server's on/off
//! log, slots 1.. are customers in arrival order.  Within a slot, kinds are
//! kept in the order they first occurred and each kind holds every time it
//! fired for that customer (a customer may wait, or be interrupted, many
//! times).

use vq_core::{CustomerId, SimTime};

use crate::{Event, EventKind};

/// All event times recorded for one customer.
#[derive(Clone, Debug, Default)]
pub struct CustomerRecord {
    entries: Vec<(EventKind, Vec<SimTime>)>,
}

impl CustomerRecord {
    /// Append `time` to the sequence for `kind`.
    pub fn record(&mut self, kind: EventKind, time: SimTime) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, times)) => times.push(time),
            None => self.entries.push((kind, vec![time])),
        }
    }

    /// Every time `kind` fired, oldest first.  Empty if it never did.
    pub fn times(&self, kind: EventKind) -> &[SimTime] {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, times)| times.as_slice())
            .unwrap_or(&[])
    }

    pub fn first(&self, kind: EventKind) -> Option<SimTime> {
        self.times(kind).first().copied()
    }

    pub fn last(&self, kind: EventKind) -> Option<SimTime> {
        self.times(kind).last().copied()
    }

    pub fn has(&self, kind: EventKind) -> bool {
        !self.times(kind).is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Event history of one run.  Append-only.
#[derive(Clone, Debug)]
pub struct EventHistory {
    customers: Vec<CustomerRecord>,
}

impl Default for EventHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHistory {
    /// A history holding only the (empty) server slot.
    pub fn new() -> Self {
        Self { customers: vec![CustomerRecord::default()] }
    }

    /// Record an extracted event under its customer.
    ///
    /// On/off events belong to [`CustomerId::SERVER`] and only to it.
    pub fn record(&mut self, event: &Event) {
        debug_assert_eq!(
            event.kind.is_server_event(),
            event.customer.is_server(),
            "{event} filed under the wrong owner"
        );
        let idx = event.customer.index();
        if idx >= self.customers.len() {
            self.customers.resize_with(idx + 1, CustomerRecord::default);
        }
        self.customers[idx].record(event.kind, event.time);
    }

    /// The record for `customer`, if any event of theirs has been recorded.
    pub fn customer(&self, customer: CustomerId) -> Option<&CustomerRecord> {
        self.customers
            .get(customer.index())
            .filter(|record| !record.is_empty())
    }

    /// The server's on/off log (customer 0).
    pub fn server(&self) -> &CustomerRecord {
        &self.customers[CustomerId::SERVER.index()]
    }
}
