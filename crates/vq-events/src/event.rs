//! The five event kinds and the immutable `Event` record.

use std::fmt;

use vq_core::{CustomerId, SimTime};

/// What happens at an event.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum EventKind {
    /// A customer enters the system.
    Arrival,
    /// A queued customer re-checks whether a server slot is free.
    Waiting,
    /// A service segment ends (completion, or interruption if the server
    /// went off meanwhile).
    EndOfService,
    /// The server starts a vacation.
    ServerOff,
    /// The server returns from a vacation.
    ServerOn,
}

impl EventKind {
    /// Stable snake_case name, used in logs and exports.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Arrival => "arrival",
            EventKind::Waiting => "waiting",
            EventKind::EndOfService => "end_of_service",
            EventKind::ServerOff => "server_off",
            EventKind::ServerOn => "server_on",
        }
    }

    /// `true` for the two kinds owned by [`CustomerId::SERVER`].
    pub fn is_server_event(self) -> bool {
        matches!(self, EventKind::ServerOff | EventKind::ServerOn)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scheduled event.  Never mutated; a rescheduled event is a new `Event`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Event {
    pub kind:     EventKind,
    pub time:     SimTime,
    pub customer: CustomerId,
}

impl Event {
    pub fn new(kind: EventKind, time: SimTime, customer: CustomerId) -> Self {
        Self { kind, time, customer }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}", self.kind, self.customer, self.time)
    }
}
