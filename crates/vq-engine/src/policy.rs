//! Recovery of a service interrupted by a vacation.

use vq_core::{Recovery, SimTime};

/// The service a customer is currently receiving.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ServiceSegment {
    /// When the customer entered service.
    pub started:       SimTime,
    /// Full service duration drawn at `started`.
    pub duration:      f64,
    /// Time of the currently queued `EndOfService` for this customer.
    pub scheduled_end: SimTime,
}

impl ServiceSegment {
    pub fn new(started: SimTime, duration: f64) -> Self {
        Self { started, duration, scheduled_end: started + duration }
    }

    /// Work still owed after the vacation that began at `went_off`.
    ///
    /// `Resume` owes whatever had not been done when the server went off;
    /// `Restart` owes the whole service again.
    pub fn remaining(&self, recovery: Recovery, went_off: SimTime) -> f64 {
        match recovery {
            Recovery::Resume => (self.scheduled_end - went_off).max(0.0),
            Recovery::Restart => self.duration,
        }
    }
}
