//! `vq-events`: events, the pending-event queue, and the event history.
//!
//! # Crate layout
//!
//! | Module       | Contents                                               |
//! |--------------|--------------------------------------------------------|
//! | [`event`]    | `EventKind`, `Event`                                   |
//! | [`queue`]    | `EventQueue` (binary heap keyed by time + sequence)    |
//! | [`history`]  | `EventHistory`, `CustomerRecord`                       |
//!
//! # Ordering model (summary)
//!
//! ```text
//! key(event)  = (event.time, insertion_seq)
//! pop()       = event with the smallest key
//! ```
//!
//! Two events scheduled for exactly the same time come out in the order they
//! were pushed.  The engine relies on this: a customer's `Waiting` wake-up is
//! always pushed after the `EndOfService` it waits for, so the completion is
//! processed first and the slot is free when the customer re-checks.

pub mod event;
pub mod history;
pub mod queue;


pub use event::{Event, EventKind};
pub use history::{CustomerRecord, EventHistory};
pub use queue::EventQueue;
