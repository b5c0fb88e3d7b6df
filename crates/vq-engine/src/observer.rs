//! Engine observer trait for progress reporting and tracing.

use tracing::{debug, trace};

use vq_core::{CustomerId, Params, RepetitionId, SimTime, Variant};
use vq_events::Event;

use crate::{EngineState, RunSummary};

/// Callbacks invoked by [`Engine::run`][crate::Engine::run] at key points in
/// the event loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: counting interruptions
///
/// ```rust,ignore
/// struct Interruptions(u64);
///
/// impl EngineObserver for Interruptions {
///     fn on_interrupted(&mut self, _: CustomerId, _: f64, _: SimTime) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called once before the first event is popped.
    fn on_run_start(&mut self, _params: &Params, _variant: Variant) {}

    /// Called by the orchestrator before each repetition is built.
    fn on_repetition(&mut self, _repetition: RepetitionId, _seed: u64) {}

    /// Called after each event has been applied to the state.
    fn on_event(&mut self, _event: &Event, _state: &EngineState) {}

    /// Called when a service due to end finds the server off.
    ///
    /// `remaining` is the work still owed and `resume_at` the new end time.
    fn on_interrupted(&mut self, _customer: CustomerId, _remaining: f64, _resume_at: SimTime) {}

    /// Called once after the loop stops and metrics are computed.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

impl<O: EngineObserver + ?Sized> EngineObserver for &mut O {
    fn on_run_start(&mut self, params: &Params, variant: Variant) {
        (**self).on_run_start(params, variant);
    }
    fn on_repetition(&mut self, repetition: RepetitionId, seed: u64) {
        (**self).on_repetition(repetition, seed);
    }
    fn on_event(&mut self, event: &Event, state: &EngineState) {
        (**self).on_event(event, state);
    }
    fn on_interrupted(&mut self, customer: CustomerId, remaining: f64, resume_at: SimTime) {
        (**self).on_interrupted(customer, remaining, resume_at);
    }
    fn on_run_end(&mut self, summary: &RunSummary) {
        (**self).on_run_end(summary);
    }
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}

/// Forwards engine callbacks to `tracing`: events at `trace`, run boundaries
/// and interruptions at `debug`.
#[derive(Default)]
pub struct TracingObserver;

impl EngineObserver for TracingObserver {
    fn on_run_start(&mut self, params: &Params, variant: Variant) {
        debug!(%params, %variant, "run start");
    }

    fn on_repetition(&mut self, repetition: RepetitionId, seed: u64) {
        debug!(%repetition, seed, "repetition");
    }

    fn on_event(&mut self, event: &Event, state: &EngineState) {
        trace!(
            %event,
            queued  = state.queued,
            busy    = state.busy,
            running = state.running,
            "event"
        );
    }

    fn on_interrupted(&mut self, customer: CustomerId, remaining: f64, resume_at: SimTime) {
        debug!(%customer, remaining, %resume_at, "service interrupted");
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        debug!(
            served        = summary.served,
            arrivals      = summary.arrivals,
            interruptions = summary.interruptions,
            events        = summary.events,
            end           = %summary.end_time,
            "run end"
        );
    }
}
