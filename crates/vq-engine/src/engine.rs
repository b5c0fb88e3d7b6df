//! The `Engine` struct and its event loop.

use std::time::Instant;

use rustc_hash::FxHashMap;
use vq_core::{CustomerId, Params, Recovery, RunLimits, SimTime, Variant, VariateSource};
use vq_events::{Event, EventHistory, EventKind, EventQueue};
use vq_stats::StatsError;

use crate::metrics::{self, Metric, MetricValues, RunSummary, StateSamples};
use crate::{EngineError, EngineObserver, EngineResult, ServiceSegment};

// ── EngineState ──────────────────────────────────────────────────────────────

/// Counters the event loop maintains.  Exposed read-only to observers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EngineState {
    /// Time of the event most recently processed.
    pub now:           SimTime,
    /// Whether the server is on.
    pub running:       bool,
    /// Customers waiting for a slot.
    pub queued:        u64,
    /// Slots occupied, `0 ..= servers`.
    pub busy:          u32,
    pub served:        u64,
    pub arrivals:      u64,
    pub interruptions: u64,
    /// Events popped and processed.
    pub events:        u64,
}

impl EngineState {
    fn new() -> Self {
        Self {
            now:           SimTime::ZERO,
            running:       true,
            queued:        0,
            busy:          0,
            served:        0,
            arrivals:      0,
            interruptions: 0,
            events:        0,
        }
    }
}

/// A customer whose service finished while the server was on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Completion {
    pub customer: CustomerId,
    pub at:       SimTime,
}

// ── Engine ───────────────────────────────────────────────────────────────────

/// One repetition of the on/off-server queue.
///
/// Create via [`EngineBuilder`][crate::EngineBuilder]; the initial events are
/// already queued when `build` returns.
pub struct Engine<V: VariateSource> {
    params:        Params,
    variant:       Variant,
    limits:        RunLimits,
    variates:      V,

    queue:         EventQueue,
    history:       EventHistory,
    state:         EngineState,
    /// Customers currently holding a slot.
    in_service:    FxHashMap<CustomerId, ServiceSegment>,
    completions:   Vec<Completion>,
    samples:       StateSamples,
    next_customer: CustomerId,
}

impl<V: VariateSource> Engine<V> {
    pub(crate) fn new(params: Params, variant: Variant, limits: RunLimits, variates: V) -> Self {
        let mut engine = Self {
            params,
            variant,
            limits,
            variates,
            queue:         EventQueue::new(),
            history:       EventHistory::new(),
            state:         EngineState::new(),
            in_service:    FxHashMap::default(),
            completions:   Vec::new(),
            samples:       StateSamples::default(),
            next_customer: CustomerId::FIRST,
        };
        engine.seed_events();
        engine
    }

    fn seed_events(&mut self) {
        if self.variant.has_vacations() {
            let first_off = SimTime::ZERO + self.variates.on_duration();
            self.queue.schedule(EventKind::ServerOff, first_off, CustomerId::SERVER);
        }
        let first = self.next_customer;
        self.next_customer = first.next();
        self.queue.schedule(EventKind::Arrival, SimTime::ZERO, first);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn limits(&self) -> &RunLimits {
        &self.limits
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn history(&self) -> &EventHistory {
        &self.history
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the time budget is spent or `events_limit` customers have
    /// been served, then compute this run's metrics.
    pub fn run<O: EngineObserver>(&mut self, observer: &mut O) -> EngineResult<RunSummary> {
        observer.on_run_start(&self.params, self.variant);

        let started = Instant::now();
        let wall_budget = self.limits.wall_clock();
        let horizon = self.limits.horizon();

        while self.state.served < self.limits.events_limit {
            if horizon.is_none() && started.elapsed() > wall_budget {
                break;
            }
            if let (Some(h), Some(next)) = (horizon, self.queue.peek_time())
                && next > h
            {
                break;
            }
            self.step(observer)?;
        }

        let summary = self.summary()?;
        observer.on_run_end(&summary);
        Ok(summary)
    }

    /// Pop and process exactly one event.
    ///
    /// Ignores the run limits; useful for tests and incremental stepping.
    pub fn step<O: EngineObserver>(&mut self, observer: &mut O) -> EngineResult<Event> {
        let event = self
            .queue
            .pop()
            .ok_or(EngineError::EmptyQueue { at: self.state.now })?;

        self.state.now = event.time;
        self.state.events += 1;
        self.history.record(&event);

        match event.kind {
            EventKind::Arrival => self.on_arrival(event)?,
            EventKind::Waiting => self.on_waiting(event)?,
            EventKind::EndOfService => self.on_end_of_service(event, observer)?,
            EventKind::ServerOff => self.on_server_off(event),
            EventKind::ServerOn => self.on_server_on(event),
        }

        observer.on_event(&event, &self.state);
        Ok(event)
    }

    /// Metrics of the run so far.
    ///
    /// Fails with [`StatsError::InsufficientSamples`] if no customer has
    /// completed service yet.
    pub fn summary(&self) -> EngineResult<RunSummary> {
        if self.completions.is_empty() {
            return Err(StatsError::InsufficientSamples {
                what:   "completed customers",
                needed: 1,
                got:    0,
            }
            .into());
        }

        let mut service_total = 0.0;
        let mut system_total = 0.0;
        for c in &self.completions {
            let (arrived, entered) = entry_times(&self.history, c.customer)?;
            service_total += c.at - entered;
            system_total += c.at - arrived;
        }
        let n = self.completions.len() as f64;

        let mut measured = MetricValues::new()
            .with(Metric::MeanServiceTime, service_total / n)
            .with(Metric::MeanSystemTime, system_total / n);

        if let Some((in_system, in_queue, busy)) = self.samples.means() {
            measured.set(Metric::MeanClientsInSystem, in_system);
            measured.set(Metric::MeanClientsInQueue, in_queue);
            measured.set(Metric::ServerEmptyProb, 1.0 - busy);
        }

        if self.variant.has_vacations()
            && let Some((p_on, p_off)) = metrics::on_off_fractions(self.history.server())
        {
            measured.set(Metric::ServerOnProb, p_on);
            measured.set(Metric::ServerOffProb, p_off);
        }

        Ok(RunSummary {
            measured,
            theoretical:   metrics::theoretical(&self.params, self.variant),
            served:        self.state.served,
            arrivals:      self.state.arrivals,
            interruptions: self.state.interruptions,
            events:        self.state.events,
            end_time:      self.state.now,
        })
    }

    // ── Event handlers ────────────────────────────────────────────────────

    fn slot_free(&self) -> bool {
        self.state.running && self.state.busy < self.params.servers
    }

    fn on_arrival(&mut self, event: Event) -> EngineResult<()> {
        self.state.arrivals += 1;
        self.samples
            .record(self.state.queued, self.state.busy, self.params.servers);

        if self.slot_free() {
            self.begin_service(event.customer, event.time);
        } else {
            self.state.queued += 1;
            self.wait(event.customer)?;
        }

        let next = self.next_customer;
        self.next_customer = next.next();
        let at = event.time + self.variates.interarrival_time();
        self.queue.schedule(EventKind::Arrival, at, next);
        Ok(())
    }

    fn on_waiting(&mut self, event: Event) -> EngineResult<()> {
        if self.slot_free() {
            self.state.queued -= 1;
            self.begin_service(event.customer, event.time);
            Ok(())
        } else {
            self.wait(event.customer)
        }
    }

    fn on_end_of_service<O: EngineObserver>(
        &mut self,
        event:    Event,
        observer: &mut O,
    ) -> EngineResult<()> {
        let customer = event.customer;

        if self.state.running {
            self.in_service
                .remove(&customer)
                .ok_or(EngineError::NotInService(customer))?;
            self.state.busy -= 1;
            self.state.served += 1;
            self.completions.push(Completion { customer, at: event.time });
            return Ok(());
        }

        // Server is off: the service is pushed past the vacation.
        let recovery = self.variant.recovery().unwrap_or(Recovery::Resume);
        let went_off = self
            .history
            .server()
            .last(EventKind::ServerOff)
            .unwrap_or(event.time);
        let back_on = self
            .queue
            .earliest(EventKind::ServerOn)
            .ok_or(EngineError::NoWakeTarget { customer, kind: EventKind::ServerOn })?;
        let segment = self
            .in_service
            .get_mut(&customer)
            .ok_or(EngineError::NotInService(customer))?;

        let remaining = segment.remaining(recovery, went_off);
        let resume_at = back_on + remaining;
        segment.scheduled_end = resume_at;

        self.queue.schedule(EventKind::EndOfService, resume_at, customer);
        self.state.interruptions += 1;
        observer.on_interrupted(customer, remaining, resume_at);
        Ok(())
    }

    fn on_server_off(&mut self, event: Event) {
        self.state.running = false;
        let at = event.time + self.variates.off_duration();
        self.queue.schedule(EventKind::ServerOn, at, CustomerId::SERVER);
    }

    fn on_server_on(&mut self, event: Event) {
        self.state.running = true;
        let at = event.time + self.variates.on_duration();
        self.queue.schedule(EventKind::ServerOff, at, CustomerId::SERVER);
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn begin_service(&mut self, customer: CustomerId, now: SimTime) {
        self.state.busy += 1;
        let segment = ServiceSegment::new(now, self.variates.service_time());
        self.queue
            .schedule(EventKind::EndOfService, segment.scheduled_end, customer);
        self.in_service.insert(customer, segment);
    }

    /// Queue a `Waiting` wake-up at the earliest moment a slot could free:
    /// the next end of service while the server is on, the next `ServerOn`
    /// while it is off.
    fn wait(&mut self, customer: CustomerId) -> EngineResult<()> {
        let kind = if self.state.running {
            EventKind::EndOfService
        } else {
            EventKind::ServerOn
        };
        let at = self
            .queue
            .earliest(kind)
            .ok_or(EngineError::NoWakeTarget { customer, kind })?;
        self.queue.schedule(EventKind::Waiting, at, customer);
        Ok(())
    }
}

/// Arrival time of `customer` and the time their service began (their last
/// `Waiting` wake-up, or the arrival itself if they never waited).
pub(crate) fn entry_times(
    history:  &EventHistory,
    customer: CustomerId,
) -> EngineResult<(SimTime, SimTime)> {
    let arrived = history
        .customer(customer)
        .and_then(|record| record.first(EventKind::Arrival).map(|at| (record, at)));
    let (record, arrived) = arrived.ok_or(EngineError::MissingHistory(customer))?;
    Ok((arrived, record.last(EventKind::Waiting).unwrap_or(arrived)))
}
