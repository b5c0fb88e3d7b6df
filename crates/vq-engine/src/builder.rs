//! Fluent builder for constructing an [`Engine`].

use vq_core::{ExpVariates, Params, RunLimits, Variant, VariateSource};

use crate::{Engine, EngineResult};

/// Fluent builder for [`Engine<V>`].
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                 |
/// |-----------------|-------------------------|
/// | `.variant(v)`   | `Variant::A`            |
/// | `.limits(l)`    | `RunLimits::default()`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut engine = EngineBuilder::new(params, my_variates)
///     .variant(Variant::B)
///     .limits(limits)
///     .build()?;
/// let summary = engine.run(&mut NoopObserver)?;
/// ```
pub struct EngineBuilder<V: VariateSource> {
    params:   Params,
    variates: V,
    variant:  Variant,
    limits:   RunLimits,
}

impl<V: VariateSource> EngineBuilder<V> {
    pub fn new(params: Params, variates: V) -> Self {
        Self {
            params,
            variates,
            variant: Variant::default(),
            limits:  RunLimits::default(),
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn limits(mut self, limits: RunLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validate the parameters and return an engine with its initial events
    /// queued.
    pub fn build(self) -> EngineResult<Engine<V>> {
        self.params.validate(self.variant.has_vacations())?;
        Ok(Engine::new(self.params, self.variant, self.limits, self.variates))
    }
}

impl EngineBuilder<ExpVariates> {
    /// Builder backed by exponential variates seeded with `seed`.
    pub fn from_seed(params: Params, seed: u64, variant: Variant) -> EngineResult<Self> {
        let variates = ExpVariates::new(seed, &params, variant.has_vacations())?;
        Ok(Self::new(params, variates).variant(variant))
    }
}
