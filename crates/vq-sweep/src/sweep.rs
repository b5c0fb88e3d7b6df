//! The parameter sweep: every combination of the configured value sets.

use tracing::info;

use vq_core::{Params, SeedStream, SweepConfig};
use vq_engine::{EngineObserver, TracingObserver};

use crate::{CombinationResult, RunOrchestrator, SweepError, SweepResult};

/// Drives the orchestrator over the Cartesian product of a [`SweepConfig`].
pub struct SweepDriver {
    config:       SweepConfig,
    combinations: Vec<Params>,
    orchestrator: RunOrchestrator,
}

impl SweepDriver {
    /// Validate `config` and expand its product.
    pub fn new(config: SweepConfig) -> SweepResult<Self> {
        config.validate()?;
        let combinations = config.combinations();
        let orchestrator = RunOrchestrator::from_config(&config);
        Ok(Self { config, combinations, orchestrator })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Combinations in product order (μ outermost, servers innermost).
    pub fn combinations(&self) -> &[Params] {
        &self.combinations
    }

    /// Run the sweep, tracing every engine through a [`TracingObserver`].
    pub fn run(&self) -> SweepResult<Vec<CombinationResult>> {
        self.run_with(|_, _| TracingObserver)
    }

    /// Run the sweep with one observer per combination from `make_observer`.
    ///
    /// Results come back in product order whether or not the combinations
    /// ran in parallel.
    pub fn run_with<F, O>(&self, make_observer: F) -> SweepResult<Vec<CombinationResult>>
    where
        F: Fn(usize, &Params) -> O + Sync,
        O: EngineObserver,
    {
        info!(
            combinations = self.combinations.len(),
            repetitions  = self.orchestrator.repetitions(),
            variant      = %self.config.variant,
            multithreaded = self.config.multithreaded,
            "sweep start"
        );

        let run_one = |(index, params): (usize, &Params)| -> SweepResult<CombinationResult> {
            let mut seeds = SeedStream::new(self.config.seed, index);
            let mut observer = make_observer(index, params);
            self.orchestrator
                .run(index, *params, &mut seeds, &mut observer)
                .map_err(|e| SweepError::Combination {
                    index,
                    params: *params,
                    source: Box::new(e),
                })
        };

        let results = if self.config.multithreaded {
            self.run_parallel(run_one)
        } else {
            self.combinations.iter().enumerate().map(run_one).collect()
        }?;

        info!(results = results.len(), "sweep done");
        Ok(results)
    }

    #[cfg(feature = "parallel")]
    fn run_parallel<R>(&self, run_one: R) -> SweepResult<Vec<CombinationResult>>
    where
        R: Fn((usize, &Params)) -> SweepResult<CombinationResult> + Sync + Send,
    {
        use rayon::prelude::*;

        self.combinations.par_iter().enumerate().map(run_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn run_parallel<R>(&self, run_one: R) -> SweepResult<Vec<CombinationResult>>
    where
        R: Fn((usize, &Params)) -> SweepResult<CombinationResult>,
    {
        tracing::warn!("built without the `parallel` feature; running combinations sequentially");
        self.combinations.iter().enumerate().map(run_one).collect()
    }
}
