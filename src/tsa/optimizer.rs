//! Tree-seed search loop.
//!
//! # Algorithm
//!
//! 1. Seed `P` random assignments (each job on a uniform random resource).
//! 2. Repeat `I` rounds:
//!    a. Evaluate every individual; keep a copy of any strictly better one.
//!    b. Build the next population: `P` parents drawn uniformly with
//!       replacement, each copied and passed through the mutation policy.
//! 3. Stop after `I` rounds. There is no convergence-based early exit.
//!
//! The best-so-far fitness is non-increasing across rounds.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use super::fitness::{FitnessBreakdown, FitnessModel};
use super::mutation::{mutate_seed, MutationStats};
use super::{MutationOracle, OptimizerConfig, OptimizerError};
use crate::models::{Assignment, Job, JobId, Resource};
use crate::validation::validate_catalogs;

/// The best assignment found so far and its fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct BestRecord {
    /// Copy of the best individual (never aliased with the population).
    pub assignment: Assignment,
    /// Its fitness.
    pub fitness: f64,
}

/// Summary of one [`TreeSeedOptimizer::optimize`] call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    /// Rounds that ran to completion.
    pub rounds_completed: usize,
    /// Final best fitness (`None` if no round ran).
    pub best_fitness: Option<f64>,
    /// Best-so-far fitness after each round's evaluation.
    pub best_fitness_history: Vec<f64>,
    /// Jobs selected as mutation candidates.
    pub mutation_candidates: usize,
    /// Candidates moved to the least-loaded resource.
    pub mutations_accepted: usize,
    /// Candidates left in place.
    pub mutations_rejected: usize,
    /// Oracle errors (handled by the configured fallback).
    pub oracle_failures: usize,
    /// Whether the run stopped early on a cancellation signal.
    pub cancelled: bool,
    /// Wall-clock time of the call.
    pub elapsed: Duration,
}

/// Population-based job-to-resource optimizer with oracle-gated
/// least-loaded mutation.
///
/// Owns its random source. Runs are reproducible when built with
/// [`OptimizerConfig::with_seed`] or [`TreeSeedOptimizer::with_rng`].
///
/// # Example
/// ```
/// use u_treeseed::models::{Job, Resource};
/// use u_treeseed::tsa::{ConstantOracle, OptimizerConfig, TreeSeedOptimizer};
///
/// let jobs = Job::from_lengths(&[1200.0, 800.0, 3000.0, 450.0]);
/// let resources = Resource::uniform(2, 1000.0);
/// let config = OptimizerConfig::default().with_seed(42);
///
/// let mut optimizer =
///     TreeSeedOptimizer::new(&jobs, &resources, ConstantOracle(0.0), config).unwrap();
/// optimizer.optimize().unwrap();
///
/// let mapping = optimizer.best_mapping().unwrap();
/// assert_eq!(mapping.len(), 4);
/// ```
pub struct TreeSeedOptimizer<O, R = StdRng> {
    jobs: Vec<Job>,
    model: FitnessModel,
    oracle: O,
    config: OptimizerConfig,
    rng: R,
    best: Option<BestRecord>,
}

impl<O: MutationOracle> TreeSeedOptimizer<O, StdRng> {
    /// Creates an optimizer whose RNG is seeded from `config.seed`, or from
    /// the operating system when no seed is set.
    ///
    /// # Errors
    /// [`OptimizerError::InvalidConfiguration`] if either catalog is empty,
    /// holds invalid values, or the configuration is out of range.
    pub fn new(
        jobs: &[Job],
        resources: &[Resource],
        oracle: O,
        config: OptimizerConfig,
    ) -> Result<Self, OptimizerError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(jobs, resources, oracle, config, rng)
    }
}

impl<O: MutationOracle, R: Rng> TreeSeedOptimizer<O, R> {
    /// Creates an optimizer that draws all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(
        jobs: &[Job],
        resources: &[Resource],
        oracle: O,
        config: OptimizerConfig,
        rng: R,
    ) -> Result<Self, OptimizerError> {
        validate_catalogs(jobs, resources).map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            OptimizerError::InvalidConfiguration(messages.join("; "))
        })?;
        config.validate()?;

        let model = FitnessModel::new(jobs, resources)
            .with_weights(config.weights)
            .with_energy_model(config.energy);

        Ok(Self {
            jobs: jobs.to_vec(),
            model,
            oracle,
            config,
            rng,
            best: None,
        })
    }

    /// Runs the search from scratch.
    ///
    /// Every call reseeds the population and clears the previous best;
    /// it never resumes from an earlier run.
    ///
    /// # Errors
    /// [`OptimizerError::OracleUnavailable`] if the oracle fails while
    /// [`OracleFallback::Abort`](super::OracleFallback::Abort) is configured.
    /// The partial best record of the aborted run is discarded.
    pub fn optimize(&mut self) -> Result<OptimizationReport, OptimizerError> {
        self.run(None)
    }

    /// Like [`optimize`](Self::optimize), but checks `cancel` before each
    /// round and stops early once it is set.
    ///
    /// Rounds that already started always finish.
    pub fn optimize_with_cancel(
        &mut self,
        cancel: &AtomicBool,
    ) -> Result<OptimizationReport, OptimizerError> {
        self.run(Some(cancel))
    }

    #[tracing::instrument(level = "info", name = "TSA optimize", skip_all)]
    fn run(&mut self, cancel: Option<&AtomicBool>) -> Result<OptimizationReport, OptimizerError> {
        let start = Instant::now();
        let population_size = self.config.population_size;
        let rounds = self.config.max_iterations;
        tracing::info!(
            jobs = self.model.job_count(),
            resources = self.model.resource_count(),
            population = population_size,
            rounds,
            "TSA started"
        );

        self.best = None;
        let mut stats = MutationStats::default();
        let mut history = Vec::with_capacity(rounds);
        let mut cancelled = false;

        let mut population: Vec<Assignment> = (0..population_size)
            .map(|_| {
                Assignment::random(
                    self.model.job_count(),
                    self.model.resource_count(),
                    &mut self.rng,
                )
            })
            .collect();

        for round in 0..rounds {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                tracing::warn!(round, "TSA: cancelled before round");
                cancelled = true;
                break;
            }

            let best_fitness = self.record_best(&population, round);
            history.push(best_fitness);

            let mut next = Vec::with_capacity(population_size);
            for _ in 0..population_size {
                let parent = &population[self.rng.random_range(0..population_size)];
                let mut seed = parent.clone();
                if let Err(err) = mutate_seed(
                    &mut seed,
                    &self.model,
                    &self.oracle,
                    self.config.mutation_rate,
                    self.config.oracle_fallback,
                    &mut self.rng,
                    &mut stats,
                ) {
                    tracing::warn!(round, error = %err, "TSA: aborted on oracle failure");
                    self.best = None;
                    return Err(err.into());
                }
                next.push(seed);
            }
            population = next;

            if self.config.is_progress_round(round) {
                tracing::info!(
                    round = round + 1,
                    rounds,
                    best_fitness,
                    "TSA progress"
                );
            }
        }

        if stats.oracle_failures > 0 {
            tracing::warn!(
                failures = stats.oracle_failures,
                "TSA: oracle errors treated as rejected mutations"
            );
        }

        let elapsed = start.elapsed();
        let best_fitness = self.best.as_ref().map(|b| b.fitness);
        tracing::info!(
            elapsed_ms = elapsed.as_millis() as u64,
            best_fitness = ?best_fitness,
            "TSA finished"
        );

        Ok(OptimizationReport {
            rounds_completed: history.len(),
            best_fitness,
            best_fitness_history: history,
            mutation_candidates: stats.candidates,
            mutations_accepted: stats.accepted,
            mutations_rejected: stats.rejected,
            oracle_failures: stats.oracle_failures,
            cancelled,
            elapsed,
        })
    }

    /// Evaluates the population and updates the best record on strict
    /// improvement. Returns the best fitness after the pass.
    fn record_best(&mut self, population: &[Assignment], round: usize) -> f64 {
        for individual in population {
            let fitness = self.model.evaluate(individual);
            let current = self.best.as_ref().map_or(f64::INFINITY, |b| b.fitness);
            if fitness < current {
                tracing::debug!(round, fitness, previous = current, "TSA: new best");
                self.best = Some(BestRecord {
                    assignment: individual.clone(),
                    fitness,
                });
            }
        }
        self.best.as_ref().map_or(f64::INFINITY, |b| b.fitness)
    }
}

impl<O, R> TreeSeedOptimizer<O, R> {
    /// Best mapping keyed by job ID, covering every job exactly once.
    ///
    /// # Errors
    /// [`OptimizerError::NotYetOptimized`] before the first evaluation pass.
    pub fn best_mapping(&self) -> Result<BTreeMap<JobId, usize>, OptimizerError> {
        self.best_assignment()
            .map(|assignment| assignment.to_mapping(&self.jobs))
    }

    /// Best assignment in job-catalog order.
    pub fn best_assignment(&self) -> Result<&Assignment, OptimizerError> {
        self.best
            .as_ref()
            .map(|b| &b.assignment)
            .ok_or(OptimizerError::NotYetOptimized)
    }

    /// Best fitness, if any round has been evaluated.
    pub fn best_fitness(&self) -> Option<f64> {
        self.best.as_ref().map(|b| b.fitness)
    }

    /// Fitness terms of the best assignment.
    pub fn best_breakdown(&self) -> Result<FitnessBreakdown, OptimizerError> {
        self.best_assignment()
            .map(|assignment| self.model.breakdown(assignment))
    }

    /// The job catalog (in the order assignments are indexed).
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// The fitness model built from the catalogs.
    pub fn model(&self) -> &FitnessModel {
        &self.model
    }

    /// The active configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }
}
