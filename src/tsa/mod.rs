//! Tree-seed assignment optimization (TSA).
//!
//! A population of job-to-resource assignments evolves for a fixed number
//! of rounds. Offspring are mutated copies of uniformly drawn parents:
//! each job is, with probability 0.25, proposed for a move to the
//! currently least-loaded resource, and an external [`MutationOracle`]
//! decides whether the move is applied.
//!
//! # Fitness
//!
//! `0.5 * makespan + 0.35 * imbalance + 0.15 * energy`, lower is better.
//! See [`fitness`] for the exact terms.
//!
//! # Submodules
//!
//! - [`fitness`]: Load, makespan, imbalance and energy evaluation
//! - [`oracle`]: Mutation gate trait and stock implementations
//! - [`mutation`]: The per-seed mutation policy
//!
//! # Reference
//! Kiran (2015), "TSA: Tree-seed algorithm for continuous optimization"

mod config;
mod error;
pub mod fitness;
pub mod mutation;
pub mod oracle;
mod optimizer;

pub use config::{OptimizerConfig, OracleFallback};
pub use error::{OptimizerError, OracleError};
pub use fitness::{EnergyModel, FitnessBreakdown, FitnessModel, FitnessWeights};
pub use mutation::MutationStats;
pub use oracle::{ConstantOracle, FnOracle, LogisticOracle, MutationOracle};
pub use optimizer::{BestRecord, OptimizationReport, TreeSeedOptimizer};
