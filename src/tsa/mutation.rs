//! Oracle-gated least-loaded mutation.
//!
//! # Algorithm
//!
//! For each job of the seed, in catalog order:
//! 1. Draw `u ~ U[0, 1)`. The job is a candidate iff `u < mutation_rate`.
//! 2. Score `(length / 1000, speed of current resource / 1000)` with the oracle.
//! 3. If the score is below 0.5, move the job to the least-loaded resource
//!    of the seed as it stands at this point of the scan.
//!
//! The least-loaded resource is recomputed from the whole seed for every
//! accepted candidate, so later jobs see earlier moves. Computing it only
//! after acceptance gives the same decisions as computing it up front,
//! since it depends on nothing but the current seed.
//!
//! # Complexity
//! O(n * (n + m)) per seed in the worst case, n = jobs, m = resources.

use rand::Rng;

use super::fitness::FitnessModel;
use super::oracle::{features, MutationOracle};
use super::{OracleError, OracleFallback};
use crate::models::Assignment;

/// Mutation counters accumulated over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationStats {
    /// Jobs selected as mutation candidates.
    pub candidates: usize,
    /// Candidates the oracle accepted (moved to the least-loaded resource).
    pub accepted: usize,
    /// Candidates left in place, including oracle failures.
    pub rejected: usize,
    /// Oracle calls that returned an error.
    pub oracle_failures: usize,
}

/// Mutates `seed` in place.
///
/// # Errors
/// Returns the oracle error only when `fallback` is
/// [`OracleFallback::Abort`]; the seed may then be partially mutated.
pub fn mutate_seed<O, R>(
    seed: &mut Assignment,
    model: &FitnessModel,
    oracle: &O,
    mutation_rate: f64,
    fallback: OracleFallback,
    rng: &mut R,
    stats: &mut MutationStats,
) -> Result<(), OracleError>
where
    O: MutationOracle + ?Sized,
    R: Rng,
{
    for position in 0..seed.len() {
        let draw: f64 = rng.random();
        if draw >= mutation_rate {
            continue;
        }
        stats.candidates += 1;

        let Some(current) = seed.resource_of(position) else {
            continue;
        };
        let scaled = features(model.job_length(position), model.resource_speed(current));

        match oracle.accepts(scaled) {
            Ok(true) => {
                let target = model.least_loaded_resource(seed);
                seed.reassign(position, target);
                stats.accepted += 1;
            }
            Ok(false) => stats.rejected += 1,
            Err(err) => match fallback {
                OracleFallback::RejectMutation => {
                    tracing::debug!(position, error = %err, "oracle failed, mutation rejected");
                    stats.oracle_failures += 1;
                    stats.rejected += 1;
                }
                OracleFallback::Abort => {
                    stats.oracle_failures += 1;
                    return Err(err);
                }
            },
        }
    }
    Ok(())
}
