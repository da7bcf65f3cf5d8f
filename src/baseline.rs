//! Baseline assignments for comparison against the optimizer.
//!
//! # Algorithms
//!
//! - **Round-robin**: job `i` goes to resource `i mod m`. No look at
//!   lengths or speeds; the usual "no algorithm" reference run.
//! - **Greedy least-loaded**: jobs in catalog order, each placed on the
//!   resource with the smallest load so far (list scheduling).
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use crate::models::Assignment;
use crate::tsa::FitnessModel;

/// Assigns job `i` to resource `i % resource_count`.
///
/// Returns an empty assignment when `resource_count` is zero.
pub fn round_robin(job_count: usize, resource_count: usize) -> Assignment {
    if resource_count == 0 {
        return Assignment::default();
    }
    Assignment::from_resources((0..job_count).map(|i| i % resource_count).collect())
}

/// Places each job on the currently least-loaded resource.
///
/// Work is summed per resource and divided by the speed at comparison
/// time, the same arithmetic as [`FitnessModel::resource_loads`]. Ties go
/// to the lowest index.
pub fn greedy_least_loaded(model: &FitnessModel) -> Assignment {
    let mut work = vec![0.0; model.resource_count()];
    let mut resources = Vec::with_capacity(model.job_count());
    let load = |work: &[f64], i: usize| work[i] / model.resource_speed(i);

    for position in 0..model.job_count() {
        let mut best = 0;
        for i in 1..work.len() {
            if load(&work, i) < load(&work, best) {
                best = i;
            }
        }
        if let Some(total) = work.get_mut(best) {
            *total += model.job_length(position);
        }
        resources.push(best);
    }

    Assignment::from_resources(resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Job, Resource};

    #[test]
    fn test_round_robin() {
        let a = round_robin(7, 3);
        assert_eq!(a.as_slice(), &[0, 1, 2, 0, 1, 2, 0]);
        assert!(a.is_valid(7, 3));
    }

    #[test]
    fn test_round_robin_no_resources() {
        let a = round_robin(3, 0);
        assert!(a.is_empty());
    }

    #[test]
    fn test_greedy_least_loaded() {
        let jobs = Job::from_lengths(&[30.0, 10.0, 10.0, 10.0]);
        let model = FitnessModel::new(&jobs, &Resource::uniform(2, 1.0));
        let a = greedy_least_loaded(&model);
        // 30 -> r0, then the three 10s fill r1 (10, 20, 30)
        assert_eq!(a.as_slice(), &[0, 1, 1, 1]);
        let b = model.breakdown(&a);
        assert!((b.makespan - 30.0).abs() < 1e-10);
        assert!(b.imbalance.abs() < 1e-10);
    }

    #[test]
    fn test_greedy_compares_speed_scaled_work() {
        let jobs = Job::from_lengths(&[1000.0, 1000.0, 1000.0]);
        let resources = vec![Resource::new(2000.0), Resource::new(1000.0)];
        let model = FitnessModel::new(&jobs, &resources);
        let a = greedy_least_loaded(&model);
        // r0 (0.5) < r1 (1.0) after two jobs, so the third goes back to r0
        assert_eq!(a.as_slice(), &[0, 1, 0]);
        let loads = model.resource_loads(&a);
        assert_eq!(loads[0].to_bits(), (2000.0f64 / 2000.0).to_bits());
        assert_eq!(loads[1].to_bits(), (1000.0f64 / 1000.0).to_bits());
    }

    #[test]
    fn test_greedy_with_no_jobs() {
        let model = FitnessModel::new(&[], &Resource::uniform(2, 1.0));
        assert!(greedy_least_loaded(&model).is_empty());
    }

    #[test]
    fn test_greedy_beats_round_robin_on_skewed_input() {
        let jobs = Job::from_lengths(&[100.0, 1.0, 100.0, 1.0]);
        let model = FitnessModel::new(&jobs, &Resource::uniform(2, 1.0));
        let rr = model.evaluate(&round_robin(4, 2));
        let greedy = model.evaluate(&greedy_least_loaded(&model));
        assert!(greedy < rr);
    }
}
