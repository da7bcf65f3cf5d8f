//! Assignment (solution) model.
//!
//! An assignment maps every job to exactly one resource. It is stored
//! position-indexed: entry `i` is the resource index of the i-th job in
//! catalog order. Job IDs are only attached when the assignment is
//! exported with [`Assignment::to_mapping`].

use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Job, JobId};

/// Total mapping from job positions to resource indices.
///
/// A plain value: cloning yields an independent copy that can be mutated
/// without affecting the source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Assignment {
    resources: Vec<usize>,
}

impl Assignment {
    /// Creates an assignment where each job independently draws a
    /// uniformly random resource index.
    pub fn random<R: Rng>(job_count: usize, resource_count: usize, rng: &mut R) -> Self {
        let resources = (0..job_count)
            .map(|_| rng.random_range(0..resource_count))
            .collect();
        Self { resources }
    }

    /// Wraps an explicit resource vector (one entry per job position).
    pub fn from_resources(resources: Vec<usize>) -> Self {
        Self { resources }
    }

    /// Resource index of the job at `position`.
    #[inline]
    pub fn resource_of(&self, position: usize) -> Option<usize> {
        self.resources.get(position).copied()
    }

    /// Moves the job at `position` to `resource`.
    ///
    /// # Panics
    /// If `position` is out of bounds.
    #[inline]
    pub fn reassign(&mut self, position: usize, resource: usize) {
        self.resources[position] = resource;
    }

    /// Number of mapped jobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether no jobs are mapped.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Resource indices in job order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.resources.iter().copied()
    }

    /// Resource indices as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.resources
    }

    /// Whether this assignment covers exactly `job_count` jobs and every
    /// resource index lies in `[0, resource_count)`.
    pub fn is_valid(&self, job_count: usize, resource_count: usize) -> bool {
        self.resources.len() == job_count && self.resources.iter().all(|&r| r < resource_count)
    }

    /// Exports the assignment keyed by job ID.
    ///
    /// `jobs` must be the catalog the assignment was built for; positions
    /// beyond the shorter of the two are ignored.
    pub fn to_mapping(&self, jobs: &[Job]) -> BTreeMap<JobId, usize> {
        jobs.iter()
            .zip(&self.resources)
            .map(|(job, &r)| (job.id, r))
            .collect()
    }
}
