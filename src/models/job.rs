//! Job model.
//!
//! A job is an independent, non-preemptible unit of work with a declared
//! processing length. Jobs are read once when an optimizer is built and
//! never change during a run.

use serde::{Deserialize, Serialize};

/// Stable job identifier.
pub type JobId = u64;

/// A job to be assigned to a resource.
///
/// # Units
/// `length` is expressed in work units (e.g., million instructions).
/// Dividing it by a resource's `speed` yields a duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Processing length (work units, must be positive).
    pub length: f64,
}

impl Job {
    /// Creates a new job with the given ID and length.
    pub fn new(id: JobId, length: f64) -> Self {
        Self {
            id,
            name: String::new(),
            length,
        }
    }

    /// Sets the job name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds a catalog from plain lengths, numbering jobs from 0.
    pub fn from_lengths(lengths: &[f64]) -> Vec<Self> {
        lengths
            .iter()
            .enumerate()
            .map(|(i, &length)| Self::new(i as JobId, length))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_builder() {
        let job = Job::new(7, 1500.0).with_name("render");
        assert_eq!(job.id, 7);
        assert_eq!(job.name, "render");
        assert!((job.length - 1500.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_lengths() {
        let jobs = Job::from_lengths(&[10.0, 20.0, 30.0]);
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].id, 0);
        assert_eq!(jobs[2].id, 2);
        assert!((jobs[1].length - 20.0).abs() < 1e-10);
    }
}
