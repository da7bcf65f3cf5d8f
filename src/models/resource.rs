//! Resource model.
//!
//! Resources are the execution units that host jobs: virtual machines,
//! workers, cores. Each resource processes work at a fixed speed.
//! A resource's index is its position in the catalog and stays stable
//! for the whole run.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2.1
//! (uniform parallel machines, Qm)

use serde::{Deserialize, Serialize};

/// An execution unit that can host many jobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Processing speed (work units per time unit, must be positive).
    pub speed: f64,
}

impl Resource {
    /// Creates a resource with the given speed.
    pub fn new(speed: f64) -> Self {
        Self {
            name: String::new(),
            speed,
        }
    }

    /// Sets the resource name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds `count` identical resources.
    pub fn uniform(count: usize, speed: f64) -> Vec<Self> {
        (0..count).map(|_| Self::new(speed)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_builder() {
        let r = Resource::new(1000.0).with_name("vm-0");
        assert_eq!(r.name, "vm-0");
        assert!((r.speed - 1000.0).abs() < 1e-10);
    }

    #[test]
    fn test_uniform() {
        let rs = Resource::uniform(4, 500.0);
        assert_eq!(rs.len(), 4);
        assert!(rs.iter().all(|r| (r.speed - 500.0).abs() < 1e-10));
    }
}
