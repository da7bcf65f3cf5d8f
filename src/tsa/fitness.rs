//! Composite fitness: makespan, load imbalance and an energy proxy.
//!
//! # Definition
//!
//! For each resource `i`:
//! `load[i] = sum(length of jobs on i) / speed[i]`
//!
//! | Term | Formula |
//! |------|---------|
//! | makespan | `max(load)` |
//! | imbalance | `mean(|load[i] - mean(load)|)` (mean absolute deviation) |
//! | energy | `sum(power * load[i] * duty_cycle)` |
//! | fitness | `w_m * makespan + w_i * imbalance + w_e * energy` |
//!
//! Lower fitness is better.

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, Job, Resource};

/// Objective weights (default 0.5 / 0.35 / 0.15).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitnessWeights {
    /// Weight of the makespan term.
    pub makespan: f64,
    /// Weight of the imbalance term.
    pub imbalance: f64,
    /// Weight of the energy term.
    pub energy: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            makespan: 0.5,
            imbalance: 0.35,
            energy: 0.15,
        }
    }
}

/// Simplified per-resource energy proxy, not a physical power model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnergyModel {
    /// Power coefficient per resource (default: 200).
    pub power_watts: f64,
    /// Duty-cycle scalar (default: 0.1).
    pub duty_cycle: f64,
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self {
            power_watts: 200.0,
            duty_cycle: 0.1,
        }
    }
}

/// All fitness terms for one assignment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitnessBreakdown {
    /// Per-resource load (duration).
    pub loads: Vec<f64>,
    /// Maximum load.
    pub makespan: f64,
    /// Mean load.
    pub avg_load: f64,
    /// Mean absolute deviation of the loads.
    pub imbalance: f64,
    /// Energy proxy.
    pub energy: f64,
    /// Weighted fitness (lower = better).
    pub fitness: f64,
}

/// Fitness evaluator bound to one pair of catalogs.
///
/// Job lengths and resource speeds are copied once into position-indexed
/// tables so evaluation never searches the catalogs.
///
/// Catalogs are expected to be validated (non-empty, positive values);
/// see [`crate::validation::validate_catalogs`].
#[derive(Debug, Clone)]
pub struct FitnessModel {
    lengths: Vec<f64>,
    speeds: Vec<f64>,
    weights: FitnessWeights,
    energy: EnergyModel,
}

impl FitnessModel {
    /// Creates a model with default weights and energy coefficients.
    pub fn new(jobs: &[Job], resources: &[Resource]) -> Self {
        Self {
            lengths: jobs.iter().map(|j| j.length).collect(),
            speeds: resources.iter().map(|r| r.speed).collect(),
            weights: FitnessWeights::default(),
            energy: EnergyModel::default(),
        }
    }

    /// Sets objective weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets energy coefficients.
    pub fn with_energy_model(mut self, energy: EnergyModel) -> Self {
        self.energy = energy;
        self
    }

    /// Number of jobs.
    #[inline]
    pub fn job_count(&self) -> usize {
        self.lengths.len()
    }

    /// Number of resources.
    #[inline]
    pub fn resource_count(&self) -> usize {
        self.speeds.len()
    }

    /// Length of the job at `position`.
    #[inline]
    pub fn job_length(&self, position: usize) -> f64 {
        self.lengths[position]
    }

    /// Speed of the resource at `index`.
    #[inline]
    pub fn resource_speed(&self, index: usize) -> f64 {
        self.speeds[index]
    }

    /// Per-resource load: total assigned length divided by speed.
    pub fn resource_loads(&self, assignment: &Assignment) -> Vec<f64> {
        let mut work = vec![0.0; self.speeds.len()];
        for (position, resource) in assignment.iter().enumerate() {
            work[resource] += self.lengths[position];
        }
        work.iter()
            .zip(&self.speeds)
            .map(|(w, speed)| w / speed)
            .collect()
    }

    /// Computes every fitness term.
    pub fn breakdown(&self, assignment: &Assignment) -> FitnessBreakdown {
        let loads = self.resource_loads(assignment);
        let n = loads.len() as f64;

        let makespan = loads.iter().copied().fold(0.0, f64::max);
        let avg_load = loads.iter().sum::<f64>() / n;
        let imbalance = loads.iter().map(|l| (l - avg_load).abs()).sum::<f64>() / n;
        let energy: f64 = loads
            .iter()
            .map(|l| self.energy.power_watts * l * self.energy.duty_cycle)
            .sum();

        let fitness = self.weights.makespan * makespan
            + self.weights.imbalance * imbalance
            + self.weights.energy * energy;

        FitnessBreakdown {
            loads,
            makespan,
            avg_load,
            imbalance,
            energy,
            fitness,
        }
    }

    /// Weighted fitness (lower = better).
    pub fn evaluate(&self, assignment: &Assignment) -> f64 {
        self.breakdown(assignment).fitness
    }

    /// Index of the resource with the smallest load.
    ///
    /// Loads are recomputed from the full assignment on every call.
    /// Ties resolve to the lowest index.
    pub fn least_loaded_resource(&self, assignment: &Assignment) -> usize {
        let loads = self.resource_loads(assignment);
        let mut min_index = 0;
        let mut min_load = loads.first().copied().unwrap_or(0.0);
        for (i, &load) in loads.iter().enumerate().skip(1) {
            if load < min_load {
                min_load = load;
                min_index = i;
            }
        }
        min_index
    }
}
