//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use super::fitness::{EnergyModel, FitnessWeights};
use super::OptimizerError;

/// What the optimizer does when the mutation oracle returns an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OracleFallback {
    /// Treat the failure as a rejected mutation and keep searching.
    #[default]
    RejectMutation,
    /// Stop the run with [`OptimizerError::OracleUnavailable`].
    Abort,
}

/// Tree-seed search parameters.
///
/// Defaults reproduce the reference run: 10 individuals, 20 rounds,
/// 25% mutation-candidate rate.
///
/// # Example
/// ```
/// use u_treeseed::tsa::OptimizerConfig;
///
/// let config = OptimizerConfig::default()
///     .with_population_size(30)
///     .with_max_iterations(50)
///     .with_seed(42);
/// assert_eq!(config.population_size, 30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Number of assignments per generation (P).
    pub population_size: usize,
    /// Number of evaluate/reproduce rounds (I).
    pub max_iterations: usize,
    /// Per-job probability of becoming a mutation candidate.
    pub mutation_rate: f64,
    /// Log progress every `progress_interval` rounds (0 = final round only).
    pub progress_interval: usize,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Objective weights.
    pub weights: FitnessWeights,
    /// Energy proxy coefficients.
    pub energy: EnergyModel,
    /// Behavior on oracle errors.
    pub oracle_fallback: OracleFallback,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            max_iterations: 20,
            mutation_rate: 0.25,
            progress_interval: 5,
            seed: None,
            weights: FitnessWeights::default(),
            energy: EnergyModel::default(),
            oracle_fallback: OracleFallback::default(),
        }
    }
}

impl OptimizerConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of rounds.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the mutation-candidate probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the progress logging cadence.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the objective weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the energy proxy coefficients.
    pub fn with_energy_model(mut self, energy: EnergyModel) -> Self {
        self.energy = energy;
        self
    }

    /// Sets the oracle failure policy.
    pub fn with_oracle_fallback(mut self, fallback: OracleFallback) -> Self {
        self.oracle_fallback = fallback;
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), OptimizerError> {
        if self.population_size == 0 {
            return Err(OptimizerError::InvalidConfiguration(
                "population_size must be at least 1".into(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(OptimizerError::InvalidConfiguration(
                "max_iterations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(OptimizerError::InvalidConfiguration(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }

    /// Whether progress should be reported after `round` (0-based).
    pub(crate) fn is_progress_round(&self, round: usize) -> bool {
        let last = round + 1 == self.max_iterations;
        last || (self.progress_interval > 0 && (round + 1) % self.progress_interval == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OptimizerConfig::default();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.max_iterations, 20);
        assert!((config.mutation_rate - 0.25).abs() < 1e-10);
        assert_eq!(config.seed, None);
        assert_eq!(config.oracle_fallback, OracleFallback::RejectMutation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_population() {
        let config = OptimizerConfig::default().with_population_size(0);
        assert!(matches!(
            config.validate(),
            Err(OptimizerError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let config = OptimizerConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_rate() {
        assert!(OptimizerConfig::default()
            .with_mutation_rate(1.5)
            .validate()
            .is_err());
        assert!(OptimizerConfig::default()
            .with_mutation_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_progress_cadence() {
        let config = OptimizerConfig::default(); // 20 rounds, every 5th
        let rounds: Vec<usize> = (0..20).filter(|&r| config.is_progress_round(r)).collect();
        assert_eq!(rounds, vec![4, 9, 14, 19]);

        let config = OptimizerConfig::default()
            .with_max_iterations(7)
            .with_progress_interval(0);
        let rounds: Vec<usize> = (0..7).filter(|&r| config.is_progress_round(r)).collect();
        assert_eq!(rounds, vec![6]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: OptimizerConfig =
            serde_json::from_str(r#"{"population_size": 4, "oracle_fallback": "abort"}"#).unwrap();
        assert_eq!(config.population_size, 4);
        assert_eq!(config.max_iterations, 20);
        assert_eq!(config.oracle_fallback, OracleFallback::Abort);
        assert!((config.weights.makespan - 0.5).abs() < 1e-10);
    }
}
