//! Mutation oracle: the gate deciding whether a proposed reassignment
//! is applied.
//!
//! The optimizer only ever asks `score(length / 1000, speed / 1000) < 0.5`.
//! Anything that maps two features to a scalar can act as the oracle: a
//! constant, a hand-written rule, or a trained classifier.

use super::OracleError;

/// Divisor applied to job length and resource speed before scoring.
pub const FEATURE_SCALE: f64 = 1000.0;

/// Scores strictly below this value accept the mutation.
pub const ACCEPT_THRESHOLD: f64 = 0.5;

/// Scores a (job length, current resource speed) feature pair.
pub trait MutationOracle {
    /// Returns a score for the scaled feature vector.
    fn score(&self, features: [f64; 2]) -> Result<f64, OracleError>;

    /// Whether the score accepts the mutation. A NaN score rejects.
    fn accepts(&self, features: [f64; 2]) -> Result<bool, OracleError> {
        Ok(self.score(features)? < ACCEPT_THRESHOLD)
    }
}

impl<T: MutationOracle + ?Sized> MutationOracle for &T {
    fn score(&self, features: [f64; 2]) -> Result<f64, OracleError> {
        (**self).score(features)
    }
}

impl<T: MutationOracle + ?Sized> MutationOracle for Box<T> {
    fn score(&self, features: [f64; 2]) -> Result<f64, OracleError> {
        (**self).score(features)
    }
}

/// Builds the scaled feature vector for a job on a resource.
#[inline]
pub fn features(job_length: f64, resource_speed: f64) -> [f64; 2] {
    [job_length / FEATURE_SCALE, resource_speed / FEATURE_SCALE]
}

/// Returns the same score for every input.
///
/// A value below [`ACCEPT_THRESHOLD`] accepts every mutation; a value at
/// or above it rejects every mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantOracle(pub f64);

impl MutationOracle for ConstantOracle {
    fn score(&self, _features: [f64; 2]) -> Result<f64, OracleError> {
        Ok(self.0)
    }
}

/// Logistic-regression oracle: `sigmoid(w . x + b)`.
///
/// Scores lie in `(0, 1)`. Non-finite features are rejected with
/// [`OracleError::MalformedFeatures`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticOracle {
    /// Coefficients for (length, speed).
    pub weights: [f64; 2],
    /// Intercept.
    pub bias: f64,
}

impl LogisticOracle {
    /// Creates an oracle with the given coefficients.
    pub fn new(weights: [f64; 2], bias: f64) -> Self {
        Self { weights, bias }
    }
}

impl MutationOracle for LogisticOracle {
    fn score(&self, features: [f64; 2]) -> Result<f64, OracleError> {
        if features.iter().any(|f| !f.is_finite()) {
            return Err(OracleError::MalformedFeatures { features });
        }
        let z = self.weights[0] * features[0] + self.weights[1] * features[1] + self.bias;
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

/// Adapts an infallible closure into an oracle.
///
/// # Example
/// ```
/// use u_treeseed::tsa::{FnOracle, MutationOracle};
///
/// // Accept moves only for long jobs.
/// let oracle = FnOracle(|[length, _speed]: [f64; 2]| if length > 2.0 { 0.0 } else { 1.0 });
/// assert!(oracle.accepts([3.0, 1.0]).unwrap());
/// assert!(!oracle.accepts([1.0, 1.0]).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnOracle<F>(pub F);

impl<F: Fn([f64; 2]) -> f64> MutationOracle for FnOracle<F> {
    fn score(&self, features: [f64; 2]) -> Result<f64, OracleError> {
        Ok((self.0)(features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_are_scaled() {
        let f = features(2500.0, 1000.0);
        assert!((f[0] - 2.5).abs() < 1e-12);
        assert!((f[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_oracle_threshold() {
        assert!(ConstantOracle(0.2).accepts([1.0, 1.0]).unwrap());
        assert!(!ConstantOracle(0.8).accepts([1.0, 1.0]).unwrap());
        // Threshold itself rejects (strict comparison)
        assert!(!ConstantOracle(0.5).accepts([1.0, 1.0]).unwrap());
        assert!(!ConstantOracle(f64::NAN).accepts([1.0, 1.0]).unwrap());
    }

    #[test]
    fn test_logistic_oracle() {
        let oracle = LogisticOracle::new([0.0, 0.0], 0.0);
        assert!((oracle.score([3.0, 4.0]).unwrap() - 0.5).abs() < 1e-12);

        // Long jobs on slow resources push the score down -> accept
        let oracle = LogisticOracle::new([-2.0, 2.0], 0.0);
        assert!(oracle.accepts([5.0, 1.0]).unwrap());
        assert!(!oracle.accepts([1.0, 5.0]).unwrap());
    }

    #[test]
    fn test_logistic_oracle_rejects_malformed() {
        let oracle = LogisticOracle::new([1.0, 1.0], 0.0);
        let err = oracle.score([f64::NAN, 1.0]).unwrap_err();
        assert!(matches!(err, OracleError::MalformedFeatures { .. }));
    }

    #[test]
    fn test_boxed_and_borrowed_oracles() {
        let boxed: Box<dyn MutationOracle> = Box::new(ConstantOracle(0.1));
        assert!(boxed.accepts([0.0, 0.0]).unwrap());
        let borrowed = &ConstantOracle(0.9);
        assert!(!borrowed.accepts([0.0, 0.0]).unwrap());
    }
}
