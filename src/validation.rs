//! Input validation for assignment problems.
//!
//! Checks structural integrity of the job and resource catalogs before
//! an optimizer is built. Detects:
//! - Empty catalogs
//! - Duplicate job IDs
//! - Non-positive or non-finite job lengths
//! - Non-positive or non-finite resource speeds

use std::collections::HashSet;
use std::fmt;

use crate::models::{Job, Resource};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The job catalog has no entries.
    EmptyJobCatalog,
    /// The resource catalog has no entries.
    EmptyResourceCatalog,
    /// Two jobs share the same ID.
    DuplicateId,
    /// A job length is zero, negative, NaN or infinite.
    InvalidLength,
    /// A resource speed is zero, negative, NaN or infinite.
    InvalidSpeed,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the catalogs for an assignment problem.
///
/// Checks:
/// 1. At least one job
/// 2. At least one resource
/// 3. No duplicate job IDs
/// 4. All job lengths are finite and positive
/// 5. All resource speeds are finite and positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalogs(jobs: &[Job], resources: &[Resource]) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyJobCatalog,
            "Job catalog is empty",
        ));
    }
    if resources.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyResourceCatalog,
            "Resource catalog is empty",
        ));
    }

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }
        if !is_positive(job.length) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidLength,
                format!("Job {} has invalid length {}", job.id, job.length),
            ));
        }
    }

    for (index, resource) in resources.iter().enumerate() {
        if !is_positive(resource.speed) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidSpeed,
                format!("Resource {index} has invalid speed {}", resource.speed),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[inline]
fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
