//! Input validation for empirical uncertainty estimation.
//!
//! ## Purpose
//!
//! This module provides validation for the estimator's configuration and
//! input data: array lengths, parameter bounds, and numeric preconditions.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: The bandwidth must be positive and finite.
//! * **Tolerated inputs**: Non-finite values and covariates are NOT
//!   rejected here; they are handled by the NaN policy during estimation.
//!   Negative covariates are accepted (the covariate is an arbitrary real
//!   for weighting purposes).
//! * **Rejected inputs**: A finite negative internal sigma is a caller bug
//!   and is rejected by name.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not perform the estimation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EmpiricalError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for estimator configuration and input data.
///
/// Provides static methods returning `Result<(), EmpiricalError>` that fail
/// fast upon the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the three parallel input arrays.
    pub fn validate_inputs<T: Float>(
        values: &[T],
        internal_sigmas: &[T],
        covariates: &[T],
    ) -> Result<(), EmpiricalError> {
        // Check 1: Non-empty arrays
        if values.is_empty() || internal_sigmas.is_empty() || covariates.is_empty() {
            return Err(EmpiricalError::EmptyInput);
        }

        // Check 2: Matching lengths
        let n = values.len();
        if internal_sigmas.len() != n || covariates.len() != n {
            return Err(EmpiricalError::MismatchedInputs {
                values_len: n,
                sigmas_len: internal_sigmas.len(),
                covariates_len: covariates.len(),
            });
        }

        // Check 3: Internal sigmas must not be finite-negative
        for (i, &s) in internal_sigmas.iter().enumerate() {
            if s.is_finite() && s < T::zero() {
                return Err(EmpiricalError::InvalidNumericValue(format!(
                    "internal_sigmas[{}]={}",
                    i,
                    s.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the kernel bandwidth.
    pub fn validate_bandwidth<T: Float>(bandwidth: T) -> Result<(), EmpiricalError> {
        if !bandwidth.is_finite() || bandwidth <= T::zero() {
            return Err(EmpiricalError::InvalidBandwidth(
                bandwidth.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set multiple times.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), EmpiricalError> {
        if let Some(param) = duplicate_param {
            return Err(EmpiricalError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
