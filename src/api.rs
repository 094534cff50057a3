//! High-level API for empirical uncertainty estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for configuring the estimator, and the configured [`Estimator`]
//! that runs the estimation pass.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all
//!   parameters; only the deviations need to be spelled out.
//! * **Validated**: Parameters are checked when `.build()` is called, input
//!   arrays when `.estimate()` is called; both fail fast with a specific
//!   [`EmpiricalError`].
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via [`EmpiricalSigma::new`].
//! 2. Chain configuration methods (`.bandwidth()`, `.nan_policy()`, etc.).
//! 3. Call `.build()` to obtain a validated [`Estimator`].
//! 4. Call `.estimate(&values, &internal_sigmas, &covariates)`.

// External dependencies
use core::fmt::Debug;

// Internal dependencies
use crate::engine::executor::{EmpiricalExecutor, EstimatorConfig};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::executor::ZeroWeightPolicy;
pub use crate::engine::output::EmpiricalResult;
pub use crate::math::eu::{effective_uranium, fill_effective_uranium, EuCoefficients};
pub use crate::math::weighted::{FloatAccum, NanPolicy};
pub use crate::primitives::errors::EmpiricalError;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring empirical uncertainty estimation.
#[derive(Debug, Clone)]
pub struct EmpiricalSigma<T: FloatAccum + Debug + Send + Sync> {
    /// Gaussian kernel bandwidth in covariate units (default: 100).
    pub bandwidth: Option<T>,

    /// Policy for non-finite value/weight pairs (default: Exclude).
    pub nan_policy: Option<NanPolicy>,

    /// Policy for degenerate weight sums (default: Fail).
    pub zero_weight_policy: Option<ZeroWeightPolicy>,

    /// Parallel execution across grains (default: false; needs the
    /// `parallel` feature, otherwise the sequential pass runs).
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatAccum + Debug + Send + Sync> Default for EmpiricalSigma<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatAccum + Debug + Send + Sync> EmpiricalSigma<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            bandwidth: None,
            nan_policy: None,
            zero_weight_policy: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the Gaussian kernel bandwidth in covariate units.
    pub fn bandwidth(mut self, bandwidth: T) -> Self {
        if self.bandwidth.is_some() {
            self.duplicate_param = Some("bandwidth");
        }
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Set the policy for non-finite value/weight pairs.
    pub fn nan_policy(mut self, policy: NanPolicy) -> Self {
        if self.nan_policy.is_some() {
            self.duplicate_param = Some("nan_policy");
        }
        self.nan_policy = Some(policy);
        self
    }

    /// Set the policy for degenerate weight sums.
    pub fn zero_weight_policy(mut self, policy: ZeroWeightPolicy) -> Self {
        if self.zero_weight_policy.is_some() {
            self.duplicate_param = Some("zero_weight_policy");
        }
        self.zero_weight_policy = Some(policy);
        self
    }

    /// Enable parallel estimation across grains.
    pub fn parallel(mut self, enabled: bool) -> Self {
        if self.parallel.is_some() {
            self.duplicate_param = Some("parallel");
        }
        self.parallel = Some(enabled);
        self
    }

    /// Build the configured estimator, validating all parameters.
    pub fn build(self) -> Result<Estimator<T>, EmpiricalError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate bandwidth
        let bandwidth = self.bandwidth.unwrap_or_else(|| T::from(100.0).unwrap());
        Validator::validate_bandwidth(bandwidth)?;

        Ok(Estimator {
            config: EstimatorConfig {
                bandwidth,
                nan_policy: self.nan_policy.unwrap_or_default(),
                zero_weight_policy: self.zero_weight_policy.unwrap_or_default(),
                parallel: self.parallel.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// Estimator
// ============================================================================

/// Configured empirical uncertainty estimator.
#[derive(Debug, Clone)]
pub struct Estimator<T: FloatAccum + Debug + Send + Sync> {
    config: EstimatorConfig<T>,
}

impl<T: FloatAccum + Debug + Send + Sync> Estimator<T> {
    /// Estimate the empirical 1σ uncertainty of every grain.
    ///
    /// `values` are the observed dates, `internal_sigmas` the reported
    /// analytical 1σ uncertainties, `covariates` the eU concentrations.
    /// All three must have the same length N ≥ 1.
    pub fn estimate(
        &self,
        values: &[T],
        internal_sigmas: &[T],
        covariates: &[T],
    ) -> Result<EmpiricalResult<T>, EmpiricalError> {
        Validator::validate_inputs(values, internal_sigmas, covariates)?;

        let outcome =
            EmpiricalExecutor::run_with_config(values, internal_sigmas, covariates, &self.config)?;

        Ok(EmpiricalResult {
            covariates: covariates.to_vec(),
            values: values.to_vec(),
            internal_sigmas: internal_sigmas.to_vec(),
            external_sigmas: outcome.external_sigmas,
            empirical_sigmas: outcome.empirical_sigmas,
            bandwidth_used: self.config.bandwidth,
        })
    }

    /// The bandwidth this estimator was configured with.
    pub fn bandwidth(&self) -> T {
        self.config.bandwidth
    }
}
