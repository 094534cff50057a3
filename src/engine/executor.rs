//! The per-grain empirical uncertainty estimation loop.
//!
//! ## Purpose
//!
//! This module runs the core estimation pass: for every grain, weight the
//! entire dataset by Gaussian covariate distance, take the weighted
//! population standard deviation of the observed dates as the external
//! scatter, and combine it in quadrature with the grain's internal sigma.
//!
//! ## Design notes
//!
//! * **Self-weight included**: the grain being estimated always carries the
//!   maximum weight (distance zero) in its own scatter estimate. This
//!   regularizes the estimate where covariate neighbors are sparse and
//!   must be preserved.
//! * **Whole-dataset dispersion**: every grain sees every other grain; the
//!   smooth Gaussian decay replaces any hard neighborhood cutoff.
//! * **Buffer reuse**: the sequential pass reuses one weight buffer; the
//!   parallel pass keeps one scratch buffer per rayon worker.
//!
//! ## Key concepts
//!
//! * **External sigma**: kernel-weighted scatter of dates around the local
//!   covariate neighborhood.
//! * **Quadrature widening**: `empirical = sqrt(external² + internal²)`,
//!   never below the internal sigma.
//! * **Zero-weight policy**: a degenerate weight sum either fails the batch
//!   or emits a NaN sentinel for that grain.
//!
//! ## Invariants
//!
//! * Each grain's estimate is independent; the pass is O(N²) time and O(N)
//!   scratch space, with no cross-grain ordering dependency.
//! * The input slices are read-only for the duration of the pass.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (see the validator).
//! * This module does not select or fit the bandwidth.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::math::kernel::fill_gaussian_weights;
use crate::math::quadrature::quadrature;
use crate::math::weighted::{weighted_std, FloatAccum, NanPolicy};
use crate::primitives::errors::EmpiricalError;

// ============================================================================
// Policies and Configuration
// ============================================================================

/// Behavior when a grain's kernel weight sum is zero or non-finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroWeightPolicy {
    /// Abort the whole batch with [`EmpiricalError::DegenerateWeights`].
    #[default]
    Fail,

    /// Emit NaN for the affected grain and continue.
    EmitNan,
}

/// Configuration for one estimation pass.
#[derive(Debug, Clone)]
pub struct EstimatorConfig<T> {
    /// Gaussian kernel bandwidth in covariate units.
    pub bandwidth: T,

    /// Policy for non-finite value/weight pairs.
    pub nan_policy: NanPolicy,

    /// Policy for degenerate weight sums.
    pub zero_weight_policy: ZeroWeightPolicy,

    /// Run the pass across rayon workers (requires the `parallel` feature).
    pub parallel: bool,
}

/// Raw output of an estimation pass.
#[derive(Debug, Clone)]
pub struct ExecutorOutcome<T> {
    /// Kernel-weighted external scatter per grain.
    pub external_sigmas: Vec<T>,

    /// Quadrature-combined empirical sigma per grain.
    pub empirical_sigmas: Vec<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Execution engine for the empirical uncertainty pass.
pub struct EmpiricalExecutor;

impl EmpiricalExecutor {
    /// Run one estimation pass over validated inputs.
    pub fn run_with_config<T: FloatAccum + Send + Sync>(
        values: &[T],
        internal_sigmas: &[T],
        covariates: &[T],
        config: &EstimatorConfig<T>,
    ) -> Result<ExecutorOutcome<T>, EmpiricalError> {
        #[cfg(feature = "parallel")]
        if config.parallel {
            return Self::run_parallel(values, internal_sigmas, covariates, config);
        }

        let n = values.len();
        let mut weights = vec![T::zero(); n];
        let mut external_sigmas = Vec::with_capacity(n);
        let mut empirical_sigmas = Vec::with_capacity(n);

        for i in 0..n {
            let (external, empirical) =
                estimate_at(i, values, internal_sigmas, covariates, config, &mut weights)?;
            external_sigmas.push(external);
            empirical_sigmas.push(empirical);
        }

        Ok(ExecutorOutcome {
            external_sigmas,
            empirical_sigmas,
        })
    }

    /// Run the pass across rayon workers, one scratch buffer per worker.
    #[cfg(feature = "parallel")]
    fn run_parallel<T: FloatAccum + Send + Sync>(
        values: &[T],
        internal_sigmas: &[T],
        covariates: &[T],
        config: &EstimatorConfig<T>,
    ) -> Result<ExecutorOutcome<T>, EmpiricalError> {
        let n = values.len();

        let pairs: Vec<(T, T)> = (0..n)
            .into_par_iter()
            .map_init(
                || vec![T::zero(); n],
                |weights, i| estimate_at(i, values, internal_sigmas, covariates, config, weights),
            )
            .collect::<Result<Vec<_>, _>>()?;

        let mut external_sigmas = Vec::with_capacity(n);
        let mut empirical_sigmas = Vec::with_capacity(n);
        for (external, empirical) in pairs {
            external_sigmas.push(external);
            empirical_sigmas.push(empirical);
        }

        Ok(ExecutorOutcome {
            external_sigmas,
            empirical_sigmas,
        })
    }
}

// ============================================================================
// Per-Grain Estimation
// ============================================================================

/// Estimate one grain: returns `(external_sigma, empirical_sigma)`.
fn estimate_at<T: FloatAccum>(
    i: usize,
    values: &[T],
    internal_sigmas: &[T],
    covariates: &[T],
    config: &EstimatorConfig<T>,
    weights: &mut [T],
) -> Result<(T, T), EmpiricalError> {
    fill_gaussian_weights(covariates, covariates[i], config.bandwidth, weights);

    let sigma_internal = internal_sigmas[i];
    match weighted_std(values, weights, config.nan_policy) {
        Some(sigma_external) => {
            // Rounding in the quadrature can land an ulp under sigma_internal;
            // the widening guarantee is exact. The comparison leaves NaN
            // untouched for the propagation policy.
            let combined = quadrature(sigma_external, sigma_internal);
            let empirical = if combined < sigma_internal {
                sigma_internal
            } else {
                combined
            };
            Ok((sigma_external, empirical))
        }
        None => match config.zero_weight_policy {
            ZeroWeightPolicy::Fail => Err(EmpiricalError::DegenerateWeights { index: i }),
            ZeroWeightPolicy::EmitNan => Ok((T::nan(), T::nan())),
        },
    }
}
