//! Gaussian kernel weights for covariate-distance weighting.
//!
//! ## Purpose
//!
//! This module provides the Gaussian weight function used to grade how
//! strongly each grain contributes to another grain's local scatter
//! estimate, as a function of their distance in covariate (eU) space.
//!
//! ## Design notes
//!
//! * **Unnormalized**: the Gaussian density constant `1 / (σ√2π)` is
//!   dropped. The weights are only ever consumed as relative weights
//!   inside a weighted mean or standard deviation, where any fixed
//!   constant cancels exactly.
//! * **Buffer reuse**: the elementwise form writes into a caller-owned
//!   slice so the estimation loop can reuse one allocation per pass.
//!
//! ## Invariants
//!
//! * For finite inputs and `bandwidth > 0`, weights lie in (0, 1] and the
//!   weight at zero distance is exactly 1 (the maximum).
//! * A non-finite `x` or `center` produces a non-finite weight; callers
//!   handle those through their NaN policy.
//!
//! ## Non-goals
//!
//! * This module does not validate the bandwidth (see the engine
//!   validator); it only `debug_assert!`s the precondition.
//! * This module does not provide compact-support kernels; the smooth
//!   Gaussian decay replaces any hard distance cutoff.

// External dependencies
use num_traits::Float;

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Compute the unnormalized Gaussian weight of `x` against `center`.
///
/// # Formula
///
/// ```text
/// w = exp(-(x - center)^2 / (2 * bandwidth^2))
/// ```
#[inline]
pub fn gaussian<T: Float>(x: T, center: T, bandwidth: T) -> T {
    debug_assert!(bandwidth > T::zero(), "bandwidth must be positive");
    let z = (x - center) / bandwidth;
    (-(z * z) / T::from(2.0).unwrap()).exp()
}

/// Fill `weights` with Gaussian weights of each covariate against `center`.
///
/// `weights` must have the same length as `covariates`.
#[inline]
pub fn fill_gaussian_weights<T: Float>(
    covariates: &[T],
    center: T,
    bandwidth: T,
    weights: &mut [T],
) {
    debug_assert_eq!(covariates.len(), weights.len());
    for (w, &x) in weights.iter_mut().zip(covariates.iter()) {
        *w = gaussian(x, center, bandwidth);
    }
}
