//! # eusigma — Empirical uncertainty for single-grain radiometric ages
//!
//! A kernel-weighted empirical uncertainty estimator for single-grain
//! radiometric dates (e.g. apatite (U–Th)/He ages), generic over float
//! precision and usable in `no_std` environments.
//!
//! ## What is an empirical uncertainty?
//!
//! Single-grain dates routinely scatter more than their reported analytical
//! (internal) 1σ uncertainties predict. Much of that excess scatter is
//! systematic in effective uranium (eU): grains with similar eU share a
//! similar radiation-damage history and should share a similar date. This
//! crate quantifies the excess as an *external* scatter — the Gaussian
//! kernel-weighted population standard deviation of the observed dates,
//! weighted by eU proximity — and widens each grain's uncertainty by
//! combining it with the internal term in quadrature:
//!
//! ```text
//! w_ij     = exp(-(eU_j - eU_i)^2 / (2 * bandwidth^2))
//! sigma_ext(i) = weighted_std(dates, w_i·)
//! sigma_emp(i) = sqrt(sigma_ext(i)^2 + sigma_int(i)^2)
//! ```
//!
//! **Key properties:**
//! - Widening-only: `sigma_emp >= sigma_int` for every grain
//! - Each grain contributes to its own neighborhood (self-weight included),
//!   which regularizes the estimate where eU neighbors are sparse
//! - Smooth Gaussian decay instead of a hard neighborhood cutoff
//! - Deterministic, single pass, O(N²) in the number of grains
//!
//! ## Quick Start
//!
//! ```rust
//! use eusigma::prelude::*;
//!
//! let dates: Vec<f64> = vec![100.0, 102.0, 200.0];
//! let sigmas: Vec<f64> = vec![1.0, 1.0, 1.0];
//! let eu: Vec<f64> = vec![10.0, 12.0, 1000.0];
//!
//! // Build the estimator
//! let model = EmpiricalSigma::new()
//!     .bandwidth(100.0)   // Kernel spread in eU units
//!     .build()?;
//!
//! // Estimate empirical uncertainties
//! let result = model.estimate(&dates, &sigmas, &eu)?;
//!
//! // The low-eU pair widens toward its mutual scatter; the isolated
//! // high-eU grain keeps its analytical uncertainty.
//! assert!(result.empirical_sigmas[0] > sigmas[0]);
//! assert!((result.empirical_sigmas[2] - 1.0).abs() < 1e-6);
//! # Result::<(), EmpiricalError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `estimate` returns a `Result<EmpiricalResult<T>, EmpiricalError>`.
//!
//! - **`Ok(EmpiricalResult<T>)`**: input columns paired with the derived
//!   `external_sigmas` and `empirical_sigmas`, plus `bandwidth_used`.
//! - **`Err(EmpiricalError)`**: a precondition violation (invalid
//!   bandwidth, mismatched lengths, negative internal sigma) or a
//!   degenerate weight sum. No partial output is produced on error.
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use eusigma::prelude::*;
//! # let dates = vec![100.0, 102.0];
//! # let sigmas = vec![1.0, 1.0];
//! # let eu = vec![10.0, 12.0];
//!
//! let model = EmpiricalSigma::new().build()?;
//!
//! match model.estimate(&dates, &sigmas, &eu) {
//!     Ok(result) => println!("{}", result),
//!     Err(e) => eprintln!("Estimation failed: {}", e),
//! }
//! # Result::<(), EmpiricalError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! All builder parameters have defaults; only deviations need to be set.
//!
//! | Parameter              | Default   | Range/Options          | Description                                   |
//! |------------------------|-----------|------------------------|-----------------------------------------------|
//! | **bandwidth**          | 100.0     | (0, ∞), finite         | Gaussian kernel spread in covariate (eU) units |
//! | **nan_policy**         | `Exclude` | `Exclude`, `Propagate` | Handling of non-finite value/weight pairs     |
//! | **zero_weight_policy** | `Fail`    | `Fail`, `EmitNan`      | Handling of degenerate weight sums            |
//! | **parallel**           | false     | true/false             | Parallel estimation (`parallel` feature)      |
//!
//! ### Bandwidth
//!
//! The bandwidth is the characteristic eU distance over which grains are
//! assumed to share a common underlying date. It is a fixed external
//! parameter: this crate does not fit or select it.
//!
//! - **Large bandwidth**: weights flatten toward uniform; the external term
//!   approaches the whole-population standard deviation.
//! - **Small bandwidth**: weight concentrates on exact eU matches; with
//!   distinct covariates only the self-weight survives and
//!   `sigma_emp -> sigma_int`.
//!
//! ### NaN Policy
//!
//! Real datasets carry gaps. Non-finite dates or covariates are tolerated
//! rather than rejected:
//!
//! - `Exclude` (default): a pair whose value or weight is non-finite leaves
//!   both the numerator and denominator sums.
//! - `Propagate`: pairs are accumulated as-is and NaN flows to the affected
//!   output entry.
//!
//! ### Zero-Weight Policy
//!
//! A zero or non-finite weight sum is theoretically unreachable for finite
//! covariates and a valid bandwidth (the self-weight is strictly positive)
//! but is guarded defensively:
//!
//! - `Fail` (default): abort the batch with
//!   [`EmpiricalError::DegenerateWeights`](prelude::EmpiricalError).
//! - `EmitNan`: emit a NaN sentinel for the affected grain and continue.
//!
//! ```rust
//! use eusigma::prelude::*;
//!
//! // The second grain has no usable covariate; emit a sentinel for it
//! // instead of failing the batch.
//! let dates = vec![100.0, 101.0, 102.0];
//! let sigmas = vec![1.0, 1.0, 1.0];
//! let eu = vec![10.0, f64::NAN, 14.0];
//!
//! let model = EmpiricalSigma::new()
//!     .zero_weight_policy(EmitNan)
//!     .build()?;
//!
//! let result = model.estimate(&dates, &sigmas, &eu)?;
//! assert_eq!(result.sentinel_count(), 1);
//! assert!(result.empirical_sigmas[1].is_nan());
//! # Result::<(), EmpiricalError>::Ok(())
//! ```
//!
//! ## Deriving the covariate
//!
//! When eU is not already tabulated, derive it from parent-nuclide
//! concentrations with the conventional weighting
//! `eU = U + 0.238·Th + 0.0012·Sm` (coefficients swappable):
//!
//! ```rust
//! use eusigma::prelude::*;
//!
//! let coeffs = EuCoefficients::<f64>::default();
//! let eu = effective_uranium(28.5, 44.2, 120.0, &coeffs);
//! assert!((eu - (28.5 + 0.238 * 44.2 + 0.0012 * 120.0)).abs() < 1e-12);
//! # Result::<(), EmpiricalError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! eusigma = { version = "0.2", default-features = false }
//! ```
//!
//! Use `f32` inputs to halve the memory footprint on constrained targets.
//!
//! ## Performance
//!
//! The pass is O(N²) time and O(N) scratch space. The `f64` accumulators
//! use two-lane SIMD. For large N, enable the `parallel` feature and set
//! `.parallel(true)` to spread grains across rayon workers; results are
//! identical to the sequential pass. Services exposing this computation
//! should bound N, since cost is quadratic.
//!
//! ## References
//!
//! - Flowers, R. M., Ketcham, R. A., Shuster, D. L. & Farley, K. A. (2009).
//!   "Apatite (U–Th)/He thermochronometry using a radiation damage
//!   accumulation and annealing model"
//! - Shuster, D. L., Flowers, R. M. & Farley, K. A. (2006). "The influence
//!   of natural radiation damage on helium diffusion kinetics in apatite"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the Gaussian kernel, the weighted mean and weighted population
// standard deviation, the quadrature combination, and the effective-uranium
// covariate derivation.
mod math;

// Layer 3: Engine - orchestration and execution control.
//
// Contains input validation, the per-grain estimation loop, and the
// result container.
mod engine;

// High-level fluent API for empirical uncertainty estimation.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use eusigma::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        effective_uranium, fill_effective_uranium, EmpiricalError, EmpiricalResult,
        EmpiricalSigma, Estimator, EuCoefficients, FloatAccum,
        NanPolicy::{Exclude, Propagate},
        ZeroWeightPolicy::{EmitNan, Fail},
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
