//! Effective-uranium (eU) covariate derivation.
//!
//! ## Purpose
//!
//! This module derives the effective-uranium concentration used as the
//! kernel covariate from measured parent-nuclide concentrations:
//!
//! ```text
//! eU = U + 0.238·Th + 0.0012·Sm
//! ```
//!
//! ## Design notes
//!
//! * **Pre-processing only**: this is pure arithmetic applied before
//!   estimation; the estimator itself accepts any already-computed real
//!   covariate.
//! * **Swappable coefficients**: the Th and Sm coefficients are domain
//!   convention, carried in [`EuCoefficients`] so alternative conventions
//!   can be substituted without touching the estimator.
//!
//! ## Non-goals
//!
//! * This module does not validate concentrations; units and sign
//!   conventions are the caller's concern.

// External dependencies
use num_traits::Float;

// ============================================================================
// Coefficients
// ============================================================================

/// Coefficients weighting Th and Sm contributions to effective uranium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuCoefficients<T> {
    /// Thorium coefficient (default 0.238).
    pub th: T,

    /// Samarium coefficient (default 0.0012).
    pub sm: T,
}

impl<T: Float> EuCoefficients<T> {
    /// Create coefficients with explicit Th and Sm weights.
    pub fn new(th: T, sm: T) -> Self {
        Self { th, sm }
    }
}

impl<T: Float> Default for EuCoefficients<T> {
    fn default() -> Self {
        Self {
            th: T::from(0.238).unwrap(),
            sm: T::from(0.0012).unwrap(),
        }
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// Derive effective uranium from U, Th, and Sm concentrations.
#[inline]
pub fn effective_uranium<T: Float>(u: T, th: T, sm: T, coeffs: &EuCoefficients<T>) -> T {
    u + coeffs.th * th + coeffs.sm * sm
}

/// Fill `out` with the effective uranium of each grain.
///
/// All four slices must have the same length.
pub fn fill_effective_uranium<T: Float>(
    u: &[T],
    th: &[T],
    sm: &[T],
    coeffs: &EuCoefficients<T>,
    out: &mut [T],
) {
    debug_assert_eq!(u.len(), th.len());
    debug_assert_eq!(u.len(), sm.len());
    debug_assert_eq!(u.len(), out.len());

    for i in 0..u.len() {
        out[i] = effective_uranium(u[i], th[i], sm[i], coeffs);
    }
}
