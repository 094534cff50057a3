//! Quadrature combination of independent uncertainty terms.
//!
//! ## Purpose
//!
//! This module combines two independent 1σ error terms into a single
//! uncertainty: `sqrt(a² + b²)`. For uncorrelated error sources this is
//! exact, not an approximation.
//!
//! ## Invariants
//!
//! * `quadrature(a, b) >= max(|a|, |b|)`: combining never narrows either
//!   term.
//! * When either term is zero the other is returned without a
//!   square-round-trip, so equality with the surviving term is exact.

// External dependencies
use num_traits::Float;

// ============================================================================
// Quadrature Sum
// ============================================================================

/// Combine two independent 1σ uncertainty terms in quadrature.
#[inline]
pub fn quadrature<T: Float>(a: T, b: T) -> T {
    if a == T::zero() {
        return b.abs();
    }
    if b == T::zero() {
        return a.abs();
    }
    (a * a + b * b).sqrt()
}
