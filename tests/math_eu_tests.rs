#![cfg(feature = "dev")]
//! Tests for the effective-uranium covariate derivation.

use approx::assert_relative_eq;

use eusigma::internals::math::eu::{
    effective_uranium, fill_effective_uranium, EuCoefficients,
};

/// Test the conventional weighting: eU = U + 0.238·Th + 0.0012·Sm.
#[test]
fn test_effective_uranium_default_coefficients() {
    let coeffs = EuCoefficients::default();
    let eu = effective_uranium(28.5, 44.2, 120.0, &coeffs);
    assert_relative_eq!(eu, 28.5 + 0.238 * 44.2 + 0.0012 * 120.0, epsilon = 1e-12);
}

/// Test that zero Th and Sm leave eU equal to U.
#[test]
fn test_effective_uranium_uranium_only() {
    let coeffs = EuCoefficients::default();
    assert_eq!(effective_uranium(31.0, 0.0, 0.0, &coeffs), 31.0);
}

/// Test a swapped coefficient convention.
#[test]
fn test_effective_uranium_custom_coefficients() {
    let coeffs = EuCoefficients::new(0.235, 0.0);
    let eu = effective_uranium(10.0, 100.0, 500.0, &coeffs);
    assert_relative_eq!(eu, 10.0 + 0.235 * 100.0, epsilon = 1e-12);
}

/// Test the elementwise fill against the scalar function.
#[test]
fn test_fill_effective_uranium() {
    let u = [28.5, 10.0, 55.1];
    let th = [44.2, 80.0, 12.9];
    let sm = [120.0, 0.0, 310.0];
    let coeffs = EuCoefficients::default();

    let mut out = [0.0; 3];
    fill_effective_uranium(&u, &th, &sm, &coeffs, &mut out);

    for i in 0..3 {
        assert_eq!(out[i], effective_uranium(u[i], th[i], sm[i], &coeffs));
    }
}
