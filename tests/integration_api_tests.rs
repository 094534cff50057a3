//! Integration tests for the public builder API.
//!
//! These tests exercise the crate exactly as a caller would: build an
//! estimator through the fluent builder, run it on parallel arrays, and
//! inspect the result or the error.

use approx::assert_relative_eq;

use eusigma::prelude::*;

// ============================================================================
// Happy Path
// ============================================================================

/// Basic workflow: low-eU pair widens, isolated high-eU grain does not.
#[test]
fn test_basic_workflow() {
    let dates = vec![100.0, 102.0, 200.0];
    let sigmas = vec![1.0, 1.0, 1.0];
    let eu = vec![0.0, 0.0, 1000.0];

    let model = EmpiricalSigma::new().bandwidth(100.0).build().unwrap();
    let result = model.estimate(&dates, &sigmas, &eu).unwrap();

    assert_eq!(result.len(), 3);
    assert!(!result.is_empty());
    assert_eq!(result.bandwidth_used, 100.0);

    assert_relative_eq!(result.empirical_sigmas[0], 2.0f64.sqrt(), epsilon = 1e-6);
    assert_relative_eq!(result.empirical_sigmas[1], 2.0f64.sqrt(), epsilon = 1e-6);
    assert_relative_eq!(result.empirical_sigmas[2], 1.0, epsilon = 1e-6);
}

/// The default bandwidth is 100 covariate units.
#[test]
fn test_default_bandwidth() {
    let model = EmpiricalSigma::<f64>::new().build().unwrap();
    assert_eq!(model.bandwidth(), 100.0);
}

/// Empirical sigmas never narrow the internal sigmas.
#[test]
fn test_widening_through_api() {
    let dates = vec![61.0, 64.5, 58.75, 90.0, 88.25];
    let sigmas = vec![1.5, 0.75, 2.0, 3.0, 1.0];
    let eu = vec![12.0, 18.0, 25.0, 160.0, 150.0];

    let model = EmpiricalSigma::new().bandwidth(50.0).build().unwrap();
    let result = model.estimate(&dates, &sigmas, &eu).unwrap();

    for i in 0..dates.len() {
        assert!(result.empirical_sigmas[i] >= sigmas[i]);
    }
}

/// A single grain keeps its analytical uncertainty exactly.
#[test]
fn test_single_grain() {
    let model = EmpiricalSigma::new().build().unwrap();
    let result = model.estimate(&[75.5], &[2.25], &[120.0]).unwrap();

    assert_eq!(result.external_sigmas[0], 0.0);
    assert_eq!(result.empirical_sigmas[0], 2.25);
}

/// f32 inputs flow through the same API.
#[test]
fn test_f32_inputs() {
    let dates: Vec<f32> = vec![100.0, 102.0];
    let sigmas: Vec<f32> = vec![1.0, 1.0];
    let eu: Vec<f32> = vec![10.0, 10.0];

    let model = EmpiricalSigma::new().bandwidth(100.0f32).build().unwrap();
    let result = model.estimate(&dates, &sigmas, &eu).unwrap();

    // population std of [100, 102] is 1, quadrature with 1 gives sqrt(2)
    assert_relative_eq!(result.empirical_sigmas[0], 2.0f32.sqrt(), epsilon = 1e-5);
}

/// Deriving eU and estimating in one flow.
#[test]
fn test_eu_derivation_flow() {
    let u = [28.5, 30.1, 155.0];
    let th = [44.2, 39.8, 310.0];
    let sm = [120.0, 95.0, 0.0];

    let coeffs = EuCoefficients::default();
    let mut eu = [0.0; 3];
    fill_effective_uranium(&u, &th, &sm, &coeffs, &mut eu);

    assert_relative_eq!(eu[0], 28.5 + 0.238 * 44.2 + 0.0012 * 120.0, epsilon = 1e-12);

    let dates = [62.0, 60.5, 41.0];
    let sigmas = [1.2, 1.1, 0.9];

    let model = EmpiricalSigma::new().bandwidth(25.0).build().unwrap();
    let result = model.estimate(&dates, &sigmas, &eu).unwrap();
    assert_eq!(result.len(), 3);
}

/// The Display output carries the summary header and the column table.
#[test]
fn test_result_display() {
    let model = EmpiricalSigma::new().build().unwrap();
    let result = model
        .estimate(&[100.0, 102.0], &[1.0, 1.0], &[10.0, 12.0])
        .unwrap();

    let rendered = format!("{}", result);
    assert!(rendered.contains("Summary:"));
    assert!(rendered.contains("Grains: 2"));
    assert!(rendered.contains("Bandwidth: 100"));
    assert!(rendered.contains("Sigma_Emp"));
}

// ============================================================================
// Rejection Paths
// ============================================================================

/// Zero, negative, and non-finite bandwidths are rejected at build time.
#[test]
fn test_invalid_bandwidth_rejected() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = EmpiricalSigma::new().bandwidth(bad).build().unwrap_err();
        assert!(matches!(err, EmpiricalError::InvalidBandwidth(_)));
    }
}

/// Mismatched array lengths are rejected before any computation.
#[test]
fn test_length_mismatch_rejected() {
    let model = EmpiricalSigma::new().build().unwrap();
    let err = model
        .estimate(&[1.0, 2.0, 3.0], &[0.5, 0.5], &[10.0, 20.0, 30.0])
        .unwrap_err();

    assert_eq!(
        err,
        EmpiricalError::MismatchedInputs {
            values_len: 3,
            sigmas_len: 2,
            covariates_len: 3,
        }
    );
}

/// Empty inputs are rejected.
#[test]
fn test_empty_input_rejected() {
    let model = EmpiricalSigma::<f64>::new().build().unwrap();
    let err = model.estimate(&[], &[], &[]).unwrap_err();
    assert_eq!(err, EmpiricalError::EmptyInput);
}

/// A finite negative internal sigma is rejected by name.
#[test]
fn test_negative_sigma_rejected() {
    let model = EmpiricalSigma::new().build().unwrap();
    let err = model
        .estimate(&[1.0, 2.0], &[0.5, -0.5], &[10.0, 20.0])
        .unwrap_err();

    match err {
        EmpiricalError::InvalidNumericValue(detail) => {
            assert!(detail.contains("internal_sigmas[1]"));
        }
        other => panic!("expected InvalidNumericValue, got {:?}", other),
    }
}

/// Setting the same parameter twice is rejected at build time.
#[test]
fn test_duplicate_parameter_rejected() {
    let err = EmpiricalSigma::new()
        .bandwidth(50.0)
        .bandwidth(100.0)
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        EmpiricalError::DuplicateParameter {
            parameter: "bandwidth",
        }
    );
}

// ============================================================================
// Policies
// ============================================================================

/// Under the default exclusion policy a NaN date is dropped from the sums
/// and every output stays finite.
#[test]
fn test_exclude_policy_default() {
    let dates = vec![100.0, f64::NAN, 102.0];
    let sigmas = vec![1.0, 1.0, 1.0];
    let eu = vec![10.0, 10.0, 10.0];

    let model = EmpiricalSigma::new().build().unwrap();
    let result = model.estimate(&dates, &sigmas, &eu).unwrap();

    assert_eq!(result.sentinel_count(), 0);
    assert_relative_eq!(result.external_sigmas[0], 1.0, epsilon = 1e-12);
}

/// Under propagation a NaN date flows to every output it touches.
#[test]
fn test_propagate_policy() {
    let dates = vec![100.0, f64::NAN, 102.0];
    let sigmas = vec![1.0, 1.0, 1.0];
    let eu = vec![10.0, 10.0, 10.0];

    let model = EmpiricalSigma::new().nan_policy(Propagate).build().unwrap();
    let result = model.estimate(&dates, &sigmas, &eu).unwrap();

    assert!(result.empirical_sigmas.iter().all(|s| s.is_nan()));
}

/// A grain with a non-finite covariate fails the batch by default and
/// emits a sentinel under the EmitNan policy.
#[test]
fn test_zero_weight_policies() {
    let dates = vec![100.0, 101.0, 102.0];
    let sigmas = vec![1.0, 1.0, 1.0];
    let eu = vec![10.0, f64::NAN, 14.0];

    let model = EmpiricalSigma::new().build().unwrap();
    let err = model.estimate(&dates, &sigmas, &eu).unwrap_err();
    assert_eq!(err, EmpiricalError::DegenerateWeights { index: 1 });

    let model = EmpiricalSigma::new().zero_weight_policy(EmitNan).build().unwrap();
    let result = model.estimate(&dates, &sigmas, &eu).unwrap();
    assert_eq!(result.sentinel_count(), 1);
    assert!(result.empirical_sigmas[1].is_nan());
    assert!(result.empirical_sigmas[0].is_finite());
}
