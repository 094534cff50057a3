//! Weighted mean and weighted population standard deviation.
//!
//! ## Purpose
//!
//! This module provides the weighted statistics the estimator is built on:
//! the kernel-weighted mean of the observed dates and the kernel-weighted
//! population standard deviation around it.
//!
//! ## Design notes
//!
//! * **Population normalization**: the dispersion sum is divided by the sum
//!   of weights, not by an effective count minus one. This matches the
//!   reference definition and is a deliberate, tested choice.
//! * **Degenerate cases**: a zero or non-finite weight sum returns `None`;
//!   the engine decides whether that fails the batch or emits a sentinel.
//! * **NaN policy**: pairs containing a non-finite value or weight are
//!   either excluded from both sums ([`NanPolicy::Exclude`], default) or
//!   accumulated so that NaN flows to the output ([`NanPolicy::Propagate`]).
//! * **SIMD**: accumulation is dispatched through [`FloatAccum`], whose
//!   scalar defaults serve every `Float` type and whose `f64` impl
//!   overrides them with `wide::f64x2` two-lane accumulation.
//!
//! ## Invariants
//!
//! * `weighted_std` is non-negative whenever it is finite.
//! * A single accumulated pair has zero scatter around its own mean; the
//!   result is exactly 0 with no floating-point round-trip.
//! * Both statistics are invariant under a simultaneous permutation of
//!   values and weights (up to summation order).
//!
//! ## Non-goals
//!
//! * This module does not compute kernel weights (see [`crate::math::kernel`]).
//! * This module does not apply Bessel's correction or any other
//!   sample-variance normalization.

// External dependencies
use num_traits::Float;
use wide::{f64x2, CmpLt};

// ============================================================================
// NaN Policy
// ============================================================================

/// Policy for pairs whose value or weight is non-finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NanPolicy {
    /// Skip the pair in both the numerator and denominator sums.
    #[default]
    Exclude,

    /// Accumulate the pair as-is, letting NaN flow to the output.
    Propagate,
}

// ============================================================================
// Accumulation Trait
// ============================================================================

/// Float types with weighted-sum accumulation.
///
/// The provided methods are scalar loops valid for any [`Float`]; the `f64`
/// implementation overrides them with two-lane SIMD accumulation.
pub trait FloatAccum: Float {
    /// Accumulate `(Σw, Σw·v, included pair count)` over `values`/`weights`.
    fn weighted_sums(values: &[Self], weights: &[Self], policy: NanPolicy) -> (Self, Self, usize) {
        let mut s_w = Self::zero();
        let mut s_wv = Self::zero();
        let mut count = 0usize;
        for (&v, &w) in values.iter().zip(weights.iter()) {
            if policy == NanPolicy::Exclude && !(v.is_finite() && w.is_finite()) {
                continue;
            }
            s_w = s_w + w;
            s_wv = s_wv + w * v;
            count += 1;
        }
        (s_w, s_wv, count)
    }

    /// Accumulate `Σw·(v − mean)²` over `values`/`weights`.
    fn weighted_sq_dev_sum(
        values: &[Self],
        weights: &[Self],
        mean: Self,
        policy: NanPolicy,
    ) -> Self {
        let mut s = Self::zero();
        for (&v, &w) in values.iter().zip(weights.iter()) {
            if policy == NanPolicy::Exclude && !(v.is_finite() && w.is_finite()) {
                continue;
            }
            let d = v - mean;
            s = s + w * d * d;
        }
        s
    }
}

impl FloatAccum for f32 {}

impl FloatAccum for f64 {
    fn weighted_sums(values: &[f64], weights: &[f64], policy: NanPolicy) -> (f64, f64, usize) {
        let n = values.len().min(weights.len());
        let mut i = 0;

        let mut s_w = f64x2::splat(0.0);
        let mut s_wv = f64x2::splat(0.0);
        let mut s_n = f64x2::splat(0.0);

        let inf = f64x2::splat(f64::INFINITY);
        let one = f64x2::splat(1.0);
        let zero = f64x2::splat(0.0);

        while i + 2 <= n {
            let v = f64x2::new([values[i], values[i + 1]]);
            let w = f64x2::new([weights[i], weights[i + 1]]);

            let (vk, wk, k) = if policy == NanPolicy::Exclude {
                // Finite-lane mask: |x| < inf is false for NaN and infinities.
                let keep = v.abs().cmp_lt(inf) & w.abs().cmp_lt(inf);
                (keep.blend(v, zero), keep.blend(w, zero), keep.blend(one, zero))
            } else {
                (v, w, one)
            };

            s_w += wk;
            s_wv += wk * vk;
            s_n += k;

            i += 2;
        }

        let mut a_w = s_w.reduce_add();
        let mut a_wv = s_wv.reduce_add();
        let mut a_n = s_n.reduce_add() as usize;

        // Tail
        for j in i..n {
            let v = values[j];
            let w = weights[j];
            if policy == NanPolicy::Exclude && !(v.is_finite() && w.is_finite()) {
                continue;
            }
            a_w += w;
            a_wv += w * v;
            a_n += 1;
        }

        (a_w, a_wv, a_n)
    }

    fn weighted_sq_dev_sum(
        values: &[f64],
        weights: &[f64],
        mean: f64,
        policy: NanPolicy,
    ) -> f64 {
        let n = values.len().min(weights.len());
        let mut i = 0;

        let mut s = f64x2::splat(0.0);

        let m = f64x2::splat(mean);
        let inf = f64x2::splat(f64::INFINITY);
        let zero = f64x2::splat(0.0);

        while i + 2 <= n {
            let v = f64x2::new([values[i], values[i + 1]]);
            let w = f64x2::new([weights[i], weights[i + 1]]);

            let (vk, wk) = if policy == NanPolicy::Exclude {
                let keep = v.abs().cmp_lt(inf) & w.abs().cmp_lt(inf);
                // Excluded lanes contribute w·(m − m)² = 0.
                (keep.blend(v, m), keep.blend(w, zero))
            } else {
                (v, w)
            };

            let d = vk - m;
            s += wk * d * d;

            i += 2;
        }

        let mut acc = s.reduce_add();

        // Tail
        for j in i..n {
            let v = values[j];
            let w = weights[j];
            if policy == NanPolicy::Exclude && !(v.is_finite() && w.is_finite()) {
                continue;
            }
            let d = v - mean;
            acc += w * d * d;
        }

        acc
    }
}

// ============================================================================
// Weighted Statistics
// ============================================================================

/// Compute the weighted mean `Σwᵢvᵢ / Σwᵢ`.
///
/// Returns `None` when the accumulated weight sum is zero, negative, or
/// non-finite.
#[inline]
pub fn weighted_mean<T: FloatAccum>(values: &[T], weights: &[T], policy: NanPolicy) -> Option<T> {
    let (s_w, s_wv, _) = T::weighted_sums(values, weights, policy);
    if !s_w.is_finite() || s_w <= T::zero() {
        return None;
    }
    Some(s_wv / s_w)
}

/// Compute the weighted population standard deviation
/// `sqrt(Σwᵢ(vᵢ − μw)² / Σwᵢ)`.
///
/// Returns `None` when the accumulated weight sum is zero, negative, or
/// non-finite. A single accumulated pair yields exactly 0.
pub fn weighted_std<T: FloatAccum>(values: &[T], weights: &[T], policy: NanPolicy) -> Option<T> {
    let (s_w, s_wv, count) = T::weighted_sums(values, weights, policy);
    if !s_w.is_finite() || s_w <= T::zero() {
        return None;
    }

    // One accumulated pair: zero scatter around its own mean, exactly.
    if count == 1 {
        return Some(T::zero());
    }

    let mean = s_wv / s_w;
    let dev = T::weighted_sq_dev_sum(values, weights, mean, policy);
    Some((dev / s_w).sqrt())
}
