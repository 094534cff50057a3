//! Output types for empirical uncertainty estimation.
//!
//! ## Purpose
//!
//! This module defines [`EmpiricalResult`], the container returned by an
//! estimation run: the input columns paired with the derived external and
//! empirical sigmas, plus the bandwidth that produced them.
//!
//! ## Design notes
//!
//! * Results are generic over `Float` types to support f32 and f64.
//! * Implements `Display` for a human-readable summary table with row
//!   elision for large datasets.
//! * All vectors have the same length (number of grains).
//!
//! ## Invariants
//!
//! * `empirical_sigmas[i] >= internal_sigmas[i]` for every finite entry.
//! * Output order matches input order.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization; pairing the columns back
//!   with caller-side records (CSV, tables, plots) is the caller's concern.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Result Structure
// ============================================================================

/// Result of an empirical uncertainty estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalResult<T> {
    /// Covariate (eU) values, in input order.
    pub covariates: Vec<T>,

    /// Observed dates, in input order.
    pub values: Vec<T>,

    /// Reported internal (analytical) 1σ uncertainties.
    pub internal_sigmas: Vec<T>,

    /// Kernel-weighted external scatter per grain.
    pub external_sigmas: Vec<T>,

    /// Empirical 1σ uncertainties (quadrature of external and internal).
    pub empirical_sigmas: Vec<T>,

    /// Bandwidth used for the kernel weights.
    pub bandwidth_used: T,
}

impl<T: Float> EmpiricalResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of grains in the result.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the result is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of grains whose empirical sigma is a NaN sentinel.
    ///
    /// Nonzero only under the `EmitNan` zero-weight policy or with
    /// non-finite inputs under NaN propagation.
    pub fn sentinel_count(&self) -> usize {
        self.empirical_sigmas
            .iter()
            .filter(|s| !s.is_finite())
            .count()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + core::fmt::Display> core::fmt::Display for EmpiricalResult<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Grains: {}", self.len())?;
        writeln!(f, "  Bandwidth: {}", self.bandwidth_used)?;

        let sentinels = self.sentinel_count();
        if sentinels > 0 {
            writeln!(f, "  Sentinels: {}", sentinels)?;
        }
        writeln!(f)?;

        writeln!(f, "Empirical Uncertainties:")?;
        writeln!(
            f,
            "{:>10} {:>12} {:>12} {:>12} {:>12}",
            "eU", "Date", "Sigma_Int", "Sigma_Ext", "Sigma_Emp"
        )?;
        writeln!(f, "{:-<width$}", "", width = 62)?;

        // Show first 10 and last 10 rows if more than 20 grains
        let n = self.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>10}", "...")?;
            }
            prev_idx = idx;

            writeln!(
                f,
                "{:>10.2} {:>12.4} {:>12.4} {:>12.4} {:>12.4}",
                self.covariates[idx],
                self.values[idx],
                self.internal_sigmas[idx],
                self.external_sigmas[idx],
                self.empirical_sigmas[idx]
            )?;
        }

        Ok(())
    }
}
