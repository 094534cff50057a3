//! Error types for empirical uncertainty estimation.
//!
//! ## Purpose
//!
//! This module defines [`EmpiricalError`], the single error type surfaced by
//! every fallible operation in the crate: builder configuration, input
//! validation, and the estimation pass itself.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Parameter and input errors abort before any output is
//!   produced; there is no partial-result error path.
//! * **no_std**: `Display` is implemented via `core::fmt`;
//!   `std::error::Error` is provided under the `std` feature.
//!
//! ## Key concepts
//!
//! * **Precondition violations** (`InvalidBandwidth`, `MismatchedInputs`,
//!   `EmptyInput`, `InvalidNumericValue`, `DuplicateParameter`) indicate a
//!   caller bug and are never produced mid-computation.
//! * **`DegenerateWeights`** is a computation error for a specific grain
//!   whose kernel weight sum is zero or non-finite.
//!
//! ## Non-goals
//!
//! * This module does not perform validation (see the engine validator).
//! * This module does not implement retry semantics; the computation is
//!   deterministic and a retry would reproduce the same error.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors that can occur during empirical uncertainty estimation.
#[derive(Debug, Clone, PartialEq)]
pub enum EmpiricalError {
    /// Input arrays are empty.
    EmptyInput,

    /// Input arrays have differing lengths.
    MismatchedInputs {
        /// Length of the observed values array.
        values_len: usize,
        /// Length of the internal sigmas array.
        sigmas_len: usize,
        /// Length of the covariates array.
        covariates_len: usize,
    },

    /// Kernel bandwidth is non-positive or non-finite.
    InvalidBandwidth(f64),

    /// An input value violates a numeric precondition (e.g. a negative
    /// internal sigma).
    InvalidNumericValue(String),

    /// The kernel weight sum for one grain is zero or non-finite.
    DegenerateWeights {
        /// Index of the grain whose weight sum degenerated.
        index: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for EmpiricalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs {
                values_len,
                sigmas_len,
                covariates_len,
            } => write!(
                f,
                "Length mismatch: values has {} points, internal_sigmas has {}, covariates has {}",
                values_len, sigmas_len, covariates_len
            ),
            Self::InvalidBandwidth(b) => {
                write!(f, "Invalid bandwidth: {} (must be > 0 and finite)", b)
            }
            Self::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            Self::DegenerateWeights { index } => write!(
                f,
                "Degenerate weights: weight sum at index {} is zero or non-finite",
                index
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmpiricalError {}
