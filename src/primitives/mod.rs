//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundational types shared by every other layer:
//! - The crate-wide error type
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for empirical uncertainty estimation.
pub mod errors;
