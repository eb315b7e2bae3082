//! Error types for polynomial fitting.
//!
//! ## Purpose
//!
//! This module defines `PolyError`, the single error type returned by every
//! fallible operation in the crate: input validation, linear solves, and
//! fixed-order coefficient checks.
//!
//! ## Design notes
//!
//! * **Synchronous**: Errors are returned through `Result`, never by panicking.
//! * **Diagnosable**: Variants carry expected vs. actual sizes, or the pivot
//!   ratio that triggered a singularity report.
//! * **no_std**: `thiserror` derives against `core::error::Error`, so the type
//!   is a real error in both `std` and `no_std` builds.
//!
//! ## Key concepts
//!
//! * **Input errors**: Empty, mismatched, or non-finite observations.
//! * **Algebra errors**: Underdetermined or numerically singular systems.
//! * **Order errors**: Coefficient counts that disagree with a declared order.
//!
//! ## Non-goals
//!
//! * This module does not attempt recovery (lowering the order is the caller's call).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// ============================================================================
// PolyError
// ============================================================================

/// Errors reported by polynomial construction and fitting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolyError {
    /// A fit received zero observations.
    #[error("Input arrays are empty")]
    EmptyInput,

    /// Independent and dependent series have different lengths.
    #[error("Length mismatch: x has {x_len} points, y has {y_len}")]
    MismatchedInputs {
        /// Number of independent samples.
        x_len: usize,
        /// Number of dependent samples.
        y_len: usize,
    },

    /// A 2D observation grid does not match the shape of the x grid.
    #[error(
        "Shape mismatch: {name} grid is {}x{}, expected {}x{}",
        got.0,
        got.1,
        expected.0,
        expected.1
    )]
    MismatchedShapes {
        /// Name of the offending grid.
        name: &'static str,
        /// Shape of the x grid (rows, cols).
        expected: (usize, usize),
        /// Shape of the offending grid (rows, cols).
        got: (usize, usize),
    },

    /// The explicit observation count exceeds what the buffers hold.
    #[error("Observation count {count} exceeds available samples {available}")]
    CountExceedsInput {
        /// Requested count.
        count: usize,
        /// Shortest supplied buffer length.
        available: usize,
    },

    /// Fewer observations than unknown coefficients.
    #[error(
        "Underdetermined system: {observations} observations for {coefficients} coefficients"
    )]
    Underdetermined {
        /// Number of observations supplied.
        observations: usize,
        /// Number of coefficients to solve for.
        coefficients: usize,
    },

    /// The least-squares system is numerically singular.
    #[error(
        "Singular system: {coefficients} coefficients, smallest/largest pivot ratio {pivot_ratio:e}"
    )]
    SingularSystem {
        /// Number of coefficients in the system.
        coefficients: usize,
        /// Smallest over largest absolute pivot of the triangular factor.
        pivot_ratio: f64,
    },

    /// A coefficient sequence does not match a fixed-order polynomial.
    #[error("Fixed-order mismatch: expected {expected} coefficients, got {got}")]
    FixedOrderMismatch {
        /// Coefficient count implied by the fixed order.
        expected: usize,
        /// Coefficient count supplied.
        got: usize,
    },

    /// A coefficient buffer does not fit the declared order(s).
    ///
    /// `expected` is `usize::MAX` when the orders imply more coefficients
    /// than `usize` can count.
    #[error("Coefficient count mismatch: expected {expected}, got {got}")]
    CoefficientCount {
        /// Coefficient count implied by the declared order(s).
        expected: usize,
        /// Length of the supplied buffer.
        got: usize,
    },

    /// A flat observation buffer does not match the requested grid shape.
    #[error("Grid buffer length mismatch: {rows}x{cols} grid needs {expected} values, got {got}")]
    GridLength {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
        /// `rows * cols`, or `usize::MAX` on overflow.
        expected: usize,
        /// Length of the supplied buffer.
        got: usize,
    },

    /// A non-finite value was found in the observations.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// The rank tolerance is outside (0, 1) or not finite.
    #[error("Invalid tolerance: {0} (must be > 0, < 1 and finite)")]
    InvalidTolerance(f64),

    /// A builder parameter was configured more than once.
    #[error(
        "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
    )]
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl PolyError {
    /// Whether the error comes from the linear algebra rather than the inputs.
    pub fn is_algebraic(&self) -> bool {
        matches!(
            self,
            PolyError::Underdetermined { .. } | PolyError::SingularSystem { .. }
        )
    }
}
