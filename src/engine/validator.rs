//! Input validation for fit configuration and observations.
//!
//! ## Purpose
//!
//! This module checks everything a fit needs before any matrix is built:
//! non-empty inputs, agreeing lengths or shapes, enough observations for the
//! requested order(s), finite values, and sane solver parameters.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; the finite
//!   scan over every sample comes last.
//! * **Generics**: Validation is generic over `Float` types and observation sources.
//!
//! ## Invariants
//!
//! * Mismatched lengths or shapes are always reported, never truncated away.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not detect singular systems (only the solve can tell).
//! * This module does not correct or filter invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyError;
use crate::primitives::source::{Grid, Series};

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for fit configuration and observations.
///
/// Provides static methods returning `Result<(), PolyError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Shape Validation
    // ========================================================================

    /// Validate that two series are non-empty and of equal length.
    pub fn validate_series<T, X, Y>(x: &X, y: &Y) -> Result<(), PolyError>
    where
        X: Series<T> + ?Sized,
        Y: Series<T> + ?Sized,
    {
        if x.is_empty() || y.is_empty() {
            return Err(PolyError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(PolyError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(())
    }

    /// Validate an explicit observation count against the buffer lengths.
    pub fn validate_count(count: usize, x_len: usize, y_len: usize) -> Result<(), PolyError> {
        if count == 0 {
            return Err(PolyError::EmptyInput);
        }
        let available = x_len.min(y_len);
        if count > available {
            return Err(PolyError::CountExceedsInput { count, available });
        }
        Ok(())
    }

    /// Validate that three grids are non-empty and share the shape of `x`.
    pub fn validate_grids<T, GX, GY, GZ>(x: &GX, y: &GY, z: &GZ) -> Result<(), PolyError>
    where
        GX: Grid<T> + ?Sized,
        GY: Grid<T> + ?Sized,
        GZ: Grid<T> + ?Sized,
    {
        let expected = x.shape();
        if x.size() == 0 {
            return Err(PolyError::EmptyInput);
        }
        if y.shape() != expected {
            return Err(PolyError::MismatchedShapes {
                name: "y",
                expected,
                got: y.shape(),
            });
        }
        if z.shape() != expected {
            return Err(PolyError::MismatchedShapes {
                name: "z",
                expected,
                got: z.shape(),
            });
        }
        Ok(())
    }

    /// Validate that the system is not underdetermined.
    pub fn validate_observations(observations: usize, coefficients: usize) -> Result<(), PolyError> {
        if observations < coefficients {
            return Err(PolyError::Underdetermined {
                observations,
                coefficients,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Value Validation
    // ========================================================================

    /// Validate that every sample of a series is finite.
    pub fn validate_finite_series<T, S>(s: &S, name: &str) -> Result<(), PolyError>
    where
        T: Float,
        S: Series<T> + ?Sized,
    {
        for i in 0..s.len() {
            let val = s.at(i);
            if !val.is_finite() {
                return Err(PolyError::InvalidNumericValue(format!(
                    "{}[{}]={}",
                    name,
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    /// Validate that every sample of a grid is finite.
    pub fn validate_finite_grid<T, G>(g: &G, name: &str) -> Result<(), PolyError>
    where
        T: Float,
        G: Grid<T> + ?Sized,
    {
        for r in 0..g.rows() {
            for c in 0..g.cols() {
                let val = g.at(r, c);
                if !val.is_finite() {
                    return Err(PolyError::InvalidNumericValue(format!(
                        "{}[{}, {}]={}",
                        name,
                        r,
                        c,
                        val.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the rank tolerance of the solver.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), PolyError> {
        if !tol.is_finite() || tol <= T::zero() || tol >= T::one() {
            return Err(PolyError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), PolyError> {
        if let Some(param) = duplicate_param {
            return Err(PolyError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
