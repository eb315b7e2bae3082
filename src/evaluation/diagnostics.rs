//! Goodness-of-fit diagnostics for fitted polynomials.
//!
//! ## Purpose
//!
//! This module evaluates a polynomial at its own observations and summarizes
//! the residuals: sum of squares, mean square, RMSE, worst absolute residual,
//! and R².
//!
//! ## Design notes
//!
//! * Residuals are `observed - fitted`, in observation order (row-major for
//!   grids).
//! * Evaluation uses the polynomial's own `eval`, so diagnostics reflect
//!   exactly what callers will see.
//!
//! ## Key concepts
//!
//! * **R²**: `1 - SSE / SST`. A constant response that is fitted exactly has
//!   R² = 1; a constant response with any residual has R² = 0.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display};
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::poly::{Polynomial, TwoD};
use crate::primitives::errors::PolyError;
use crate::primitives::source::{Grid, Series};

// ============================================================================
// FitDiagnostics
// ============================================================================

/// Residual statistics of a fit against its observations.
#[derive(Debug, Clone, PartialEq)]
pub struct FitDiagnostics<T> {
    /// `observed - fitted` per observation.
    pub residuals: Vec<T>,

    /// Sum of squared residuals.
    pub sse: T,

    /// Mean squared residual.
    pub mse: T,

    /// Root mean squared residual.
    pub rmse: T,

    /// Largest absolute residual.
    pub max_abs_residual: T,

    /// Coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> FitDiagnostics<T> {
    /// Diagnostics of a one-dimensional polynomial over `(x, y)`.
    pub fn from_1d<P, X, Y>(poly: &P, x: &X, y: &Y) -> Result<Self, PolyError>
    where
        P: Polynomial<T> + ?Sized,
        X: Series<T> + ?Sized,
        Y: Series<T> + ?Sized,
    {
        Validator::validate_series(x, y)?;

        let residuals: Vec<T> = (0..x.len()).map(|k| y.at(k) - poly.eval(x.at(k))).collect();
        let observed: Vec<T> = (0..y.len()).map(|k| y.at(k)).collect();
        Ok(Self::summarize(residuals, &observed))
    }

    /// Diagnostics of a two-dimensional polynomial over co-shaped grids.
    pub fn from_2d<GX, GY, GZ>(poly: &TwoD<T>, x: &GX, y: &GY, z: &GZ) -> Result<Self, PolyError>
    where
        GX: Grid<T> + ?Sized,
        GY: Grid<T> + ?Sized,
        GZ: Grid<T> + ?Sized,
    {
        Validator::validate_grids(x, y, z)?;

        let (rows, cols) = x.shape();
        let mut residuals = Vec::with_capacity(rows * cols);
        let mut observed = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let zv = z.at(r, c);
                residuals.push(zv - poly.eval(x.at(r, c), y.at(r, c)));
                observed.push(zv);
            }
        }
        Ok(Self::summarize(residuals, &observed))
    }

    fn summarize(residuals: Vec<T>, observed: &[T]) -> Self {
        let n = T::from(observed.len()).unwrap_or_else(T::one);

        let sse = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
        let max_abs_residual = residuals
            .iter()
            .fold(T::zero(), |acc, &r| acc.max(r.abs()));
        let mse = sse / n;

        let mean = observed.iter().fold(T::zero(), |acc, &v| acc + v) / n;
        let sst = observed
            .iter()
            .fold(T::zero(), |acc, &v| acc + (v - mean) * (v - mean));

        let r_squared = if sst > T::zero() {
            T::one() - sse / sst
        } else if sse == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        Self {
            residuals,
            sse,
            mse,
            rmse: mse.sqrt(),
            max_abs_residual,
            r_squared,
        }
    }

    /// Number of observations summarized.
    pub fn len(&self) -> usize {
        self.residuals.len()
    }

    /// Whether no observations were summarized.
    pub fn is_empty(&self) -> bool {
        self.residuals.is_empty()
    }
}

impl<T: Float + Display> Display for FitDiagnostics<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Fit Diagnostics:")?;
        writeln!(f, "  Observations:  {}", self.residuals.len())?;
        writeln!(f, "  SSE:           {:.6}", self.sse)?;
        writeln!(f, "  MSE:           {:.6}", self.mse)?;
        writeln!(f, "  RMSE:          {:.6}", self.rmse)?;
        writeln!(f, "  Max |resid|:   {:.6}", self.max_abs_residual)?;
        write!(f, "  R^2:           {:.6}", self.r_squared)
    }
}
