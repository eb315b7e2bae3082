//! Least-squares polynomial solvers.
//!
//! ## Purpose
//!
//! This module turns validated observations into polynomial coefficients:
//! condition each axis, build the design matrix, solve, and re-expand the
//! solution onto the raw coordinates.
//!
//! ## Design notes
//!
//! * **Conditioning**: With `Conditioning::Normalized` each axis is mapped
//!   onto [-1, 1] before the solve. This is what keeps fits of data sampled
//!   tens of thousands of units from the origin accurate.
//! * **Re-expansion**: 2D coefficients are re-expanded column by column along
//!   x, then row by row along y; the basis is separable so the order is free.
//! * **Determinism**: Identical inputs take identical arithmetic paths, so
//!   every overload routed here yields bit-identical coefficients.
//!
//! ## Invariants
//!
//! * Callers have already validated lengths, shapes, and observation counts.
//! * Returned 1D vectors have `order + 1` entries; 2D grids
//!   `(order_x + 1) * (order_y + 1)`, row-major with row = x power.
//!
//! ## Non-goals
//!
//! * This module does not weight or regularize observations.
//! * This module does not choose the order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::trace;

// Internal dependencies
use crate::algorithms::design::{collect_series, design_1d, design_2d, flatten_grid};
use crate::math::linalg::{FloatLinalg, SolveMethod};
use crate::math::scaling::{AffineMap, Conditioning};
use crate::primitives::errors::PolyError;
use crate::primitives::source::{Grid, Series};

// ============================================================================
// Settings and Outcome
// ============================================================================

/// Numerical settings for one solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveSettings<T> {
    /// Axis conditioning.
    pub conditioning: Conditioning,
    /// Factorization strategy.
    pub method: SolveMethod,
    /// Pivot ratio at or below which the system is singular. `None` uses
    /// `n_coeffs * ε`.
    pub rank_tolerance: Option<T>,
}

impl<T> Default for SolveSettings<T> {
    fn default() -> Self {
        Self {
            conditioning: Conditioning::default(),
            method: SolveMethod::default(),
            rank_tolerance: None,
        }
    }
}

impl<T: FloatLinalg> SolveSettings<T> {
    /// Effective rank tolerance for a system with `n_coeffs` unknowns.
    pub fn tolerance_for(&self, n_coeffs: usize) -> T {
        self.rank_tolerance
            .unwrap_or_else(|| T::epsilon() * T::from(n_coeffs).unwrap_or_else(T::one))
    }
}

/// Raw-coordinate coefficients plus conditioning details of the solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Coefficients on the raw coordinates.
    pub coefficients: Vec<T>,
    /// Smallest over largest pivot of the triangular factor.
    pub pivot_ratio: T,
    /// Tolerance the pivot ratio was checked against.
    pub tolerance: T,
}

// ============================================================================
// 1D
// ============================================================================

/// Fit `sum c_i x^i` of the given order to `(x[k], y[k])`.
pub fn least_squares_1d<T, X, Y>(
    x: &X,
    y: &Y,
    order: usize,
    settings: &SolveSettings<T>,
) -> Result<Solution<T>, PolyError>
where
    T: FloatLinalg,
    X: Series<T> + ?Sized,
    Y: Series<T> + ?Sized,
{
    let n = x.len();
    let n_coeffs = order + 1;

    let map = AffineMap::from_series(x, settings.conditioning);
    trace!(
        "1D conditioning: center={:?} scale={:?}",
        map.center, map.scale
    );

    let design = design_1d(x, order, &map);
    let rhs = collect_series(y);
    let tolerance = settings.tolerance_for(n_coeffs);
    let solved =
        T::solve_least_squares(&design, n, n_coeffs, &rhs, settings.method, tolerance)?;
    trace!("1D solve: pivot_ratio={:?}", solved.pivot_ratio);

    Ok(Solution {
        coefficients: map.expand(&solved.coefficients),
        pivot_ratio: solved.pivot_ratio,
        tolerance,
    })
}

// ============================================================================
// 2D
// ============================================================================

/// Fit `sum c_ij x^i y^j` to the co-shaped grids `x`, `y`, `z`.
pub fn least_squares_2d<T, GX, GY, GZ>(
    x: &GX,
    y: &GY,
    z: &GZ,
    order_x: usize,
    order_y: usize,
    settings: &SolveSettings<T>,
) -> Result<Solution<T>, PolyError>
where
    T: FloatLinalg,
    GX: Grid<T> + ?Sized,
    GY: Grid<T> + ?Sized,
    GZ: Grid<T> + ?Sized,
{
    let n = x.size();
    let (wx, wy) = (order_x + 1, order_y + 1);
    let n_coeffs = wx * wy;

    let map_x = AffineMap::from_grid(x, settings.conditioning);
    let map_y = AffineMap::from_grid(y, settings.conditioning);
    trace!(
        "2D conditioning: x center={:?} scale={:?}, y center={:?} scale={:?}",
        map_x.center, map_x.scale, map_y.center, map_y.scale
    );

    let design = design_2d(x, y, order_x, order_y, &map_x, &map_y);
    let rhs = flatten_grid(z);
    let tolerance = settings.tolerance_for(n_coeffs);
    let solved =
        T::solve_least_squares(&design, n, n_coeffs, &rhs, settings.method, tolerance)?;
    trace!("2D solve: pivot_ratio={:?}", solved.pivot_ratio);

    let mut grid = solved.coefficients;

    // Columns (fixed y power) along x.
    if !map_x.is_identity() {
        let mut column = Vec::with_capacity(wx);
        for j in 0..wy {
            column.clear();
            column.extend((0..wx).map(|i| grid[i * wy + j]));
            for (i, v) in map_x.expand(&column).into_iter().enumerate() {
                grid[i * wy + j] = v;
            }
        }
    }

    // Rows (fixed x power) along y.
    if !map_y.is_identity() {
        for i in 0..wx {
            let row = map_y.expand(&grid[i * wy..(i + 1) * wy]);
            grid[i * wy..(i + 1) * wy].copy_from_slice(&row);
        }
    }

    Ok(Solution {
        coefficients: grid,
        pivot_ratio: solved.pivot_ratio,
        tolerance,
    })
}
