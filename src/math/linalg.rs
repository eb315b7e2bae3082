//! Linear algebra backend abstraction for least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the dense solves the
//! fitting engine needs, standardizing on the nalgebra backend.
//!
//! ## Design notes
//!
//! * Uses QR decomposition (Householder reflections) instead of Cholesky or
//!   explicit inversion for better numerical stability with ill-conditioned systems.
//! * Every solve is rank checked on the diagonal of the triangular factor.
//!   There is no SVD or pseudo-inverse fallback: a rank-deficient system is an
//!   error, not a minimum-norm answer.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to nalgebra.
//!
//! ## Key concepts
//!
//! * **Normal equations**: `AᵀA c = Aᵀy`, solved by QR of the square normal matrix.
//! * **Householder**: QR of the design matrix itself, `R c = Qᵀy`.
//! * **Pivot ratio**: `min |R_ii| / max |R_ii|`, a cheap rank indicator.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::fmt::{Debug, Display};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyError;

// ============================================================================
// Solve Method
// ============================================================================

/// Strategy used to solve the least-squares system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveMethod {
    /// Form `AᵀA c = Aᵀy` and solve it with a QR factorization (default).
    ///
    /// Squaring the design matrix squares its condition number. Exact
    /// interpolation on equispaced points loses several digits past order
    /// 15 or so and is reported singular near order 18; use `Householder`
    /// there.
    #[default]
    NormalEquations,

    /// Factor the design matrix directly, `A = QR`, and solve `R c = Qᵀy`.
    ///
    /// Keeps full precision for high orders at the cost of factoring the
    /// tall matrix.
    Householder,
}

/// Coefficients of a successful solve plus the conditioning indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquares<T> {
    /// Solution vector.
    pub coefficients: Vec<T>,
    /// Smallest over largest absolute pivot of the triangular factor.
    pub pivot_ratio: T,
}

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg:
    Float
    + AbsDiffEq<Epsilon = Self>
    + RelativeEq
    + UlpsEq
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Solve `design * c ≈ rhs` in the least-squares sense.
    ///
    /// `design` is column-major with `rows` rows and `cols` columns. Fails with
    /// `SingularSystem` when the pivot ratio is not above `rank_tolerance`.
    fn solve_least_squares(
        design: &[Self],
        rows: usize,
        cols: usize,
        rhs: &[Self],
        method: SolveMethod,
        rank_tolerance: Self,
    ) -> Result<LeastSquares<Self>, PolyError>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_least_squares(
        design: &[Self],
        rows: usize,
        cols: usize,
        rhs: &[Self],
        method: SolveMethod,
        rank_tolerance: Self,
    ) -> Result<LeastSquares<Self>, PolyError> {
        match nalgebra_backend::solve_least_squares(design, rows, cols, rhs, method, rank_tolerance)
        {
            nalgebra_backend::Outcome::Solved {
                coefficients,
                pivot_ratio,
            } => Ok(LeastSquares {
                coefficients,
                pivot_ratio,
            }),
            nalgebra_backend::Outcome::RankDeficient { pivot_ratio } => {
                Err(PolyError::SingularSystem {
                    coefficients: cols,
                    pivot_ratio,
                })
            }
        }
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_least_squares(
        design: &[Self],
        rows: usize,
        cols: usize,
        rhs: &[Self],
        method: SolveMethod,
        rank_tolerance: Self,
    ) -> Result<LeastSquares<Self>, PolyError> {
        match nalgebra_backend::solve_least_squares(design, rows, cols, rhs, method, rank_tolerance)
        {
            nalgebra_backend::Outcome::Solved {
                coefficients,
                pivot_ratio,
            } => Ok(LeastSquares {
                coefficients,
                pivot_ratio,
            }),
            nalgebra_backend::Outcome::RankDeficient { pivot_ratio } => {
                Err(PolyError::SingularSystem {
                    coefficients: cols,
                    pivot_ratio: pivot_ratio as f64,
                })
            }
        }
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector, RealField};

    /// Result of a rank-checked solve.
    #[derive(Debug, Clone, PartialEq)]
    pub enum Outcome<T> {
        /// Full rank: coefficients and pivot ratio.
        Solved {
            /// Solution vector.
            coefficients: Vec<T>,
            /// Smallest over largest absolute pivot.
            pivot_ratio: T,
        },
        /// Rank deficient at the given tolerance.
        RankDeficient {
            /// Smallest over largest absolute pivot.
            pivot_ratio: T,
        },
    }

    /// Solve a column-major least-squares system.
    pub fn solve_least_squares<T: RealField + Copy>(
        design: &[T],
        rows: usize,
        cols: usize,
        rhs: &[T],
        method: SolveMethod,
        rank_tolerance: T,
    ) -> Outcome<T> {
        let a = DMatrix::from_column_slice(rows, cols, design);
        let b = DVector::from_column_slice(rhs);

        let (r, qtb) = match method {
            SolveMethod::NormalEquations => {
                let normal = a.tr_mul(&a);
                let moment = a.tr_mul(&b);
                let qr = normal.qr();
                let qtb = qr.q().tr_mul(&moment);
                (qr.r(), qtb)
            }
            SolveMethod::Householder => {
                let qr = a.qr();
                let qtb = qr.q().tr_mul(&b);
                (qr.r(), qtb)
            }
        };

        let ratio = pivot_ratio(&r);
        // Written so that a NaN ratio also lands in the deficient branch.
        if !(ratio > rank_tolerance) {
            return Outcome::RankDeficient { pivot_ratio: ratio };
        }

        match r.solve_upper_triangular(&qtb) {
            Some(solution) => Outcome::Solved {
                coefficients: solution.as_slice().to_vec(),
                pivot_ratio: ratio,
            },
            None => Outcome::RankDeficient { pivot_ratio: ratio },
        }
    }

    /// Smallest over largest absolute diagonal entry of a triangular factor.
    pub fn pivot_ratio<T: RealField + Copy>(r: &DMatrix<T>) -> T {
        let n = r.nrows().min(r.ncols());
        if n == 0 {
            return T::zero();
        }

        let mut lo = r[(0, 0)].abs();
        let mut hi = lo;
        for i in 1..n {
            let p = r[(i, i)].abs();
            lo = lo.min(p);
            hi = hi.max(p);
        }

        if hi == T::zero() {
            return T::zero();
        }
        lo / hi
    }
}
