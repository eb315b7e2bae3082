//! Observation sources for fitting.
//!
//! ## Purpose
//!
//! This module defines the two read-only capabilities the fitting engine
//! needs from caller data: a [`Series`] (ordered, fixed-length sequence of
//! samples) and a [`Grid`] (row/column indexed samples). Every fit overload
//! goes through these traits, so the solver is written once.
//!
//! ## Design notes
//!
//! * **Thin adapters**: Slices, `Vec`, arrays, and nalgebra containers all
//!   implement the traits directly; nothing is copied until the design
//!   matrix is built.
//! * **Read only**: The engine never retains a reference past a fit call.
//! * **Row-major views**: [`GridView`] presents a flat buffer as a grid, and
//!   [`Transposed`] swaps the axes of any grid.
//!
//! ## Invariants
//!
//! * `at(i)` is valid for `i < len()`, `at(r, c)` for `r < rows, c < cols`.
//!
//! ## Non-goals
//!
//! * This module does not validate that lengths or shapes agree (see `engine::validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::{DMatrix, DVector, Scalar};

// Internal dependencies
use crate::primitives::errors::PolyError;

// ============================================================================
// Series
// ============================================================================

/// Ordered, fixed-length sequence of samples.
pub trait Series<T> {
    /// Number of samples.
    fn len(&self) -> usize;

    /// Sample at index `i`.
    fn at(&self, i: usize) -> T;

    /// Whether the series holds no samples.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy> Series<T> for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Copy> Series<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Copy, const N: usize> Series<T> for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        self[i]
    }
}

impl<T: Scalar + Copy> Series<T> for DVector<T> {
    #[inline]
    fn len(&self) -> usize {
        self.nrows()
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        self[i]
    }
}

impl<T, S: Series<T> + ?Sized> Series<T> for &S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, i: usize) -> T {
        (**self).at(i)
    }
}

// ============================================================================
// Grid
// ============================================================================

/// Row/column indexed samples.
pub trait Grid<T> {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;

    /// Sample at row `r`, column `c`.
    fn at(&self, r: usize, c: usize) -> T;

    /// Shape as (rows, cols).
    #[inline]
    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    /// Total number of samples.
    #[inline]
    fn size(&self) -> usize {
        self.rows() * self.cols()
    }
}

impl<T: Scalar + Copy> Grid<T> for DMatrix<T> {
    #[inline]
    fn rows(&self) -> usize {
        self.nrows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.ncols()
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> T {
        self[(r, c)]
    }
}

impl<T: Copy, const R: usize, const C: usize> Grid<T> for [[T; C]; R] {
    #[inline]
    fn rows(&self) -> usize {
        R
    }

    #[inline]
    fn cols(&self) -> usize {
        C
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> T {
        self[r][c]
    }
}

impl<T, G: Grid<T> + ?Sized> Grid<T> for &G {
    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn cols(&self) -> usize {
        (**self).cols()
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> T {
        (**self).at(r, c)
    }
}

// ============================================================================
// GridView
// ============================================================================

/// Row-major grid view over a flat buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridView<'a, T> {
    data: &'a [T],
    rows: usize,
    cols: usize,
}

impl<'a, T: Copy> GridView<'a, T> {
    /// Wrap `data` as a `rows x cols` row-major grid.
    ///
    /// Fails when the buffer length is not exactly `rows * cols`.
    pub fn new(data: &'a [T], rows: usize, cols: usize) -> Result<Self, PolyError> {
        let expected = rows.checked_mul(cols).unwrap_or(usize::MAX);
        if data.len() != expected {
            return Err(PolyError::GridLength {
                rows,
                cols,
                expected,
                got: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Underlying row-major buffer.
    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }
}

impl<T: Copy> Grid<T> for GridView<'_, T> {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> T {
        self.data[r * self.cols + c]
    }
}

// ============================================================================
// Transposed
// ============================================================================

/// Grid adapter swapping rows and columns.
#[derive(Debug, Clone, Copy)]
pub struct Transposed<G>(pub G);

impl<T, G: Grid<T>> Grid<T> for Transposed<G> {
    #[inline]
    fn rows(&self) -> usize {
        self.0.cols()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.0.rows()
    }

    #[inline]
    fn at(&self, r: usize, c: usize) -> T {
        self.0.at(c, r)
    }
}
