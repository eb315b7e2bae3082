//! Design matrix construction.
//!
//! ## Purpose
//!
//! This module builds the Vandermonde-style design matrices posed to the
//! least-squares solver: one row per observation, one column per basis term.
//!
//! ## Design notes
//!
//! * Term generation is abstracted behind [`TermGenerator`] so the assembly
//!   loop is shared by the 1D power basis and the 2D tensor-product basis.
//! * Powers are built by repeated multiplication, never `powi`, so identical
//!   inputs always produce bit-identical matrices.
//! * Matrices are column-major to hand straight to nalgebra.
//!
//! ## Key concepts
//!
//! * **1D basis**: `1, t, t², …, t^m`.
//! * **2D basis**: `tx^i ty^j` for `i = 0..mx`, `j = 0..my`, column index
//!   `i * (my + 1) + j` (matching the row-major coefficient grid).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::AffineMap;
use crate::primitives::source::{Grid, Series};

// = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = =
// Term Generators (Strategy Pattern)
// = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = =

/// Trait for generating basis terms for one observation.
pub trait TermGenerator<T: Float> {
    /// Number of terms (design matrix columns).
    fn n_terms(&self) -> usize;

    /// Coordinates per observation.
    fn dimensions(&self) -> usize;

    /// Writes the terms for `point` into `out`, which has length `n_terms()`.
    fn generate(&self, point: &[T], out: &mut [T]);
}

/// Power basis `1, t, …, t^order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerTerms {
    /// Highest power.
    pub order: usize,
}

impl<T: Float> TermGenerator<T> for PowerTerms {
    #[inline]
    fn n_terms(&self) -> usize {
        self.order + 1
    }

    #[inline]
    fn dimensions(&self) -> usize {
        1
    }

    #[inline]
    fn generate(&self, point: &[T], out: &mut [T]) {
        let t = point[0];
        out[0] = T::one();
        for k in 1..=self.order {
            out[k] = out[k - 1] * t;
        }
    }
}

/// Tensor-product basis `tx^i ty^j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TensorTerms {
    /// Highest power of x.
    pub order_x: usize,
    /// Highest power of y.
    pub order_y: usize,
}

impl<T: Float> TermGenerator<T> for TensorTerms {
    #[inline]
    fn n_terms(&self) -> usize {
        (self.order_x + 1) * (self.order_y + 1)
    }

    #[inline]
    fn dimensions(&self) -> usize {
        2
    }

    #[inline]
    fn generate(&self, point: &[T], out: &mut [T]) {
        let (tx, ty) = (point[0], point[1]);
        let w = self.order_y + 1;

        // Row for x^0 is the y power basis.
        out[0] = T::one();
        for j in 1..w {
            out[j] = out[j - 1] * ty;
        }
        for i in 1..=self.order_x {
            for j in 0..w {
                out[i * w + j] = out[(i - 1) * w + j] * tx;
            }
        }
    }
}

// = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = =
// Assembly
// = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = = =

/// Assemble a column-major design matrix.
///
/// `point_at(k, buf)` writes the mapped coordinates of observation `k`.
pub fn assemble<T: Float, G: TermGenerator<T>>(
    n_obs: usize,
    generator: &G,
    mut point_at: impl FnMut(usize, &mut [T]),
) -> Vec<T> {
    let n_terms = generator.n_terms();
    let mut design = vec![T::zero(); n_obs * n_terms];
    let mut point = vec![T::zero(); generator.dimensions()];
    let mut terms = vec![T::zero(); n_terms];

    for k in 0..n_obs {
        point_at(k, &mut point);
        generator.generate(&point, &mut terms);
        for (c, &v) in terms.iter().enumerate() {
            design[c * n_obs + k] = v;
        }
    }

    design
}

/// Design matrix of a 1D fit on mapped coordinates.
pub fn design_1d<T: Float, S: Series<T> + ?Sized>(x: &S, order: usize, map: &AffineMap<T>) -> Vec<T> {
    assemble(x.len(), &PowerTerms { order }, |k, p| {
        p[0] = map.apply(x.at(k));
    })
}

/// Design matrix of a 2D fit; observations are taken in row-major grid order.
pub fn design_2d<T: Float, GX: Grid<T> + ?Sized, GY: Grid<T> + ?Sized>(
    x: &GX,
    y: &GY,
    order_x: usize,
    order_y: usize,
    map_x: &AffineMap<T>,
    map_y: &AffineMap<T>,
) -> Vec<T> {
    let cols = x.cols();
    assemble(x.size(), &TensorTerms { order_x, order_y }, |k, p| {
        let (r, c) = (k / cols, k % cols);
        p[0] = map_x.apply(x.at(r, c));
        p[1] = map_y.apply(y.at(r, c));
    })
}

/// Observations of a series as a vector.
pub fn collect_series<T: Float, S: Series<T> + ?Sized>(y: &S) -> Vec<T> {
    (0..y.len()).map(|k| y.at(k)).collect()
}

/// Observations of a grid as a row-major vector.
pub fn flatten_grid<T: Float, G: Grid<T> + ?Sized>(z: &G) -> Vec<T> {
    let cols = z.cols();
    (0..z.size()).map(|k| z.at(k / cols, k % cols)).collect()
}
