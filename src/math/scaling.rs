//! Axis conditioning for least-squares fits.
//!
//! ## Purpose
//!
//! Powers of raw coordinates far from the origin (tens of thousands, say)
//! make the design matrix badly conditioned. This module maps each
//! independent axis onto [-1, 1] before the solve and re-expands the solved
//! coefficients back onto the raw axis afterwards.
//!
//! ## Design notes
//!
//! * **Affine map**: `t = (x - center) / scale`, with center and half-range
//!   taken from the sample extremes.
//! * **Re-expansion**: A polynomial in `t` is rewritten as a polynomial in `x`
//!   by Horner composition with the linear polynomial `-center/scale + x/scale`.
//! * **Degenerate axes**: A zero or non-finite half-range falls back to a
//!   unit scale; the solver then reports the singularity.
//!
//! ## Invariants
//!
//! * `scale` is finite and nonzero.
//! * Re-expansion never changes the coefficient count.
//!
//! ## Non-goals
//!
//! * This module does not standardize by variance (min/max are enough for powers).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::source::{Grid, Series};

// ============================================================================
// Conditioning
// ============================================================================

/// How independent coordinates are prepared before the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conditioning {
    /// Map each axis onto [-1, 1] and re-expand the coefficients (default).
    #[default]
    Normalized,

    /// Use coordinates as given.
    Raw,
}

// ============================================================================
// AffineMap
// ============================================================================

/// Map `x -> (x - center) / scale` for one independent axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineMap<T> {
    /// Value mapped to zero.
    pub center: T,
    /// Value mapped to one unit.
    pub scale: T,
}

impl<T: Float> AffineMap<T> {
    /// The map that leaves coordinates unchanged.
    #[inline]
    pub fn identity() -> Self {
        Self {
            center: T::zero(),
            scale: T::one(),
        }
    }

    /// Map the interval `[lo, hi]` onto `[-1, 1]`.
    pub fn from_bounds(lo: T, hi: T) -> Self {
        let two = T::one() + T::one();
        let center = (lo + hi) / two;
        let half = (hi - lo) / two;
        let scale = if half > T::zero() && half.is_finite() {
            half
        } else {
            T::one()
        };
        let center = if center.is_finite() {
            center
        } else {
            T::zero()
        };
        Self { center, scale }
    }

    /// Map chosen from the extremes of a series.
    pub fn from_series<S: Series<T> + ?Sized>(x: &S, conditioning: Conditioning) -> Self {
        match conditioning {
            Conditioning::Raw => Self::identity(),
            Conditioning::Normalized => {
                let (lo, hi) = (0..x.len()).fold((T::infinity(), T::neg_infinity()), |acc, i| {
                    let v = x.at(i);
                    (acc.0.min(v), acc.1.max(v))
                });
                Self::from_bounds(lo, hi)
            }
        }
    }

    /// Map chosen from the extremes of a grid.
    pub fn from_grid<G: Grid<T> + ?Sized>(g: &G, conditioning: Conditioning) -> Self {
        match conditioning {
            Conditioning::Raw => Self::identity(),
            Conditioning::Normalized => {
                let mut lo = T::infinity();
                let mut hi = T::neg_infinity();
                for r in 0..g.rows() {
                    for c in 0..g.cols() {
                        let v = g.at(r, c);
                        lo = lo.min(v);
                        hi = hi.max(v);
                    }
                }
                Self::from_bounds(lo, hi)
            }
        }
    }

    /// Whether the map is the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.center == T::zero() && self.scale == T::one()
    }

    /// Map a raw coordinate.
    #[inline]
    pub fn apply(&self, x: T) -> T {
        (x - self.center) / self.scale
    }

    /// Rewrite coefficients of a polynomial in `t` as coefficients in `x`.
    pub fn expand(&self, coeffs: &[T]) -> Vec<T> {
        if self.is_identity() {
            return coeffs.to_vec();
        }
        let b = T::one() / self.scale;
        let a = -self.center * b;
        compose_affine(coeffs, a, b)
    }
}

// ============================================================================
// Composition
// ============================================================================

/// Coefficients of `p(a + b x)` given the coefficients of `p`.
///
/// Horner's scheme over polynomials: start from the leading coefficient and
/// repeatedly multiply by `(a + b x)` before adding the next one.
pub fn compose_affine<T: Float>(coeffs: &[T], a: T, b: T) -> Vec<T> {
    if coeffs.is_empty() {
        return Vec::new();
    }

    let m = coeffs.len() - 1;
    let mut out = vec![T::zero(); coeffs.len()];
    out[0] = coeffs[m];

    for k in (0..m).rev() {
        let deg = m - k - 1;
        for i in (1..=deg + 1).rev() {
            out[i] = a * out[i] + b * out[i - 1];
        }
        out[0] = a * out[0] + coeffs[k];
    }

    out
}
