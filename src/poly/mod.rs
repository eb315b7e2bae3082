//! Layer 3: Polynomial
//!
//! # Purpose
//!
//! This layer provides the value types a fit produces:
//! - [`OneD`]: dynamically sized polynomial in one variable
//! - [`FixedOneD`]: statically sized polynomial in one variable
//! - [`TwoD`]: polynomial in two variables with independent per-axis orders
//!
//! `OneD` and `FixedOneD` share the [`Polynomial`] capability set
//! (construct, evaluate, compare, assign) as two implementations of one trait.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Polynomial ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::PolyError;

/// Statically sized one-dimensional polynomial.
pub mod fixed;

/// Dynamically sized one-dimensional polynomial.
pub mod one_d;

/// Two-dimensional polynomial.
pub mod two_d;

pub use fixed::FixedOneD;
pub use one_d::OneD;
pub use two_d::TwoD;

// ============================================================================
// Coefficient Counts
// ============================================================================

/// Coefficient count of a 1D polynomial of `order`, `None` past `usize::MAX`.
#[inline]
pub fn coefficient_count(order: usize) -> Option<usize> {
    order.checked_add(1)
}

/// Coefficient count of a 2D polynomial of orders `(order_x, order_y)`,
/// `None` past `usize::MAX`.
#[inline]
pub fn coefficient_count_2d(order_x: usize, order_y: usize) -> Option<usize> {
    coefficient_count(order_x)?.checked_mul(coefficient_count(order_y)?)
}

// ============================================================================
// Polynomial Trait
// ============================================================================

/// Capability set shared by one-dimensional polynomials.
pub trait Polynomial<T: Float> {
    /// Highest power present; the coefficient count is `order() + 1`.
    fn order(&self) -> usize;

    /// Coefficient of `x^i`, zero when `i > order()`.
    fn coefficient(&self, i: usize) -> T;

    /// Replace all coefficients (and, where allowed, the order).
    fn assign(&mut self, coeffs: &[T]) -> Result<(), PolyError>;

    /// Evaluate at `x` by Horner's scheme.
    #[inline]
    fn eval(&self, x: T) -> T {
        let n = self.order();
        let mut acc = self.coefficient(n);
        for i in (0..n).rev() {
            acc = acc * x + self.coefficient(i);
        }
        acc
    }

    /// Evaluate at every point of `xs`.
    fn eval_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Copy into a dynamically sized polynomial.
    fn to_one_d(&self) -> OneD<T> {
        let coeffs: Vec<T> = (0..=self.order()).map(|i| self.coefficient(i)).collect();
        OneD::from(coeffs)
    }
}
