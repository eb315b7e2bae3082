//! One-dimensional polynomial with a compile-time order.
//!
//! ## Purpose
//!
//! `FixedOneD<T, N>` is the statically sized counterpart of [`OneD`]: order
//! `N`, exactly `N + 1` coefficients, no heap allocation. It is useful when
//! the order is known at the call site and lets callers compare directly
//! against native arrays.
//!
//! ## Design notes
//!
//! * Storage is split into the constant term and an `[T; N]` of higher
//!   powers, which gives `N + 1` slots on stable const generics.
//! * Any coefficient sequence whose length is not `N + 1` is rejected with
//!   `FixedOrderMismatch`, on construction and on assignment.
//! * `==` against a sequence of the wrong length is `false`;
//!   [`FixedOneD::eq_coefficients`] is the checked variant that reports it.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use approx::{AbsDiffEq, RelativeEq};
use core::fmt::{self, Display};
use core::iter;
use core::ops::Index;
use num_traits::Float;

// Internal dependencies
use crate::poly::{OneD, Polynomial};
use crate::primitives::errors::PolyError;

// ============================================================================
// FixedOneD
// ============================================================================

/// Polynomial of order `N` with inline storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOneD<T, const N: usize> {
    constant: T,
    higher: [T; N],
}

impl<T: Float, const N: usize> FixedOneD<T, N> {
    /// Build from the constant term and the coefficients of `x^1..x^N`.
    pub const fn new(constant: T, higher: [T; N]) -> Self {
        Self { constant, higher }
    }

    /// The zero polynomial of order `N`.
    pub fn zeros() -> Self {
        Self {
            constant: T::zero(),
            higher: [T::zero(); N],
        }
    }

    /// Build from exactly `N + 1` coefficients, lowest power first.
    pub fn from_slice(coeffs: &[T]) -> Result<Self, PolyError> {
        let mut out = Self::zeros();
        out.assign(coeffs)?;
        Ok(out)
    }

    /// Order of the polynomial.
    #[inline]
    pub const fn order(&self) -> usize {
        N
    }

    /// Coefficient of `x^i`, zero beyond the order.
    #[inline]
    pub fn coefficient(&self, i: usize) -> T {
        match i {
            0 => self.constant,
            _ if i <= N => self.higher[i - 1],
            _ => T::zero(),
        }
    }

    /// Coefficients, lowest power first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        iter::once(&self.constant).chain(self.higher.iter())
    }

    /// Checked comparison against a coefficient sequence.
    ///
    /// Unlike `==`, a sequence of the wrong length is an error.
    pub fn eq_coefficients(&self, coeffs: &[T]) -> Result<bool, PolyError> {
        check_len::<N>(coeffs.len())?;
        Ok(self.iter().zip(coeffs).all(|(a, b)| a == b))
    }
}

#[inline]
fn check_len<const N: usize>(got: usize) -> Result<(), PolyError> {
    if got != N + 1 {
        return Err(PolyError::FixedOrderMismatch {
            expected: N + 1,
            got,
        });
    }
    Ok(())
}

// ============================================================================
// Polynomial Capability
// ============================================================================

impl<T: Float, const N: usize> Polynomial<T> for FixedOneD<T, N> {
    #[inline]
    fn order(&self) -> usize {
        N
    }

    #[inline]
    fn coefficient(&self, i: usize) -> T {
        FixedOneD::coefficient(self, i)
    }

    /// Fails unless `coeffs.len() == N + 1`; leaves `self` untouched on failure.
    fn assign(&mut self, coeffs: &[T]) -> Result<(), PolyError> {
        check_len::<N>(coeffs.len())?;
        self.constant = coeffs[0];
        self.higher.copy_from_slice(&coeffs[1..]);
        Ok(())
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T: Float, const N: usize> TryFrom<&[T]> for FixedOneD<T, N> {
    type Error = PolyError;

    fn try_from(coeffs: &[T]) -> Result<Self, PolyError> {
        Self::from_slice(coeffs)
    }
}

impl<T: Float, const N: usize> TryFrom<&OneD<T>> for FixedOneD<T, N> {
    type Error = PolyError;

    fn try_from(poly: &OneD<T>) -> Result<Self, PolyError> {
        Self::from_slice(poly.coefficients())
    }
}

impl<T: Float, const N: usize> TryFrom<OneD<T>> for FixedOneD<T, N> {
    type Error = PolyError;

    fn try_from(poly: OneD<T>) -> Result<Self, PolyError> {
        Self::from_slice(poly.coefficients())
    }
}

impl<T: Float, const N: usize> From<FixedOneD<T, N>> for OneD<T> {
    fn from(poly: FixedOneD<T, N>) -> Self {
        poly.to_one_d()
    }
}

impl<T, const N: usize> Index<usize> for FixedOneD<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        match i {
            0 => &self.constant,
            _ => &self.higher[i - 1],
        }
    }
}

// ============================================================================
// Equality
// ============================================================================

impl<T: PartialEq, const N: usize> PartialEq<[T]> for FixedOneD<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        other.len() == N + 1 && self.constant == other[0] && self.higher[..] == other[1..]
    }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<[T; M]> for FixedOneD<T, N> {
    fn eq(&self, other: &[T; M]) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq, const N: usize> PartialEq<Vec<T>> for FixedOneD<T, N> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq, const N: usize> PartialEq<OneD<T>> for FixedOneD<T, N> {
    fn eq(&self, other: &OneD<T>) -> bool {
        *self == *other.coefficients()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<FixedOneD<T, N>> for OneD<T> {
    fn eq(&self, other: &FixedOneD<T, N>) -> bool {
        *other == *self.coefficients()
    }
}

impl<T: AbsDiffEq<Epsilon = T> + Copy, const N: usize> AbsDiffEq for FixedOneD<T, N> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.constant.abs_diff_eq(&other.constant, epsilon)
            && self
                .higher
                .iter()
                .zip(&other.higher)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq<Epsilon = T> + Copy, const N: usize> RelativeEq for FixedOneD<T, N> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.constant
            .relative_eq(&other.constant, epsilon, max_relative)
            && self
                .higher
                .iter()
                .zip(&other.higher)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Display, const N: usize> Display for FixedOneD<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.constant)?;
        for (i, c) in self.higher.iter().enumerate() {
            match i {
                0 => write!(f, " + {}*x", c)?,
                _ => write!(f, " + {}*x^{}", c, i + 1)?,
            }
        }
        Ok(())
    }
}
