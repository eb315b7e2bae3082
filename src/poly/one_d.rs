//! One-dimensional polynomial with a dynamic order.
//!
//! ## Purpose
//!
//! `OneD` stores `c_0..c_n` for `sum c_i x^i`, index equal to power, and
//! offers evaluation, calculus, and arithmetic on that representation.
//!
//! ## Invariants
//!
//! * The coefficient vector is never empty; its length is `order() + 1`.
//! * `==` is exact: same order and bit-identical coefficients. Trailing
//!   zeros count, so `[1, 0] != [1]`. Use the `approx` traits for tolerance.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};
#[cfg(feature = "std")]
use std::{vec, vec::Vec};

// External dependencies
use approx::{AbsDiffEq, RelativeEq};
use core::fmt::{self, Display};
use core::ops::{Add, Div, Index, Mul, Neg, Sub};
use num_traits::Float;

// Internal dependencies
use crate::math::scaling::compose_affine;
use crate::poly::{Polynomial, coefficient_count};
use crate::primitives::errors::PolyError;

// ============================================================================
// OneD
// ============================================================================

/// Polynomial `sum_{i=0..n} c_i x^i`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<T>",
        into = "Vec<T>",
        bound(
            serialize = "T: Float + serde::Serialize",
            deserialize = "T: Float + serde::Deserialize<'de>"
        )
    )
)]
pub struct OneD<T> {
    coeffs: Vec<T>,
}

impl<T> OneD<T> {
    /// Coefficients, lowest power first.
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Consume into the coefficient vector.
    pub fn into_coefficients(self) -> Vec<T> {
        self.coeffs
    }
}

impl<T: Float> OneD<T> {
    /// The zero polynomial of the given order.
    ///
    /// # Panics
    ///
    /// Panics if `order + 1` coefficients cannot be allocated.
    pub fn zeros(order: usize) -> Self {
        Self {
            coeffs: vec![T::zero(); coefficient_count(order).unwrap_or(usize::MAX)],
        }
    }

    /// Build from an explicit order and a buffer holding at least `order + 1` values.
    ///
    /// Only the first `order + 1` values are read.
    pub fn with_order(order: usize, buffer: &[T]) -> Result<Self, PolyError> {
        let n = coefficient_count(order).unwrap_or(usize::MAX);
        if buffer.len() < n {
            return Err(PolyError::CoefficientCount {
                expected: n,
                got: buffer.len(),
            });
        }
        Ok(Self {
            coeffs: buffer[..n].to_vec(),
        })
    }

    /// Highest power present.
    #[inline]
    pub fn order(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// Coefficient of `x^i`, zero beyond the order.
    #[inline]
    pub fn coefficient(&self, i: usize) -> T {
        self.coeffs.get(i).copied().unwrap_or_else(T::zero)
    }

    /// First derivative. The derivative of a constant is the zero constant.
    pub fn derivative(&self) -> Self {
        if self.coeffs.len() == 1 {
            return Self::zeros(0);
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * cast(i))
            .collect();
        Self { coeffs }
    }

    /// Antiderivative with zero constant term.
    pub fn antiderivative(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(T::zero());
        coeffs.extend(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(i, &c)| c / cast(i + 1)),
        );
        Self { coeffs }
    }

    /// Definite integral over `[start, end]`.
    pub fn integrate(&self, start: T, end: T) -> T {
        let anti = self.antiderivative();
        anti.eval(end) - anti.eval(start)
    }

    /// Drop trailing zero coefficients, keeping at least the constant term.
    pub fn truncate_to_non_zeros(&self) -> Self {
        let keep = self
            .coeffs
            .iter()
            .rposition(|&c| c != T::zero())
            .map_or(1, |i| i + 1);
        Self {
            coeffs: self.coeffs[..keep].to_vec(),
        }
    }

    /// Polynomial `q(x) = p(x / scale)`.
    pub fn scale_variable(&self, scale: T) -> Self {
        let inv = T::one() / scale;
        let mut factor = T::one();
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| {
                let v = c * factor;
                factor = factor * inv;
                v
            })
            .collect();
        Self { coeffs }
    }

    /// Polynomial `q(x) = p(a + b x)`.
    pub fn compose_affine(&self, a: T, b: T) -> Self {
        Self {
            coeffs: compose_affine(&self.coeffs, a, b),
        }
    }
}

#[inline]
fn cast<T: Float>(i: usize) -> T {
    T::from(i).unwrap_or_else(T::nan)
}

// ============================================================================
// Polynomial Capability
// ============================================================================

impl<T: Float> Polynomial<T> for OneD<T> {
    #[inline]
    fn order(&self) -> usize {
        OneD::order(self)
    }

    #[inline]
    fn coefficient(&self, i: usize) -> T {
        OneD::coefficient(self, i)
    }

    /// Replaces coefficients and order; fails only on an empty sequence.
    fn assign(&mut self, coeffs: &[T]) -> Result<(), PolyError> {
        if coeffs.is_empty() {
            return Err(PolyError::CoefficientCount {
                expected: 1,
                got: 0,
            });
        }
        self.coeffs.clear();
        self.coeffs.extend_from_slice(coeffs);
        Ok(())
    }

    fn to_one_d(&self) -> OneD<T> {
        self.clone()
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl<T: Float> From<Vec<T>> for OneD<T> {
    /// Order is implied by the length; an empty vector becomes the zero constant.
    fn from(coeffs: Vec<T>) -> Self {
        if coeffs.is_empty() {
            return Self::zeros(0);
        }
        Self { coeffs }
    }
}

impl<T: Float> From<&[T]> for OneD<T> {
    fn from(coeffs: &[T]) -> Self {
        Self::from(coeffs.to_vec())
    }
}

impl<T: Float, const N: usize> From<[T; N]> for OneD<T> {
    fn from(coeffs: [T; N]) -> Self {
        Self::from(coeffs.to_vec())
    }
}

impl<T> From<OneD<T>> for Vec<T> {
    fn from(poly: OneD<T>) -> Self {
        poly.coeffs
    }
}

impl<T> Index<usize> for OneD<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.coeffs[i]
    }
}

// ============================================================================
// Equality
// ============================================================================

impl<T: PartialEq> PartialEq<[T]> for OneD<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.coeffs.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for OneD<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.coeffs == *other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for OneD<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.coeffs.as_slice() == other.as_slice()
    }
}

impl<T: AbsDiffEq<Epsilon = T> + Copy> AbsDiffEq for OneD<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq<Epsilon = T> + Copy> RelativeEq for OneD<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<T: Float> Add for &OneD<T> {
    type Output = OneD<T>;

    fn add(self, rhs: &OneD<T>) -> OneD<T> {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..n)
            .map(|i| self.coefficient(i) + rhs.coefficient(i))
            .collect();
        OneD { coeffs }
    }
}

impl<T: Float> Sub for &OneD<T> {
    type Output = OneD<T>;

    fn sub(self, rhs: &OneD<T>) -> OneD<T> {
        let n = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..n)
            .map(|i| self.coefficient(i) - rhs.coefficient(i))
            .collect();
        OneD { coeffs }
    }
}

impl<T: Float> Mul for &OneD<T> {
    type Output = OneD<T>;

    fn mul(self, rhs: &OneD<T>) -> OneD<T> {
        let mut coeffs = vec![T::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        OneD { coeffs }
    }
}

impl<T: Float> Mul<T> for &OneD<T> {
    type Output = OneD<T>;

    fn mul(self, rhs: T) -> OneD<T> {
        OneD {
            coeffs: self.coeffs.iter().map(|&c| c * rhs).collect(),
        }
    }
}

impl<T: Float> Div<T> for &OneD<T> {
    type Output = OneD<T>;

    fn div(self, rhs: T) -> OneD<T> {
        OneD {
            coeffs: self.coeffs.iter().map(|&c| c / rhs).collect(),
        }
    }
}

impl<T: Float> Neg for &OneD<T> {
    type Output = OneD<T>;

    fn neg(self) -> OneD<T> {
        OneD {
            coeffs: self.coeffs.iter().map(|&c| -c).collect(),
        }
    }
}

macro_rules! forward_owned_binop {
    ($trait:ident, $method:ident) => {
        impl<T: Float> $trait for OneD<T> {
            type Output = OneD<T>;

            #[inline]
            fn $method(self, rhs: OneD<T>) -> OneD<T> {
                (&self).$method(&rhs)
            }
        }
    };
}

forward_owned_binop!(Add, add);
forward_owned_binop!(Sub, sub);
forward_owned_binop!(Mul, mul);

impl<T: Float> Mul<T> for OneD<T> {
    type Output = OneD<T>;

    #[inline]
    fn mul(self, rhs: T) -> OneD<T> {
        &self * rhs
    }
}

impl<T: Float> Div<T> for OneD<T> {
    type Output = OneD<T>;

    #[inline]
    fn div(self, rhs: T) -> OneD<T> {
        &self / rhs
    }
}

impl<T: Float> Neg for OneD<T> {
    type Output = OneD<T>;

    #[inline]
    fn neg(self) -> OneD<T> {
        -&self
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Display> Display for OneD<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coeffs.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            match i {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "{}*x", c)?,
                _ => write!(f, "{}*x^{}", c, i)?,
            }
        }
        Ok(())
    }
}
