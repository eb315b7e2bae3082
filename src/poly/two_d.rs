//! Two-dimensional polynomial with independent per-axis orders.
//!
//! ## Purpose
//!
//! `TwoD` stores the `(nx + 1) x (ny + 1)` coefficient grid of
//! `sum_i sum_j c_ij x^i y^j`, row index equal to the x power and column
//! index equal to the y power.
//!
//! ## Invariants
//!
//! * The row-major buffer holds exactly `(order_x + 1) * (order_y + 1)` values.
//! * `==` is exact on both orders and every coefficient.

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
use crate::poly::{OneD, coefficient_count_2d};
use crate::primitives::errors::PolyError;
use crate::primitives::source::Grid;

// ============================================================================
// TwoD
// ============================================================================

/// Polynomial `sum_{i=0..nx} sum_{j=0..ny} c_ij x^i y^j`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "serde_repr::TwoDRepr<T>",
        into = "serde_repr::TwoDRepr<T>",
        bound(
            serialize = "T: Float + serde::Serialize",
            deserialize = "T: Float + serde::Deserialize<'de>"
        )
    )
)]
pub struct TwoD<T> {
    order_x: usize,
    order_y: usize,
    coeffs: Vec<T>,
}

impl<T: Float> TwoD<T> {
    /// The zero polynomial of the given orders.
    ///
    /// # Panics
    ///
    /// Panics if `(order_x + 1) * (order_y + 1)` coefficients cannot be allocated.
    pub fn zeros(order_x: usize, order_y: usize) -> Self {
        Self {
            order_x,
            order_y,
            coeffs: vec![T::zero(); coefficient_count_2d(order_x, order_y).unwrap_or(usize::MAX)],
        }
    }

    /// Build from explicit orders and a row-major buffer.
    ///
    /// Only the first `(order_x + 1) * (order_y + 1)` values are read.
    pub fn with_orders(order_x: usize, order_y: usize, buffer: &[T]) -> Result<Self, PolyError> {
        let n = coefficient_count_2d(order_x, order_y).unwrap_or(usize::MAX);
        if buffer.len() < n {
            return Err(PolyError::CoefficientCount {
                expected: n,
                got: buffer.len(),
            });
        }
        Ok(Self {
            order_x,
            order_y,
            coeffs: buffer[..n].to_vec(),
        })
    }

    /// Build from a coefficient grid; its shape sets the orders.
    pub fn from_grid<G: Grid<T> + ?Sized>(grid: &G) -> Result<Self, PolyError> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows == 0 || cols == 0 {
            return Err(PolyError::CoefficientCount {
                expected: 1,
                got: 0,
            });
        }
        let mut coeffs = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                coeffs.push(grid.at(i, j));
            }
        }
        Ok(Self {
            order_x: rows - 1,
            order_y: cols - 1,
            coeffs,
        })
    }

    /// Highest power of x.
    #[inline]
    pub fn order_x(&self) -> usize {
        self.order_x
    }

    /// Highest power of y.
    #[inline]
    pub fn order_y(&self) -> usize {
        self.order_y
    }

    /// Row-major coefficients (row = x power).
    #[inline]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Coefficient of `x^i y^j`, zero beyond either order.
    #[inline]
    pub fn coefficient(&self, i: usize, j: usize) -> T {
        if i > self.order_x || j > self.order_y {
            return T::zero();
        }
        self.coeffs[i * (self.order_y + 1) + j]
    }

    #[inline]
    fn row(&self, i: usize) -> &[T] {
        let w = self.order_y + 1;
        &self.coeffs[i * w..(i + 1) * w]
    }

    /// Evaluate at `(x, y)`.
    pub fn eval(&self, x: T, y: T) -> T {
        let mut acc = horner(self.row(self.order_x), y);
        for i in (0..self.order_x).rev() {
            acc = acc * x + horner(self.row(i), y);
        }
        acc
    }

    /// Evaluate at each `(xs[k], ys[k])`.
    pub fn eval_many(&self, xs: &[T], ys: &[T]) -> Result<Vec<T>, PolyError> {
        if xs.len() != ys.len() {
            return Err(PolyError::MismatchedInputs {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        Ok(xs.iter().zip(ys).map(|(&x, &y)| self.eval(x, y)).collect())
    }

    /// Fix `y`, leaving a polynomial in `x`.
    pub fn at_y(&self, y: T) -> OneD<T> {
        let coeffs: Vec<T> = (0..=self.order_x).map(|i| horner(self.row(i), y)).collect();
        OneD::from(coeffs)
    }

    /// Fix `x`, leaving a polynomial in `y`.
    pub fn at_x(&self, x: T) -> OneD<T> {
        let coeffs: Vec<T> = (0..=self.order_y)
            .map(|j| {
                let mut acc = self.coefficient(self.order_x, j);
                for i in (0..self.order_x).rev() {
                    acc = acc * x + self.coefficient(i, j);
                }
                acc
            })
            .collect();
        OneD::from(coeffs)
    }

    /// Partial derivative in x.
    pub fn derivative_x(&self) -> Self {
        if self.order_x == 0 {
            return Self::zeros(0, self.order_y);
        }
        let mut out = Self::zeros(self.order_x - 1, self.order_y);
        for i in 1..=self.order_x {
            let k = cast::<T>(i);
            for j in 0..=self.order_y {
                out.set(i - 1, j, self.coefficient(i, j) * k);
            }
        }
        out
    }

    /// Partial derivative in y.
    pub fn derivative_y(&self) -> Self {
        if self.order_y == 0 {
            return Self::zeros(self.order_x, 0);
        }
        let mut out = Self::zeros(self.order_x, self.order_y - 1);
        for i in 0..=self.order_x {
            for j in 1..=self.order_y {
                out.set(i, j - 1, self.coefficient(i, j) * cast(j));
            }
        }
        out
    }

    /// Mixed partial derivative in x and y.
    pub fn derivative_xy(&self) -> Self {
        self.derivative_x().derivative_y()
    }

    /// Swap the roles of x and y.
    pub fn flip_xy(&self) -> Self {
        let mut out = Self::zeros(self.order_y, self.order_x);
        for i in 0..=self.order_x {
            for j in 0..=self.order_y {
                out.set(j, i, self.coefficient(i, j));
            }
        }
        out
    }

    /// Polynomial `q(x, y) = p(x / scale_x, y / scale_y)`.
    pub fn scale_variable(&self, scale_x: T, scale_y: T) -> Self {
        let inv_x = T::one() / scale_x;
        let inv_y = T::one() / scale_y;
        let mut out = self.clone();
        let mut fx = T::one();
        for i in 0..=self.order_x {
            let mut fy = fx;
            for j in 0..=self.order_y {
                out.set(i, j, self.coefficient(i, j) * fy);
                fy = fy * inv_y;
            }
            fx = fx * inv_x;
        }
        out
    }

    /// Shrink both orders past trailing all-zero rows and columns.
    pub fn truncate_to_non_zeros(&self) -> Self {
        let mut nx = 0;
        let mut ny = 0;
        for i in 0..=self.order_x {
            for j in 0..=self.order_y {
                if self.coefficient(i, j) != T::zero() {
                    nx = nx.max(i);
                    ny = ny.max(j);
                }
            }
        }
        let mut out = Self::zeros(nx, ny);
        for i in 0..=nx {
            for j in 0..=ny {
                out.set(i, j, self.coefficient(i, j));
            }
        }
        out
    }

    #[inline]
    fn set(&mut self, i: usize, j: usize, v: T) {
        let w = self.order_y + 1;
        self.coeffs[i * w + j] = v;
    }

    fn zip_with(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let nx = self.order_x.max(rhs.order_x);
        let ny = self.order_y.max(rhs.order_y);
        let mut out = Self::zeros(nx, ny);
        for i in 0..=nx {
            for j in 0..=ny {
                out.set(i, j, f(self.coefficient(i, j), rhs.coefficient(i, j)));
            }
        }
        out
    }

    fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self {
            order_x: self.order_x,
            order_y: self.order_y,
            coeffs: self.coeffs.iter().map(|&c| f(c)).collect(),
        }
    }
}

#[inline]
fn horner<T: Float>(coeffs: &[T], x: T) -> T {
    let n = coeffs.len() - 1;
    let mut acc = coeffs[n];
    for i in (0..n).rev() {
        acc = acc * x + coeffs[i];
    }
    acc
}

#[inline]
fn cast<T: Float>(i: usize) -> T {
    T::from(i).unwrap_or_else(T::nan)
}

impl<T> Index<(usize, usize)> for TwoD<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i <= self.order_x && j <= self.order_y,
            "coefficient ({}, {}) outside orders ({}, {})",
            i,
            j,
            self.order_x,
            self.order_y
        );
        &self.coeffs[i * (self.order_y + 1) + j]
    }
}

// ============================================================================
// Approximate Equality
// ============================================================================

impl<T: AbsDiffEq<Epsilon = T> + Copy> AbsDiffEq for TwoD<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.order_x == other.order_x
            && self.order_y == other.order_y
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq<Epsilon = T> + Copy> RelativeEq for TwoD<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.order_x == other.order_x
            && self.order_y == other.order_y
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

impl<T: Float> Add for &TwoD<T> {
    type Output = TwoD<T>;

    fn add(self, rhs: &TwoD<T>) -> TwoD<T> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<T: Float> Sub for &TwoD<T> {
    type Output = TwoD<T>;

    fn sub(self, rhs: &TwoD<T>) -> TwoD<T> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<T: Float> Mul<T> for &TwoD<T> {
    type Output = TwoD<T>;

    fn mul(self, rhs: T) -> TwoD<T> {
        self.map(|c| c * rhs)
    }
}

impl<T: Float> Div<T> for &TwoD<T> {
    type Output = TwoD<T>;

    fn div(self, rhs: T) -> TwoD<T> {
        self.map(|c| c / rhs)
    }
}

impl<T: Float> Neg for &TwoD<T> {
    type Output = TwoD<T>;

    fn neg(self) -> TwoD<T> {
        self.map(|c| -c)
    }
}

impl<T: Float> Add for TwoD<T> {
    type Output = TwoD<T>;

    #[inline]
    fn add(self, rhs: TwoD<T>) -> TwoD<T> {
        &self + &rhs
    }
}

impl<T: Float> Sub for TwoD<T> {
    type Output = TwoD<T>;

    #[inline]
    fn sub(self, rhs: TwoD<T>) -> TwoD<T> {
        &self - &rhs
    }
}

impl<T: Float> Mul<T> for TwoD<T> {
    type Output = TwoD<T>;

    #[inline]
    fn mul(self, rhs: T) -> TwoD<T> {
        &self * rhs
    }
}

impl<T: Float> Div<T> for TwoD<T> {
    type Output = TwoD<T>;

    #[inline]
    fn div(self, rhs: T) -> TwoD<T> {
        &self / rhs
    }
}

impl<T: Float> Neg for TwoD<T> {
    type Output = TwoD<T>;

    #[inline]
    fn neg(self) -> TwoD<T> {
        -&self
    }
}

// ============================================================================
// Display
// ============================================================================

impl<T: Display> Display for TwoD<T> {
    /// One line per x power: `x^i: [c_i0, c_i1, ...]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.order_y + 1;
        for (i, row) in self.coeffs.chunks(w).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "x^{}: [", i)?;
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", c)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
mod serde_repr {
    use super::*;

    /// Wire form: explicit orders plus the row-major buffer.
    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct TwoDRepr<T> {
        pub order_x: usize,
        pub order_y: usize,
        pub coefficients: Vec<T>,
    }

    impl<T: Float> TryFrom<TwoDRepr<T>> for TwoD<T> {
        type Error = PolyError;

        fn try_from(repr: TwoDRepr<T>) -> Result<Self, PolyError> {
            let n = coefficient_count_2d(repr.order_x, repr.order_y).unwrap_or(usize::MAX);
            if repr.coefficients.len() != n {
                return Err(PolyError::CoefficientCount {
                    expected: n,
                    got: repr.coefficients.len(),
                });
            }
            Ok(TwoD {
                order_x: repr.order_x,
                order_y: repr.order_y,
                coeffs: repr.coefficients,
            })
        }
    }

    impl<T> From<TwoD<T>> for TwoDRepr<T> {
        fn from(poly: TwoD<T>) -> Self {
            TwoDRepr {
                order_x: poly.order_x,
                order_y: poly.order_y,
                coefficients: poly.coeffs,
            }
        }
    }
}
