//! Tests for the two-dimensional polynomial type.
//!
//! These tests verify `TwoD`:
//! - Construction from orders and buffers or from coefficient grids
//! - Evaluation and partial evaluation along either axis
//! - Partial derivatives, axis swapping, and variable scaling
//! - Equality, arithmetic, and formatting
//!
//! ## Test Organization
//!
//! 1. **Construction** - Buffers, grids, and coefficient indexing
//! 2. **Evaluation** - Full and partial evaluation
//! 3. **Calculus and Transformations** - Derivatives, flips, scaling
//! 4. **Equality and Arithmetic** - Comparison and operators

use approx::{assert_relative_eq, relative_eq};
use nalgebra::DMatrix;

use polyfit_rs::prelude::*;

/// `1 + 2y + 3x + 4xy + 5x^2 + 6x^2 y`
fn sample() -> TwoD<f64> {
    TwoD::with_orders(2, 1, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
}

fn direct_eval(p: &TwoD<f64>, x: f64, y: f64) -> f64 {
    let mut sum = 0.0;
    for i in 0..=p.order_x() {
        for j in 0..=p.order_y() {
            sum += p.coefficient(i, j) * x.powi(i as i32) * y.powi(j as i32);
        }
    }
    sum
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test the zero polynomial.
#[test]
fn test_zeros() {
    let p = TwoD::<f64>::zeros(2, 3);

    assert_eq!((p.order_x(), p.order_y()), (2, 3));
    assert_eq!(p.coefficients().len(), 12);
    assert!(p.coefficients().iter().all(|&c| c == 0.0));
}

/// Test row-major layout of the coefficient buffer.
#[test]
fn test_with_orders_layout() {
    let p = sample();

    assert_eq!(p.coefficient(0, 0), 1.0);
    assert_eq!(p.coefficient(0, 1), 2.0);
    assert_eq!(p.coefficient(1, 0), 3.0);
    assert_eq!(p.coefficient(2, 1), 6.0);
    assert_eq!(p[(1, 1)], 4.0);
    assert_eq!(p.coefficient(3, 0), 0.0);
    assert_eq!(p.coefficient(0, 2), 0.0);
}

/// Test that a short buffer is rejected.
#[test]
fn test_with_orders_short_buffer() {
    let err = TwoD::with_orders(1, 1, &[1.0, 2.0, 3.0]).unwrap_err();

    assert_eq!(
        err,
        PolyError::CoefficientCount {
            expected: 4,
            got: 3
        }
    );
}

/// Test that orders with no representable coefficient count are rejected.
#[test]
fn test_with_orders_overflow() {
    let half = usize::MAX / 2;

    for (nx, ny) in [(half, half), (usize::MAX, 0), (0, usize::MAX)] {
        let err = TwoD::with_orders(nx, ny, &[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            PolyError::CoefficientCount {
                expected: usize::MAX,
                got: 3
            }
        );
    }
}

/// Test construction from coefficient grids.
#[test]
fn test_from_grid() {
    let nested = [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
    let matrix = DMatrix::from_row_slice(3, 2, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

    assert_eq!(TwoD::from_grid(&nested).unwrap(), sample());
    assert_eq!(TwoD::from_grid(&matrix).unwrap(), sample());

    let empty = DMatrix::<f64>::zeros(0, 2);
    assert!(TwoD::from_grid(&empty).is_err());
}

/// Test that indexing outside the orders panics.
#[test]
#[should_panic]
fn test_index_out_of_range() {
    let p = sample();
    let _value: f64 = p[(0, 2)];
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test evaluation against the double sum.
#[test]
fn test_eval() {
    let p = sample();

    // At (1, 1) every term contributes its coefficient.
    assert_eq!(p.eval(1.0, 1.0), 21.0);
    assert_eq!(p.eval(0.0, 0.0), 1.0);

    for &(x, y) in &[(2.0, -1.0), (-0.5, 3.0), (1.25, 0.75)] {
        assert_relative_eq!(p.eval(x, y), direct_eval(&p, x, y), epsilon = 1e-12);
    }
}

/// Test batch evaluation and its length check.
#[test]
fn test_eval_many() {
    let p = sample();

    let values = p.eval_many(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
    assert_eq!(values, vec![1.0, 21.0]);

    let err = p.eval_many(&[0.0, 1.0], &[0.0]).unwrap_err();
    assert_eq!(err, PolyError::MismatchedInputs { x_len: 2, y_len: 1 });
}

/// Test partial evaluation along each axis.
#[test]
fn test_partial_evaluation() {
    let p = sample();

    // y = 2: 5 + 11x + 17x^2
    let in_x = p.at_y(2.0);
    assert_eq!(in_x, [5.0, 11.0, 17.0]);

    // x = 2: (1 + 6 + 20) + (2 + 8 + 24) y
    let in_y = p.at_x(2.0);
    assert_eq!(in_y, [27.0, 34.0]);

    assert_relative_eq!(in_x.eval(3.0), p.eval(3.0, 2.0));
    assert_relative_eq!(in_y.eval(-1.0), p.eval(2.0, -1.0));
}

// ============================================================================
// Calculus and Transformation Tests
// ============================================================================

/// Test partial derivatives.
#[test]
fn test_derivatives() {
    let p = sample();

    // d/dx: 3 + 4y + 10x + 12xy
    let dx = p.derivative_x();
    assert_eq!((dx.order_x(), dx.order_y()), (1, 1));
    assert_eq!(dx.coefficients(), &[3.0, 4.0, 10.0, 12.0]);

    // d/dy: 2 + 4x + 6x^2
    let dy = p.derivative_y();
    assert_eq!((dy.order_x(), dy.order_y()), (2, 0));
    assert_eq!(dy.coefficients(), &[2.0, 4.0, 6.0]);

    // d2/dxdy: 4 + 12x
    let dxy = p.derivative_xy();
    assert_eq!(dxy.coefficients(), &[4.0, 12.0]);
}

/// Test that derivatives of constants along an axis vanish.
#[test]
fn test_derivative_of_axis_constant() {
    let p = TwoD::with_orders(0, 1, &[1.0, 2.0]).unwrap();

    let dx = p.derivative_x();
    assert_eq!((dx.order_x(), dx.order_y()), (0, 1));
    assert_eq!(dx.coefficients(), &[0.0, 0.0]);
}

/// Test swapping the axes.
#[test]
fn test_flip_xy() {
    let p = sample();
    let q = p.flip_xy();

    assert_eq!((q.order_x(), q.order_y()), (1, 2));
    assert_eq!(q.coefficient(1, 2), p.coefficient(2, 1));
    assert_eq!(q.eval(0.5, 3.0), p.eval(3.0, 0.5));
    assert_eq!(q.flip_xy(), p);
}

/// Test variable scaling, `q(x, y) = p(x / sx, y / sy)`.
#[test]
fn test_scale_variable() {
    let p = sample();
    let q = p.scale_variable(2.0, 4.0);

    assert_relative_eq!(q.eval(6.0, 8.0), p.eval(3.0, 2.0), epsilon = 1e-12);
}

/// Test truncation of trailing zero rows and columns.
#[test]
fn test_truncate_to_non_zeros() {
    let p = TwoD::with_orders(2, 2, &[1.0, 2.0, 0.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();

    let t = p.truncate_to_non_zeros();

    assert_eq!((t.order_x(), t.order_y()), (1, 1));
    assert_eq!(t.coefficients(), &[1.0, 2.0, 3.0, 0.0]);
    assert_eq!(
        TwoD::<f64>::zeros(2, 2).truncate_to_non_zeros(),
        TwoD::zeros(0, 0)
    );
}

// ============================================================================
// Equality and Arithmetic Tests
// ============================================================================

/// Test exact and approximate equality.
#[test]
fn test_equality() {
    let p = sample();
    let mut nudged: Vec<f64> = p.coefficients().to_vec();
    nudged[3] += 1e-14;
    let q = TwoD::with_orders(2, 1, &nudged).unwrap();

    assert_ne!(p, q);
    assert_relative_eq!(p, q, epsilon = 1e-12);
    assert!(!relative_eq!(p, p.flip_xy()));
}

/// Test addition with differing orders and scalar operators.
#[test]
fn test_arithmetic() {
    let p = TwoD::with_orders(1, 0, &[1.0, 2.0]).unwrap();
    let q = TwoD::with_orders(0, 1, &[3.0, 4.0]).unwrap();

    let sum = &p + &q;
    assert_eq!((sum.order_x(), sum.order_y()), (1, 1));
    assert_eq!(sum.coefficients(), &[4.0, 4.0, 2.0, 0.0]);

    let diff = p.clone() - q.clone();
    assert_eq!(diff.coefficients(), &[-2.0, -4.0, 2.0, 0.0]);

    assert_eq!((&p * 2.0).coefficients(), &[2.0, 4.0]);
    assert_eq!((p.clone() / 2.0).coefficients(), &[0.5, 1.0]);
    assert_eq!((-p).coefficients(), &[-1.0, -2.0]);
}

/// Test formatting, one line per power of x.
#[test]
fn test_display() {
    let p = TwoD::with_orders(1, 1, &[1.0, 2.0, 3.5, 4.0]).unwrap();

    assert_eq!(format!("{}", p), "x^0: [1, 2]\nx^1: [3.5, 4]");
}
