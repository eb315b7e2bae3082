//! Tests for the fixed-order polynomial type.
//!
//! These tests verify `FixedOneD<T, N>`:
//! - Construction only from exactly `N + 1` coefficients
//! - Agreement with `OneD` through the shared `Polynomial` trait
//! - Equality against polynomials, slices, and native arrays
//!
//! ## Test Organization
//!
//! 1. **Construction** - Direct, checked, and converted construction
//! 2. **Polynomial Capability** - Evaluation and assignment
//! 3. **Equality** - Exact, checked, and approximate comparison

use approx::assert_relative_eq;

use polyfit_rs::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test direct construction from constant and higher terms.
#[test]
fn test_new() {
    let p = FixedOneD::new(5.0, [-4.0, 3.0, -1.0]);

    assert_eq!(p.order(), 3);
    assert_eq!(p.coefficient(0), 5.0);
    assert_eq!(p.coefficient(3), -1.0);
    assert_eq!(p.coefficient(4), 0.0);
    assert_eq!(p[2], 3.0);
    assert_eq!(
        p.iter().copied().collect::<Vec<f64>>(),
        vec![5.0, -4.0, 3.0, -1.0]
    );
}

/// Test the zero polynomial of order zero.
#[test]
fn test_zeros_order_zero() {
    let p = FixedOneD::<f64, 0>::zeros();

    assert_eq!(p.order(), 0);
    assert_eq!(p, [0.0]);
}

/// Test checked construction from slices of the right and wrong length.
#[test]
fn test_from_slice() {
    let p = FixedOneD::<f64, 2>::from_slice(&[1.0, 2.0, 3.0]).unwrap();
    assert_eq!(p, [1.0, 2.0, 3.0]);

    let err = FixedOneD::<f64, 2>::from_slice(&[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        PolyError::FixedOrderMismatch {
            expected: 3,
            got: 2
        }
    );

    let err = FixedOneD::<f64, 2>::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap_err();
    assert_eq!(
        err,
        PolyError::FixedOrderMismatch {
            expected: 3,
            got: 4
        }
    );
}

/// Test conversion to and from the dynamic polynomial.
#[test]
fn test_one_d_conversions() {
    let dynamic = OneD::from([1.0, 2.0, 3.0]);

    let fixed = FixedOneD::<f64, 2>::try_from(&dynamic).unwrap();
    assert_eq!(fixed, dynamic);

    let back: OneD<f64> = fixed.into();
    assert_eq!(back, dynamic);

    assert!(FixedOneD::<f64, 3>::try_from(dynamic).is_err());
}

// ============================================================================
// Polynomial Capability Tests
// ============================================================================

/// Test that evaluation matches the dynamic polynomial bit for bit.
#[test]
fn test_eval_matches_one_d() {
    let fixed = FixedOneD::new(0.5, [-1.25, 3.0, 0.75]);
    let dynamic = fixed.to_one_d();

    for &x in &[-2.0, -0.3, 0.0, 1.7, 40.0] {
        assert_eq!(fixed.eval(x), dynamic.eval(x));
    }
    assert_eq!(fixed.eval_many(&[1.0, 2.0]), dynamic.eval_many(&[1.0, 2.0]));
}

/// Test checked assignment.
///
/// A wrong-length sequence is rejected and leaves the polynomial untouched.
#[test]
fn test_assign() {
    let mut p = FixedOneD::new(1.0, [2.0]);

    p.assign(&[3.0, 4.0]).unwrap();
    assert_eq!(p, [3.0, 4.0]);

    let err = p.assign(&[5.0, 6.0, 7.0]).unwrap_err();
    assert_eq!(
        err,
        PolyError::FixedOrderMismatch {
            expected: 2,
            got: 3
        }
    );
    assert_eq!(p, [3.0, 4.0]);
}

/// Test generic code over the shared capability.
#[test]
fn test_generic_over_polynomial() {
    fn integrate_unit<P: Polynomial<f64>>(p: &P) -> f64 {
        (0..=p.order())
            .map(|i| p.coefficient(i) / (i + 1) as f64)
            .sum()
    }

    let fixed = FixedOneD::new(1.0, [2.0, 3.0]);
    let dynamic = OneD::from([1.0, 2.0, 3.0]);

    assert_eq!(integrate_unit(&fixed), 3.0);
    assert_eq!(integrate_unit(&fixed), integrate_unit(&dynamic));
    assert_relative_eq!(dynamic.integrate(0.0, 1.0), integrate_unit(&fixed));
}

// ============================================================================
// Equality Tests
// ============================================================================

/// Test equality against sequences of the right and wrong length.
#[test]
fn test_equality_against_sequences() {
    let p = FixedOneD::new(1.0, [2.0, 3.0]);

    assert_eq!(p, [1.0, 2.0, 3.0]);
    assert!(p == [1.0, 2.0, 3.0][..]);
    assert!(p != [1.0, 2.0]);
    assert!(p != [1.0, 2.0, 3.0, 0.0]);
    assert!(p != OneD::from([1.0, 2.0, 3.0, 0.0]));
    assert!(OneD::from([1.0, 2.0, 3.0]) == p);
}

/// Test the checked comparison.
#[test]
fn test_eq_coefficients() {
    let p = FixedOneD::new(1.0, [2.0, 3.0]);

    assert!(p.eq_coefficients(&[1.0, 2.0, 3.0]).unwrap());
    assert!(!p.eq_coefficients(&[1.0, 2.0, 3.5]).unwrap());
    assert_eq!(
        p.eq_coefficients(&[1.0, 2.0]).unwrap_err(),
        PolyError::FixedOrderMismatch {
            expected: 3,
            got: 2
        }
    );
}

/// Test approximate comparison.
#[test]
fn test_approximate_equality() {
    let p = FixedOneD::new(1.0, [0.1 + 0.2]);
    let q = FixedOneD::new(1.0, [0.3]);

    assert_ne!(p, q);
    assert_relative_eq!(p, q);
}

/// Test formatting.
#[test]
fn test_display() {
    let p = FixedOneD::new(1.0, [2.0, 3.0]);

    assert_eq!(format!("{}", p), "1 + 2*x + 3*x^2");
}
