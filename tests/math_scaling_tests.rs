#![cfg(feature = "dev")]
//! Tests for axis conditioning.
//!
//! These tests verify the affine maps used to condition fits:
//! - Mapping sample extremes onto [-1, 1]
//! - Fallbacks for degenerate and non-finite axes
//! - Re-expansion of coefficients onto raw coordinates
//!
//! ## Test Organization
//!
//! 1. **Map Construction** - Bounds, series, and grids
//! 2. **Re-expansion** - Affine composition of coefficient vectors

use approx::assert_relative_eq;

use polyfit_rs::internals::math::scaling::{AffineMap, Conditioning, compose_affine};

// ============================================================================
// Map Construction Tests
// ============================================================================

/// Test that bounds map onto [-1, 1].
#[test]
fn test_from_bounds() {
    let map = AffineMap::from_bounds(10.0, 30.0);

    assert_eq!(map.center, 20.0);
    assert_eq!(map.scale, 10.0);
    assert_eq!(map.apply(10.0), -1.0);
    assert_eq!(map.apply(20.0), 0.0);
    assert_eq!(map.apply(30.0), 1.0);
}

/// Test that a zero-width axis keeps a unit scale.
///
/// Every sample then maps to zero and the solver reports the singularity.
#[test]
fn test_from_bounds_degenerate() {
    let map = AffineMap::from_bounds(5.0, 5.0);

    assert_eq!(map.scale, 1.0);
    assert_eq!(map.center, 5.0);
    assert_eq!(map.apply(5.0), 0.0);
}

/// Test that non-finite bounds fall back to the identity.
#[test]
fn test_from_bounds_non_finite() {
    let map = AffineMap::from_bounds(f64::NEG_INFINITY, f64::INFINITY);

    assert!(map.is_identity());
}

/// Test maps chosen from series under both conditioning modes.
#[test]
fn test_from_series() {
    let x = [3.0, 1.0, 2.0];

    let raw = AffineMap::from_series(&x[..], Conditioning::Raw);
    assert!(raw.is_identity());

    let normalized = AffineMap::from_series(&x[..], Conditioning::Normalized);
    assert_eq!(normalized.center, 2.0);
    assert_eq!(normalized.scale, 1.0);
    assert!(!normalized.is_identity());
}

/// Test maps chosen from grids.
#[test]
fn test_from_grid() {
    let g = [[-4.0, 0.0], [2.0, 8.0]];

    let map = AffineMap::from_grid(&g, Conditioning::Normalized);

    assert_eq!(map.center, 2.0);
    assert_eq!(map.scale, 6.0);
    assert!(AffineMap::from_grid(&g, Conditioning::Raw).is_identity());
}

/// Test that the default conditioning normalizes.
#[test]
fn test_default_conditioning() {
    assert_eq!(Conditioning::default(), Conditioning::Normalized);
}

// ============================================================================
// Re-expansion Tests
// ============================================================================

/// Test affine composition against a hand expansion.
#[test]
fn test_compose_affine() {
    // p(t) = 1 + 2t + 3t^2 at t = 1 + 2x: 6 + 16x + 12x^2
    let out = compose_affine(&[1.0, 2.0, 3.0], 1.0, 2.0);

    assert_eq!(out, vec![6.0, 16.0, 12.0]);
}

/// Test composition of empty and constant polynomials.
#[test]
fn test_compose_affine_trivial() {
    assert!(compose_affine::<f64>(&[], 1.0, 2.0).is_empty());
    assert_eq!(compose_affine(&[7.0], 3.0, -1.0), vec![7.0]);
}

/// Test that expansion rewrites `t` in terms of `x`.
#[test]
fn test_expand() {
    // t = (x - 20) / 10 = -2 + 0.1 x
    let map = AffineMap::from_bounds(10.0, 30.0);

    let out = map.expand(&[0.0, 1.0]);
    assert_relative_eq!(out[0], -2.0);
    assert_relative_eq!(out[1], 0.1);
}

/// Test that expanded coefficients evaluate like the original in `t`.
#[test]
fn test_expand_matches_mapped_eval() {
    let map = AffineMap::from_bounds(90.0, 110.0);
    let in_t = [0.5, -1.5, 2.0, 0.25];
    let in_x = map.expand(&in_t);

    let horner = |c: &[f64], v: f64| c.iter().rev().fold(0.0, |acc, &k| acc * v + k);
    for &x in &[90.0, 99.5, 104.0, 110.0] {
        assert_relative_eq!(
            horner(&in_x, x),
            horner(&in_t, map.apply(x)),
            epsilon = 1e-9
        );
    }
}

/// Test that the identity map copies coefficients unchanged.
#[test]
fn test_expand_identity() {
    let map = AffineMap::<f64>::identity();

    assert_eq!(map.expand(&[1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0]);
}
