//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical building blocks used by the solvers:
//! - Rank-checked least-squares solves on top of nalgebra
//! - Axis conditioning (centering and scaling) and its inverse on coefficients
//!
//! These carry no polynomial-fitting policy of their own.
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
//! Layer 3: Polynomial
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Linear algebra backend (nalgebra).
pub mod linalg;

/// Axis conditioning and coefficient re-expansion.
pub mod scaling;
