//! Layer 4: Algorithms
//!
//! # Purpose
//!
//! This layer holds the fitting algorithms proper:
//! - Design matrix construction for the 1D power basis and the 2D tensor basis
//! - Least-squares solvers with axis conditioning and coefficient re-expansion
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
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Polynomial
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Design (Vandermonde-style) matrices.
pub mod design;

/// Least-squares solvers.
pub mod lsq;
