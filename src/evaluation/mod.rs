//! Layer 5: Evaluation
//!
//! # Purpose
//!
//! This layer measures how well a fitted polynomial reproduces its
//! observations: residuals, error norms, and the coefficient of
//! determination.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine
//!   ↓
//! Layer 5: Evaluation ← You are here
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Polynomial
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness-of-fit diagnostics.
pub mod diagnostics;
