//! Layer 6: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a fit from borrowed observations to a finished
//! polynomial:
//! - Input validation (emptiness, lengths, shapes, counts, finiteness)
//! - Execution of the least-squares solve under one configuration
//! - Wrapping of coefficients into `OneD`, `FixedOneD`, or `TwoD`
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Engine ← You are here
//!   ↓
//! Layer 5: Evaluation
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Polynomial
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit orchestration.
pub mod executor;

/// Input and parameter validation.
pub mod validator;
