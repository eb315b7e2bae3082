//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the foundation every other layer builds on:
//! - The crate-wide error type
//! - Observation-source capabilities (`Series`, `Grid`) and their adapters
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error taxonomy for construction and fitting.
pub mod errors;

/// Read-only observation sources.
pub mod source;
