//! # polyfit-rs: Least-Squares Polynomial Fitting for Rust
//!
//! Dense one- and two-dimensional polynomial types together with a
//! least-squares fitting engine that stays accurate on data sampled far from
//! the origin.
//!
//! ## What is in the box?
//!
//! - [`OneD`](prelude::OneD): `sum c_i x^i` with a dynamic order
//! - [`FixedOneD`](prelude::FixedOneD): the same with a compile-time order and inline storage
//! - [`TwoD`](prelude::TwoD): `sum c_ij x^i y^j` with independent orders per axis
//! - Fit entry points for counted buffers, containers, a fixed order, and 2D grids
//!
//! **How a fit works:**
//!
//! 1. Validate the observations (lengths or shapes, count, finiteness)
//! 2. Map each independent axis onto [-1, 1]
//! 3. Build the design matrix and solve the least-squares system
//! 4. Reject rank-deficient systems instead of returning garbage
//! 5. Re-expand the coefficients onto the raw coordinates
//!
//! ## Quick Start
//!
//! ### 1D fit
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//! use approx::assert_relative_eq;
//!
//! let x = [1.0, -1.0, 2.0, -2.0];
//! let y = [3.0, 13.0, 1.0, 33.0];
//!
//! let poly = fit(&x, &y, 3)?;
//!
//! assert_relative_eq!(poly, OneD::from([5.0, -4.0, 3.0, -1.0]), epsilon = 1e-9);
//! assert_relative_eq!(poly.eval(0.0), 5.0, epsilon = 1e-9);
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ### Fixed order
//!
//! The order comes from the type; the result compares exactly against the
//! dynamic fit of the same data.
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! let y = vec![1.0, 2.9, 9.1, 19.2, 32.8];
//!
//! let fixed: FixedOneD<f64, 2> = fit_fixed(&x, &y)?;
//! let dynamic = fit(&x, &y, 2)?;
//!
//! assert_eq!(fixed, dynamic);
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ### 2D fit
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//! use approx::assert_relative_eq;
//!
//! let x = [[0.0, 0.0, 0.0], [1.0, 1.0, 1.0], [2.0, 2.0, 2.0]];
//! let y = [[0.0, 1.0, 2.0], [0.0, 1.0, 2.0], [0.0, 1.0, 2.0]];
//! let mut z = [[0.0; 3]; 3];
//! for r in 0..3 {
//!     for c in 0..3 {
//!         let (xv, yv) = (x[r][c], y[r][c]);
//!         z[r][c] = 1.0 + 2.0 * xv + 3.0 * yv + 4.0 * xv * yv;
//!     }
//! }
//!
//! let poly = fit_2d(&x, &y, &z, 1, 1)?;
//!
//! assert_relative_eq!(poly.coefficient(1, 1), 4.0, epsilon = 1e-9);
//! assert_relative_eq!(poly.eval(0.5, 0.5), 4.5, epsilon = 1e-9);
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fit returns `Result<_, PolyError>`. Failures are reported before any
//! linear algebra runs when they can be detected from the input alone:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//!
//! let x = [1.0, 2.0];
//! let y = [1.0, 4.0];
//!
//! match fit(&x, &y, 3) {
//!     Ok(poly) => println!("fitted: {}", poly),
//!     Err(PolyError::Underdetermined { observations, coefficients }) => {
//!         assert_eq!((observations, coefficients), (2, 4));
//!     }
//!     Err(e) => panic!("unexpected error: {}", e),
//! }
//! ```
//!
//! ## Builder
//!
//! The free functions use default settings. For anything else, configure a
//! reusable fitter:
//!
//! ```rust
//! use polyfit_rs::prelude::*;
//! # let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
//! # let y = vec![1.0, 2.9, 9.1, 19.2, 32.8];
//!
//! let fitter = PolyFitBuilder::new()
//!     .conditioning(Normalized)     // Map axes onto [-1, 1] (default)
//!     .solve_method(Householder)    // QR of the design matrix
//!     .rank_tolerance(1e-12)        // Pivot ratio treated as singular
//!     .check_finite(true)           // Reject NaN/inf observations (default)
//!     .build()?;
//!
//! let poly = fitter.fit(&x, &y, 2)?;
//! let diagnostics = FitDiagnostics::from_1d(&poly, &x, &y)?;
//! println!("{}", diagnostics);
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter          | Default            | Options                           | Description                                   |
//! |--------------------|--------------------|-----------------------------------|-----------------------------------------------|
//! | **conditioning**   | `Normalized`       | `Normalized`, `Raw`               | Axis mapping before the solve                 |
//! | **solve_method**   | `NormalEquations`  | `NormalEquations`, `Householder`  | Factorization strategy (prefer `Householder` above order ~15) |
//! | **rank_tolerance** | `n_coeffs * ε`     | (0, 1)                            | Pivot ratio at or below which a fit is singular |
//! | **check_finite**   | true               | true/false                        | Scan observations for NaN and infinities      |
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments with `alloc`:
//!
//! ```toml
//! [dependencies]
//! polyfit-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for `OneD` and `TwoD`
//! - `dev`: exposes the `internals` module for testing

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error taxonomy and observation sources.
//
// Contains `PolyError` and the `Series` / `Grid` capabilities with their
// adapters over slices, arrays, and nalgebra containers.
mod primitives;

// Layer 2: Math - pure numerical building blocks.
//
// Contains the nalgebra least-squares bridge and axis conditioning.
mod math;

// Layer 3: Polynomial - the value types a fit produces.
//
// Contains `OneD`, `FixedOneD`, `TwoD`, and the shared `Polynomial` trait.
mod poly;

// Layer 4: Algorithms - design matrices and least-squares solvers.
mod algorithms;

// Layer 5: Evaluation - goodness-of-fit diagnostics.
mod evaluation;

// Layer 6: Engine - validation and fit orchestration.
mod engine;

// High-level fluent API for polynomial fitting.
//
// Provides the `PolyFitBuilder` and the free fit functions.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard polyfit prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polyfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        Conditioning,
        Conditioning::{Normalized, Raw},
        FitConfig, FitDiagnostics, FixedOneD, Grid, GridView, OneD, PolyError, PolyFit, PolyFitBuilder,
        Polynomial, Series, SolveMethod,
        SolveMethod::{Householder, NormalEquations},
        Transposed, TwoD, fit, fit_2d, fit_fixed, fit_raw,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal polynomial types.
    pub mod poly {
        pub use crate::poly::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
