//! High-level API for least-squares polynomial fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points. It implements
//! a fluent builder for the numerical options of a fit and a reusable fitter
//! exposing the four fit overloads, plus free functions for the common case
//! of default settings.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `f32` and `f64` through `FloatLinalg`.
//! * **Reusable**: A built [`PolyFit`] is immutable and can serve any number
//!   of fits, concurrently if shared by reference.
//!
//! ## Key concepts
//!
//! * **Overloads**: counted buffers ([`PolyFit::fit_raw`]), containers
//!   ([`PolyFit::fit`]), statically known order ([`PolyFit::fit_fixed`]) and
//!   2D grids ([`PolyFit::fit_2d`]).
//! * **Observation sources**: Anything implementing [`Series`] or [`Grid`]
//!   can be fitted without copying into a specific container first.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolyFitBuilder`] via `PolyFitBuilder::new()`.
//! 2. Chain configuration methods (`.conditioning()`, `.solve_method()`, etc.).
//! 3. Call `.build()` to obtain a validated [`PolyFit`].

// Internal dependencies
use crate::engine::executor::FitExecutor;
use crate::engine::validator::Validator;
use crate::math::linalg::FloatLinalg;

// Publicly re-exported types
pub use crate::engine::executor::FitConfig;
pub use crate::evaluation::diagnostics::FitDiagnostics;
pub use crate::math::linalg::SolveMethod;
pub use crate::math::scaling::Conditioning;
pub use crate::poly::{FixedOneD, OneD, Polynomial, TwoD};
pub use crate::primitives::errors::PolyError;
pub use crate::primitives::source::{Grid, GridView, Series, Transposed};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring polynomial fits.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFitBuilder<T: FloatLinalg> {
    /// Axis conditioning (default: `Normalized`).
    pub conditioning: Option<Conditioning>,

    /// Factorization strategy (default: `NormalEquations`).
    pub solve_method: Option<SolveMethod>,

    /// Singularity threshold on the pivot ratio (default: `n_coeffs * ε`).
    pub rank_tolerance: Option<T>,

    /// Reject non-finite observations (default: true).
    pub check_finite: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for PolyFitBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> PolyFitBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            conditioning: None,
            solve_method: None,
            rank_tolerance: None,
            check_finite: None,
            duplicate_param: None,
        }
    }

    /// Set how each axis is conditioned before the solve.
    pub fn conditioning(mut self, conditioning: Conditioning) -> Self {
        if self.conditioning.is_some() {
            self.duplicate_param = Some("conditioning");
        }
        self.conditioning = Some(conditioning);
        self
    }

    /// Set the factorization strategy.
    ///
    /// - `NormalEquations` (default): QR of `AᵀA`, cheapest for tall systems
    /// - `Householder`: QR of the design matrix itself, better conditioned
    pub fn solve_method(mut self, method: SolveMethod) -> Self {
        if self.solve_method.is_some() {
            self.duplicate_param = Some("solve_method");
        }
        self.solve_method = Some(method);
        self
    }

    /// Set the pivot ratio at or below which a system is reported singular.
    pub fn rank_tolerance(mut self, tolerance: T) -> Self {
        if self.rank_tolerance.is_some() {
            self.duplicate_param = Some("rank_tolerance");
        }
        self.rank_tolerance = Some(tolerance);
        self
    }

    /// Enable or disable the finiteness scan over observations.
    pub fn check_finite(mut self, enabled: bool) -> Self {
        if self.check_finite.is_some() {
            self.duplicate_param = Some("check_finite");
        }
        self.check_finite = Some(enabled);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the fitter.
    pub fn build(self) -> Result<PolyFit<T>, PolyError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate rank tolerance
        if let Some(tol) = self.rank_tolerance {
            Validator::validate_tolerance(tol)?;
        }

        let config = FitConfig {
            conditioning: self.conditioning.unwrap_or_default(),
            solve_method: self.solve_method.unwrap_or_default(),
            rank_tolerance: self.rank_tolerance,
            check_finite: self.check_finite.unwrap_or(true),
        };

        Ok(PolyFit {
            config,
            executor: FitExecutor::from_config(&config),
        })
    }
}

// ============================================================================
// Fitter
// ============================================================================

/// A validated, reusable polynomial fitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyFit<T: FloatLinalg> {
    config: FitConfig<T>,
    executor: FitExecutor<T>,
}

impl<T: FloatLinalg> Default for PolyFit<T> {
    fn default() -> Self {
        Self {
            config: FitConfig::default(),
            executor: FitExecutor::default(),
        }
    }
}

impl<T: FloatLinalg> PolyFit<T> {
    /// Configuration this fitter was built with.
    pub fn config(&self) -> &FitConfig<T> {
        &self.config
    }

    /// Fit a 1D polynomial of `order` to two equal-length containers.
    pub fn fit<X, Y>(&self, x: &X, y: &Y, order: usize) -> Result<OneD<T>, PolyError>
    where
        X: Series<T> + ?Sized,
        Y: Series<T> + ?Sized,
    {
        self.executor.fit_1d(x, y, order)
    }

    /// Fit a 1D polynomial of `order` to the first `count` samples of two buffers.
    pub fn fit_raw(&self, count: usize, x: &[T], y: &[T], order: usize) -> Result<OneD<T>, PolyError> {
        self.executor.fit_1d_count(count, x, y, order)
    }

    /// Fit a polynomial of the statically known order `N`.
    pub fn fit_fixed<const N: usize, X, Y>(&self, x: &X, y: &Y) -> Result<FixedOneD<T, N>, PolyError>
    where
        X: Series<T> + ?Sized,
        Y: Series<T> + ?Sized,
    {
        self.executor.fit_fixed::<N, X, Y>(x, y)
    }

    /// Fit a 2D polynomial of orders `(order_x, order_y)` to three co-shaped grids.
    pub fn fit_2d<GX, GY, GZ>(
        &self,
        x: &GX,
        y: &GY,
        z: &GZ,
        order_x: usize,
        order_y: usize,
    ) -> Result<TwoD<T>, PolyError>
    where
        GX: Grid<T> + ?Sized,
        GY: Grid<T> + ?Sized,
        GZ: Grid<T> + ?Sized,
    {
        self.executor.fit_2d(x, y, z, order_x, order_y)
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Fit a 1D polynomial of `order` with default settings.
pub fn fit<T, X, Y>(x: &X, y: &Y, order: usize) -> Result<OneD<T>, PolyError>
where
    T: FloatLinalg,
    X: Series<T> + ?Sized,
    Y: Series<T> + ?Sized,
{
    FitExecutor::default().fit_1d(x, y, order)
}

/// Fit a 1D polynomial to the first `count` samples of two buffers with default settings.
pub fn fit_raw<T: FloatLinalg>(count: usize, x: &[T], y: &[T], order: usize) -> Result<OneD<T>, PolyError> {
    FitExecutor::default().fit_1d_count(count, x, y, order)
}

/// Fit a polynomial of the statically known order `N` with default settings.
pub fn fit_fixed<const N: usize, T, X, Y>(x: &X, y: &Y) -> Result<FixedOneD<T, N>, PolyError>
where
    T: FloatLinalg,
    X: Series<T> + ?Sized,
    Y: Series<T> + ?Sized,
{
    FitExecutor::default().fit_fixed::<N, X, Y>(x, y)
}

/// Fit a 2D polynomial to three co-shaped grids with default settings.
pub fn fit_2d<T, GX, GY, GZ>(
    x: &GX,
    y: &GY,
    z: &GZ,
    order_x: usize,
    order_y: usize,
) -> Result<TwoD<T>, PolyError>
where
    T: FloatLinalg,
    GX: Grid<T> + ?Sized,
    GY: Grid<T> + ?Sized,
    GZ: Grid<T> + ?Sized,
{
    FitExecutor::default().fit_2d(x, y, z, order_x, order_y)
}
