//! Execution engine for polynomial fits.
//!
//! ## Purpose
//!
//! This module is the single orchestration point behind every fit overload.
//! It validates the observations, runs the least-squares solver, reports
//! conditioning through the log facade, and wraps the coefficients in the
//! requested polynomial type.
//!
//! ## Design notes
//!
//! * **One path**: Slice, container, counted, and fixed-order 1D fits all go
//!   through [`FitExecutor::fit_1d`], so equal data gives equal bits.
//! * **Stateless**: The executor holds configuration only; concurrent fits
//!   on disjoint data share nothing mutable.
//! * **Logging**: `debug!` per fit, `warn!` when the pivot ratio comes within
//!   three orders of magnitude of the singularity threshold.
//!
//! ## Invariants
//!
//! * No linear algebra runs before validation passes.
//! * Caller buffers are only borrowed for the duration of a call.
//!
//! ## Non-goals
//!
//! * This module does not retry with a lower order on failure.

// External dependencies
use log::{debug, warn};

// Internal dependencies
use crate::algorithms::lsq::{SolveSettings, Solution, least_squares_1d, least_squares_2d};
use crate::engine::validator::Validator;
use crate::math::linalg::{FloatLinalg, SolveMethod};
use crate::math::scaling::Conditioning;
use crate::poly::{FixedOneD, OneD, TwoD, coefficient_count, coefficient_count_2d};
use crate::primitives::errors::PolyError;
use crate::primitives::source::{Grid, Series};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration shared by all fit operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitConfig<T> {
    /// Axis conditioning before the solve.
    pub conditioning: Conditioning,

    /// Factorization strategy.
    pub solve_method: SolveMethod,

    /// Singularity threshold on the pivot ratio (`None` = `n_coeffs * ε`).
    pub rank_tolerance: Option<T>,

    /// Reject non-finite observations before solving.
    pub check_finite: bool,
}

impl<T> Default for FitConfig<T> {
    fn default() -> Self {
        Self {
            conditioning: Conditioning::default(),
            solve_method: SolveMethod::default(),
            rank_tolerance: None,
            check_finite: true,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs validated fits under a fixed configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitExecutor<T> {
    settings: SolveSettings<T>,
    check_finite: bool,
}

impl<T: FloatLinalg> Default for FitExecutor<T> {
    fn default() -> Self {
        Self::from_config(&FitConfig::default())
    }
}

impl<T: FloatLinalg> FitExecutor<T> {
    /// Create an executor from a configuration.
    pub fn from_config(config: &FitConfig<T>) -> Self {
        Self {
            settings: SolveSettings {
                conditioning: config.conditioning,
                method: config.solve_method,
                rank_tolerance: config.rank_tolerance,
            },
            check_finite: config.check_finite,
        }
    }

    /// Numerical settings used by every solve.
    #[cfg(feature = "dev")]
    pub fn settings(&self) -> &SolveSettings<T> {
        &self.settings
    }

    /// Fit a 1D polynomial of the given order to two equal-length series.
    pub fn fit_1d<X, Y>(&self, x: &X, y: &Y, order: usize) -> Result<OneD<T>, PolyError>
    where
        X: Series<T> + ?Sized,
        Y: Series<T> + ?Sized,
    {
        Validator::validate_series(x, y)?;
        // An order past `usize::MAX - 1` can never be satisfied.
        let n_coeffs = coefficient_count(order).unwrap_or(usize::MAX);
        Validator::validate_observations(x.len(), n_coeffs)?;
        if self.check_finite {
            Validator::validate_finite_series(x, "x")?;
            Validator::validate_finite_series(y, "y")?;
        }

        debug!(
            "fitting 1D polynomial: observations={} order={} conditioning={:?} method={:?}",
            x.len(),
            order,
            self.settings.conditioning,
            self.settings.method
        );

        let solution = least_squares_1d(x, y, order, &self.settings)?;
        report_conditioning(&solution);
        Ok(OneD::from(solution.coefficients))
    }

    /// Fit using only the first `count` samples of each buffer.
    pub fn fit_1d_count(
        &self,
        count: usize,
        x: &[T],
        y: &[T],
        order: usize,
    ) -> Result<OneD<T>, PolyError> {
        Validator::validate_count(count, x.len(), y.len())?;
        self.fit_1d(&x[..count], &y[..count], order)
    }

    /// Fit a polynomial of the statically known order `N`.
    pub fn fit_fixed<const N: usize, X, Y>(&self, x: &X, y: &Y) -> Result<FixedOneD<T, N>, PolyError>
    where
        X: Series<T> + ?Sized,
        Y: Series<T> + ?Sized,
    {
        let poly = self.fit_1d(x, y, N)?;
        FixedOneD::try_from(&poly)
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
        Validator::validate_grids(x, y, z)?;
        let n_coeffs = coefficient_count_2d(order_x, order_y).unwrap_or(usize::MAX);
        Validator::validate_observations(x.size(), n_coeffs)?;
        if self.check_finite {
            Validator::validate_finite_grid(x, "x")?;
            Validator::validate_finite_grid(y, "y")?;
            Validator::validate_finite_grid(z, "z")?;
        }

        debug!(
            "fitting 2D polynomial: grid={}x{} orders=({}, {}) conditioning={:?} method={:?}",
            x.rows(),
            x.cols(),
            order_x,
            order_y,
            self.settings.conditioning,
            self.settings.method
        );

        let solution = least_squares_2d(x, y, z, order_x, order_y, &self.settings)?;
        report_conditioning(&solution);
        TwoD::with_orders(order_x, order_y, &solution.coefficients)
    }
}

fn report_conditioning<T: FloatLinalg>(solution: &Solution<T>) {
    let margin = T::from(1e3).unwrap_or_else(T::one);
    if solution.pivot_ratio < solution.tolerance * margin {
        warn!(
            "ill-conditioned fit: pivot_ratio={:?} tolerance={:?}",
            solution.pivot_ratio, solution.tolerance
        );
    }
}
