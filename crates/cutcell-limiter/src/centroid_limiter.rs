//! Centroid-aware limiter factor for one cell and component.
//!
//! For every connected neighbour the unlimited reconstruction is evaluated
//! at that neighbour's true centroid:
//!
//! ```text
//! d_axis = (centroid(nb, axis) - centroid(cell, axis)) + offset_axis
//! q_hat  = state + sum_axis d_axis * slope[axis]
//! ```
//!
//! Predictions outside the neighbourhood bounds (by more than an absolute
//! slack) are passed to [`alpha_stencil_with_tolerance`], and the smallest
//! factor wins. The factor is broadcast to every axis.
//!
//! Use [`centroid_limiter`] for the default tolerances, or configure a
//! [`CentroidLimiter`] via [`CentroidLimiter::builder`]:
//!
//! ```
//! use cutcell_core::SpaceDim;
//! use cutcell_limiter::CentroidLimiter;
//!
//! let limiter = CentroidLimiter::builder()
//!     .dim(SpaceDim::Three)
//!     .bounds_slack(1e-10)
//!     .build()
//!     .unwrap();
//! assert_eq!(limiter.relative_tolerance(), 1e-12);
//! ```

use crate::alpha::{alpha_stencil_with_tolerance, DEFAULT_RELATIVE_TOLERANCE};
use crate::bounds::{neighborhood_bounds, NeighborhoodBounds};
use cutcell_core::{
    AxisTuple, CentroidAccess, Connectivity, FieldAccess, IntVect, Offset, SpaceDim,
};

/// Absolute slack by which a prediction may leave the bounds before it is
/// limited.
pub const DEFAULT_BOUNDS_SLACK: f64 = 1.0e-12;

/// Limiter factors for one `(cell, component)` pair, one per axis.
///
/// Uses [`DEFAULT_RELATIVE_TOLERANCE`] and [`DEFAULT_BOUNDS_SLACK`].
/// `slopes` holds one entry per active axis.
pub fn centroid_limiter<F, C, G>(
    cell: IntVect,
    comp: usize,
    dim: SpaceDim,
    field: &F,
    connectivity: &C,
    slopes: &[f64],
    centroids: &G,
) -> AxisTuple
where
    F: FieldAccess + ?Sized,
    C: Connectivity + ?Sized,
    G: CentroidAccess + ?Sized,
{
    CentroidLimiter::new(dim).limit(
        cell,
        comp,
        &LimiterInputs::new(field, connectivity, centroids),
        slopes,
    )
}

/// Read-only data a limiter evaluation draws on, besides the slopes.
pub struct LimiterInputs<'a, F: ?Sized, C: ?Sized, G: ?Sized> {
    /// Cell-average values.
    pub field: &'a F,
    /// Neighbour reachability.
    pub connectivity: &'a C,
    /// Centroid offsets.
    pub centroids: &'a G,
}

impl<'a, F: ?Sized, C: ?Sized, G: ?Sized> LimiterInputs<'a, F, C, G> {
    /// Bundle the three views.
    pub fn new(field: &'a F, connectivity: &'a C, centroids: &'a G) -> Self {
        Self {
            field,
            connectivity,
            centroids,
        }
    }
}

impl<F: ?Sized, C: ?Sized, G: ?Sized> Clone for LimiterInputs<'_, F, C, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized, C: ?Sized, G: ?Sized> Copy for LimiterInputs<'_, F, C, G> {}

/// Factors together with the bounds they were derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct LimitOutcome {
    /// One identical factor per active axis.
    pub factors: AxisTuple,
    /// Phase-one neighbourhood bounds, including the per-axis cut tally.
    pub bounds: NeighborhoodBounds,
}

impl LimitOutcome {
    /// The shared scalar factor.
    pub fn factor(&self) -> f64 {
        self.factors.first().copied().unwrap_or(1.0)
    }
}

/// A configured centroid limiter.
///
/// Stateless apart from its tolerances; safe to share across threads and
/// to call concurrently for different cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CentroidLimiter {
    dim: SpaceDim,
    relative_tolerance: f64,
    bounds_slack: f64,
}

/// Builder for [`CentroidLimiter`].
///
/// Required: `dim`. Tolerances default to [`DEFAULT_RELATIVE_TOLERANCE`]
/// and [`DEFAULT_BOUNDS_SLACK`].
pub struct CentroidLimiterBuilder {
    dim: Option<SpaceDim>,
    relative_tolerance: f64,
    bounds_slack: f64,
}

impl CentroidLimiter {
    /// A limiter with default tolerances.
    pub fn new(dim: SpaceDim) -> Self {
        Self {
            dim,
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            bounds_slack: DEFAULT_BOUNDS_SLACK,
        }
    }

    /// Create a new builder.
    pub fn builder() -> CentroidLimiterBuilder {
        CentroidLimiterBuilder {
            dim: None,
            relative_tolerance: DEFAULT_RELATIVE_TOLERANCE,
            bounds_slack: DEFAULT_BOUNDS_SLACK,
        }
    }

    /// Dimensionality of the stencil.
    pub fn dim(&self) -> SpaceDim {
        self.dim
    }

    /// Relative tolerance used inside the alpha computation.
    pub fn relative_tolerance(&self) -> f64 {
        self.relative_tolerance
    }

    /// Absolute slack on the bounds test.
    pub fn bounds_slack(&self) -> f64 {
        self.bounds_slack
    }

    /// Scalar factor for `(cell, comp)`.
    pub fn factor<F, C, G>(
        &self,
        cell: IntVect,
        comp: usize,
        inputs: &LimiterInputs<'_, F, C, G>,
        slopes: &[f64],
    ) -> f64
    where
        F: FieldAccess + ?Sized,
        C: Connectivity + ?Sized,
        G: CentroidAccess + ?Sized,
    {
        self.evaluate(cell, comp, inputs, slopes).0
    }

    /// Per-axis factors for `(cell, comp)`; all entries are equal.
    pub fn limit<F, C, G>(
        &self,
        cell: IntVect,
        comp: usize,
        inputs: &LimiterInputs<'_, F, C, G>,
        slopes: &[f64],
    ) -> AxisTuple
    where
        F: FieldAccess + ?Sized,
        C: Connectivity + ?Sized,
        G: CentroidAccess + ?Sized,
    {
        self.dim.splat(self.factor(cell, comp, inputs, slopes))
    }

    /// Like [`limit`](Self::limit), also returning the neighbourhood bounds.
    pub fn limit_with_bounds<F, C, G>(
        &self,
        cell: IntVect,
        comp: usize,
        inputs: &LimiterInputs<'_, F, C, G>,
        slopes: &[f64],
    ) -> LimitOutcome
    where
        F: FieldAccess + ?Sized,
        C: Connectivity + ?Sized,
        G: CentroidAccess + ?Sized,
    {
        let (alpha, bounds) = self.evaluate(cell, comp, inputs, slopes);
        LimitOutcome {
            factors: self.dim.splat(alpha),
            bounds,
        }
    }

    /// Unlimited prediction at the centroid of `cell + offset`.
    fn predict<G>(
        &self,
        cell: IntVect,
        offset: Offset,
        state: f64,
        slopes: &[f64],
        centroids: &G,
    ) -> f64
    where
        G: CentroidAccess + ?Sized,
    {
        let nb = cell + offset;
        let mut q_hat = state;
        for (axis, slope) in slopes.iter().enumerate().take(self.dim.ndim()) {
            let delta = centroids.centroid(nb, axis) - centroids.centroid(cell, axis)
                + offset.axis(axis) as f64;
            q_hat += delta * slope;
        }
        q_hat
    }

    fn evaluate<F, C, G>(
        &self,
        cell: IntVect,
        comp: usize,
        inputs: &LimiterInputs<'_, F, C, G>,
        slopes: &[f64],
    ) -> (f64, NeighborhoodBounds)
    where
        F: FieldAccess + ?Sized,
        C: Connectivity + ?Sized,
        G: CentroidAccess + ?Sized,
    {
        debug_assert_eq!(
            slopes.len(),
            self.dim.ndim(),
            "slope vector length must match dimensionality"
        );

        let bounds = neighborhood_bounds(cell, comp, self.dim, inputs.field, inputs.connectivity);
        let state = inputs.field.value(cell, comp);

        let mut alpha = 1.0f64;
        for offset in self.dim.neighbour_offsets() {
            if !inputs.connectivity.is_connected(cell, offset) {
                continue;
            }
            let q_hat = self.predict(cell, offset, state, slopes, inputs.centroids);
            if !bounds.contains(q_hat, self.bounds_slack) {
                alpha = alpha.min(alpha_stencil_with_tolerance(
                    q_hat,
                    bounds.q_max,
                    bounds.q_min,
                    state,
                    self.relative_tolerance,
                ));
            }
        }

        (alpha, bounds)
    }
}

impl CentroidLimiterBuilder {
    /// Set the stencil dimensionality (required).
    pub fn dim(mut self, dim: SpaceDim) -> Self {
        self.dim = Some(dim);
        self
    }

    /// Set the relative tolerance of the alpha computation (default 1e-12).
    /// Must be finite and >= 0.
    pub fn relative_tolerance(mut self, tol: f64) -> Self {
        self.relative_tolerance = tol;
        self
    }

    /// Set the absolute slack of the bounds test (default 1e-12).
    /// Must be finite and >= 0.
    pub fn bounds_slack(mut self, slack: f64) -> Self {
        self.bounds_slack = slack;
        self
    }

    /// Build the limiter, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `dim` is not set
    /// - `relative_tolerance` or `bounds_slack` is negative or not finite
    pub fn build(self) -> Result<CentroidLimiter, String> {
        let dim = self.dim.ok_or_else(|| "dim is required".to_string())?;

        if !self.relative_tolerance.is_finite() || self.relative_tolerance < 0.0 {
            return Err(format!(
                "relative_tolerance must be finite and >= 0, got {}",
                self.relative_tolerance
            ));
        }
        if !self.bounds_slack.is_finite() || self.bounds_slack < 0.0 {
            return Err(format!(
                "bounds_slack must be finite and >= 0, got {}",
                self.bounds_slack
            ));
        }

        Ok(CentroidLimiter {
            dim,
            relative_tolerance: self.relative_tolerance,
            bounds_slack: self.bounds_slack,
        })
    }
}
