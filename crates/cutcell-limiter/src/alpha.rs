//! Single-prediction limiting factor.
//!
//! ```text
//!          ⎧ min(1, (q_max - state) / (q_hat - state))   if q_hat - state >  small
//! alpha =  ⎨ min(1, (q_min - state) / (q_hat - state))   if q_hat - state < -small
//!          ⎩ 1                                           otherwise
//! ```
//!
//! with `small = tol * |q_max|`.

/// Relative tolerance applied to `|q_max|` when deciding whether a
/// displacement is negligible.
pub const DEFAULT_RELATIVE_TOLERANCE: f64 = 1.0e-12;

/// Factor that clamps one prediction into `[q_min, q_max]`.
///
/// Scaling the displacement `q_hat - state` by the returned factor and
/// adding it back to `state` lands inside the bounds. Returns 1 when no
/// correction is needed. `state` is assumed to lie within the bounds.
///
/// # Examples
///
/// ```
/// use cutcell_limiter::alpha_stencil;
///
/// let alpha = alpha_stencil(1.6, 1.5, 0.5, 1.0);
/// assert!((alpha - 5.0 / 6.0).abs() < 1e-12);
/// assert_eq!(alpha_stencil(1.2, 1.5, 0.5, 1.0), 1.0);
/// ```
#[inline]
pub fn alpha_stencil(q_hat: f64, q_max: f64, q_min: f64, state: f64) -> f64 {
    alpha_stencil_with_tolerance(q_hat, q_max, q_min, state, DEFAULT_RELATIVE_TOLERANCE)
}

/// [`alpha_stencil`] with an explicit relative tolerance.
///
/// With `q_max == 0` or `relative_tolerance == 0` the negligible-displacement
/// test reduces to exact comparison against zero.
#[inline]
pub fn alpha_stencil_with_tolerance(
    q_hat: f64,
    q_max: f64,
    q_min: f64,
    state: f64,
    relative_tolerance: f64,
) -> f64 {
    let small = relative_tolerance * q_max.abs();
    let delta = q_hat - state;

    if delta > small {
        1.0f64.min((q_max - state) / delta)
    } else if delta < -small {
        1.0f64.min((q_min - state) / delta)
    } else {
        1.0
    }
}
