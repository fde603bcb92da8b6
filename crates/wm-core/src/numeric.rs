use crate::CoreError;

/// Floating point type used throughout the workspace
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Accept `v` only if it is finite and not negative.
///
/// Every user-supplied workout quantity (distance, duration, cadence,
/// elevation gain) goes through this check.
pub fn ensure_metric(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err(CoreError::InvalidMetric { what, value: v })
    }
}

/// `num / den`, or `None` when the quotient is not a finite number
/// (zero denominator, or both zero).
pub fn finite_ratio(num: Real, den: Real) -> Option<Real> {
    let q = num / den;
    q.is_finite().then_some(q)
}
