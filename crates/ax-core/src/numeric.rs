use crate::AxError;

/// Floating point type used throughout system
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, AxError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AxError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive, for physical parameters like inertia.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, AxError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(AxError::InvalidArg { what })
    }
}

/// True three-valued sign: -1, 0, or +1.
///
/// `f64::signum` maps 0.0 to 1.0, which is wrong for switching logic that
/// must treat zero as its own case.
pub fn sign(v: Real) -> Real {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Uniformly spaced points over `[start, end]`, endpoints included.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n <= 1 {
        return vec![start];
    }

    let mut points = Vec::with_capacity(n);
    let delta = (end - start) / (n - 1) as Real;

    for i in 0..n {
        points.push(start + i as Real * delta);
    }

    // Ensure exact endpoint
    points[n - 1] = end;
    points
}
