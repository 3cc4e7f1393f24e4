use crate::PkError;

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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, PkError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PkError::NonFinite { what, value: v })
    }
}

/// Positive and finite, the contract for critical constants and state inputs.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, PkError> {
    let v = ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(PkError::InvalidArg { what });
    }
    Ok(v)
}

/// Uniformly spaced points from `start` to `end`, both included.
///
/// A single point yields `[start]`; zero points yield an empty grid.
pub fn linspace(start: Real, end: Real, num_points: usize) -> Vec<Real> {
    match num_points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let delta = (end - start) / (n - 1) as Real;
            let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
            // Ensure exact endpoint
            points[n - 1] = end;
            points
        }
    }
}

/// Bounds-check an index against a length.
pub fn check_index(index: usize, len: usize, what: &'static str) -> Result<usize, PkError> {
    if index < len {
        Ok(index)
    } else {
        Err(PkError::IndexOob { what, index, len })
    }
}
