use log::{trace, warn};
use nalgebra::Complex;

use crate::errors::ModelError;

/// Returns the index and value of the first maximum of `values`.
///
/// Ties resolve to the earliest index. NaN samples never win against a
/// finite one. Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use rs_crack_model::utils::first_argmax;
///
/// assert_eq!(first_argmax(&[0.0, 3.0, 1.0, 3.0]), Some((1, 3.0)));
/// assert_eq!(first_argmax(&[]), None);
/// ```
pub fn first_argmax(values: &[f64]) -> Option<(usize, f64)> {
    let mut iter = values.iter().copied().enumerate();
    let first = iter.next()?;
    Some(iter.fold(first, |best, (i, v)| {
        if v > best.1 || (best.1.is_nan() && !v.is_nan()) { (i, v) } else { best }
    }))
}

/// Evenly spaced values in the half-open interval `[start, stop)`.
///
/// The sample count is `ceil((stop - start) / step)` and each value is
/// `start + i * step`, so a stop that lands on the grid is excluded.
///
/// # Errors
///
/// Returns `ModelError::InvalidRange` if `step` is not strictly positive or
/// any bound is not finite.
pub fn arange(start: f64, stop: f64, step: f64) -> Result<Vec<f64>, ModelError> {
    if !(step > 0.0) || !step.is_finite() {
        return Err(ModelError::InvalidRange(format!("step must be positive, got {}", step)));
    }
    if !start.is_finite() || !stop.is_finite() {
        return Err(ModelError::InvalidRange("bounds must be finite".to_string()));
    }
    let count = ((stop - start) / step).ceil();
    if count <= 0.0 {
        return Ok(Vec::new());
    }
    Ok((0..count as usize).map(|i| start + i as f64 * step).collect())
}

/// Evaluates `f` in real arithmetic and falls back to complex arithmetic when
/// the real result is not finite, keeping only the real part.
///
/// Inverse trigonometric functions and square roots leave their real domain
/// for extreme parameter combinations; the complex evaluation continues the
/// expression analytically instead of producing NaN.
pub fn real_part_or_complex<F, G>(x: f64, real: F, complex: G) -> f64
where
    F: Fn(f64) -> f64,
    G: Fn(Complex<f64>) -> Complex<f64>,
{
    let value = real(x);
    if value.is_finite() {
        return value;
    }
    let continued = complex(Complex::new(x, 0.0));
    trace!("complex continuation at x = {}: {} -> {}", x, value, continued);
    if !continued.re.is_finite() {
        warn!("non-finite compliance at normalized stress {}", x);
    }
    continued.re
}
