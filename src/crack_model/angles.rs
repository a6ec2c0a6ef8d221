// src/crack_model/angles.rs

//! Crack orientation angles, measured from the principal stress direction.
//!
//! The functions are generic over [`ModelScalar`] so the same expression can be
//! evaluated in `f64` or, when an argument leaves the real domain of `asin`,
//! `acos` or `sqrt`, in `Complex<f64>`.

use std::fmt;

use nalgebra::ComplexField;

/// Scalar type the closed-form crack relations are evaluated in (`f64` or `Complex<f64>`).
pub trait ModelScalar: ComplexField<RealField = f64> + Copy {}

impl<T: ComplexField<RealField = f64> + Copy> ModelScalar for T {}

#[inline]
pub(crate) fn real<T: ModelScalar>(value: f64) -> T {
    T::from_real(value)
}

/// Angle above which cracks are closed, `asin(sqrt(1/x))`.
pub fn closure_angle<T: ModelScalar>(x: T) -> T {
    (real::<T>(1.0) / x).sqrt().asin()
}

/// Angle below which closed cracks slide during loading.
///
/// `(acos(mu (1 - 2/x) / sqrt(1 + mu^2)) + atan(1/mu)) / 2`
pub fn sliding_angle<T: ModelScalar>(mu: f64, x: T) -> T {
    let cosine = real::<T>(mu) * (real::<T>(1.0) - real::<T>(2.0) / x) / real((1.0 + mu.powi(2)).sqrt());
    (cosine.acos() + real((1.0 / mu).atan())) / real(2.0)
}

/// Angle below which closed cracks slide backwards after the stress peak
/// `peak` (normalized).
pub fn reverse_sliding_angle<T: ModelScalar>(mu: f64, peak: f64, x: T) -> T {
    let mu_t = real::<T>(mu);
    let peak_t = real::<T>(peak);
    let difference = peak_t - x;
    let sum = peak_t + x;
    let cosine = (mu_t * sum - real::<T>(4.0 * mu))
        / (difference * difference + mu_t * mu_t * (sum * sum)).sqrt();
    real::<T>(0.5) * (cosine.acos() + (difference / (mu_t * sum)).atan())
}

/// Policy supplying the crack angles used by [`CrackModel`](crate::CrackModel).
///
/// The provided methods are the closed-form angles; a policy overrides the
/// ones it fixes.
pub trait CrackAngles: Copy + Default + Send + Sync + fmt::Debug {
    /// Human readable policy name, used in log output.
    fn name(&self) -> &'static str;

    fn closure<T: ModelScalar>(&self, x: T) -> T {
        closure_angle(x)
    }

    fn sliding<T: ModelScalar>(&self, mu: f64, x: T) -> T {
        sliding_angle(mu, x)
    }

    fn reverse_sliding<T: ModelScalar>(&self, mu: f64, peak: f64, x: T) -> T {
        reverse_sliding_angle(mu, peak, x)
    }
}

/// Closure and sliding angles from the closed-form relations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosedFormAngles;

impl CrackAngles for ClosedFormAngles {
    fn name(&self) -> &'static str {
        "closed-form"
    }
}

/// Variant intended to hold cracks at a fixed 45° orientation.
///
/// No angle is overridden yet, so the curves it produces are identical to
/// [`ClosedFormAngles`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fixed45Angles;

impl CrackAngles for Fixed45Angles {
    fn name(&self) -> &'static str {
        "fixed-45"
    }
}
