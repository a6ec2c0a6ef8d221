// src/crack_model/compliance.rs

use super::angles::{real, CrackAngles, ModelScalar};

/// Compliance contributed by open cracks, `2 (asin(sqrt(1/x)) - sqrt(x - 1) / x)`.
///
/// Tends to `pi` at `x = 1` and to zero as `x` grows.
pub fn open_compliance<T: ModelScalar>(x: T) -> T {
    let inverse = real::<T>(1.0) / x;
    real::<T>(2.0) * (inverse.sqrt().asin() - inverse * (x - real(1.0)).sqrt())
}

fn sliding_antiderivative<T: ModelScalar>(mu: f64, angle: T, x: T) -> T {
    let mu_t = real::<T>(mu);
    real::<T>(0.5) * (angle - (real::<T>(4.0) * angle).sin() / real(4.0))
        - mu_t * angle.sin().powi(4)
        - mu_t * (real::<T>(2.0) * angle).cos() / x
}

/// Compliance contributed by cracks sliding forward during loading: the
/// sliding antiderivative taken between the closure angle and the sliding angle.
pub fn sliding_compliance<A: CrackAngles, T: ModelScalar>(angles: &A, mu: f64, x: T) -> T {
    sliding_antiderivative(mu, angles.sliding(mu, x), x)
        - sliding_antiderivative(mu, angles.closure(x), x)
}

fn reverse_antiderivative<T: ModelScalar>(mu: f64, peak: f64, angle: T, x: T) -> T {
    let mu_t = real::<T>(mu);
    let ratio = real::<T>(peak) / x;
    (angle - (real::<T>(4.0) * angle).sin() / real(4.0)) * (ratio - real(1.0)) / real(2.0)
        - mu_t * (ratio + real(1.0)) * angle.sin().powi(4)
        - real::<T>(2.0) * mu_t * (real::<T>(2.0) * angle).cos() / x
}

/// Compliance contributed by cracks sliding backwards after the peak `peak`
/// (normalized), taken between the closure angle and the reverse sliding angle.
pub fn reverse_compliance<A: CrackAngles, T: ModelScalar>(angles: &A, mu: f64, peak: f64, x: T) -> T {
    reverse_antiderivative(mu, peak, angles.reverse_sliding(mu, peak, x), x)
        - reverse_antiderivative(mu, peak, angles.closure(x), x)
}
