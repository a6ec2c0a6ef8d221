// src/comparison/comparison.rs

use crate::crack_model::{CrackAngles, CrackModel};
use crate::errors::ModelError;

/// Root-mean-square deviation between a modelled and a measured strain curve.
///
/// Both sequences must be indexed against the same stress history.
///
/// # Errors
///
/// Returns `ModelError::LengthMismatch` if the lengths differ and
/// `ModelError::EmptyStressHistory` if both are empty.
///
/// # Examples
///
/// ```
/// use rs_crack_model::comparison::rms_deviation;
///
/// let rms = rms_deviation(&[0.0, 1.0, 2.0], &[0.0, 1.0, 5.0]).unwrap();
/// assert!((rms - 3.0_f64.sqrt()).abs() < 1e-12);
/// assert!(rms_deviation(&[0.0], &[0.0, 1.0]).is_err());
/// ```
pub fn rms_deviation(model: &[f64], data: &[f64]) -> Result<f64, ModelError> {
    if model.len() != data.len() {
        return Err(ModelError::LengthMismatch { expected: model.len(), found: data.len() });
    }
    if data.is_empty() {
        return Err(ModelError::EmptyStressHistory);
    }
    let sum: f64 = data.iter().zip(model).map(|(d, m)| (d - m).powi(2)).sum();
    Ok((sum / data.len() as f64).sqrt())
}

impl<A: CrackAngles> CrackModel<A> {
    /// Root-mean-square deviation of the modelled strain from measured strains
    /// taken at the same stresses.
    pub fn rms_deviation_from(&self, measured_strain: &[f64]) -> Result<f64, ModelError> {
        rms_deviation(self.strain(), measured_strain)
    }
}
