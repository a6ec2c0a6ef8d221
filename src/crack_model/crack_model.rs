//! Axial stress-strain response of a cracked brittle solid under uniaxial
//! compression, following a crack closure and frictional sliding model.
//!
//! A [`CrackModel`] is built from a stress history and a [`ModelParameters`]
//! set. Construction normalizes the stresses by `2 / (E0 * alpha)`, picks a
//! compliance regime for every sample, integrates the inverse stiffness over
//! stress and scales the result back to strain. The outputs are fixed for the
//! lifetime of the model; new parameters mean a new model.
//!
//! The response is path dependent. Samples before the first stress peak load
//! the cracks forward, samples from the peak onwards slide them backwards, so a
//! load/unload history traces a hysteresis loop.
//!
//! # Example
//!
//! ```
//! use rs_crack_model::{CrackModel, ModelParameters};
//!
//! let stress = [0.0, 50.0, 100.0, 50.0, 0.0];
//! let params = ModelParameters::new(Some(65_000.0), Some(0.7), Some(2.7), Some(4e-4), Some(0.0));
//! let model = CrackModel::new(&stress, params).expect("non-empty stress history");
//!
//! assert_eq!(model.peak_index(), 2);
//! assert!(model.strain()[2] > model.strain()[1]);
//! assert_eq!(model.youngs_modulus().len(), stress.len());
//! ```
use std::f64::consts::PI;

use log::debug;
use nalgebra::Complex;

use crate::config::ModelParameters;
use crate::errors::ModelError;
use crate::utils::{first_argmax, real_part_or_complex};

use super::angles::{ClosedFormAngles, CrackAngles};
use super::compliance::{open_compliance, reverse_compliance, sliding_compliance};
use super::regime::Regime;

/// Crack closure and sliding model evaluated over one stress history.
///
/// All sequences share the indexing of the stress history passed in.
#[derive(Debug, Clone)]
pub struct CrackModel<A: CrackAngles = ClosedFormAngles> {
    angles: A,
    parameters: ModelParameters,
    stress: Vec<f64>,
    peak_stress: f64,
    peak_index: usize,
    normalized_peak_stress: f64,
    normalized_stress: Vec<f64>,
    regimes: Vec<Regime>,
    inverse_stiffness: Vec<f64>,
    strain: Vec<f64>,
    youngs_modulus: Vec<f64>,
}

impl CrackModel<ClosedFormAngles> {
    /// Builds the model with the closed-form crack angles and computes its
    /// strain and effective modulus.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyStressHistory` if `stress` is empty.
    /// Parameters are not validated; non-physical values give undefined numbers.
    pub fn new(stress: &[f64], parameters: ModelParameters) -> Result<Self, ModelError> {
        Self::with_angles(stress, parameters, ClosedFormAngles)
    }
}

impl<A: CrackAngles> CrackModel<A> {
    /// Builds the model with a specific crack angle policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_crack_model::{CrackModel, Fixed45Angles, ModelParameters};
    ///
    /// let stress = [0.0, 2.0, 4.0, 1.0];
    /// let model = CrackModel::with_angles(&stress, ModelParameters::default(), Fixed45Angles).unwrap();
    /// assert_eq!(model.strain().len(), 4);
    /// ```
    pub fn with_angles(stress: &[f64], parameters: ModelParameters, angles: A) -> Result<Self, ModelError> {
        let (peak_index, peak_stress) = first_argmax(stress).ok_or(ModelError::EmptyStressHistory)?;
        let normalized_peak_stress = parameters.normalize_stress(peak_stress);

        let mut model = Self {
            angles,
            parameters,
            stress: stress.to_vec(),
            peak_stress,
            peak_index,
            normalized_peak_stress,
            normalized_stress: Vec::new(),
            regimes: Vec::new(),
            inverse_stiffness: Vec::new(),
            strain: Vec::new(),
            youngs_modulus: Vec::new(),
        };
        model.calculate_strain();

        debug!(
            "{} crack model: {} samples, peak {} at index {} (normalized {}), {} sliding ({} forward / {} reverse)",
            model.angles.name(),
            model.len(),
            model.peak_stress,
            model.peak_index,
            model.normalized_peak_stress,
            model.sliding_sample_count(),
            model.regime_count(Regime::ForwardSliding),
            model.regime_count(Regime::ReverseSliding),
        );
        Ok(model)
    }

    fn calculate_strain(&mut self) {
        let parameters = self.parameters;
        self.normalized_stress = self.stress.iter().map(|&s| parameters.normalize_stress(s)).collect();

        self.regimes = self.normalized_stress
            .iter()
            .enumerate()
            .map(|(i, &x)| Regime::classify(i, self.peak_index, x))
            .collect();

        self.inverse_stiffness = self.regimes
            .iter()
            .zip(&self.normalized_stress)
            .map(|(&regime, &x)| self.sample_inverse_stiffness(regime, x))
            .collect();

        // Left-rectangle integration of d(strain)/d(stress) = 1/E over the
        // normalized stress, starting from the initial strain.
        let mut normalized_strain = Vec::with_capacity(self.stress.len());
        normalized_strain.push(parameters.initial_strain);
        let mut current = parameters.initial_strain;
        for (step, &inverse) in self.normalized_stress.windows(2).zip(&self.inverse_stiffness) {
            current += (step[1] - step[0]) * inverse;
            normalized_strain.push(current);
        }

        let scale = parameters.strain_scale();
        self.strain = normalized_strain.iter().map(|&e| e * scale).collect();
        self.youngs_modulus = self.inverse_stiffness
            .iter()
            .map(|&inverse| parameters.youngs_modulus / inverse)
            .collect();
    }

    /// Dimensionless inverse stiffness `E0 / E` of a sample in `regime` at
    /// normalized stress `x`.
    fn sample_inverse_stiffness(&self, regime: Regime, x: f64) -> f64 {
        let density = self.parameters.crack_density;
        match regime {
            Regime::Open => 1.0 + density * PI,
            Regime::ForwardSliding => {
                1.0 + density * self.open_compliance(x) + density * self.sliding_compliance(x)
            }
            Regime::ReverseSliding => {
                1.0 + density * self.open_compliance(x) + density * self.reverse_compliance(x)
            }
        }
    }

    fn regime_count(&self, regime: Regime) -> usize {
        self.regimes.iter().filter(|&&r| r == regime).count()
    }

    /// Number of samples in which closed cracks slide, forward or backwards.
    pub fn sliding_sample_count(&self) -> usize {
        self.regimes.iter().filter(|r| r.is_sliding()).count()
    }

    /// Angle above which cracks are closed at normalized stress `x`.
    pub fn closure_angle(&self, x: f64) -> f64 {
        let angles = self.angles;
        real_part_or_complex(x, |x| angles.closure(x), |z| angles.closure(z))
    }

    /// Angle below which cracks slide forward at normalized stress `x`.
    pub fn sliding_angle(&self, x: f64) -> f64 {
        let (angles, mu) = (self.angles, self.parameters.friction_coefficient);
        real_part_or_complex(x, |x| angles.sliding(mu, x), |z| angles.sliding(mu, z))
    }

    /// Angle below which cracks slide backwards at normalized stress `x`.
    pub fn reverse_sliding_angle(&self, x: f64) -> f64 {
        let (angles, mu, peak) = (self.angles, self.parameters.friction_coefficient, self.normalized_peak_stress);
        real_part_or_complex(x, |x| angles.reverse_sliding(mu, peak, x), |z| angles.reverse_sliding(mu, peak, z))
    }

    /// Compliance of open cracks at normalized stress `x`.
    pub fn open_compliance(&self, x: f64) -> f64 {
        real_part_or_complex(x, open_compliance::<f64>, open_compliance::<Complex<f64>>)
    }

    /// Compliance of forward sliding cracks at normalized stress `x`.
    pub fn sliding_compliance(&self, x: f64) -> f64 {
        let (angles, mu) = (&self.angles, self.parameters.friction_coefficient);
        real_part_or_complex(x, |x| sliding_compliance(angles, mu, x), |z| sliding_compliance(angles, mu, z))
    }

    /// Compliance of reverse sliding cracks at normalized stress `x`.
    pub fn reverse_compliance(&self, x: f64) -> f64 {
        let (angles, mu, peak) = (&self.angles, self.parameters.friction_coefficient, self.normalized_peak_stress);
        real_part_or_complex(
            x,
            |x| reverse_compliance(angles, mu, peak, x),
            |z| reverse_compliance(angles, mu, peak, z),
        )
    }

    pub fn angles(&self) -> &A {
        &self.angles
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.parameters
    }

    /// The stress history the model was built from.
    pub fn stress(&self) -> &[f64] {
        &self.stress
    }

    /// Maximum stress of the history, `sigmax`.
    pub fn peak_stress(&self) -> f64 {
        self.peak_stress
    }

    /// Index of the first occurrence of the peak stress; the load/unload pivot.
    pub fn peak_index(&self) -> usize {
        self.peak_index
    }

    /// Peak stress normalized by `2 / (E0 * alpha)`.
    pub fn normalized_peak_stress(&self) -> f64 {
        self.normalized_peak_stress
    }

    pub fn normalized_stress(&self) -> &[f64] {
        &self.normalized_stress
    }

    pub fn regimes(&self) -> &[Regime] {
        &self.regimes
    }

    /// Dimensionless inverse stiffness `E0 / E` of every sample.
    pub fn inverse_stiffness(&self) -> &[f64] {
        &self.inverse_stiffness
    }

    /// Axial strain of every sample.
    pub fn strain(&self) -> &[f64] {
        &self.strain
    }

    /// Effective (damaged) Young's modulus of every sample.
    pub fn youngs_modulus(&self) -> &[f64] {
        &self.youngs_modulus
    }

    pub fn len(&self) -> usize {
        self.stress.len()
    }

    /// Always `false`: construction rejects empty histories.
    pub fn is_empty(&self) -> bool {
        self.stress.is_empty()
    }

    /// Consumes the model, returning its strain and effective modulus sequences.
    pub fn into_curves(self) -> (Vec<f64>, Vec<f64>) {
        (self.strain, self.youngs_modulus)
    }
}
