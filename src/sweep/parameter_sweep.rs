//! Parallel evaluation of the crack model over a grid of aspect ratios and
//! crack densities.
//!
//! Each grid point is an independent model, so the grid is spread over the
//! Rayon thread pool. The sweep only evaluates; choosing a point is left to
//! the caller.
//!
//! # Example
//!
//! ```
//! use rs_crack_model::sweep::{sweep_grid, ParameterRange};
//! use rs_crack_model::ModelParameters;
//!
//! let stress = [0.0, 40.0, 80.0, 40.0, 0.0];
//! let base = ModelParameters::from_slider_units(65.0, 0.7, 2.7, 4.0, 0.0);
//! let alphas = ParameterRange::new(2e-4, 6e-4, 2e-4).values().unwrap();
//! let densities = [1.0, 2.0, 3.0];
//!
//! let points = sweep_grid(&stress, base, &alphas, &densities, None).unwrap();
//! assert_eq!(points.len(), alphas.len() * densities.len());
//! ```
use log::debug;
use rayon::prelude::*;

use crate::comparison::rms_deviation;
use crate::config::ModelParameters;
use crate::crack_model::CrackModel;
use crate::errors::ModelError;
use crate::utils::arange;
use crate::utils::constants::{
    ASPECT_RATIO_E4_MAX, ASPECT_RATIO_E4_MIN, ASPECT_RATIO_E4_STEP, CRACK_DENSITY_MAX,
    CRACK_DENSITY_MIN, CRACK_DENSITY_STEP, SLIDER_ASPECT_RATIO_SCALE,
};

/// Half-open range `[start, stop)` sampled every `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl ParameterRange {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Aspect ratios offered by the interactive front end, 1e-5 to 1e-3.
    pub fn default_aspect_ratios() -> Self {
        Self::new(
            ASPECT_RATIO_E4_MIN * SLIDER_ASPECT_RATIO_SCALE,
            ASPECT_RATIO_E4_MAX * SLIDER_ASPECT_RATIO_SCALE,
            ASPECT_RATIO_E4_STEP * SLIDER_ASPECT_RATIO_SCALE,
        )
    }

    /// Crack densities offered by the interactive front end, 0.1 to 7.
    pub fn default_crack_densities() -> Self {
        Self::new(CRACK_DENSITY_MIN, CRACK_DENSITY_MAX, CRACK_DENSITY_STEP)
    }

    /// Sampled values of the range.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidRange` for a non-positive step, non-finite
    /// bounds, or a range that yields no values.
    pub fn values(&self) -> Result<Vec<f64>, ModelError> {
        let values = arange(self.start, self.stop, self.step)?;
        if values.is_empty() {
            return Err(ModelError::InvalidRange(format!(
                "[{}, {}) with step {} is empty", self.start, self.stop, self.step
            )));
        }
        Ok(values)
    }
}

/// Model outputs at one grid point.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub parameters: ModelParameters,
    pub strain: Vec<f64>,
    pub youngs_modulus: Vec<f64>,
    /// Deviation from the reference strains, when they were supplied.
    pub rms: Option<f64>,
}

/// Evaluates the model for every `(aspect_ratio, crack_density)` pair.
///
/// The remaining parameters are taken from `base`. Points come back in
/// row-major order: all densities of the first aspect ratio, then the next.
/// When `reference` strains are supplied, each point carries its RMS deviation
/// from them.
///
/// # Errors
///
/// Returns `ModelError::EmptyStressHistory` for an empty stress history and
/// `ModelError::LengthMismatch` if `reference` is not indexed like `stress`.
pub fn sweep_grid(
    stress: &[f64],
    base: ModelParameters,
    aspect_ratios: &[f64],
    crack_densities: &[f64],
    reference: Option<&[f64]>,
) -> Result<Vec<SweepPoint>, ModelError> {
    if stress.is_empty() {
        return Err(ModelError::EmptyStressHistory);
    }
    if let Some(reference) = reference {
        if reference.len() != stress.len() {
            return Err(ModelError::LengthMismatch { expected: stress.len(), found: reference.len() });
        }
    }

    debug!(
        "sweeping {} aspect ratios x {} crack densities over {} threads",
        aspect_ratios.len(),
        crack_densities.len(),
        rayon::current_num_threads()
    );

    let grid: Vec<ModelParameters> = aspect_ratios
        .iter()
        .flat_map(|&alpha| {
            crack_densities
                .iter()
                .map(move |&density| base.with_aspect_ratio(alpha).with_crack_density(density))
        })
        .collect();

    grid.into_par_iter()
        .map(|parameters| {
            let model = CrackModel::new(stress, parameters)?;
            let rms = match reference {
                Some(reference) => Some(rms_deviation(model.strain(), reference)?),
                None => None,
            };
            let (strain, youngs_modulus) = model.into_curves();
            Ok(SweepPoint { parameters, strain, youngs_modulus, rms })
        })
        .collect()
}
