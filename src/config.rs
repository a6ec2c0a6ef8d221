// src/config.rs

use crate::utils::constants::{
    DEFAULT_ASPECT_RATIO, DEFAULT_CRACK_DENSITY, DEFAULT_FRICTION_COEFFICIENT,
    DEFAULT_INITIAL_STRAIN, DEFAULT_YOUNGS_MODULUS, SLIDER_ASPECT_RATIO_SCALE,
    SLIDER_YOUNGS_MODULUS_SCALE,
};

/// The five scalar parameters of the crack closure and sliding model.
///
/// A model built from a set of parameters never changes; evaluating another
/// set means building another model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    /// Intact (crack-free) Young's modulus, `E0`, in the stress unit of the history (e.g. MPa)
    pub youngs_modulus: f64,
    /// Friction coefficient of the crack faces, `mu`
    pub friction_coefficient: f64,
    /// Crack density, `Y`
    pub crack_density: f64,
    /// Crack aspect ratio scale, `alpha`
    pub aspect_ratio: f64,
    /// Strain at the first stress sample, in normalized strain units
    pub initial_strain: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            youngs_modulus: DEFAULT_YOUNGS_MODULUS,
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
            crack_density: DEFAULT_CRACK_DENSITY,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            initial_strain: DEFAULT_INITIAL_STRAIN,
        }
    }
}

impl ModelParameters {
    /// Builds a parameter set, taking the default for every field left as `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_crack_model::ModelParameters;
    ///
    /// let params = ModelParameters::new(Some(65_000.0), None, Some(2.7), Some(4e-4), None);
    /// assert_eq!(params.friction_coefficient, 0.7);
    /// assert_eq!(params.initial_strain, 0.0);
    /// ```
    pub fn new(
        youngs_modulus: Option<f64>,
        friction_coefficient: Option<f64>,
        crack_density: Option<f64>,
        aspect_ratio: Option<f64>,
        initial_strain: Option<f64>,
    ) -> Self {
        let default = ModelParameters::default();
        Self {
            youngs_modulus: youngs_modulus.unwrap_or(default.youngs_modulus),
            friction_coefficient: friction_coefficient.unwrap_or(default.friction_coefficient),
            crack_density: crack_density.unwrap_or(default.crack_density),
            aspect_ratio: aspect_ratio.unwrap_or(default.aspect_ratio),
            initial_strain: initial_strain.unwrap_or(default.initial_strain),
        }
    }

    /// Builds a parameter set from the units used by slider front ends:
    /// Young's modulus in GPa and aspect ratio in units of 1e-4.
    pub fn from_slider_units(
        youngs_modulus_gpa: f64,
        friction_coefficient: f64,
        crack_density: f64,
        aspect_ratio_e4: f64,
        initial_strain: f64,
    ) -> Self {
        Self {
            youngs_modulus: SLIDER_YOUNGS_MODULUS_SCALE * youngs_modulus_gpa,
            friction_coefficient,
            crack_density,
            aspect_ratio: SLIDER_ASPECT_RATIO_SCALE * aspect_ratio_e4,
            initial_strain,
        }
    }

    /// Factor that turns a normalized strain back into a strain, `alpha / 2`.
    pub fn strain_scale(&self) -> f64 {
        self.aspect_ratio / 2.0
    }

    /// Normalizes a single stress value, `stress * 2 / (E0 * alpha)`.
    pub fn normalize_stress(&self, stress: f64) -> f64 {
        stress * 2.0 / (self.youngs_modulus * self.aspect_ratio)
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = aspect_ratio;
        self
    }

    pub fn with_crack_density(mut self, crack_density: f64) -> Self {
        self.crack_density = crack_density;
        self
    }
}
