// src/utils/constants.rs

pub const DEFAULT_YOUNGS_MODULUS: f64 = 1e3;
pub const DEFAULT_FRICTION_COEFFICIENT: f64 = 0.7;
pub const DEFAULT_CRACK_DENSITY: f64 = 1.0;
pub const DEFAULT_ASPECT_RATIO: f64 = 1e-3;
pub const DEFAULT_INITIAL_STRAIN: f64 = 0.0;

/// Slider front ends express Young's modulus in GPa against stresses in MPa.
pub const SLIDER_YOUNGS_MODULUS_SCALE: f64 = 1e3;
/// Slider front ends express the aspect ratio in units of 1e-4.
pub const SLIDER_ASPECT_RATIO_SCALE: f64 = 1e-4;

// Initial slider positions of the interactive front end (slider units).
pub const SLIDER_INITIAL_YOUNGS_MODULUS_GPA: f64 = 65.0;
pub const SLIDER_INITIAL_FRICTION_COEFFICIENT: f64 = 0.7;
pub const SLIDER_INITIAL_CRACK_DENSITY: f64 = 2.7;
pub const SLIDER_INITIAL_ASPECT_RATIO_E4: f64 = 4.0;
pub const SLIDER_INITIAL_STRAIN: f64 = 0.0;

// Candidate grids offered to parameter sweeps (aspect ratio in 1e-4 units).
pub const ASPECT_RATIO_E4_MIN: f64 = 0.1;
pub const ASPECT_RATIO_E4_MAX: f64 = 10.0;
pub const ASPECT_RATIO_E4_STEP: f64 = 0.1;
pub const CRACK_DENSITY_MIN: f64 = 0.1;
pub const CRACK_DENSITY_MAX: f64 = 7.0;
pub const CRACK_DENSITY_STEP: f64 = 0.1;
