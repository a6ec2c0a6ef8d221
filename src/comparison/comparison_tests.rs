// src/comparison/comparison_tests.rs

use crate::assert_float_eq;
use crate::comparison::rms_deviation;
use crate::config::ModelParameters;
use crate::crack_model::CrackModel;
use crate::errors::ModelError;

#[test]
fn test_rms_of_identical_curves_is_zero() {
    let curve = [0.0, 0.001, 0.002, 0.0015];
    assert_eq!(rms_deviation(&curve, &curve), Ok(0.0));
}

#[test]
fn test_rms_known_value() {
    let rms = rms_deviation(&[1.0, 2.0, 3.0, 4.0], &[2.0, 2.0, 1.0, 4.0]).unwrap();
    // squares: 1, 0, 4, 0
    assert_float_eq(rms, (5.0_f64 / 4.0).sqrt(), 1e-15, Some("rms"));
}

#[test]
fn test_rms_length_mismatch() {
    assert_eq!(
        rms_deviation(&[1.0, 2.0], &[1.0, 2.0, 3.0]),
        Err(ModelError::LengthMismatch { expected: 2, found: 3 })
    );
}

#[test]
fn test_rms_empty_curves() {
    assert_eq!(rms_deviation(&[], &[]), Err(ModelError::EmptyStressHistory));
}

#[test]
fn test_model_rms_against_its_own_strain() {
    let stress = [0.0, 50.0, 100.0, 50.0, 0.0];
    let params = ModelParameters::from_slider_units(65.0, 0.7, 2.7, 4.0, 0.0);
    let model = CrackModel::new(&stress, params).unwrap();

    let measured: Vec<f64> = model.strain().iter().map(|s| s + 1e-4).collect();
    assert_float_eq(model.rms_deviation_from(&measured).unwrap(), 1e-4, 1e-12, Some("constant offset"));
    assert!(model.rms_deviation_from(&measured[..3]).is_err());
}
