// src/utils/math_helpers_tests.rs

use std::f64::consts::PI;

use nalgebra::ComplexField;

use crate::assert_float_eq;
use crate::errors::ModelError;
use crate::utils::{arange, first_argmax, real_part_or_complex};

#[test]
fn test_first_argmax_prefers_earliest_tie() {
    assert_eq!(first_argmax(&[1.0, 5.0, 2.0, 5.0, 5.0]), Some((1, 5.0)));
    assert_eq!(first_argmax(&[7.0]), Some((0, 7.0)));
}

#[test]
fn test_first_argmax_empty() {
    assert_eq!(first_argmax(&[]), None);
}

#[test]
fn test_first_argmax_skips_nan() {
    assert_eq!(first_argmax(&[1.0, f64::NAN, 4.0, 2.0]), Some((2, 4.0)));
}

#[test]
fn test_first_argmax_negative_values() {
    assert_eq!(first_argmax(&[-3.0, -1.0, -2.0]), Some((1, -1.0)));
}

#[test]
fn test_arange_excludes_stop() {
    let values = arange(0.0, 1.0, 0.25).unwrap();
    assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn test_arange_slider_grid_length() {
    // 0.1, 0.2, ..., 6.9
    let values = arange(0.1, 7.0, 0.1).unwrap();
    assert_eq!(values.len(), 69);
    assert_float_eq(values[0], 0.1, 1e-12, Some("first value"));
    assert_float_eq(*values.last().unwrap(), 6.9, 1e-9, Some("last value"));
}

#[test]
fn test_arange_empty_and_invalid() {
    assert!(arange(2.0, 1.0, 0.5).unwrap().is_empty());
    assert!(matches!(arange(0.0, 1.0, 0.0), Err(ModelError::InvalidRange(_))));
    assert!(matches!(arange(0.0, 1.0, -0.1), Err(ModelError::InvalidRange(_))));
    assert!(matches!(arange(0.0, f64::INFINITY, 0.1), Err(ModelError::InvalidRange(_))));
}

#[test]
fn test_real_part_keeps_finite_real_result() {
    let value = real_part_or_complex(0.25, |x| x.sqrt(), |z| z.sqrt());
    assert_eq!(value, 0.5);
}

#[test]
fn test_real_part_of_complex_continuation() {
    // sqrt(-4) = 2i, real part 0
    let value = real_part_or_complex(-4.0, |x| x.sqrt(), |z| z.sqrt());
    assert_float_eq(value, 0.0, 1e-12, None);

    // asin(2) = pi/2 - i ln(2 + sqrt(3))
    let value = real_part_or_complex(2.0, |x| x.asin(), |z| ComplexField::asin(z));
    assert_float_eq(value, PI / 2.0, 1e-12, None);
}
