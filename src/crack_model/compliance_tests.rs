// src/crack_model/compliance_tests.rs

use std::f64::consts::PI;

use approx::assert_relative_eq;
use nalgebra::Complex;

use crate::crack_model::{open_compliance, reverse_compliance, sliding_compliance, ClosedFormAngles};

#[test]
fn test_open_compliance_at_threshold_is_pi() {
    assert_relative_eq!(open_compliance(1.0_f64), PI, epsilon = 1e-15);
}

#[test]
fn test_open_compliance_known_values() {
    assert_relative_eq!(open_compliance(1.5_f64), 0.9678241946669552, max_relative = 1e-12);
    assert_relative_eq!(open_compliance(2.0_f64), 0.5707963267948968, max_relative = 1e-12);
    assert_relative_eq!(open_compliance(4.0_f64), 0.18117214741215926, max_relative = 1e-12);
    assert_relative_eq!(open_compliance(100.0_f64), 0.0013373549017955955, max_relative = 1e-9);
}

#[test]
fn test_open_compliance_positive_and_decreasing() {
    let mut previous = open_compliance(1.0_f64);
    for i in 1..500 {
        let x = 1.0 + i as f64 * 0.25;
        let compliance = open_compliance(x);
        assert!(compliance >= 0.0, "open compliance negative at x = {}", x);
        assert!(compliance < previous, "open compliance must decrease at x = {}", x);
        previous = compliance;
    }
    assert!(open_compliance(1e8_f64) < 1e-3);
}

#[test]
fn test_open_compliance_complex_continuation_below_threshold() {
    // Below the threshold asin and sqrt leave the real domain; the real part
    // of the continued expression is the fully open limit.
    let value = open_compliance(Complex::new(0.5, 0.0));
    assert_relative_eq!(value.re, PI, max_relative = 1e-12);
    assert!(open_compliance(0.5_f64).is_nan());
}

#[test]
fn test_sliding_compliance_known_values() {
    let angles = ClosedFormAngles;
    assert_relative_eq!(sliding_compliance(&angles, 0.7, 1.5_f64), 0.15843274250463846, max_relative = 1e-10);
    assert_relative_eq!(sliding_compliance(&angles, 0.7, 2.0_f64), 0.240017590601422, max_relative = 1e-10);
    assert_relative_eq!(sliding_compliance(&angles, 0.7, 4.0_f64), 0.308431886445723, max_relative = 1e-10);
    assert_relative_eq!(sliding_compliance(&angles, 0.7, 10.0_f64), 0.2956104561606578, max_relative = 1e-10);
}

#[test]
fn test_sliding_compliance_vanishes_at_threshold() {
    let angles = ClosedFormAngles;
    assert_relative_eq!(sliding_compliance(&angles, 0.7, 1.0_f64), 0.0, epsilon = 1e-12);
}

#[test]
fn test_reverse_compliance_known_values() {
    let angles = ClosedFormAngles;
    let peak = 100.0 * 2.0 / 26.0;
    assert_relative_eq!(reverse_compliance(&angles, 0.7, peak, 1.5_f64), 6.640938175173083e-05, max_relative = 1e-6);
    assert_relative_eq!(reverse_compliance(&angles, 0.7, peak, 50.0 * 2.0 / 26.0), 0.039088225327798654, max_relative = 1e-9);
}

#[test]
fn test_reverse_compliance_vanishes_at_peak() {
    let angles = ClosedFormAngles;
    let peak = 100.0 * 2.0 / 26.0;
    assert_relative_eq!(reverse_compliance(&angles, 0.7, peak, peak), 0.0, epsilon = 1e-12);
}
