// src/apis/curve_binding_tests.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::apis::{CurveBinding, CurveSnapshot};
use crate::config::ModelParameters;
use crate::crack_model::CrackModel;
use crate::errors::ModelError;

fn stress() -> Vec<f64> {
    vec![0.0, 25.0, 50.0, 75.0, 100.0, 75.0, 50.0, 25.0, 0.0]
}

fn initial() -> ModelParameters {
    ModelParameters::from_slider_units(65.0, 0.7, 2.7, 4.0, 0.0)
}

#[test]
fn test_initial_snapshot_matches_model() {
    let binding = CurveBinding::new(stress(), initial()).unwrap();
    let model = CrackModel::new(&stress(), initial()).unwrap();

    assert_eq!(binding.snapshot().strain, model.strain());
    assert_eq!(binding.snapshot().youngs_modulus, model.youngs_modulus());
    assert_eq!(binding.snapshot().rms, None);
    assert_eq!(binding.stress(), &stress()[..]);
}

#[test]
fn test_subscribers_receive_every_update() {
    let mut binding = CurveBinding::new(stress(), initial()).unwrap();
    let received: Rc<RefCell<Vec<CurveSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&received);
    binding.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

    binding.update(|p| p.friction_coefficient = 1.0).unwrap();
    binding.update(|p| p.aspect_ratio = 6e-4).unwrap();

    let received = received.borrow();
    assert_eq!(received.len(), 2);
    assert_eq!(received[1].parameters.friction_coefficient, 1.0);
    assert_eq!(received[1].parameters.aspect_ratio, 6e-4);
    let expected = CrackModel::new(&stress(), received[1].parameters).unwrap();
    assert_eq!(received[1].strain, expected.strain());
}

#[test]
fn test_unsubscribe_stops_notifications() {
    let mut binding = CurveBinding::new(stress(), initial()).unwrap();
    let calls = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&calls);
    let id = binding.subscribe(move |_| *counter.borrow_mut() += 1);

    binding.update(|p| p.crack_density = 1.0).unwrap();
    assert!(binding.unsubscribe(id));
    assert!(!binding.unsubscribe(id));
    binding.update(|p| p.crack_density = 2.0).unwrap();

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(binding.subscriber_count(), 0);
}

#[test]
fn test_reset_restores_initial_curves() {
    let mut binding = CurveBinding::new(stress(), initial()).unwrap();
    let original = binding.snapshot().clone();

    binding.set_parameters(ModelParameters::from_slider_units(120.0, 1.1, 5.0, 8.0, 1.0)).unwrap();
    assert_ne!(binding.snapshot().strain, original.strain);

    let restored = binding.reset().unwrap().clone();
    assert_eq!(restored, original);
}

#[test]
fn test_measured_strain_adds_rms() {
    let measured = CrackModel::new(&stress(), initial()).unwrap().strain().to_vec();
    let mut binding = CurveBinding::new(stress(), initial()).unwrap().with_measured_strain(measured).unwrap();

    assert_eq!(binding.snapshot().rms, Some(0.0));
    let rms = binding.update(|p| p.crack_density = 4.0).unwrap().rms.unwrap();
    assert!(rms > 0.0);
}

#[test]
fn test_measured_strain_length_mismatch() {
    let binding = CurveBinding::new(stress(), initial()).unwrap();
    assert!(matches!(
        binding.with_measured_strain(vec![0.0; 3]),
        Err(ModelError::LengthMismatch { expected: 9, found: 3 })
    ));

    let result = CurveBinding::evaluate(&stress(), initial(), Some(&[0.0; 3]));
    assert_eq!(result, Err(ModelError::LengthMismatch { expected: 9, found: 3 }));
}

#[test]
fn test_empty_history_rejected() {
    assert!(matches!(
        CurveBinding::new(Vec::new(), initial()),
        Err(ModelError::EmptyStressHistory)
    ));
}
