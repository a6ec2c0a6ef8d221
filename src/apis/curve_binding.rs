// src/apis/curve_binding.rs

use std::fmt;

use log::debug;

use crate::comparison::rms_deviation;
use crate::config::ModelParameters;
use crate::crack_model::CrackModel;
use crate::errors::ModelError;

/// Curves produced by one evaluation of the model.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSnapshot {
    pub parameters: ModelParameters,
    pub strain: Vec<f64>,
    pub youngs_modulus: Vec<f64>,
    /// Deviation from the measured strain curve, when one is attached.
    pub rms: Option<f64>,
}

/// Handle returned by [`CurveBinding::subscribe`].
pub type SubscriptionId = usize;

type Subscriber = Box<dyn FnMut(&CurveSnapshot)>;

/// Binds a parameter set to the curves it produces.
///
/// The binding keeps one stress history and the current parameters. Every
/// parameter change rebuilds the model from scratch and hands the new
/// [`CurveSnapshot`] to each subscriber, which is how a slider-driven plot
/// stays in sync without shared mutable state.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use rs_crack_model::apis::CurveBinding;
/// use rs_crack_model::ModelParameters;
///
/// let stress = vec![0.0, 50.0, 100.0, 50.0, 0.0];
/// let mut binding = CurveBinding::new(stress, ModelParameters::from_slider_units(65.0, 0.7, 2.7, 4.0, 0.0)).unwrap();
///
/// let redraws = Arc::new(Mutex::new(0));
/// let counter = Arc::clone(&redraws);
/// binding.subscribe(move |_snapshot| *counter.lock().unwrap() += 1);
///
/// binding.update(|p| p.crack_density = 3.5).unwrap();
/// binding.reset().unwrap();
/// assert_eq!(*redraws.lock().unwrap(), 2);
/// assert_eq!(binding.parameters().crack_density, 2.7);
/// ```
pub struct CurveBinding {
    stress: Vec<f64>,
    measured_strain: Option<Vec<f64>>,
    initial: ModelParameters,
    snapshot: CurveSnapshot,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: SubscriptionId,
}

impl CurveBinding {
    /// Creates a binding and evaluates the initial parameters.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EmptyStressHistory` if `stress` is empty.
    pub fn new(stress: Vec<f64>, initial: ModelParameters) -> Result<Self, ModelError> {
        let snapshot = Self::evaluate(&stress, initial, None)?;
        Ok(Self {
            stress,
            measured_strain: None,
            initial,
            snapshot,
            subscribers: Vec::new(),
            next_id: 0,
        })
    }

    /// Attaches a measured strain curve; every snapshot then carries its RMS
    /// deviation from the model.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::LengthMismatch` if `measured_strain` is not indexed
    /// like the stress history.
    pub fn with_measured_strain(mut self, measured_strain: Vec<f64>) -> Result<Self, ModelError> {
        self.snapshot = Self::evaluate(&self.stress, self.snapshot.parameters, Some(&measured_strain))?;
        self.measured_strain = Some(measured_strain);
        Ok(self)
    }

    /// Pure evaluation of a parameter set over a stress history.
    pub fn evaluate(
        stress: &[f64],
        parameters: ModelParameters,
        measured_strain: Option<&[f64]>,
    ) -> Result<CurveSnapshot, ModelError> {
        let model = CrackModel::new(stress, parameters)?;
        let rms = measured_strain
            .map(|measured| rms_deviation(model.strain(), measured))
            .transpose()?;
        let (strain, youngs_modulus) = model.into_curves();
        Ok(CurveSnapshot { parameters, strain, youngs_modulus, rms })
    }

    /// Registers a callback run after every parameter change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CurveSnapshot) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(subscribed, _)| *subscribed != id);
        self.subscribers.len() != before
    }

    /// Replaces the parameters, rebuilds the curves and notifies subscribers.
    pub fn set_parameters(&mut self, parameters: ModelParameters) -> Result<&CurveSnapshot, ModelError> {
        self.snapshot = Self::evaluate(&self.stress, parameters, self.measured_strain.as_deref())?;
        if let Some(rms) = self.snapshot.rms {
            debug!("rms deviation from measured strain: {:e}", rms);
        }
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.snapshot);
        }
        Ok(&self.snapshot)
    }

    /// Edits the current parameters in place, then behaves like [`set_parameters`](Self::set_parameters).
    pub fn update<F>(&mut self, edit: F) -> Result<&CurveSnapshot, ModelError>
    where
        F: FnOnce(&mut ModelParameters),
    {
        let mut parameters = self.snapshot.parameters;
        edit(&mut parameters);
        self.set_parameters(parameters)
    }

    /// Restores the parameters the binding was created with.
    pub fn reset(&mut self) -> Result<&CurveSnapshot, ModelError> {
        self.set_parameters(self.initial)
    }

    pub fn parameters(&self) -> &ModelParameters {
        &self.snapshot.parameters
    }

    pub fn snapshot(&self) -> &CurveSnapshot {
        &self.snapshot
    }

    pub fn stress(&self) -> &[f64] {
        &self.stress
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl fmt::Debug for CurveBinding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CurveBinding")
            .field("samples", &self.stress.len())
            .field("parameters", &self.snapshot.parameters)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
