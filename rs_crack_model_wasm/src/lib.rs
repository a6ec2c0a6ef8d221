// rs_crack_model_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the crack model library.

use wasm_bindgen::prelude::*;
use js_sys::{Float64Array, Function};
use rs_crack_model::apis::CurveBinding;
use rs_crack_model::{CrackModel, ModelError, ModelParameters};

fn to_js(error: ModelError) -> JsValue {
    JsValue::from_str(&error.to_string())
}

#[wasm_bindgen]
pub struct WasmCrackModel(CrackModel);

#[wasm_bindgen]
impl WasmCrackModel {
    #[wasm_bindgen(constructor)]
    pub fn new(
        stress: Vec<f64>,
        youngs_modulus: f64,
        friction_coefficient: f64,
        crack_density: f64,
        aspect_ratio: f64,
        initial_strain: f64,
    ) -> Result<WasmCrackModel, JsValue> {
        let parameters = ModelParameters {
            youngs_modulus,
            friction_coefficient,
            crack_density,
            aspect_ratio,
            initial_strain,
        };
        CrackModel::new(&stress, parameters)
            .map(WasmCrackModel)
            .map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn strain(&self) -> Vec<f64> {
        self.0.strain().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn youngs_modulus(&self) -> Vec<f64> {
        self.0.youngs_modulus().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn inverse_stiffness(&self) -> Vec<f64> {
        self.0.inverse_stiffness().to_vec()
    }

    #[wasm_bindgen(getter)]
    pub fn peak_index(&self) -> usize {
        self.0.peak_index()
    }

    #[wasm_bindgen(getter)]
    pub fn peak_stress(&self) -> f64 {
        self.0.peak_stress()
    }
}

/// Slider-driven binding: every change recomputes the curve and calls the
/// subscribed JavaScript functions with the new strain array.
#[wasm_bindgen]
pub struct WasmCurveBinding(CurveBinding);

#[wasm_bindgen]
impl WasmCurveBinding {
    /// Parameters are in slider units: Young's modulus in GPa, aspect ratio in 1e-4.
    #[wasm_bindgen(constructor)]
    pub fn new(
        stress: Vec<f64>,
        youngs_modulus_gpa: f64,
        friction_coefficient: f64,
        crack_density: f64,
        aspect_ratio_e4: f64,
        initial_strain: f64,
    ) -> Result<WasmCurveBinding, JsValue> {
        let parameters = ModelParameters::from_slider_units(
            youngs_modulus_gpa,
            friction_coefficient,
            crack_density,
            aspect_ratio_e4,
            initial_strain,
        );
        CurveBinding::new(stress, parameters)
            .map(WasmCurveBinding)
            .map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn attach_measured_strain(self, measured_strain: Vec<f64>) -> Result<WasmCurveBinding, JsValue> {
        self.0.with_measured_strain(measured_strain)
            .map(WasmCurveBinding)
            .map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn subscribe(&mut self, callback: Function) -> usize {
        self.0.subscribe(move |snapshot| {
            let strain = Float64Array::from(&snapshot.strain[..]);
            let rms = snapshot.rms.map(JsValue::from_f64).unwrap_or(JsValue::UNDEFINED);
            if let Err(error) = callback.call2(&JsValue::NULL, &strain, &rms) {
                web_sys::console::error_1(&error);
            }
        })
    }

    #[wasm_bindgen]
    pub fn unsubscribe(&mut self, id: usize) -> bool {
        self.0.unsubscribe(id)
    }

    #[wasm_bindgen]
    pub fn set_slider_values(
        &mut self,
        youngs_modulus_gpa: f64,
        friction_coefficient: f64,
        crack_density: f64,
        aspect_ratio_e4: f64,
        initial_strain: f64,
    ) -> Result<(), JsValue> {
        let parameters = ModelParameters::from_slider_units(
            youngs_modulus_gpa,
            friction_coefficient,
            crack_density,
            aspect_ratio_e4,
            initial_strain,
        );
        self.0.set_parameters(parameters).map(|_| ()).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.0.reset().map(|_| ()).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn strain(&self) -> Vec<f64> {
        self.0.snapshot().strain.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn youngs_modulus(&self) -> Vec<f64> {
        self.0.snapshot().youngs_modulus.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn rms(&self) -> Option<f64> {
        self.0.snapshot().rms
    }
}
