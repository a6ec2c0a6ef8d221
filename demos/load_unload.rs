// demos/load_unload.rs

use log::info;
use rs_crack_model::apis::CurveBinding;
use rs_crack_model::utils::constants::{
    SLIDER_INITIAL_ASPECT_RATIO_E4, SLIDER_INITIAL_CRACK_DENSITY, SLIDER_INITIAL_FRICTION_COEFFICIENT,
    SLIDER_INITIAL_STRAIN, SLIDER_INITIAL_YOUNGS_MODULUS_GPA,
};
use rs_crack_model::{CrackModel, ModelError, ModelParameters};

fn main() -> Result<(), ModelError> {
    env_logger::init();

    // Load to 120 MPa and unload back to zero.
    let stress: Vec<f64> = (0..=24)
        .map(|i| 5.0 * i as f64)
        .chain((0..24).rev().map(|i| 5.0 * i as f64))
        .collect();

    let params = ModelParameters::from_slider_units(
        SLIDER_INITIAL_YOUNGS_MODULUS_GPA,
        SLIDER_INITIAL_FRICTION_COEFFICIENT,
        SLIDER_INITIAL_CRACK_DENSITY,
        SLIDER_INITIAL_ASPECT_RATIO_E4,
        SLIDER_INITIAL_STRAIN,
    );
    let model = CrackModel::new(&stress, params)?;

    println!("{:>10} {:>14} {:>12} {:>16}", "stress", "strain", "E", "regime");
    for i in 0..model.len() {
        println!(
            "{:>10.1} {:>14.6e} {:>12.1} {:>16}",
            model.stress()[i],
            model.strain()[i],
            model.youngs_modulus()[i],
            model.regimes()[i]
        );
    }

    // Stand-in for a measured curve: the same path with a stiffer rock.
    let measured = CrackModel::new(&stress, ModelParameters { youngs_modulus: 80e3, ..params })?;
    let mut binding = CurveBinding::new(stress, params)?.with_measured_strain(measured.strain().to_vec())?;
    binding.subscribe(|snapshot| {
        info!("redraw: final strain {:e}, rms {:?}", snapshot.strain[snapshot.strain.len() - 1], snapshot.rms);
    });

    for density in [1.0, 2.0, 3.0] {
        let rms = binding.update(|p| p.crack_density = density)?.rms;
        println!("Y = {:.1}: rms deviation {:?}", density, rms);
    }
    binding.reset()?;

    Ok(())
}
