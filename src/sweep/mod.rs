#[cfg(feature = "sweep")]
mod parameter_sweep;
#[cfg(feature = "sweep")]
pub use parameter_sweep::*;
