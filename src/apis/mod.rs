#[cfg(feature = "binding")]
pub mod curve_binding;
#[cfg(feature = "binding")]
pub use curve_binding::*;

#[cfg(test)]
#[cfg(feature = "binding")]
mod curve_binding_tests;
