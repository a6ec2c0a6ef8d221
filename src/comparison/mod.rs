#[cfg(feature = "comparison")]
mod comparison;
#[cfg(feature = "comparison")]
pub use comparison::*;

#[cfg(test)]
#[cfg(feature = "comparison")]
mod comparison_tests;
