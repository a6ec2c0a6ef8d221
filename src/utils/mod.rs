pub mod constants;
mod math_helpers;

pub use math_helpers::*;

#[cfg(test)]
mod math_helpers_tests;
