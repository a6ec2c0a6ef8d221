mod angles;
mod compliance;
mod regime;
mod crack_model;

pub use angles::*;
pub use compliance::*;
pub use regime::*;
pub use crack_model::*;

#[cfg(test)]
mod compliance_tests;
