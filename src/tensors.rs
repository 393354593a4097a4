//! Linear algebra over exact fields.
//!
//! [matrix] holds the generic [Matrix](matrix::Matrix) type and its elimination engine,
//! [spectral] the characteristic and minimal polynomials of rational matrices.

pub mod matrix;
pub mod spectral;
