//! Dense univariate polynomials.
//!
//! The generic arithmetic in [univariate] works over any [Ring](crate::domains::Ring),
//! division and gcds need a [Field](crate::domains::Field). Polynomials over the rationals
//! additionally support root finding and factorization ([factor]), resultants ([resultant])
//! and interpolation ([interpolate]).
pub mod factor;
pub mod interpolate;
pub mod resultant;
pub mod univariate;

use crate::domains::rational::RationalError;

/// Errors that can occur when performing polynomial operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolynomialError {
    DivisionByZero,
    DuplicatePoint,
    Underdetermined,
    Parse(String),
}

impl std::fmt::Display for PolynomialError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PolynomialError::DivisionByZero => write!(f, "Cannot divide by the zero polynomial"),
            PolynomialError::DuplicatePoint => {
                write!(f, "The sample points do not have distinct abscissae")
            }
            PolynomialError::Underdetermined => {
                write!(f, "There are not enough sample points for the requested degree")
            }
            PolynomialError::Parse(s) => write!(f, "Could not parse polynomial: {}", s),
        }
    }
}

impl std::error::Error for PolynomialError {}

impl From<RationalError> for PolynomialError {
    fn from(e: RationalError) -> Self {
        PolynomialError::Parse(e.to_string())
    }
}
