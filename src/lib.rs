//! Exacta is an exact computer algebra core.
//!
//! It provides arbitrary-precision rationals, matrices over exact fields,
//! univariate polynomials with rational coefficients and Gaussian integers.
//! No operation ever rounds: every result is an exact rational, polynomial or matrix.
//!
//! For example:
//!
//! ```
//! use exacta::poly::univariate::UnivariatePolynomial;
//!
//! // x^4 + 4 = (x^2 - 2x + 2)(x^2 + 2x + 2)
//! let p = UnivariatePolynomial::from_integers(&[4, 0, 0, 0, 1]);
//! let f = p.factors();
//! assert_eq!(f.len(), 2);
//! assert_eq!(f[0].degree(), 2);
//! ```
//!
//! The crate is organized the following way:
//! - [domains] holds the number domains and the ring traits they implement.
//! - [tensors] holds the matrices, their eliminations and spectral invariants.
//! - [poly] holds the univariate polynomials, their factorization, resultants and interpolation.

pub mod combinatorics;
pub mod domains;
pub mod poly;
pub mod tensors;
