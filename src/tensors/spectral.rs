//! Characteristic and minimal polynomials of rational matrices.

use tracing::{debug, instrument};

use crate::{
    domains::{
        fraction::RationalFunctionField,
        rational::{Rational, RationalField},
        Ring,
    },
    poly::univariate::UnivariatePolynomial,
};

use super::matrix::{Matrix, MatrixError};

impl Matrix<RationalField> {
    /// Compute `det(A - x*I)` by row reducing `A - x*I` over the field of rational functions `Q(x)`.
    #[instrument(level = "debug", skip_all)]
    pub fn characteristic_polynomial(
        &self,
    ) -> Result<UnivariatePolynomial<RationalField>, MatrixError<RationalField>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        let field = RationalFunctionField::rational_functions();
        let poly_ring = field.ring().clone();
        let x = field.from_polynomial(poly_ring.variable());

        let mut m = self.map(
            |e| field.from_polynomial(poly_ring.zero().constant(e.clone())),
            field.clone(),
        );
        for i in 0..self.nrows() {
            let d = field.sub(&m[(i, i)], &x);
            m[(i, i)] = d;
        }

        let det = m.det_square();
        debug!("det(A - x*I) = {}", det);

        // the determinant of a polynomial matrix is a polynomial
        Ok(&det.numerator() / det.denominator_ref())
    }

    /// Compute the monic polynomial `p` of least degree with `p(A) v = 0`.
    ///
    /// The Krylov vectors `v, A v, A^2 v, ...` are row reduced as columns; the first
    /// dependent column gives the coefficients.
    #[instrument(level = "debug", skip_all)]
    pub fn minimal_polynomial_of_vector(
        &self,
        v: &[Rational],
    ) -> Result<UnivariatePolynomial<RationalField>, MatrixError<RationalField>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }
        if v.len() != self.nrows() {
            return Err(MatrixError::ShapeMismatch);
        }

        let n = self.nrows();
        let mut columns = Vec::with_capacity(n + 1);
        let mut w = Matrix::new_vec(v.to_vec(), self.field.clone());
        for _ in 0..=n {
            let next = self * &w;
            columns.push(w.column(0));
            w = next;
        }

        let krylov = Matrix::from_nested_vec(columns, self.field.clone())?.transpose();
        let r = krylov.reduced_row_echelon();

        let k = (0..=n)
            .find(|&j| j == n || r[(j, j)].is_zero())
            .unwrap_or(n);

        let mut coefficients: Vec<Rational> = (0..k).map(|i| -&r[(i, k)]).collect();
        coefficients.push(Rational::one());

        let p = UnivariatePolynomial::from_coefficients(coefficients, &self.field);
        debug!("Krylov dependency at degree {}: {}", k, p);
        Ok(p)
    }

    /// Compute the minimal polynomial: the monic polynomial `p` of least degree with `p(A) = 0`.
    ///
    /// It is the least common multiple of the minimal polynomials of the standard basis vectors.
    pub fn minimal_polynomial(
        &self,
    ) -> Result<UnivariatePolynomial<RationalField>, MatrixError<RationalField>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        let mut p = UnivariatePolynomial::new(&self.field).one();
        for i in 0..self.nrows() {
            let mut e = vec![Rational::zero(); self.nrows()];
            e[i] = Rational::one();
            p = p.lcm(&self.minimal_polynomial_of_vector(&e)?);
        }

        Ok(p)
    }

    /// Evaluate the polynomial `p` at this matrix using Horner's scheme.
    pub fn evaluate_polynomial(
        &self,
        p: &UnivariatePolynomial<RationalField>,
    ) -> Result<Matrix<RationalField>, MatrixError<RationalField>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare);
        }

        let id = Matrix::identity(self.nrows(), self.field.clone());
        let mut res = Matrix::new(self.nrows(), self.ncols(), self.field.clone());
        for c in p.coefficients().iter().rev() {
            res = &(&res * self) + &id.mul_scalar(c);
        }

        Ok(res)
    }
}
