//! Interpolation and least-squares fitting of polynomials through rational sample points.

use crate::{
    domains::rational::{Rational, Q},
    tensors::matrix::Matrix,
};

use super::{univariate::UnivariatePolynomial, PolynomialError};

impl UnivariatePolynomial<Q> {
    /// Compute the polynomial of least degree through `points`, given as `(x, y)` pairs,
    /// in Lagrange's product form.
    pub fn lagrange(points: &[(Rational, Rational)]) -> Result<Self, PolynomialError> {
        let zero = UnivariatePolynomial::new(&Q);

        for (i, (x, _)) in points.iter().enumerate() {
            if points[..i].iter().any(|(x2, _)| x2 == x) {
                return Err(PolynomialError::DuplicatePoint);
            }
        }

        let x = zero.variable();
        let mut full = zero.one();
        for (xi, _) in points {
            full = &full * &(&x - &zero.constant(xi.clone()));
        }

        let mut res = zero.clone();
        for (i, (xi, yi)) in points.iter().enumerate() {
            if yi.is_zero() {
                continue;
            }

            let mut w = Rational::one();
            for (j, (xj, _)) in points.iter().enumerate() {
                if i != j {
                    w = &w * &(xi - xj);
                }
            }

            let basis = &full / &(&x - &zero.constant(xi.clone()));
            res = res + basis.mul_coeff(&(yi / &w));
        }

        Ok(res)
    }

    /// Fit a polynomial of at most the given degree through `points` in the least-squares sense,
    /// by solving the normal equations `(V^T V) c = V^T y` for the Vandermonde matrix `V`.
    pub fn regression(
        points: &[(Rational, Rational)],
        degree: usize,
    ) -> Result<Self, PolynomialError> {
        let mut v = Matrix::new(points.len(), degree + 1, Q);
        for (i, (x, _)) in points.iter().enumerate() {
            let mut p = Rational::one();
            for j in 0..=degree {
                v[(i, j)] = p.clone();
                p = &p * x;
            }
        }

        let y = Matrix::new_vec(points.iter().map(|(_, y)| y.clone()).collect(), Q);
        let vt = v.transpose();

        let (left, right) = (&vt * &v)
            .reduced_row_echelon_augmented(&(&vt * &y))
            .map_err(|_| PolynomialError::Underdetermined)?;

        if left != Matrix::identity(degree + 1, Q) {
            return Err(PolynomialError::Underdetermined);
        }

        Ok(UnivariatePolynomial::from_coefficients(right.column(0), &Q))
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::rational::{Rational, Q},
        poly::{univariate::UnivariatePolynomial, PolynomialError},
    };

    fn pts(p: &[(i64, i64)]) -> Vec<(Rational, Rational)> {
        p.iter().map(|(x, y)| ((*x).into(), (*y).into())).collect()
    }

    #[test]
    fn lagrange() {
        let points = pts(&[(0, 1), (1, 0), (2, 3)]);
        let p = UnivariatePolynomial::lagrange(&points).unwrap();
        assert_eq!(p, UnivariatePolynomial::from_integers(&[1, -3, 2]));
        for (x, y) in &points {
            assert_eq!(&p.evaluate(x), y);
        }

        let half = vec![
            (Rational::new(1, 2), Rational::new(1, 4)),
            (Rational::new(-1, 3), Rational::new(1, 9)),
            (Rational::zero(), Rational::zero()),
        ];
        assert_eq!(
            UnivariatePolynomial::lagrange(&half).unwrap(),
            UnivariatePolynomial::from_integers(&[0, 0, 1])
        );

        assert!(UnivariatePolynomial::lagrange(&[]).unwrap().is_zero());
        assert_eq!(
            UnivariatePolynomial::<Q>::lagrange(&pts(&[(1, 2), (1, 3)])),
            Err(PolynomialError::DuplicatePoint)
        );
    }

    #[test]
    fn regression() {
        // exact fit
        let points = pts(&[(0, 1), (1, 3), (2, 5), (3, 7)]);
        assert_eq!(
            UnivariatePolynomial::regression(&points, 1).unwrap(),
            UnivariatePolynomial::from_integers(&[1, 2])
        );

        // least squares line through (0,0), (1,1), (2,1): y = 1/6 + x/2
        let points = pts(&[(0, 0), (1, 1), (2, 1)]);
        assert_eq!(
            UnivariatePolynomial::regression(&points, 1).unwrap(),
            "1/6,1/2".parse().unwrap()
        );

        assert_eq!(
            UnivariatePolynomial::<Q>::regression(&pts(&[(1, 1), (1, 2)]), 1),
            Err(PolynomialError::Underdetermined)
        );
    }
}
