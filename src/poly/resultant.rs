//! Resultants and discriminants through the Sylvester matrix.

use crate::{
    domains::rational::{Rational, Q},
    tensors::matrix::Matrix,
};

use super::univariate::UnivariatePolynomial;

impl UnivariatePolynomial<Q> {
    /// Construct the Sylvester matrix of `self` (degree `m`) and `other` (degree `n`):
    /// `n` shifted rows of the coefficients of `self` followed by `m` shifted rows
    /// of the coefficients of `other`, highest degree first.
    pub fn sylvester_matrix(&self, other: &Self) -> Matrix<Q> {
        let (m, n) = (self.degree(), other.degree());
        let mut s = Matrix::new(m + n, m + n, Q);

        for i in 0..n {
            for (j, c) in self.coefficients.iter().rev().enumerate() {
                s[(i, i + j)] = c.clone();
            }
        }

        for i in 0..m {
            for (j, c) in other.coefficients.iter().rev().enumerate() {
                s[(n + i, i + j)] = c.clone();
            }
        }

        s
    }

    /// Compute the resultant of `self` and `other`, which vanishes exactly
    /// when they have a common root. The resultant with the zero polynomial is zero.
    pub fn resultant(&self, other: &Self) -> Rational {
        if self.is_zero() || other.is_zero() {
            return Rational::zero();
        }

        self.sylvester_matrix(other).det_square()
    }

    /// Compute the discriminant `(-1)^(n(n-1)/2) res(P, P') / lc(P)` of a polynomial `P` of degree `n`.
    /// A nonzero constant has discriminant one and the zero polynomial zero.
    pub fn discriminant(&self) -> Rational {
        if self.is_zero() {
            return Rational::zero();
        }
        if self.is_constant() {
            return Rational::one();
        }

        let n = self.degree();
        let r = &self.resultant(&self.derivative()) / &self.lcoeff();

        if (n * (n - 1) / 2) % 2 == 1 {
            -r
        } else {
            r
        }
    }
}

#[cfg(test)]
mod test {
    use crate::domains::rational::{Rational, Q};

    use super::UnivariatePolynomial;

    fn p(c: &[i64]) -> UnivariatePolynomial<Q> {
        UnivariatePolynomial::from_integers(c)
    }

    #[test]
    fn sylvester() {
        let s = p(&[-1, 0, 1]).sylvester_matrix(&p(&[0, 2]));
        assert_eq!(s, "1,0,-1;2,0,0;0,2,0".parse().unwrap());
    }

    #[test]
    fn resultant() {
        assert_eq!(p(&[-2, 1]).resultant(&p(&[-3, 1])), Rational::new(-1, 1));
        assert_eq!(p(&[-1, 0, 1]).resultant(&p(&[1, 1])), Rational::zero());
        assert_eq!(p(&[3]).resultant(&p(&[1, 0, 1])), Rational::new(9, 1));
        assert_eq!(p(&[3]).resultant(&p(&[5])), Rational::one());
        assert_eq!(p(&[1, 1]).resultant(&p(&[])), Rational::zero());

        // res(f, g) = lc(f)^deg(g) * prod g(roots of f)
        let f = p(&[-2, 0, 1]);
        let g = p(&[1, 1, 1]);
        assert_eq!(f.resultant(&g), Rational::new(7, 1));
    }

    #[test]
    fn discriminant() {
        assert_eq!(p(&[-1, 0, 1]).discriminant(), Rational::new(4, 1));
        assert_eq!(p(&[1, 2, 1]).discriminant(), Rational::zero());
        // b^2 - 4ac
        assert_eq!(p(&[5, 3, 2]).discriminant(), Rational::new(-31, 1));
        // -4p^3 - 27q^2 for x^3 + p x + q
        assert_eq!(p(&[1, -1, 0, 1]).discriminant(), Rational::new(-23, 1));
        assert_eq!(p(&[7, 2]).discriminant(), Rational::one());
    }
}
