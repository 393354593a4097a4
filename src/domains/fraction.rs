//! The fraction field of a Euclidean domain.
//!
//! The main use is the field of rational functions `Q(x)`, in which
//! matrices with polynomial entries such as `A - x*I` can be row reduced.

use std::fmt::{Display, Formatter};

use crate::poly::univariate::{UnivariatePolynomial, UnivariatePolynomialRing};

use super::{rational::RationalField, EuclideanDomain, Field, Ring};

/// The field of rational functions in one variable over the rationals.
pub type RationalFunctionField = FractionField<UnivariatePolynomialRing<RationalField>>;
/// A rational function in one variable over the rationals.
pub type RationalFunction = Fraction<UnivariatePolynomialRing<RationalField>>;

/// The fraction field of `R`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FractionField<R: Ring> {
    ring: R,
}

impl<R: Ring> FractionField<R> {
    pub const fn new(ring: R) -> FractionField<R> {
        FractionField { ring }
    }

    pub fn ring(&self) -> &R {
        &self.ring
    }
}

impl<R: Ring> Display for FractionField<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frac({})", self.ring)
    }
}

/// Rings whose elements have a canonical associate, used to normalize denominators.
pub trait FractionNormalization: Ring {
    /// Get the unit that turns `a` into its canonical associate.
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element;
}

impl<R: Field> FractionNormalization for UnivariatePolynomialRing<R> {
    /// The inverse of the leading coefficient, so that the associate is monic.
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element {
        a.constant(a.field().get_normalization_factor(&a.lcoeff()))
    }
}

impl<T: Field> FractionNormalization for T {
    fn get_normalization_factor(&self, a: &Self::Element) -> Self::Element {
        self.inv(a)
    }
}

/// An element of a [FractionField], in lowest terms with a normalized denominator.
/// Zero is stored as `0/1`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Fraction<R: Ring> {
    numerator: R::Element,
    denominator: R::Element,
}

impl<R: Ring> Fraction<R> {
    pub fn numerator(&self) -> R::Element {
        self.numerator.clone()
    }

    pub fn denominator(&self) -> R::Element {
        self.denominator.clone()
    }

    pub fn numerator_ref(&self) -> &R::Element {
        &self.numerator
    }

    pub fn denominator_ref(&self) -> &R::Element {
        &self.denominator
    }
}

impl<R: Ring> Display for Fraction<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if R::is_zero(&self.numerator) {
            return write!(f, "0");
        }

        write!(f, "({})/({})", self.numerator, self.denominator)
    }
}

impl<R: EuclideanDomain + FractionNormalization> FractionField<R> {
    /// Embed `numerator` with denominator one.
    pub fn from_numerator(&self, numerator: R::Element) -> Fraction<R> {
        Fraction {
            numerator,
            denominator: self.ring.one(),
        }
    }

    /// Scale numerator and denominator so that the denominator is its canonical associate.
    fn normalize(&self, numerator: R::Element, denominator: R::Element) -> Fraction<R> {
        let f = self.ring.get_normalization_factor(&denominator);
        if self.ring.is_one(&f) {
            return Fraction {
                numerator,
                denominator,
            };
        }

        Fraction {
            numerator: self.ring.mul(&numerator, &f),
            denominator: self.ring.mul(&denominator, &f),
        }
    }

    /// Divide out the gcd of `numerator` and the nonzero `denominator`, then normalize.
    fn reduce(&self, numerator: R::Element, denominator: R::Element) -> Fraction<R> {
        if R::is_zero(&numerator) {
            return self.zero();
        }

        let g = self.ring.gcd(&numerator, &denominator);
        if self.ring.is_one(&g) {
            self.normalize(numerator, denominator)
        } else {
            self.normalize(
                self.ring.quot_rem(&numerator, &g).0,
                self.ring.quot_rem(&denominator, &g).0,
            )
        }
    }

    fn exact_div(&self, a: &R::Element, b: &R::Element) -> R::Element {
        if self.ring.is_one(b) {
            a.clone()
        } else {
            self.ring.quot_rem(a, b).0
        }
    }
}

impl<R: EuclideanDomain + FractionNormalization> Ring for FractionField<R> {
    type Element = Fraction<R>;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let r = &self.ring;

        if a.denominator == b.denominator {
            return self.reduce(r.add(&a.numerator, &b.numerator), a.denominator.clone());
        }

        // a/(g*u) + b/(g*v) = (a*v + b*u) / (g*u*v)
        let g = r.gcd(&a.denominator, &b.denominator);
        let u = self.exact_div(&a.denominator, &g);
        let v = self.exact_div(&b.denominator, &g);

        let num = r.add(&r.mul(&a.numerator, &v), &r.mul(&b.numerator, &u));
        self.reduce(num, r.mul(&a.denominator, &v))
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add(a, &self.neg(b))
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        if Self::is_zero(a) || Self::is_zero(b) {
            return self.zero();
        }

        // cancel crosswise, the factors are already in lowest terms
        let r = &self.ring;
        let g1 = r.gcd(&a.numerator, &b.denominator);
        let g2 = r.gcd(&b.numerator, &a.denominator);

        self.normalize(
            r.mul(
                &self.exact_div(&a.numerator, &g1),
                &self.exact_div(&b.numerator, &g2),
            ),
            r.mul(
                &self.exact_div(&a.denominator, &g2),
                &self.exact_div(&b.denominator, &g1),
            ),
        )
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.add(a, b);
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.sub(a, b);
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.mul(a, b);
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = self.add(a, &self.mul(b, c));
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = self.sub(a, &self.mul(b, c));
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        Fraction {
            numerator: self.ring.neg(&a.numerator),
            denominator: a.denominator.clone(),
        }
    }

    fn zero(&self) -> Self::Element {
        self.from_numerator(self.ring.zero())
    }

    fn one(&self) -> Self::Element {
        self.from_numerator(self.ring.one())
    }

    fn nth(&self, n: u64) -> Self::Element {
        self.from_numerator(self.ring.nth(n))
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        Fraction {
            numerator: self.ring.pow(&b.numerator, e),
            denominator: self.ring.pow(&b.denominator, e),
        }
    }

    fn is_zero(a: &Self::Element) -> bool {
        R::is_zero(&a.numerator)
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        self.ring.is_one(&a.numerator) && self.ring.is_one(&a.denominator)
    }
}

impl<R: EuclideanDomain + FractionNormalization> EuclideanDomain for FractionField<R> {
    fn rem(&self, _: &Self::Element, _: &Self::Element) -> Self::Element {
        self.zero()
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (self.div(a, b), self.zero())
    }

    /// Every nonzero element is a unit.
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        if Self::is_zero(a) && Self::is_zero(b) {
            self.zero()
        } else {
            self.one()
        }
    }
}

impl<R: EuclideanDomain + FractionNormalization> Field for FractionField<R> {
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.mul(a, &self.inv(b))
    }

    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = self.div(a, b);
    }

    fn inv(&self, a: &Self::Element) -> Self::Element {
        if Self::is_zero(a) {
            panic!("Division by zero");
        }

        self.normalize(a.denominator.clone(), a.numerator.clone())
    }
}

impl RationalFunctionField {
    /// The field `Q(x)`.
    pub fn rational_functions() -> RationalFunctionField {
        FractionField::new(UnivariatePolynomialRing::new(RationalField::new()))
    }

    /// Embed a polynomial as a rational function with denominator one.
    pub fn from_polynomial(&self, p: UnivariatePolynomial<RationalField>) -> RationalFunction {
        self.from_numerator(p)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{rational::Q, EuclideanDomain, Field, Ring},
        poly::univariate::UnivariatePolynomial,
    };

    use super::RationalFunctionField;

    fn p(c: &[i64]) -> UnivariatePolynomial<Q> {
        UnivariatePolynomial::from_integers(c)
    }

    #[test]
    fn rational_functions() {
        let f = RationalFunctionField::rational_functions();
        let x = f.from_polynomial(p(&[0, 1]));
        let one = f.one();

        // 1/(x-1) - 1/(x+1) = 2/(x^2-1)
        let a = f.inv(&f.sub(&x, &one));
        let b = f.inv(&f.add(&x, &one));
        let c = f.sub(&a, &b);
        assert_eq!(c.numerator(), p(&[2]));
        assert_eq!(c.denominator(), p(&[-1, 0, 1]));
        assert_eq!(c.to_string(), "(2)/(x^2-1)");

        // (x^2-1)/(2x-2) = (x+1)/2
        let d = f.div(
            &f.from_polynomial(p(&[-1, 0, 1])),
            &f.from_polynomial(p(&[-2, 2])),
        );
        assert_eq!(d.denominator_ref(), &p(&[1]));
        assert_eq!(
            d.numerator_ref(),
            &"1/2,1/2".parse::<UnivariatePolynomial<Q>>().unwrap()
        );

        assert!(RationalFunctionField::is_zero(&f.sub(&d, &d)));
        assert_eq!(f.sub(&d, &d), f.zero());
        assert_eq!(f.quot_rem(&d, &d), (f.one(), f.zero()));
        assert!(f.is_one(&f.mul(&d, &f.inv(&d))));
        assert_eq!(f.mul(&d, &f.zero()), f.zero());
        assert_eq!(f.zero().to_string(), "0");
    }

    #[test]
    fn common_denominators() {
        let f = RationalFunctionField::rational_functions();
        let x = f.from_polynomial(p(&[0, 1]));

        // 1/(x(x+1)) + 1/(x(x-1)) = 2/((x+1)(x-1))
        let a = f.inv(&f.from_polynomial(p(&[0, 1, 1])));
        let b = f.inv(&f.from_polynomial(p(&[0, -1, 1])));
        let s = f.add(&a, &b);
        assert_eq!(s.numerator(), p(&[2]));
        assert_eq!(s.denominator(), p(&[-1, 0, 1]));

        // denominators are monic
        let h = f.inv(&f.from_polynomial(p(&[3, -6])));
        assert_eq!(h.numerator(), "-1/6".parse::<UnivariatePolynomial<Q>>().unwrap());
        assert_eq!(h.denominator(), "-1/2,1".parse::<UnivariatePolynomial<Q>>().unwrap());

        assert_eq!(f.pow(&x, 3), f.from_polynomial(p(&[0, 0, 0, 1])));
        assert_eq!(f.nth(4), f.from_polynomial(p(&[4])));
        assert_eq!(f.gcd(&x, &f.zero()), f.one());
    }
}
