use std::{
    ops::{Add, Div, Mul, Neg, Sub},
    str::FromStr,
};

use crate::domains::{
    integer::Integer,
    rational::{Rational, Q},
    EuclideanDomain, Field, Ring,
};

use super::PolynomialError;

/// The ring of univariate polynomials with coefficients in `R`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct UnivariatePolynomialRing<R: Ring> {
    ring: R,
}

impl<R: Ring> UnivariatePolynomialRing<R> {
    pub fn new(coeff_ring: R) -> UnivariatePolynomialRing<R> {
        UnivariatePolynomialRing { ring: coeff_ring }
    }

    /// The polynomial `x`.
    pub fn variable(&self) -> UnivariatePolynomial<R> {
        UnivariatePolynomial::new(&self.ring).variable()
    }
}

impl<R: Ring> std::fmt::Display for UnivariatePolynomialRing<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[x]", self.ring)
    }
}

impl<R: Ring> Ring for UnivariatePolynomialRing<R> {
    type Element = UnivariatePolynomial<R>;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = std::mem::replace(a, b.zero()) + b.clone();
    }

    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = std::mem::replace(a, b.zero()) - b.clone();
    }

    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a = std::mem::replace(a, b.zero()) * b;
    }

    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = std::mem::replace(a, b.zero()) + b * c
    }

    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a = std::mem::replace(a, b.zero()) - b * c
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        a.clone().neg()
    }

    fn zero(&self) -> Self::Element {
        UnivariatePolynomial::new(&self.ring)
    }

    fn one(&self) -> Self::Element {
        self.zero().one()
    }

    fn nth(&self, n: u64) -> Self::Element {
        self.zero().constant(self.ring.nth(n))
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        b.pow(e as usize)
    }

    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }
}

impl<R: Field> EuclideanDomain for UnivariatePolynomialRing<R> {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.quot_rem(a, b).1
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        if b.is_zero() {
            panic!("Cannot divide by the zero polynomial");
        }
        a.quot_rem_unchecked(b)
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.monic_gcd(b)
    }
}

/// A dense univariate polynomial, stored as its coefficients from low to high degree.
///
/// The highest stored coefficient is never zero, so the zero polynomial has no coefficients.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UnivariatePolynomial<F: Ring> {
    pub(crate) coefficients: Vec<F::Element>,
    pub(crate) field: F,
}

impl<F: Ring> std::fmt::Debug for UnivariatePolynomial<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "[]");
        }
        let mut first = true;
        write!(f, "[ ")?;
        for c in self.coefficients.iter() {
            if first {
                first = false;
            } else {
                write!(f, ", ")?;
            }
            write!(f, "{{ {:?} }}", c)?;
        }
        write!(f, " ]")
    }
}

impl<F: Ring> std::fmt::Display for UnivariatePolynomial<F> {
    /// Print the polynomial from high to low degree, as in `3*x^2-1/2*x+1`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (e, c) in self.coefficients.iter().enumerate().rev() {
            if F::is_zero(c) {
                continue;
            }

            let coeff = if e > 0 && self.field.is_one(c) {
                String::new()
            } else if e > 0 && self.field.is_one(&self.field.neg(c)) {
                "-".to_owned()
            } else if e > 0 {
                format!("{}*", c)
            } else {
                c.to_string()
            };

            if !first && !coeff.starts_with('-') {
                write!(f, "+")?;
            }
            first = false;

            match e {
                0 => write!(f, "{}", coeff)?,
                1 => write!(f, "{}x", coeff)?,
                _ => write!(f, "{}x^{}", coeff, e)?,
            }
        }
        Ok(())
    }
}

impl<F: Ring> UnivariatePolynomial<F> {
    /// Constructs a zero polynomial. Instead of using this constructor,
    /// prefer to create new polynomials from existing ones, so that the
    /// field is inherited.
    #[inline]
    pub fn new(field: &F) -> Self {
        Self {
            coefficients: vec![],
            field: field.clone(),
        }
    }

    /// Constructs a polynomial from its coefficients, lowest degree first.
    /// Trailing zeros are removed.
    pub fn from_coefficients(coefficients: Vec<F::Element>, field: &F) -> Self {
        let mut p = Self {
            coefficients,
            field: field.clone(),
        };
        p.truncate();
        p
    }

    /// Constructs a zero polynomial, inheriting the field from `self`.
    #[inline]
    pub fn zero(&self) -> Self {
        Self {
            coefficients: vec![],
            field: self.field.clone(),
        }
    }

    /// Constructs a constant polynomial,
    /// inheriting the field from `self`.
    #[inline]
    pub fn constant(&self, coeff: F::Element) -> Self {
        if F::is_zero(&coeff) {
            return self.zero();
        }

        Self {
            coefficients: vec![coeff],
            field: self.field.clone(),
        }
    }

    /// Constructs a polynomial that is one, inheriting the field from `self`.
    #[inline]
    pub fn one(&self) -> Self {
        Self {
            coefficients: vec![self.field.one()],
            field: self.field.clone(),
        }
    }

    /// Constructs a polynomial with a single term.
    #[inline]
    pub fn monomial(&self, coeff: F::Element, exponent: usize) -> Self {
        if F::is_zero(&coeff) {
            return self.zero();
        }

        let mut coefficients = vec![self.field.zero(); exponent + 1];
        coefficients[exponent] = coeff;

        Self {
            coefficients,
            field: self.field.clone(),
        }
    }

    /// Constructs the polynomial `x`.
    #[inline]
    pub fn variable(&self) -> Self {
        self.monomial(self.field.one(), 1)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.coefficients.len() == 1 && self.field.is_one(&self.coefficients[0])
    }

    /// Returns true if the polynomial is constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coefficients.len() <= 1
    }

    /// Get the constant term of the polynomial.
    #[inline]
    pub fn get_constant(&self) -> F::Element {
        if self.is_zero() {
            return self.field.zero();
        }

        self.coefficients[0].clone()
    }

    /// Get the leading coefficient.
    pub fn lcoeff(&self) -> F::Element {
        match self.coefficients.last() {
            Some(c) => c.clone(),
            None => self.field.zero(),
        }
    }

    /// The degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        if self.is_zero() {
            return 0;
        }

        self.coefficients.len() - 1
    }

    /// The coefficients, lowest degree first.
    pub fn coefficients(&self) -> &[F::Element] {
        &self.coefficients
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    /// Compute `self^pow`.
    pub fn pow(&self, mut pow: usize) -> Self {
        if pow == 0 {
            return self.one();
        }

        let mut x = self.clone();
        let mut y = self.one();
        while pow != 1 {
            if pow % 2 == 1 {
                y = &y * &x;
                pow -= 1;
            }

            x = &x * &x;
            pow /= 2;
        }

        x * &y
    }

    /// Multiply by `x^exp`.
    pub fn mul_exp(&self, exp: usize) -> Self {
        if exp == 0 || self.is_zero() {
            return self.clone();
        }

        let mut a = self.zero();
        a.coefficients = vec![self.field.zero(); self.degree() + exp + 1];

        for (cn, c) in a.coefficients.iter_mut().skip(exp).zip(&self.coefficients) {
            *cn = c.clone();
        }

        a
    }

    pub fn mul_coeff(mut self, coeff: &F::Element) -> Self {
        for c in &mut self.coefficients {
            if !F::is_zero(c) {
                self.field.mul_assign(c, coeff);
            }
        }

        self.truncate();
        self
    }

    pub(crate) fn truncate(&mut self) {
        let d = self
            .coefficients
            .iter()
            .rev()
            .position(|c| !F::is_zero(c))
            .unwrap_or(self.coefficients.len());

        self.coefficients.truncate(self.coefficients.len() - d);
    }

    /// Evaluate the polynomial at `x` using Horner's scheme.
    pub fn evaluate(&self, x: &F::Element) -> F::Element {
        let mut res = self.field.zero();

        for c in self.coefficients.iter().rev() {
            self.field.mul_assign(&mut res, x);
            self.field.add_assign(&mut res, c);
        }

        res
    }

    /// Compute `self(other(x))`.
    pub fn compose(&self, other: &Self) -> Self {
        let mut res = self.zero();

        for c in self.coefficients.iter().rev() {
            res = &res * other;
            res = res + self.constant(c.clone());
        }

        res
    }

    /// Take the derivative with respect to `x`.
    pub fn derivative(&self) -> Self {
        if self.is_constant() {
            return self.zero();
        }

        let mut res = self.zero();
        res.coefficients = self
            .coefficients
            .iter()
            .enumerate()
            .skip(1)
            .map(|(e, c)| self.field.mul(c, &self.field.nth(e as u64)))
            .collect();

        res.truncate();
        res
    }
}

impl<F: Ring> Add for UnivariatePolynomial<F> {
    type Output = Self;

    fn add(mut self, mut other: Self) -> Self::Output {
        assert_eq!(self.field, other.field);

        if self.is_zero() {
            return other;
        }
        if other.is_zero() {
            return self;
        }

        if self.degree() < other.degree() {
            std::mem::swap(&mut self, &mut other);
        }

        for (i, c) in other.coefficients.iter().enumerate() {
            self.field.add_assign(&mut self.coefficients[i], c);
        }

        self.truncate();

        self
    }
}

impl<'a, 'b, F: Ring> Add<&'a UnivariatePolynomial<F>> for &'b UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    fn add(self, other: &'a UnivariatePolynomial<F>) -> Self::Output {
        (self.clone()).add(other.clone())
    }
}

impl<F: Ring> Sub for UnivariatePolynomial<F> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        self.add(other.neg())
    }
}

impl<'a, 'b, F: Ring> Sub<&'a UnivariatePolynomial<F>> for &'b UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    fn sub(self, other: &'a UnivariatePolynomial<F>) -> Self::Output {
        (self.clone()).add(other.clone().neg())
    }
}

impl<F: Ring> Neg for UnivariatePolynomial<F> {
    type Output = Self;
    fn neg(mut self) -> Self::Output {
        for c in &mut self.coefficients {
            *c = self.field.neg(c);
        }
        self
    }
}

impl<'a, 'b, F: Ring> Mul<&'a UnivariatePolynomial<F>> for &'b UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    #[inline]
    fn mul(self, rhs: &'a UnivariatePolynomial<F>) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return self.zero();
        }

        if self.is_constant() {
            return rhs.clone().mul_coeff(&self.coefficients[0]);
        }

        if rhs.is_constant() {
            return self.clone().mul_coeff(&rhs.coefficients[0]);
        }

        let n = self.degree();
        let m = rhs.degree();

        let mut res = self.zero();
        res.coefficients = vec![self.field.zero(); n + m + 1];

        for (e1, c1) in self.coefficients.iter().enumerate() {
            if F::is_zero(c1) {
                continue;
            }

            for (e2, c2) in rhs.coefficients.iter().enumerate() {
                if !F::is_zero(c2) {
                    self.field
                        .add_mul_assign(&mut res.coefficients[e1 + e2], c1, c2);
                }
            }
        }

        res.truncate();
        res
    }
}

impl<'a, F: Ring> Mul<&'a UnivariatePolynomial<F>> for UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    #[inline]
    fn mul(self, rhs: &'a UnivariatePolynomial<F>) -> Self::Output {
        (&self) * rhs
    }
}

impl<F: Ring> Mul for UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    #[inline]
    fn mul(self, rhs: UnivariatePolynomial<F>) -> Self::Output {
        (&self) * &rhs
    }
}

impl<'a, 'b, F: Field> Div<&'a UnivariatePolynomial<F>> for &'b UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    /// Exact division. Panics when `other` does not divide `self`.
    fn div(self, other: &'a UnivariatePolynomial<F>) -> Self::Output {
        self.divides(other)
            .unwrap_or_else(|| panic!("No clean division of {} by {}", self, other))
    }
}

impl<'a, F: Field> Div<&'a UnivariatePolynomial<F>> for UnivariatePolynomial<F> {
    type Output = UnivariatePolynomial<F>;

    fn div(self: UnivariatePolynomial<F>, other: &'a UnivariatePolynomial<F>) -> Self::Output {
        (&self).div(other)
    }
}

impl<F: Field> UnivariatePolynomial<F> {
    /// Divide `self` by `div`, returning the quotient and remainder
    /// such that `self = q * div + r` and `deg(r) < deg(div)`.
    pub fn quot_rem(&self, div: &Self) -> Result<(Self, Self), PolynomialError> {
        if div.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }

        Ok(self.quot_rem_unchecked(div))
    }

    /// Long division. `div` must be nonzero.
    pub(crate) fn quot_rem_unchecked(&self, div: &Self) -> (Self, Self) {
        if self.is_zero() || self.degree() < div.degree() {
            return (self.zero(), self.clone());
        }

        let m = div.degree();
        let u = self.field.inv(&div.coefficients[m]);

        let mut q = self.zero();
        q.coefficients = vec![self.field.zero(); self.degree() - m + 1];

        let mut r = self.clone();
        while !r.is_zero() && r.degree() >= m {
            let n = r.degree();
            let qq = self.field.mul(&r.coefficients[n], &u);
            for (i, c) in div.coefficients.iter().enumerate() {
                self.field
                    .sub_mul_assign(&mut r.coefficients[n - m + i], c, &qq);
            }
            // the leading coefficient cancels exactly
            r.truncate();
            q.coefficients[n - m] = qq;
        }

        q.truncate();

        (q, r)
    }

    /// Compute the remainder `self % div`.
    pub fn rem(&self, div: &Self) -> Result<Self, PolynomialError> {
        Ok(self.quot_rem(div)?.1)
    }

    /// Return the quotient if `div` divides `self` exactly.
    pub fn divides(&self, div: &Self) -> Option<Self> {
        if div.is_zero() {
            return None;
        }

        if self.is_zero() {
            return Some(self.clone());
        }

        if self.degree() < div.degree() {
            return None;
        }

        let (q, r) = self.quot_rem_unchecked(div);
        if r.is_zero() {
            Some(q)
        } else {
            None
        }
    }

    /// Divide every coefficient by the leading coefficient.
    pub fn make_monic(self) -> Self {
        if self.is_zero() {
            return self;
        }

        let l = self.field.inv(&self.lcoeff());
        self.mul_coeff(&l)
    }

    /// Compute the univariate GCD using Euclid's algorithm. The result is normalized to be monic.
    pub fn monic_gcd(&self, b: &Self) -> Self {
        if self.is_zero() {
            return b.clone().make_monic();
        }
        if b.is_zero() {
            return self.clone().make_monic();
        }

        let mut c = self.clone();
        let mut d = b.clone();
        if self.degree() < b.degree() {
            std::mem::swap(&mut c, &mut d);
        }

        let mut r = c.quot_rem_unchecked(&d).1;
        while !r.is_zero() {
            c = d;
            d = r.make_monic();
            r = c.quot_rem_unchecked(&d).1;
        }

        d.make_monic()
    }
}

impl UnivariatePolynomial<Q> {
    /// Create a polynomial with rational coefficients from integer coefficients, lowest degree first.
    pub fn from_integers(coefficients: &[i64]) -> Self {
        Self::from_coefficients(coefficients.iter().map(|c| (*c).into()).collect(), &Q)
    }

    /// The integer coefficients of `self` scaled by the lcm of the denominators
    /// and divided by their gcd.
    pub fn to_integer_coefficients(&self) -> Vec<Integer> {
        Rational::raise_to_integers(&self.coefficients)
    }

    /// The polynomial with primitive integer coefficients that is a rational multiple of `self`.
    /// The sign of the leading coefficient is kept.
    pub fn primitive_part(&self) -> Self {
        let coefficients = self
            .to_integer_coefficients()
            .into_iter()
            .map(Rational::from)
            .collect();
        Self::from_coefficients(coefficients, &Q)
    }

    /// Compute the gcd, normalized to primitive integer coefficients with a positive leading coefficient.
    pub fn gcd(&self, b: &Self) -> Self {
        self.monic_gcd(b).primitive_part()
    }

    /// Compute the monic least common multiple.
    pub fn lcm(&self, b: &Self) -> Self {
        if self.is_zero() || b.is_zero() {
            return self.zero();
        }

        let g = self.monic_gcd(b);
        let p = self * b;
        (&p / &g).make_monic()
    }

    /// The primitive linear polynomial `q*x - p` that has `p/q` as its root.
    pub fn minimal_polynomial(r: &Rational) -> Self {
        Self::from_coefficients(
            vec![
                Rational::from(-r.numerator_ref()),
                Rational::from(r.denominator_ref()),
            ],
            &Q,
        )
    }

    /// Compute the antiderivative with integration constant 0.
    pub fn antiderivative(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }

        let mut coefficients = Vec::with_capacity(self.coefficients.len() + 1);
        coefficients.push(Rational::zero());
        for (e, c) in self.coefficients.iter().enumerate() {
            coefficients.push(c / &Rational::from(e as u64 + 1));
        }

        Self::from_coefficients(coefficients, &Q)
    }

    /// Compute the definite integral from `a` to `b`.
    pub fn integrate(&self, a: &Rational, b: &Rational) -> Rational {
        let f = self.antiderivative();
        &f.evaluate(b) - &f.evaluate(a)
    }

    /// The canonical text form: the coefficients separated by `|`, lowest degree first.
    pub fn true_text(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }

        self.coefficients
            .iter()
            .map(|c| c.true_text())
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Parse the output of [true_text](Self::true_text).
    pub fn from_true_text(s: &str) -> Result<Self, PolynomialError> {
        Self::parse_separated(s, '|')
    }

    fn parse_separated(s: &str, separator: char) -> Result<Self, PolynomialError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PolynomialError::Parse("empty input".to_owned()));
        }

        let coefficients = s
            .split(separator)
            .map(|c| Rational::from_str(c))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_coefficients(coefficients, &Q))
    }
}

impl FromStr for UnivariatePolynomial<Q> {
    type Err = PolynomialError;

    /// Parse a comma-separated list of rational coefficients, lowest degree first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_separated(s, ',')
    }
}

#[cfg(test)]
mod test {
    use crate::domains::{
        rational::{Rational, Q},
        Ring,
    };

    use super::{UnivariatePolynomial, UnivariatePolynomialRing};
    use crate::poly::PolynomialError;

    fn p(c: &[i64]) -> UnivariatePolynomial<Q> {
        UnivariatePolynomial::from_integers(c)
    }

    #[test]
    fn trimming() {
        let a = p(&[1, 2, 0, 0]);
        assert_eq!(a.degree(), 1);
        assert_eq!(p(&[0, 0]).coefficients().len(), 0);
        assert_eq!(p(&[0]).degree(), 0);
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn arithmetic() {
        let a = p(&[1, 1]);
        let b = p(&[-1, 1]);
        assert_eq!(&a * &b, p(&[-1, 0, 1]));
        assert_eq!(&a + &b, p(&[0, 2]));
        assert_eq!(a.pow(3), p(&[1, 3, 3, 1]));
        assert_eq!(a.mul_exp(2), p(&[0, 0, 1, 1]));
        assert_eq!(&a * &a.constant(Rational::new(1, 2)), "1/2,1/2".parse().unwrap());
        assert!(a.constant(Rational::one()).is_one());
        assert!(!a.is_one());
    }

    #[test]
    fn evaluate_and_compose() {
        let a = p(&[1, -3, 2]);
        assert_eq!(a.evaluate(&Rational::new(3, 1)), Rational::new(10, 1));
        assert_eq!(a.evaluate(&Rational::new(1, 2)), Rational::zero());

        let b = p(&[1, 1]);
        assert_eq!(a.compose(&b), p(&[0, 1, 2]));
    }

    #[test]
    fn division() {
        let a = p(&[-1, 0, 0, 1]);
        let d = p(&[1, 2]);
        let (q, r) = a.quot_rem(&d).unwrap();
        assert!(r.degree() < d.degree());
        assert_eq!(&(&q * &d) + &r, a);

        assert_eq!(
            a.quot_rem(&a.zero()),
            Err(PolynomialError::DivisionByZero)
        );

        let (q, r) = d.quot_rem(&a).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, d);

        assert_eq!(a.divides(&p(&[-1, 1])), Some(p(&[1, 1, 1])));
        assert_eq!(a.divides(&p(&[1, 1])), None);
    }

    #[test]
    fn gcd() {
        let a = p(&[-1, 0, 1]);
        let b = p(&[2, 1, -1]);
        assert_eq!(a.gcd(&b), p(&[1, 1]));
        assert_eq!(a.gcd(&a), a);
        assert_eq!(p(&[0, 2]).gcd(&p(&[0, 0, 4])), p(&[0, 1]));
        assert_eq!(a.lcm(&b), p(&[2, -1, -2, 1]));
        assert_eq!(a.monic_gcd(&a.zero()), a);
    }

    #[test]
    fn calculus() {
        let a: UnivariatePolynomial<Q> = "1,1/2,-3".parse().unwrap();
        assert_eq!(a.derivative(), "1/2,-6".parse().unwrap());
        assert_eq!(a.antiderivative().derivative(), a);
        assert_eq!(a.antiderivative().get_constant(), Rational::zero());
        assert_eq!(
            p(&[0, 2]).integrate(&Rational::zero(), &Rational::new(3, 1)),
            Rational::new(9, 1)
        );
    }

    #[test]
    fn display() {
        let a: UnivariatePolynomial<Q> = "1,-1/2,3".parse().unwrap();
        assert_eq!(a.to_string(), "3*x^2-1/2*x+1");
        assert_eq!(p(&[0, -1, 0, 1]).to_string(), "x^3-x");
        assert_eq!(p(&[]).to_string(), "0");
        assert_eq!(a.true_text(), "1|-1/2|3");
        assert_eq!(UnivariatePolynomial::from_true_text("1|-1/2|3").unwrap(), a);
        assert!("1,x".parse::<UnivariatePolynomial<Q>>().is_err());
        assert!("1,1/0".parse::<UnivariatePolynomial<Q>>().is_err());
        assert!("1,2 3".parse::<UnivariatePolynomial<Q>>().is_err());
        assert!("1|1_0".parse::<UnivariatePolynomial<Q>>().is_err());
    }

    #[test]
    fn minimal_polynomial() {
        let m = UnivariatePolynomial::minimal_polynomial(&Rational::new(-2, 3));
        assert_eq!(m, p(&[2, 3]));
        assert!(m.evaluate(&Rational::new(-2, 3)).is_zero());
    }

    #[test]
    fn ring() {
        let r = UnivariatePolynomialRing::new(Q);
        let x = r.variable();
        let y = r.add(&x, &r.nth(2));
        assert_eq!(r.pow(&y, 2), p(&[4, 4, 1]));
        assert_eq!(r.to_string(), "Q[x]");
    }
}
