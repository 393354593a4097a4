use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use super::{integer::Integer, EuclideanDomain, Field, Ring};

/// The field of rational numbers.
pub type Q = RationalField;
/// The field of rational numbers.
pub const Q: RationalField = RationalField::new();

/// The field of rational numbers.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RationalField;

impl Default for RationalField {
    fn default() -> Self {
        Self::new()
    }
}

impl RationalField {
    pub const fn new() -> RationalField {
        RationalField
    }
}

/// Errors that can occur when constructing a rational number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RationalError {
    ZeroDenominator,
    Parse(String),
}

impl std::fmt::Display for RationalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RationalError::ZeroDenominator => write!(f, "The denominator is zero"),
            RationalError::Parse(s) => write!(f, "Could not parse rational number: {}", s),
        }
    }
}

impl std::error::Error for RationalError {}

/// An arbitrary-precision rational number.
///
/// The number is always stored in canonical form: the denominator is positive,
/// the numerator and denominator are coprime and zero is `0/1`.
/// A rational with a zero denominator cannot be constructed.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Integer,
    denominator: Integer,
}

impl Rational {
    /// Create a new rational number `num/den`.
    /// Panics when `den` is zero, see [Rational::try_new] for a fallible version.
    pub fn new(num: impl Into<Integer>, den: impl Into<Integer>) -> Rational {
        Rational::try_new(num, den).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Create a new rational number `num/den`, rejecting a zero denominator.
    pub fn try_new(
        num: impl Into<Integer>,
        den: impl Into<Integer>,
    ) -> Result<Rational, RationalError> {
        let den = den.into();
        if den.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }

        Ok(Rational::simplify(num.into(), den))
    }

    /// Bring `numerator/denominator` into canonical form. The denominator must be non-zero.
    fn simplify(mut numerator: Integer, mut denominator: Integer) -> Rational {
        debug_assert!(!denominator.is_zero());

        if denominator.is_negative() {
            numerator = -numerator;
            denominator = -denominator;
        }

        let g = numerator.gcd(&denominator);
        if !g.is_one() {
            numerator = &numerator / &g;
            denominator = &denominator / &g;
        }

        Rational {
            numerator,
            denominator,
        }
    }

    #[inline]
    pub fn zero() -> Rational {
        Rational {
            numerator: Integer::zero(),
            denominator: Integer::one(),
        }
    }

    #[inline]
    pub fn one() -> Rational {
        Rational {
            numerator: Integer::one(),
            denominator: Integer::one(),
        }
    }

    pub fn numerator(&self) -> Integer {
        self.numerator.clone()
    }

    pub fn denominator(&self) -> Integer {
        self.denominator.clone()
    }

    pub fn numerator_ref(&self) -> &Integer {
        &self.numerator
    }

    pub fn denominator_ref(&self) -> &Integer {
        &self.denominator
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.numerator.is_one() && self.denominator.is_one()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn abs(&self) -> Rational {
        Rational {
            numerator: self.numerator.abs(),
            denominator: self.denominator.clone(),
        }
    }

    /// Swap numerator and denominator.
    /// Panics when `self` is zero, see [Rational::checked_inv] for a fallible version.
    pub fn inv(&self) -> Rational {
        self.checked_inv().unwrap_or_else(|e| panic!("Cannot invert 0: {}", e))
    }

    /// Swap numerator and denominator, or return an error if `self` is zero.
    pub fn checked_inv(&self) -> Result<Rational, RationalError> {
        if self.is_zero() {
            return Err(RationalError::ZeroDenominator);
        }

        if self.numerator.is_negative() {
            Ok(Rational {
                numerator: -&self.denominator,
                denominator: -&self.numerator,
            })
        } else {
            Ok(Rational {
                numerator: self.denominator.clone(),
                denominator: self.numerator.clone(),
            })
        }
    }

    /// Divide by `other`, or return an error if `other` is zero.
    pub fn checked_div(&self, other: &Rational) -> Result<Rational, RationalError> {
        Ok(self * &other.checked_inv()?)
    }

    /// Compute `self^e` using binary exponentiation. A negative exponent inverts `self` first.
    /// Panics for a negative power of zero, see [Rational::checked_pow] for a fallible version.
    pub fn pow(&self, e: i64) -> Rational {
        self.checked_pow(e)
            .unwrap_or_else(|err| panic!("Cannot raise 0 to the power {}: {}", e, err))
    }

    /// Compute `self^e`, or return an error for a negative power of zero.
    pub fn checked_pow(&self, e: i64) -> Result<Rational, RationalError> {
        if e < 0 {
            Ok(self.checked_inv()?.pow_unsigned(e.unsigned_abs()))
        } else {
            Ok(self.pow_unsigned(e as u64))
        }
    }

    fn pow_unsigned(&self, mut e: u64) -> Rational {
        let mut base = self.clone();
        let mut res = Rational::one();
        while e > 0 {
            if e % 2 == 1 {
                res = &res * &base;
            }
            e /= 2;
            if e > 0 {
                base = &base * &base;
            }
        }
        res
    }

    /// Get the largest integer that is smaller than or equal to `self`.
    pub fn floor(&self) -> Integer {
        self.numerator.div_rem_floor(&self.denominator).0
    }

    /// Get the smallest integer that is larger than or equal to `self`.
    pub fn ceil(&self) -> Integer {
        -(-self).floor()
    }

    /// Compute the continued fraction expansion `[a0; a1, a2, ...]` using the Euclidean algorithm.
    /// All terms but the first are positive.
    pub fn continued_fraction(&self) -> Vec<Integer> {
        let mut n = self.numerator.clone();
        let mut d = self.denominator.clone();

        let mut terms = vec![];
        loop {
            let (q, r) = n.div_rem_floor(&d);
            terms.push(q);
            if r.is_zero() {
                break;
            }
            n = d;
            d = r;
        }
        terms
    }

    /// Reconstruct a rational number from its continued fraction terms.
    /// Returns `None` if the list is empty or a tail of the expansion evaluates to zero.
    pub fn from_continued_fraction(terms: &[Integer]) -> Option<Rational> {
        let (last, rest) = terms.split_last()?;

        let mut r = Rational::from(last.clone());
        for a in rest.iter().rev() {
            r = &Rational::from(a.clone()) + &r.checked_inv().ok()?;
        }
        Some(r)
    }

    /// Scale all `fractions` by the least common multiple of their denominators and
    /// divide the result by the gcd of the resulting integers. This gives the unique
    /// coprime integer tuple that is proportional to the input, with the signs preserved.
    /// An all-zero input yields all zeros.
    pub fn raise_to_integers(fractions: &[Rational]) -> Vec<Integer> {
        let lcm = fractions
            .iter()
            .fold(Integer::one(), |acc, f| acc.lcm(&f.denominator));

        let ints: Vec<Integer> = fractions
            .iter()
            .map(|f| &f.numerator * &(&lcm / &f.denominator))
            .collect();

        let gcd = ints.iter().fold(Integer::zero(), |acc, i| acc.gcd(i));
        if gcd.is_zero() || gcd.is_one() {
            ints
        } else {
            ints.into_iter().map(|i| &i / &gcd).collect()
        }
    }

    /// The canonical machine-readable form `n` or `n/d`.
    pub fn true_text(&self) -> String {
        self.to_string()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl<T: Into<Integer>> From<T> for Rational {
    #[inline]
    fn from(value: T) -> Self {
        Rational {
            numerator: value.into(),
            denominator: Integer::one(),
        }
    }
}

impl From<&Integer> for Rational {
    #[inline]
    fn from(value: &Integer) -> Self {
        value.clone().into()
    }
}

impl<T: Into<Integer>> From<(T, T)> for Rational {
    /// Create `num/den`. Panics when the denominator is zero.
    #[inline]
    fn from((num, den): (T, T)) -> Self {
        Rational::new(num, den)
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Parse `n` or `n/d`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let num = parts.next().unwrap_or_default();
        let den = parts.next();
        if parts.next().is_some() {
            return Err(RationalError::Parse(format!("too many '/' in '{}'", s)));
        }

        let num: Integer = num
            .parse()
            .map_err(|_| RationalError::Parse(format!("invalid numerator in '{}'", s)))?;

        match den {
            Some(den) => {
                let den: Integer = den
                    .parse()
                    .map_err(|_| RationalError::Parse(format!("invalid denominator in '{}'", s)))?;
                Rational::try_new(num, den)
            }
            None => Ok(num.into()),
        }
    }
}

impl std::fmt::Debug for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.denominator.is_one() {
            self.numerator.fmt(f)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    /// Compare by cross-multiplication, valid since denominators are positive.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl<'a, 'b> Add<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, rhs: &'b Rational) -> Rational {
        if self.denominator == rhs.denominator {
            return Rational::simplify(&self.numerator + &rhs.numerator, self.denominator.clone());
        }

        Rational::simplify(
            &(&self.numerator * &rhs.denominator) + &(&rhs.numerator * &self.denominator),
            &self.denominator * &rhs.denominator,
        )
    }
}

impl<'a, 'b> Sub<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, rhs: &'b Rational) -> Rational {
        if self.denominator == rhs.denominator {
            return Rational::simplify(&self.numerator - &rhs.numerator, self.denominator.clone());
        }

        Rational::simplify(
            &(&self.numerator * &rhs.denominator) - &(&rhs.numerator * &self.denominator),
            &self.denominator * &rhs.denominator,
        )
    }
}

impl<'a, 'b> Mul<&'b Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, rhs: &'b Rational) -> Rational {
        Rational::simplify(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
        )
    }
}

impl<'a, 'b> Div<&'b Rational> for &'a Rational {
    type Output = Rational;

    /// Divide by `rhs`. Panics when `rhs` is zero.
    fn div(self, rhs: &'b Rational) -> Rational {
        if rhs.is_zero() {
            panic!("Cannot divide {} by zero", self);
        }

        Rational::simplify(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
        )
    }
}

macro_rules! impl_owned_ops {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl $op<Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                (&self).$method(&rhs)
            }
        }

        impl<'b> $op<&'b Rational> for Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: &'b Rational) -> Rational {
                (&self).$method(rhs)
            }
        }

        impl<'a> $op<Rational> for &'a Rational {
            type Output = Rational;

            #[inline]
            fn $method(self, rhs: Rational) -> Rational {
                self.$method(&rhs)
            }
        }

        impl<'b> $op_assign<&'b Rational> for Rational {
            #[inline]
            fn $method_assign(&mut self, rhs: &'b Rational) {
                *self = (&*self).$method(rhs);
            }
        }

        impl $op_assign<Rational> for Rational {
            #[inline]
            fn $method_assign(&mut self, rhs: Rational) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}

impl_owned_ops!(Add, add, AddAssign, add_assign);
impl_owned_ops!(Sub, sub, SubAssign, sub_assign);
impl_owned_ops!(Mul, mul, MulAssign, mul_assign);
impl_owned_ops!(Div, div, DivAssign, div_assign);

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }
}

impl<'a> Neg for &'a Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            numerator: -&self.numerator,
            denominator: self.denominator.clone(),
        }
    }
}

impl Display for RationalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Q")
    }
}

impl Ring for RationalField {
    type Element = Rational;

    #[inline]
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a + b
    }

    #[inline]
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a - b
    }

    #[inline]
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a * b
    }

    #[inline]
    fn add_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a += b;
    }

    #[inline]
    fn sub_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a -= b;
    }

    #[inline]
    fn mul_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a *= b;
    }

    #[inline]
    fn add_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a += b * c;
    }

    #[inline]
    fn sub_mul_assign(&self, a: &mut Self::Element, b: &Self::Element, c: &Self::Element) {
        *a -= b * c;
    }

    #[inline]
    fn neg(&self, a: &Self::Element) -> Self::Element {
        -a
    }

    #[inline]
    fn zero(&self) -> Self::Element {
        Rational::zero()
    }

    #[inline]
    fn one(&self) -> Self::Element {
        Rational::one()
    }

    #[inline]
    fn nth(&self, n: u64) -> Self::Element {
        n.into()
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        b.pow_unsigned(e)
    }

    #[inline]
    fn is_zero(a: &Self::Element) -> bool {
        a.is_zero()
    }

    #[inline]
    fn is_one(&self, a: &Self::Element) -> bool {
        a.is_one()
    }
}

impl EuclideanDomain for RationalField {
    fn rem(&self, _a: &Self::Element, _b: &Self::Element) -> Self::Element {
        Rational::zero()
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        (a / b, Rational::zero())
    }

    /// The gcd of the numerators over the lcm of the denominators.
    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        let num = a.numerator.gcd(&b.numerator);
        if num.is_zero() {
            return Rational::zero();
        }

        Rational::simplify(num, a.denominator.lcm(&b.denominator))
    }
}

impl Field for RationalField {
    #[inline]
    fn div(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a / b
    }

    #[inline]
    fn div_assign(&self, a: &mut Self::Element, b: &Self::Element) {
        *a /= b;
    }

    #[inline]
    fn inv(&self, a: &Self::Element) -> Self::Element {
        a.inv()
    }
}

#[cfg(test)]
mod test {
    use crate::domains::integer::Integer;

    use super::{Rational, RationalError};

    #[test]
    fn canonical_form() {
        let r = Rational::new(6, -8);
        assert_eq!(r.numerator(), Integer::new(-3));
        assert_eq!(r.denominator(), Integer::new(4));

        assert_eq!(Rational::new(0, -5), Rational::zero());
        assert_eq!(Rational::new(0, -5).denominator(), Integer::one());

        for (a, b) in [(4, 6), (-9, 12), (7, -21), (-5, -15), (13, 1)] {
            let r = Rational::new(a, b);
            assert!(r.denominator_ref().is_positive());
            assert!(r.numerator_ref().gcd(r.denominator_ref()).is_one());
            assert_eq!(r, Rational::new(-a, -b));
        }
    }

    #[test]
    fn arithmetic() {
        let x: Rational = (3, 7).into();
        let y: Rational = (-5, 14).into();

        assert_eq!(&x + &y, (1, 14).into());
        assert_eq!(&x - &y, (11, 14).into());
        assert_eq!(&x * &y, (-15, 98).into());
        assert_eq!(&x / &y, (-6, 5).into());
        assert_eq!(&(&x + &y) - &y, x);
        assert_eq!(-&x, (-3, 7).into());

        let mut z = x.clone();
        z += &y;
        z *= Rational::from(14);
        assert_eq!(z, 1.into());
    }

    #[test]
    fn power() {
        let x: Rational = (-2, 3).into();
        assert_eq!(x.pow(3), (-8, 27).into());
        assert_eq!(x.pow(-2), (9, 4).into());
        assert_eq!(x.pow(0), Rational::one());
        assert_eq!(Rational::zero().pow(0), Rational::one());
        assert_eq!(Rational::zero().checked_pow(3), Ok(Rational::zero()));
        assert_eq!(x.checked_pow(-1), Ok((-3, 2).into()));
        assert_eq!(
            Rational::zero().checked_pow(-2),
            Err(RationalError::ZeroDenominator)
        );
    }

    #[test]
    #[should_panic]
    fn negative_power_of_zero() {
        Rational::zero().pow(-1);
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(Rational::try_new(1, 0), Err(RationalError::ZeroDenominator));
        assert_eq!("3/0".parse::<Rational>(), Err(RationalError::ZeroDenominator));
        assert_eq!(Rational::zero().checked_inv(), Err(RationalError::ZeroDenominator));
        assert_eq!(
            Rational::one().checked_div(&Rational::zero()),
            Err(RationalError::ZeroDenominator)
        );
    }

    #[test]
    #[should_panic]
    fn invert_zero() {
        Rational::zero().inv();
    }

    #[test]
    fn inverse() {
        assert_eq!(Rational::new(-2, 5).inv(), Rational::new(-5, 2));
        assert_eq!(Rational::new(-2, 5).inv().denominator(), Integer::new(2));
    }

    #[test]
    fn parse() {
        assert_eq!("1/2".parse::<Rational>().unwrap(), (1, 2).into());
        assert_eq!("-4/6".parse::<Rational>().unwrap(), (-2, 3).into());
        assert_eq!("4/-6".parse::<Rational>().unwrap(), (-2, 3).into());
        assert_eq!("17".parse::<Rational>().unwrap(), 17.into());
        assert!(matches!("1/2/3".parse::<Rational>(), Err(RationalError::Parse(_))));
        assert!(matches!("a/2".parse::<Rational>(), Err(RationalError::Parse(_))));
        assert!(matches!("".parse::<Rational>(), Err(RationalError::Parse(_))));
        assert!(matches!("1/+2".parse::<Rational>(), Err(RationalError::Parse(_))));
        assert!(matches!("1 2/3".parse::<Rational>(), Err(RationalError::Parse(_))));
        assert!(matches!("1_0".parse::<Rational>(), Err(RationalError::Parse(_))));
        assert!(matches!("1/".parse::<Rational>(), Err(RationalError::Parse(_))));

        let r = Rational::new(-22, 7);
        assert_eq!(r.true_text(), "-22/7");
        assert_eq!(r.true_text().parse::<Rational>().unwrap(), r);
    }

    #[test]
    fn ordering() {
        let a: Rational = (1, 3).into();
        let b: Rational = (1, 2).into();
        let c: Rational = (-7, 2).into();
        assert!(a < b);
        assert!(c < a);
        assert_eq!(a.max(b.clone()), b);
    }

    #[test]
    fn rounding() {
        let r: Rational = (-7, 3).into();
        assert_eq!(r.floor(), Integer::new(-3));
        assert_eq!(r.ceil(), Integer::new(-2));
        assert_eq!(Rational::from(5).floor(), Integer::new(5));
        assert_eq!(Rational::from(5).ceil(), Integer::new(5));
    }

    #[test]
    fn continued_fraction() {
        let r: Rational = (415, 93).into();
        let cf = r.continued_fraction();
        assert_eq!(
            cf,
            [4, 2, 6, 7].into_iter().map(Integer::new).collect::<Vec<_>>()
        );
        assert_eq!(Rational::from_continued_fraction(&cf), Some(r));

        let r: Rational = (-7, 3).into();
        let cf = r.continued_fraction();
        assert_eq!(
            cf,
            [-3, 1, 2].into_iter().map(Integer::new).collect::<Vec<_>>()
        );
        assert_eq!(Rational::from_continued_fraction(&cf), Some(r));

        assert_eq!(Rational::from_continued_fraction(&[]), None);
    }

    #[test]
    fn raise_to_integers() {
        let r = Rational::raise_to_integers(&[(1, 2).into(), (1, 3).into()]);
        assert_eq!(r, vec![Integer::new(3), Integer::new(2)]);

        let r = Rational::raise_to_integers(&[(-4, 6).into(), (2, 1).into(), 0.into()]);
        assert_eq!(r, vec![Integer::new(-1), Integer::new(3), Integer::zero()]);

        let r = Rational::raise_to_integers(&[0.into(), 0.into()]);
        assert_eq!(r, vec![Integer::zero(), Integer::zero()]);
    }
}
