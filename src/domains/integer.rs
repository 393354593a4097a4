use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
    str::FromStr,
};

use rug::{ops::Pow, Complete, Integer as MultiPrecisionInteger};
use smallvec::SmallVec;

use super::{EuclideanDomain, Ring};

pub const SMALL_PRIMES: [u32; 100] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
    101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191, 193,
    197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283, 293, 307,
    311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421,
    431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521, 523, 541,
];

/// A prime factorization `[(p, multiplicity)]` with the primes in ascending order.
pub type PrimeFactorization = SmallVec<[(Integer, u32); 8]>;

/// The integer ring.
pub type Z = IntegerRing;
/// The integer ring.
pub const Z: IntegerRing = IntegerRing::new();

/// The integer ring.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IntegerRing;

impl Default for IntegerRing {
    fn default() -> Self {
        Self::new()
    }
}

impl IntegerRing {
    pub const fn new() -> IntegerRing {
        IntegerRing
    }
}

/// An arbitrary-precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(MultiPrecisionInteger);

impl From<i32> for Integer {
    #[inline]
    fn from(value: i32) -> Self {
        Integer(MultiPrecisionInteger::from(value))
    }
}

impl From<i64> for Integer {
    #[inline]
    fn from(value: i64) -> Self {
        Integer(MultiPrecisionInteger::from(value))
    }
}

impl From<u32> for Integer {
    #[inline]
    fn from(value: u32) -> Self {
        Integer(MultiPrecisionInteger::from(value))
    }
}

impl From<u64> for Integer {
    #[inline]
    fn from(value: u64) -> Self {
        Integer(MultiPrecisionInteger::from(value))
    }
}

impl From<usize> for Integer {
    #[inline]
    fn from(value: usize) -> Self {
        Integer(MultiPrecisionInteger::from(value))
    }
}

impl From<MultiPrecisionInteger> for Integer {
    #[inline]
    fn from(value: MultiPrecisionInteger) -> Self {
        Integer(value)
    }
}

impl PartialEq<i64> for Integer {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl PartialOrd<i64> for Integer {
    #[inline]
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        self.0.partial_cmp(other)
    }
}

impl FromStr for Integer {
    type Err = &'static str;

    /// Parse an optional `-` followed by decimal digits. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('-').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err("Could not parse integer");
        }

        s.parse::<MultiPrecisionInteger>()
            .map(Integer)
            .map_err(|_| "Could not parse integer")
    }
}

impl std::fmt::Debug for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Integer {
    #[inline]
    pub fn new(num: i64) -> Integer {
        Integer(MultiPrecisionInteger::from(num))
    }

    #[inline]
    pub fn zero() -> Integer {
        Integer(MultiPrecisionInteger::new())
    }

    #[inline]
    pub fn one() -> Integer {
        Integer::new(1)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.0 == 1
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }

    /// Return `-1`, `0` or `1` depending on the sign.
    pub fn signum(&self) -> i32 {
        match self.0.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    pub fn abs(&self) -> Integer {
        Integer(self.0.clone().abs())
    }

    pub fn pow(&self, e: u32) -> Integer {
        if e == 0 {
            return Integer::one();
        }

        Integer(self.0.clone().pow(e))
    }

    /// Compute the non-negative greatest common divisor.
    /// `gcd(0, b)` is `|b|`, so the result is only zero when both arguments are.
    pub fn gcd(&self, b: &Integer) -> Integer {
        Integer(self.0.clone().gcd(&b.0))
    }

    /// Compute the least common multiple of two integers.
    pub fn lcm(&self, b: &Integer) -> Integer {
        Integer(self.0.clone().lcm(&b.0))
    }

    /// Euclidean division: the remainder is always non-negative.
    pub fn quot_rem(&self, b: &Integer) -> (Integer, Integer) {
        if b.is_zero() {
            panic!("Cannot divide by zero");
        }

        let (q, r) = self.0.clone().div_rem_euc(b.0.clone());
        (Integer(q), Integer(r))
    }

    /// Division rounding the quotient towards negative infinity.
    pub fn div_rem_floor(&self, b: &Integer) -> (Integer, Integer) {
        if b.is_zero() {
            panic!("Cannot divide by zero");
        }

        let (q, r) = self.0.clone().div_rem_floor(b.0.clone());
        (Integer(q), Integer(r))
    }

    /// Return true iff `d` divides `self`. Only zero is divisible by zero.
    #[inline]
    pub fn is_divisible(&self, d: &Integer) -> bool {
        self.0.is_divisible(&d.0)
    }

    /// Compute the floor of the square root of a non-negative integer.
    pub fn isqrt(&self) -> Integer {
        if self.is_negative() {
            panic!("Cannot take the square root of negative integer {}", self);
        }

        Integer(self.0.clone().sqrt())
    }

    #[inline]
    pub fn is_perfect_square(&self) -> bool {
        self.0.is_perfect_square()
    }

    /// Compute the prime factorization of `|self|` using trial division.
    /// The result is empty for `0` and `±1`.
    pub fn prime_factors(&self) -> PrimeFactorization {
        fn extract(n: &mut Integer, p: &Integer, factors: &mut PrimeFactorization) {
            let mut multiplicity = 0;
            while n.is_divisible(p) {
                *n = &*n / p;
                multiplicity += 1;
            }

            if multiplicity > 0 {
                factors.push((p.clone(), multiplicity));
            }
        }

        let mut factors = PrimeFactorization::new();
        let mut n = self.abs();
        if n.is_zero() || n.is_one() {
            return factors;
        }

        for p in SMALL_PRIMES {
            let p = Integer::from(p);
            if &p * &p > n {
                break;
            }
            extract(&mut n, &p, &mut factors);
        }

        // continue on the 6k ± 1 wheel above the prime table
        let mut k = 91u64;
        loop {
            let p = Integer::from(6 * k - 1);
            if &p * &p > n {
                break;
            }
            extract(&mut n, &p, &mut factors);
            extract(&mut n, &Integer::from(6 * k + 1), &mut factors);
            k += 1;
        }

        if !n.is_one() {
            factors.push((n, 1));
        }

        factors
    }

    /// Get all positive divisors of `|self|` in ascending order.
    /// The result is empty for `0`.
    pub fn divisors(&self) -> Vec<Integer> {
        if self.is_zero() {
            return vec![];
        }

        let mut divisors = vec![Integer::one()];
        for (p, m) in self.prime_factors() {
            let mut next = Vec::with_capacity(divisors.len() * (m as usize + 1));
            for d in &divisors {
                let mut pp = d.clone();
                next.push(pp.clone());
                for _ in 0..m {
                    pp = &pp * &p;
                    next.push(pp.clone());
                }
            }
            divisors = next;
        }

        divisors.sort();
        divisors
    }
}

impl Display for IntegerRing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Z")
    }
}

impl Ring for IntegerRing {
    type Element = Integer;

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
        Integer::zero()
    }

    #[inline]
    fn one(&self) -> Self::Element {
        Integer::one()
    }

    #[inline]
    fn nth(&self, n: u64) -> Self::Element {
        Integer::from(n)
    }

    fn pow(&self, b: &Self::Element, e: u64) -> Self::Element {
        if e > u32::MAX as u64 {
            panic!("Power of exponentiation is larger than 2^32: {}", e);
        }
        b.pow(e as u32)
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

impl EuclideanDomain for IntegerRing {
    fn rem(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.quot_rem(b).1
    }

    fn quot_rem(&self, a: &Self::Element, b: &Self::Element) -> (Self::Element, Self::Element) {
        a.quot_rem(b)
    }

    fn gcd(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.gcd(b)
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<'a, 'b> $op<&'b Integer> for &'a Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: &'b Integer) -> Integer {
                Integer((&self.0).$method(&rhs.0).complete())
            }
        }

        impl<'b> $op<&'b Integer> for Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: &'b Integer) -> Integer {
                Integer(self.0.$method(&rhs.0))
            }
        }

        impl<'a> $op<Integer> for &'a Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: Integer) -> Integer {
                self.$method(&rhs)
            }
        }

        impl $op<Integer> for Integer {
            type Output = Integer;

            #[inline]
            fn $method(self, rhs: Integer) -> Integer {
                Integer(self.0.$method(rhs.0))
            }
        }

        impl<'a> $op_assign<&'a Integer> for Integer {
            #[inline]
            fn $method_assign(&mut self, rhs: &'a Integer) {
                self.0.$method_assign(&rhs.0);
            }
        }

        impl $op_assign<Integer> for Integer {
            #[inline]
            fn $method_assign(&mut self, rhs: Integer) {
                self.0.$method_assign(rhs.0);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);
// truncating division, as for primitive integers
impl_binary_op!(Div, div, DivAssign, div_assign);
impl_binary_op!(Rem, rem, RemAssign, rem_assign);

impl Neg for Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Self::Output {
        Integer(-self.0)
    }
}

impl<'a> Neg for &'a Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Self::Output {
        Integer((-&self.0).complete())
    }
}

#[cfg(test)]
mod test {
    use super::Integer;

    #[test]
    fn binary_ops() {
        let a = Integer::new(-17);
        let b = Integer::new(5);

        assert_eq!(&a + &b, Integer::new(-12));
        assert_eq!(&a - &b, Integer::new(-22));
        assert_eq!(&a * &b, Integer::new(-85));
        assert_eq!(&a / &b, Integer::new(-3));
        assert_eq!(&a % &b, Integer::new(-2));
        assert_eq!(a.quot_rem(&b), (Integer::new(-4), Integer::new(3)));
        assert_eq!(a.div_rem_floor(&b), (Integer::new(-4), Integer::new(3)));
        assert_eq!(-&a, Integer::new(17));
        assert_eq!(
            Integer::new(3).pow(40),
            "12157665459056928801".parse::<Integer>().unwrap()
        );
    }

    #[test]
    fn gcd() {
        assert_eq!(Integer::new(12).gcd(&Integer::new(-18)), Integer::new(6));
        assert_eq!(Integer::zero().gcd(&Integer::new(-7)), Integer::new(7));
        assert_eq!(Integer::zero().gcd(&Integer::zero()), Integer::zero());
        assert_eq!(Integer::new(4).lcm(&Integer::new(6)), Integer::new(12));
    }

    #[test]
    fn prime_factors() {
        let f = Integer::new(360).prime_factors();
        assert_eq!(
            f.as_slice(),
            &[
                (Integer::new(2), 3),
                (Integer::new(3), 2),
                (Integer::new(5), 1)
            ]
        );

        let f = Integer::new(-10007 * 10009).prime_factors();
        assert_eq!(
            f.as_slice(),
            &[(Integer::new(10007), 1), (Integer::new(10009), 1)]
        );

        let f = (Integer::new(547) * Integer::new(547)).prime_factors();
        assert_eq!(f.as_slice(), &[(Integer::new(547), 2)]);

        assert!(Integer::one().prime_factors().is_empty());
        assert!(Integer::zero().prime_factors().is_empty());
    }

    #[test]
    fn divisors() {
        let d = Integer::new(-12).divisors();
        assert_eq!(
            d,
            [1, 2, 3, 4, 6, 12]
                .into_iter()
                .map(Integer::new)
                .collect::<Vec<_>>()
        );
        assert_eq!(Integer::one().divisors(), vec![Integer::one()]);
        assert!(Integer::zero().divisors().is_empty());
    }

    #[test]
    fn square_root() {
        assert_eq!(Integer::new(99).isqrt(), Integer::new(9));
        assert_eq!(Integer::new(100).isqrt(), Integer::new(10));
        assert!(Integer::new(144).is_perfect_square());
        assert!(!Integer::new(145).is_perfect_square());
    }

    #[test]
    fn parse() {
        assert_eq!(" -42 ".parse::<Integer>(), Ok(Integer::new(-42)));
        assert!("4x".parse::<Integer>().is_err());
        assert!("".parse::<Integer>().is_err());
        assert!("-".parse::<Integer>().is_err());
        assert!("1 2".parse::<Integer>().is_err());
        assert!("1_0".parse::<Integer>().is_err());
        assert!("+2".parse::<Integer>().is_err());
        assert!("--2".parse::<Integer>().is_err());
        assert!("0x1f".parse::<Integer>().is_err());
    }

    #[test]
    fn sign() {
        assert_eq!(Integer::new(-7).signum(), -1);
        assert_eq!(Integer::zero().signum(), 0);
        assert_eq!(Integer::new(12).signum(), 1);
        assert_eq!(Integer::new(-7).abs(), Integer::new(7));
    }
}
