//! Gaussian integers `a + b*i` with `a` and `b` integers, and their factorization.

use std::{
    fmt::Display,
    ops::{Add, Mul, Neg, Sub},
};

use ahash::HashMap;
use tracing::debug;

use crate::combinatorics::CartesianProductIterator;

use super::integer::Integer;

/// A Gaussian integer `real + imag*i`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GaussianInteger {
    real: Integer,
    imag: Integer,
}

impl GaussianInteger {
    pub fn new(real: impl Into<Integer>, imag: impl Into<Integer>) -> GaussianInteger {
        GaussianInteger {
            real: real.into(),
            imag: imag.into(),
        }
    }

    #[inline]
    pub fn zero() -> GaussianInteger {
        GaussianInteger::new(0, 0)
    }

    #[inline]
    pub fn one() -> GaussianInteger {
        GaussianInteger::new(1, 0)
    }

    /// The imaginary unit.
    #[inline]
    pub fn i() -> GaussianInteger {
        GaussianInteger::new(0, 1)
    }

    /// The four units `1`, `-1`, `i` and `-i`.
    pub fn units() -> [GaussianInteger; 4] {
        [
            GaussianInteger::new(1, 0),
            GaussianInteger::new(-1, 0),
            GaussianInteger::new(0, 1),
            GaussianInteger::new(0, -1),
        ]
    }

    pub fn real(&self) -> &Integer {
        &self.real
    }

    pub fn imag(&self) -> &Integer {
        &self.imag
    }

    pub fn conjugate(&self) -> GaussianInteger {
        GaussianInteger {
            real: self.real.clone(),
            imag: -&self.imag,
        }
    }

    /// Compute `real^2 + imag^2`.
    pub fn norm(&self) -> Integer {
        &(&self.real * &self.real) + &(&self.imag * &self.imag)
    }

    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imag.is_zero()
    }

    pub fn is_unit(&self) -> bool {
        self.norm().is_one()
    }

    /// Divide both parts by the integer `d`, which must divide both.
    fn div_integer(&self, d: &Integer) -> GaussianInteger {
        GaussianInteger {
            real: &self.real / d,
            imag: &self.imag / d,
        }
    }

    /// Divide with remainder, rounding the exact quotient to the nearest Gaussian integer,
    /// so that the remainder has a smaller norm than `b`.
    pub fn quot_rem(&self, b: &GaussianInteger) -> (GaussianInteger, GaussianInteger) {
        if b.is_zero() {
            panic!("Cannot divide by zero");
        }

        let n = b.norm();
        let num = self * &b.conjugate();

        // round(x / n) = floor((2x + n) / 2n)
        let two_n = &n * &Integer::new(2);
        let round = |x: &Integer| (&(x * &Integer::new(2)) + &n).div_rem_floor(&two_n).0;

        let q = GaussianInteger {
            real: round(&num.real),
            imag: round(&num.imag),
        };
        let r = self - &(&q * b);
        (q, r)
    }

    /// Return the quotient if `d` divides `self` exactly.
    pub fn divides(&self, d: &GaussianInteger) -> Option<GaussianInteger> {
        if d.is_zero() {
            return None;
        }

        let n = d.norm();
        let num = self * &d.conjugate();
        if num.real.is_divisible(&n) && num.imag.is_divisible(&n) {
            Some(num.div_integer(&n))
        } else {
            None
        }
    }

    /// The associate with a positive real part and a non-negative imaginary part.
    pub fn normalize(&self) -> GaussianInteger {
        if self.is_zero() {
            return self.clone();
        }

        GaussianInteger::units()
            .iter()
            .map(|u| self * u)
            .find(|z| z.real.is_positive() && !z.imag.is_negative())
            .unwrap_or_else(|| self.clone())
    }

    /// Compute the greatest common divisor with Euclid's algorithm, normalized with [normalize](Self::normalize).
    pub fn gcd(&self, b: &GaussianInteger) -> GaussianInteger {
        let mut a = self.clone();
        let mut b = b.clone();
        while !b.is_zero() {
            let r = a.quot_rem(&b).1;
            a = b;
            b = r;
        }
        a.normalize()
    }

    /// Write the odd prime `p = 1 mod 4` as `c^2 + d^2`.
    fn sum_of_two_squares(p: &Integer) -> (Integer, Integer) {
        let mut c = Integer::one();
        loop {
            let t = p - &(&c * &c);
            if t.is_perfect_square() {
                return (c, t.isqrt());
            }
            c = &c + &Integer::one();
        }
    }

    /// Factor into Gaussian primes. Returns the unit `u` and the primes, such that
    /// `u` times the product of the primes is `self`. Zero and units have no prime factors.
    pub fn factorization(&self) -> (GaussianInteger, Vec<GaussianInteger>) {
        if self.is_zero() || self.is_unit() {
            return (self.clone(), vec![]);
        }

        let four = Integer::new(4);
        let mut rest = self.clone();
        let mut primes = vec![];

        // rational primes 3 mod 4 stay prime and divide both parts
        for (p, m) in self.real.gcd(&self.imag).prime_factors() {
            if &p % &four == 3 {
                for _ in 0..m {
                    rest = rest.div_integer(&p);
                    primes.push(GaussianInteger::new(p.clone(), 0));
                }
            }
        }

        for (p, m) in rest.norm().prime_factors() {
            let candidates = if p == 2 {
                vec![GaussianInteger::new(1, 1)]
            } else if &p % &four == 1 {
                let (c, d) = GaussianInteger::sum_of_two_squares(&p);
                debug!("{} = {}^2 + {}^2", p, c, d);
                vec![
                    GaussianInteger::new(c.clone(), d.clone()),
                    GaussianInteger::new(d, c),
                ]
            } else {
                // a remaining 3 mod 4 prime appears squared in the norm
                vec![GaussianInteger::new(p.clone(), 0)]
            };

            for _ in 0..m {
                // pi divides rest iff p divides rest * conj(pi)
                let next = candidates.iter().find_map(|pi| {
                    let t = &rest * &pi.conjugate();
                    if t.real.is_divisible(&p) && t.imag.is_divisible(&p) {
                        rest.divides(pi).map(|q| (pi.clone(), q))
                    } else {
                        None
                    }
                });

                if let Some((pi, q)) = next {
                    primes.push(pi);
                    rest = q;
                }
            }
        }

        (rest, primes)
    }

    /// Factor into Gaussian primes, whose product equals `self` up to a unit.
    pub fn prime_factors(&self) -> Vec<GaussianInteger> {
        self.factorization().1
    }

    /// Compute all divisors, including every associate.
    pub fn factors(&self) -> Vec<GaussianInteger> {
        if self.is_zero() {
            return vec![];
        }

        let mut index: HashMap<GaussianInteger, usize> = HashMap::default();
        let mut runs: Vec<(GaussianInteger, usize)> = vec![];
        for p in self.prime_factors() {
            let p = p.normalize();
            match index.get(&p) {
                Some(&i) => runs[i].1 += 1,
                None => {
                    index.insert(p.clone(), runs.len());
                    runs.push((p, 1));
                }
            }
        }

        let mut it = CartesianProductIterator::new(runs.iter().map(|(_, m)| m + 1).collect());
        let mut products = vec![];
        while let Some(exponents) = it.next() {
            let mut d = GaussianInteger::one();
            for ((p, _), e) in runs.iter().zip(exponents) {
                for _ in 0..*e {
                    d = &d * p;
                }
            }
            products.push(d);
        }

        let units = GaussianInteger::units();
        units
            .iter()
            .flat_map(|u| products.iter().map(move |d| d * u))
            .collect()
    }

    /// The canonical text form `real|imag`.
    pub fn true_text(&self) -> String {
        format!("{}|{}", self.real, self.imag)
    }
}

impl Display for GaussianInteger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.imag.is_zero() {
            return write!(f, "{}", self.real);
        }

        if !self.real.is_zero() {
            write!(f, "{}", self.real)?;
            if !self.imag.is_negative() {
                f.write_str("+")?;
            }
        }

        if self.imag == 1 {
            f.write_str("i")
        } else if self.imag == -1 {
            f.write_str("-i")
        } else {
            write!(f, "{}i", self.imag)
        }
    }
}

impl<'a, 'b> Add<&'b GaussianInteger> for &'a GaussianInteger {
    type Output = GaussianInteger;

    fn add(self, other: &'b GaussianInteger) -> GaussianInteger {
        GaussianInteger {
            real: &self.real + &other.real,
            imag: &self.imag + &other.imag,
        }
    }
}

impl<'a, 'b> Sub<&'b GaussianInteger> for &'a GaussianInteger {
    type Output = GaussianInteger;

    fn sub(self, other: &'b GaussianInteger) -> GaussianInteger {
        GaussianInteger {
            real: &self.real - &other.real,
            imag: &self.imag - &other.imag,
        }
    }
}

impl<'a, 'b> Mul<&'b GaussianInteger> for &'a GaussianInteger {
    type Output = GaussianInteger;

    fn mul(self, other: &'b GaussianInteger) -> GaussianInteger {
        GaussianInteger {
            real: &(&self.real * &other.real) - &(&self.imag * &other.imag),
            imag: &(&self.real * &other.imag) + &(&self.imag * &other.real),
        }
    }
}

impl Add for GaussianInteger {
    type Output = GaussianInteger;

    fn add(self, other: GaussianInteger) -> GaussianInteger {
        &self + &other
    }
}

impl Sub for GaussianInteger {
    type Output = GaussianInteger;

    fn sub(self, other: GaussianInteger) -> GaussianInteger {
        &self - &other
    }
}

impl Mul for GaussianInteger {
    type Output = GaussianInteger;

    fn mul(self, other: GaussianInteger) -> GaussianInteger {
        &self * &other
    }
}

impl Neg for GaussianInteger {
    type Output = GaussianInteger;

    fn neg(self) -> GaussianInteger {
        GaussianInteger {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl<'a> Neg for &'a GaussianInteger {
    type Output = GaussianInteger;

    fn neg(self) -> GaussianInteger {
        self.clone().neg()
    }
}
