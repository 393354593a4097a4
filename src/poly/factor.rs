//! Rational roots and factorization of polynomials over the rationals.
//!
//! Linear factors are found from the rational root candidates `p/q`, higher-degree
//! factors with Kronecker's method: a factor of degree `k` is determined by its values
//! at `k + 1` points, and each of those values must divide the value of the polynomial there.

use tracing::{debug, instrument};

use crate::{
    combinatorics::CartesianProductIterator,
    domains::{
        integer::Integer,
        rational::{Rational, Q},
    },
};

use super::univariate::UnivariatePolynomial;

impl UnivariatePolynomial<Q> {
    /// Find all distinct rational roots, sorted in ascending order.
    /// The zero polynomial has no roots by convention.
    pub fn rational_roots(&self) -> Vec<Rational> {
        if self.is_zero() {
            return vec![];
        }

        let mut ints = self.to_integer_coefficients();
        let mut roots = vec![];

        let zeros = ints.iter().take_while(|c| c.is_zero()).count();
        if zeros > 0 {
            roots.push(Rational::zero());
            ints.drain(..zeros);
        }

        if ints.len() > 1 {
            let (first, last) = (&ints[0], &ints[ints.len() - 1]);
            let den_divisors = last.divisors();
            for p in first.divisors() {
                for q in &den_divisors {
                    if !p.gcd(q).is_one() {
                        continue;
                    }

                    let r = Rational::new(p.clone(), q.clone());
                    for c in [-&r, r] {
                        if self.evaluate(&c).is_zero() {
                            roots.push(c);
                        }
                    }
                }
            }
        }

        roots.sort();
        roots.dedup();
        roots
    }

    /// Factor the polynomial into irreducible factors over the rationals.
    ///
    /// The first entry is the rational content if it is not one. The other factors have
    /// primitive integer coefficients and a positive leading coefficient, and repeated
    /// factors appear multiple times. The product of all factors equals `self`.
    #[instrument(level = "debug", skip_all)]
    pub fn factors(&self) -> Vec<UnivariatePolynomial<Q>> {
        if self.is_constant() {
            return vec![self.clone()];
        }

        let mut remaining = self.primitive_part();
        if remaining.lcoeff().is_negative() {
            remaining = -remaining;
        }

        let mut factors = vec![];
        let content = &self.lcoeff() / &remaining.lcoeff();
        if !content.is_one() {
            factors.push(self.constant(content));
        }

        for r in self.rational_roots() {
            let linear = UnivariatePolynomial::minimal_polynomial(&r);
            while let Some(q) = remaining.divides(&linear) {
                factors.push(linear.clone());
                remaining = q;
            }
        }

        let mut k = 2;
        while 2 * k <= remaining.degree() {
            match remaining.kronecker_factor(k) {
                Some(f) => {
                    debug!("Found factor {} of degree {}", f, k);
                    remaining = &remaining / &f;
                    factors.push(f);
                }
                None => k += 1,
            }
        }

        if !remaining.is_constant() {
            factors.push(remaining);
        }

        factors
    }

    /// Search for a factor of degree `k` with integer coefficients of a primitive polynomial
    /// without linear factors, by interpolating through divisors of the values at `0..=k`.
    fn kronecker_factor(&self, k: usize) -> Option<UnivariatePolynomial<Q>> {
        let points: Vec<Rational> = (0..=k).map(|i| Rational::from(i as u64)).collect();

        let values: Vec<Vec<Integer>> = points
            .iter()
            .enumerate()
            .map(|(i, x)| {
                let v = self.evaluate(x).numerator();
                if v.is_zero() {
                    return vec![v];
                }

                let divisors = v.divisors();
                if i == 0 {
                    // the sign of a factor is fixed by its value at 0
                    divisors
                } else {
                    divisors.iter().flat_map(|d| [d.clone(), -d]).collect()
                }
            })
            .collect();

        let mut candidates =
            CartesianProductIterator::new(values.iter().map(|v| v.len()).collect());
        debug!(
            "Kronecker search for degree {} over {:?} candidates",
            k,
            candidates.len()
        );

        let lcoeff = self.lcoeff().numerator();
        while let Some(indices) = candidates.next() {
            let sample: Vec<(Rational, Rational)> = points
                .iter()
                .zip(indices)
                .zip(&values)
                .map(|((x, &i), v)| (x.clone(), Rational::from(&v[i])))
                .collect();

            let Ok(f) = UnivariatePolynomial::lagrange(&sample) else {
                continue;
            };

            if f.degree() != k || f.coefficients().iter().any(|c| !c.is_integer()) {
                continue;
            }

            if !lcoeff.is_divisible(&f.lcoeff().numerator()) {
                continue;
            }

            let mut f = f.primitive_part();
            if f.lcoeff().is_negative() {
                f = -f;
            }

            if self.divides(&f).is_some() {
                return Some(f);
            }
        }

        None
    }
}
