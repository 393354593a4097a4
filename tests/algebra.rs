use exacta::{
    domains::{
        gaussian_integer::GaussianInteger,
        integer::Integer,
        rational::{Rational, Q},
    },
    poly::univariate::UnivariatePolynomial,
    tensors::matrix::Matrix,
};

fn poly(c: &[i64]) -> UnivariatePolynomial<Q> {
    UnivariatePolynomial::from_integers(c)
}

#[test]
fn rationals() {
    let a: Rational = "1/2".parse().unwrap();
    let b: Rational = "1/3".parse().unwrap();
    assert_eq!(&a + &b, "5/6".parse::<Rational>().unwrap());

    let r = Rational::new(-6, -4);
    assert_eq!(r.numerator(), 3);
    assert_eq!(r.denominator(), 2);
    assert_eq!(Rational::new(3, 7), Rational::new(-3, -7));
    assert_eq!(&(&a + &b) - &b, a);

    assert_eq!(
        Rational::raise_to_integers(&[Rational::new(1, 2), Rational::new(1, 3)]),
        vec![Integer::new(3), Integer::new(2)]
    );

    let x = Rational::new(-415, 93);
    assert_eq!(
        Rational::from_continued_fraction(&x.continued_fraction()),
        Some(x)
    );

    assert!("1/0".parse::<Rational>().is_err());
    assert!("abc".parse::<Rational>().is_err());
}

#[test]
fn matrices() {
    let m: Matrix<Q> = "1,2;3,4".parse().unwrap();
    assert_eq!(m.det().unwrap(), Rational::new(-2, 1));

    let i: Matrix<Q> = "1,0;0,1".parse().unwrap();
    assert_eq!(i.inv().unwrap(), i);
    assert_eq!(i.det().unwrap(), Rational::one());

    let inv = m.inv().unwrap();
    assert_eq!(&m * &inv, Matrix::identity(2, Q));

    let twins: Matrix<Q> = "1,2,3;4,5,6;1,2,3".parse().unwrap();
    assert_eq!(twins.det().unwrap(), Rational::zero());

    let echelon = twins.row_echelon();
    let nonzero_rows = echelon
        .row_iter()
        .filter(|r| r.iter().any(|e| !e.is_zero()))
        .count();
    assert_eq!(twins.rank(), nonzero_rows);
    assert_eq!(twins.rank(), 2);

    let a: Matrix<Q> = "2,1;4,3".parse().unwrap();
    let (l, u) = a.lu().unwrap();
    assert_eq!(l, "1,0;2,1".parse().unwrap());
    assert_eq!(u, "2,1;0,1".parse().unwrap());
    assert_eq!(&l * &u, a);
}

#[test]
fn spectral() {
    let a: Matrix<Q> = "2,1,0;0,2,0;1,-1,3".parse().unwrap();
    let chi = a.characteristic_polynomial().unwrap();
    assert_eq!(chi.degree(), 3);
    assert!(a.evaluate_polynomial(&chi).unwrap().is_zero());

    let mu = a.minimal_polynomial().unwrap();
    assert!(chi.divides(&mu).is_some());
    assert!(a.evaluate_polynomial(&mu).unwrap().is_zero());
}

#[test]
fn polynomials() {
    let p = poly(&[5, -3, 0, 2, 1]);
    let d = poly(&[1, 0, 3]);
    let (q, r) = p.quot_rem(&d).unwrap();
    assert_eq!(&(&q * &d) + &r, p);
    assert!(r.degree() < d.degree());

    assert_eq!(p.gcd(&p), p.primitive_part());

    assert_eq!(
        poly(&[-1, 0, 1]).rational_roots(),
        vec![Rational::new(-1, 1), Rational::one()]
    );

    let s = "1/2,-3,0,7/4".parse::<UnivariatePolynomial<Q>>().unwrap();
    assert_eq!(s.antiderivative().derivative(), s);

    assert_eq!(poly(&[-1, 0, 1]).discriminant(), Rational::new(4, 1));
}

#[test]
fn factorization() {
    for c in [
        vec![4, 0, 0, 0, 1],
        vec![-6, 11, -6, 1],
        vec![2, 0, -2],
        vec![1, 1, 1, 1, 1, 1],
        // (x^3 - 2)(x^3 + x + 1)(x^2 + 1)
        vec![-2, -2, -2, -3, 1, -1, 2, 0, 1],
    ] {
        let p = poly(&c);
        let f = p.factors();
        let product = f.iter().fold(p.one(), |acc, x| &acc * x);
        assert_eq!(product, p);
    }
}

#[test]
fn gaussian_integers() {
    let five = GaussianInteger::new(5, 0);
    let (unit, primes) = five.factorization();
    assert!(unit.is_unit());
    assert_eq!(primes.len(), 2);
    assert!(primes.contains(&GaussianInteger::new(2, 1)));

    let product = primes.iter().fold(unit, |acc, x| &acc * x);
    assert_eq!(product, five);

    let z = GaussianInteger::new(12, -9);
    for d in z.factors() {
        assert!(z.divides(&d).is_some());
    }
}
