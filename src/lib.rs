//! A double precision complex number value type.
//!
//! [`Complex`] supports the usual operator family against other complex
//! numbers and against real `f64` scalars (on either side), compound
//! assignment, magnitude, and two text forms: `3+4i` through
//! `Display`/`FromStr`, and `3 4` through [`read_complex`]/[`write_complex`].
//!
//! Division by zero follows IEEE-754 and produces infinities or NaN.
//! Collapsing to a real number is explicit, via [`Complex::abs`] or `f64::from`.

mod complex;
mod error;
mod fmt;
mod io;

pub use complex::Complex;
pub use error::{ParseComplexError, Part, ReadError};
pub use io::{read_complex, write_complex, ComplexReader};

#[cfg(test)]
mod tests {
    use num_complex::{Complex64, ComplexDistribution};
    use rand::{rngs::StdRng, SeedableRng};
    use rand_distr::{Distribution, StandardNormal};

    use super::*;

    fn samples(seed: u64, n: usize) -> Vec<(Complex, Complex)> {
        let dist = ComplexDistribution::new(StandardNormal, StandardNormal);
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                let a: Complex64 = dist.sample(&mut rng);
                let b: Complex64 = dist.sample(&mut rng);
                (a.into(), b.into())
            })
            .collect()
    }

    fn close(a: Complex, b: Complex) -> bool {
        (a - b).abs() <= 1e-12 * (1.0 + a.abs().max(b.abs()))
    }

    #[test]
    fn matches_num_complex() {
        for (a, b) in samples(1, 1000) {
            let (na, nb) = (Complex64::from(a), Complex64::from(b));
            assert_eq!(Complex::from(na + nb), a + b);
            assert_eq!(Complex::from(na - nb), a - b);
            assert_eq!(Complex::from(na * nb), a * b);
            assert!(close(Complex::from(na / nb), a / b), "{a} / {b}");
            // num-complex uses hypot, which may differ in the last bit
            assert!((na.norm() - a.abs()).abs() <= 1e-15 * a.abs());
        }
    }

    #[test]
    fn componentwise_laws() {
        for (a, b) in samples(2, 500) {
            let (x, y, u, v) = (a.re(), a.im(), b.re(), b.im());
            assert_eq!(a + b, Complex::new(x + u, y + v));
            assert_eq!(a * b, Complex::new(x * u - y * v, x * v + y * u));
            assert_eq!(a + Complex::ZERO, a);
            assert_eq!(a * Complex::ONE, a);
        }
    }

    #[test]
    fn scalar_operands_commute() {
        for (a, b) in samples(3, 500) {
            let val = b.re();
            assert_eq!(a + val, val + a);
            assert_eq!(a * val, val * a);
            assert_eq!(val - a, -(a - val));
            assert!(close(a / val * val, a));
        }
    }

    #[test]
    fn text_round_trips() {
        for (a, _) in samples(4, 200) {
            assert_eq!(a.to_string().parse::<Complex>().unwrap(), a);

            let mut out = Vec::new();
            write_complex(&mut out, a).unwrap();
            assert_eq!(read_complex(&mut out.as_slice()).unwrap(), a);
        }
    }

    #[test]
    fn compound_forms_match_binary_forms() {
        for (a, b) in samples(5, 200) {
            let mut c = a;
            assert_eq!(*c.add_mut(b), a + b);
            let mut c = a;
            assert_eq!(*c.sub_mut(b), a - b);
            let mut c = a;
            assert_eq!(*c.mul_mut(b), a * b);
            let mut c = a;
            assert_eq!(*c.div_mut(b), a / b);
            let mut c = a;
            c *= b.im();
            assert_eq!(c, a * b.im());
        }
    }
}
