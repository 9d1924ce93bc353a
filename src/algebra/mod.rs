//! Monomials and polynomials with coefficients in a GF(2^k) field.
//!
//! Both types hold a [`Gf2k`](crate::gf::Gf2k) handle and delegate every
//! coefficient operation to it. All operations return new values; combining
//! values from different fields fails with
//! [`Error::IncompatibleFields`](crate::Error::IncompatibleFields).

mod monomial;
mod polynomial;

pub use monomial::Monomial;
pub use polynomial::Polynomial;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gf::Gf2k;
    use proptest::prelude::*;

    fn coefficients() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(any::<u8>(), 0..12)
    }

    fn poly(coefficients: &[u8]) -> Polynomial {
        Polynomial::new(&Gf2k::default(), coefficients).unwrap()
    }

    proptest! {
        #[test]
        fn add_is_commutative(a in coefficients(), b in coefficients()) {
            let (a, b) = (poly(&a), poly(&b));
            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn add_is_associative(a in coefficients(), b in coefficients(), c in coefficients()) {
            let (a, b, c) = (poly(&a), poly(&b), poly(&c));
            let left = a.add(&b).unwrap().add(&c).unwrap();
            let right = a.add(&b.add(&c).unwrap()).unwrap();
            prop_assert_eq!(&left, &right);
            prop_assert_eq!(left, Polynomial::sum(&c, [&b, &a]).unwrap());
        }

        #[test]
        fn zero_is_additive_identity(a in coefficients()) {
            let a = poly(&a);
            let z = Polynomial::zero(a.field());
            prop_assert_eq!(a.add(&z).unwrap(), a.clone());
            prop_assert!(a.add(&a).unwrap().is_zero());
        }

        #[test]
        fn mul_is_commutative_and_associative(
            a in coefficients(),
            b in coefficients(),
            c in coefficients()
        ) {
            let (a, b, c) = (poly(&a), poly(&b), poly(&c));
            prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
            prop_assert_eq!(
                a.mul(&b).unwrap().mul(&c).unwrap(),
                a.mul(&b.mul(&c).unwrap()).unwrap()
            );
        }

        #[test]
        fn mul_distributes_over_add(a in coefficients(), b in coefficients(), c in coefficients()) {
            let (a, b, c) = (poly(&a), poly(&b), poly(&c));
            prop_assert_eq!(
                a.mul(&b.add(&c).unwrap()).unwrap(),
                a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap()
            );
        }

        #[test]
        fn evaluation_is_a_ring_homomorphism(a in coefficients(), b in coefficients(), x in any::<u8>()) {
            let (a, b) = (poly(&a), poly(&b));
            let gf = a.field().clone();
            let (ax, bx) = (a.evaluate(x).unwrap(), b.evaluate(x).unwrap());
            prop_assert_eq!(a.add(&b).unwrap().evaluate(x).unwrap(), gf.add(ax, bx));
            prop_assert_eq!(a.mul(&b).unwrap().evaluate(x).unwrap(), gf.mul(ax, bx));
        }

        #[test]
        fn no_trailing_zeros(a in coefficients()) {
            let p = poly(&a);
            prop_assert!(p.coefficients().last().map_or(true, |&c| c != 0));
            for (i, &c) in a.iter().enumerate() {
                prop_assert_eq!(p.coefficient(i), c);
            }
        }

        #[test]
        fn term_matches_coefficient(a in coefficients(), i in 0usize..16) {
            let p = poly(&a);
            let expected = Monomial::new(p.field(), p.coefficient(i), i).unwrap();
            prop_assert_eq!(p.term(i), expected);
        }

        #[test]
        fn monomial_product_matches_polynomial_product(
            c1 in any::<u8>(), d1 in 0usize..8,
            c2 in any::<u8>(), d2 in 0usize..8
        ) {
            let gf = Gf2k::default();
            let a = Monomial::new(&gf, c1, d1).unwrap();
            let b = Monomial::new(&gf, c2, d2).unwrap();
            prop_assert_eq!(
                a.mul(&b).unwrap().to_polynomial(),
                a.to_polynomial().mul(&b.to_polynomial()).unwrap()
            );
        }

        #[test]
        fn ordering_is_consistent_with_equality(a in coefficients(), b in coefficients()) {
            let (a, b) = (poly(&a), poly(&b));
            prop_assert_eq!(a.cmp(&b) == std::cmp::Ordering::Equal, a == b);
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        }
    }
}
