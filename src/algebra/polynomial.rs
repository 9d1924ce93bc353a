//! Dense polynomials over a [`Gf2k`] field.

use std::cmp::Ordering;
use std::fmt;

use super::Monomial;
use crate::error::Result;
use crate::gf::Gf2k;

/// A polynomial with coefficients drawn from a field.
///
/// Coefficients are stored little-endian: index `i` holds the coefficient of
/// `x^i`. Trailing zero coefficients are always stripped, so the zero
/// polynomial stores no coefficients at all. By convention the zero
/// polynomial has degree 0.
///
/// # Example
///
/// ```
/// use gf2k::{Gf2k, Polynomial};
///
/// let gf = Gf2k::default();
/// let p = Polynomial::new(&gf, &[3, 1, 4]).unwrap();
/// assert_eq!(p.to_string(), "4x^2 + x + 3");
/// assert_eq!(p.degree(), 2);
///
/// // Addition is XOR: leading terms can cancel
/// let q = Polynomial::new(&gf, &[0, 0, 4]).unwrap();
/// assert_eq!(p.add(&q).unwrap().to_string(), "x + 3");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "PolynomialRepr", try_from = "PolynomialRepr")
)]
pub struct Polynomial {
    field: Gf2k,
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Create a polynomial from little-endian coefficients.
    ///
    /// The coefficients are copied and trailing zeros are stripped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`](crate::Error::ElementOutOfRange)
    /// if any coefficient is not an element of the field.
    pub fn new(field: &Gf2k, coefficients: &[u8]) -> Result<Self> {
        for &c in coefficients {
            field.element(u32::from(c))?;
        }
        Ok(Self::from_vec(field.clone(), coefficients.to_vec()))
    }

    /// The zero polynomial of `field`.
    #[must_use]
    pub fn zero(field: &Gf2k) -> Self {
        Self {
            field: field.clone(),
            coefficients: Vec::new(),
        }
    }

    /// The constant polynomial 1 of `field`.
    #[must_use]
    pub fn one(field: &Gf2k) -> Self {
        Self {
            field: field.clone(),
            coefficients: vec![1],
        }
    }

    /// Build a polynomial from coefficients already known to be in the field.
    pub(crate) fn from_vec(field: Gf2k, mut coefficients: Vec<u8>) -> Self {
        let len = coefficients
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |i| i + 1);
        coefficients.truncate(len);
        Self {
            field,
            coefficients,
        }
    }

    /// The field the coefficients are drawn from.
    #[must_use]
    pub fn field(&self) -> &Gf2k {
        &self.field
    }

    /// Check whether this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// The degree of the polynomial.
    ///
    /// The zero polynomial reports degree 0, the same as a nonzero constant.
    /// Use [`is_zero`](Self::is_zero) to tell them apart.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// The stored little-endian coefficients, without trailing zeros.
    #[must_use]
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// The coefficient of `x^i`; zero past the stored coefficients.
    #[must_use]
    pub fn coefficient(&self, i: usize) -> u8 {
        self.coefficients.get(i).copied().unwrap_or(0)
    }

    /// The `i`-th term as a monomial.
    #[must_use]
    pub fn term(&self, i: usize) -> Monomial {
        Monomial::from_parts(self.field.clone(), self.coefficient(i), i)
    }

    /// Iterate over the nonzero terms from the highest degree down.
    pub fn terms(&self) -> impl Iterator<Item = Monomial> + '_ {
        self.coefficients
            .iter()
            .enumerate()
            .rev()
            .filter(|&(_, &c)| c != 0)
            .map(|(i, &c)| Monomial::from_parts(self.field.clone(), c, i))
    }

    /// Multiply every coefficient by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`](crate::Error::ElementOutOfRange)
    /// if `s` is not an element of the field.
    pub fn scale(&self, s: u8) -> Result<Self> {
        let s = self.field.element(u32::from(s))?;
        match s {
            0 => Ok(Self::zero(&self.field)),
            1 => Ok(self.clone()),
            _ => {
                let coefficients = self
                    .coefficients
                    .iter()
                    .map(|&c| self.field.mul(c, s))
                    .collect();
                Ok(Self::from_vec(self.field.clone(), coefficients))
            }
        }
    }

    /// Add another polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleFields`](crate::Error::IncompatibleFields)
    /// if `other` is drawn from a different field.
    pub fn add(&self, other: &Self) -> Result<Self> {
        Self::sum(self, [other])
    }

    /// Sum of one or more polynomials.
    ///
    /// Coefficients are XORed position by position; missing positions count
    /// as zero. The result does not depend on the order of the operands.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleFields`](crate::Error::IncompatibleFields)
    /// if any operand is drawn from a different field than `first`.
    pub fn sum<'a>(first: &Self, rest: impl IntoIterator<Item = &'a Self>) -> Result<Self> {
        let field = &first.field;
        let mut sum = first.coefficients.clone();
        for next in rest {
            field.check_compatible(&next.field)?;
            if next.coefficients.len() > sum.len() {
                sum.resize(next.coefficients.len(), 0);
            }
            for (acc, &c) in sum.iter_mut().zip(&next.coefficients) {
                *acc = field.add(*acc, c);
            }
        }
        Ok(Self::from_vec(field.clone(), sum))
    }

    /// Multiply by another polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleFields`](crate::Error::IncompatibleFields)
    /// if `other` is drawn from a different field.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        Self::product(self, [other])
    }

    /// Product of one or more polynomials.
    ///
    /// Each step is a full convolution of the coefficient vectors. A zero
    /// operand makes the whole product zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleFields`](crate::Error::IncompatibleFields)
    /// if any operand is drawn from a different field than `first`.
    pub fn product<'a>(first: &Self, rest: impl IntoIterator<Item = &'a Self>) -> Result<Self> {
        let field = &first.field;
        let mut prod = first.clone();
        for next in rest {
            field.check_compatible(&next.field)?;
            prod = prod.convolve(&next.coefficients);
        }
        Ok(prod)
    }

    fn convolve(&self, other: &[u8]) -> Self {
        let p = &self.coefficients;
        if p.is_empty() || other.is_empty() {
            return Self::zero(&self.field);
        }
        let mut out = vec![0u8; p.len() + other.len() - 1];
        for (j, &b) in other.iter().enumerate() {
            for (i, &a) in p.iter().enumerate() {
                out[i + j] = self.field.add(out[i + j], self.field.mul(a, b));
            }
        }
        Self::from_vec(self.field.clone(), out)
    }

    /// Substitute `x` and return the value of the polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`](crate::Error::ElementOutOfRange)
    /// if `x` is not an element of the field.
    pub fn evaluate(&self, x: u8) -> Result<u8> {
        let x = self.field.element(u32::from(x))?;
        Ok(self.evaluate_unchecked(x))
    }

    pub(crate) fn evaluate_unchecked(&self, x: u8) -> u8 {
        let mut sum = 0u8;
        let mut pow = 1u8;
        for &c in &self.coefficients {
            sum = self.field.add(sum, self.field.mul(c, pow));
            pow = self.field.mul(pow, x);
        }
        sum
    }

    /// Evaluate the polynomial at every point in `xs`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`](crate::Error::ElementOutOfRange)
    /// if any point is not an element of the field.
    pub fn evaluate_many(&self, xs: &[u8]) -> Result<Vec<u8>> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

impl PartialOrd for Polynomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Polynomials are ordered by field, then by number of stored coefficients,
/// then by coefficients from the highest degree down.
impl Ord for Polynomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.field
            .cmp(&other.field)
            .then_with(|| self.coefficients.len().cmp(&other.coefficients.len()))
            .then_with(|| {
                self.coefficients
                    .iter()
                    .rev()
                    .cmp(other.coefficients.iter().rev())
            })
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (n, term) in self.terms().enumerate() {
            if n > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

/// The reconstruction form, e.g. `Polynomial::new(Gf2k::new(256, 0x11d, 0x2), [3, 1, 4])`.
impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial::new({:?}, {:?})", self.field, self.coefficients)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct PolynomialRepr {
    field: Gf2k,
    coefficients: Vec<u8>,
}

#[cfg(feature = "serde")]
impl From<Polynomial> for PolynomialRepr {
    fn from(p: Polynomial) -> Self {
        Self {
            field: p.field,
            coefficients: p.coefficients,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<PolynomialRepr> for Polynomial {
    type Error = crate::error::Error;

    fn try_from(repr: PolynomialRepr) -> Result<Self> {
        Self::new(&repr.field, &repr.coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn gf256() -> Gf2k {
        Gf2k::default()
    }

    fn poly(coefficients: &[u8]) -> Polynomial {
        Polynomial::new(&gf256(), coefficients).unwrap()
    }

    #[test]
    fn test_new_polynomial() {
        let cases: [(&[u8], &str, usize, &[u8]); 10] = [
            (&[], "0", 0, &[]),
            (&[1], "1", 0, &[1]),
            (&[2], "2", 0, &[2]),
            (&[17], "17", 0, &[17]),
            (&[0, 2], "2x", 1, &[0, 2]),
            (&[1, 2], "2x + 1", 1, &[1, 2]),
            (&[1, 0, 1], "x^2 + 1", 2, &[1, 0, 1]),
            (&[0, 1, 1], "x^2 + x", 2, &[0, 1, 1]),
            (&[0, 1, 1, 0], "x^2 + x", 2, &[0, 1, 1]),
            (&[3, 1, 4], "4x^2 + x + 3", 2, &[3, 1, 4]),
        ];
        for (input, display, degree, stored) in cases {
            let p = poly(input);
            assert_eq!(p.to_string(), display, "{input:?}");
            assert_eq!(p.degree(), degree, "{input:?}");
            assert_eq!(p.coefficients(), stored, "{input:?}");
            assert_eq!(p.field(), &gf256());
        }
    }

    #[test]
    fn test_trailing_zeros_are_stripped() {
        let a = poly(&[0, 1, 1, 0]);
        let b = poly(&[0, 1, 1]);
        assert_eq!(a, b);
        assert_eq!(a.degree(), b.degree());
        assert_eq!(a.to_string(), b.to_string());
        assert!(poly(&[0, 0, 0]).is_zero());
        assert_eq!(poly(&[0, 0, 0]), Polynomial::zero(&gf256()));
    }

    #[test]
    fn test_zero_polynomial_has_degree_zero() {
        let z = Polynomial::zero(&gf256());
        assert_eq!(z.degree(), 0);
        assert!(z.is_zero());
        assert_eq!(z.to_string(), "0");
        assert_eq!(z.coefficients(), &[] as &[u8]);
        assert_eq!(Polynomial::one(&gf256()).degree(), 0);
    }

    #[test]
    fn test_coefficient_and_term() {
        let p = poly(&[3, 0, 4]);
        assert_eq!(p.coefficient(0), 3);
        assert_eq!(p.coefficient(1), 0);
        assert_eq!(p.coefficient(2), 4);
        assert_eq!(p.coefficient(3), 0);
        assert_eq!(p.coefficient(1000), 0);

        for i in 0..6 {
            assert_eq!(
                p.term(i),
                Monomial::new(&gf256(), p.coefficient(i), i).unwrap()
            );
        }
        assert_eq!(p.term(1).degree(), 0);

        let terms: Vec<String> = p.terms().map(|t| t.to_string()).collect();
        assert_eq!(terms, vec!["4x^2", "3"]);
    }

    #[test]
    fn test_scale() {
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.scale(0).unwrap(), Polynomial::zero(&gf256()));
        assert_eq!(p.scale(1).unwrap(), p);
        assert_eq!(p.scale(2).unwrap(), poly(&[2, 4, 6]));
        assert!(p.scale(2).unwrap().scale(2).is_ok());
    }

    #[test]
    fn test_add_cancels_leading_terms() {
        let p = poly(&[1, 0, 0, 1]);
        let q = poly(&[0, 0, 1, 1]);
        let sum = p.add(&q).unwrap();
        assert_eq!(sum, poly(&[1, 0, 1]));
        assert_eq!(sum.degree(), 2);
        assert!(p.add(&p).unwrap().is_zero());
    }

    #[test]
    fn test_add_axioms() {
        let a = poly(&[1, 2, 3]);
        let b = poly(&[0, 7, 0, 9, 11]);
        let c = poly(&[200]);
        let z = Polynomial::zero(&gf256());

        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
        assert_eq!(a.add(&z).unwrap(), a);
        assert_eq!(z.add(&a).unwrap(), a);
        assert_eq!(z.add(&z).unwrap(), z);

        let sum = Polynomial::sum(&a, [&b, &c]).unwrap();
        assert_eq!(sum, Polynomial::sum(&c, [&a, &b]).unwrap());
        assert_eq!(Polynomial::sum(&a, std::iter::empty()).unwrap(), a);
    }

    #[test]
    fn test_mul() {
        let p = poly(&[3, 1, 4]);
        let q = poly(&[5, 2]);
        assert_eq!(p.mul(&q).unwrap(), poly(&[15, 3, 22, 8]));
        assert_eq!(q.mul(&p).unwrap(), poly(&[15, 3, 22, 8]));

        // (x + 1)^2 = x^2 + 1 in characteristic 2
        let x1 = poly(&[1, 1]);
        assert_eq!(x1.mul(&x1).unwrap(), poly(&[1, 0, 1]));

        assert_eq!(p.mul(&Polynomial::one(&gf256())).unwrap(), p);
    }

    #[test]
    fn test_mul_by_zero() {
        let p = poly(&[3, 1, 4]);
        let z = Polynomial::zero(&gf256());
        assert!(p.mul(&z).unwrap().is_zero());
        assert!(z.mul(&p).unwrap().is_zero());
        assert!(Polynomial::product(&p, [&p, &z, &p]).unwrap().is_zero());
    }

    #[test]
    fn test_product_order_independent() {
        let a = poly(&[1, 2]);
        let b = poly(&[3, 0, 5]);
        let c = poly(&[7, 11, 13]);
        let abc = Polynomial::product(&a, [&b, &c]).unwrap();
        assert_eq!(abc, Polynomial::product(&c, [&a, &b]).unwrap());
        assert_eq!(abc, a.mul(&b.mul(&c).unwrap()).unwrap());
        assert_eq!(abc.degree(), 5);
    }

    #[test]
    fn test_incompatible_fields() {
        let g2 = Gf2k::new(16, 0x13, 2).unwrap();
        let g3 = Gf2k::new(16, 0x13, 3).unwrap();
        let a = Polynomial::new(&g2, &[1, 2]).unwrap();
        let b = Polynomial::new(&g3, &[1, 2]).unwrap();

        let expected = Error::IncompatibleFields {
            left: g2.params(),
            right: g3.params(),
        };
        assert_eq!(a.add(&b).unwrap_err(), expected);
        assert_eq!(a.mul(&b).unwrap_err(), expected);
        assert!(Polynomial::sum(&a, [&a, &b]).is_err());
        assert_ne!(a, b);
    }

    #[test]
    fn test_evaluate() {
        let p = poly(&[3, 1, 4]);
        assert_eq!(p.evaluate(0).unwrap(), 3);
        assert_eq!(p.evaluate(1).unwrap(), 6);
        assert_eq!(p.evaluate(2).unwrap(), 17);
        assert_eq!(Polynomial::zero(&gf256()).evaluate(42).unwrap(), 0);
        assert_eq!(p.evaluate_many(&[0, 1, 2]).unwrap(), vec![3, 6, 17]);
    }

    #[test]
    fn test_evaluate_matches_terms() {
        let gf = gf256();
        let p = poly(&[9, 0, 250, 17, 1]);
        for x in gf.elements() {
            let by_terms = p
                .terms()
                .fold(0, |acc, t| gf.add(acc, t.evaluate(x).unwrap()));
            assert_eq!(p.evaluate(x).unwrap(), by_terms);
        }
    }

    #[test]
    fn test_out_of_range() {
        let gf = Gf2k::new(8, 0xb, 2).unwrap();
        assert_eq!(
            Polynomial::new(&gf, &[1, 8]).unwrap_err(),
            Error::ElementOutOfRange { value: 8, size: 8 }
        );
        let p = Polynomial::new(&gf, &[1, 7]).unwrap();
        assert!(p.evaluate(9).is_err());
        assert!(p.scale(8).is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(poly(&[]) < poly(&[1]));
        assert!(poly(&[255]) < poly(&[0, 1]));
        assert!(poly(&[9, 1]) < poly(&[0, 2]));
        assert!(poly(&[1, 2]) < poly(&[2, 2]));
        assert_eq!(poly(&[1, 2]).cmp(&poly(&[1, 2, 0])), Ordering::Equal);

        let small = Gf2k::new(16, 0x13, 2).unwrap();
        let s = Polynomial::new(&small, &[1, 2, 3, 4, 5]).unwrap();
        assert!(s < poly(&[1]));
    }

    #[test]
    fn test_debug_form() {
        assert_eq!(
            format!("{:?}", poly(&[3, 1, 4])),
            "Polynomial::new(Gf2k::new(256, 0x11d, 0x2), [3, 1, 4])"
        );
        assert_eq!(
            format!("{:?}", poly(&[])),
            "Polynomial::new(Gf2k::new(256, 0x11d, 0x2), [])"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let gf = Gf2k::new(16, 0x13, 2).unwrap();
        let p = Polynomial::new(&gf, &[3, 1, 4]).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#"{"field":{"size":16,"poly":19,"generator":2},"coefficients":[3,1,4]}"#
        );
        let back: Polynomial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);

        // Deserialization strips zeros and validates coefficients
        let padded = r#"{"field":{"size":16,"poly":19,"generator":2},"coefficients":[1,0,0]}"#;
        assert_eq!(serde_json::from_str::<Polynomial>(padded).unwrap().degree(), 0);
        let bad = r#"{"field":{"size":16,"poly":19,"generator":2},"coefficients":[16]}"#;
        assert!(serde_json::from_str::<Polynomial>(bad).is_err());
    }
}
