//! Single-term expressions `c·x^d` over a [`Gf2k`] field.

use std::fmt;

use super::Polynomial;
use crate::error::{Error, Result};
use crate::gf::Gf2k;

/// A monomial `coefficient·x^degree` with its coefficient drawn from a field.
///
/// A monomial with coefficient zero always has degree zero, so there is only
/// one representation of the zero monomial in each field.
///
/// Monomials are ordered by field, then degree, then coefficient. Monomials
/// from different fields are never equal.
///
/// # Example
///
/// ```
/// use gf2k::{Gf2k, Monomial};
///
/// let gf = Gf2k::default();
/// let a = Monomial::new(&gf, 5, 1).unwrap();
/// let b = Monomial::new(&gf, 3, 2).unwrap();
///
/// let ab = a.mul(&b).unwrap();
/// assert_eq!(ab.degree(), 3);
/// assert_eq!(ab.coefficient(), gf.mul(5, 3));
/// assert_eq!(ab.to_string(), "15x^3");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "MonomialRepr", try_from = "MonomialRepr")
)]
pub struct Monomial {
    // Field order matters: the derived ordering compares in declaration order.
    field: Gf2k,
    degree: usize,
    coefficient: u8,
}

impl Monomial {
    /// Create `coefficient·x^degree` in `field`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`](crate::Error::ElementOutOfRange)
    /// if the coefficient is not an element of the field.
    pub fn new(field: &Gf2k, coefficient: u8, degree: usize) -> Result<Self> {
        let coefficient = field.element(u32::from(coefficient))?;
        Ok(Self::from_parts(field.clone(), coefficient, degree))
    }

    /// The zero monomial of `field`.
    #[must_use]
    pub fn zero(field: &Gf2k) -> Self {
        Self::from_parts(field.clone(), 0, 0)
    }

    /// Build a monomial from a coefficient already known to be in the field.
    pub(crate) fn from_parts(field: Gf2k, coefficient: u8, degree: usize) -> Self {
        let degree = if coefficient == 0 { 0 } else { degree };
        Self {
            field,
            degree,
            coefficient,
        }
    }

    /// The field the coefficient is drawn from.
    #[must_use]
    pub fn field(&self) -> &Gf2k {
        &self.field
    }

    /// The degree; zero for the zero monomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The coefficient.
    #[must_use]
    pub fn coefficient(&self) -> u8 {
        self.coefficient
    }

    /// Check whether the coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    /// Multiply by a scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`](crate::Error::ElementOutOfRange)
    /// if `s` is not an element of the field.
    pub fn scale(&self, s: u8) -> Result<Self> {
        let s = self.field.element(u32::from(s))?;
        let coefficient = self.field.mul(self.coefficient, s);
        Ok(Self::from_parts(self.field.clone(), coefficient, self.degree))
    }

    /// Multiply by another monomial.
    ///
    /// A zero product collapses to the zero monomial regardless of the
    /// summed degree.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleFields`](crate::Error::IncompatibleFields)
    /// if `other` is drawn from a different field, or
    /// [`Error::DegreeOverflow`](crate::Error::DegreeOverflow) if the summed
    /// degree of a nonzero product exceeds `usize::MAX`.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        self.field.check_compatible(&other.field)?;
        let coefficient = self.field.mul(self.coefficient, other.coefficient);
        if coefficient == 0 {
            return Ok(Self::zero(&self.field));
        }
        let degree = self
            .degree
            .checked_add(other.degree)
            .ok_or(Error::DegreeOverflow {
                left: self.degree,
                right: other.degree,
            })?;
        Ok(Self::from_parts(self.field.clone(), coefficient, degree))
    }

    /// Substitute `x` and return the value `coefficient·x^degree`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`](crate::Error::ElementOutOfRange)
    /// if `x` is not an element of the field.
    pub fn evaluate(&self, x: u8) -> Result<u8> {
        let x = self.field.element(u32::from(x))?;
        if self.degree == 0 {
            return Ok(self.coefficient);
        }
        if x == 0 {
            return Ok(0);
        }
        // x^order == 1 for every unit, so only the degree mod order matters.
        // The result is < order <= 255.
        #[allow(clippy::cast_possible_truncation)]
        let e = (self.degree % self.field.order() as usize) as u32;
        Ok(self.field.mul(self.coefficient, self.field.pow(x, e)))
    }

    /// The polynomial whose only term is this monomial.
    ///
    /// # Panics
    ///
    /// The polynomial is stored densely, so this panics if `degree + 1`
    /// coefficients cannot be allocated.
    #[must_use]
    pub fn to_polynomial(&self) -> Polynomial {
        let mut coefficients = vec![0u8; self.degree];
        coefficients.push(self.coefficient);
        Polynomial::from_vec(self.field.clone(), coefficients)
    }
}

impl From<Monomial> for Polynomial {
    fn from(monomial: Monomial) -> Self {
        monomial.to_polynomial()
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.coefficient, self.degree) {
            (0, _) => write!(f, "0"),
            (c, 0) => write!(f, "{c}"),
            (1, 1) => write!(f, "x"),
            (c, 1) => write!(f, "{c}x"),
            (1, d) => write!(f, "x^{d}"),
            (c, d) => write!(f, "{c}x^{d}"),
        }
    }
}

/// The reconstruction form, e.g. `Monomial::new(Gf2k::new(256, 0x11d, 0x2), 5, 3)`.
impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Monomial::new({:?}, {}, {})",
            self.field, self.coefficient, self.degree
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct MonomialRepr {
    field: Gf2k,
    coefficient: u8,
    degree: usize,
}

#[cfg(feature = "serde")]
impl From<Monomial> for MonomialRepr {
    fn from(m: Monomial) -> Self {
        Self {
            field: m.field,
            coefficient: m.coefficient,
            degree: m.degree,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<MonomialRepr> for Monomial {
    type Error = crate::error::Error;

    fn try_from(repr: MonomialRepr) -> Result<Self> {
        Self::new(&repr.field, repr.coefficient, repr.degree)
    }
}
