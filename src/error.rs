//! Error types for the gf2k library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! specific error variants for field construction, element arithmetic,
//! mixing values from different fields, and parsing reconstruction text.

use thiserror::Error;

use crate::gf::FieldParams;

/// The main error type for the gf2k library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Field Construction Errors ============
    /// The requested field size is not a supported power of two.
    #[error("field size {0} is not supported (must be one of 4, 8, 16, 32, 64, 128, 256)")]
    InvalidFieldSize(u32),

    /// The modulus polynomial does not have the degree required by the field size.
    #[error("polynomial {poly:#x} is out of range for GF({size}), must have degree log2({size})")]
    PolynomialOutOfRange {
        /// The requested field size.
        size: u32,
        /// The rejected modulus polynomial.
        poly: u32,
    },

    /// The modulus polynomial factors over GF(2).
    #[error("polynomial {0:#x} is reducible over GF(2)")]
    ReduciblePolynomial(u32),

    /// The candidate generator does not enumerate the multiplicative group.
    #[error("{generator:#x} is not a generator of GF({size}) with polynomial {poly:#x}")]
    NotGenerator {
        /// The requested field size.
        size: u32,
        /// The modulus polynomial.
        poly: u32,
        /// The rejected generator.
        generator: u32,
    },

    // ============ Element Arithmetic Errors ============
    /// Attempted division by zero or inversion of zero.
    #[error("division by zero in GF({size})")]
    DivisionByZero {
        /// The size of the field where division by zero occurred.
        size: u32,
    },

    /// Attempted to take the discrete logarithm of zero.
    #[error("logarithm of zero in GF({size})")]
    LogarithmOfZero {
        /// The size of the field.
        size: u32,
    },

    /// Element value is out of range for the specified field.
    #[error("element {value} is out of range for GF({size}), must be in 0..{size}")]
    ElementOutOfRange {
        /// The invalid element value.
        value: u32,
        /// The size of the field.
        size: u32,
    },

    // ============ Algebra Errors ============
    /// Two values drawn from different fields were combined.
    #[error("cannot combine values from different fields: {left} and {right}")]
    IncompatibleFields {
        /// Parameters of the left-hand field.
        left: FieldParams,
        /// Parameters of the right-hand field.
        right: FieldParams,
    },

    /// The degree of a product does not fit in a `usize`.
    #[error("degree {left} + {right} overflows")]
    DegreeOverflow {
        /// Degree of the left-hand factor.
        left: usize,
        /// Degree of the right-hand factor.
        right: usize,
    },

    // ============ Parse Errors ============
    /// Reconstruction text could not be parsed.
    #[error("parse error: {message}")]
    Parse {
        /// Description of what could not be parsed.
        message: String,
    },
}

/// A specialized `Result` type for gf2k operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `Parse` error.
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create an `IncompatibleFields` error from the two offending parameter sets.
    #[must_use]
    pub fn incompatible(left: FieldParams, right: FieldParams) -> Self {
        Self::IncompatibleFields { left, right }
    }
}
