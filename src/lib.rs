//! # gf2k
//!
//! Table-driven arithmetic over the finite fields GF(2^k) for 2 <= k <= 8,
//! with monomials and polynomials whose coefficients live in those fields.
//!
//! ## Overview
//!
//! Fields of characteristic 2 sit underneath Reed-Solomon codes, threshold
//! secret sharing and AES. This library provides the algebraic core those
//! constructions need:
//! - Validated field construction (irreducible modulus, verified generator)
//! - O(1) multiply, divide, inverse and exponentiation via log/exp tables
//! - One shared instance per parameter set through a [`FieldRegistry`]
//! - Canonical [`Monomial`] and [`Polynomial`] values with a total order
//!
//! ## Quick Start
//!
//! ```rust
//! use gf2k::{Gf2k, Polynomial};
//!
//! // The field used by most Reed-Solomon implementations
//! let gf = Gf2k::new(256, 0x11d, 0x02).unwrap();
//! assert_eq!(gf.mul(0x11, 0x14), 0x49);
//! assert_eq!(gf.inv(0x02).unwrap(), 0x8e);
//!
//! // 4x^2 + x + 3
//! let p = Polynomial::new(&gf, &[3, 1, 4]).unwrap();
//! let q = Polynomial::new(&gf, &[5, 2]).unwrap();
//!
//! assert_eq!(p.evaluate(2).unwrap(), 17);
//! assert_eq!(p.mul(&q).unwrap().coefficients(), &[15, 3, 22, 8]);
//! ```
//!
//! Values print in two forms. `Display` is the mathematical notation and
//! `Debug` is a constructor call that parses back into an equal value:
//!
//! ```rust
//! use gf2k::{Gf2k, Polynomial};
//!
//! let p = Polynomial::new(&Gf2k::default(), &[0, 1, 1]).unwrap();
//! assert_eq!(p.to_string(), "x^2 + x");
//! assert_eq!(
//!     format!("{p:?}"),
//!     "Polynomial::new(Gf2k::new(256, 0x11d, 0x2), [0, 1, 1])"
//! );
//! assert_eq!(format!("{p:?}").parse::<Polynomial>().unwrap(), p);
//! ```
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of fields, monomials and polynomials
//! - `parallel`: Enable parallel batch evaluation using rayon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod error;
pub mod gf;
mod parse;

#[cfg(feature = "parallel")]
pub mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::algebra::{Monomial, Polynomial};
    pub use crate::error::{Error, Result};
    pub use crate::gf::{FieldParams, FieldRegistry, Gf2k, GfTables, PrimitivePoly, PRIMITIVE_POLYS};
}

// Re-export commonly used items at crate root
pub use algebra::{Monomial, Polynomial};
pub use error::{Error, Result};
pub use gf::{FieldParams, FieldRegistry, Gf2k};
