//! Galois field arithmetic over GF(2^k).
//!
//! This module provides validated, table-driven fields of characteristic 2
//! with between 4 and 256 elements. Every element operation is O(1).
//!
//! ## Overview
//!
//! - [`FieldParams`]: the (size, modulus, generator) triple identifying a field
//! - [`GfTables`]: validated log/exp tables built from a [`FieldParams`]
//! - [`FieldRegistry`]: interning map guaranteeing one instance per parameter set
//! - [`Gf2k`]: cheap, shareable handle to a field's tables
//! - [`poly`]: GF(2) bit-polynomial helpers and known primitive polynomials
//!
//! ## Example
//!
//! ```
//! use gf2k::gf::{FieldParams, Gf2k};
//!
//! let gf = Gf2k::from_params(FieldParams::POLY_84310_G3).unwrap();
//!
//! let a = 0x57;
//! let b = 0x83;
//! assert_eq!(gf.add(a, b), 0xd4);
//! assert_eq!(gf.mul(a, b), 0xc1); // the worked example from FIPS-197
//! assert_eq!(gf.mul(a, gf.inv(a).unwrap()), 1);
//! ```

mod field;
mod params;
pub mod poly;
mod registry;
mod tables;

pub use field::Gf2k;
pub use params::FieldParams;
pub use poly::{is_irreducible, primitive_poly, supported_sizes, PrimitivePoly, PRIMITIVE_POLYS};
pub use registry::FieldRegistry;
pub use tables::GfTables;
