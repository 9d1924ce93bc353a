//! Field parameters: the identity of a GF(2^k) instance.

use std::fmt;

/// The triple that identifies a field: size, modulus polynomial and generator.
///
/// Two fields are the same field exactly when their parameters are equal.
/// The derived ordering compares size, then modulus, then generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldParams {
    /// Number of elements, 2^k.
    pub size: u32,
    /// Packed modulus polynomial of degree k (bit i is the coefficient of x^i).
    pub poly: u32,
    /// Generator of the multiplicative group.
    pub generator: u32,
}

impl FieldParams {
    /// GF(256) with `x^8 + x^4 + x^3 + x^2 + 1` and generator `0x02`.
    pub const POLY_84320_G2: Self = Self::new(256, 0x11d, 0x02);

    /// GF(256) with the AES polynomial `x^8 + x^4 + x^3 + x + 1` and generator `0x03`.
    pub const POLY_84310_G3: Self = Self::new(256, 0x11b, 0x03);

    /// The field used when no field is specified.
    pub const DEFAULT: Self = Self::POLY_84320_G2;

    /// Create a parameter set. No validation is performed here.
    #[must_use]
    pub const fn new(size: u32, poly: u32, generator: u32) -> Self {
        Self {
            size,
            poly,
            generator,
        }
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FieldParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GF({};p={:#x};g={:#x})",
            self.size, self.poly, self.generator
        )
    }
}
