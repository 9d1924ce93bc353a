//! Polynomials over GF(2) packed into machine words.
//!
//! A modulus for GF(2^k) is a polynomial of degree k over GF(2). It is
//! represented as an integer whose bit `i` is the coefficient of `x^i`, so
//! `x^8 + x^4 + x^3 + x^2 + 1` is `0x11d`. Addition of such polynomials is
//! XOR and multiplication is carry-less.
//!
//! This module also provides a table of primitive polynomials, one for each
//! supported field size, together with a generator known to work with it.

/// A primitive polynomial over GF(2) and a matching generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimitivePoly {
    /// The field size this polynomial defines: 2^k.
    pub size: u32,
    /// The packed polynomial, including the x^k bit.
    pub poly: u32,
    /// A generator of the multiplicative group modulo `poly`.
    pub generator: u32,
}

/// Lookup table for primitive polynomials.
///
/// The polynomial for GF(256) is the one used by most Reed-Solomon codecs;
/// the AES polynomial `0x11b` is not primitive over `x`, so it is not listed
/// here (see [`FieldParams::POLY_84310_G3`](super::FieldParams::POLY_84310_G3)).
pub static PRIMITIVE_POLYS: &[PrimitivePoly] = &[
    // x^2 + x + 1
    PrimitivePoly { size: 4, poly: 0x7, generator: 0x2 },
    // x^3 + x + 1
    PrimitivePoly { size: 8, poly: 0xb, generator: 0x2 },
    // x^4 + x + 1
    PrimitivePoly { size: 16, poly: 0x13, generator: 0x2 },
    // x^5 + x^2 + 1
    PrimitivePoly { size: 32, poly: 0x25, generator: 0x2 },
    // x^6 + x + 1
    PrimitivePoly { size: 64, poly: 0x43, generator: 0x2 },
    // x^7 + x^3 + 1
    PrimitivePoly { size: 128, poly: 0x89, generator: 0x2 },
    // x^8 + x^4 + x^3 + x^2 + 1
    PrimitivePoly { size: 256, poly: 0x11d, generator: 0x2 },
];

/// Get the primitive polynomial listed for a field size.
///
/// Returns `None` if the size is not supported.
#[must_use]
pub fn primitive_poly(size: u32) -> Option<PrimitivePoly> {
    PRIMITIVE_POLYS.iter().copied().find(|p| p.size == size)
}

/// Get all supported field sizes.
#[must_use]
pub fn supported_sizes() -> Vec<u32> {
    PRIMITIVE_POLYS.iter().map(|p| p.size).collect()
}

/// Degree of a packed polynomial.
///
/// The zero polynomial has no degree; `None` is returned for it.
#[must_use]
pub fn degree(p: u32) -> Option<u32> {
    if p == 0 {
        None
    } else {
        Some(31 - p.leading_zeros())
    }
}

/// Remainder of `dividend / divisor` under XOR long division.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[must_use]
pub fn rem(mut dividend: u32, divisor: u32) -> u32 {
    assert!(divisor != 0, "polynomial division by zero");
    let d = 31 - divisor.leading_zeros();
    while let Some(m) = degree(dividend) {
        if m < d {
            break;
        }
        dividend ^= divisor << (m - d);
    }
    dividend
}

/// Check whether `p` is irreducible over GF(2).
///
/// Trial division by every polynomial of degree 1 up to `deg(p) / 2`.
/// Constants and the zero polynomial are not irreducible.
#[must_use]
pub fn is_irreducible(p: u32) -> bool {
    let Some(d) = degree(p) else {
        return false;
    };
    if d == 0 {
        return false;
    }
    let limit = 1u32 << (d / 2 + 1);
    (2..limit).all(|divisor| rem(p, divisor) != 0)
}

/// Multiply `x` by `y` modulo `poly` in GF(`size`), bit by bit.
///
/// This is the shift-and-reduce multiply used to validate generators and to
/// fill the log/exp tables. `x` and `y` must already be reduced.
#[must_use]
pub fn mul_mod(mut x: u32, mut y: u32, poly: u32, size: u32) -> u32 {
    let mut r = 0;
    while x > 0 {
        if x & 1 != 0 {
            r ^= y;
        }
        x >>= 1;
        y <<= 1;
        if y & size != 0 {
            y ^= poly;
        }
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree() {
        assert_eq!(degree(0), None);
        assert_eq!(degree(1), Some(0));
        assert_eq!(degree(0b10), Some(1));
        assert_eq!(degree(0x11d), Some(8));
    }

    #[test]
    fn test_rem() {
        // (x^2 + 1) = (x + 1)^2 over GF(2)
        assert_eq!(rem(0b101, 0b11), 0);
        // x^2 + x + 1 leaves remainder 1 modulo x + 1
        assert_eq!(rem(0b111, 0b11), 1);
        assert_eq!(rem(0b11, 0b111), 0b11);
    }

    #[test]
    fn test_is_irreducible() {
        for entry in PRIMITIVE_POLYS {
            assert!(is_irreducible(entry.poly), "{:#x}", entry.poly);
        }
        assert!(is_irreducible(0x11b));
        assert!(!is_irreducible(0x42));
        assert!(!is_irreducible(0b101));
        assert!(!is_irreducible(1));
        assert!(!is_irreducible(0));
    }

    #[test]
    fn test_mul_mod() {
        // In GF(16) mod x^4 + x + 1: 3 * 7 = 9
        assert_eq!(mul_mod(3, 7, 0x13, 16), 9);
        assert_eq!(mul_mod(0x11, 0x14, 0x11d, 256), 0x49);
        assert_eq!(mul_mod(0, 0x14, 0x11d, 256), 0);
        assert_eq!(mul_mod(1, 0x14, 0x11d, 256), 0x14);
    }

    #[test]
    fn test_primitive_poly_lookup() {
        assert_eq!(primitive_poly(256).map(|p| p.poly), Some(0x11d));
        assert_eq!(primitive_poly(4).map(|p| p.poly), Some(0x7));
        assert!(primitive_poly(17).is_none());
        assert_eq!(supported_sizes(), vec![4, 8, 16, 32, 64, 128, 256]);
    }
}
