//! Basic usage example for the gf2k library.
//!
//! This example builds a couple of fields, does some element arithmetic and
//! works with polynomials the way a Reed-Solomon encoder would.

use gf2k::gf::{supported_sizes, FieldParams};
use gf2k::{Gf2k, Monomial, Polynomial};

fn main() {
    println!("gf2k Library - Basic Usage Example\n");

    // The AES field
    let aes = Gf2k::from_params(FieldParams::POLY_84310_G3).expect("Failed to build AES field");
    println!("AES field: {aes}");
    println!("  0x57 + 0x83 = {:#04x}", aes.add(0x57, 0x83));
    println!("  0x57 * 0x83 = {:#04x}", aes.mul(0x57, 0x83));
    println!(
        "  0x57^-1     = {:#04x}",
        aes.inv(0x57).expect("0x57 is non-zero")
    );
    println!();

    // The Reed-Solomon field
    let rs = Gf2k::default();
    println!("Reed-Solomon field: {rs}");
    print!("  powers of the generator:");
    for e in 0..10 {
        print!(" {}", rs.exp(e));
    }
    println!("\n");

    // Every supported size has a known primitive polynomial
    println!("Supported fields:");
    for size in supported_sizes() {
        let gf = Gf2k::with_size(size).expect("Failed to build field");
        println!("  {gf} (degree {})", gf.degree());
    }
    println!();

    // Generator polynomial g(x) = (x - a^0)(x - a^1)(x - a^2)(x - a^3)
    println!("Building a Reed-Solomon generator polynomial...");
    let factors: Vec<Polynomial> = (0..4)
        .map(|i| Polynomial::new(&rs, &[rs.exp(i), 1]).expect("Failed to build factor"))
        .collect();
    let (first, rest) = factors.split_first().expect("at least one factor");
    let generator = Polynomial::product(first, rest).expect("Factors share a field");
    println!("  g(x) = {generator}");

    for i in 0..4 {
        let root = rs.exp(i);
        let value = generator.evaluate(root).expect("root is a field element");
        println!("  g({root}) = {value}");
    }
    println!();

    // Monomials
    let m = Monomial::new(&rs, 7, 3).expect("Failed to build monomial");
    println!("Monomial {m} evaluated at 2: {}", m.evaluate(2).expect("2 is a field element"));

    // Debug output parses back into an equal value
    let text = format!("{generator:?}");
    println!("\nReconstruction form: {text}");
    let parsed: Polynomial = text.parse().expect("Failed to parse");
    assert_eq!(parsed, generator);
    println!("✓ Parsed back into an equal polynomial");
}
