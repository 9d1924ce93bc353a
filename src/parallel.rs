//! Parallel batch evaluation using Rayon.
//!
//! Enable with the `parallel` feature flag.
//!
//! # Usage
//!
//! ```
//! use gf2k::{Gf2k, Polynomial};
//!
//! let gf = Gf2k::default();
//! let p = Polynomial::new(&gf, &[3, 1, 4]).unwrap();
//! let points: Vec<u8> = gf.elements().collect();
//!
//! let values = p.par_evaluate_many(&points).unwrap();
//! assert_eq!(values, p.evaluate_many(&points).unwrap());
//! ```
//!
//! For a handful of points the sequential
//! [`Polynomial::evaluate_many`] is faster.

use rayon::prelude::*;

use crate::algebra::Polynomial;
use crate::error::Result;

impl Polynomial {
    /// Evaluate the polynomial at every point in `xs` in parallel.
    ///
    /// The output is in the same order as `xs`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`](crate::Error::ElementOutOfRange)
    /// if any point is not an element of the field. All points are checked
    /// before any evaluation starts.
    pub fn par_evaluate_many(&self, xs: &[u8]) -> Result<Vec<u8>> {
        let field = self.field();
        for &x in xs {
            field.element(u32::from(x))?;
        }

        Ok(xs
            .par_iter()
            .map(|&x| self.evaluate_unchecked(x))
            .collect())
    }
}
