//! Dilution units.
//!
//! A dilution has a single unit, [`DilutionPartsPerMillion`], which is also its base unit. It is a separate
//! dimension from [`Concentration`](crate::concentration::Concentration) so the two never mix.

use crate::{Dimension, Measure};
use measures_derive::Unit;

/// Dimension tag for dilution.
pub enum Dilution {}
impl Dimension for Dilution {}

/// Parts per million of dilution.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ppm", dimension = Dilution, ratio = 1.0)]
pub struct DilutionPartsPerMillion;
/// A dilution in ppm.
pub type Dilutions = Measure<DilutionPartsPerMillion>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_unit() {
        let d = Dilutions::new(20.0);
        assert_eq!(d.base(), 20.0);
        assert_eq!((d + Dilutions::new(5.0)).display(0), "25ppm");
        assert_eq!(d.inc().value(), 21.0);
    }
}
