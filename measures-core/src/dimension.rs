//! Dimension types and traits.

use crate::registry::RatioKind;
use core::marker::PhantomData;

/// Marker trait for **dimensions** (Weight, Volume, Gravity …).
///
/// A *dimension* is the category that distinguishes a pound from a liter. Each is modeled as an empty enum:
///
/// ```rust
/// use measures_core::Dimension;
/// #[derive(Debug)]
/// pub enum Bitterness {}
/// impl Dimension for Bitterness {}
/// ```
pub trait Dimension {}

/// Dimension formed by dividing one [`Dimension`] by another.
///
/// Used for the ratio families, e.g. `Volume/Time` for flow or `Length/Time` for velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivDim<N: Dimension, D: Dimension>(PhantomData<(N, D)>);
impl<N: Dimension, D: Dimension> Dimension for DivDim<N, D> {}

/// A quotient dimension that has a serializable ratio family.
///
/// Only the four families in [`RatioKind`] implement this. Other [`DivDim`]s still type-check as ratios, they just
/// have no wire representation.
pub trait RatioDimension: Dimension {
    /// Runtime discriminator of this ratio family.
    const KIND: RatioKind;
}
