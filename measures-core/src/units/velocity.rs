//! Velocity aliases (`Length / Time`).
//!
//! No standalone velocity units are introduced: every velocity is `Length / Time` at the type level, so a
//! velocity and a [`Flow`](crate::flow::Flow) can never be compared or added.
//!
//! ```rust
//! use measures_core::length::{Kilometer, Meter};
//! use measures_core::time::{Hour, Second};
//! use measures_core::velocity::Velocity;
//!
//! let v: Velocity<Kilometer, Hour> = Velocity::new(36.0);
//! assert!((v.convert::<Meter, Second>() - 10.0).abs() < 1e-12);
//! ```

use crate::registry::RatioKind;
use crate::units::length::Length;
use crate::units::time::Time;
use crate::{DivDim, Measure, Per, RatioDimension, Unit};

/// Dimension alias for velocities (`Length / Time`).
pub type VelocityDim = DivDim<Length, Time>;

impl RatioDimension for VelocityDim {
    const KIND: RatioKind = RatioKind::Velocity;
}

/// Marker trait for any unit whose dimension is [`VelocityDim`].
pub trait VelocityUnit: Unit<Dim = VelocityDim> {}
impl<T: Unit<Dim = VelocityDim>> VelocityUnit for T {}

/// A velocity parameterized by length and time units.
pub type Velocity<N, D> = Measure<Per<N, D>>;
