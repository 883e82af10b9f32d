//! Flow aliases (`Volume / Time`).
//!
//! ```rust
//! use measures_core::flow::Flow;
//! use measures_core::time::{Hour, Minute};
//! use measures_core::volume::{Gallon, Liter};
//!
//! let chiller: Flow<Gallon, Minute> = Flow::new(2.0);
//! let per_hour = chiller.to::<measures_core::Per<Liter, Hour>>();
//! assert!((per_hour.value() - 454.2492).abs() < 1e-9);
//! ```

use crate::registry::RatioKind;
use crate::units::time::Time;
use crate::units::volume::Volume;
use crate::{DivDim, Measure, Per, RatioDimension, Unit};

/// Dimension alias for flows (`Volume / Time`).
pub type FlowDim = DivDim<Volume, Time>;

impl RatioDimension for FlowDim {
    const KIND: RatioKind = RatioKind::Flow;
}

/// Marker trait for any unit whose dimension is [`FlowDim`].
pub trait FlowUnit: Unit<Dim = FlowDim> {}
impl<T: Unit<Dim = FlowDim>> FlowUnit for T {}

/// A flow parameterized by volume and time units.
pub type Flow<N, D> = Measure<Per<N, D>>;
