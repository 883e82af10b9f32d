//! Unit types and traits.

use crate::dimension::{Dimension, DivDim, RatioDimension};
use crate::format::DEFAULT_PRECISION;
use crate::registry::{AnyUnit, UnitKind};
use std::borrow::Cow;
use std::fmt::Debug;
use std::marker::PhantomData;

/// Trait implemented by every **unit** type.
///
/// * `to_base` maps a value in this unit onto the *base unit* of its dimension, `from_base` maps it back. The two
///   must be inverses over the unit's supported domain. They need not be linear: temperatures are affine and the
///   gravity scales use polynomial regressions.
///
/// * `SYMBOL` is the printable label (e.g. `"kg"` or `"°C"`).
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// # Invariants
///
/// - Exactly one unit per dimension has identity conversions (the base unit).
/// - Implementations are zero-sized marker types; the built-in units are unit structs with no fields.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable label, appended by [`Measure::display`](crate::Measure::display).
    const SYMBOL: &'static str;

    /// Decimal places used by `Display` when the formatter asks for none.
    const PRECISION: usize = DEFAULT_PRECISION;

    /// Converts a value in this unit to the dimension's base unit.
    fn to_base(value: f64) -> f64;

    /// Converts a base-unit value into this unit.
    fn from_base(base: f64) -> f64;

    /// Display label. Ratios synthesize theirs from both sides.
    fn units() -> Cow<'static, str> {
        Cow::Borrowed(Self::SYMBOL)
    }
}

/// A concrete (non-ratio) unit with a runtime [`UnitKind`].
pub trait KnownUnit: Unit {
    /// Registry entry for this unit.
    const KIND: UnitKind;
}

/// A unit with a wire representation.
///
/// Implemented by every [`KnownUnit`] and by [`Per`] ratios of a [`RatioDimension`] family.
pub trait Tagged: Unit {
    /// Runtime descriptor of this unit.
    fn any_unit() -> AnyUnit;
}

/// Unit representing the division of two other units.
///
/// `Per<N, D>` corresponds to `N / D`. Its base value is synthesized from the two sides:
/// `to_base(v) = N::to_base(v) / D::to_base(1.0)` and `from_base(v) = N::from_base(v) / D::from_base(1.0)`.
/// The label is `"{N}/{D}"`.
///
/// The unit pair is part of the type, so `Per<Pound, Gallon>` and `Per<Kilogram, Liter>` are different units of
/// the same dimension, and a flow can never be compared with a velocity.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Per<N: Unit, D: Unit>(PhantomData<(N, D)>);

impl<N: Unit, D: Unit> Unit for Per<N, D> {
    type Dim = DivDim<N::Dim, D::Dim>;
    const SYMBOL: &'static str = "";

    #[inline]
    fn to_base(value: f64) -> f64 {
        N::to_base(value) / D::to_base(1.0)
    }

    #[inline]
    fn from_base(base: f64) -> f64 {
        N::from_base(base) / D::from_base(1.0)
    }

    fn units() -> Cow<'static, str> {
        Cow::Owned(format!("{}/{}", N::units(), D::units()))
    }
}

impl<N: KnownUnit, D: KnownUnit> Tagged for Per<N, D>
where
    DivDim<N::Dim, D::Dim>: RatioDimension,
{
    fn any_unit() -> AnyUnit {
        AnyUnit::Ratio {
            kind: <DivDim<N::Dim, D::Dim> as RatioDimension>::KIND,
            n: N::KIND,
            d: D::KIND,
        }
    }
}
