//! Measure type and its implementations.

use crate::format::format_number;
use crate::unit::{Per, Unit};
use std::any::TypeId;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;
use std::ops::*;

/// A value bound to one unit.
///
/// `Measure<U>` stores the raw value in unit `U` together with its canonical *base* value (the same quantity in the
/// dimension's base unit), computed once at construction. The unit is a zero-sized type parameter, so a measure
/// never changes unit: converting always produces a new measure.
///
/// Arithmetic between two measures of the same dimension keeps the **left** operand's unit, so accumulating
/// (`total = total + next`) has a stable display unit.
///
/// # Examples
///
/// ```rust
/// use measures_core::{Dimension, Measure, Unit};
///
/// pub enum Bitterness {}
/// impl Dimension for Bitterness {}
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub struct Ibu;
/// impl Unit for Ibu {
///     type Dim = Bitterness;
///     const SYMBOL: &'static str = "IBU";
///     fn to_base(value: f64) -> f64 { value }
///     fn from_base(base: f64) -> f64 { base }
/// }
///
/// let a = Measure::<Ibu>::new(25.0);
/// let b = Measure::<Ibu>::new(15.0);
/// assert_eq!((a + b).value(), 40.0);
/// assert_eq!((a + b).display(1), "40.0IBU");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Measure<U: Unit> {
    value: f64,
    base: f64,
    unit: PhantomData<U>,
}

impl<U: Unit> Measure<U> {
    /// Creates a new measure with the given value, expressed in `U`.
    #[inline]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            base: U::to_base(value),
            unit: PhantomData,
        }
    }

    /// Returns the raw value in this measure's own unit.
    #[inline]
    pub fn value(self) -> f64 {
        self.value
    }

    /// Returns the value expressed in the dimension's base unit.
    #[inline]
    pub fn base(self) -> f64 {
        self.base
    }

    /// Display label of the unit.
    #[inline]
    pub fn units(self) -> Cow<'static, str> {
        U::units()
    }

    /// The value rounded to `precision` decimals, without a label.
    pub fn format(self, precision: usize) -> String {
        format_number(self.value, precision)
    }

    /// The value rounded to `precision` decimals followed by the unit label.
    ///
    /// ```rust
    /// use measures_core::weight::Pounds;
    /// assert_eq!(Pounds::new(1.0).display(2), "1.00lb");
    /// ```
    pub fn display(self, precision: usize) -> String {
        format!("{}{}", self.format(precision), U::units())
    }

    /// Converts this measure to another unit of the same dimension.
    ///
    /// ```rust
    /// use measures_core::volume::{Gallons, Liter};
    ///
    /// let l = Gallons::new(1.0).to::<Liter>();
    /// assert!((l.value() - 3.78541).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn to<T: Unit<Dim = U::Dim>>(self) -> Measure<T> {
        Measure::new(T::from_base(self.base))
    }

    /// Returns the value of this measure expressed in `T`, without building a new measure.
    #[inline]
    pub fn in_units<T: Unit<Dim = U::Dim>>(self) -> f64 {
        T::from_base(self.base)
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Returns the smaller of two measures of the same unit.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    /// Returns the larger of two measures of the same unit.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.value.max(other.value))
    }

    /// `value + 1` in the same unit.
    #[inline]
    pub fn inc(self) -> Self {
        Self::new(self.value + 1.0)
    }

    /// `value - 1` in the same unit.
    #[inline]
    pub fn dec(self) -> Self {
        Self::new(self.value - 1.0)
    }

    /// Unary plus. Negates the stored value; unary minus ([`Neg`]) leaves it unchanged.
    ///
    /// ```rust
    /// use measures_core::weight::Ounces;
    /// let oz = Ounces::new(3.0);
    /// assert_eq!(oz.unary_plus().value(), -3.0);
    /// assert_eq!((-oz).value(), 3.0);
    /// ```
    #[inline]
    pub fn unary_plus(self) -> Self {
        Self::new(-self.value)
    }

    /// Multiplies the stored value by `factor`.
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.value * factor)
    }

    /// Same as `self + other`.
    #[inline]
    pub fn add<V: Unit<Dim = U::Dim>>(self, other: Measure<V>) -> Self {
        self + other
    }

    /// Same as `self - other`.
    #[inline]
    pub fn sub<V: Unit<Dim = U::Dim>>(self, other: Measure<V>) -> Self {
        self - other
    }

    /// Same as `self * other`.
    #[inline]
    pub fn mul<V: Unit<Dim = U::Dim>>(self, other: Measure<V>) -> Self {
        self * other
    }

    /// Same as `self / other`.
    #[inline]
    pub fn div<V: Unit<Dim = U::Dim>>(self, other: Measure<V>) -> Self {
        self / other
    }

    /// Same as `self % other`.
    #[inline]
    pub fn rem<V: Unit<Dim = U::Dim>>(self, other: Measure<V>) -> Self {
        self % other
    }

    /// Builds a ratio `self / denominator`, keeping both units.
    ///
    /// ```rust
    /// use measures_core::volume::{Gallon, Gallons};
    /// use measures_core::time::{Minute, Minutes};
    /// use measures_core::flow::Flow;
    ///
    /// let f: Flow<Gallon, Minute> = Gallons::new(10.0).per(Minutes::new(4.0));
    /// assert_eq!(f.value(), 2.5);
    /// assert_eq!(f.display(1), "2.5gal/min");
    /// ```
    #[inline]
    pub fn per<D: Unit>(self, denominator: Measure<D>) -> Measure<Per<U, D>> {
        Measure::new(self.value / denominator.value)
    }

    /// `other` in this measure's unit; the stored value when both units are the same.
    #[inline]
    fn rhs_value<V: Unit<Dim = U::Dim>>(other: Measure<V>) -> f64 {
        if TypeId::of::<U>() == TypeId::of::<V>() {
            other.value
        } else {
            U::from_base(other.base)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ratio methods
// ─────────────────────────────────────────────────────────────────────────────

impl<N: Unit, D: Unit> Measure<Per<N, D>> {
    /// Reprojects this ratio onto another unit pair and returns the bare number.
    ///
    /// Computes `N2::from_base(base) / D2::from_base(1.0)`. Use [`Measure::to`] with a `Per<N2, D2>` target to
    /// get a new ratio instead.
    ///
    /// ```rust
    /// use measures_core::density::WeightToVolume;
    /// use measures_core::volume::{Gallon, Liter};
    /// use measures_core::weight::{Kilogram, Pound};
    ///
    /// let r: WeightToVolume<Pound, Gallon> = WeightToVolume::new(1.5);
    /// let kg_per_l = r.convert::<Kilogram, Liter>();
    /// assert!((kg_per_l - 0.17973).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn convert<N2: Unit<Dim = N::Dim>, D2: Unit<Dim = D::Dim>>(self) -> f64 {
        N2::from_base(self.base) / D2::from_base(1.0)
    }

    /// Multiplies the rate by an amount of its denominator, yielding the numerator.
    ///
    /// ```rust
    /// use measures_core::flow::Flow;
    /// use measures_core::time::{Hours, Minute};
    /// use measures_core::volume::Liter;
    ///
    /// let f: Flow<Liter, Minute> = Flow::new(2.0);
    /// assert!((f.numerator_for(Hours::new(1.0)).value() - 120.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn numerator_for<D2: Unit<Dim = D::Dim>>(self, denominator: Measure<D2>) -> Measure<N> {
        Measure::new(self.value * denominator.in_units::<D>())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_measure_ops {
    ($(($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt)),* $(,)?) => {
        $(
            impl<U: Unit, V: Unit<Dim = U::Dim>> $trait<Measure<V>> for Measure<U> {
                type Output = Measure<U>;
                #[inline]
                fn $method(self, rhs: Measure<V>) -> Measure<U> {
                    Measure::new(self.value $op Self::rhs_value(rhs))
                }
            }

            impl<U: Unit, V: Unit<Dim = U::Dim>> $assign_trait<Measure<V>> for Measure<U> {
                #[inline]
                fn $assign_method(&mut self, rhs: Measure<V>) {
                    *self = Measure::new(self.value $op Self::rhs_value(rhs));
                }
            }

            impl<U: Unit> $trait<f64> for Measure<U> {
                type Output = Self;
                #[inline]
                fn $method(self, rhs: f64) -> Self {
                    Self::new(self.value $op rhs)
                }
            }

            impl<U: Unit> $assign_trait<f64> for Measure<U> {
                #[inline]
                fn $assign_method(&mut self, rhs: f64) {
                    *self = Self::new(self.value $op rhs);
                }
            }

            impl<U: Unit> $trait<Measure<U>> for f64 {
                type Output = Measure<U>;
                #[inline]
                fn $method(self, rhs: Measure<U>) -> Measure<U> {
                    Measure::new(self $op rhs.value)
                }
            }
        )*
    };
}

impl_measure_ops!(
    (Add, add, AddAssign, add_assign, +),
    (Sub, sub, SubAssign, sub_assign, -),
    (Mul, mul, MulAssign, mul_assign, *),
    (Div, div, DivAssign, div_assign, /),
    (Rem, rem, RemAssign, rem_assign, %),
);

/// Unary minus keeps the stored value; see [`Measure::unary_plus`].
impl<U: Unit> Neg for Measure<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(self.value)
    }
}

impl<U: Unit, V: Unit<Dim = U::Dim>> PartialEq<Measure<V>> for Measure<U> {
    #[inline]
    fn eq(&self, other: &Measure<V>) -> bool {
        self.base == other.base
    }
}

impl<U: Unit, V: Unit<Dim = U::Dim>> PartialOrd<Measure<V>> for Measure<U> {
    #[inline]
    fn partial_cmp(&self, other: &Measure<V>) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<U: Unit> PartialEq<f64> for Measure<U> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl<U: Unit> Default for Measure<U> {
    #[inline]
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl<U: Unit> From<f64> for Measure<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<U: Unit> Display for Measure<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(U::PRECISION);
        write!(f, "{}{}", format_number(self.value, precision), U::units())
    }
}
