//! Macros for defining units, conversions and the runtime registry.

/// Generates `From` trait implementations for all pairs of units within a dimension.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$crate::Measure<$first>> for $crate::Measure<$rest> {
                fn from(value: $crate::Measure<$first>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl From<$crate::Measure<$rest>> for $crate::Measure<$first> {
                fn from(value: $crate::Measure<$rest>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        $crate::impl_unit_conversions!($($rest),+);
    };
}

/// Internal helper macro generating [`UnitKind`](crate::UnitKind) and its dispatch methods.
///
/// Each entry is `Dimension => [(UnitStruct, "tag", "alias", ...), ...]`. The first tag is the one written; the
/// aliases are only accepted when reading. The unit structs must be in scope at the call site and the dimension
/// name must be a [`DimensionKind`](crate::DimensionKind) variant.
#[doc(hidden)]
#[macro_export]
macro_rules! define_unit_kinds {
    ($($dim:ident => [$(($unit:ident, $tag:literal $(, $alias:literal)*)),* $(,)?]),* $(,)?) => {
        /// Runtime identifier of every concrete unit.
        ///
        /// Variants are named after the unit types they stand for. The serialized form is [`UnitKind::tag`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum UnitKind {
            $($(
                #[doc = concat!("[`", stringify!($unit), "`], tagged `", $tag, "`.")]
                $unit,
            )*)*
        }

        impl UnitKind {
            /// Every unit, grouped by dimension.
            pub const ALL: &'static [UnitKind] = &[$($(UnitKind::$unit,)*)*];

            /// Wire discriminator of this unit.
            pub fn tag(self) -> &'static str {
                match self {
                    $($(UnitKind::$unit => $tag,)*)*
                }
            }

            /// Resolves a wire discriminator or one of its aliases, `None` when no unit carries it.
            pub fn from_tag(tag: &str) -> Option<UnitKind> {
                match tag {
                    $($($tag $(| $alias)* => Some(UnitKind::$unit),)*)*
                    _ => None,
                }
            }

            /// Dimension this unit belongs to.
            pub fn dimension(self) -> DimensionKind {
                match self {
                    $($(UnitKind::$unit => DimensionKind::$dim,)*)*
                }
            }

            /// Display label.
            pub fn symbol(self) -> &'static str {
                match self {
                    $($(UnitKind::$unit => <$unit as $crate::Unit>::SYMBOL,)*)*
                }
            }

            /// Default display precision.
            pub fn precision(self) -> usize {
                match self {
                    $($(UnitKind::$unit => <$unit as $crate::Unit>::PRECISION,)*)*
                }
            }

            /// Converts a value in this unit to its dimension's base unit.
            pub fn to_base(self, value: f64) -> f64 {
                match self {
                    $($(UnitKind::$unit => <$unit as $crate::Unit>::to_base(value),)*)*
                }
            }

            /// Converts a base-unit value into this unit.
            pub fn from_base(self, base: f64) -> f64 {
                match self {
                    $($(UnitKind::$unit => <$unit as $crate::Unit>::from_base(base),)*)*
                }
            }
        }
    };
}
