//! Time units.
//!
//! The base unit for this dimension is [`Second`]. Calendar units are fixed-length: a year is 365 days and a month
//! is a twelfth of that.

use crate::{Dimension, Measure, Unit};
use measures_derive::Unit;

/// Dimension tag for time.
pub enum Time {}
impl Dimension for Time {}

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

/// Seconds in one minute.
pub const SECONDS_PER_MINUTE: f64 = 60.0;
/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 60.0 * SECONDS_PER_MINUTE;
/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 24.0 * SECONDS_PER_HOUR;
/// Seconds in one week.
pub const SECONDS_PER_WEEK: f64 = 7.0 * SECONDS_PER_DAY;
/// Days in one year.
pub const DAYS_PER_YEAR: f64 = 365.0;
/// Seconds in one year.
pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * SECONDS_PER_DAY;
/// Seconds in one month.
pub const SECONDS_PER_MONTH: f64 = SECONDS_PER_YEAR / 12.0;

/// Second, the base unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "sec", dimension = Time, ratio = 1.0)]
pub struct Second;
/// A measure in seconds.
pub type Seconds = Measure<Second>;

/// Minute.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Time, ratio = SECONDS_PER_MINUTE)]
pub struct Minute;
/// A measure in minutes.
pub type Minutes = Measure<Minute>;

/// Hour.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hrs", dimension = Time, ratio = SECONDS_PER_HOUR)]
pub struct Hour;
/// A measure in hours.
pub type Hours = Measure<Hour>;

/// Day.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "dys", dimension = Time, ratio = SECONDS_PER_DAY)]
pub struct Day;
/// A measure in days.
pub type Days = Measure<Day>;

/// Week.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "wks", dimension = Time, ratio = SECONDS_PER_WEEK)]
pub struct Week;
/// A measure in weeks.
pub type Weeks = Measure<Week>;

/// Month (`365 / 12` days).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mos", dimension = Time, ratio = SECONDS_PER_MONTH)]
pub struct Month;
/// A measure in months.
pub type Months = Measure<Month>;

/// Year (365 days).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yrs", dimension = Time, ratio = SECONDS_PER_YEAR)]
pub struct Year;
/// A measure in years.
pub type Years = Measure<Year>;

crate::impl_unit_conversions!(Second, Minute, Hour, Day, Week, Month, Year);

impl<U: Unit<Dim = Time>> Measure<U> {
    /// This duration in seconds.
    pub fn seconds(self) -> f64 {
        self.in_units::<Second>()
    }

    /// This duration in minutes.
    pub fn minutes(self) -> f64 {
        self.in_units::<Minute>()
    }

    /// This duration in hours.
    pub fn hours(self) -> f64 {
        self.in_units::<Hour>()
    }

    /// This duration in days.
    pub fn days(self) -> f64 {
        self.in_units::<Day>()
    }

    /// This duration in weeks.
    pub fn weeks(self) -> f64 {
        self.in_units::<Week>()
    }

    /// This duration in months.
    pub fn months(self) -> f64 {
        self.in_units::<Month>()
    }

    /// This duration in years.
    pub fn years(self) -> f64 {
        self.in_units::<Year>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn day_in_every_unit() {
        let d = Days::new(1.0);
        assert_eq!(d.seconds(), 86_400.0);
        assert_eq!(d.minutes(), 1_440.0);
        assert_eq!(d.hours(), 24.0);
        assert_abs_diff_eq!(d.weeks(), 1.0 / 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(d.years(), 1.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn calendar_units() {
        assert_abs_diff_eq!(Years::new(1.0).months(), 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Months::new(1.0).days(), 365.0 / 12.0, epsilon = 1e-9);
        assert_abs_diff_eq!(Weeks::new(2.0).days(), 14.0, epsilon = 1e-12);
    }

    #[test]
    fn accumulating_minutes() {
        let mut boil = Minutes::new(60.0);
        boil += Seconds::new(90.0);
        assert_eq!(boil.value(), 61.5);
        assert_eq!(boil.display(1), "61.5min");
        assert!(boil > Hours::new(1.0));
    }

    proptest! {
        #[test]
        fn prop_round_trip(v in -1e6..1e6f64) {
            let back = Hours::new(v).to::<Month>().to::<Second>().to::<Hour>();
            prop_assert!((back.value() - v).abs() < 1e-4);
        }
    }
}
