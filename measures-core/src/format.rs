//! Number formatting shared by every measure.

/// Decimal places used when no precision is requested.
pub const DEFAULT_PRECISION: usize = 2;

/// Formats `value` as fixed-point with `digits` decimal places.
///
/// ```rust
/// use measures_core::format_number;
///
/// assert_eq!(format_number(1.0, 2), "1.00");
/// assert_eq!(format_number(2.6, 0), "3");
/// assert_eq!(format_number(1.04, 4), "1.0400");
/// ```
#[inline]
pub fn format_number(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_digits() {
        assert_eq!(format_number(3.14159, 2), "3.14");
        assert_eq!(format_number(3.14159, 4), "3.1416");
        assert_eq!(format_number(12.0, 0), "12");
    }

    #[test]
    fn keeps_non_finite_values_readable() {
        assert_eq!(format_number(f64::INFINITY, 2), "inf");
        assert!(format_number(f64::NAN, 2).contains("NaN"));
    }
}
