//! Error type for measure operations that cannot be checked at compile time.
//!
//! Typed `Measure<U>` arithmetic never fails: mixing dimensions is rejected by the compiler. The variants below
//! surface where units are only known at runtime (the registry, the JSON codec) or where a conversion is
//! undefined for part of the real line.

/// Result type for measure operations.
pub type MeasureResult<T> = Result<T, MeasureError>;

/// Error type for measure operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeasureError {
    /// Two units from different dimensions were combined, compared or converted.
    #[error("Invalid unit pairing: '{left}' and '{right}' belong to different dimensions")]
    InvalidUnitPairing {
        /// Tag of the left-hand (or source) unit.
        left: String,
        /// Tag of the right-hand (or target) unit.
        right: String,
    },

    /// A discriminator that names no known unit or ratio.
    #[error("Unknown unit kind: {0}")]
    UnknownUnitKind(String),

    /// A non-linear conversion was asked for outside the range where it is defined.
    #[error("Domain out of range: '{unit}' is undefined for base value {base}")]
    DomainOutOfRange {
        /// Tag of the unit whose conversion is undefined.
        unit: &'static str,
        /// The offending base value.
        base: f64,
    },

    /// A payload carried a different unit of the expected dimension.
    #[error("Unit mismatch: expected '{expected}', found '{found}'")]
    UnitMismatch {
        /// Tag of the unit the caller asked for.
        expected: String,
        /// Tag found in the payload.
        found: String,
    },

    /// The payload is not a measure at all, or a measure has no JSON form (infinite or NaN value).
    #[error("Malformed measure at '{path}': {message}")]
    Malformed {
        /// JSON path of the failure (`.` for the root).
        path: String,
        /// Underlying parser message.
        message: String,
    },
}

impl MeasureError {
    pub(crate) fn pairing(left: impl Into<String>, right: impl Into<String>) -> Self {
        MeasureError::InvalidUnitPairing {
            left: left.into(),
            right: right.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_tags() {
        let err = MeasureError::pairing("kilogram", "liter");
        assert_eq!(
            err.to_string(),
            "Invalid unit pairing: 'kilogram' and 'liter' belong to different dimensions"
        );

        let err = MeasureError::UnknownUnitKind("stone".into());
        assert_eq!(err.to_string(), "Unknown unit kind: stone");

        let err = MeasureError::UnitMismatch {
            expected: "pound".into(),
            found: "ounce".into(),
        };
        assert_eq!(err.to_string(), "Unit mismatch: expected 'pound', found 'ounce'");
    }

    #[test]
    fn domain_error_reports_base() {
        let err = MeasureError::DomainOutOfRange {
            unit: "sg",
            base: -3.0,
        };
        assert!(err.to_string().contains("'sg'"));
        assert!(err.to_string().contains("-3"));
    }
}
