//! JSON wire format.
//!
//! Every measure travels as a tagged object:
//!
//! ```json
//! {"class": "pound", "value": 1.0}
//! {"class": "flow", "value": 2.5, "n": "gallon", "d": "minutes"}
//! ```
//!
//! `class` is the [`UnitKind`] tag for concrete units and the [`RatioKind`] tag for ratios, which also carry the
//! unit tags of both sides. A missing `value` decodes as `0.0`. JSON has no infinities or NaN, so encoding a
//! non-finite value fails instead of writing `null`.
//!
//! [`AnyMeasure`] accepts any known class. A typed [`Measure<U>`] only accepts its own unit: another unit of the
//! same dimension is a [`MeasureError::UnitMismatch`], another dimension a [`MeasureError::InvalidUnitPairing`].
//!
//! ```rust
//! use measures_core::codec;
//! use measures_core::weight::{Pound, Pounds};
//!
//! let json = codec::encode(Pounds::new(1.0)).unwrap();
//! assert_eq!(json, r#"{"class":"pound","value":1.0}"#);
//!
//! let back = codec::decode_as::<Pound>(&json).unwrap();
//! assert_eq!(back.display(2), "1.00lb");
//! ```

use crate::error::{MeasureError, MeasureResult};
use crate::registry::{AnyMeasure, AnyUnit, RatioKind, UnitKind};
use crate::{Measure, Tagged};
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The object actually written to and read from JSON.
#[derive(Debug, Serialize, Deserialize)]
struct WireMeasure {
    class: String,
    #[serde(default)]
    value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    d: Option<String>,
}

impl TryFrom<AnyMeasure> for WireMeasure {
    type Error = MeasureError;

    fn try_from(measure: AnyMeasure) -> MeasureResult<Self> {
        let value = measure.value();
        if !value.is_finite() {
            log::debug!("refusing to encode non-finite value {} {}", value, measure.unit());
            return Err(MeasureError::Malformed {
                path: "value".to_string(),
                message: format!("{} has no JSON representation", value),
            });
        }

        match measure.unit().validate()? {
            AnyUnit::Simple(unit) => Ok(WireMeasure {
                class: unit.tag().to_string(),
                value,
                n: None,
                d: None,
            }),
            AnyUnit::Ratio { kind, n, d } => Ok(WireMeasure {
                class: kind.tag().to_string(),
                value,
                n: Some(n.tag().to_string()),
                d: Some(d.tag().to_string()),
            }),
        }
    }
}

impl TryFrom<WireMeasure> for AnyMeasure {
    type Error = MeasureError;

    fn try_from(wire: WireMeasure) -> MeasureResult<Self> {
        if let Some(unit) = UnitKind::from_tag(&wire.class) {
            log::trace!("resolved class '{}' to {:?}", wire.class, unit);
            return Ok(AnyMeasure::new(wire.value, unit));
        }

        let kind = RatioKind::from_tag(&wire.class)
            .ok_or_else(|| MeasureError::UnknownUnitKind(wire.class.clone()))?;
        let n = ratio_side(kind, "n", wire.n.as_deref())?;
        let d = ratio_side(kind, "d", wire.d.as_deref())?;
        log::trace!("resolved class '{}' to {:?}({:?}/{:?})", wire.class, kind, n, d);
        AnyMeasure::ratio(wire.value, kind, n, d)
    }
}

fn ratio_side(kind: RatioKind, field: &str, tag: Option<&str>) -> MeasureResult<UnitKind> {
    let tag = tag.ok_or_else(|| MeasureError::Malformed {
        path: field.to_string(),
        message: format!("ratio class '{}' needs a '{}' unit tag", kind.tag(), field),
    })?;
    UnitKind::from_tag(tag).ok_or_else(|| MeasureError::UnknownUnitKind(tag.to_string()))
}

/// Narrows a decoded measure to the unit `U`, without converting.
fn narrow<U: Tagged>(any: &AnyMeasure) -> MeasureResult<Measure<U>> {
    let expected = U::any_unit();
    let found = any.unit();
    if found == expected {
        return Ok(Measure::new(any.value()));
    }

    let err = if found.is_compatible(expected) {
        MeasureError::UnitMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    } else {
        MeasureError::pairing(expected.to_string(), found.to_string())
    };
    log::debug!("rejected {} payload: {}", expected, err);
    Err(err)
}

impl Serialize for AnyMeasure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        WireMeasure::try_from(*self)
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AnyMeasure {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = WireMeasure::deserialize(deserializer)?;
        AnyMeasure::try_from(wire).map_err(D::Error::custom)
    }
}

impl<U: Tagged> Serialize for Measure<U> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        AnyMeasure::from(*self).serialize(serializer)
    }
}

impl<'de, U: Tagged> Deserialize<'de> for Measure<U> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let any = AnyMeasure::deserialize(deserializer)?;
        narrow(&any).map_err(D::Error::custom)
    }
}

/// Encodes a measure as a JSON string.
///
/// # Errors
///
/// * [`MeasureError::Malformed`] (path `value`) when the value is infinite or NaN.
/// * [`MeasureError::InvalidUnitPairing`] when a ratio unit was assembled by hand with sides outside its family.
pub fn encode(measure: impl Into<AnyMeasure>) -> MeasureResult<String> {
    let wire = WireMeasure::try_from(measure.into())?;
    serde_json::to_string(&wire).map_err(|err| MeasureError::Malformed {
        path: ".".to_string(),
        message: err.to_string(),
    })
}

/// Decodes a JSON string into a measure of whatever unit it names.
///
/// # Errors
///
/// * [`MeasureError::Malformed`] when the text is not a measure object, with the JSON path of the failure.
/// * [`MeasureError::UnknownUnitKind`] when `class`, `n` or `d` names no known unit.
/// * [`MeasureError::InvalidUnitPairing`] when a ratio's sides do not fit its family.
pub fn decode(json: &str) -> MeasureResult<AnyMeasure> {
    let de = &mut serde_json::Deserializer::from_str(json);
    let wire: WireMeasure = serde_path_to_error::deserialize(&mut *de).map_err(|err| {
        let path = err.path().to_string();
        let message = err.into_inner().to_string();
        log::debug!("failed to decode measure at '{}': {}", path, message);
        MeasureError::Malformed { path, message }
    })?;
    de.end().map_err(|err| MeasureError::Malformed {
        path: ".".to_string(),
        message: err.to_string(),
    })?;

    AnyMeasure::try_from(wire).map_err(|err| {
        log::debug!("failed to resolve measure: {}", err);
        err
    })
}

/// Decodes a JSON string that must carry exactly the unit `U`.
///
/// ```rust
/// use measures_core::{codec, MeasureError};
/// use measures_core::weight::Ounce;
///
/// let err = codec::decode_as::<Ounce>(r#"{"class":"pound","value":1.0}"#).unwrap_err();
/// assert!(matches!(err, MeasureError::UnitMismatch { .. }));
/// ```
pub fn decode_as<U: Tagged>(json: &str) -> MeasureResult<Measure<U>> {
    narrow(&decode(json)?)
}
