//! Conversion of native values into the gateway's string encodings.

use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, SubsecRound, Utc};
use rust_decimal::Decimal;

use crate::{
    error::{HppError, Result},
    hpp::fields,
};

/// Request data prior to normalization: field names mapped to native values.
pub type RequestData = BTreeMap<String, FieldValue>;

/// Request data after normalization: every value in gateway string form.
pub type NormalizedData = BTreeMap<String, String>;

/// A request field value before normalization.
///
/// Most fields are plain text; dates, validity windows, and amounts carry
/// native types that normalization converts into the encodings the gateway
/// expects.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// An already-encoded string, passed through unchanged.
    Text(String),
    /// An integral value, e.g. an amount already in minor units.
    Integer(i64),
    /// A decimal amount in currency major units.
    Amount(Decimal),
    /// A calendar date.
    Date(NaiveDate),
    /// An absolute timestamp.
    Timestamp(DateTime<FixedOffset>),
    /// A validity window measured from the moment of normalization.
    Duration(Duration),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Amount(d) => write!(f, "{d}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Timestamp(t) => f.write_str(&t.to_rfc3339()),
            Self::Duration(d) => write!(f, "{d}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Amount(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value.fixed_offset())
    }
}

impl From<Duration> for FieldValue {
    fn from(value: Duration) -> Self {
        Self::Duration(value)
    }
}

/// Converts recognized fields to their gateway encodings and stringifies
/// everything else.
///
/// Idempotent: all-string input passes through unchanged, so a mapping that
/// has already been normalized survives a second pass byte for byte.
///
/// # Errors
///
/// Returns [`HppError::InvalidAmount`] when `paymentAmount` does not
/// normalize to a non-zero integral minor-unit string.
pub fn normalize(data: RequestData) -> Result<NormalizedData> {
    let mut normalized = BTreeMap::new();
    for (name, value) in data {
        let text = match name.as_str() {
            fields::PAYMENT_AMOUNT => convert_amount(&value)?,
            fields::SHIP_BEFORE_DATE => convert_date(&value),
            fields::SESSION_VALIDITY => convert_validity(&value),
            _ => value.to_string(),
        };
        normalized.insert(name, text);
    }
    Ok(normalized)
}

/// A calendar date becomes `YYYY-MM-DD`; anything else keeps its default
/// string form.
fn convert_date(value: &FieldValue) -> String {
    match value {
        FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
        other => other.to_string(),
    }
}

/// An absolute timestamp is emitted as RFC 3339. A duration is taken as
/// time from now: the current UTC instant is truncated to whole seconds,
/// shifted, and emitted with a literal `Z` suffix, matching the gateway
/// documentation examples.
fn convert_validity(value: &FieldValue) -> String {
    match value {
        FieldValue::Timestamp(t) => t.to_rfc3339(),
        FieldValue::Duration(window) => {
            let expires = Utc::now().trunc_subsecs(0) + *window;
            format!("{}Z", expires.format("%Y-%m-%dT%H:%M:%S"))
        }
        other => other.to_string(),
    }
}

/// A decimal amount in major units is shifted two places and truncated to
/// an integral minor-unit count. Whatever the input type, the resulting
/// string must parse as a non-zero integer.
fn convert_amount(value: &FieldValue) -> Result<String> {
    let text = match value {
        FieldValue::Amount(major) => {
            (*major * Decimal::ONE_HUNDRED).trunc().normalize().to_string()
        }
        other => other.to_string(),
    };
    match text.parse::<i64>() {
        Ok(0) | Err(_) => Err(HppError::InvalidAmount(text)),
        Ok(_) => Ok(text),
    }
}
