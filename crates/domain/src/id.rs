//! Automation record identifiers.
//!
//! The dataset is authored by hand, so identifiers show up either as JSON
//! numbers or as strings. Any JSON number is accepted: integral values that
//! fit an `i64` are kept exact, everything else (`1.5`, `1e30`, integers past
//! `i64::MAX`) is kept as a float. `1.0` and `1e3` are integral and read as
//! `1` and `1000`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize, Serializer};

/// Unique identifier of an [`Automation`](crate::automation::Automation).
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "IdRepr")]
pub enum AutomationId {
    /// Integral numeric identifier (`"id": 42`).
    Number(i64),
    /// Any other numeric identifier (`"id": 4.5`).
    Float(f64),
    /// Textual identifier (`"id": "auto-42"`).
    Text(String),
}

/// Shape of an identifier as read from JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// `i64::MAX + 1` as an `f64`, the first float past the `i64` range.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

impl From<IdRepr> for AutomationId {
    fn from(value: IdRepr) -> Self {
        match value {
            IdRepr::Integer(value) => Self::Number(value),
            IdRepr::Float(value) => Self::from(value),
            IdRepr::Text(value) => Self::Text(value),
        }
    }
}

impl AutomationId {
    /// Whether the identifier is numeric.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Float(_))
    }

    /// Numeric value, `None` for textual identifiers.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Numeric comparison. `None` when either side is textual.
    #[must_use]
    pub fn cmp_numeric(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => Some(a.cmp(b)),
            _ => Some(self.as_f64()?.total_cmp(&other.as_f64()?)),
        }
    }
}

impl PartialEq for AutomationId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b).is_eq(),
            (Self::Text(a), Self::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for AutomationId {}

impl Hash for AutomationId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Number(value) => value.hash(state),
            Self::Float(value) => value.to_bits().hash(state),
            Self::Text(value) => value.hash(state),
        }
    }
}

impl Serialize for AutomationId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Text(value) => serializer.serialize_str(value),
        }
    }
}

impl From<i64> for AutomationId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for AutomationId {
    #[allow(clippy::cast_possible_truncation)]
    fn from(value: f64) -> Self {
        if value.fract() == 0.0 && (-I64_END..I64_END).contains(&value) {
            Self::Number(value as i64)
        } else {
            Self::Float(value)
        }
    }
}

impl From<&str> for AutomationId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AutomationId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for AutomationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => value.fmt(f),
            Self::Float(value) => value.fmt(f),
            Self::Text(value) => f.write_str(value),
        }
    }
}
