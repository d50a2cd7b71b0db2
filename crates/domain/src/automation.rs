//! The automation record listed by the automations table.
//!
//! Records are read-only inputs: the query path never mutates them, it only
//! filters, reorders, and slices a freshly loaded collection.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidParameter;
use crate::id::AutomationId;
use crate::time::{Timestamp, parse_timestamp};

/// Lifecycle status of an automation.
///
/// Values outside the three known statuses are kept verbatim in
/// [`Status::Other`] so a single odd record does not fail the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Active,
    Inactive,
    Deleted,
    Other(String),
}

impl Status {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Deleted => "deleted",
            Self::Other(raw) => raw,
        }
    }

    /// Sort rank: `active` < `inactive` < `deleted` < anything else.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Self::Active => 1,
            Self::Inactive => 2,
            Self::Deleted => 3,
            Self::Other(_) => 4,
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "deleted" => Self::Deleted,
            _ => Self::Other(value),
        }
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        match value {
            Status::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single automation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Automation {
    pub id: AutomationId,
    pub name: String,
    pub status: Status,
    /// Creation date exactly as stored. Parsed on demand when sorting.
    pub creation_time: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Automation {
    /// Create a builder for constructing an [`Automation`].
    #[must_use]
    pub fn builder() -> AutomationBuilder {
        AutomationBuilder::default()
    }

    /// Parsed creation time, or `None` when the stored value is not a date.
    #[must_use]
    pub fn created_at(&self) -> Option<Timestamp> {
        parse_timestamp(&self.creation_time)
    }

    /// Stringified value of the field named `field` (wire name), as used by
    /// exact-match filters. Returns `None` when the field does not exist.
    #[must_use]
    pub fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        let field = AutomationField::from_str(field).ok()?;
        Some(match field {
            AutomationField::Id => match &self.id {
                AutomationId::Text(text) => Cow::Borrowed(text.as_str()),
                numeric => Cow::Owned(numeric.to_string()),
            },
            AutomationField::Name => Cow::Borrowed(self.name.as_str()),
            AutomationField::Status => Cow::Borrowed(self.status.as_str()),
            AutomationField::CreationTime => Cow::Borrowed(self.creation_time.as_str()),
            AutomationField::Kind => Cow::Borrowed(self.kind.as_str()),
        })
    }
}

/// Step-by-step builder for [`Automation`].
#[derive(Debug, Default)]
pub struct AutomationBuilder {
    id: Option<AutomationId>,
    name: Option<String>,
    status: Option<Status>,
    creation_time: Option<String>,
    kind: Option<String>,
}

impl AutomationBuilder {
    #[must_use]
    pub fn id(mut self, id: impl Into<AutomationId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn creation_time(mut self, creation_time: impl Into<String>) -> Self {
        self.creation_time = Some(creation_time.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Consume the builder. Missing fields default to `id = 0`, empty
    /// strings, and [`Status::Active`].
    #[must_use]
    pub fn build(self) -> Automation {
        Automation {
            id: self.id.unwrap_or(AutomationId::Number(0)),
            name: self.name.unwrap_or_default(),
            status: self.status.unwrap_or(Status::Active),
            creation_time: self.creation_time.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
        }
    }
}

/// The fixed set of record fields that can be sorted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AutomationField {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "status")]
    Status,
    #[serde(rename = "creationTime")]
    CreationTime,
    #[serde(rename = "type")]
    Kind,
}

impl AutomationField {
    /// All fields, in table column order.
    pub const ALL: [Self; 5] = [
        Self::Id,
        Self::Name,
        Self::Status,
        Self::CreationTime,
        Self::Kind,
    ];

    /// Wire name of the field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Status => "status",
            Self::CreationTime => "creationTime",
            Self::Kind => "type",
        }
    }
}

impl FromStr for AutomationField {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| InvalidParameter::SortField(s.to_string()))
    }
}

impl fmt::Display for AutomationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
