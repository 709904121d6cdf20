//! Insight data model.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// Validation errors returned when constructing insight value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightValidationError {
    NegativeBrand,
    EmptyText,
}

impl fmt::Display for InsightValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeBrand => write!(f, "brand must be a non-negative integer"),
            Self::EmptyText => write!(f, "text must not be empty"),
        }
    }
}

impl std::error::Error for InsightValidationError {}

/// Opaque brand identifier attached to each insight.
///
/// Brand entities are not modelled here; the value is validated for sign only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct BrandId(i64);

impl BrandId {
    /// Validate and construct a [`BrandId`].
    pub fn new(value: i64) -> Result<Self, InsightValidationError> {
        if value < 0 {
            return Err(InsightValidationError::NegativeBrand);
        }
        Ok(Self(value))
    }

    /// Access the underlying integer value.
    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BrandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<BrandId> for i64 {
    fn from(value: BrandId) -> Self {
        value.0
    }
}

impl TryFrom<i64> for BrandId {
    type Error = InsightValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Insight content.
///
/// The only constraint is a minimum length of one; surrounding whitespace is
/// stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InsightText(String);

impl InsightText {
    /// Validate and construct an [`InsightText`] from owned input.
    pub fn new(text: impl Into<String>) -> Result<Self, InsightValidationError> {
        Self::from_owned(text.into())
    }

    fn from_owned(text: String) -> Result<Self, InsightValidationError> {
        if text.is_empty() {
            return Err(InsightValidationError::EmptyText);
        }
        Ok(Self(text))
    }
}

impl AsRef<str> for InsightText {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for InsightText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<InsightText> for String {
    fn from(value: InsightText) -> Self {
        value.0
    }
}

impl TryFrom<String> for InsightText {
    type Error = InsightValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Render a timestamp in the `createdAt` wire and storage format.
///
/// RFC 3339 with millisecond precision and a `Z` suffix, even when the
/// instant lands on a whole second.
pub(crate) fn format_created_at(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_created_at<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_created_at(*value))
}

/// A persisted insight.
///
/// ## Invariants
/// - `id` is assigned by the storage layer and unique.
/// - `text` is never empty.
/// - `created_at` is assigned once, at creation time, and serialises via
///   [`format_created_at`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Insight {
    id: i64,
    brand: BrandId,
    #[serde(serialize_with = "serialize_created_at")]
    created_at: DateTime<Utc>,
    text: InsightText,
}

impl Insight {
    /// Build an [`Insight`] from validated components.
    pub fn new(id: i64, brand: BrandId, created_at: DateTime<Utc>, text: InsightText) -> Self {
        Self {
            id,
            brand,
            created_at,
            text,
        }
    }

    /// Storage-assigned identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Associated brand.
    pub fn brand(&self) -> BrandId {
        self.brand
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Insight content.
    pub fn text(&self) -> &InsightText {
        &self.text
    }
}

/// A validated creation request: what the caller supplies before the system
/// assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightDraft {
    brand: BrandId,
    text: InsightText,
}

impl InsightDraft {
    /// Build a draft from validated components.
    pub fn new(brand: BrandId, text: InsightText) -> Self {
        Self { brand, text }
    }

    /// Fallible constructor from raw parts.
    pub fn try_from_parts(
        brand: i64,
        text: impl Into<String>,
    ) -> Result<Self, InsightValidationError> {
        Ok(Self::new(BrandId::new(brand)?, InsightText::new(text)?))
    }

    /// Associated brand.
    pub fn brand(&self) -> BrandId {
        self.brand
    }

    /// Insight content.
    pub fn text(&self) -> &InsightText {
        &self.text
    }
}

/// A draft stamped with its creation time, ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInsight {
    brand: BrandId,
    created_at: DateTime<Utc>,
    text: InsightText,
}

impl NewInsight {
    /// Stamp a draft with the moment of creation.
    pub fn from_draft(draft: InsightDraft, created_at: DateTime<Utc>) -> Self {
        let InsightDraft { brand, text } = draft;
        Self {
            brand,
            created_at,
            text,
        }
    }

    /// Associated brand.
    pub fn brand(&self) -> BrandId {
        self.brand
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Insight content.
    pub fn text(&self) -> &InsightText {
        &self.text
    }
}
