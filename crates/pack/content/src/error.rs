//! Validation errors with document paths.
//!
//! A [`ValidationError`] keeps its location as data (document, record kind,
//! record index, field path) so callers can inspect where a document went
//! wrong. `Display` renders the familiar path form:
//!
//! ```text
//! [zones] zone[2].spawn_table[1].monster_id: unknown monster id (got "wraith")
//! ```

use std::fmt;

use pack_core::{ErrorSeverity, PackError};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumCount, EnumIter};

/// The six configuration documents.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, AsRefStr, EnumIter, EnumCount,
)]
#[strum(serialize_all = "camelCase")]
pub enum DocumentKind {
    Difficulties,
    Zones,
    Monsters,
    Tiers,
    Affixes,
    LootTables,
}

impl DocumentKind {
    /// Name of a single record in this document, as used in error paths.
    pub const fn record_kind(self) -> &'static str {
        match self {
            Self::Difficulties => "difficulty",
            Self::Zones => "zone",
            Self::Monsters => "monster",
            Self::Tiers => "tier",
            Self::Affixes => "affix",
            Self::LootTables => "lootTable",
        }
    }

    /// File name used when the document lives in a data directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Difficulties => "difficulties.json",
            Self::Zones => "zones.json",
            Self::Monsters => "monsters.json",
            Self::Tiers => "tiers.json",
            Self::Affixes => "affixes.json",
            Self::LootTables => "loot_tables.json",
        }
    }
}

/// One step into a record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a record, e.g. `spawn_table[1].monster_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut path = self.clone();
        path.segments.push(PathSegment::Key(key.into()));
        path
    }

    #[must_use]
    pub fn index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.segments.push(PathSegment::Index(index));
        path
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// The rule a value violated.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("expected an array of records")]
    NotAList,

    #[error("missing required field")]
    MissingField,

    #[error("expected an object")]
    ExpectedObject,

    #[error("expected an array")]
    ExpectedArray,

    #[error("expected a string")]
    ExpectedString,

    #[error("must not be empty")]
    EmptyString,

    #[error("expected a number")]
    ExpectedNumber,

    #[error("expected an integer")]
    ExpectedInteger,

    #[error("must not be negative")]
    Negative,

    #[error("expected a number or an object keyed by damage type")]
    ExpectedResistances,

    #[error("expected a [min, max] pair")]
    MalformedRange,

    #[error("min {min} exceeds max {max}")]
    InvertedRange { min: i64, max: i64 },

    #[error("spawn table must not be empty")]
    EmptySpawnTable,

    #[error("unexpected key '{0}'")]
    UnexpectedKey(String),

    #[error("unknown damage type '{0}'")]
    UnknownDamageType(String),

    #[error("duplicate id")]
    DuplicateId,

    #[error("unknown {0} id")]
    UnknownReference(&'static str),
}

/// A document failed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationError {
    pub document: DocumentKind,
    /// `None` when the document itself is malformed.
    pub index: Option<usize>,
    pub field: FieldPath,
    pub kind: ValidationErrorKind,
    /// Offending raw value; `None` when the value is missing.
    pub got: Option<Value>,
}

impl ValidationError {
    pub fn record_kind(&self) -> &'static str {
        self.document.record_kind()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.document)?;
        if let Some(index) = self.index {
            write!(f, " {}[{index}]{}", self.record_kind(), self.field)?;
        }
        write!(f, ": {}", self.kind)?;
        if let Some(got) = &self.got {
            write!(f, " (got {got})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl PackError for ValidationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self.kind {
            ValidationErrorKind::NotAList => "CONTENT_NOT_A_LIST",
            ValidationErrorKind::MissingField => "CONTENT_MISSING_FIELD",
            ValidationErrorKind::ExpectedObject
            | ValidationErrorKind::ExpectedArray
            | ValidationErrorKind::ExpectedString
            | ValidationErrorKind::ExpectedNumber
            | ValidationErrorKind::ExpectedInteger
            | ValidationErrorKind::ExpectedResistances => "CONTENT_WRONG_TYPE",
            ValidationErrorKind::EmptyString | ValidationErrorKind::Negative => {
                "CONTENT_OUT_OF_RANGE"
            }
            ValidationErrorKind::MalformedRange | ValidationErrorKind::InvertedRange { .. } => {
                "CONTENT_BAD_RANGE"
            }
            ValidationErrorKind::EmptySpawnTable => "CONTENT_EMPTY_SPAWN_TABLE",
            ValidationErrorKind::UnexpectedKey(_) | ValidationErrorKind::UnknownDamageType(_) => {
                "CONTENT_UNEXPECTED_KEY"
            }
            ValidationErrorKind::DuplicateId => "CONTENT_DUPLICATE_ID",
            ValidationErrorKind::UnknownReference(_) => "CONTENT_UNKNOWN_REFERENCE",
        }
    }
}
