//! Schema validation from loosely-typed JSON.
//!
//! Each document is a top-level array of records. Every record is walked
//! through a [`Node`], which carries its own path so that any rule violation
//! reports exactly where it happened. Validation stops at the first failure.

mod affix;
mod difficulty;
mod loot;
mod monster;
mod references;
mod tier;
mod zone;

use std::collections::HashSet;

use pack_core::{CountRange, DamageType, LevelRange, ResistanceMap};
use serde_json::{Map, Value};

use crate::error::{DocumentKind, FieldPath, ValidationError, ValidationErrorKind};

pub use affix::affixes;
pub use difficulty::difficulties;
pub use loot::loot_tables;
pub use monster::monsters;
pub(crate) use references::check_references;
pub use tier::tiers;
pub use zone::zones;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// A value inside one record, together with where it sits.
#[derive(Clone, Debug)]
pub(crate) struct Node<'a> {
    document: DocumentKind,
    index: usize,
    path: FieldPath,
    value: &'a Value,
}

impl<'a> Node<'a> {
    pub(crate) fn fail(&self, kind: ValidationErrorKind) -> ValidationError {
        ValidationError {
            document: self.document,
            index: Some(self.index),
            field: self.path.clone(),
            kind,
            got: Some(self.value.clone()),
        }
    }

    fn missing(&self, key: &str) -> ValidationError {
        ValidationError {
            document: self.document,
            index: Some(self.index),
            field: self.path.key(key),
            kind: ValidationErrorKind::MissingField,
            got: None,
        }
    }

    fn child(&self, segment: Segment<'_>, value: &'a Value) -> Node<'a> {
        let path = match segment {
            Segment::Key(key) => self.path.key(key),
            Segment::Index(index) => self.path.index(index),
        };
        Node {
            document: self.document,
            index: self.index,
            path,
            value,
        }
    }

    pub(crate) fn object(&self) -> ValidationResult<&'a Map<String, Value>> {
        self.value
            .as_object()
            .ok_or_else(|| self.fail(ValidationErrorKind::ExpectedObject))
    }

    /// Required field. `null` counts as missing.
    pub(crate) fn field(&self, key: &str) -> ValidationResult<Node<'a>> {
        self.optional(key)?.ok_or_else(|| self.missing(key))
    }

    pub(crate) fn optional(&self, key: &str) -> ValidationResult<Option<Node<'a>>> {
        Ok(self
            .object()?
            .get(key)
            .filter(|value| !value.is_null())
            .map(|value| self.child(Segment::Key(key), value)))
    }

    pub(crate) fn items(&self) -> ValidationResult<Vec<Node<'a>>> {
        let items = self
            .value
            .as_array()
            .ok_or_else(|| self.fail(ValidationErrorKind::ExpectedArray))?;
        Ok(items
            .iter()
            .enumerate()
            .map(|(index, value)| self.child(Segment::Index(index), value))
            .collect())
    }

    /// Key/value pairs of an object, in document order.
    pub(crate) fn entries(&self) -> ValidationResult<Vec<(&'a str, Node<'a>)>> {
        Ok(self
            .object()?
            .iter()
            .map(|(key, value)| (key.as_str(), self.child(Segment::Key(key), value)))
            .collect())
    }

    pub(crate) fn string(&self) -> ValidationResult<String> {
        self.value
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.fail(ValidationErrorKind::ExpectedString))
    }

    /// Non-empty string, used for ids and references.
    pub(crate) fn id(&self) -> ValidationResult<String> {
        let id = self.string()?;
        if id.trim().is_empty() {
            return Err(self.fail(ValidationErrorKind::EmptyString));
        }
        Ok(id)
    }

    pub(crate) fn number(&self) -> ValidationResult<f64> {
        self.value
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or_else(|| self.fail(ValidationErrorKind::ExpectedNumber))
    }

    pub(crate) fn non_negative(&self) -> ValidationResult<f64> {
        let n = self.number()?;
        if n < 0.0 {
            return Err(self.fail(ValidationErrorKind::Negative));
        }
        Ok(n)
    }

    pub(crate) fn integer(&self) -> ValidationResult<i64> {
        if let Some(n) = self.value.as_i64() {
            return Ok(n);
        }
        // Whole floats (`5.0`) are accepted as integers.
        match self.value.as_f64() {
            Some(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 2f64.powi(53) => {
                Ok(n as i64)
            }
            _ => Err(self.fail(ValidationErrorKind::ExpectedInteger)),
        }
    }

    pub(crate) fn i32(&self) -> ValidationResult<i32> {
        i32::try_from(self.integer()?).map_err(|_| self.fail(ValidationErrorKind::ExpectedInteger))
    }

    pub(crate) fn u32(&self) -> ValidationResult<u32> {
        let n = self.integer()?;
        if n < 0 {
            return Err(self.fail(ValidationErrorKind::Negative));
        }
        u32::try_from(n).map_err(|_| self.fail(ValidationErrorKind::ExpectedInteger))
    }

    /// `[min, max]` integer pair with `min <= max`.
    fn pair(&self) -> ValidationResult<(Node<'a>, Node<'a>)> {
        let items = self
            .value
            .as_array()
            .filter(|items| items.len() == 2)
            .ok_or_else(|| self.fail(ValidationErrorKind::MalformedRange))?;
        Ok((
            self.child(Segment::Index(0), &items[0]),
            self.child(Segment::Index(1), &items[1]),
        ))
    }

    pub(crate) fn level_range(&self) -> ValidationResult<LevelRange> {
        let (min, max) = self.pair()?;
        let (min, max) = (min.i32()?, max.i32()?);
        LevelRange::new(min, max).ok_or_else(|| {
            self.fail(ValidationErrorKind::InvertedRange {
                min: min.into(),
                max: max.into(),
            })
        })
    }

    pub(crate) fn count_range(&self) -> ValidationResult<CountRange> {
        let (min, max) = self.pair()?;
        let (min, max) = (min.u32()?, max.u32()?);
        CountRange::new(min, max).ok_or_else(|| {
            self.fail(ValidationErrorKind::InvertedRange {
                min: min.into(),
                max: max.into(),
            })
        })
    }

    /// Per-damage-type map, or a single number applied to every type.
    pub(crate) fn resistances(&self, allow_scalar: bool) -> ValidationResult<ResistanceMap> {
        if allow_scalar && self.value.is_number() {
            return Ok(ResistanceMap::uniform(self.number()?));
        }
        if !self.value.is_object() {
            let kind = if allow_scalar {
                ValidationErrorKind::ExpectedResistances
            } else {
                ValidationErrorKind::ExpectedObject
            };
            return Err(self.fail(kind));
        }

        let mut map = ResistanceMap::zero();
        for (key, node) in self.entries()? {
            let kind: DamageType = key
                .parse()
                .map_err(|_| node.fail(ValidationErrorKind::UnknownDamageType(key.to_owned())))?;
            map.set(kind, node.number()?);
        }
        Ok(map)
    }
}

enum Segment<'k> {
    Key(&'k str),
    Index(usize),
}

/// Splits a document into record nodes.
pub(crate) fn records(document: DocumentKind, value: &Value) -> ValidationResult<Vec<Node<'_>>> {
    let items = value.as_array().ok_or_else(|| ValidationError {
        document,
        index: None,
        field: FieldPath::root(),
        kind: ValidationErrorKind::NotAList,
        got: Some(value.clone()),
    })?;
    Ok(items
        .iter()
        .enumerate()
        .map(|(index, value)| Node {
            document,
            index,
            path: FieldPath::root(),
            value,
        })
        .collect())
}

/// Validates every record of `value` with `parse`, then rejects repeated ids.
pub(crate) fn table<'a, T>(
    document: DocumentKind,
    value: &'a Value,
    parse: impl Fn(&Node<'a>) -> ValidationResult<T>,
    id_of: impl Fn(&T) -> &str,
) -> ValidationResult<Vec<T>> {
    let nodes = records(document, value)?;
    let mut parsed = Vec::with_capacity(nodes.len());
    let mut seen = HashSet::new();
    for node in &nodes {
        node.object()?;
        let record = parse(node)?;
        if !seen.insert(id_of(&record).to_owned()) {
            let id = node.field("id")?;
            return Err(id.fail(ValidationErrorKind::DuplicateId));
        }
        parsed.push(record);
    }
    Ok(parsed)
}
