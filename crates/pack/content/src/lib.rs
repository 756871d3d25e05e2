//! Content loading for pack generation.
//!
//! Turns the six loosely-typed JSON documents (`difficulties`, `zones`,
//! `monsters`, `tiers`, `affixes`, `lootTables`) into `pack-core` records:
//!
//! 1. [`Table::validate`] checks one document and reports the first problem
//!    as a [`ValidationError`] carrying its exact path.
//! 2. [`GameData::new`] cross-checks ids between documents and freezes the
//!    result.
//!
//! Fetching documents is left to the caller; see the `runtime` crate.

pub mod error;
pub mod snapshot;
pub mod table;
pub mod validate;

pub use error::{DocumentKind, FieldPath, PathSegment, ValidationError, ValidationErrorKind};
pub use snapshot::{ContentTables, GameData};
pub use table::Table;
