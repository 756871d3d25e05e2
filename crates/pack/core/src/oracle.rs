//! Read access to loaded configuration.
//!
//! Pack assembly only ever reads configuration through [`ContentOracle`]. The
//! content crate's validated snapshot is the production implementation; tests
//! can provide small hand-built tables.

use crate::data::{Affix, Difficulty, Monster, Tier, Zone};

/// Oracle providing configuration records by id.
///
/// Lookups return `None` for unknown ids; deciding whether absence is an error
/// is up to the caller.
pub trait ContentOracle: Send + Sync {
    fn difficulty(&self, id: &str) -> Option<&Difficulty>;
    fn zone(&self, id: &str) -> Option<&Zone>;
    fn monster(&self, id: &str) -> Option<&Monster>;
    fn tier(&self, id: &str) -> Option<&Tier>;
    fn affix(&self, id: &str) -> Option<&Affix>;
}
