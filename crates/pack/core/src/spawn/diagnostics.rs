//! Diagnostic hook for pack assembly.
//!
//! pack-core never logs. Advisory records are handed to an injected
//! [`DiagnosticSink`]; the runtime forwards them to `tracing`, tests collect
//! them, and callers who do not care pass [`NoopSink`].

use std::sync::{Mutex, PoisonError};

use crate::data::EffectiveMultipliers;

/// Summary of one spawn call, emitted when the request sets `debug`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpawnDiagnostic {
    pub zone_id: String,
    pub monster_id: String,
    pub tier_id: String,
    pub zone_level: i32,
    pub multipliers: EffectiveMultipliers,
    /// Zone overrode tier odds or difficulty multipliers.
    pub overrides_applied: bool,
    pub pack_size: usize,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Diagnostic {
    Spawn(SpawnDiagnostic),

    /// Fewer affixes were attached than requested because the eligible pool
    /// was smaller. Not an error.
    AffixCountClamped {
        monster_id: String,
        tier_id: String,
        requested: u32,
        available: usize,
    },
}

/// Receiver of diagnostic records.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, diagnostic: Diagnostic);
}

/// Discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&self, _diagnostic: Diagnostic) {}
}

impl<F> DiagnosticSink for F
where
    F: Fn(Diagnostic) + Send + Sync,
{
    fn record(&self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *records)
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, diagnostic: Diagnostic) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}
