//! Forwards spawn diagnostics to `tracing`.
use pack_core::{Diagnostic, DiagnosticSink};
use tracing::{debug, info};

/// [`DiagnosticSink`] that logs every record under the `pack::diagnostics`
/// target.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::Spawn(spawn) => info!(
                target: "pack::diagnostics",
                zone = %spawn.zone_id,
                monster = %spawn.monster_id,
                tier = %spawn.tier_id,
                zone_level = spawn.zone_level,
                hp_mult = spawn.multipliers.hp_mult,
                dmg_mult = spawn.multipliers.dmg_mult,
                def_mult = spawn.multipliers.def_mult,
                overrides_applied = spawn.overrides_applied,
                pack_size = spawn.pack_size,
                "pack spawned"
            ),
            Diagnostic::AffixCountClamped {
                monster_id,
                tier_id,
                requested,
                available,
            } => debug!(
                target: "pack::diagnostics",
                monster = %monster_id,
                tier = %tier_id,
                requested,
                available,
                "affix count clamped to pool size"
            ),
        }
    }
}
