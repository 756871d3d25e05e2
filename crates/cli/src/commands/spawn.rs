//! Spawn a single pack and print it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use pack_core::{Pack, Seed, SpawnRequest, UnitInstance};
use runtime::Spawner;

use super::{OutputFormat, runtime_config};

/// Spawn one pack
#[derive(Parser)]
pub struct Spawn {
    /// Zone id (e.g. blood_moor)
    #[arg(value_name = "ZONE")]
    zone: String,

    /// Difficulty id (normal, nightmare, hell)
    #[arg(value_name = "DIFFICULTY")]
    difficulty: String,

    /// Seed; anything that is not a number is hashed as text
    #[arg(value_name = "SEED", allow_negative_numbers = true)]
    seed: Seed,

    /// Log a spawn diagnostic for this request
    #[arg(long)]
    debug: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Directory holding the content documents
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Spawn {
    pub async fn execute(self) -> Result<()> {
        let config = runtime_config(self.data_dir);
        let spawner = Spawner::from_config(&config);

        let request = SpawnRequest::new(&self.zone, &self.difficulty, self.seed.clone())
            .with_debug(self.debug);
        let pack = spawner.spawn_pack(request).await.with_context(|| {
            format!(
                "Failed to spawn a pack in '{}' on '{}' (seed {})",
                self.zone, self.difficulty, self.seed
            )
        })?;

        match self.format {
            OutputFormat::Summary => print_summary(&self.zone, &self.difficulty, &self.seed, &pack),
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&pack).context("Failed to serialize pack")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}

fn print_summary(zone: &str, difficulty: &str, seed: &Seed, pack: &Pack) {
    println!(
        "{} {} / {} / seed {} ({} units)",
        style("Pack:").bold().cyan(),
        zone,
        difficulty,
        seed,
        pack.len()
    );
    println!();

    print_unit("leader", pack.leader());
    for minion in pack.minions() {
        print_unit("minion", minion);
    }
}

fn print_unit(role: &str, unit: &UnitInstance) {
    println!(
        "{} {}  lvl {}  {}",
        style(format!("[{role}]")).bold().yellow(),
        style(&unit.name).bold(),
        unit.level,
        style(&unit.id).dim()
    );
    println!(
        "  hp {}  dps {:.2}  def {}",
        unit.stats.hp, unit.stats.dps, unit.stats.def
    );

    let resists: Vec<String> = unit
        .resists
        .iter()
        .filter(|(_, value)| *value != 0.0)
        .map(|(kind, value)| format!("{kind} {value}"))
        .collect();
    if !resists.is_empty() {
        println!("  resists: {}", resists.join(", "));
    }

    let immune: Vec<String> = unit.immune.types().map(|kind| kind.to_string()).collect();
    if !immune.is_empty() {
        println!("  immune: {}", style(immune.join(", ")).red());
    }

    if !unit.affixes.is_empty() {
        let affixes: Vec<&str> = unit.affixes.iter().map(|a| a.id.as_str()).collect();
        println!("  affixes: {}", style(affixes.join(", ")).magenta());
    }

    println!(
        "  loot: {}  role: {}  ai: {}",
        unit.loot_table, unit.role, unit.ai
    );
    println!();
}
