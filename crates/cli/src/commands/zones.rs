//! List the zones of the loaded content.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use pack_core::{LevelRanges, Zone};
use runtime::Spawner;
use serde::Serialize;

use super::{OutputFormat, runtime_config};

/// List zones and their level ranges
#[derive(Parser)]
pub struct Zones {
    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,

    /// Directory holding the content documents
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[derive(Serialize)]
struct ZoneRow<'a> {
    id: &'a str,
    name: &'a str,
    level_range: [(&'static str, [i32; 2]); 3],
    monsters: Vec<&'a str>,
}

impl<'a> From<&'a Zone> for ZoneRow<'a> {
    fn from(zone: &'a Zone) -> Self {
        let range = |key| {
            zone.level_range
                .get(key)
                .map(|r| [r.min(), r.max()])
                .unwrap_or_default()
        };
        Self {
            id: &zone.id,
            name: &zone.name,
            level_range: LevelRanges::KEYS.map(|key| (key, range(key))),
            monsters: zone
                .spawn_table
                .iter()
                .filter(|entry| entry.weight > 0.0)
                .map(|entry| entry.monster_id.as_str())
                .collect(),
        }
    }
}

impl Zones {
    pub async fn execute(self) -> Result<()> {
        let config = runtime_config(self.data_dir);
        let data = Spawner::from_config(&config)
            .data()
            .await
            .with_context(|| format!("Failed to load content from {}", config.data_dir.display()))?;

        let rows: Vec<ZoneRow<'_>> = data.zones().iter().map(ZoneRow::from).collect();

        match self.format {
            OutputFormat::Summary => {
                println!("{}", style("=== Zones ===").bold().green());
                println!();
                for row in &rows {
                    println!("{} ({})", style(row.name).bold().cyan(), row.id);
                    for (difficulty, [min, max]) in row.level_range {
                        println!("  {difficulty:<10} {min}-{max}");
                    }
                    println!("  monsters: {}", row.monsters.join(", "));
                    println!();
                }
            }
            OutputFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&rows).context("Failed to serialize zones")?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
