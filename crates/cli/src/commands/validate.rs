//! Load and validate the content documents.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use pack_content::DocumentKind;
use pack_core::PackError;
use runtime::{RuntimeError, Spawner};
use strum::IntoEnumIterator;

use super::runtime_config;

/// Load and validate the content documents
#[derive(Parser)]
pub struct Validate {
    /// Directory holding the content documents
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Validate {
    pub async fn execute(self) -> Result<()> {
        let config = runtime_config(self.data_dir);
        println!(
            "{} {}",
            style("Data directory:").bold().cyan(),
            config.data_dir.display()
        );

        let data = match Spawner::from_config(&config).data().await {
            Ok(data) => data,
            Err(err) => {
                println!(
                    "{} {} ({})",
                    style("✗").red().bold(),
                    style(err.error_code()).red(),
                    err.severity().as_str()
                );
                return Err(describe(err));
            }
        };

        for kind in DocumentKind::iter() {
            println!(
                "{} {:<14} {:>4} records  ({})",
                style("✓").green().bold(),
                kind.as_ref(),
                data.count(kind),
                config.documents.location(kind)
            );
        }
        println!();
        println!("{}", style("All documents are valid.").bold().green());

        Ok(())
    }
}

/// Keeps the full source chain (fetch/parse cause, validation path).
fn describe(err: RuntimeError) -> anyhow::Error {
    anyhow::Error::new(err).context("Content validation failed")
}
