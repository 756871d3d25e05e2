//! Subcommands of `packgen`.

mod spawn;
mod validate;
mod zones;

pub use spawn::Spawn;
pub use validate::Validate;
pub use zones::Zones;

use std::path::PathBuf;

use runtime::RuntimeConfig;

/// Output format shared by the listing commands.
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Pretty-printed JSON
    Json,
}

/// Environment configuration, with `--data-dir` taking precedence.
fn runtime_config(data_dir: Option<PathBuf>) -> RuntimeConfig {
    let mut config = RuntimeConfig::from_env();
    if let Some(dir) = data_dir {
        config.data_dir = dir;
    }
    config
}
