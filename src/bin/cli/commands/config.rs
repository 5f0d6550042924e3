//! Configuration file handling for the CLI.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use srcmaint::SrcmaintConfig;

/// Load the configuration from an explicit path, or from `.srcmaint.yml` /
/// `.srcmaint.yaml` in the working directory, or fall back to defaults.
pub fn load_file_config(explicit_path: Option<&Path>) -> anyhow::Result<SrcmaintConfig> {
    let implicit = || SrcmaintConfig::find_implicit(Path::new("."));

    match explicit_path.map(PathBuf::from).or_else(implicit) {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            SrcmaintConfig::from_yaml_file(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))
        }
        None => Ok(SrcmaintConfig::default()),
    }
}

/// Print the default configuration
pub fn print_default_config() -> anyhow::Result<()> {
    println!("# Default srcmaint configuration");
    println!("# Save this as .srcmaint.yml and customize as needed");
    println!();

    let yaml_output = SrcmaintConfig::default().to_yaml()?;
    print!("{yaml_output}");

    Ok(())
}
