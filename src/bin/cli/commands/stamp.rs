//! `stamp` command implementation.

use std::path::Path;

use anyhow::Context;

use crate::cli::args::{OutputFormat, StampArgs};
use crate::cli::commands::{apply_extension_override, enforce_check, load_file_config};
use srcmaint::stamp::COMPLETION_NOTICE;
use srcmaint::{PathStamper, RunReport, StampConfig};

/// Run the path stamper.
pub fn stamp_command(args: StampArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let file_config = load_file_config(config_path)?;
    let config = build_stamp_config(&args, file_config.stamp);

    let stamper = PathStamper::new(config)?;
    let report = stamper
        .run()
        .with_context(|| format!("Failed to stamp files under {}", stamper.config().root.display()))?;

    render_stamp_output(&report, args.run.format)?;
    enforce_check(&report, &args.run)
}

/// Merge CLI arguments over the file configuration.
pub fn build_stamp_config(args: &StampArgs, mut config: StampConfig) -> StampConfig {
    if let Some(root) = &args.root {
        config.root = root.clone();
    }
    apply_extension_override(&mut config.extensions, &args.run);
    config.dry_run = args.run.is_dry_run();
    config
}

fn render_stamp_output(report: &RunReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", report.render_json()?),
        OutputFormat::Text if report.dry_run => {
            for change in &report.changes {
                println!("Would stamp: {}", change.path.display());
            }
            println!(
                "{} of {} file(s) would change.",
                report.changes.len(),
                report.files_scanned
            );
        }
        OutputFormat::Text => println!("{COMPLETION_NOTICE}"),
    }
    Ok(())
}
