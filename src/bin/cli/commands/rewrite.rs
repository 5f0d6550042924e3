//! `rewrite` command implementation.

use std::path::Path;

use anyhow::Context;

use crate::cli::args::{OutputFormat, RewriteArgs};
use crate::cli::commands::{apply_extension_override, enforce_check, load_file_config};
use srcmaint::rewrite::update_notice;
use srcmaint::{PrefixRewriter, RewriteConfig};

/// Run the prefix rewriter.
///
/// In text mode each notice is printed as soon as its file is handled, so a
/// failure part-way through still shows what was already modified.
pub fn rewrite_command(args: RewriteArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let file_config = load_file_config(config_path)?;
    let config = build_rewrite_config(&args, file_config.rewrite);

    let rewriter = PrefixRewriter::new(config)?;
    let format = args.run.format;
    let dry_run = rewriter.config().dry_run;

    let report = rewriter
        .run_with(|change| {
            if format == OutputFormat::Text {
                if dry_run {
                    println!("Would update paths in: {}", change.path.display());
                } else {
                    println!("{}", update_notice(&change.path));
                }
            }
        })
        .with_context(|| {
            format!(
                "Failed to rewrite files under {}",
                rewriter.config().root.display()
            )
        })?;

    if format == OutputFormat::Json {
        println!("{}", report.render_json()?);
    }

    enforce_check(&report, &args.run)
}

/// Merge CLI arguments over the file configuration.
pub fn build_rewrite_config(args: &RewriteArgs, mut config: RewriteConfig) -> RewriteConfig {
    if let Some(root) = &args.root {
        config.root = root.clone();
    }
    if let Some(old_prefix) = &args.old_prefix {
        config.old_prefix = old_prefix.clone();
    }
    if let Some(new_prefix) = &args.new_prefix {
        config.new_prefix = new_prefix.clone();
    }
    apply_extension_override(&mut config.extensions, &args.run);
    config.dry_run = args.run.is_dry_run();
    config
}
