//! srcmaint CLI - C++ source tree maintenance
//!
//! `stamp` prepends a relative-path comment to every source file and
//! `rewrite` replaces a hardcoded path prefix across a tree.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries notices and reports.
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Stamp(args) => {
            cli::stamp_command(args, config_path)?;
        }
        Commands::Rewrite(args) => {
            cli::rewrite_command(args, config_path)?;
        }
        Commands::PrintDefaultConfig => {
            cli::print_default_config()?;
        }
    }

    Ok(())
}

/// `-v` forces debug output; otherwise `RUST_LOG` wins over the info default.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
