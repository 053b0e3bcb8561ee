//! Operations Emit Binary
//!
//! Run with: `opsgen-emit [OPTIONS]`

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use opsgen::{generate_all, shapes};
use opsgen_emit::{check_artifacts, write_artifacts, DEFAULT_MAX_ORDER};

#[derive(Parser)]
#[command(name = "opsgen-emit")]
#[command(about = "Emits the generated operations sources to disk")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output directory for generated sources
    #[arg(short, long, default_value = "generated")]
    out_dir: PathBuf,

    /// Highest order to generate, inclusive
    #[arg(long, default_value_t = DEFAULT_MAX_ORDER)]
    max_order: i32,

    /// Verify the output directory instead of writing it
    #[arg(short, long)]
    check: bool,

    /// List artifact keys without writing anything
    #[arg(short, long)]
    list: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shape registry as JSON
    Shapes,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Some(Commands::Shapes) = &cli.command {
        return print_shapes();
    }

    let artifacts = generate_all(cli.max_order)?;

    if cli.list {
        for artifact in &artifacts {
            println!("{}", artifact.key);
        }
        return Ok(());
    }

    if cli.check {
        let stale = check_artifacts(&cli.out_dir, &artifacts)?;
        if !stale.is_empty() {
            for key in &stale {
                error!("Out of date: {}", key);
            }
            info!(
                "Checked {} artifacts, {} out of date",
                artifacts.len(),
                stale.len()
            );
            std::process::exit(1);
        }
        info!("Checked {} artifacts, all up to date", artifacts.len());
        return Ok(());
    }

    write_artifacts(&cli.out_dir, &artifacts)?;
    Ok(())
}

fn print_shapes() -> Result<()> {
    let rows: Vec<_> = shapes()
        .iter()
        .map(|shape| {
            serde_json::json!({
                "name": shape.base_name(),
                "kind": shape.kind,
                "mode": shape.mode,
                "output": shape.output,
                "context": shape.context,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
