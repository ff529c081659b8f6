//! Access grid inspector.
//!
//! Loads a role's permission payload, applies grid clicks in order, prints
//! the resulting grid and writes the payload back.
//!
//! Usage:
//!   accessgrid --file role.json --resources Organization,Center,Provider master leaf:Center:write

use accessgrid_cli::{apply, load_or_create, render_grid, save, Command};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "accessgrid")]
#[command(about = "Inspect and edit role permission grids")]
struct Args {
    /// Payload file to read and update
    #[arg(short, long, default_value = "access.json")]
    file: PathBuf,

    /// Resource names used when the payload file does not exist yet
    #[arg(short, long, value_delimiter = ',')]
    resources: Vec<String>,

    /// Print the result without writing the payload back
    #[arg(long)]
    dry_run: bool,

    /// Print the payload JSON instead of the grid
    #[arg(long)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Clicks to apply: leaf:<row>:<read|write>, row:<row>, col:<read|write>, master
    commands: Vec<Command>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let (mut matrix, created) = load_or_create(&args.file, &args.resources)?;

    for command in &args.commands {
        let value = apply(&mut matrix, command)
            .with_context(|| format!("failed to apply {command}"))?;
        debug!(command = %command, value = %value, "Applied command");
    }

    if args.json {
        println!("{}", matrix.to_json()?);
    } else {
        print!("{}", render_grid(&matrix));
    }

    let changed = created || !args.commands.is_empty();
    if args.dry_run {
        info!("Dry run, payload not written");
    } else if changed {
        save(&args.file, &matrix)?;
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
