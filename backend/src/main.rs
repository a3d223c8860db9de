use std::path::PathBuf;

use anyhow::Context;
use clap::{self, Parser, Subcommand};
use dsc_core::global as dg;
use log::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

#[derive(clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Extra directories holding connector.json descriptors
    #[arg(short, long, env = "DSC_PLUGINS_DIR", value_delimiter = ':')]
    plugins_dir: Vec<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Emit logs as json lines
    #[arg(long)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List registered connectors
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one connector
    Show {
        alias: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the connector selected for a jdbc url
    Resolve { url: String },
    /// Load every plugin and report registration errors
    Check,
}

fn init_logging(level: Option<&str>, json: bool) {
    let filter = level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> dsc_core::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref(), args.log_json);

    dg::init();
    dsc_plugins::init_with_dirs(args.plugins_dir).context("failed to load connectors")?;
    info!("loaded plugins: {:?}", dg::plugin_ids());

    let output = dg::with_registry(|reg| match &args.command {
        Command::List { json } => commands::list(reg, *json),
        Command::Show { alias, json } => commands::show(reg, alias, *json),
        Command::Resolve { url } => commands::resolve(reg, url),
        Command::Check => Ok(format!("{} connector(s) registered", reg.len())),
    })?;
    println!("{}", output);

    Ok(())
}
