//! Taxonomy Sort shell process.
//!
//! Reads host requests as JSON lines on stdin and answers on stdout.
//! Logs go to stderr.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ts_host_shell::{load_config, serve_lines, ShellStore, StoreBackend, TaxonomySortShell};

/// Taxonomy Sort host shell
#[derive(Parser, Debug)]
#[command(name = "taxonomy-sort-shell")]
#[command(about = "Applies custom taxonomy term order to host requests read from stdin")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Persist ranks in this JSON file (overrides config and environment)
    #[arg(short, long)]
    store: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let mut config = load_config(args.config.as_deref()).context("loading configuration")?;
    if let Some(path) = args.store {
        config.store = StoreBackend::File { path };
    }

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("building log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    let store = ShellStore::open(&config).context("opening order store")?;
    info!(
        backend = store.backend_name(),
        tie_break = ?config.sort.tie_break,
        unranked_key_base = config.sort.unranked_key_base,
        "[ts-shell] Starting"
    );

    let shell = TaxonomySortShell::with_config(
        Arc::new(store),
        config.sort.clone(),
        config.plugin_url.clone(),
    );

    let handled = serve_lines(&shell, io::stdin().lock(), io::stdout().lock())
        .context("serving host requests")?;
    info!("[ts-shell] Input closed after {} requests", handled);

    Ok(())
}
