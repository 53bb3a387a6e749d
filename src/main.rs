//! msgtpl: Message Template CLI
//!
//! Interactive composer for messages built from file-based recipient,
//! author, topic and template libraries.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use msgtpl::cli::{Cli, LineSelector, Selector, TerminalSelector};
use msgtpl::session::{run_session, EXIT_PROMPT};
use msgtpl::utils::{log_filter, print_error};

fn setup_logging(verbose: bool) -> Result<()> {
    // Diagnostics go to stderr so they never mix with the menu on stdout
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let layout = cli.layout();
    debug!(base_dir = %layout.base_dir().display(), "using base directory");

    let mut selector: Box<dyn Selector> =
        if io::stdin().is_terminal() && console::user_attended() {
            Box::new(TerminalSelector::new())
        } else {
            Box::new(LineSelector::new(io::stdin().lock(), io::stdout()))
        };

    // Failures end the run but are reported, not turned into an exit code
    if let Err(e) = run_session(&layout, selector.as_mut()) {
        print_error(&e.to_string());
    }

    if !cli.no_pause {
        if let Err(e) = selector.pause(EXIT_PROMPT) {
            debug!(error = %e, "exit prompt interrupted");
        }
    }

    Ok(())
}
