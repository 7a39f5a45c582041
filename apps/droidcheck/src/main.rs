//! droidcheck - Android project structure verification
//!
//! Probes a project tree for its expected directories, build files, sources
//! and resources, scans the manifest for required permissions and exits
//! with 0 when everything is present, 1 when something is missing and 2 when
//! the run could not complete.

mod cli;
mod display;
mod error;
mod events;
mod logging;

use crate::cli::Cli;
use crate::display::OutputRenderer;
use crate::error::CliError;
use crate::events::EventHandler;
use clap::Parser;
use droidcheck_config::Config;
use droidcheck_guard::Verifier;
use std::process;
use tracing::{error, info};

/// Exit status when the run itself failed, as opposed to a check failing
const EXIT_FATAL: i32 = 2;

fn main() {
    // Parse command line arguments first to check for JSON mode
    let cli = Cli::parse();
    let json_mode = cli.json;

    init_tracing(json_mode, cli.debug);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("Application error: {}", e);
            if json_mode {
                eprintln!("{}", e.to_json());
            } else {
                eprintln!("Error: {e}");
            }
            process::exit(EXIT_FATAL);
        }
    }
}

/// Main application logic; returns the process exit code
fn run(cli: Cli) -> Result<i32, CliError> {
    info!("Starting droidcheck v{}", env!("CARGO_PKG_VERSION"));

    // Built-in layout, then --config file, then CLI flags
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    apply_cli_config(&mut config, &cli);
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(0);
    }

    let renderer = OutputRenderer::new(cli.json, config.general.color);
    let mut event_handler = EventHandler::new(renderer.clone());

    let (event_sender, event_receiver) = droidcheck_events::channel();
    let result = Verifier::new(config.project)
        .with_event_sender(event_sender)
        .run();

    // Lines for every check that ran are shown even when the run failed
    while let Ok(event) = event_receiver.try_recv() {
        event_handler.handle_event(event);
    }

    let report = result?;
    renderer.render_report(&report)?;

    info!(exit_code = report.exit_code(), "Command completed");
    Ok(report.exit_code())
}

/// Apply CLI configuration overrides (highest precedence)
fn apply_cli_config(config: &mut Config, cli: &Cli) {
    if let Some(color) = cli.color {
        config.general.color = color;
    }

    if let Some(root) = &cli.root {
        config.project.set_root(root);
    }
}

/// Initialize tracing/logging
///
/// Logs always go to stderr so stdout carries only the report.
fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    // Check if debug logging is enabled
    let debug_enabled = std::env::var("RUST_LOG").is_ok() || debug_enabled_flag;

    if json_mode {
        if debug_enabled {
            // Keep stderr machine-readable alongside the JSON report
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                        tracing_subscriber::EnvFilter::new(
                            "info,droidcheck=debug,droidcheck_guard=debug,droidcheck_config=debug",
                        )
                    }),
                )
                .init();
        } else {
            // Fallback: disable all logging in JSON mode
            tracing_subscriber::fmt()
                .with_writer(std::io::sink)
                .with_env_filter("off")
                .init();
        }
    } else if debug_enabled {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(
                        "info,droidcheck=debug,droidcheck_guard=debug,droidcheck_config=debug",
                    )
                }),
            )
            .init();
    } else {
        // Normal mode: minimal logging to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("warn,droidcheck=warn,droidcheck_guard=warn")
                }),
            )
            .init();
    }
}
