//! phishscan - phishing signal scanner for URLs
//!
//! Runs four independent checks against a URL:
//! - URL format heuristics
//! - Safe Browsing reputation lookup
//! - Domain registration age via RDAP
//! - TLS certificate retrieval and validation
//!
//! then classifies every outcome into a color-coded indicator and an
//! overall verdict. The exit code mirrors the verdict so the tool can be
//! scripted.

use clap::Parser;
use console::style;
use phishscan::cli::{Cli, Commands};
use phishscan::commands;
use phishscan::config::Settings;
use phishscan::runner::ScanPlan;
use phishscan::utils::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Install the ring crypto provider for rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();

    // Initialize logging; --verbose raises this crate to debug
    let default_filter = if cli.verbose {
        "warn,phishscan=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<i32> {
    // Handle color preference
    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let settings = load_settings(&cli)?;
    let plan = ScanPlan {
        reputation: !cli.skip_reputation,
        domain_age: !cli.skip_age,
        certificate: !cli.skip_certificate,
    };

    // Handle subcommands
    if let Some(command) = cli.command {
        return match command {
            Commands::Check(args) => {
                commands::run_check(&args.url, &settings, plan, cli.json, cli.quiet).await
            }
            Commands::Batch(args) => {
                commands::run_batch(
                    &args.file,
                    args.parallel,
                    args.issues_only,
                    &settings,
                    plan,
                    cli.json,
                    cli.quiet,
                )
                .await
            }
        };
    }

    // Default: check URL if provided
    if let Some(url) = cli.url {
        return commands::run_check(&url, &settings, plan, cli.json, cli.quiet).await;
    }

    // No command or URL provided - show help
    println!("{}", style("phishscan").cyan().bold());
    println!("Check a URL for common phishing signals\n");
    println!("Usage: phishscan [OPTIONS] [URL]");
    println!("       phishscan <COMMAND>\n");
    println!("Run 'phishscan --help' for more information.");

    Ok(0)
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::load_default()?,
    };

    if let Some(secs) = cli.timeout {
        settings = settings.with_timeout(secs);
    }

    Ok(settings)
}
