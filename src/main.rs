//! LERW CLI entry point

use anyhow::{Context, Result};
use clap::Parser;
use lerw::config::{cli::Cli, toml::load_config, validator::validate_config, Config, OutputFormat};
use lerw::output::{open_output, write_report};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = load_config(&cli)?;
    validate_config(&config)
        .context("Configuration validation failed")?;
    print_configuration(&config);

    if cli.dry_run {
        print_config_dump(&config)?;
        info!("dry run mode - configuration validated successfully");
        return Ok(());
    }

    let report = lerw::run::execute(&config)?;
    debug!(rows = report.rows(), "writing results");

    let mut out = open_output(config.output.path.as_deref())?;
    write_report(&mut out, &config, &report)?;

    if let Some(path) = &config.output.path {
        info!(path = %path.display(), "results written");
    }
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--debug`
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_configuration(config: &Config) {
    let sim = &config.simulation;
    info!(
        mode = %config.run.mode,
        norm = %sim.norm,
        dimension = sim.dimension,
        alpha = sim.alpha,
        step = ?sim.step,
        walk = ?sim.walk,
        seed = config.run.seed,
        "configuration"
    );
}

/// Echo the resolved configuration to stdout
fn print_config_dump(config: &Config) -> Result<()> {
    let text = match config.output.format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Text | OutputFormat::Csv => {
            toml::to_string_pretty(config)
                .context("Failed to serialize configuration")?
        }
    };
    println!("{}", text);
    Ok(())
}
