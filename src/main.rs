//! ssg-util - path, URL and file utilities for static site builds.

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use ssg_util::{
    cli::{self, Cli},
    config::UtilConfig,
    debug, log, logger,
};

fn main() {
    if let Err(e) = run() {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;

    // init must work even when an existing config is broken
    let config = if cli.is_init() {
        UtilConfig::default()
    } else {
        UtilConfig::load(&cli.config, &cwd)?
    };

    logger::set_verbose(cli.verbose || config.log.verbose);
    if let Some(path) = &config.config_path {
        debug!("config"; "loaded {}", path.display());
    }

    cli::run(&cli, &config, &cwd)
}
