//! raysite - publication metadata toolkit for the bilingual corporate site.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod generator;
mod logger;
mod registry;
mod routes;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};

use crate::cli::{Cli, Commands};
use crate::config::SiteConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(cli)?;

    match &cli.command {
        Commands::Init { .. } => cli::init::new_site(&config),
        Commands::Build { .. } => cli::build::run_build(&config),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Validate => cli::validate::run_validate(&config),
    }
}
