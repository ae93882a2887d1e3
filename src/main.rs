//! pagecfg - inspect the static page registry.

mod cli;
mod config;
mod logger;
mod output;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::{OutputConfig, OutputFormat, PagecfgConfig};
use pagecfg::{PAGES, PageRegistry};
use std::io::{Write, stdout};

fn main() {
    if let Err(err) = run() {
        logger::log_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PagecfgConfig::load(&cli)?;
    logger::set_color(config.output.color);

    let settings = &config.output;
    match &cli.command {
        Commands::Get { page_id } => println!("{}", show_page(&PAGES, page_id, settings)?),
        Commands::List => println!("{}", output::page_list(&PAGES, settings)?),
        Commands::Sections => println!("{}", output::sections(settings)?),
        Commands::Check => check_pages(&PAGES, settings, &mut stdout())?,
    }
    Ok(())
}

/// Render the descriptor of `page_id`, failing if it isn't registered.
fn show_page(registry: &PageRegistry, page_id: &str, settings: &OutputConfig) -> Result<String> {
    let desc = registry.get(page_id)?;
    output::descriptor(page_id, desc, settings)
}

/// Report convention warnings and fail if there are any.
///
/// In JSON mode `out` receives only the warnings document.
fn check_pages(
    registry: &PageRegistry,
    settings: &OutputConfig,
    out: &mut impl Write,
) -> Result<()> {
    let warnings = registry.check();

    match settings.format {
        OutputFormat::Json => writeln!(out, "{}", output::warnings(&warnings, settings)?)?,
        OutputFormat::Text => {
            for warning in &warnings {
                log!("check"; "{warning}");
            }
        }
    }

    if !warnings.is_empty() {
        bail!("{} convention warning(s) in {} pages", warnings.len(), registry.len());
    }
    if settings.format == OutputFormat::Text {
        log!("check"; "{} pages, no warnings", registry.len());
    }
    Ok(())
}
