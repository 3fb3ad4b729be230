//! CLI command showing the resolved configuration

use clap::Args;

use crate::config::{AppPaths, Settings};
use crate::error::ReportResult;

/// Arguments of the `config` command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Write the current settings to the settings file
    #[arg(long)]
    pub init: bool,
}

/// Handle the `config` command
pub fn handle_config_command(
    args: ConfigArgs,
    paths: &AppPaths,
    settings: &Settings,
) -> ReportResult<()> {
    if args.init {
        settings.save(paths)?;
        println!("Settings written to: {}", paths.settings_file().display());
        println!();
    }

    println!("ledger-report Configuration");
    println!("===========================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Chart width:     {}", settings.chart_width);
    println!("  Generator:");
    println!("    Count:      {}", settings.generator.count);
    println!(
        "    Years:      {}..={}",
        settings.generator.first_year, settings.generator.last_year
    );
    match settings.generator.seed {
        Some(seed) => println!("    Seed:       {}", seed),
        None => println!("    Seed:       (random)"),
    }

    Ok(())
}
