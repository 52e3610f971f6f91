//! `config` subcommand: inspect and initialise ~/.hrdesk/config.toml

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use hrdesk_core::HrConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the config file path in use
    Path,
    /// Print the effective configuration (file merged over defaults)
    Show,
    /// Write a config file with default values
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs, explicit: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommands::Path => run_path(explicit),
        ConfigCommands::Show => run_show(explicit),
        ConfigCommands::Init(args) => run_init(args, explicit),
    }
}

fn run_path(explicit: Option<&Path>) -> Result<()> {
    let path = HrConfig::resolve_path(explicit);
    let marker = if path.exists() { "" } else { " (not created)" };
    println!("{}{marker}", path.display());
    Ok(())
}

fn run_show(explicit: Option<&Path>) -> Result<()> {
    let config = HrConfig::load(explicit).context("Failed to load hrdesk config")?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    print!("{rendered}");
    Ok(())
}

fn run_init(args: InitArgs, explicit: Option<&Path>) -> Result<()> {
    let path = HrConfig::resolve_path(explicit);

    if path.exists() && !args.force {
        return Err(anyhow!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            path
        ));
    }

    HrConfig::default()
        .save(&path)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    println!("✅ Created config at: {}", path.display());
    println!("\nNext steps:");
    println!("  1. Edit the config: $EDITOR {}", path.display());
    println!("  2. Point [fixtures] path at a JSON data set, or keep the built-in one");
    println!("  3. Run: hrdesk config show");
    Ok(())
}
