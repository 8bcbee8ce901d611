//! doe - DOE builder CLI
//!
//! Usage: doe <COMMAND>
//!
//! Commands:
//!   build   Build DOE_<date> from a folder of machine exports
//!   tree    Print the folder tree of a directory
//!   rules   Print the classification rule table

use anyhow::{Context, Result};
use clap::Parser;

use doe_builder::config::Config;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::build::BuildArgs;
use ui::context::UiContext;
use ui::primitives::icon::Icon;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let (config, warnings) = Config::load_or_default(cli.config.as_deref(), &cwd)?;
    let ui = UiContext::new(cli.json, cli.verbose, &config);

    for warning in &warnings {
        eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
    }

    match cli.command {
        Commands::Build {
            source,
            dest,
            project_name,
            doe_version,
            doe_date,
            date,
            strict,
        } => commands::build::cmd_build(
            BuildArgs {
                source,
                dest,
                project_name,
                doe_version,
                doe_date,
                date,
                strict,
            },
            &config,
            ui,
        ),
        Commands::Tree { dir } => commands::tree::cmd_tree(&dir, ui),
        Commands::Rules => commands::rules::cmd_rules(ui),
    }
}
