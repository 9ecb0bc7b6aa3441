//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info, instrument};

use crate::application::{explore, load_map, Ending};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;

/// Resolve settings from config layers and flags, then run the command.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(map) = &cli.map {
        settings.map_file = Some(map.clone());
    }
    debug!("settings: {:?}", settings);

    match &cli.command {
        None => cmd_explore(&settings),
        Some(Commands::Explore { hide_destinations }) => {
            if *hide_destinations {
                settings.show_destinations = false;
            }
            cmd_explore(&settings)
        }
        Some(Commands::Map) => cmd_map(&settings),
        Some(Commands::Leaves) => cmd_leaves(&settings),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => cmd_config_show(&settings),
            ConfigCommands::Template => {
                output::info(&Settings::template());
                Ok(())
            }
        },
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
    }
}

#[instrument(skip(settings))]
fn cmd_explore(settings: &Settings) -> CliResult<()> {
    let map = load_map(settings.map_file.as_deref())?;
    let stdin = io::stdin();
    let expedition = explore(
        &map,
        stdin.lock(),
        io::stdout().lock(),
        settings.session_options(),
    )?;
    match expedition.ending {
        Ending::ReachedLeaf => info!("reached dead end: {:?}", expedition.last_room()),
        Ending::Quit => info!("player left at: {:?}", expedition.last_room()),
        Ending::InputClosed => info!("input closed at: {:?}", expedition.last_room()),
    }
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_map(settings: &Settings) -> CliResult<()> {
    let map = load_map(settings.map_file.as_deref())?;
    output::header(&format!("Mansion map ({} rooms)", map.len()));
    output::info(&map.to_tree());
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_leaves(settings: &Settings) -> CliResult<()> {
    let map = load_map(settings.map_file.as_deref())?;
    output::header("Dead ends:");
    for name in map.leaf_names() {
        output::detail(&name);
    }
    Ok(())
}

fn cmd_config_show(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
