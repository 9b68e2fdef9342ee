pub mod cli;
pub mod commands;
pub mod gui;
pub mod utils;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Commands, NavApp};

pub fn run(args: Vec<String>) -> Result<()> {
    let app = NavApp::parse_from(args);

    // the gui installs Dioxus' own subscriber
    if !matches!(app.command, Some(Commands::Gui { .. })) {
        utils::logging::init();
    }

    match app.command {
        Some(Commands::Items { patterns, active }) => {
            commands::items::run(&patterns, active.as_deref())?
        }
        Some(Commands::Resolve { pattern }) => commands::resolve::run(&pattern)?,
        Some(Commands::Simulate { active, events }) => {
            commands::simulate::run(active.as_deref(), &events)?
        }
        Some(Commands::Pick { active }) => commands::pick::run(active.as_deref())?,
        Some(Commands::Gui {
            user_name,
            user_role,
            active,
        }) => commands::gui::run(
            user_name.as_deref(),
            user_role.as_deref(),
            active.as_deref(),
        )?,
        Some(Commands::Version) => println!("booking-nav v{}", env!("CARGO_PKG_VERSION")),
        None => commands::help::run()?,
    }

    Ok(())
}
