use anyhow::{Context, Result};

use crate::gui::state::{NavItemId, NavItemView, NavRegistry};
use crate::utils::colors::print_selected;

pub fn run(active: Option<&str>) -> Result<()> {
    let registry = NavRegistry::default();
    let active = active.and_then(NavItemId::parse_lenient);
    let options: Vec<NavItemView> = registry.views(active, false).iter().copied().collect();

    if !atty::is(atty::Stream::Stdin) {
        eprintln!("Navigation entries:");
        for view in &options {
            eprintln!("  {}", view);
        }
        anyhow::bail!("Interactive selection requires a terminal");
    }

    let chosen = select_with_inquire(options)?;
    chosen.activate(print_selected);
    Ok(())
}

fn select_with_inquire(options: Vec<NavItemView>) -> Result<NavItemView> {
    use inquire::Select;

    let start = options.iter().position(|view| view.active).unwrap_or(0);
    let selected = Select::new("Select a navigation entry:", options)
        .with_starting_cursor(start)
        .with_page_size(10)
        .prompt()
        .context("Failed to select navigation entry")?;

    Ok(selected)
}
