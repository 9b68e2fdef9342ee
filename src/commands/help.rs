use crate::utils::colors::Colors;
use anyhow::Result;

const COMMANDS: &[(&str, &str)] = &[
    ("items", "List navigation entries, marking the active one"),
    ("resolve", "Find entries by fuzzy id or label"),
    ("simulate", "Replay UI events (enter, leave, toggle, select:<id>, menu:<id>)"),
    ("pick", "Pick an entry interactively"),
    ("gui", "Launch the navigation shell"),
    ("version", "Print version"),
];

pub fn run() -> Result<()> {
    let mut colors = Colors::new();

    let _ = colors.bold();
    let _ = colors.println("booking-nav - navigation chrome for the booking client");
    let _ = colors.reset();
    let _ = colors.println("");

    let _ = colors.bold();
    let _ = colors.print("Usage: ");
    let _ = colors.reset();
    let _ = colors.println("booking-nav <COMMAND> [ARGS]");
    let _ = colors.println("");

    let _ = colors.bold();
    let _ = colors.println("Commands:");
    let _ = colors.reset();

    for (name, about) in COMMANDS {
        let _ = colors.cyan();
        let _ = colors.print(&format!("  {:<10}", name));
        let _ = colors.reset();
        let _ = colors.println(about);
    }

    let _ = colors.println("");
    let _ = colors.bold();
    let _ = colors.print("Use ");
    let _ = colors.reset();
    let _ = colors.bold();
    let _ = colors.print("booking-nav <command> --help");
    let _ = colors.reset();
    let _ = colors.println(" for more details.");

    Ok(())
}
