use anyhow::Result;

use crate::gui::state::NavRegistry;
use crate::utils::colors::Colors;

pub fn run(pattern: &str) -> Result<()> {
    let matches = NavRegistry::default().resolve(pattern);
    if matches.is_empty() {
        anyhow::bail!("No navigation entries match '{}'", pattern);
    }

    let mut colors = Colors::new();
    for (rank, entry) in matches.iter().enumerate() {
        if rank == 0 {
            let _ = colors.cyan();
            let _ = colors.bold();
        }
        let _ = colors.print(entry.id.as_str());
        let _ = colors.reset();
        let _ = colors.println(&format!("  {}", entry.label));
    }
    Ok(())
}
