use anyhow::Result;

use crate::gui::config::ShellConfig;

pub fn run(user_name: Option<&str>, user_role: Option<&str>, active: Option<&str>) -> Result<()> {
    let config = ShellConfig::from_args(user_name, user_role, active);
    launch(config)
}

#[cfg(any(feature = "gui", feature = "web"))]
fn launch(config: ShellConfig) -> Result<()> {
    crate::gui::launch(config);
    Ok(())
}

#[cfg(not(any(feature = "gui", feature = "web")))]
fn launch(_config: ShellConfig) -> Result<()> {
    anyhow::bail!("booking-nav was built without the `gui` feature; rebuild with --features gui")
}
