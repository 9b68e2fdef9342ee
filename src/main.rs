#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
fn main() -> anyhow::Result<()> {
    booking_nav::run(std::env::args().collect())
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn main() {
    booking_nav::gui::launch(booking_nav::gui::config::ShellConfig::default());
}
