#[cfg(any(feature = "gui", feature = "web"))]
mod backdrop;
#[cfg(any(feature = "gui", feature = "web"))]
mod nav_item;
#[cfg(any(feature = "gui", feature = "web"))]
pub mod navbar;
#[cfg(any(feature = "gui", feature = "web"))]
mod pages;
pub mod config;
pub mod icons;
pub mod pointer;
pub mod state;
pub mod theme;

#[cfg(any(feature = "gui", feature = "web"))]
use dioxus::prelude::*;

#[cfg(any(feature = "gui", feature = "web"))]
use config::ShellConfig;
#[cfg(any(feature = "gui", feature = "web"))]
use pointer::{PointerBus, PointerPosition};

#[cfg(any(feature = "gui", feature = "web"))]
pub fn launch(config: ShellConfig) {
    #[cfg(not(target_arch = "wasm32"))]
    ensure_public_dir();
    tracing::info!(user = %config.user_name, active = ?config.initial_active, "launching navigation shell");
    dioxus::LaunchBuilder::new().with_context(config).launch(app);
}

#[cfg(all(any(feature = "gui", feature = "web"), not(target_arch = "wasm32")))]
fn ensure_public_dir() {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()));
    if let Some(dir) = exe_dir {
        let public = dir.join("public");
        if !public.exists() {
            let _ = std::fs::create_dir_all(&public);
            let _ = std::fs::write(
                public.join("index.html"),
                "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>booking-nav</title></head><body><div id=\"main\"></div></body></html>",
            );
        }
    }
}

/// Stand-in for the application shell: owns the active item and feeds
/// pointer moves to the navigation backdrop.
#[cfg(any(feature = "gui", feature = "web"))]
fn app() -> Element {
    let config = use_hook(|| try_consume_context::<ShellConfig>().unwrap_or_default());
    let mut active_item = use_signal(|| config.initial_active);
    let pointer = use_context_provider(PointerBus::default);

    rsx! {
        style { "{theme::global_css()}" }
        div {
            class: "app-shell",
            onmousemove: move |evt: MouseEvent| {
                let point = evt.client_coordinates();
                pointer.dispatch(PointerPosition::new(point.x, point.y));
            },
            navbar::Navbar {
                active_item: active_item(),
                on_select_item: move |id| {
                    tracing::info!(item = %id, "navigation selected");
                    active_item.set(Some(id));
                },
                user_name: config.user_name.clone(),
                user_role: config.user_role.clone(),
            }
            main { class: "main-content",
                pages::EntryPage { active_item: active_item() }
            }
        }
    }
}
