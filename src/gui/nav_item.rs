use dioxus::prelude::*;

use super::icons::Icon;
use super::state::NavItemView;

#[component]
pub fn IconSvg(icon: Icon, #[props(default = 20)] size: u32) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "data-icon": icon.name(),
            for d in icon.paths() {
                path { d: "{d}" }
            }
        }
    }
}

/// One navigation row. Click handling belongs to the wrapper so the same row
/// serves both the sidebar and the mobile menu.
#[component]
pub fn NavItem(view: NavItemView) -> Element {
    let entry = view.entry;
    let class = view.class();

    rsx! {
        div { class: "{class}", "data-item": entry.id.as_str(),
            div { class: "nav-icon",
                IconSvg { icon: entry.icon }
                if entry.has_notification {
                    span { class: "notification-dot" }
                }
            }
            div { class: "nav-label",
                span { "{entry.label}" }
                if view.active {
                    span { class: "active-dot" }
                }
            }
        }
    }
}
