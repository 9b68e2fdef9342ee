use dioxus::prelude::*;
use tracing::debug;

use super::backdrop::Backdrop;
use super::icons::Icon;
use super::nav_item::{IconSvg, NavItem};
use super::state::{
    welcome_name, NavChrome, NavItemId, NavRegistry, DEFAULT_USER_NAME, DEFAULT_USER_ROLE,
};

/// Responsive navigation: a hover-expanding sidebar on wide viewports and a
/// top bar with a dropdown on narrow ones.
///
/// Controlled: `active_item` comes from the parent and every selection is
/// reported through `on_select_item`. Only hover and dropdown state live
/// here.
#[component]
pub fn Navbar(
    #[props(!optional)] active_item: Option<NavItemId>,
    on_select_item: EventHandler<NavItemId>,
    #[props(into, default = DEFAULT_USER_NAME.to_string())] user_name: String,
    #[props(into, default = DEFAULT_USER_ROLE.to_string())] user_role: String,
    #[props(default)] registry: NavRegistry,
) -> Element {
    let mut chrome = use_signal(NavChrome::default);
    let state = chrome();

    let desktop = registry.views(active_item, !state.is_expanded());
    let mobile = registry.views(active_item, false);

    let sidebar_class = if state.is_expanded() {
        "sidebar expanded"
    } else {
        "sidebar"
    };
    let menu_open = state.is_mobile_menu_open();
    let menu_class = if menu_open {
        "mobile-menu open"
    } else {
        "mobile-menu"
    };
    let toggle_class = if menu_open {
        "toggle-icon open"
    } else {
        "toggle-icon"
    };
    let toggle_icon = if menu_open { Icon::Close } else { Icon::Menu };
    let title = registry.active_label(active_item);
    let first_name = welcome_name(&user_name).to_string();

    rsx! {
        Backdrop {}

        aside {
            class: "{sidebar_class}",
            onmouseenter: move |_| chrome.write().pointer_enter(),
            onmouseleave: move |_| chrome.write().pointer_leave(),
            div { class: "sidebar-profile",
                div { class: "avatar gradient-animated",
                    IconSvg { icon: Icon::User, size: 24 }
                }
                div { class: "profile-text",
                    h3 { title: "{user_name}", "{user_name}" }
                    p { title: "{user_role}", "{user_role}" }
                }
            }
            nav { class: "sidebar-nav",
                for (index, view) in desktop.main.iter().copied().enumerate() {
                    {
                        let delay = format!("animation-delay: {:.2}s;", index as f32 * 0.08);
                        rsx! {
                            div {
                                key: "{view.id()}",
                                class: "slide-in",
                                style: "{delay}",
                                onclick: move |_| view.activate(|id| on_select_item.call(id)),
                                NavItem { view }
                            }
                        }
                    }
                }
            }
            {desktop.logout.map(move |view| rsx! {
                div {
                    class: "sidebar-logout",
                    onclick: move |_| view.activate(|id| on_select_item.call(id)),
                    NavItem { view }
                }
            })}
            if !state.is_expanded() {
                div { class: "expand-hint",
                    IconSvg { icon: Icon::Zap, size: 16 }
                }
            }
        }

        header { class: "topbar",
            div { class: "topbar-row",
                div { class: "topbar-title",
                    div { class: "avatar gradient-animated",
                        IconSvg { icon: Icon::User }
                    }
                    div {
                        h1 { "{title}" }
                        p { "Welcome, {first_name}" }
                    }
                }
                button {
                    class: "menu-toggle",
                    onclick: move |_| chrome.write().toggle_mobile_menu(),
                    div { class: "{toggle_class}",
                        IconSvg { icon: toggle_icon, size: 24 }
                    }
                }
            }
            div { class: "{menu_class}",
                for view in mobile.main.iter().copied() {
                    div {
                        key: "{view.id()}",
                        onclick: move |_| select_from_menu(chrome, on_select_item, view.id()),
                        NavItem { view }
                    }
                }
                {mobile.logout.map(move |view| rsx! {
                    div {
                        class: "mobile-logout",
                        onclick: move |_| select_from_menu(chrome, on_select_item, view.id()),
                        NavItem { view }
                    }
                })}
            }
        }
    }
}

/// Tells the parent first, then closes the dropdown.
fn select_from_menu(
    mut chrome: Signal<NavChrome>,
    on_select_item: EventHandler<NavItemId>,
    id: NavItemId,
) {
    let mut next = chrome();
    next.select_in_menu(id, |id, _| on_select_item.call(id));
    chrome.set(next);
    debug!(item = %id, "mobile menu closed after selection");
}
