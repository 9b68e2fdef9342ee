use dioxus::prelude::*;

use super::state::{NavItemId, NavRegistry};

/// Placeholder content owned by the shell for whichever entry is active.
#[component]
pub fn EntryPage(#[props(!optional)] active_item: Option<NavItemId>) -> Element {
    let title = NavRegistry::default().active_label(active_item);
    let detail = match active_item {
        Some(NavItemId::Reservations) => "Book courts, rooms and equipment.",
        Some(NavItemId::Profile) => "Update your contact details.",
        Some(NavItemId::History) => "Past and upcoming bookings.",
        Some(NavItemId::Notifications) => "Messages from the facilities team.",
        Some(NavItemId::Logout) => "You have been signed out.",
        None => "Pick a section from the navigation.",
    };

    rsx! {
        div {
            h2 { "{title}" }
            div { class: "card", "{detail}" }
        }
    }
}
