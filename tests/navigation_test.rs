use std::cell::RefCell;
use std::rc::Rc;

use booking_nav::commands::simulate::{Simulation, UiEvent};
use booking_nav::gui::pointer::{PointerBus, PointerPosition};
use booking_nav::gui::state::{NavChrome, NavItemId, NavRegistry, FALLBACK_LABEL};

#[test]
fn test_profile_active_end_to_end() {
    let registry = NavRegistry::default();
    let ids: Vec<NavItemId> = registry.entries().iter().map(|e| e.id).collect();
    assert_eq!(
        ids,
        vec![
            NavItemId::Reservations,
            NavItemId::Profile,
            NavItemId::History,
            NavItemId::Notifications,
            NavItemId::Logout,
        ]
    );

    let layout = registry.views(Some(NavItemId::Profile), true);
    for view in layout.iter() {
        assert_eq!(view.active, view.id() == NavItemId::Profile);
    }

    let selected = RefCell::new(Vec::new());
    let profile = layout.find(NavItemId::Profile).unwrap();
    profile.activate(|id| selected.borrow_mut().push(id));
    assert_eq!(*selected.borrow(), vec![NavItemId::Profile]);
    assert_eq!(registry.active_label(Some(NavItemId::Profile)), "Edit profile");
}

#[test]
fn test_parent_owns_active_item() {
    let registry = NavRegistry::default();
    let mut active = Some(NavItemId::Reservations);
    let mut chrome = NavChrome::default();

    chrome.toggle_mobile_menu();
    chrome.select_in_menu(NavItemId::History, |id, _| active = Some(id));

    assert_eq!(registry.active_label(active), "History");
    assert!(!chrome.is_mobile_menu_open());
}

#[test]
fn test_unknown_active_degrades() {
    let active = NavItemId::parse_lenient("settings");
    let registry = NavRegistry::default();
    assert_eq!(registry.active_label(active), FALLBACK_LABEL);
    assert!(registry.views(active, false).iter().all(|v| !v.active));
}

#[test]
fn test_session_script() {
    let mut sim = Simulation::new(NavRegistry::default(), Some(NavItemId::Reservations));
    let transcript = sim
        .replay(&[
            UiEvent::PointerEnter,
            UiEvent::Select(NavItemId::Notifications),
            UiEvent::PointerLeave,
            UiEvent::ToggleMenu,
            UiEvent::ToggleMenu,
            UiEvent::ToggleMenu,
            UiEvent::MenuSelect(NavItemId::Logout),
        ])
        .unwrap();

    assert_eq!(transcript.last().map(String::as_str), Some("active: Logout"));
    assert_eq!(sim.active(), Some(NavItemId::Logout));
    assert_eq!(sim.chrome(), NavChrome::default());
}

#[test]
fn test_pointer_listener_released_on_teardown() {
    let bus = PointerBus::default();
    let seen = Rc::new(RefCell::new(Vec::new()));

    {
        let sink = seen.clone();
        let _mounted = bus.subscribe(move |pos| sink.borrow_mut().push(pos));
        bus.dispatch(PointerPosition::new(3.0, 4.0));
    }
    bus.dispatch(PointerPosition::new(5.0, 6.0));

    assert_eq!(*seen.borrow(), vec![PointerPosition::new(3.0, 4.0)]);
    assert_eq!(bus.listener_count(), 0);
}
