use std::str::FromStr;

use anyhow::{Context, Result};
use thiserror::Error;
use tracing::debug;

use crate::gui::state::{NavChrome, NavItemId, NavRegistry, UnknownNavItem};
use crate::utils::colors::print_transition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    PointerEnter,
    PointerLeave,
    ToggleMenu,
    /// Sidebar click.
    Select(NavItemId),
    /// Click inside the mobile dropdown.
    MenuSelect(NavItemId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown event `{0}` (expected enter, leave, toggle, select:<id> or menu:<id>)")]
    UnknownEvent(String),
    #[error(transparent)]
    UnknownItem(#[from] UnknownNavItem),
    #[error("`{0}` is not in the navigation registry")]
    NotInRegistry(NavItemId),
}

impl FromStr for UiEvent {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            Some(("select", id)) => Ok(UiEvent::Select(id.parse()?)),
            Some(("menu", id)) => Ok(UiEvent::MenuSelect(id.parse()?)),
            Some(_) => Err(ScriptError::UnknownEvent(s.to_string())),
            None => match s {
                "enter" => Ok(UiEvent::PointerEnter),
                "leave" => Ok(UiEvent::PointerLeave),
                "toggle" => Ok(UiEvent::ToggleMenu),
                _ => Err(ScriptError::UnknownEvent(s.to_string())),
            },
        }
    }
}

/// A parent shell plus one navigation instance, driven without a renderer.
#[derive(Debug, Clone)]
pub struct Simulation {
    registry: NavRegistry,
    active: Option<NavItemId>,
    chrome: NavChrome,
}

impl Simulation {
    pub fn new(registry: NavRegistry, active: Option<NavItemId>) -> Self {
        Self {
            registry,
            active,
            chrome: NavChrome::default(),
        }
    }

    pub fn active(&self) -> Option<NavItemId> {
        self.active
    }

    pub fn chrome(&self) -> NavChrome {
        self.chrome
    }

    /// Applies one event and returns the transcript lines it produced.
    pub fn apply(&mut self, event: UiEvent) -> Result<Vec<String>, ScriptError> {
        debug!(?event, "applying ui event");
        let mut lines = Vec::new();
        match event {
            UiEvent::PointerEnter => {
                self.chrome.pointer_enter();
                lines.push("sidebar: expanded".to_string());
            }
            UiEvent::PointerLeave => {
                self.chrome.pointer_leave();
                lines.push("sidebar: collapsed".to_string());
            }
            UiEvent::ToggleMenu => {
                self.chrome.toggle_mobile_menu();
                lines.push(format!("menu: {}", menu_state(&self.chrome)));
            }
            UiEvent::Select(id) => {
                let view = self
                    .registry
                    .views(self.active, !self.chrome.is_expanded())
                    .find(id)
                    .ok_or(ScriptError::NotInRegistry(id))?;
                view.activate(|id| {
                    lines.push(format!("notify: {id}"));
                    self.active = Some(id);
                });
            }
            UiEvent::MenuSelect(id) => {
                if self.registry.get(id).is_none() {
                    return Err(ScriptError::NotInRegistry(id));
                }
                let active = &mut self.active;
                self.chrome.select_in_menu(id, |id, chrome| {
                    lines.push(format!("notify: {id} (menu {})", menu_state(chrome)));
                    *active = Some(id);
                });
                lines.push(format!("menu: {}", menu_state(&self.chrome)));
            }
        }
        Ok(lines)
    }

    pub fn replay(&mut self, events: &[UiEvent]) -> Result<Vec<String>, ScriptError> {
        let mut transcript = Vec::new();
        for event in events {
            transcript.extend(self.apply(*event)?);
        }
        transcript.push(format!(
            "active: {}",
            self.registry.active_label(self.active)
        ));
        Ok(transcript)
    }
}

fn menu_state(chrome: &NavChrome) -> &'static str {
    if chrome.is_mobile_menu_open() {
        "open"
    } else {
        "closed"
    }
}

pub fn parse_events(raw: &[String]) -> Result<Vec<UiEvent>> {
    raw.iter()
        .map(|event| {
            event
                .parse::<UiEvent>()
                .with_context(|| format!("Invalid event '{}'", event))
        })
        .collect()
}

pub fn run(active: Option<&str>, raw_events: &[String]) -> Result<()> {
    let events = parse_events(raw_events)?;
    let active = active.and_then(NavItemId::parse_lenient);
    let mut simulation = Simulation::new(NavRegistry::default(), active);

    let transcript = simulation
        .replay(&events)
        .context("Simulation stopped")?;
    for line in &transcript {
        print_transition(line);
    }
    Ok(())
}
