use std::fmt;
use std::str::FromStr;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use thiserror::Error;
use tracing::debug;

use super::icons::Icon;

/// Title shown in the top bar when the active item is not in the registry.
pub const FALLBACK_LABEL: &str = "Menu";
pub const DEFAULT_USER_NAME: &str = "Guest";
pub const DEFAULT_USER_ROLE: &str = "User";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NavItemId {
    Reservations,
    Profile,
    History,
    Notifications,
    Logout,
}

impl NavItemId {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavItemId::Reservations => "reservations",
            NavItemId::Profile => "profile",
            NavItemId::History => "history",
            NavItemId::Notifications => "notifications",
            NavItemId::Logout => "logout",
        }
    }

    pub fn all() -> &'static [NavItemId] {
        &[
            NavItemId::Reservations,
            NavItemId::Profile,
            NavItemId::History,
            NavItemId::Notifications,
            NavItemId::Logout,
        ]
    }

    /// Parses an id coming from outside the process. Unknown values become
    /// `None`, which renders as "nothing active".
    pub fn parse_lenient(value: &str) -> Option<NavItemId> {
        match value.parse() {
            Ok(id) => Some(id),
            Err(err) => {
                debug!(%err, "ignoring active item");
                None
            }
        }
    }
}

impl fmt::Display for NavItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown navigation item `{0}`")]
pub struct UnknownNavItem(pub String);

impl FromStr for NavItemId {
    type Err = UnknownNavItem;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        NavItemId::all()
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownNavItem(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub id: NavItemId,
    pub label: &'static str,
    pub icon: Icon,
    pub has_notification: bool,
}

pub const NAV_ITEMS: &[NavEntry] = &[
    NavEntry {
        id: NavItemId::Reservations,
        label: "Facilities booking",
        icon: Icon::Calendar,
        has_notification: false,
    },
    NavEntry {
        id: NavItemId::Profile,
        label: "Edit profile",
        icon: Icon::Edit,
        has_notification: false,
    },
    NavEntry {
        id: NavItemId::History,
        label: "History",
        icon: Icon::Clock,
        has_notification: false,
    },
    NavEntry {
        id: NavItemId::Notifications,
        label: "Notifications",
        icon: Icon::Bell,
        has_notification: true,
    },
    NavEntry {
        id: NavItemId::Logout,
        label: "Logout",
        icon: Icon::LogOut,
        has_notification: false,
    },
];

/// Ordered, immutable set of navigation entries.
///
/// `logout` shares the identity space of the other entries but is rendered
/// in its own slot after them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavRegistry {
    entries: &'static [NavEntry],
}

impl Default for NavRegistry {
    fn default() -> Self {
        Self::new(NAV_ITEMS)
    }
}

impl NavRegistry {
    pub const fn new(entries: &'static [NavEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [NavEntry] {
        self.entries
    }

    pub fn get(&self, id: NavItemId) -> Option<&'static NavEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn active_label(&self, active: Option<NavItemId>) -> &'static str {
        active
            .and_then(|id| self.get(id))
            .map(|entry| entry.label)
            .unwrap_or(FALLBACK_LABEL)
    }

    pub fn main_entries(&self) -> impl Iterator<Item = &'static NavEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.id != NavItemId::Logout)
    }

    pub fn logout_entry(&self) -> Option<&'static NavEntry> {
        self.get(NavItemId::Logout)
    }

    pub fn views(&self, active: Option<NavItemId>, collapsed: bool) -> NavLayout {
        let view = |entry: &'static NavEntry| NavItemView {
            entry,
            active: active == Some(entry.id),
            collapsed,
        };
        NavLayout {
            main: self.main_entries().map(view).collect(),
            logout: self.logout_entry().map(view),
        }
    }

    /// Fuzzy lookup over ids and labels, best match first.
    pub fn resolve(&self, pattern: &str) -> Vec<&'static NavEntry> {
        let matcher = SkimMatcherV2::default();
        let mut matches: Vec<(i64, &'static NavEntry)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let by_id = matcher.fuzzy_match(entry.id.as_str(), pattern);
                let by_label = matcher.fuzzy_match(entry.label, pattern);
                by_id.max(by_label).map(|score| (score, entry))
            })
            .collect();

        matches.sort_by(|a, b| b.0.cmp(&a.0));
        matches.into_iter().map(|(_, entry)| entry).collect()
    }
}

/// Render flags for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItemView {
    pub entry: &'static NavEntry,
    pub active: bool,
    pub collapsed: bool,
}

impl NavItemView {
    pub fn id(&self) -> NavItemId {
        self.entry.id
    }

    /// Desktop activation: the caller is told, nothing else changes.
    pub fn activate(&self, notify: impl FnOnce(NavItemId)) {
        debug!(item = %self.entry.id, "nav item activated");
        notify(self.entry.id)
    }

    pub fn class(&self) -> String {
        let mut class = String::from("nav-item");
        if self.active {
            class.push_str(" active");
        }
        if self.collapsed {
            class.push_str(" collapsed");
        }
        class
    }
}

impl fmt::Display for NavItemView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.entry.label)?;
        if self.entry.has_notification {
            f.write_str(" (!)")?;
        }
        if self.active {
            f.write_str(" [active]")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLayout {
    pub main: Vec<NavItemView>,
    pub logout: Option<NavItemView>,
}

impl NavLayout {
    pub fn iter(&self) -> impl Iterator<Item = &NavItemView> {
        self.main.iter().chain(self.logout.iter())
    }

    pub fn find(&self, id: NavItemId) -> Option<NavItemView> {
        self.iter().find(|view| view.id() == id).copied()
    }
}

/// Transient UI flags. Reset on every mount, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavChrome {
    expanded: bool,
    mobile_menu_open: bool,
}

impl NavChrome {
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn pointer_enter(&mut self) {
        self.expanded = true;
    }

    pub fn pointer_leave(&mut self) {
        self.expanded = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        debug!(open = self.mobile_menu_open, "mobile menu toggled");
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    /// Selection from the mobile dropdown. `notify` runs first and sees the
    /// menu as it was; the menu is closed afterwards.
    pub fn select_in_menu(&mut self, id: NavItemId, notify: impl FnOnce(NavItemId, &NavChrome)) {
        debug!(item = %id, "nav item selected from mobile menu");
        notify(id, self);
        self.close_mobile_menu();
    }
}

/// First word of the user name for the mobile greeting.
pub fn welcome_name(user_name: &str) -> &str {
    user_name
        .split_whitespace()
        .next()
        .unwrap_or("User")
}
