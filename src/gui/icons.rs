/// Stroke icons drawn on a 24x24 grid, in the lucide style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Calendar,
    Edit,
    Clock,
    Bell,
    LogOut,
    User,
    Menu,
    Close,
    Zap,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Calendar => "calendar",
            Icon::Edit => "edit",
            Icon::Clock => "clock",
            Icon::Bell => "bell",
            Icon::LogOut => "log-out",
            Icon::User => "user",
            Icon::Menu => "menu",
            Icon::Close => "x",
            Icon::Zap => "zap",
        }
    }

    /// SVG path data, one entry per `<path>` element.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Icon::Edit => &[
                "M12 3H5a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7",
                "M18.375 2.625a1 1 0 0 1 3 3l-9.013 9.014a2 2 0 0 1-.853.505l-2.873.84a.5.5 0 0 1-.62-.62l.84-2.873a2 2 0 0 1 .506-.852z",
            ],
            Icon::Clock => &[
                "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0z",
                "M12 6v6l4 2",
            ],
            Icon::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
            Icon::LogOut => &[
                "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4",
                "m16 17 5-5-5-5",
                "M21 12H9",
            ],
            Icon::User => &[
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
                "M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }

    pub fn all() -> &'static [Icon] {
        &[
            Icon::Calendar,
            Icon::Edit,
            Icon::Clock,
            Icon::Bell,
            Icon::LogOut,
            Icon::User,
            Icon::Menu,
            Icon::Close,
            Icon::Zap,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_icon_has_paths() {
        for icon in Icon::all() {
            assert!(!icon.paths().is_empty(), "{} has no paths", icon.name());
            for d in icon.paths() {
                assert!(
                    d.starts_with('M') || d.starts_with('m'),
                    "{} path should start with a moveto: {d}",
                    icon.name()
                );
            }
        }
    }

    #[test]
    fn test_icon_names_are_unique() {
        let names: HashSet<&str> = Icon::all().iter().map(|i| i.name()).collect();
        assert_eq!(names.len(), Icon::all().len());
    }

    #[test]
    fn test_menu_and_close_differ() {
        assert_ne!(Icon::Menu.paths(), Icon::Close.paths());
        assert_eq!(Icon::Close.name(), "x");
    }
}
