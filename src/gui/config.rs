use super::state::{NavItemId, DEFAULT_USER_NAME, DEFAULT_USER_ROLE};

/// Settings the demo shell starts from. Built from CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub user_name: String,
    pub user_role: String,
    pub initial_active: Option<NavItemId>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            user_role: DEFAULT_USER_ROLE.to_string(),
            initial_active: Some(NavItemId::Reservations),
        }
    }
}

impl ShellConfig {
    pub fn from_args(
        user_name: Option<&str>,
        user_role: Option<&str>,
        active: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            user_name: non_blank(user_name).unwrap_or(defaults.user_name),
            user_role: non_blank(user_role).unwrap_or(defaults.user_role),
            initial_active: match active {
                Some(raw) => NavItemId::parse_lenient(raw),
                None => defaults.initial_active,
            },
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ShellConfig::default();
        assert_eq!(config.user_name, "Guest");
        assert_eq!(config.user_role, "User");
        assert_eq!(config.initial_active, Some(NavItemId::Reservations));
    }

    #[test]
    fn test_from_args_overrides() {
        let config = ShellConfig::from_args(Some("Ada Lovelace"), Some("Member"), Some("history"));
        assert_eq!(config.user_name, "Ada Lovelace");
        assert_eq!(config.user_role, "Member");
        assert_eq!(config.initial_active, Some(NavItemId::History));
    }

    #[test]
    fn test_blank_names_fall_back() {
        let config = ShellConfig::from_args(Some("  "), None, None);
        assert_eq!(config, ShellConfig::default());
    }

    #[test]
    fn test_unknown_active_means_nothing_active() {
        let config = ShellConfig::from_args(None, None, Some("settings"));
        assert_eq!(config.initial_active, None);
    }
}
