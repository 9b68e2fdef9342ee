use anyhow::Result;
use regex::Regex;

use crate::gui::state::{NavItemId, NavItemView, NavRegistry};
use crate::utils::colors::Colors;

pub fn run(patterns: &[String], active: Option<&str>) -> Result<()> {
    let registry = NavRegistry::default();
    let active = active.and_then(NavItemId::parse_lenient);
    let layout = registry.views(active, false);

    let main: Vec<NavItemView> = layout
        .main
        .iter()
        .copied()
        .filter(|view| matches_any_pattern(view, patterns))
        .collect();
    let logout = layout
        .logout
        .filter(|view| matches_any_pattern(view, patterns));

    if main.is_empty() && logout.is_none() {
        anyhow::bail!("No navigation entries match {}", patterns.join(", "));
    }

    let mut colors = Colors::new();
    for view in &main {
        print_line(&mut colors, view);
    }
    if let Some(view) = logout {
        if !main.is_empty() {
            let _ = colors.dim();
            let _ = colors.println("  ---");
            let _ = colors.reset();
        }
        print_line(&mut colors, &view);
    }
    let _ = colors.flush();

    Ok(())
}

fn print_line(colors: &mut Colors, view: &NavItemView) {
    if view.active {
        let _ = colors.green();
        let _ = colors.bold();
    }
    let _ = colors.print(&format_line(view));
    let _ = colors.reset();
    if view.entry.has_notification {
        let _ = colors.red();
        let _ = colors.print(" (!)");
        let _ = colors.reset();
    }
    let _ = colors.println("");
}

/// `* profile        Edit profile`, with `*` only on the active entry.
pub fn format_line(view: &NavItemView) -> String {
    let marker = if view.active { '*' } else { ' ' };
    format!("{} {:<14} {}", marker, view.id().as_str(), view.entry.label)
}

fn matches_any_pattern(view: &NavItemView, patterns: &[String]) -> bool {
    patterns.is_empty()
        || patterns.iter().any(|pattern| {
            regex_match_case_insensitive(view.id().as_str(), pattern)
                || regex_match_case_insensitive(view.entry.label, pattern)
        })
}

fn regex_match_case_insensitive(text: &str, pattern: &str) -> bool {
    match Regex::new(&format!("(?i){}", pattern)) {
        Ok(re) => re.is_match(text),
        Err(_) => text.to_lowercase().contains(&pattern.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(active: Option<NavItemId>) -> crate::gui::state::NavLayout {
        NavRegistry::default().views(active, false)
    }

    #[test]
    fn test_format_line_marks_active() {
        let layout = layout(Some(NavItemId::Profile));
        let profile = layout.find(NavItemId::Profile).unwrap();
        let history = layout.find(NavItemId::History).unwrap();
        assert_eq!(format_line(&profile), "* profile        Edit profile");
        assert_eq!(format_line(&history), "  history        History");
    }

    #[test]
    fn test_patterns_match_id_or_label() {
        let layout = layout(None);
        let reservations = layout.find(NavItemId::Reservations).unwrap();
        assert!(matches_any_pattern(&reservations, &[]));
        assert!(matches_any_pattern(&reservations, &["RESERV".to_string()]));
        assert!(matches_any_pattern(&reservations, &["booking$".to_string()]));
        assert!(!matches_any_pattern(&reservations, &["logout".to_string()]));
    }

    #[test]
    fn test_invalid_regex_falls_back_to_contains() {
        assert!(regex_match_case_insensitive("Room (A", "room (a"));
        assert!(!regex_match_case_insensitive("History", "[["));
    }

    #[test]
    fn test_run_with_unknown_active() {
        assert!(run(&[], Some("settings")).is_ok());
    }

    #[test]
    fn test_run_with_no_matches() {
        let err = run(&["zzz".to_string()], None).unwrap_err();
        assert!(err.to_string().contains("zzz"));
    }
}
