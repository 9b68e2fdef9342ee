pub const BG_MAIN: &str = "#0b1120";
pub const BG_SIDEBAR: &str = "#0f172a";
pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "#cbd5e1";
pub const TEXT_MUTED: &str = "#94a3b8";
pub const ACCENT: &str = "#f59e0b";
pub const ACCENT_DEEP: &str = "#ea580c";
pub const BADGE: &str = "#ef4444";
pub const BORDER: &str = "#1e293b";

pub const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

pub const SIDEBAR_COLLAPSED_WIDTH: &str = "80px";
pub const SIDEBAR_EXPANDED_WIDTH: &str = "288px";
/// Viewport width at which the sidebar replaces the top bar.
pub const DESKTOP_BREAKPOINT: &str = "1024px";

pub fn global_css() -> String {
    format!(
        r#"
        :root {{
            --bg-main: {BG_MAIN};
            --bg-sidebar: {BG_SIDEBAR};
            --text-primary: {TEXT_PRIMARY};
            --text-secondary: {TEXT_SECONDARY};
            --text-muted: {TEXT_MUTED};
            --accent: {ACCENT};
            --accent-deep: {ACCENT_DEEP};
            --badge: {BADGE};
            --border: {BORDER};
            --hover-bg: rgba(255,255,255,0.10);
            --active-bg: rgba(245,158,11,0.20);
            --active-border: rgba(245,158,11,0.30);
        }}
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: {FONT_STACK};
            color: var(--text-primary);
            background: var(--bg-main);
            -webkit-font-smoothing: antialiased;
        }}
        .app-shell {{
            min-height: 100vh;
        }}
        .main-content {{
            padding: 28px 32px;
            min-height: 100vh;
            position: relative;
            z-index: 1;
        }}
        .backdrop {{
            position: fixed;
            inset: 0;
            overflow: hidden;
            pointer-events: none;
            z-index: 0;
        }}
        .blob {{
            position: absolute;
            border-radius: 50%;
            filter: blur(64px);
            transition: transform 1s ease-out;
        }}
        .blob-near {{
            width: 384px;
            height: 384px;
            left: 10%;
            top: 20%;
            background: linear-gradient(90deg, rgba(245,158,11,0.2), rgba(249,115,22,0.2));
        }}
        .blob-far {{
            width: 288px;
            height: 288px;
            right: 10%;
            bottom: 20%;
            background: linear-gradient(90deg, rgba(234,179,8,0.15), rgba(245,158,11,0.15));
        }}
        .sidebar {{
            display: none;
            position: fixed;
            left: 0;
            top: 0;
            height: 100%;
            width: {SIDEBAR_COLLAPSED_WIDTH};
            z-index: 50;
            flex-direction: column;
            background: rgba(15,23,42,0.8);
            backdrop-filter: blur(24px);
            border-right: 1px solid rgba(255,255,255,0.1);
            transition: width 0.5s ease-out;
        }}
        .sidebar.expanded {{
            width: {SIDEBAR_EXPANDED_WIDTH};
        }}
        .sidebar-profile {{
            display: flex;
            align-items: center;
            gap: 12px;
            padding: 24px 16px;
            border-bottom: 1px solid rgba(255,255,255,0.1);
        }}
        .profile-text {{
            overflow: hidden;
            white-space: nowrap;
            opacity: 0;
            width: 0;
            transition: all 0.5s;
        }}
        .sidebar.expanded .profile-text {{
            opacity: 1;
            width: auto;
        }}
        .profile-text h3 {{ font-size: 18px; font-weight: 600; }}
        .profile-text p {{ font-size: 14px; color: var(--text-muted); }}
        .avatar {{
            width: 48px;
            height: 48px;
            flex-shrink: 0;
            border-radius: 16px;
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
            background: linear-gradient(135deg, var(--accent), var(--accent-deep));
        }}
        .sidebar-nav {{
            flex: 1;
            padding: 24px 0;
        }}
        .sidebar-logout {{
            padding: 16px 0;
            border-top: 1px solid rgba(255,255,255,0.1);
        }}
        .expand-hint {{
            position: absolute;
            right: 8px;
            top: 50%;
            opacity: 0.5;
            color: #64748b;
            animation: float 2s ease-in-out infinite;
        }}
        .slide-in {{
            opacity: 0;
            animation: slideIn 0.5s ease-out forwards;
        }}
        .nav-item {{
            position: relative;
            display: flex;
            align-items: center;
            gap: 16px;
            padding: 12px 16px;
            margin: 4px 8px;
            border-radius: 12px;
            border: 1px solid transparent;
            color: var(--text-secondary);
            cursor: pointer;
            transition: all 0.3s;
        }}
        .nav-item:hover {{
            color: var(--text-primary);
            background: var(--hover-bg);
            transform: translateX(4px);
        }}
        .nav-item.active {{
            color: var(--text-primary);
            background: var(--active-bg);
            border-color: var(--active-border);
            animation: pulse-glow 2s infinite;
        }}
        .nav-item.active .nav-icon {{
            color: var(--accent);
        }}
        .nav-icon {{
            position: relative;
            display: flex;
        }}
        .notification-dot {{
            position: absolute;
            top: -4px;
            right: -4px;
            width: 12px;
            height: 12px;
            border-radius: 50%;
            background: var(--badge);
            animation: notification-pulse 2s infinite;
        }}
        .nav-label {{
            display: flex;
            align-items: center;
            justify-content: space-between;
            flex: 1;
            overflow: hidden;
            white-space: nowrap;
            font-size: 14px;
            font-weight: 500;
            transition: all 0.3s;
        }}
        .nav-item.collapsed .nav-label {{
            opacity: 0;
            width: 0;
        }}
        .active-dot {{
            width: 8px;
            height: 8px;
            margin-left: 8px;
            border-radius: 50%;
            background: linear-gradient(90deg, #fbbf24, #fb923c);
            animation: scale-pulse 1.5s infinite;
        }}
        .topbar {{
            position: sticky;
            top: 0;
            z-index: 40;
            background: rgba(15,23,42,0.9);
            backdrop-filter: blur(24px);
            border-bottom: 1px solid rgba(255,255,255,0.1);
        }}
        .topbar-row {{
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 12px 16px;
        }}
        .topbar-title {{
            display: flex;
            align-items: center;
            gap: 12px;
        }}
        .topbar-title h1 {{ font-size: 18px; font-weight: 600; }}
        .topbar-title p {{ font-size: 12px; color: var(--text-muted); }}
        .menu-toggle {{
            border: none;
            background: none;
            color: var(--text-secondary);
            padding: 8px;
            border-radius: 12px;
            cursor: pointer;
        }}
        .toggle-icon {{
            display: flex;
            transition: transform 0.3s;
        }}
        .toggle-icon.open {{
            transform: rotate(180deg);
        }}
        .mobile-menu {{
            max-height: 0;
            opacity: 0;
            overflow: hidden;
            border-top: 1px solid rgba(255,255,255,0.1);
            transition: all 0.5s ease-out;
        }}
        .mobile-menu.open {{
            max-height: 384px;
            opacity: 1;
            padding: 16px 0;
        }}
        .mobile-logout {{
            margin-top: 16px;
            padding-top: 16px;
            border-top: 1px solid rgba(255,255,255,0.1);
        }}
        .card {{
            background: rgba(15,23,42,0.6);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 16px;
            margin-top: 16px;
        }}
        .gradient-animated {{
            background-size: 200% 200%;
            animation: gradient-shift 4s ease infinite;
        }}
        .floating-bg-1 {{ animation: float 6s ease-in-out infinite; }}
        .floating-bg-2 {{ animation: float 8s ease-in-out infinite reverse; }}
        @media (min-width: {DESKTOP_BREAKPOINT}) {{
            .sidebar {{ display: flex; }}
            .topbar {{ display: none; }}
            .main-content {{ margin-left: {SIDEBAR_COLLAPSED_WIDTH}; }}
        }}
        @keyframes pulse-glow {{
            0%, 100% {{ box-shadow: 0 0 5px rgba(245,158,11,0.3); }}
            50% {{ box-shadow: 0 0 20px rgba(245,158,11,0.6), 0 0 30px rgba(251,146,60,0.4); }}
        }}
        @keyframes notification-pulse {{
            0%, 100% {{ transform: scale(1); }}
            50% {{ transform: scale(1.2); }}
        }}
        @keyframes scale-pulse {{
            0%, 100% {{ transform: scale(1); }}
            50% {{ transform: scale(1.5); }}
        }}
        @keyframes float {{
            0%, 100% {{ translate: 0 0; }}
            50% {{ translate: 0 -10px; }}
        }}
        @keyframes gradient-shift {{
            0%, 100% {{ background-position: 0% 50%; }}
            50% {{ background-position: 100% 50%; }}
        }}
        @keyframes slideIn {{
            from {{ opacity: 0; transform: translateX(-16px); }}
            to {{ opacity: 1; transform: translateX(0); }}
        }}
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_css_contains_key_styles() {
        let css = global_css();
        assert!(css.contains(BG_MAIN));
        assert!(css.contains(BG_SIDEBAR));
        assert!(css.contains(ACCENT));
        assert!(css.contains(FONT_STACK));
    }

    #[test]
    fn test_global_css_switches_layout_at_breakpoint() {
        let css = global_css();
        assert!(css.contains(&format!("@media (min-width: {DESKTOP_BREAKPOINT})")));
        assert!(css.contains(".topbar { display: none; }"));
        assert!(css.contains(".sidebar { display: flex; }"));
    }

    #[test]
    fn test_global_css_sidebar_widths() {
        let css = global_css();
        assert!(css.contains(".sidebar.expanded"));
        assert!(css.contains(SIDEBAR_COLLAPSED_WIDTH));
        assert!(css.contains(SIDEBAR_EXPANDED_WIDTH));
    }

    #[test]
    fn test_global_css_contains_item_states() {
        let css = global_css();
        assert!(css.contains(".nav-item.active"));
        assert!(css.contains(".nav-item.collapsed .nav-label"));
        assert!(css.contains(".notification-dot"));
        assert!(css.contains(".mobile-menu.open"));
    }

    #[test]
    fn test_global_css_contains_keyframes() {
        let css = global_css();
        for name in [
            "pulse-glow",
            "notification-pulse",
            "scale-pulse",
            "float",
            "gradient-shift",
            "slideIn",
        ] {
            assert!(
                css.contains(&format!("@keyframes {name}")),
                "missing keyframes {name}"
            );
        }
    }

    #[test]
    fn test_constants_are_valid_hex_colors() {
        let colors = [
            BG_MAIN,
            BG_SIDEBAR,
            TEXT_PRIMARY,
            TEXT_SECONDARY,
            TEXT_MUTED,
            ACCENT,
            ACCENT_DEEP,
            BADGE,
            BORDER,
        ];
        for c in colors {
            assert!(c.starts_with('#'), "Color {c} should start with #");
            assert!(c.len() == 7, "Color {c} should be 7 chars (#rrggbb)");
        }
    }
}
