use crate::types::ThemeMode;

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_icon: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_icon: MOON_ICON,
            toggle_label: "Switch to light mode",
        },
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_icon: SUN_ICON,
            toggle_label: "Switch to dark mode",
        },
    }
}

pub const MOON_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path></svg>"#;

pub const SUN_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><circle cx="12" cy="12" r="5"></circle><line x1="12" y1="1" x2="12" y2="3"></line><line x1="12" y1="21" x2="12" y2="23"></line><line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line><line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line><line x1="1" y1="12" x2="3" y2="12"></line><line x1="21" y1="12" x2="23" y2="12"></line><line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line><line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line></svg>"#;

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #f4f6fb;
    --color-bg-panel: #ffffff;
    --color-text-primary: #1d2433;
    --color-text-muted: #5c667a;
    --color-border: #dde2ec;
    --color-bubble-user-bg: #4f46e5;
    --color-bubble-user-text: #ffffff;
    --color-bubble-bot-bg: #eef1f7;
    --color-bubble-bot-text: #1d2433;
    --color-timestamp: #8a93a6;
    --color-input-bg: #ffffff;
    --color-dot: #9aa3b5;
}
"#;

const DARK_THEME: &str = r#"
body.dark-mode,
:root {
    --color-bg-primary: #0f1218;
    --color-bg-panel: #171b24;
    --color-text-primary: #e8ebf2;
    --color-text-muted: #9aa3b5;
    --color-border: #2a3040;
    --color-bubble-user-bg: #6366f1;
    --color-bubble-user-text: #ffffff;
    --color-bubble-bot-bg: #232938;
    --color-bubble-bot-text: #e8ebf2;
    --color-timestamp: #7d869a;
    --color-input-bg: #0f1218;
    --color-dot: #7d869a;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_follows_theme() {
        assert_eq!(theme_definition(ThemeMode::Dark).toggle_icon, MOON_ICON);
        assert_eq!(theme_definition(ThemeMode::Light).toggle_icon, SUN_ICON);
    }

    #[test]
    fn test_dark_theme_targets_body_class() {
        assert!(theme_definition(ThemeMode::Dark).css.contains("body.dark-mode"));
    }
}
