//! Theme system for the portfolio page.
//!
//! Provides dark and light palettes, plus the preference controller that
//! resolves the initial choice, persists changes, and drives the document
//! style flag.

use crate::constants::THEME_STORAGE_KEY;
use crate::storage::PreferenceStore;

/// Theme choice - dark or light mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    /// The persisted string form, written verbatim to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
        }
    }

    /// Parse a persisted value. Unknown strings are treated as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeChoice::Light),
            "dark" => Some(ThemeChoice::Dark),
            _ => None,
        }
    }

    /// The opposite choice.
    pub fn flipped(&self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }

    /// Whether the document-level `dark` style flag should be set.
    pub fn is_dark(&self) -> bool {
        *self == ThemeChoice::Dark
    }
}

/// Resolve the initial theme choice.
///
/// Precedence: explicit persisted choice, then the OS-level prefers-dark
/// signal, then light. Absent or unreadable inputs are "no preference",
/// never failures.
pub fn resolve_initial(stored: Option<&str>, prefers_dark: Option<bool>) -> ThemeChoice {
    if let Some(choice) = stored.and_then(ThemeChoice::parse) {
        return choice;
    }
    if prefers_dark == Some(true) {
        return ThemeChoice::Dark;
    }
    ThemeChoice::Light
}

/// The resolved theme preference for one page view.
///
/// Owns the persisted store; the in-memory choice stays authoritative even
/// when persistence fails.
pub struct ThemePreference {
    current: ThemeChoice,
    store: Box<dyn PreferenceStore>,
}

impl ThemePreference {
    /// Resolve the initial choice from the store and the OS signal.
    pub fn resolve(store: Box<dyn PreferenceStore>, prefers_dark: Option<bool>) -> Self {
        let stored = store.get(THEME_STORAGE_KEY);
        let current = resolve_initial(stored.as_deref(), prefers_dark);
        log::info!(
            "resolved initial theme: {} (stored={:?}, prefers_dark={:?})",
            current.as_str(),
            stored,
            prefers_dark
        );
        Self { current, store }
    }

    /// The current choice.
    pub fn current(&self) -> ThemeChoice {
        self.current
    }

    /// Flip the choice and persist it. Persistence failure is swallowed with
    /// a warning; the new in-memory value is returned either way.
    pub fn toggle(&mut self) -> ThemeChoice {
        self.current = self.current.flipped();
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, self.current.as_str()) {
            log::warn!("could not persist theme choice: {}", e);
        }
        self.current
    }
}

/// An sRGB color used in the theme palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#7c3aed`.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Page palette for one theme choice.
#[derive(Debug, Clone)]
pub struct Theme {
    pub choice: ThemeChoice,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            choice: ThemeChoice::Light,
        }
    }

    pub fn dark() -> Self {
        Self {
            choice: ThemeChoice::Dark,
        }
    }

    /// Page background.
    pub fn background_color(&self) -> Color {
        match self.choice {
            ThemeChoice::Light => Color::rgb(0xf9, 0xfa, 0xfb),
            ThemeChoice::Dark => Color::rgb(0x11, 0x18, 0x27),
        }
    }

    /// Card and header surfaces.
    pub fn surface_color(&self) -> Color {
        match self.choice {
            ThemeChoice::Light => Color::rgb(0xff, 0xff, 0xff),
            ThemeChoice::Dark => Color::rgb(0x1f, 0x29, 0x37),
        }
    }

    /// Primary text.
    pub fn text_color(&self) -> Color {
        match self.choice {
            ThemeChoice::Light => Color::rgb(0x11, 0x18, 0x27),
            ThemeChoice::Dark => Color::rgb(0xf9, 0xfa, 0xfb),
        }
    }

    /// Less prominent text.
    pub fn secondary_text_color(&self) -> Color {
        match self.choice {
            ThemeChoice::Light => Color::rgb(0x6b, 0x72, 0x80),
            ThemeChoice::Dark => Color::rgb(0x9c, 0xa3, 0xaf),
        }
    }

    /// Accent color (same for both themes).
    pub fn accent_color(&self) -> Color {
        Color::rgb(0x7c, 0x3a, 0xed)
    }

    /// Card and divider borders.
    pub fn border_color(&self) -> Color {
        match self.choice {
            ThemeChoice::Light => Color::rgb(0xe5, 0xe7, 0xeb),
            ThemeChoice::Dark => Color::rgb(0x37, 0x41, 0x51),
        }
    }

    /// The palette as a CSS custom-property block for `selector`.
    pub fn css_block(&self, selector: &str) -> String {
        format!(
            "{} {{\n  --background: {};\n  --surface: {};\n  --text: {};\n  --text-secondary: {};\n  --accent: {};\n  --border: {};\n}}\n",
            selector,
            self.background_color().to_css(),
            self.surface_color().to_css(),
            self.text_color().to_css(),
            self.secondary_text_color().to_css(),
            self.accent_color().to_css(),
            self.border_color().to_css(),
        )
    }
}

/// Both palettes as CSS, light on `:root` and dark behind the `.dark` flag.
pub fn css_variables() -> String {
    format!(
        "{}{}",
        Theme::light().css_block(":root"),
        Theme::dark().css_block(".dark")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_resolve_persisted_wins_over_os() {
        assert_eq!(resolve_initial(Some("dark"), Some(false)), ThemeChoice::Dark);
        assert_eq!(resolve_initial(Some("light"), Some(true)), ThemeChoice::Light);
    }

    #[test]
    fn test_resolve_falls_back_to_os_signal() {
        assert_eq!(resolve_initial(None, Some(true)), ThemeChoice::Dark);
        assert_eq!(resolve_initial(None, Some(false)), ThemeChoice::Light);
    }

    #[test]
    fn test_resolve_defaults_to_light() {
        assert_eq!(resolve_initial(None, None), ThemeChoice::Light);
    }

    #[test]
    fn test_resolve_ignores_unknown_persisted_value() {
        assert_eq!(resolve_initial(Some("sepia"), Some(true)), ThemeChoice::Dark);
        assert_eq!(resolve_initial(Some("sepia"), None), ThemeChoice::Light);
    }

    #[test]
    fn test_toggle_is_involution() {
        let store = MemoryStore::with_value(THEME_STORAGE_KEY, "dark");
        let mut pref = ThemePreference::resolve(Box::new(store), None);
        let before = pref.current();

        pref.toggle();
        assert_eq!(pref.current(), before.flipped());
        pref.toggle();
        assert_eq!(pref.current(), before);
    }

    #[test]
    fn test_toggle_persists_choice() {
        let mut pref = ThemePreference::resolve(Box::new(MemoryStore::new()), None);
        assert_eq!(pref.current(), ThemeChoice::Light);

        pref.toggle();
        assert_eq!(
            pref.store.get(THEME_STORAGE_KEY).as_deref(),
            Some("dark")
        );

        pref.toggle();
        assert_eq!(
            pref.store.get(THEME_STORAGE_KEY).as_deref(),
            Some("light")
        );
    }

    #[test]
    fn test_toggle_survives_storage_failure() {
        let mut pref = ThemePreference::resolve(Box::new(MemoryStore::failing()), None);
        // Write fails silently; the in-memory value still flips.
        assert_eq!(pref.toggle(), ThemeChoice::Dark);
        assert_eq!(pref.current(), ThemeChoice::Dark);
    }

    #[test]
    fn test_color_css_form() {
        assert_eq!(Color::rgb(0x7c, 0x3a, 0xed).to_css(), "#7c3aed");
    }

    #[test]
    fn test_css_variables_cover_both_themes() {
        let css = css_variables();
        assert!(css.contains(":root {"));
        assert!(css.contains(".dark {"));
        assert!(css.contains("--accent: #7c3aed;"));
    }
}
