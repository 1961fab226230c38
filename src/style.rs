//! Page stylesheet assembly.
//!
//! The static rules live in `assets/style.css`; the color variables are
//! generated from the theme palettes so the CSS and the Rust side can never
//! disagree about a color.

use crate::theme;

/// The complete stylesheet injected into the document head at startup.
pub fn stylesheet() -> String {
    format!(
        "{}\n{}",
        theme::css_variables(),
        include_str!("../assets/style.css")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_has_variables_and_rules() {
        let css = stylesheet();
        assert!(css.contains(":root {"));
        assert!(css.contains(".dark {"));
        assert!(css.contains(".cursor-dot"));
        assert!(css.contains(".theme-toggle"));
        assert!(css.contains("@keyframes fade-up"));
    }
}
