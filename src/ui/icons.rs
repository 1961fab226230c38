//! Inline SVG icons.
//!
//! Stroke-style icon paths rendered verbatim into the tree; `currentColor`
//! keeps them following the surrounding text color.

use crate::model::SkillIcon;

/// Wrap icon paths in a standard 24x24 stroke-icon svg element.
pub fn svg(paths: &str, size: u32) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
         viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" \
         stroke-linecap=\"round\" stroke-linejoin=\"round\">{paths}</svg>"
    )
}

pub const ARROW_RIGHT: &str = "<path d=\"M5 12h14\"/><path d=\"m12 5 7 7-7 7\"/>";

pub const ARROW_DOWN: &str = "<path d=\"M12 5v14\"/><path d=\"m19 12-7 7-7-7\"/>";

pub const EXTERNAL_LINK: &str = "<path d=\"M15 3h6v6\"/><path d=\"M10 14 21 3\"/>\
    <path d=\"M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6\"/>";

pub const GITHUB: &str = "<path d=\"M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5\
    .08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0\
    C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5\
    -.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4\"/>\
    <path d=\"M9 18c-4.51 2-5-2-7-2\"/>";

pub const MAIL: &str = "<rect width=\"20\" height=\"16\" x=\"2\" y=\"4\" rx=\"2\"/>\
    <path d=\"m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7\"/>";

pub const PHONE: &str = "<path d=\"M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1\
    -8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3\
    a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91\
    a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7\
    A2 2 0 0 1 22 16.92z\"/>";

pub const SUN: &str = "<circle cx=\"12\" cy=\"12\" r=\"4\"/><path d=\"M12 2v2\"/>\
    <path d=\"M12 20v2\"/><path d=\"m4.93 4.93 1.41 1.41\"/>\
    <path d=\"m17.66 17.66 1.41 1.41\"/><path d=\"M2 12h2\"/><path d=\"M20 12h2\"/>\
    <path d=\"m6.34 17.66-1.41 1.41\"/><path d=\"m19.07 4.93-1.41 1.41\"/>";

pub const MOON: &str = "<path d=\"M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z\"/>";

pub const GRADUATION_CAP: &str = "<path d=\"M22 10v6M2 10l10-5 10 5-10 5z\"/>\
    <path d=\"M6 12v5c3 3 9 3 12 0v-5\"/>";

const CODE: &str = "<polyline points=\"16 18 22 12 16 6\"/>\
    <polyline points=\"8 6 2 12 8 18\"/>";

const SERVER: &str = "<rect width=\"20\" height=\"8\" x=\"2\" y=\"2\" rx=\"2\" ry=\"2\"/>\
    <rect width=\"20\" height=\"8\" x=\"2\" y=\"14\" rx=\"2\" ry=\"2\"/>\
    <line x1=\"6\" x2=\"6.01\" y1=\"6\" y2=\"6\"/><line x1=\"6\" x2=\"6.01\" y1=\"18\" y2=\"18\"/>";

const DATABASE: &str = "<ellipse cx=\"12\" cy=\"5\" rx=\"9\" ry=\"3\"/>\
    <path d=\"M3 5V19A9 3 0 0 0 21 19V5\"/><path d=\"M3 12A9 3 0 0 0 21 12\"/>";

const LAYERS: &str = "<path d=\"m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 \
    1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z\"/>\
    <path d=\"m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65\"/>\
    <path d=\"m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65\"/>";

/// Paths for a skill-category icon.
pub fn skill_icon_paths(icon: SkillIcon) -> &'static str {
    match icon {
        SkillIcon::Code => CODE,
        SkillIcon::Server => SERVER,
        SkillIcon::Database => DATABASE,
        SkillIcon::Layers => LAYERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_wrapper() {
        let markup = svg(ARROW_RIGHT, 16);
        assert!(markup.starts_with("<svg "));
        assert!(markup.contains("width=\"16\""));
        assert!(markup.contains("viewBox=\"0 0 24 24\""));
        assert!(markup.ends_with("</svg>"));
    }
}
