//! Fixed overlay elements: the cursor-follow dot and the theme toggle.
//!
//! Both carry ids because the frame loop and the theme dispatcher address
//! them directly after mounting.

use folio_dom::{Node, button, div, raw_svg, span};

use crate::app::PortfolioApp;
use crate::message::Message;
use crate::ui::icons;

impl PortfolioApp {
    /// The spring-driven dot that trails the pointer. Position and size are
    /// written imperatively each frame; the builder only seeds the initial
    /// transform.
    pub(crate) fn build_cursor_dot(&self) -> Node<Message> {
        let snapshot = self.snapshot();
        let (x, y) = snapshot.cursor_origin;
        div()
            .id("cursor-dot")
            .class("cursor-dot")
            .attr("aria-hidden", "true")
            .style("transform", format!("translate({x:.1}px, {y:.1}px)"))
            .style("width", format!("{:.0}px", snapshot.cursor_size))
            .style("height", format!("{:.0}px", snapshot.cursor_size))
    }

    /// Floating light/dark toggle. Both icons are always in the tree; the
    /// stylesheet shows one or the other depending on the `dark` root class.
    pub(crate) fn build_theme_toggle(&self) -> Node<Message> {
        button()
            .id("theme-toggle")
            .class("theme-toggle")
            .attr("type", "button")
            .attr("aria-label", "Toggle theme")
            .on_click(Message::ToggleTheme)
            .child(
                span()
                    .class("icon-sun")
                    .child(raw_svg(icons::svg(icons::SUN, 20))),
            )
            .child(
                span()
                    .class("icon-moon")
                    .child(raw_svg(icons::svg(icons::MOON, 20))),
            )
    }
}

#[cfg(test)]
mod tests {
    use crate::app::PortfolioApp;
    use crate::storage::MemoryStore;

    #[test]
    fn test_theme_toggle_carries_both_icons() {
        let app = PortfolioApp::new(Box::new(MemoryStore::new()), None);
        let html = app.build_theme_toggle().to_html();
        assert!(html.contains("icon-sun"));
        assert!(html.contains("icon-moon"));
        assert!(html.contains("aria-label=\"Toggle theme\""));
    }

    #[test]
    fn test_cursor_dot_starts_at_default_size() {
        let app = PortfolioApp::new(Box::new(MemoryStore::new()), None);
        let html = app.build_cursor_dot().to_html();
        assert!(html.contains("width:32px"));
    }
}
