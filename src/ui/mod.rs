//! View building modules.
//!
//! Each module contains `impl PortfolioApp` blocks that extend the
//! controller with builders for one page region. Builders produce a
//! `folio_dom` tree; they never touch the browser, so the whole view can be
//! rendered and inspected natively.

pub(crate) mod icons;

mod about;
mod contact;
mod education;
mod experience;
mod footer;
mod header;
mod hero;
mod overlay;
mod projects;
mod skills;

use folio_dom::{Node, div, h2, main_el, p, span, text};

use crate::app::PortfolioApp;
use crate::message::Message;

impl PortfolioApp {
    /// Build the complete page tree.
    pub fn view(&self) -> Node<Message> {
        div()
            .class("page")
            .child(self.build_cursor_dot())
            .child(self.build_header())
            .child(
                main_el()
                    .child(self.build_hero())
                    .child(self.build_about())
                    .child(self.build_experience())
                    .child(self.build_skills())
                    .child(self.build_projects())
                    .child(self.build_education())
                    .child(self.build_contact()),
            )
            .child(self.build_footer())
            .child(self.build_theme_toggle())
    }
}

/// Shared section heading: pill badge, title, optional lead paragraph.
pub(crate) fn section_heading(badge: &str, title: &str, lead: Option<&str>) -> Node<Message> {
    let mut heading = div()
        .class("section-heading")
        .child(span().class("section-badge").child(text(badge)))
        .child(h2().class("section-title").child(text(title)));
    if let Some(lead) = lead {
        heading = heading.child(p().class("section-lead").child(text(lead)));
    }
    heading
}

#[cfg(test)]
mod tests {
    use crate::app::PortfolioApp;
    use crate::message::Message;
    use crate::storage::MemoryStore;
    use crate::tracker::{RegionBounds, SectionId};

    fn page_html() -> String {
        PortfolioApp::new(Box::new(MemoryStore::new()), None)
            .view()
            .to_html()
    }

    #[test]
    fn test_page_contains_every_section_id() {
        let html = page_html();
        for id in SectionId::ALL {
            assert!(
                html.contains(&format!("id=\"{}\"", id.as_str())),
                "missing section {}",
                id
            );
        }
    }

    #[test]
    fn test_nav_marks_active_section() {
        let html = page_html();
        // Fresh page: hero is active, no nav target carries the highlight.
        assert!(!html.contains("nav-link active"));
        assert!(html.contains("data-section=\"about\""));
        assert!(html.contains("data-section=\"contact\""));
    }

    #[test]
    fn test_nav_highlights_scrolled_to_section() {
        let mut app = PortfolioApp::new(Box::new(MemoryStore::new()), None);
        app.register_section(
            SectionId::About,
            Box::new(|| Some(RegionBounds::new(0.0, 800.0))),
        );
        app.update(Message::Scrolled { y: 900.0 });

        let html = app.view().to_html();
        assert!(html.contains("class=\"nav-link active\" data-section=\"about\""));
        // Exactly one link carries the highlight.
        assert_eq!(html.matches("nav-link active").count(), 1);
    }

    #[test]
    fn test_page_contains_profile_content() {
        let html = page_html();
        assert!(html.contains("Hans Voll"));
        assert!(html.contains("Crafting Digital Experiences"));
        assert!(html.contains("Financial Data Processing System"));
        assert!(html.contains("Radford University"));
        assert!(html.contains("hvoll44@gmail.com"));
    }

    #[test]
    fn test_page_has_theme_toggle_and_cursor() {
        let html = page_html();
        assert!(html.contains("id=\"theme-toggle\""));
        assert!(html.contains("id=\"cursor-dot\""));
    }
}
