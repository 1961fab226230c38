//! Hero section: badge, name, tagline, calls to action, scroll hint.
//!
//! The inner content carries `id="hero-motion"`; the render loop drives its
//! opacity and scale from scroll progress. Entrance animations are staggered
//! with per-element delays.

use folio_dom::{Node, a, div, h1, p, raw_svg, section, span, text};

use crate::app::PortfolioApp;
use crate::constants::HERO_STAGGER_DELAYS;
use crate::message::Message;
use crate::ui::icons;

fn staggered(node: Node<Message>, slot: usize) -> Node<Message> {
    node.class("fade-up")
        .style("animation-delay", format!("{}s", HERO_STAGGER_DELAYS[slot]))
}

impl PortfolioApp {
    pub(crate) fn build_hero(&self) -> Node<Message> {
        let profile = self.profile();

        let background = div()
            .class("hero-bg")
            .child(div().class("blob blob-1"))
            .child(div().class("blob blob-2"))
            .child(div().class("blob blob-3"));

        let mut action_row = div().class("hero-actions").child(
            a().class("btn btn-primary")
                .attr("href", "#contact")
                .child(text("Contact Me"))
                .child(span().class("btn-icon").child(raw_svg(icons::svg(
                    icons::ARROW_RIGHT,
                    16,
                )))),
        );
        if let Some(link) = profile.social.first() {
            action_row = action_row.child(
                a().class("btn btn-outline")
                    .attr("href", &link.url)
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .child(span().class("btn-icon").child(raw_svg(icons::svg(
                        icons::GITHUB,
                        16,
                    ))))
                    .child(text(&link.label))
                    .child(span().class("btn-icon btn-icon-hover").child(raw_svg(
                        icons::svg(icons::EXTERNAL_LINK, 16),
                    ))),
            );
        }
        let actions = staggered(action_row, 3);

        let content = div()
            .id("hero-motion")
            .class("hero-content container")
            .child(staggered(
                span().class("hero-badge").child(text(&profile.headline)),
                0,
            ))
            .child(staggered(
                h1().class("hero-name").child(text(&profile.name)),
                1,
            ))
            .child(staggered(
                p().class("hero-tagline").child(text(&profile.tagline)),
                2,
            ))
            .child(actions)
            .child(staggered(
                div().class("scroll-hint").child(
                    a().attr("href", "#about")
                        .child(span().child(text("Scroll Down")))
                        .child(raw_svg(icons::svg(icons::ARROW_DOWN, 16))),
                ),
                4,
            ));

        section()
            .id("hero")
            .class("hero")
            .child(background)
            .child(content)
    }
}

#[cfg(test)]
mod tests {
    use crate::app::PortfolioApp;
    use crate::storage::MemoryStore;

    #[test]
    fn test_hero_without_social_links_skips_outline_button() {
        let mut app = PortfolioApp::new(Box::new(MemoryStore::new()), None);
        app.profile_mut().social.clear();

        let html = app.build_hero().to_html();
        assert!(!html.contains("btn-outline"));
        assert!(html.contains("Contact Me"));
    }

    #[test]
    fn test_hero_with_social_link_renders_outline_button() {
        let app = PortfolioApp::new(Box::new(MemoryStore::new()), None);
        let html = app.build_hero().to_html();
        assert!(html.contains("btn-outline"));
        assert!(html.contains("github.com"));
    }

    #[test]
    fn test_hero_consumes_every_stagger_slot() {
        let app = PortfolioApp::new(Box::new(MemoryStore::new()), None);
        let html = app.build_hero().to_html();
        for delay in crate::constants::HERO_STAGGER_DELAYS {
            assert!(
                html.contains(&format!("animation-delay:{delay}s")),
                "missing stagger delay {delay}s"
            );
        }
    }
}
