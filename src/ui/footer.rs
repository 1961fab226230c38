//! Page footer with copyright line and social links.

use folio_dom::{Node, a, div, footer, p, raw_svg, text};

use crate::app::PortfolioApp;
use crate::message::Message;
use crate::ui::icons;

impl PortfolioApp {
    pub(crate) fn build_footer(&self) -> Node<Message> {
        let profile = self.profile();

        let social = div()
            .class("footer-social")
            .children(profile.social.iter().map(|link| {
                a().class("social-link")
                    .attr("href", &link.url)
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .attr("aria-label", &link.label)
                    .child(raw_svg(icons::svg(icons::GITHUB, 20)))
            }));

        footer().class("site-footer").child(
            div()
                .class("container footer-row")
                .child(p().class("footer-copy").child(text(format!(
                    "© {} {}. All rights reserved.",
                    profile.copyright_year, profile.name
                ))))
                .child(social),
        )
    }
}
