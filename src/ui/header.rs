//! Sticky page header with brand link and section navigation.

use folio_dom::{Node, a, div, header, nav, raw_svg, span, text};

use crate::app::PortfolioApp;
use crate::message::Message;
use crate::tracker::SectionId;
use crate::ui::icons;

impl PortfolioApp {
    pub(crate) fn build_header(&self) -> Node<Message> {
        let active = self.snapshot().active_section;

        let mut site_nav = nav().class("site-nav");
        for id in SectionId::nav_targets() {
            let mut link = a()
                .class("nav-link")
                .attr("data-section", id.as_str())
                .attr("href", format!("#{}", id.as_str()))
                .child(text(id.nav_label()));
            if id == active {
                link = link.class("active");
            }
            site_nav = site_nav.child(link);
        }

        header().class("site-header").child(
            div()
                .class("container header-row")
                .child(
                    a().class("brand")
                        .attr("href", "#hero")
                        .child(text(&self.profile().name)),
                )
                .child(site_nav)
                .child(
                    a().class("btn btn-primary btn-sm header-cta")
                        .attr("href", "#contact")
                        .child(text("Contact Me"))
                        .child(span().class("btn-icon").child(raw_svg(icons::svg(
                            icons::ARROW_RIGHT,
                            16,
                        )))),
                ),
        )
    }
}
