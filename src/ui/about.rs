//! About section: biography and capability cards.

use folio_dom::{Node, div, el, h3, p, section, text};

use crate::app::PortfolioApp;
use crate::message::Message;
use crate::ui::section_heading;

impl PortfolioApp {
    pub(crate) fn build_about(&self) -> Node<Message> {
        let profile = self.profile();

        let cards = div().class("card-grid cards-3").children(
            profile.capabilities.iter().map(|(title, blurb)| {
                el("article")
                    .class("card")
                    .child(h3().class("card-title").child(text(title)))
                    .child(p().class("card-body").child(text(blurb)))
            }),
        );

        section()
            .id("about")
            .class("section")
            .child(
                div()
                    .class("container")
                    .child(section_heading(
                        "About Me",
                        &profile.about_title,
                        Some(&profile.summary),
                    ))
                    .child(cards),
            )
    }
}
