//! Skills section: category cards with skill chips.

use folio_dom::{Node, div, el, h3, raw_svg, section, span, text};

use crate::app::PortfolioApp;
use crate::message::Message;
use crate::ui::icons;
use crate::ui::section_heading;

impl PortfolioApp {
    pub(crate) fn build_skills(&self) -> Node<Message> {
        let cards = div().class("card-grid cards-2").children(
            self.profile().skill_categories.iter().map(|category| {
                el("article")
                    .class("card skill-card")
                    .child(
                        div()
                            .class("skill-head")
                            .child(span().class("skill-icon").child(raw_svg(icons::svg(
                                icons::skill_icon_paths(category.icon),
                                24,
                            ))))
                            .child(h3().class("card-title").child(text(&category.name))),
                    )
                    .child(
                        div().class("skill-grid").children(
                            category
                                .skills
                                .iter()
                                .map(|skill| span().class("skill-chip").child(text(skill))),
                        ),
                    )
            }),
        );

        section().id("skills").class("section").child(
            div()
                .class("container")
                .child(section_heading(
                    "Skills",
                    "Technical Expertise",
                    Some("A comprehensive toolkit of technologies and methodologies"),
                ))
                .child(cards),
        )
    }
}
