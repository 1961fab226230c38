//! Experience section: professional timeline.

use folio_dom::{Node, div, el, h3, li, p, section, span, text, ul};

use crate::app::PortfolioApp;
use crate::message::Message;
use crate::ui::section_heading;

impl PortfolioApp {
    pub(crate) fn build_experience(&self) -> Node<Message> {
        let timeline = div()
            .class("timeline")
            .children(self.profile().experience.iter().map(|entry| {
                div()
                    .class("timeline-entry")
                    .child(
                        div()
                            .class("timeline-marker")
                            .style("background", &entry.marker_color),
                    )
                    .child(
                        div()
                            .class("timeline-body")
                            .child(
                                div()
                                    .class("timeline-head")
                                    .child(h3().class("timeline-role").child(text(&entry.role)))
                                    .child(
                                        span()
                                            .class("badge")
                                            .style("color", &entry.marker_color)
                                            .child(text(&entry.period)),
                                    ),
                            )
                            .child(p().class("timeline-company").child(text(&entry.company)))
                            .child(
                                el("article").class("card").child(
                                    ul().class("highlights").children(
                                        entry
                                            .highlights
                                            .iter()
                                            .map(|h| li().child(text(h))),
                                    ),
                                ),
                            ),
                    )
            }));

        section().id("experience").class("section section-alt").child(
            div()
                .class("container")
                .child(section_heading(
                    "Experience",
                    "Professional Journey",
                    Some("My career path in software development and engineering"),
                ))
                .child(timeline),
        )
    }
}
