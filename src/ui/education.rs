//! Education section: academic-background cards.

use folio_dom::{Node, div, el, h3, p, raw_svg, section, span, text};

use crate::app::PortfolioApp;
use crate::message::Message;
use crate::ui::icons;
use crate::ui::section_heading;

fn detail_row(label: &str, value: &str) -> Node<Message> {
    div()
        .class("detail-row")
        .child(span().class("detail-label").child(text(label)))
        .child(span().class("detail-value").child(text(value)))
}

impl PortfolioApp {
    pub(crate) fn build_education(&self) -> Node<Message> {
        let cards = div()
            .class("card-grid cards-2")
            .children(self.profile().education.iter().map(|entry| {
                el("article")
                    .class("card education-card")
                    .child(
                        div()
                            .class("card-stripe")
                            .style("background", &entry.stripe_color),
                    )
                    .child(
                        span()
                            .class("education-icon")
                            .style("color", &entry.stripe_color)
                            .child(raw_svg(icons::svg(icons::GRADUATION_CAP, 24))),
                    )
                    .child(h3().class("card-title").child(text(&entry.degree)))
                    .child(p().class("education-school").child(text(&entry.school)))
                    .child(detail_row("Graduation", &entry.graduation))
                    .child(detail_row("GPA", &entry.gpa))
            }));

        section().id("education").class("section").child(
            div()
                .class("container")
                .child(section_heading(
                    "Education",
                    "Academic Background",
                    Some("Educational qualifications that have shaped my professional journey"),
                ))
                .child(cards),
        )
    }
}
