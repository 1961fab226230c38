//! Contact section: contact-channel cards and the mail call to action.

use folio_dom::{Node, a, div, el, h3, p, raw_svg, section, span, text};

use crate::app::PortfolioApp;
use crate::message::Message;
use crate::ui::icons;
use crate::ui::section_heading;

impl PortfolioApp {
    pub(crate) fn build_contact(&self) -> Node<Message> {
        let profile = self.profile();

        let cards = div()
            .class("card-grid cards-2")
            .children(profile.contact.iter().map(|channel| {
                let icon = match channel.label.as_str() {
                    "Phone" => icons::PHONE,
                    _ => icons::MAIL,
                };
                el("article")
                    .class("card contact-card")
                    .child(div().class("card-stripe"))
                    .child(span().class("contact-icon").child(raw_svg(icons::svg(icon, 24))))
                    .child(h3().class("card-title").child(text(&channel.label)))
                    .child(
                        a().class("contact-value")
                            .attr("href", &channel.href)
                            .child(text(&channel.value)),
                    )
                    .child(p().class("contact-note").child(text(&channel.note)))
            }));

        // Mail CTA under the cards, mirroring the hero button style.
        let mail_href = profile
            .contact
            .iter()
            .find(|c| c.label == "Email")
            .map(|c| c.href.clone())
            .unwrap_or_else(|| "#contact".to_string());

        let cta = div().class("contact-cta").child(
            a().class("btn btn-primary")
                .attr("href", mail_href)
                .child(text("Send Me a Message"))
                .child(span().class("btn-icon").child(raw_svg(icons::svg(
                    icons::ARROW_RIGHT,
                    16,
                )))),
        );

        section().id("contact").class("section section-alt").child(
            div()
                .class("container")
                .child(section_heading(
                    "Contact",
                    "Get In Touch",
                    Some("Let's connect and discuss how I can contribute to your team"),
                ))
                .child(cards)
                .child(cta),
        )
    }
}
