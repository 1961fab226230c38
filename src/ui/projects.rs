//! Projects section: featured-work grid.
//!
//! Project cards enlarge the cursor-follow dot while hovered, so each card
//! subscribes to pointer enter/leave.

use folio_dom::{Node, div, el, h3, p, section, span, text};

use crate::app::PortfolioApp;
use crate::message::Message;
use crate::ui::section_heading;

impl PortfolioApp {
    pub(crate) fn build_projects(&self) -> Node<Message> {
        let cards = div()
            .class("card-grid cards-2")
            .children(self.profile().projects.iter().map(|project| {
                el("article")
                    .class("card project-card")
                    .on_pointer_enter(Message::ProjectHoverStarted)
                    .on_pointer_leave(Message::ProjectHoverEnded)
                    .child(div().class("project-glow").style(
                        "background",
                        format!(
                            "linear-gradient(135deg, {}, {})",
                            project.gradient.0, project.gradient.1
                        ),
                    ))
                    .child(h3().class("card-title").child(text(&project.title)))
                    .child(p().class("card-body").child(text(&project.description)))
                    .child(
                        div().class("tag-row").children(
                            project
                                .tags
                                .iter()
                                .map(|tag| span().class("tag").child(text(tag))),
                        ),
                    )
            }));

        section().id("projects").class("section section-alt").child(
            div()
                .class("container")
                .child(section_heading(
                    "Projects",
                    "Featured Work",
                    Some("Showcasing some of my most impactful projects and solutions"),
                ))
                .child(cards),
        )
    }
}
