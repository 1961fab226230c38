//! Portfolio content model.
//!
//! Typed, serializable resume content. The rendering layer consumes this
//! read-only; nothing here touches the browser.

mod education;
mod experience;
mod profile;
mod project;
mod skills;

pub use education::EducationEntry;
pub use experience::ExperienceEntry;
pub use profile::{ContactChannel, Profile, SocialLink, default_profile};
pub use project::ProjectCard;
pub use skills::{SkillCategory, SkillIcon};
