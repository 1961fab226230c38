use serde::{Deserialize, Serialize};

/// Icon shown next to a skill category heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillIcon {
    Code,
    Server,
    Database,
    Layers,
}

/// One category in the skills grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub icon: SkillIcon,
    pub skills: Vec<String>,
}

impl SkillCategory {
    pub fn new(name: &str, icon: SkillIcon, skills: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            icon,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}
