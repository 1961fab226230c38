use serde::{Deserialize, Serialize};

/// One card in the featured-projects grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Hover gradient endpoints (CSS colors), shown behind the card on hover
    pub gradient: (String, String),
}

impl ProjectCard {
    pub fn new(title: &str, description: &str, tags: &[&str], gradient: (&str, &str)) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            gradient: (gradient.0.to_string(), gradient.1.to_string()),
        }
    }
}
