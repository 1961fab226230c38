use serde::{Deserialize, Serialize};

/// One position in the work-history timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    /// Job title
    pub role: String,
    /// Employer name
    pub company: String,
    /// Human-readable period, e.g. "Mar 2022 - Present"
    pub period: String,
    /// Timeline marker color (CSS)
    pub marker_color: String,
    /// Bullet points describing the work
    pub highlights: Vec<String>,
}

impl ExperienceEntry {
    pub fn new(
        role: &str,
        company: &str,
        period: &str,
        marker_color: &str,
        highlights: &[&str],
    ) -> Self {
        Self {
            role: role.to_string(),
            company: company.to_string(),
            period: period.to_string(),
            marker_color: marker_color.to_string(),
            highlights: highlights.iter().map(|h| h.to_string()).collect(),
        }
    }
}
