use serde::{Deserialize, Serialize};

/// One degree in the academic-background grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Degree, e.g. "Geology (BS)"
    pub degree: String,
    pub school: String,
    /// Graduation date, e.g. "May 2017"
    pub graduation: String,
    pub gpa: String,
    /// Card top-stripe color (CSS)
    pub stripe_color: String,
}

impl EducationEntry {
    pub fn new(degree: &str, school: &str, graduation: &str, gpa: &str, stripe_color: &str) -> Self {
        Self {
            degree: degree.to_string(),
            school: school.to_string(),
            graduation: graduation.to_string(),
            gpa: gpa.to_string(),
            stripe_color: stripe_color.to_string(),
        }
    }
}
