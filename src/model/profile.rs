use serde::{Deserialize, Serialize};

use super::{EducationEntry, ExperienceEntry, ProjectCard, SkillCategory, SkillIcon};

/// A way to reach the site owner, rendered as a contact card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactChannel {
    /// Card heading, e.g. "Email"
    pub label: String,
    /// The address/number itself
    pub value: String,
    /// `href` for the value, e.g. `mailto:` or `tel:` link
    pub href: String,
    /// Small note under the value
    pub note: String,
}

/// External profile link shown in the header/footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// The complete page content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Badge above the name in the hero
    pub headline: String,
    /// One-line pitch under the name
    pub tagline: String,
    /// "About me" heading
    pub about_title: String,
    /// Biography paragraph
    pub summary: String,
    /// Three capability cards in the about section: (title, blurb)
    pub capabilities: Vec<(String, String)>,
    pub experience: Vec<ExperienceEntry>,
    pub skill_categories: Vec<SkillCategory>,
    pub projects: Vec<ProjectCard>,
    pub education: Vec<EducationEntry>,
    pub contact: Vec<ContactChannel>,
    pub social: Vec<SocialLink>,
    /// Footer copyright year
    pub copyright_year: u32,
}

impl Profile {
    /// Serialize the profile to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Browser tab / document title.
    pub fn page_title(&self) -> String {
        format!("{} - {}", self.name, self.headline)
    }
}

/// The site content.
pub fn default_profile() -> Profile {
    Profile {
        name: "Hans Voll".to_string(),
        headline: "Software Developer".to_string(),
        tagline: "Building high-performance, low-maintenance systems with a focus on \
                  scalability and user experience."
            .to_string(),
        about_title: "Crafting Digital Experiences".to_string(),
        summary: "Experienced engineer with a strong focus on high-performance, \
                  low-maintenance systems. Skilled in collaborating with Agile teams to \
                  design, develop, and support technical solutions. Proficient in building \
                  identity platforms in Azure and applying CI/CD techniques to enhance \
                  software development processes."
            .to_string(),
        capabilities: vec![
            (
                "Full Stack Development".to_string(),
                "Building complete solutions from database design to user interfaces with \
                 a focus on performance and maintainability."
                    .to_string(),
            ),
            (
                "Cloud Architecture".to_string(),
                "Designing and implementing scalable cloud solutions using Azure and AWS \
                 services for optimal performance."
                    .to_string(),
            ),
            (
                "Data Engineering".to_string(),
                "Creating efficient ETL pipelines and data processing systems to handle \
                 high-volume datasets with accuracy."
                    .to_string(),
            ),
        ],
        experience: vec![
            ExperienceEntry::new(
                "Software Developer",
                "MRS BPO",
                "Mar 2022 - Present",
                "#7c3aed",
                &[
                    "Developed backend systems to handle business-critical logic, ensuring \
                     accuracy and scalability for financial operations across multiple \
                     departments.",
                    "Designed and implemented cloud-based architectures using AWS services \
                     like Lambda, S3, Aurora, and EC2, optimizing data storage and workflows.",
                    "Created ETL pipelines in C# to process high-volume financial datasets, \
                     reducing data latency and improving reporting accuracy across business \
                     units.",
                    "Maintained and extended reusable code libraries, standardizing solutions \
                     and promoting efficient development practices aligned with team standards.",
                    "Built responsive front-end applications with Angular, delivering \
                     user-friendly interfaces and supporting operational efficiency.",
                ],
            ),
            ExperienceEntry::new(
                "Full Stack Developer",
                "CDYNE Corp.",
                "Feb 2021 - Mar 2022",
                "#3b82f6",
                &[
                    "Designed, developed, and maintained software applications using C# and \
                     ASP.Net. Worked in full stack capacity on both front end websites and \
                     back end applications.",
                    "Created single-page applications in Blazor and Angular. Incorporated \
                     Entity Framework on both code-first and database-first projects.",
                    "Created and maintained databases using Microsoft SQL Server. Designed \
                     tables, wrote stored procedures, created user defined types, and \
                     utilized data views.",
                    "Built and consumed RESTful web APIs using HTTP methods. Utilized \
                     Swagger for automated documentation and Postman for testing endpoints.",
                    "Collaborated with team on development projects using Azure DevOps. \
                     Incorporated Git source control, work tracking, and continuous \
                     integration and delivery.",
                    "Used Identity Server to provide single-sign-on functionality across \
                     multiple software products. Used JWT Authentication with web tokens, \
                     claims, and schemes to verify access.",
                ],
            ),
            ExperienceEntry::new(
                "Geophysicist",
                "NAEVA Geophysics Inc.",
                "May 2017 - Jan 2021",
                "#a855f7",
                &[
                    "Automated ETL workflows with Python scripts enabling seamless flow \
                     across data sources.",
                    "Designed and developed a Xamarin mobile app with local data storage \
                     functionality in SQLite.",
                ],
            ),
        ],
        skill_categories: vec![
            SkillCategory::new(
                "Frontend",
                SkillIcon::Code,
                &[
                    "Angular",
                    "Blazor",
                    "HTML/CSS",
                    "JavaScript",
                    "TypeScript",
                    "Responsive Design",
                ],
            ),
            SkillCategory::new(
                "Backend",
                SkillIcon::Server,
                &["C#", "ASP.NET", "Python", "Java", "REST APIs", "Microservices"],
            ),
            SkillCategory::new(
                "Database",
                SkillIcon::Database,
                &[
                    "SQL Server",
                    "Entity Framework",
                    "SQLite",
                    "Database Design",
                    "Stored Procedures",
                ],
            ),
            SkillCategory::new(
                "DevOps & Cloud",
                SkillIcon::Layers,
                &["Azure", "AWS", "CI/CD", "Git", "Agile", "Identity Platform"],
            ),
        ],
        projects: vec![
            ProjectCard::new(
                "Financial Data Processing System",
                "Developed a high-performance ETL pipeline for processing financial \
                 datasets, reducing data latency by 40%.",
                &["C#", "AWS", "ETL", "Financial Services"],
                ("#3b82f6", "#22d3ee"),
            ),
            ProjectCard::new(
                "Identity Management Platform",
                "Built a single sign-on solution with JWT authentication for multiple \
                 software products.",
                &["Identity Server", "JWT", "Azure", "Security"],
                ("#a855f7", "#6366f1"),
            ),
            ProjectCard::new(
                "Responsive Angular Dashboard",
                "Created a user-friendly interface for operational efficiency with \
                 real-time data visualization.",
                &["Angular", "TypeScript", "UI/UX", "Data Visualization"],
                ("#ef4444", "#fb923c"),
            ),
            ProjectCard::new(
                "Mobile Data Collection App",
                "Designed and developed a Xamarin mobile app with local SQLite storage \
                 for field data collection.",
                &["Xamarin", "SQLite", "Mobile", "C#"],
                ("#22c55e", "#34d399"),
            ),
        ],
        education: vec![
            EducationEntry::new(
                "Geology (BS)",
                "Radford University",
                "May 2017",
                "3.6",
                "#3b82f6",
            ),
            EducationEntry::new(
                "Economics (BA)",
                "Metropolitan State University",
                "May 2011",
                "3.8",
                "#a855f7",
            ),
        ],
        contact: vec![
            ContactChannel {
                label: "Phone".to_string(),
                value: "(719) 429-1997".to_string(),
                href: "tel:+17194291997".to_string(),
                note: "Feel free to call during business hours".to_string(),
            },
            ContactChannel {
                label: "Email".to_string(),
                value: "hvoll44@gmail.com".to_string(),
                href: "mailto:hvoll44@gmail.com".to_string(),
                note: "I'll respond to your message promptly".to_string(),
            },
        ],
        social: vec![SocialLink {
            label: "GitHub".to_string(),
            url: "https://github.com/hvoll44".to_string(),
        }],
        copyright_year: 2025,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_complete() {
        let profile = default_profile();
        assert_eq!(profile.name, "Hans Voll");
        assert_eq!(profile.capabilities.len(), 3);
        assert_eq!(profile.experience.len(), 3);
        assert_eq!(profile.skill_categories.len(), 4);
        assert_eq!(profile.projects.len(), 4);
        assert_eq!(profile.education.len(), 2);
        assert_eq!(profile.contact.len(), 2);
    }

    #[test]
    fn test_page_title() {
        assert_eq!(
            default_profile().page_title(),
            "Hans Voll - Software Developer"
        );
    }

    #[test]
    fn test_profile_json_export() {
        let json = default_profile().to_json().expect("profile serializes");
        assert!(json.contains("\"name\": \"Hans Voll\""));
        assert!(json.contains("hvoll44@gmail.com"));
        assert!(json.contains("Identity Management Platform"));
    }
}
