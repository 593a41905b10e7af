//! Portfolio content model.
//!
//! The content shown in both sections is immutable data loaded once at startup,
//! either from the bundled `assets/portfolio.yml` or from a user supplied file.
//! Nothing in here changes while the application runs.

mod error;

pub use error::ContentError;

use serde::Deserialize;
use std::{fs, path::Path};

const BUNDLED: &str = include_str!("../../assets/portfolio.yml");

/// Link text paired with its target.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Hero block at the top of the information section.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub name: Vec<String>,
    pub headline: String,
}

/// Contact cluster, including the address the copy button writes.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(default)]
    pub availability: Option<String>,
    pub email: String,
    #[serde(default)]
    pub scheduling: Option<Link>,
    #[serde(default)]
    pub socials: Vec<Link>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Education {
    pub program: String,
    pub institution: String,
    #[serde(default)]
    pub expected: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
}

/// Labelled line in the technical skills grid.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SkillGroup {
    pub label: String,
    pub items: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CallToAction {
    pub heading: String,
    pub body: String,
    pub label: String,
    pub url: String,
}

/// Entry in the project gallery. Projects without a link are shown but
/// cannot be opened.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub tag: String,
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_link")]
    pub link: Option<String>,
}

/// Full content model for both sections.
///
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Portfolio {
    pub identity: Identity,
    pub contact: Contact,
    pub about: String,
    #[serde(default)]
    pub focus: Vec<String>,
    #[serde(default)]
    pub education: Option<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub call_to_action: Option<CallToAction>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Treat empty and placeholder ("#") links as absent.
///
fn deserialize_link<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let link: Option<String> = Option::deserialize(deserializer)?;
    Ok(link.filter(|l| {
        let l = l.trim();
        !l.is_empty() && l != "#"
    }))
}

impl Portfolio {
    /// Return the content compiled into the binary.
    ///
    pub fn bundled() -> Result<Portfolio, ContentError> {
        Portfolio::from_yaml(BUNDLED)
    }

    /// Load content from a YAML file on disk.
    ///
    pub fn from_file(path: &Path) -> Result<Portfolio, ContentError> {
        let contents = fs::read_to_string(path).map_err(|e| ContentError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        Portfolio::from_yaml(&contents)
    }

    /// Parse and validate content from a YAML string.
    ///
    pub fn from_yaml(contents: &str) -> Result<Portfolio, ContentError> {
        let portfolio: Portfolio = serde_yaml::from_str(contents)
            .map_err(|e| ContentError::DeserializationFailed(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.identity.name.iter().all(|line| line.trim().is_empty()) {
            return Err(ContentError::Invalid("identity name is empty".to_string()));
        }
        if self.contact.email.trim().is_empty() {
            return Err(ContentError::Invalid("contact email is empty".to_string()));
        }
        if let Some(index) = self.projects.iter().position(|p| p.title.trim().is_empty()) {
            return Err(ContentError::Invalid(format!(
                "project {} has no title",
                index + 1
            )));
        }
        Ok(())
    }

    /// Outbound links of the information section in display order: scheduling,
    /// socials, then the call to action.
    ///
    pub fn contact_links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        if let Some(scheduling) = &self.contact.scheduling {
            links.push(scheduling.clone());
        }
        links.extend(self.contact.socials.iter().cloned());
        if let Some(cta) = &self.call_to_action {
            links.push(Link {
                label: cta.label.clone(),
                url: cta.url.clone(),
            });
        }
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
identity:
  name: ["ADA"]
  headline: Engineer
contact:
  email: ada@example.com
about: Writes programs.
"#;

    #[test]
    fn test_bundled_content_loads() {
        let portfolio = Portfolio::bundled().unwrap();
        assert_eq!(portfolio.identity.name, vec!["JASDISH", "SINGH"]);
        assert_eq!(portfolio.contact.email, "jasdishsingh55@gmail.com");
        assert_eq!(portfolio.focus.len(), 6);
        assert_eq!(portfolio.skills.len(), 6);
        assert_eq!(portfolio.achievements.len(), 4);
        assert_eq!(portfolio.projects.len(), 6);
    }

    #[test]
    fn test_bundled_projects_keep_order_and_optional_links() {
        let portfolio = Portfolio::bundled().unwrap();
        let titles: Vec<&str> = portfolio.projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles[0], "Trivia Quiz Application");
        assert_eq!(titles[5], "Scientific Calculator");
        assert!(portfolio.projects[0].link.is_some());
        assert!(portfolio.projects[2].link.is_none());
        assert!(portfolio.projects[4].link.is_none());
    }

    #[test]
    fn test_minimal_content_uses_defaults() {
        let portfolio = Portfolio::from_yaml(MINIMAL).unwrap();
        assert!(portfolio.focus.is_empty());
        assert!(portfolio.projects.is_empty());
        assert!(portfolio.education.is_none());
        assert!(portfolio.contact_links().is_empty());
    }

    #[test]
    fn test_placeholder_link_is_none() {
        let yaml = format!(
            "{}projects:\n  - title: Demo\n    tag: Rust\n    description: Thing\n    link: \"#\"\n",
            MINIMAL
        );
        let portfolio = Portfolio::from_yaml(&yaml).unwrap();
        assert_eq!(portfolio.projects[0].link, None);
    }

    #[test]
    fn test_empty_email_is_invalid() {
        let yaml = MINIMAL.replace("ada@example.com", "\"\"");
        let result = Portfolio::from_yaml(&yaml);
        assert!(matches!(result, Err(ContentError::Invalid(_))));
    }

    #[test]
    fn test_untitled_project_is_invalid() {
        let yaml = format!(
            "{}projects:\n  - title: \"\"\n    tag: Rust\n    description: Thing\n",
            MINIMAL
        );
        let err = Portfolio::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("project 1"));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = Portfolio::from_yaml("identity: [");
        assert!(matches!(result, Err(ContentError::DeserializationFailed(_))));
    }

    #[test]
    fn test_contact_links_order() {
        let portfolio = Portfolio::bundled().unwrap();
        let labels: Vec<String> = portfolio
            .contact_links()
            .into_iter()
            .map(|l| l.label)
            .collect();
        assert_eq!(labels.len(), 4);
        assert!(labels[0].contains("intro chat"));
        assert_eq!(labels[1], "GitHub");
        assert_eq!(labels[2], "LinkedIn");
        assert_eq!(labels[3], "Get in Touch");
    }

    #[test]
    fn test_missing_file() {
        let result = Portfolio::from_file(Path::new("/nonexistent/portfolio.yml"));
        assert!(matches!(result, Err(ContentError::ReadFailed { .. })));
    }
}
