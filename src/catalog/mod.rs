//! Content catalog
//!
//! The catalog holds the ordered, read-only sequences that drive the page:
//! social links, projects, posts and skill groups. Entries never reference
//! each other. A catalog is validated once when it is built or loaded and
//! is not mutated afterwards.

mod defaults;
mod error;
pub mod loader;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use error::CatalogError;
pub use loader::CatalogLoader;

/// Known icon identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconRef {
    Github,
    Linkedin,
    Instagram,
    Twitter,
    Code,
    Layers,
    Database,
    Smartphone,
    ArrowUpRight,
}

impl IconRef {
    pub fn name(&self) -> &'static str {
        match self {
            IconRef::Github => "github",
            IconRef::Linkedin => "linkedin",
            IconRef::Instagram => "instagram",
            IconRef::Twitter => "twitter",
            IconRef::Code => "code",
            IconRef::Layers => "layers",
            IconRef::Database => "database",
            IconRef::Smartphone => "smartphone",
            IconRef::ArrowUpRight => "arrow-up-right",
        }
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A social profile link shown in the hero and the footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLinkEntry {
    pub id: String,
    #[serde(alias = "href")]
    pub target_url: String,
    pub icon: IconRef,
    /// CSS background applied while the link is hovered
    #[serde(default)]
    pub hover_background: String,
    pub icon_color: String,
    pub hover_icon_color: String,
    pub label: String,
}

/// A project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(alias = "href")]
    pub target_url: String,
    #[serde(alias = "image_src")]
    pub image: String,
    pub title: String,
    pub description: String,
    /// Explicitly marks the distinguished entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

/// A blog post teaser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostEntry {
    #[serde(alias = "href")]
    pub target_url: String,
    pub title: String,
    /// Display text, never parsed
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A titled group of skill chips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroupEntry {
    pub title: String,
    pub icon: IconRef,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// The full, validated content catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub social_links: Vec<SocialLinkEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub posts: Vec<PostEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroupEntry>,
}

impl Catalog {
    /// Build a catalog from raw sequences, validating it once
    pub fn new(
        social_links: Vec<SocialLinkEntry>,
        projects: Vec<ProjectEntry>,
        posts: Vec<PostEntry>,
        skills: Vec<SkillGroupEntry>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            social_links,
            projects,
            posts,
            skills,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        defaults::builtin()
    }

    /// Check uniqueness, non-emptiness and color constraints
    pub fn validate(&self) -> Result<(), CatalogError> {
        error::validate(self)
    }

    /// Index of the distinguished project, if any
    ///
    /// Once any project sets `featured`, only an explicit `featured: true`
    /// counts. Without flags the first project is distinguished.
    pub fn featured_project(&self) -> Option<usize> {
        if self.projects.iter().any(|p| p.featured.is_some()) {
            return self.projects.iter().position(|p| p.featured == Some(true));
        }
        if self.projects.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    /// Total number of entries across all sequences
    pub fn len(&self) -> usize {
        self.social_links.len() + self.projects.len() + self.posts.len() + self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(title: &str, featured: Option<bool>) -> ProjectEntry {
        ProjectEntry {
            target_url: "https://example.com".to_string(),
            image: "/logo.png".to_string(),
            title: title.to_string(),
            description: String::new(),
            featured,
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.social_links.len(), 4);
        assert_eq!(catalog.projects.len(), 7);
        assert_eq!(catalog.posts.len(), 5);
        assert_eq!(catalog.skills.len(), 4);
    }

    #[test]
    fn test_featured_defaults_to_first() {
        let catalog =
            Catalog::new(vec![], vec![project("A", None), project("B", None)], vec![], vec![])
                .unwrap();
        assert_eq!(catalog.featured_project(), Some(0));
    }

    #[test]
    fn test_explicit_featured_wins() {
        let catalog = Catalog::new(
            vec![],
            vec![project("A", None), project("B", Some(true))],
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(catalog.featured_project(), Some(1));
    }

    #[test]
    fn test_explicit_false_disables_positional_rule() {
        let catalog = Catalog::new(
            vec![],
            vec![project("A", Some(false)), project("B", None)],
            vec![],
            vec![],
        )
        .unwrap();
        assert_eq!(catalog.featured_project(), None);
    }

    #[test]
    fn test_no_projects_no_featured() {
        let catalog = Catalog::new(vec![], vec![], vec![], vec![]).unwrap();
        assert_eq!(catalog.featured_project(), None);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_icon_names_round_trip_through_yaml() {
        let icon: IconRef = serde_yaml::from_str("arrow-up-right").unwrap();
        assert_eq!(icon, IconRef::ArrowUpRight);
        assert_eq!(IconRef::Linkedin.to_string(), "linkedin");
        assert!(serde_yaml::from_str::<IconRef>("myspace").is_err());
    }
}
