//! Catalog validation errors

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

use super::Catalog;

lazy_static! {
    static ref HEX_COLOR: Regex =
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();
}

/// Errors raised while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate social link id: {0}")]
    DuplicateSocialId(String),

    #[error("Duplicate project title: {0}")]
    DuplicateProjectTitle(String),

    #[error("Empty target URL in {kind} '{name}'")]
    EmptyTargetUrl { kind: &'static str, name: String },

    #[error("Invalid color '{value}' for social link '{id}'")]
    InvalidColor { id: String, value: String },

    #[error("More than one featured project: '{first}' and '{second}'")]
    MultipleFeatured { first: String, second: String },

    #[error("Unsupported catalog format: {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse catalog {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub(super) fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();
    for link in &catalog.social_links {
        if !ids.insert(link.id.as_str()) {
            return Err(CatalogError::DuplicateSocialId(link.id.clone()));
        }
        if link.target_url.trim().is_empty() {
            return Err(CatalogError::EmptyTargetUrl {
                kind: "social link",
                name: link.id.clone(),
            });
        }
        for color in [&link.icon_color, &link.hover_icon_color] {
            if !HEX_COLOR.is_match(color) {
                return Err(CatalogError::InvalidColor {
                    id: link.id.clone(),
                    value: color.clone(),
                });
            }
        }
    }

    let mut titles = HashSet::new();
    let mut featured: Option<&str> = None;
    for project in &catalog.projects {
        if !titles.insert(project.title.as_str()) {
            return Err(CatalogError::DuplicateProjectTitle(project.title.clone()));
        }
        if project.target_url.trim().is_empty() {
            return Err(CatalogError::EmptyTargetUrl {
                kind: "project",
                name: project.title.clone(),
            });
        }
        if project.featured == Some(true) {
            if let Some(first) = featured {
                return Err(CatalogError::MultipleFeatured {
                    first: first.to_string(),
                    second: project.title.clone(),
                });
            }
            featured = Some(project.title.as_str());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{IconRef, ProjectEntry, SocialLinkEntry};

    fn link(id: &str, url: &str, color: &str) -> SocialLinkEntry {
        SocialLinkEntry {
            id: id.to_string(),
            target_url: url.to_string(),
            icon: IconRef::Github,
            hover_background: String::new(),
            icon_color: color.to_string(),
            hover_icon_color: "#ffffff".to_string(),
            label: id.to_string(),
        }
    }

    fn project(title: &str, featured: Option<bool>) -> ProjectEntry {
        ProjectEntry {
            target_url: "https://example.com".to_string(),
            image: String::new(),
            title: title.to_string(),
            description: String::new(),
            featured,
        }
    }

    #[test]
    fn test_duplicate_social_id_rejected() {
        let result = Catalog::new(
            vec![
                link("github", "https://github.com/a", "#000"),
                link("github", "https://github.com/b", "#000"),
            ],
            vec![],
            vec![],
            vec![],
        );
        match result {
            Err(CatalogError::DuplicateSocialId(id)) => assert_eq!(id, "github"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_url_rejected() {
        let result = Catalog::new(vec![link("x", "  ", "#000")], vec![], vec![], vec![]);
        assert!(matches!(
            result,
            Err(CatalogError::EmptyTargetUrl { kind: "social link", .. })
        ));
    }

    #[test]
    fn test_colors() {
        assert!(Catalog::new(vec![link("a", "#", "#0077b5")], vec![], vec![], vec![]).is_ok());
        assert!(Catalog::new(vec![link("a", "#", "#fff")], vec![], vec![], vec![]).is_ok());
        assert!(Catalog::new(vec![link("a", "#", "#00000080")], vec![], vec![], vec![]).is_ok());

        let err = Catalog::new(vec![link("a", "#", "blue")], vec![], vec![], vec![]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid color 'blue' for social link 'a'");
    }

    #[test]
    fn test_duplicate_project_title_rejected() {
        let result = Catalog::new(
            vec![],
            vec![project("Estifham", None), project("Estifham", None)],
            vec![],
            vec![],
        );
        assert!(matches!(
            result,
            Err(CatalogError::DuplicateProjectTitle(_))
        ));
    }

    #[test]
    fn test_multiple_featured_rejected() {
        let result = Catalog::new(
            vec![],
            vec![project("A", Some(true)), project("B", Some(false)), project("C", Some(true))],
            vec![],
            vec![],
        );
        match result {
            Err(CatalogError::MultipleFeatured { first, second }) => {
                assert_eq!(first, "A");
                assert_eq!(second, "C");
            }
            other => panic!("expected multiple featured error, got {:?}", other),
        }
    }

    #[test]
    fn test_posts_and_skills_unconstrained() {
        use crate::catalog::{PostEntry, SkillGroupEntry};

        let posts = vec![
            PostEntry {
                target_url: "#".to_string(),
                title: "Same".to_string(),
                date: "not a date".to_string(),
                content: None,
            },
            PostEntry {
                target_url: "#".to_string(),
                title: "Same".to_string(),
                date: "15-05-2024".to_string(),
                content: Some(String::new()),
            },
        ];
        let skills = vec![SkillGroupEntry {
            title: "Empty".to_string(),
            icon: IconRef::Code,
            skills: vec![],
        }];
        assert!(Catalog::new(vec![], vec![], posts, skills).is_ok());
    }
}
