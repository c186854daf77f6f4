//! Catalog loader - reads the catalog file from the site directory

use std::fs;
use std::path::{Path, PathBuf};

use super::{Catalog, CatalogError};

/// Loads and validates the site catalog
pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    /// Create a loader for the given catalog file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the catalog, falling back to the built-in one when the file is absent
    pub fn load(&self) -> Result<Catalog, CatalogError> {
        if !self.path.exists() {
            tracing::debug!(
                "No catalog at {:?}, using built-in catalog",
                self.path
            );
            return Ok(Catalog::builtin());
        }

        let content = fs::read_to_string(&self.path)?;
        let catalog = self.parse(&content)?;
        catalog.validate()?;

        tracing::debug!(
            "Loaded catalog from {:?}: {} links, {} projects, {} posts, {} skill groups",
            self.path,
            catalog.social_links.len(),
            catalog.projects.len(),
            catalog.posts.len(),
            catalog.skills.len()
        );

        Ok(catalog)
    }

    fn parse(&self, content: &str) -> Result<Catalog, CatalogError> {
        let ext = self.path.extension().and_then(|e| e.to_str());
        let parsed = match ext {
            Some("yml") | Some("yaml") => {
                serde_yaml::from_str::<Catalog>(content).map_err(|e| e.to_string())
            }
            Some("json") => serde_json::from_str::<Catalog>(content).map_err(|e| e.to_string()),
            Some("toml") => toml::from_str::<Catalog>(content).map_err(|e| e.to_string()),
            _ => return Err(CatalogError::UnsupportedFormat(self.path.clone())),
        };

        parsed.map_err(|message| CatalogError::Parse {
            path: self.path.clone(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconRef;
    use tempfile::TempDir;

    const YAML: &str = r##"
social_links:
  - id: github
    href: https://github.com/someone
    icon: github
    icon_color: "#f0f0f0"
    hover_icon_color: "#000000"
    label: Github
projects:
  - target_url: https://example.com
    image_src: /logo.png
    title: Example
    description: An example project
posts:
  - target_url: "#"
    title: Hello
    date: 01-01-2024
skills:
  - title: Empty
    icon: code
"##;

    #[test]
    fn test_missing_file_uses_builtin() {
        let dir = TempDir::new().unwrap();
        let catalog = CatalogLoader::new(dir.path().join("_catalog.yml"))
            .load()
            .unwrap();
        assert_eq!(catalog, Catalog::builtin());
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_catalog.yml");
        fs::write(&path, YAML).unwrap();

        let catalog = CatalogLoader::new(&path).load().unwrap();
        assert_eq!(catalog.social_links[0].target_url, "https://github.com/someone");
        assert_eq!(catalog.projects[0].image, "/logo.png");
        assert_eq!(catalog.posts[0].content, None);
        assert_eq!(catalog.skills[0].icon, IconRef::Code);
        assert!(catalog.skills[0].skills.is_empty());
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = TempDir::new().unwrap();

        let json = dir.path().join("catalog.json");
        fs::write(
            &json,
            r#"{"skills": [{"title": "Backend", "icon": "layers", "skills": ["Rust"]}]}"#,
        )
        .unwrap();
        let catalog = CatalogLoader::new(&json).load().unwrap();
        assert_eq!(catalog.skills[0].skills, vec!["Rust".to_string()]);

        let toml_path = dir.path().join("catalog.toml");
        fs::write(
            &toml_path,
            "[[posts]]\ntarget_url = \"#\"\ntitle = \"Post\"\ndate = \"soon\"\n",
        )
        .unwrap();
        let catalog = CatalogLoader::new(&toml_path).load().unwrap();
        assert_eq!(catalog.posts[0].date, "soon");
    }

    #[test]
    fn test_duplicate_id_fails_at_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_catalog.yml");
        let yaml = r##"
social_links:
  - { id: x, target_url: "https://a", icon: github, icon_color: "#000", hover_icon_color: "#fff", label: A }
  - { id: x, target_url: "https://b", icon: twitter, icon_color: "#000", hover_icon_color: "#fff", label: B }
"##;
        fs::write(&path, yaml).unwrap();

        let err = CatalogLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSocialId(ref id) if id == "x"));
    }

    #[test]
    fn test_unknown_icon_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("_catalog.yml");
        fs::write(&path, "skills:\n  - title: X\n    icon: myspace\n").unwrap();

        let err = CatalogLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("catalog.ini");
        fs::write(&path, "").unwrap();

        let err = CatalogLoader::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedFormat(_)));
    }
}
