//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub role: String,
    pub bio: String,
    pub avatar: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,
    pub catalog: String,
    #[serde(default)]
    pub skip_copy: Vec<String>,

    // Sections
    #[serde(default)]
    pub sections: SectionsConfig,
    #[serde(default)]
    pub posts: PostsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Pagimos".to_string(),
            author: "Pagimos".to_string(),
            role: "Full Stack Developer".to_string(),
            bio: "As a Full Stack Software Developer, I am passionate about solving complex \
                  problems and creating intuitive, user-friendly applications across web, \
                  mobile, and desktop platforms, delivering seamless and engaging experiences."
                .to_string(),
            avatar: "/avatar.jpeg".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            catalog: "_catalog.yml".to_string(),
            skip_copy: Vec::new(),

            sections: SectionsConfig::default(),
            posts: PostsConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Section headings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    pub skills: String,
    pub projects: String,
    pub posts: String,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            skills: "Skills & Technologies".to_string(),
            projects: "Projects".to_string(),
            posts: "Latest Posts".to_string(),
        }
    }
}

/// Post teaser configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostsConfig {
    /// Number of display lines the snippet is clamped to
    pub line_clamp: u8,
    pub view_all_url: String,
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            line_clamp: 2,
            view_all_url: "#".to_string(),
        }
    }
}
