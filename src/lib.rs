//! folio-rs: A fast static site generator for single-page portfolios
//!
//! This crate renders a personal portfolio page (hero, skills, projects,
//! posts and footer) from a content catalog, using Tera templates with an
//! embedded theme.

pub mod cache;
pub mod catalog;
pub mod commands;
pub mod components;
pub mod composer;
pub mod config;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

use catalog::{Catalog, CatalogLoader};

/// Site config file name, relative to the base directory
pub const CONFIG_FILE: &str = "_config.yml";

/// The main folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Source directory (static assets)
    pub source_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
    /// Catalog file
    pub catalog_path: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let catalog_path = base_dir.join(&config.catalog);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            public_dir,
            catalog_path,
        })
    }

    /// Path of the site config file
    pub fn config_path(&self) -> std::path::PathBuf {
        self.base_dir.join(CONFIG_FILE)
    }

    /// Load and validate the catalog
    pub fn load_catalog(&self) -> Result<Catalog> {
        Ok(CatalogLoader::new(&self.catalog_path).load()?)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
