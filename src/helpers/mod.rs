//! Helper functions for building views
//!
//! Cards and the page composer go through these helpers to resolve asset
//! paths against the site root and to produce small HTML fragments.

mod html;
mod url;

pub use html::*;
pub use url::*;

use crate::config::SiteConfig;

/// Collection of all helper functions bound to one site config
#[derive(Debug, Clone)]
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Resolve an image or other asset reference
    pub fn asset_url(&self, path: &str) -> String {
        asset_url(&self.config, path)
    }

    /// Get css helper
    pub fn css(&self, path: &str) -> String {
        css(&self.config, path)
    }

    /// Get js helper
    pub fn js(&self, path: &str) -> String {
        js(&self.config, path)
    }
}
