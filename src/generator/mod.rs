//! Generator module - writes the portfolio page using built-in Tera templates

use anyhow::{Context as _, Result};
use glob::Pattern;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::composer::PageComposer;
use crate::templates::{TemplateRenderer, HOVER_SCRIPT, STYLESHEET};
use crate::Folio;

/// Static site generator for the portfolio page
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
    composer: PageComposer,
    skip_patterns: Vec<Pattern>,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        let composer = PageComposer::new(folio.config.clone());
        Self::with_composer(folio, renderer, composer)
    }

    /// Create a generator with an explicit composer
    pub fn with_composer(
        folio: &Folio,
        renderer: TemplateRenderer,
        composer: PageComposer,
    ) -> Result<Self> {
        let skip_patterns = folio
            .config
            .skip_copy
            .iter()
            .map(|p| Pattern::new(p).with_context(|| format!("Invalid skip_copy pattern: {}", p)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            folio: folio.clone(),
            renderer,
            composer,
            skip_patterns,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, catalog: &Catalog) -> Result<()> {
        // Ensure public directory exists
        fs::create_dir_all(&self.folio.public_dir)?;

        // Copy source assets (images, etc.)
        let copied = self.copy_source_assets()?;
        tracing::debug!("Copied {} source assets", copied);

        self.write_theme_assets()?;

        let html = self.render(catalog)?;
        let index = self.folio.public_dir.join("index.html");
        fs::write(&index, html)?;
        tracing::debug!("Generated: {:?}", index);

        Ok(())
    }

    /// Render the page to a string without touching the filesystem
    pub fn render(&self, catalog: &Catalog) -> Result<String> {
        let page = self.composer.compose(catalog);
        self.renderer.render_page(&page)
    }

    fn write_theme_assets(&self) -> Result<()> {
        let css_dir = self.folio.public_dir.join("css");
        let js_dir = self.folio.public_dir.join("js");
        fs::create_dir_all(&css_dir)?;
        fs::create_dir_all(&js_dir)?;

        fs::write(css_dir.join("style.css"), STYLESHEET)?;
        fs::write(js_dir.join("hover.js"), HOVER_SCRIPT)?;
        Ok(())
    }

    /// Copy source assets to the public directory
    fn copy_source_assets(&self) -> Result<usize> {
        let source_dir = &self.folio.source_dir;
        if !source_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            if self.should_skip(relative) {
                tracing::debug!("Skipping: {:?}", relative);
                continue;
            }

            let dest = self.folio.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }

            fs::copy(path, &dest)?;
            copied += 1;
        }

        Ok(copied)
    }

    /// Hidden and underscore-prefixed files are never published
    fn should_skip(&self, relative: &Path) -> bool {
        let hidden = relative.components().any(|c| {
            let name = c.as_os_str().to_string_lossy();
            name.starts_with('_') || name.starts_with('.')
        });

        hidden || self.skip_patterns.iter().any(|p| p.matches_path(relative))
    }
}
