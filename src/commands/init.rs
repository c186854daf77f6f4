//! Initialize a new portfolio site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::catalog::Catalog;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("source"))?;

    let config_path = target_dir.join(crate::CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("{:?} already exists, refusing to overwrite", config_path);
    }

    // Create _config.yml
    let config_content = r##"# folio-rs Configuration

# Site
title: Pagimos
author: Pagimos
role: Full Stack Developer
bio: >-
  As a Full Stack Software Developer, I am passionate about solving complex
  problems and creating intuitive, user-friendly applications across web,
  mobile, and desktop platforms, delivering seamless and engaging experiences.
avatar: /avatar.jpeg
language: en

# URL
url: http://example.com
root: /

# Directory
source_dir: source
public_dir: public
catalog: _catalog.yml
skip_copy: []

# Section headings
sections:
  skills: Skills & Technologies
  projects: Projects
  posts: Latest Posts

# Post teasers
posts:
  line_clamp: 2
  view_all_url: "#"
"##;

    fs::write(&config_path, config_content)?;

    // Start from the built-in catalog so the new site renders immediately
    let catalog_content = format!(
        "# Portfolio content. Entries render in the order listed.\n{}",
        serde_yaml::to_string(&Catalog::builtin())?
    );
    fs::write(target_dir.join("_catalog.yml"), catalog_content)?;

    Ok(())
}
