//! Generate static files

use anyhow::Result;
use chrono::Datelike;
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::BuildCache;
use crate::composer::PageComposer;
use crate::generator::Generator;
use crate::templates::TemplateRenderer;
use crate::Folio;

/// Outcome of a generate run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Generated,
    Unchanged,
}

/// Generate the static site (skipping it when nothing changed)
pub fn run(folio: &Folio) -> Result<()> {
    run_with_options(folio, false).map(|_| ())
}

/// Generate with force option
pub fn run_with_options(folio: &Folio, force: bool) -> Result<Outcome> {
    run_for_year(folio, force, chrono::Local::now().year())
}

/// Generate with the footer year fixed by the caller
fn run_for_year(folio: &Folio, force: bool, year: i32) -> Result<Outcome> {
    let start = std::time::Instant::now();

    // Validation happens here, before anything is written
    let catalog = folio.load_catalog()?;
    tracing::info!(
        "Loaded catalog: {} links, {} projects, {} posts, {} skill groups",
        catalog.social_links.len(),
        catalog.projects.len(),
        catalog.posts.len(),
        catalog.skills.len()
    );

    let current = BuildCache::compute(
        &folio.config_path(),
        &folio.catalog_path,
        &folio.source_dir,
        year,
    )?;
    let previous = BuildCache::load(&folio.base_dir);
    let output_present = folio.public_dir.join("index.html").exists();

    if !force && output_present && previous.is_fresh(&current) {
        tracing::info!("No changes detected, skipping generation");
        return Ok(Outcome::Unchanged);
    }

    let generator = Generator::with_composer(
        folio,
        TemplateRenderer::new()?,
        PageComposer::with_year(folio.config.clone(), year),
    )?;
    generator.generate(&catalog)?;

    current.save(&folio.base_dir)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(Outcome::Generated)
}

/// Reload the site from disk and generate it
///
/// Config edits change directories, headings and the catalog location, so
/// a `Folio` loaded earlier must not be reused for a rebuild.
pub fn regenerate(base_dir: &Path) -> Result<(Folio, Outcome)> {
    let folio = Folio::new(base_dir)?;
    let outcome = run_with_options(&folio, false)?;
    Ok((folio, outcome))
}

/// Watch for file changes and regenerate
pub async fn watch(folio: &Folio) -> Result<()> {
    let folio = folio.clone();
    tokio::task::spawn_blocking(move || watch_with(&folio, |_| {})).await?
}

/// Block on file changes, regenerating after each debounced burst
///
/// `on_rebuild` runs after every successful regeneration.
pub fn watch_with<F>(folio: &Folio, mut on_rebuild: F) -> Result<()>
where
    F: FnMut(Outcome),
{
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if folio.source_dir.exists() {
        debouncer
            .watcher()
            .watch(&folio.source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", folio.source_dir);
    }

    // Config and catalog are watched through their directory so files
    // created later and editors that save by rename are both seen
    debouncer
        .watcher()
        .watch(&folio.base_dir, RecursiveMode::NonRecursive)?;
    tracing::debug!("Watching: {:?}", folio.base_dir);

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    let mut filter = WatchFilter::new(folio);
    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let changed: Vec<_> = events
                    .iter()
                    .filter(|e| filter.is_relevant(&e.path))
                    .collect();
                if changed.is_empty() {
                    continue;
                }
                for event in &changed {
                    tracing::info!("File changed: {}", event.path.display());
                }

                match regenerate(&folio.base_dir) {
                    Ok((current, outcome)) => {
                        filter = WatchFilter::new(&current);
                        on_rebuild(outcome);
                    }
                    Err(e) => tracing::error!("Generation failed: {:#}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(_) => break,
        }
    }

    Ok(())
}

/// Paths whose changes feed the page
struct WatchFilter {
    source_dir: PathBuf,
    config_path: PathBuf,
    catalog_path: PathBuf,
}

impl WatchFilter {
    /// Watcher events carry canonical paths, so anchor on the canonical base
    fn new(folio: &Folio) -> Self {
        let base = folio
            .base_dir
            .canonicalize()
            .unwrap_or_else(|_| folio.base_dir.clone());
        Self {
            source_dir: base.join(&folio.config.source_dir),
            config_path: base.join(crate::CONFIG_FILE),
            catalog_path: base.join(&folio.config.catalog),
        }
    }

    fn is_relevant(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        if path_str.contains(".git")
            || path_str.contains(".DS_Store")
            || path_str.ends_with('~')
            || path_str.ends_with(".swp")
        {
            return false;
        }

        path.starts_with(&self.source_dir) || path == self.config_path || path == self.catalog_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_second_run_is_skipped() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        assert_eq!(run_with_options(&folio, false).unwrap(), Outcome::Generated);
        assert_eq!(run_with_options(&folio, false).unwrap(), Outcome::Unchanged);
        assert_eq!(run_with_options(&folio, true).unwrap(), Outcome::Generated);
    }

    #[test]
    fn test_catalog_change_triggers_generation() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        run_with_options(&folio, false).unwrap();

        fs::write(
            &folio.catalog_path,
            "skills:\n  - title: Systems\n    icon: code\n    skills: [Rust]\n",
        )
        .unwrap();
        assert_eq!(run_with_options(&folio, false).unwrap(), Outcome::Generated);

        let html = fs::read_to_string(folio.public_dir.join("index.html")).unwrap();
        assert!(html.contains("Systems"));
        assert!(!html.contains("project-card"));
    }

    #[test]
    fn test_config_change_reaches_page_and_cache() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("_config.yml"), "author: Old Name\n").unwrap();
        let (_, first) = regenerate(dir.path()).unwrap();
        assert_eq!(first, Outcome::Generated);

        fs::write(dir.path().join("_config.yml"), "author: New Name\n").unwrap();
        let (folio, second) = regenerate(dir.path()).unwrap();
        assert_eq!(second, Outcome::Generated);

        let index = folio.public_dir.join("index.html");
        let html = fs::read_to_string(&index).unwrap();
        assert!(html.contains("New Name"));
        assert!(!html.contains("Old Name"));

        // A later plain generate agrees the page is current
        let fresh = Folio::new(dir.path()).unwrap();
        assert_eq!(run_with_options(&fresh, false).unwrap(), Outcome::Unchanged);
        assert!(fs::read_to_string(&index).unwrap().contains("New Name"));
    }

    #[test]
    fn test_new_year_regenerates_footer() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();

        assert_eq!(run_for_year(&folio, false, 2024).unwrap(), Outcome::Generated);
        assert_eq!(run_for_year(&folio, false, 2024).unwrap(), Outcome::Unchanged);
        assert_eq!(run_for_year(&folio, false, 2025).unwrap(), Outcome::Generated);

        let html = fs::read_to_string(folio.public_dir.join("index.html")).unwrap();
        assert!(html.contains("&copy; 2025"));
    }

    #[test]
    fn test_invalid_catalog_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        fs::write(
            &folio.catalog_path,
            r##"
social_links:
  - { id: a, target_url: "", icon: github, icon_color: "#000", hover_icon_color: "#fff", label: A }
"##,
        )
        .unwrap();

        let err = run_with_options(&folio, false).unwrap_err();
        assert!(err.to_string().contains("Empty target URL"));
        assert!(!folio.public_dir.exists());
    }

    #[test]
    fn test_deleted_output_regenerates() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        run_with_options(&folio, false).unwrap();

        fs::remove_dir_all(&folio.public_dir).unwrap();
        assert_eq!(run_with_options(&folio, false).unwrap(), Outcome::Generated);
    }

    #[test]
    fn test_watch_filter() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let filter = WatchFilter::new(&folio);
        let base = dir.path().canonicalize().unwrap();

        // Catalog absent at startup still counts once created
        assert!(!folio.catalog_path.exists());
        assert!(filter.is_relevant(&base.join("_catalog.yml")));
        assert!(filter.is_relevant(&base.join("_config.yml")));
        assert!(filter.is_relevant(&base.join("source/img/avatar.jpeg")));

        assert!(!filter.is_relevant(&base.join("public/index.html")));
        assert!(!filter.is_relevant(&base.join(".folio-cache/build.json")));
        assert!(!filter.is_relevant(&base.join("_config.yml~")));
        assert!(!filter.is_relevant(&base.join("source/.avatar.jpeg.swp")));
        assert!(!filter.is_relevant(&base.join("notes.txt")));
    }
}
