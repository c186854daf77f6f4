//! HTML helper functions

use super::url::{is_external, url_for};
use crate::config::SiteConfig;

/// Resolve a theme asset under `dir/`, appending the extension if missing
fn theme_asset(config: &SiteConfig, dir: &str, ext: &str, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    let file = path.trim_start_matches('/');
    if file.ends_with(ext) {
        url_for(config, &format!("{}/{}", dir, file))
    } else {
        url_for(config, &format!("{}/{}{}", dir, file, ext))
    }
}

/// Stylesheet link tag, e.g. `css(&config, "style")` gives
/// `<link rel="stylesheet" href="/css/style.css">`
pub fn css(config: &SiteConfig, path: &str) -> String {
    let href = theme_asset(config, "css", ".css", path);
    format!(r#"<link rel="stylesheet" href="{}">"#, html_escape(&href))
}

/// Deferred script tag for a file under `js/`
pub fn js(config: &SiteConfig, path: &str) -> String {
    let src = theme_asset(config, "js", ".js", path);
    format!(r#"<script src="{}" defer></script>"#, html_escape(&src))
}

/// Generate meta generator tag
pub fn meta_generator() -> String {
    format!(
        r#"<meta name="generator" content="folio-rs {}">"#,
        env!("CARGO_PKG_VERSION")
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}
