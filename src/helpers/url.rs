//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/portfolio/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Whether a reference points off-site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://")
        || path.starts_with("https://")
        || path.starts_with("//")
        || path.starts_with("mailto:")
        || path.starts_with("data:")
}

/// Whether a link target should open in a new browsing context
///
/// In-page references (`#`, `#section`) stay in the current page.
pub fn opens_new_tab(target: &str) -> bool {
    !target.starts_with('#')
}

/// Resolve an asset reference, leaving external references untouched
pub fn asset_url(config: &SiteConfig, path: &str) -> String {
    if path.is_empty() || is_external(path) {
        path.to_string()
    } else {
        url_for(config, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/portfolio/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/portfolio/css/style.css");
        assert_eq!(url_for(&config, "about/"), "/portfolio/about/");
        assert_eq!(url_for(&config, ""), "/portfolio/");
    }

    #[test]
    fn test_asset_url() {
        let config = test_config();
        assert_eq!(asset_url(&config, "/wlogo.svg"), "/portfolio/wlogo.svg");
        assert_eq!(
            asset_url(&config, "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(asset_url(&config, ""), "");
    }

    #[test]
    fn test_opens_new_tab() {
        assert!(opens_new_tab("https://github.com/pagimos"));
        assert!(!opens_new_tab("#"));
        assert!(!opens_new_tab("#posts"));
    }
}
