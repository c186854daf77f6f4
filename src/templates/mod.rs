//! Built-in portfolio templates using Tera template engine
//!
//! Templates, the stylesheet and the hover script are embedded directly in
//! the binary, so a site needs nothing but its config and catalog.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::catalog::IconRef;
use crate::components::icons;
use crate::composer::PageView;
use crate::helpers;

/// Stylesheet written to `css/style.css`
pub const STYLESHEET: &str = include_str!("portfolio/assets/style.css");

/// Hover script written to `js/hover.js`
pub const HOVER_SCRIPT: &str = include_str!("portfolio/assets/hover.js");

/// Template renderer with the embedded portfolio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all portfolio templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Catalog text is escaped; prebuilt icon markup is marked `safe`
        tera.autoescape_on(vec![".html"]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("portfolio/layout.html")),
            ("index.html", include_str!("portfolio/index.html")),
            // Sections
            (
                "partials/hero.html",
                include_str!("portfolio/partials/hero.html"),
            ),
            (
                "partials/skills.html",
                include_str!("portfolio/partials/skills.html"),
            ),
            (
                "partials/projects.html",
                include_str!("portfolio/partials/projects.html"),
            ),
            (
                "partials/posts.html",
                include_str!("portfolio/partials/posts.html"),
            ),
            (
                "partials/footer.html",
                include_str!("portfolio/partials/footer.html"),
            ),
            // Cards
            (
                "cards/social_link.html",
                include_str!("portfolio/cards/social_link.html"),
            ),
            (
                "cards/project_card.html",
                include_str!("portfolio/cards/project_card.html"),
            ),
            (
                "cards/post_card.html",
                include_str!("portfolio/cards/post_card.html"),
            ),
            (
                "cards/skill_card.html",
                include_str!("portfolio/cards/skill_card.html"),
            ),
        ])?;

        // Register custom filters
        tera.register_filter("icon", icon_filter);
        tera.register_filter("truncate_chars", truncate_chars_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the full page
    pub fn render_page(&self, page: &PageView) -> Result<String> {
        let context = Context::from_serialize(page)?;
        self.render("index.html", &context)
    }
}

/// Tera filter: render an icon name as inline SVG
///
/// `{{ "arrow-up-right" | icon(size=16) | safe }}`
fn icon_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let name = tera::try_get_value!("icon", "value", String, value);
    let icon: IconRef = serde_json::from_value(tera::Value::String(name.clone()))
        .map_err(|_| tera::Error::msg(format!("Unknown icon: {}", name)))?;
    let size = match args.get("size") {
        Some(val) => tera::try_get_value!("icon", "size", u32, val),
        None => 24,
    };
    let color = match args.get("color") {
        Some(val) => tera::try_get_value!("icon", "color", String, val),
        None => "currentColor".to_string(),
    };

    Ok(tera::Value::String(icons::svg(icon, size, &color)))
}

/// Tera filter: truncate by character count
///
/// `{{ head.description | truncate_chars(length=160) }}`
fn truncate_chars_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("truncate_chars", "value", String, value);
    let length = match args.get("length") {
        Some(val) => tera::try_get_value!("truncate_chars", "length", usize, val),
        None => 150,
    };
    let omission = match args.get("omission") {
        Some(val) => Some(tera::try_get_value!("truncate_chars", "omission", String, val)),
        None => None,
    };

    Ok(tera::Value::String(helpers::truncate(
        &s,
        length,
        omission.as_deref(),
    )))
}
