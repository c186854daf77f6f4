//! Inline SVG icons
//!
//! Stroke icons on a 24x24 grid. The stroke color is the only thing that
//! changes between renders of the same icon.

use crate::catalog::IconRef;
use crate::helpers::html_escape;

fn paths(icon: IconRef) -> &'static str {
    match icon {
        IconRef::Github => concat!(
            r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
            r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#
        ),
        IconRef::Linkedin => concat!(
            r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
            r#"<rect width="4" height="12" x="2" y="9"/>"#,
            r#"<circle cx="4" cy="4" r="2"/>"#
        ),
        IconRef::Instagram => concat!(
            r#"<rect width="20" height="20" x="2" y="2" rx="5" ry="5"/>"#,
            r#"<path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/>"#,
            r#"<line x1="17.5" x2="17.51" y1="6.5" y2="6.5"/>"#
        ),
        IconRef::Twitter => {
            r#"<path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"/>"#
        }
        IconRef::Code => concat!(
            r#"<polyline points="16 18 22 12 16 6"/>"#,
            r#"<polyline points="8 6 2 12 8 18"/>"#
        ),
        IconRef::Layers => concat!(
            r#"<path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z"/>"#,
            r#"<path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65"/>"#,
            r#"<path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65"/>"#
        ),
        IconRef::Database => concat!(
            r#"<ellipse cx="12" cy="5" rx="9" ry="3"/>"#,
            r#"<path d="M3 5V19A9 3 0 0 0 21 19V5"/>"#,
            r#"<path d="M3 12A9 3 0 0 0 21 12"/>"#
        ),
        IconRef::Smartphone => concat!(
            r#"<rect width="14" height="20" x="5" y="2" rx="2" ry="2"/>"#,
            r#"<path d="M12 18h.01"/>"#
        ),
        IconRef::ArrowUpRight => concat!(r#"<path d="M7 7h10v10"/>"#, r#"<path d="M7 17 17 7"/>"#),
    }
}

/// Render an icon with the given pixel size and stroke color
///
/// # Examples
/// ```ignore
/// svg(IconRef::Github, 24, "#f0f0f0") // -> <svg ... stroke="#f0f0f0" ...>...</svg>
/// ```
pub fn svg(icon: IconRef, size: u32, color: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="icon icon-{name}" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="{color}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{paths}</svg>"#,
        name = icon.name(),
        size = size,
        color = html_escape(color),
        paths = paths(icon),
    )
}

/// Render an icon that inherits the surrounding text color
pub fn svg_current(icon: IconRef, size: u32) -> String {
    svg(icon, size, "currentColor")
}
