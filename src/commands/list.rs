//! List catalog content

use anyhow::Result;

use crate::catalog::Catalog;
use crate::Folio;

/// List catalog entries by type
pub fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let catalog = folio.load_catalog()?;
    print!("{}", format_listing(&catalog, content_type)?);
    Ok(())
}

/// Format catalog entries of one kind, one per line
pub fn format_listing(catalog: &Catalog, content_type: &str) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "link" | "links" | "social" => {
            out.push_str(&format!("Social links ({}):\n", catalog.social_links.len()));
            for link in &catalog.social_links {
                out.push_str(&format!(
                    "  {} - {} [{}]\n",
                    link.id, link.label, link.target_url
                ));
            }
        }
        "project" | "projects" => {
            let featured = catalog.featured_project();
            out.push_str(&format!("Projects ({}):\n", catalog.projects.len()));
            for (index, project) in catalog.projects.iter().enumerate() {
                let marker = if Some(index) == featured { " *" } else { "" };
                out.push_str(&format!(
                    "  {}{} [{}]\n",
                    project.title, marker, project.target_url
                ));
            }
        }
        "post" | "posts" => {
            out.push_str(&format!("Posts ({}):\n", catalog.posts.len()));
            for post in &catalog.posts {
                out.push_str(&format!("  {} - {}\n", post.date, post.title));
            }
        }
        "skill" | "skills" => {
            out.push_str(&format!("Skill groups ({}):\n", catalog.skills.len()));
            for group in &catalog.skills {
                out.push_str(&format!(
                    "  {} ({}): {}\n",
                    group.title,
                    group.icon,
                    group.skills.join(", ")
                ));
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: links, projects, posts, skills",
                content_type
            );
        }
    }

    Ok(out)
}
