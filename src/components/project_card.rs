//! Project card

use serde::Serialize;

use super::Card;
use crate::catalog::ProjectEntry;
use crate::helpers::{opens_new_tab, Helpers};

/// Image sizing treatment for a project card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSizing {
    Featured,
    #[default]
    Standard,
}

impl ImageSizing {
    pub fn class_name(&self) -> &'static str {
        match self {
            ImageSizing::Featured => "project-image project-image--featured",
            ImageSizing::Standard => "project-image",
        }
    }
}

/// A link card for one project
pub struct ProjectCard<'a> {
    entry: &'a ProjectEntry,
    sizing: ImageSizing,
}

/// Rendered project card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCardView {
    pub dom_id: String,
    pub href: String,
    pub new_tab: bool,
    pub image: String,
    pub image_class: String,
    pub sizing: ImageSizing,
    pub title: String,
    pub description: String,
}

impl<'a> ProjectCard<'a> {
    pub fn new(entry: &'a ProjectEntry, sizing: ImageSizing) -> Self {
        Self { entry, sizing }
    }
}

impl<'a> Card for ProjectCard<'a> {
    type View = ProjectCardView;

    fn view(&self, helpers: &Helpers) -> ProjectCardView {
        ProjectCardView {
            dom_id: format!("project-{}", slug::slugify(&self.entry.title)),
            href: self.entry.target_url.clone(),
            new_tab: opens_new_tab(&self.entry.target_url),
            image: helpers.asset_url(&self.entry.image),
            image_class: self.sizing.class_name().to_string(),
            sizing: self.sizing,
            title: self.entry.title.clone(),
            description: self.entry.description.clone(),
        }
    }
}
