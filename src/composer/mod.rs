//! Page composer
//!
//! Projects every catalog sequence through its card, one card per entry in
//! entry order, and assembles the hero, skills, projects, posts and footer
//! sections into a `PageView`. Composing is pure: the same catalog and
//! composer always produce an equal view.

use chrono::Datelike;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::components::{
    Card, FooterLinkView, ImageSizing, PostCard, PostCardView, ProjectCard,
    ProjectCardView, SkillGroupCard, SkillGroupView, SocialLinkCard, SocialLinkView,
};
use crate::config::SiteConfig;
use crate::helpers::{meta_generator, opens_new_tab, Helpers};

/// The whole page, ready for the template renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub head: HeadView,
    pub hero: HeroView,
    pub skills: SectionView<SkillGroupView>,
    pub projects: SectionView<ProjectCardView>,
    pub posts: PostsSectionView,
    pub footer: FooterView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadView {
    pub title: String,
    pub language: String,
    pub description: String,
    pub stylesheet: String,
    pub script: String,
    pub generator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub avatar: String,
    pub social_links: Vec<SocialLinkView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView<T> {
    pub id: String,
    pub heading: String,
    pub cards: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostsSectionView {
    pub id: String,
    pub heading: String,
    pub cards: Vec<PostCardView>,
    pub view_all_url: String,
    pub view_all_new_tab: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterView {
    pub name: String,
    pub role: String,
    pub year: i32,
    pub links: Vec<FooterLinkView>,
}

/// Assembles a `PageView` from a catalog
pub struct PageComposer {
    helpers: Helpers,
    year: i32,
}

impl PageComposer {
    /// Create a composer with the footer year taken from the local clock
    pub fn new(config: SiteConfig) -> Self {
        Self::with_year(config, chrono::Local::now().year())
    }

    pub fn with_year(config: SiteConfig, year: i32) -> Self {
        Self {
            helpers: Helpers::new(config),
            year,
        }
    }

    fn config(&self) -> &SiteConfig {
        self.helpers.config()
    }

    /// Compose the page
    pub fn compose(&self, catalog: &Catalog) -> PageView {
        let social_cards: Vec<SocialLinkCard> =
            catalog.social_links.iter().map(SocialLinkCard::new).collect();

        PageView {
            head: self.head(),
            hero: self.hero(&social_cards),
            skills: self.skills(catalog),
            projects: self.projects(catalog),
            posts: self.posts(catalog),
            footer: self.footer(&social_cards),
        }
    }

    fn head(&self) -> HeadView {
        let config = self.config();
        HeadView {
            title: config.title.clone(),
            language: config.language.clone(),
            description: config.bio.clone(),
            stylesheet: self.helpers.css("style"),
            script: self.helpers.js("hover"),
            generator: meta_generator(),
        }
    }

    fn hero(&self, social_cards: &[SocialLinkCard]) -> HeroView {
        let config = self.config();
        HeroView {
            name: config.author.clone(),
            role: config.role.clone(),
            bio: config.bio.clone(),
            avatar: self.helpers.asset_url(&config.avatar),
            social_links: social_cards
                .iter()
                .map(|card| card.view(&self.helpers))
                .collect(),
        }
    }

    fn skills(&self, catalog: &Catalog) -> SectionView<SkillGroupView> {
        SectionView {
            id: "skills".to_string(),
            heading: self.config().sections.skills.clone(),
            cards: catalog
                .skills
                .iter()
                .map(|entry| SkillGroupCard::new(entry).view(&self.helpers))
                .collect(),
        }
    }

    fn projects(&self, catalog: &Catalog) -> SectionView<ProjectCardView> {
        let featured = catalog.featured_project();
        SectionView {
            id: "projects".to_string(),
            heading: self.config().sections.projects.clone(),
            cards: catalog
                .projects
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let sizing = if Some(index) == featured {
                        ImageSizing::Featured
                    } else {
                        ImageSizing::Standard
                    };
                    ProjectCard::new(entry, sizing).view(&self.helpers)
                })
                .collect(),
        }
    }

    fn posts(&self, catalog: &Catalog) -> PostsSectionView {
        let config = self.config();
        PostsSectionView {
            id: "posts".to_string(),
            heading: config.sections.posts.clone(),
            cards: catalog
                .posts
                .iter()
                .map(|entry| PostCard::new(entry, config.posts.line_clamp).view(&self.helpers))
                .collect(),
            view_all_url: config.posts.view_all_url.clone(),
            view_all_new_tab: opens_new_tab(&config.posts.view_all_url),
        }
    }

    fn footer(&self, social_cards: &[SocialLinkCard]) -> FooterView {
        let config = self.config();
        FooterView {
            name: config.author.clone(),
            role: config.role.clone(),
            year: self.year,
            links: social_cards.iter().map(|card| card.footer_view()).collect(),
        }
    }
}
