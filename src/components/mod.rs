//! Presentational cards
//!
//! Each card wraps one catalog entry and produces a serializable view that
//! the templates turn into markup. Only `SocialLinkCard` carries state.

mod hover;
pub mod icons;
mod post_card;
mod project_card;
mod skill_group;
mod social_link;

use serde::Serialize;

use crate::helpers::Helpers;

pub use hover::HoverState;
pub use post_card::{PostCard, PostCardView};
pub use project_card::{ImageSizing, ProjectCard, ProjectCardView};
pub use skill_group::{SkillGroupCard, SkillGroupView};
pub use social_link::{FooterLinkView, SocialLinkCard, SocialLinkView};

/// A renderable card
pub trait Card {
    type View: Serialize;

    /// Build the view for the card's current state
    fn view(&self, helpers: &Helpers) -> Self::View;
}
