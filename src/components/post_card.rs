//! Post teaser card

use serde::Serialize;

use super::Card;
use crate::catalog::PostEntry;
use crate::helpers::{opens_new_tab, Helpers};

/// A link card for one post
///
/// The snippet is clamped by the stylesheet; `content` itself is never
/// shortened.
pub struct PostCard<'a> {
    entry: &'a PostEntry,
    line_clamp: u8,
}

/// Rendered post card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostCardView {
    pub href: String,
    pub new_tab: bool,
    pub title: String,
    pub date: String,
    pub content: Option<String>,
    pub line_clamp: u8,
}

impl<'a> PostCard<'a> {
    pub fn new(entry: &'a PostEntry, line_clamp: u8) -> Self {
        Self { entry, line_clamp }
    }
}

impl<'a> Card for PostCard<'a> {
    type View = PostCardView;

    fn view(&self, _helpers: &Helpers) -> PostCardView {
        PostCardView {
            href: self.entry.target_url.clone(),
            new_tab: opens_new_tab(&self.entry.target_url),
            title: self.entry.title.clone(),
            date: self.entry.date.clone(),
            content: self.entry.content.clone(),
            line_clamp: self.line_clamp,
        }
    }
}
