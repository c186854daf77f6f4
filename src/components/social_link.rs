//! Social link card

use serde::Serialize;

use super::hover::HoverState;
use super::icons;
use super::Card;
use crate::catalog::SocialLinkEntry;
use crate::helpers::{opens_new_tab, Helpers};

const ICON_SIZE: u32 = 24;
const FOOTER_ICON_SIZE: u32 = 18;

type Callback<'a> = Box<dyn FnMut() + 'a>;

/// A social link with a hover-dependent icon color
///
/// The card owns its hover flag. `on_enter` and `on_leave` are invoked on
/// every pointer event alongside the flag transition.
pub struct SocialLinkCard<'a> {
    entry: &'a SocialLinkEntry,
    label: String,
    hover: HoverState,
    on_enter: Callback<'a>,
    on_leave: Callback<'a>,
}

/// Rendered social link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLinkView {
    pub id: String,
    pub href: String,
    pub label: String,
    pub new_tab: bool,
    pub hovered: bool,
    pub icon: String,
    pub icon_color: String,
    pub hover_icon_color: String,
    pub hover_background: String,
}

/// Icon-only link used in the footer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterLinkView {
    pub id: String,
    pub href: String,
    pub label: String,
    pub new_tab: bool,
    pub icon: String,
}

impl<'a> SocialLinkCard<'a> {
    /// Create a card labelled with the entry's own label and no-op callbacks
    pub fn new(entry: &'a SocialLinkEntry) -> Self {
        Self {
            entry,
            label: entry.label.clone(),
            hover: HoverState::default(),
            on_enter: Box::new(|| {}),
            on_leave: Box::new(|| {}),
        }
    }

    /// Replace the child label content
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn on_enter<F: FnMut() + 'a>(mut self, f: F) -> Self {
        self.on_enter = Box::new(f);
        self
    }

    pub fn on_leave<F: FnMut() + 'a>(mut self, f: F) -> Self {
        self.on_leave = Box::new(f);
        self
    }

    pub fn pointer_enter(&mut self) {
        self.hover = self.hover.enter();
        (self.on_enter)();
    }

    pub fn pointer_leave(&mut self) {
        self.hover = self.hover.leave();
        (self.on_leave)();
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    /// Icon color for the current hover state
    pub fn icon_color(&self) -> &str {
        if self.hover.is_hovered() {
            &self.entry.hover_icon_color
        } else {
            &self.entry.icon_color
        }
    }

    /// Footer rendering, always in the default icon color
    pub fn footer_view(&self) -> FooterLinkView {
        FooterLinkView {
            id: self.entry.id.clone(),
            href: self.entry.target_url.clone(),
            label: self.label.clone(),
            new_tab: opens_new_tab(&self.entry.target_url),
            icon: icons::svg(self.entry.icon, FOOTER_ICON_SIZE, &self.entry.icon_color),
        }
    }
}

impl<'a> Card for SocialLinkCard<'a> {
    type View = SocialLinkView;

    fn view(&self, _helpers: &Helpers) -> SocialLinkView {
        SocialLinkView {
            id: self.entry.id.clone(),
            href: self.entry.target_url.clone(),
            label: self.label.clone(),
            new_tab: opens_new_tab(&self.entry.target_url),
            hovered: self.hover.is_hovered(),
            icon: icons::svg(self.entry.icon, ICON_SIZE, self.icon_color()),
            icon_color: self.entry.icon_color.clone(),
            hover_icon_color: self.entry.hover_icon_color.clone(),
            hover_background: self.entry.hover_background.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::config::SiteConfig;
    use std::cell::Cell;

    fn helpers() -> Helpers {
        Helpers::new(SiteConfig::default())
    }

    #[test]
    fn test_idle_uses_icon_color() {
        let catalog = Catalog::builtin();
        for entry in &catalog.social_links {
            let card = SocialLinkCard::new(entry);
            assert_eq!(card.icon_color(), entry.icon_color);
            let view = card.view(&helpers());
            assert!(!view.hovered);
            assert!(view.icon.contains(&format!(r#"stroke="{}""#, entry.icon_color)));
        }
    }

    #[test]
    fn test_enter_then_leave_swaps_color() {
        let catalog = Catalog::builtin();
        for entry in &catalog.social_links {
            let mut card = SocialLinkCard::new(entry);

            card.pointer_enter();
            assert_eq!(card.icon_color(), entry.hover_icon_color);
            let view = card.view(&helpers());
            assert!(view.hovered);
            assert!(view
                .icon
                .contains(&format!(r#"stroke="{}""#, entry.hover_icon_color)));

            card.pointer_leave();
            assert_eq!(card.icon_color(), entry.icon_color);
        }
    }

    #[test]
    fn test_enter_twice_same_as_once() {
        let catalog = Catalog::builtin();
        let entry = &catalog.social_links[1];

        let mut once = SocialLinkCard::new(entry);
        once.pointer_enter();
        let mut twice = SocialLinkCard::new(entry);
        twice.pointer_enter();
        twice.pointer_enter();

        assert_eq!(once.hover_state(), twice.hover_state());
        assert_eq!(once.view(&helpers()), twice.view(&helpers()));
    }

    #[test]
    fn test_callbacks_invoked() {
        let catalog = Catalog::builtin();
        let entered = Cell::new(0);
        let left = Cell::new(0);

        let mut card = SocialLinkCard::new(&catalog.social_links[0])
            .on_enter(|| entered.set(entered.get() + 1))
            .on_leave(|| left.set(left.get() + 1));

        card.pointer_enter();
        card.pointer_enter();
        card.pointer_leave();
        drop(card);

        assert_eq!(entered.get(), 2);
        assert_eq!(left.get(), 1);
    }

    #[test]
    fn test_label_and_footer_view() {
        let catalog = Catalog::builtin();
        let entry = &catalog.social_links[2];
        let mut card = SocialLinkCard::new(entry).with_label("Insta");
        card.pointer_enter();

        assert_eq!(card.view(&helpers()).label, "Insta");
        let footer = card.footer_view();
        assert!(footer.new_tab);
        assert!(footer
            .icon
            .contains(&format!(r#"stroke="{}""#, entry.icon_color)));
    }
}
