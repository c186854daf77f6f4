//! Skill group card

use serde::Serialize;

use super::icons;
use super::Card;
use crate::catalog::SkillGroupEntry;
use crate::helpers::Helpers;

pub struct SkillGroupCard<'a> {
    entry: &'a SkillGroupEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillGroupView {
    pub title: String,
    pub icon: String,
    pub chips: Vec<String>,
}

impl<'a> SkillGroupCard<'a> {
    pub fn new(entry: &'a SkillGroupEntry) -> Self {
        Self { entry }
    }
}

impl<'a> Card for SkillGroupCard<'a> {
    type View = SkillGroupView;

    fn view(&self, _helpers: &Helpers) -> SkillGroupView {
        SkillGroupView {
            title: self.entry.title.clone(),
            icon: icons::svg_current(self.entry.icon, 24),
            // Input order, duplicates kept
            chips: self.entry.skills.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconRef;
    use crate::config::SiteConfig;

    #[test]
    fn test_chips_keep_order_and_duplicates() {
        let entry = SkillGroupEntry {
            title: "Backend".to_string(),
            icon: IconRef::Layers,
            skills: vec!["Rust".to_string(), "Go".to_string(), "Rust".to_string()],
        };
        let view = SkillGroupCard::new(&entry).view(&Helpers::new(SiteConfig::default()));
        assert_eq!(view.chips, vec!["Rust", "Go", "Rust"]);
    }

    #[test]
    fn test_empty_skills() {
        let entry = SkillGroupEntry {
            title: "Nothing yet".to_string(),
            icon: IconRef::Smartphone,
            skills: vec![],
        };
        let view = SkillGroupCard::new(&entry).view(&Helpers::new(SiteConfig::default()));
        assert_eq!(view.title, "Nothing yet");
        assert!(view.icon.contains("icon-smartphone"));
        assert!(view.chips.is_empty());
    }
}
