//! The fact corpus - the immutable content store shared by every session.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::error::{CorpusError, Result};
use crate::sections::{FactSection, SubFact};

/// On-disk shape of a corpus file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorpusFile {
    #[serde(default)]
    pub sections: Vec<FactSection>,
    #[serde(default)]
    pub sub_facts: Vec<SubFact>,
}

/// Sections and sub-facts in declaration order, with key lookups.
///
/// A corpus is validated once on construction and never mutated afterwards,
/// so it can be shared freely between sessions.
#[derive(Debug, Clone)]
pub struct FactCorpus {
    sections: Vec<FactSection>,
    sub_facts: Vec<SubFact>,
    section_index: HashMap<String, usize>,
    sub_fact_index: HashMap<String, usize>,
}

impl FactCorpus {
    /// The bundled Earth encyclopedia.
    pub fn builtin() -> Self {
        let file = builtin::corpus_file();
        Self::index(file.sections, file.sub_facts)
    }

    /// Build a corpus from sections and sub-facts, validating keys and links.
    pub fn from_parts(sections: Vec<FactSection>, sub_facts: Vec<SubFact>) -> Result<Self> {
        if sections.is_empty() {
            return Err(CorpusError::Empty);
        }

        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.key.as_str()) {
                return Err(CorpusError::DuplicateSection(section.key.clone()));
            }
        }

        let mut sub_keys = HashSet::new();
        for sub in &sub_facts {
            if !sub_keys.insert(sub.key.as_str()) {
                return Err(CorpusError::DuplicateSubFact(sub.key.clone()));
            }
        }

        for section in &sections {
            if let Some(button) = section
                .sub_actions()
                .find(|b| !sub_keys.contains(b.action.as_str()))
            {
                return Err(CorpusError::DanglingButton {
                    section: section.key.clone(),
                    action: button.action.clone(),
                });
            }
        }

        Ok(Self::index(sections, sub_facts))
    }

    /// Parse a corpus from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: CorpusFile = toml::from_str(text)?;
        Self::from_parts(file.sections, file.sub_facts)
    }

    /// Load a corpus from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn index(sections: Vec<FactSection>, sub_facts: Vec<SubFact>) -> Self {
        let section_index = sections
            .iter()
            .enumerate()
            .map(|(i, s)| (s.key.clone(), i))
            .collect();
        let sub_fact_index = sub_facts
            .iter()
            .enumerate()
            .map(|(i, s)| (s.key.clone(), i))
            .collect();

        Self {
            sections,
            sub_facts,
            section_index,
            sub_fact_index,
        }
    }

    /// All sections in declaration order.
    pub fn sections(&self) -> &[FactSection] {
        &self.sections
    }

    /// All sub-facts in declaration order.
    pub fn sub_facts(&self) -> &[SubFact] {
        &self.sub_facts
    }

    /// Look up a section by key.
    pub fn section(&self, key: &str) -> Option<&FactSection> {
        self.section_index.get(key).map(|&i| &self.sections[i])
    }

    /// Look up a sub-fact by key.
    pub fn sub_fact(&self, key: &str) -> Option<&SubFact> {
        self.sub_fact_index.get(key).map(|&i| &self.sub_facts[i])
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn sub_fact_count(&self) -> usize {
        self.sub_facts.len()
    }
}

impl Default for FactCorpus {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::Button;

    #[test]
    fn test_builtin_shape() {
        let corpus = FactCorpus::builtin();
        assert_eq!(corpus.section_count(), 6);
        assert_eq!(corpus.sub_fact_count(), 24);

        let keys: Vec<_> = corpus.sections().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["biosphere", "hydrosphere", "history", "atmosphere", "geology", "climate"]
        );

        for section in corpus.sections() {
            assert_eq!(section.facts.len(), 5);
            assert_eq!(section.sub_actions().count(), 4);
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let corpus = FactCorpus::builtin();
        let rebuilt =
            FactCorpus::from_parts(corpus.sections().to_vec(), corpus.sub_facts().to_vec());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_lookup() {
        let corpus = FactCorpus::builtin();
        let section = corpus.section("biosphere").unwrap();
        assert_eq!(section.title, "Биосфера");
        assert_eq!(section.color, "#4ade80");

        let sub = corpus.sub_fact("bio_animals").unwrap();
        assert_eq!(sub.title, "🦁 Животный мир");
        assert!(sub.text.contains("синий кит"));

        assert!(corpus.section("moon").is_none());
        assert!(corpus.sub_fact("section_biosphere").is_none());
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let sections = vec![
            FactSection::new("a", "A", "🅰️", "#000000"),
            FactSection::new("a", "A again", "🅰️", "#000000"),
        ];
        let err = FactCorpus::from_parts(sections, vec![]).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateSection(k) if k == "a"));
    }

    #[test]
    fn test_duplicate_sub_fact_rejected() {
        let sections = vec![FactSection::new("a", "A", "🅰️", "#000000")];
        let subs = vec![SubFact::new("x", "X", "one"), SubFact::new("x", "X", "two")];
        let err = FactCorpus::from_parts(sections, subs).unwrap_err();
        assert!(matches!(err, CorpusError::DuplicateSubFact(k) if k == "x"));
    }

    #[test]
    fn test_dangling_button_rejected() {
        let sections = vec![FactSection::new("a", "A", "🅰️", "#000000")
            .with_button_row(vec![Button::new("Missing", "nowhere")])];
        let err = FactCorpus::from_parts(sections, vec![]).unwrap_err();
        assert!(matches!(err, CorpusError::DanglingButton { action, .. } if action == "nowhere"));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            FactCorpus::from_parts(vec![], vec![]),
            Err(CorpusError::Empty)
        ));
    }

    #[test]
    fn test_from_toml_str() {
        let text = r##"
[[sections]]
key = "moon"
title = "Луна"
emoji = "🌕"
color = "#e5e7eb"
intro = "Естественный спутник Земли."
facts = ["Радиус Луны — **1 737 км**"]
sub_buttons = [[{ label = "Приливы", action = "moon_tides", emoji = "🌊" }]]

[[sub_facts]]
key = "moon_tides"
title = "🌊 Приливы"
text = "Луна вызывает приливы."
"##;
        let corpus = FactCorpus::from_toml_str(text).unwrap();
        assert_eq!(corpus.section_count(), 1);
        let moon = corpus.section("moon").unwrap();
        assert!(moon.menu_label.is_none());
        assert_eq!(moon.sub_buttons[0][0].emoji.as_deref(), Some("🌊"));
        assert_eq!(corpus.sub_fact("moon_tides").unwrap().text, "Луна вызывает приливы.");
    }

    #[test]
    fn test_from_toml_str_parse_error() {
        let err = FactCorpus::from_toml_str("[[sections]]\nkey = 1").unwrap_err();
        assert!(matches!(err, CorpusError::Parse(_)));
    }
}
