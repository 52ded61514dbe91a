//! Section and sub-fact definitions.

use serde::{Deserialize, Serialize};

use super::{Button, ButtonRow};

/// Prefix of the action identifier that opens a section.
pub const SECTION_ACTION_PREFIX: &str = "section_";

/// A top-level topic: intro, key facts and sub-topic buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactSection {
    pub key: String,
    pub title: String,

    /// Shorter label used on the main menu. Falls back to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_label: Option<String>,

    pub emoji: String,

    /// Accent color as `#rrggbb`.
    pub color: String,

    pub intro: String,

    /// Key facts in display order. May contain emphasis markup.
    pub facts: Vec<String>,

    /// Rows of buttons leading to sub-facts.
    #[serde(default)]
    pub sub_buttons: Vec<ButtonRow>,
}

impl FactSection {
    /// Create a new section with no facts or buttons.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        emoji: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            menu_label: None,
            emoji: emoji.into(),
            color: color.into(),
            intro: String::new(),
            facts: Vec::new(),
            sub_buttons: Vec::new(),
        }
    }

    /// Set the main menu label.
    pub fn with_menu_label(mut self, label: impl Into<String>) -> Self {
        self.menu_label = Some(label.into());
        self
    }

    /// Set the intro text.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    /// Add a fact.
    pub fn with_fact(mut self, fact: impl Into<String>) -> Self {
        self.facts.push(fact.into());
        self
    }

    /// Add a row of sub-topic buttons.
    pub fn with_button_row(mut self, row: ButtonRow) -> Self {
        self.sub_buttons.push(row);
        self
    }

    /// Title prefixed with the section emoji, e.g. "🌿 Биосфера".
    pub fn heading(&self) -> String {
        format!("{} {}", self.emoji, self.title)
    }

    /// Action identifier that opens this section.
    pub fn action(&self) -> String {
        format!("{}{}", SECTION_ACTION_PREFIX, self.key)
    }

    /// Button that opens this section from the main menu.
    pub fn menu_button(&self) -> Button {
        let label = self.menu_label.as_deref().unwrap_or(&self.title);
        Button::new(label, self.action()).with_emoji(self.emoji.as_str())
    }

    /// Iterate over every sub-topic button in row order.
    pub fn sub_actions(&self) -> impl Iterator<Item = &Button> {
        self.sub_buttons.iter().flatten()
    }
}

/// A leaf detail entry reachable from a section button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubFact {
    /// Matches the action of the button that opens it.
    pub key: String,

    /// Emoji-prefixed title, e.g. "🦁 Животный мир".
    pub title: String,

    /// Body text. May contain emphasis markup.
    pub text: String,
}

impl SubFact {
    pub fn new(key: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_section() -> FactSection {
        FactSection::new("history", "История Земли", "⏳", "#fb923c")
            .with_menu_label("История")
            .with_intro("История Земли насчитывает около 4,54 миллиарда лет.")
            .with_fact("Возраст Земли — **4,54 ± 0,05 миллиарда лет**")
            .with_button_row(vec![
                Button::new("Эра динозавров", "hist_dino").with_emoji("🦕"),
                Button::new("Ледниковые периоды", "hist_ice").with_emoji("❄️"),
            ])
    }

    #[test]
    fn test_section_builder() {
        let section = sample_section();
        assert_eq!(section.facts.len(), 1);
        assert_eq!(section.sub_buttons.len(), 1);
        assert!(!section.intro.is_empty());
    }

    #[test]
    fn test_section_heading_and_action() {
        let section = sample_section();
        assert_eq!(section.heading(), "⏳ История Земли");
        assert_eq!(section.action(), "section_history");
    }

    #[test]
    fn test_menu_button_prefers_menu_label() {
        let section = sample_section();
        let button = section.menu_button();
        assert_eq!(button.label, "История");
        assert_eq!(button.action, "section_history");
        assert_eq!(button.emoji.as_deref(), Some("⏳"));

        let plain = FactSection::new("climate", "Климат", "🌡️", "#f43f5e");
        assert_eq!(plain.menu_button().label, "Климат");
    }

    #[test]
    fn test_sub_actions_flatten_rows() {
        let section = sample_section().with_button_row(vec![Button::new("Появление человека", "hist_human")]);
        let actions: Vec<_> = section.sub_actions().map(|b| b.action.as_str()).collect();
        assert_eq!(actions, vec!["hist_dino", "hist_ice", "hist_human"]);
    }
}
