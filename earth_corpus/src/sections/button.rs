//! Navigation buttons attached to bot messages.

use serde::{Deserialize, Serialize};

/// A tappable button carrying an action identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// One horizontal row of buttons.
pub type ButtonRow = Vec<Button>;

impl Button {
    /// Create a button without an emoji.
    pub fn new(label: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: action.into(),
            emoji: None,
        }
    }

    /// Attach an emoji glyph. An empty glyph leaves the button without one.
    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        let emoji = emoji.into();
        self.emoji = if emoji.is_empty() { None } else { Some(emoji) };
        self
    }

    /// Label prefixed with the emoji, if any.
    pub fn display_label(&self) -> String {
        match &self.emoji {
            Some(emoji) => format!("{} {}", emoji, self.label),
            None => self.label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_creation() {
        let button = Button::new("Ледники", "hydro_glaciers").with_emoji("🧊");
        assert_eq!(button.action, "hydro_glaciers");
        assert_eq!(button.emoji.as_deref(), Some("🧊"));
        assert_eq!(button.display_label(), "🧊 Ледники");
    }

    #[test]
    fn test_empty_emoji_is_none() {
        let button = Button::new("← Главное меню", "back_main").with_emoji("");
        assert!(button.emoji.is_none());
        assert_eq!(button.display_label(), "← Главное меню");
    }
}
