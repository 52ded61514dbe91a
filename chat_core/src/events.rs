//! User input events consumed by a session.

use serde::{Deserialize, Serialize};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserEvent {
    /// A button was tapped.
    ButtonPressed { action: String, label: String },

    /// Free text was submitted. Only meaningful in search mode.
    QuerySubmitted { text: String },
}

impl UserEvent {
    pub fn button(action: impl Into<String>, label: impl Into<String>) -> Self {
        UserEvent::ButtonPressed {
            action: action.into(),
            label: label.into(),
        }
    }

    pub fn query(text: impl Into<String>) -> Self {
        UserEvent::QuerySubmitted { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = UserEvent::button("section_geology", "Геология");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"button_pressed\""));

        let back: UserEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
