//! Message definitions - entries in the transcript.

use earth_corpus::ButtonRow;
use serde::{Deserialize, Serialize};

/// Identifier of a message within one session.
///
/// Identifiers are allocated by the store in creation order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

/// A structured fact card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub facts: Vec<String>,
    /// Accent color as `#rrggbb`.
    pub color: String,
}

/// The displayable payload of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<ButtonRow>,
}

impl MessageContent {
    /// Plain text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Card content.
    pub fn card(card: Card) -> Self {
        Self {
            card: Some(card),
            ..Self::default()
        }
    }

    /// Attach rows of buttons.
    pub fn with_buttons(mut self, buttons: Vec<ButtonRow>) -> Self {
        self.buttons = buttons;
        self
    }

    /// Append a single row of buttons.
    pub fn with_button_row(mut self, row: ButtonRow) -> Self {
        self.buttons.push(row);
        self
    }
}

/// A message that has not been given an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub sender: Sender,
    pub pending: bool,
    pub content: MessageContent,
}

impl Draft {
    /// A user utterance.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            pending: false,
            content: MessageContent::text(text),
        }
    }

    /// A bot "typing" placeholder with no content.
    pub fn placeholder() -> Self {
        Self {
            sender: Sender::Bot,
            pending: true,
            content: MessageContent::default(),
        }
    }

    /// A complete bot message.
    pub fn bot(content: MessageContent) -> Self {
        Self {
            sender: Sender::Bot,
            pending: false,
            content,
        }
    }
}

/// One entry in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// The reply has not materialized yet.
    #[serde(default)]
    pub pending: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<ButtonRow>,
}

impl Message {
    pub(crate) fn from_draft(id: MessageId, draft: Draft) -> Self {
        let MessageContent {
            text,
            card,
            buttons,
        } = draft.content;

        Self {
            id,
            sender: draft.sender,
            text,
            pending: draft.pending,
            card,
            buttons,
        }
    }

    /// Clear the pending flag and merge in the final content.
    ///
    /// Fields absent from `content` keep their current value.
    pub(crate) fn resolve(&mut self, content: MessageContent) {
        self.pending = false;
        if let Some(text) = content.text {
            self.text = Some(text);
        }
        if let Some(card) = content.card {
            self.card = Some(card);
        }
        if !content.buttons.is_empty() {
            self.buttons = content.buttons;
        }
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// Check the content invariant: a pending message carries neither text nor
    /// card, a settled bot message carries exactly one of them.
    pub fn is_well_formed(&self) -> bool {
        match (self.pending, self.sender) {
            (true, _) => self.text.is_none() && self.card.is_none(),
            (false, Sender::Bot) => self.text.is_some() != self.card.is_some(),
            (false, Sender::User) => self.text.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use earth_corpus::Button;

    #[test]
    fn test_placeholder_is_well_formed() {
        let message = Message::from_draft(MessageId(1), Draft::placeholder());
        assert!(message.pending);
        assert!(message.is_bot());
        assert!(message.is_well_formed());
    }

    #[test]
    fn test_resolve_merges_content() {
        let mut message = Message::from_draft(MessageId(7), Draft::placeholder());
        message.resolve(
            MessageContent::text("Выберите раздел для изучения:")
                .with_button_row(vec![Button::new("Климат", "section_climate")]),
        );

        assert_eq!(message.id, MessageId(7));
        assert!(!message.pending);
        assert_eq!(message.text.as_deref(), Some("Выберите раздел для изучения:"));
        assert_eq!(message.buttons.len(), 1);
        assert!(message.is_well_formed());
    }

    #[test]
    fn test_bot_with_text_and_card_is_malformed() {
        let card = Card {
            title: "t".to_string(),
            subtitle: None,
            facts: vec![],
            color: "#000000".to_string(),
        };
        let mut content = MessageContent::card(card);
        content.text = Some("both".to_string());
        let message = Message::from_draft(MessageId(2), Draft::bot(content));
        assert!(!message.is_well_formed());
    }

    #[test]
    fn test_message_json_shape() {
        let message = Message::from_draft(MessageId(3), Draft::user("🌿 Биосфера"));
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["sender"], "user");
        assert_eq!(json["text"], "🌿 Биосфера");
        assert!(json.get("card").is_none());
        assert!(json.get("buttons").is_none());
    }
}
