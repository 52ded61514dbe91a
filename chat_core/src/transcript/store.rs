//! Message Store - the ordered transcript of one session.

use serde::Serialize;
use tracing::trace;

use super::{Draft, Message, MessageContent, MessageId};

/// Append-only transcript whose pending entries can be finalized in place.
///
/// The store owns its identifier counter, so two sessions never share state.
#[derive(Debug, Clone, Serialize)]
pub struct MessageStore {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for MessageStore {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }
}

impl MessageStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a message to the end of the transcript.
    ///
    /// Returns the freshly allocated identifier.
    pub fn append(&mut self, draft: Draft) -> MessageId {
        let id = self.allocate_id();
        self.messages.push(Message::from_draft(id, draft));
        id
    }

    /// Clear the pending flag of a message and merge in its final content.
    ///
    /// Returns `false` without touching anything if the id is unknown.
    pub fn finalize(&mut self, id: MessageId, content: MessageContent) -> bool {
        match self.get_mut(id) {
            Some(message) => {
                message.resolve(content);
                trace!(message = %id, "finalized message");
                true
            }
            None => {
                trace!(message = %id, "finalize target missing");
                false
            }
        }
    }

    /// Get a message by id.
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.position(id).map(|i| &self.messages[i])
    }

    fn get_mut(&mut self, id: MessageId) -> Option<&mut Message> {
        let index = self.position(id)?;
        self.messages.get_mut(index)
    }

    /// Position of a message in the transcript.
    fn position(&self, id: MessageId) -> Option<usize> {
        // Ids are pushed in increasing order.
        self.messages.binary_search_by_key(&id, |m| m.id).ok()
    }

    /// All messages in transcript order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Remove every message. The id counter keeps counting.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::Sender;

    #[test]
    fn test_append_allocates_increasing_ids() {
        let mut store = MessageStore::new();

        let a = store.append(Draft::user("one"));
        let b = store.append(Draft::placeholder());
        let c = store.append(Draft::user("two"));

        assert!(a < b && b < c);
        assert_eq!(store.messages().len(), 3);
        assert_eq!(store.messages()[1].sender, Sender::Bot);
    }

    #[test]
    fn test_finalize_keeps_id_and_position() {
        let mut store = MessageStore::new();
        store.append(Draft::user("🔍 Поиск по базе знаний"));
        let placeholder = store.append(Draft::placeholder());
        store.append(Draft::user("later"));

        assert!(store.finalize(placeholder, MessageContent::text("Введите ключевое слово")));

        let message = store.get(placeholder).unwrap();
        assert!(!message.pending);
        assert_eq!(message.text.as_deref(), Some("Введите ключевое слово"));
        assert_eq!(store.position(placeholder), Some(1));
        assert_eq!(store.messages().len(), 3);
    }

    #[test]
    fn test_finalize_unknown_id_is_noop() {
        let mut store = MessageStore::new();
        store.append(Draft::user("hello"));
        let before = store.messages().to_vec();

        assert!(!store.finalize(MessageId(99), MessageContent::text("ghost")));
        assert_eq!(store.messages(), before.as_slice());
    }

    #[test]
    fn test_finalize_one_of_two_placeholders() {
        let mut store = MessageStore::new();
        let first = store.append(Draft::placeholder());
        let second = store.append(Draft::placeholder());
        store.finalize(first, MessageContent::text("done"));

        let pending: Vec<_> = store
            .messages()
            .iter()
            .filter(|m| m.pending)
            .map(|m| m.id)
            .collect();
        assert_eq!(pending, vec![second]);
    }

    #[test]
    fn test_serialized_ids_follow_transcript_order() {
        let mut store = MessageStore::new();
        store.append(Draft::user("a"));
        store.append(Draft::placeholder());

        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["messages"][0]["id"], 1);
        assert_eq!(json["messages"][1]["id"], 2);
        assert_eq!(json["next_id"], 3);
    }

    #[test]
    fn test_clear_does_not_reuse_ids() {
        let mut store = MessageStore::new();
        let before = store.append(Draft::user("a"));
        store.clear();
        assert!(store.messages().is_empty());

        let after = store.append(Draft::user("b"));
        assert!(after > before);
    }
}
