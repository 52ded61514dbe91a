//! Conversation session - one transcript, its search mode and its queued replies.
//!
//! Every reply goes through the same steps:
//! 1. **Echo**: the user's utterance is appended
//! 2. **Placeholder**: a pending bot message is appended right away
//! 3. **Schedule**: the final content is queued with a typing delay
//! 4. **Deliver**: on [`ConversationSession::tick`] the placeholder is finalized in place

mod schedule;

pub use schedule::*;

use earth_corpus::FactCorpus;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};
use uuid::Uuid;

use crate::config::KioskConfig;
use crate::events::UserEvent;
use crate::navigation::{Navigator, ReplyKind};
use crate::search::{SearchEngine, SearchIndex};
use crate::transcript::{Draft, Message, MessageContent, MessageId, MessageStore};

/// Unique identifier for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a renderer needs to draw the conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSnapshot {
    pub session_id: SessionId,
    /// Whether free-text input is shown.
    pub search_mode: bool,
    pub messages: Vec<Message>,
}

impl TranscriptSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// A single conversation with the kiosk.
pub struct ConversationSession {
    id: SessionId,
    corpus: Arc<FactCorpus>,
    index: Arc<SearchIndex>,
    config: KioskConfig,
    store: MessageStore,
    search_mode: bool,
    queue: ReplyQueue,
}

impl ConversationSession {
    /// Start a session. The welcome message is queued behind its delay.
    pub fn new(corpus: Arc<FactCorpus>, config: KioskConfig) -> Self {
        let index = Arc::new(SearchIndex::build(&corpus));
        Self::with_index(corpus, index, config)
    }

    /// Start a session sharing a prebuilt search index.
    pub fn with_index(corpus: Arc<FactCorpus>, index: Arc<SearchIndex>, config: KioskConfig) -> Self {
        let mut session = Self {
            id: SessionId::new(),
            corpus,
            index,
            config,
            store: MessageStore::new(),
            search_mode: false,
            queue: ReplyQueue::new(),
        };
        session.schedule_welcome();
        debug!(session = %session.id, "session started");
        session
    }

    fn schedule_welcome(&mut self) {
        let welcome = Navigator::new(&self.corpus).welcome();
        self.queue.schedule(
            self.config.delays.for_kind(ReplyKind::Welcome),
            Delivery::Append(Draft::bot(welcome)),
        );
    }

    /// Dispatch a user event. Returns the placeholder id if a reply was started.
    pub fn handle(&mut self, event: UserEvent) -> Option<MessageId> {
        match event {
            UserEvent::ButtonPressed { action, label } => self.press(&action, &label),
            UserEvent::QuerySubmitted { text } => self.submit(&text),
        }
    }

    /// React to a button. Unknown actions change nothing.
    ///
    /// Search mode opens together with its prompt and closes right away.
    pub fn press(&mut self, action: &str, label: &str) -> Option<MessageId> {
        let result = Navigator::new(&self.corpus).resolve(action, label)?;
        debug!(session = %self.id, action, kind = ?result.kind, "button resolved");

        let kind = result.kind;
        let id = self.start_reply(result.echo, kind, result.reply);

        match result.search_mode {
            Some(true) => self
                .queue
                .schedule(self.config.delays.for_kind(kind), Delivery::SearchMode(true)),
            Some(false) => {
                self.search_mode = false;
                self.queue.retain(|d| !matches!(d, Delivery::SearchMode(_)));
            }
            None => {}
        }
        Some(id)
    }

    /// React to free text. Ignored outside search mode or when blank.
    pub fn submit(&mut self, text: &str) -> Option<MessageId> {
        if !self.search_mode {
            trace!(session = %self.id, "free text ignored outside search mode");
            return None;
        }

        let engine = SearchEngine::new(
            &self.index,
            self.config.max_results,
            self.config.preview_chars,
        );
        let result = engine.search(text)?;

        Some(self.start_reply(result.echo(), ReplyKind::SearchResults, result.reply()))
    }

    fn start_reply(&mut self, echo: String, kind: ReplyKind, content: MessageContent) -> MessageId {
        self.store.append(Draft::user(echo));
        let id = self.store.append(Draft::placeholder());
        self.queue.schedule(
            self.config.delays.for_kind(kind),
            Delivery::Finalize { id, content },
        );
        id
    }

    /// Advance the session clock and deliver every reply that came due.
    ///
    /// Returns the number of deliveries applied.
    pub fn tick(&mut self, elapsed: Duration) -> usize {
        let due = self.queue.advance(elapsed);
        let count = due.len();
        for delivery in due {
            self.deliver(delivery);
        }
        count
    }

    fn deliver(&mut self, delivery: Delivery) {
        match delivery {
            Delivery::Finalize { id, content } => {
                self.store.finalize(id, content);
            }
            Delivery::Append(draft) => {
                let id = self.store.append(draft);
                trace!(session = %self.id, message = %id, "appended scheduled message");
            }
            Delivery::SearchMode(mode) => {
                self.search_mode = mode;
                trace!(session = %self.id, search_mode = mode, "search mode switched");
            }
        }
    }

    /// Return to the initial state: empty transcript, no search mode, welcome queued.
    pub fn reset(&mut self) {
        self.store.clear();
        self.queue.clear();
        self.search_mode = false;
        self.schedule_welcome();
        debug!(session = %self.id, "session reset");
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn messages(&self) -> &[Message] {
        self.store.messages()
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.store.get(id)
    }

    pub fn search_mode(&self) -> bool {
        self.search_mode
    }

    pub fn corpus(&self) -> &FactCorpus {
        &self.corpus
    }

    pub fn config(&self) -> &KioskConfig {
        &self.config
    }

    /// Number of replies still waiting to be delivered.
    pub fn pending_replies(&self) -> usize {
        self.queue.len()
    }

    /// Time until the next reply is due.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.queue.next_due_in()
    }

    pub fn snapshot(&self) -> TranscriptSnapshot {
        TranscriptSnapshot {
            session_id: self.id,
            search_mode: self.search_mode,
            messages: self.store.messages().to_vec(),
        }
    }
}
