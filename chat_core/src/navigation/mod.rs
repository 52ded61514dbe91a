//! Navigation - turns a button action into the next bot reply.
//!
//! Actions are matched in a fixed order:
//! 1. `search_mode` enters search mode
//! 2. `back_main` leaves search mode and shows the main menu
//! 3. `section_<key>` opens a section card
//! 4. A sub-fact key opens that sub-fact
//!
//! Anything else resolves to nothing. Unknown buttons are ignored rather than
//! reported, so older or mistyped actions degrade to silence.

mod replies;

pub use replies::*;

use earth_corpus::{FactCorpus, FactSection, SubFact, SECTION_ACTION_PREFIX};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::transcript::{Card, MessageContent};

/// Which kind of reply is being produced. Selects the typing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Welcome,
    SearchPrompt,
    MainMenu,
    Section,
    SubFact,
    SearchResults,
}

/// What an action refers to.
#[derive(Debug, Clone, Copy)]
pub enum Intent<'c> {
    EnterSearch,
    BackToMenu,
    OpenSection(&'c FactSection),
    OpenSubFact(&'c SubFact),
    /// A `section_` action whose key is not in the corpus.
    MissingSection,
    Unrecognized,
}

/// The outcome of resolving an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationResult {
    /// Text echoed as the user's utterance.
    pub echo: String,

    /// Final content of the bot reply.
    pub reply: MessageContent,

    pub kind: ReplyKind,

    /// New search mode, if the action changes it.
    pub search_mode: Option<bool>,
}

/// Resolves actions against a corpus.
pub struct Navigator<'c> {
    corpus: &'c FactCorpus,
}

impl<'c> Navigator<'c> {
    pub fn new(corpus: &'c FactCorpus) -> Self {
        Self { corpus }
    }

    /// Classify an action identifier.
    pub fn classify(&self, action: &str) -> Intent<'c> {
        if action == SEARCH_MODE_ACTION {
            return Intent::EnterSearch;
        }
        if action == BACK_MAIN_ACTION {
            return Intent::BackToMenu;
        }
        if let Some(key) = action.strip_prefix(SECTION_ACTION_PREFIX) {
            return match self.corpus.section(key) {
                Some(section) => Intent::OpenSection(section),
                None => Intent::MissingSection,
            };
        }
        match self.corpus.sub_fact(action) {
            Some(sub) => Intent::OpenSubFact(sub),
            None => Intent::Unrecognized,
        }
    }

    /// Resolve a pressed button into a reply.
    ///
    /// `label` is only used as the echo of sub-fact buttons; the other
    /// replies echo a fixed phrase or the section heading. Returns `None`
    /// when the action refers to nothing.
    pub fn resolve(&self, action: &str, label: &str) -> Option<NavigationResult> {
        match self.classify(action) {
            Intent::EnterSearch => Some(NavigationResult {
                echo: SEARCH_LABEL.to_string(),
                reply: MessageContent::text(SEARCH_PROMPT_TEXT),
                kind: ReplyKind::SearchPrompt,
                search_mode: Some(true),
            }),
            Intent::BackToMenu => Some(NavigationResult {
                echo: MENU_LABEL.to_string(),
                reply: self.main_menu(),
                kind: ReplyKind::MainMenu,
                search_mode: Some(false),
            }),
            Intent::OpenSection(section) => Some(NavigationResult {
                echo: section.heading(),
                reply: section_reply(section),
                kind: ReplyKind::Section,
                search_mode: None,
            }),
            Intent::OpenSubFact(sub) => Some(NavigationResult {
                echo: label.to_string(),
                reply: MessageContent::text(sub.text.as_str())
                    .with_button_row(globe_menu_row()),
                kind: ReplyKind::SubFact,
                search_mode: None,
            }),
            Intent::MissingSection => {
                debug!(action, "ignoring action for unknown section");
                None
            }
            Intent::Unrecognized => {
                debug!(action, "ignoring unrecognized action");
                None
            }
        }
    }

    /// The first message of a session.
    pub fn welcome(&self) -> MessageContent {
        MessageContent::text(WELCOME_TEXT).with_buttons(welcome_buttons(self.corpus))
    }

    /// The main menu shown after `back_main`.
    pub fn main_menu(&self) -> MessageContent {
        MessageContent::text(MENU_TEXT).with_buttons(welcome_buttons(self.corpus))
    }
}

/// Card for a section, with its sub-topic rows and a trailing menu row.
fn section_reply(section: &FactSection) -> MessageContent {
    let card = Card {
        title: section.heading(),
        subtitle: Some(CARD_SUBTITLE.to_string()),
        facts: section.facts.clone(),
        color: section.color.clone(),
    };

    let mut buttons = section.sub_buttons.clone();
    buttons.push(menu_row());

    MessageContent::card(card).with_buttons(buttons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_precedence() {
        let corpus = FactCorpus::builtin();
        let nav = Navigator::new(&corpus);

        assert!(matches!(nav.classify("search_mode"), Intent::EnterSearch));
        assert!(matches!(nav.classify("back_main"), Intent::BackToMenu));
        assert!(matches!(nav.classify("section_geology"), Intent::OpenSection(s) if s.key == "geology"));
        assert!(matches!(nav.classify("section_moon"), Intent::MissingSection));
        assert!(matches!(nav.classify("geo_quakes"), Intent::OpenSubFact(s) if s.key == "geo_quakes"));
        assert!(matches!(nav.classify("geology"), Intent::Unrecognized));
        assert!(matches!(nav.classify(""), Intent::Unrecognized));
    }

    #[test]
    fn test_every_section_card_matches_corpus() {
        let corpus = FactCorpus::builtin();
        let nav = Navigator::new(&corpus);

        for section in corpus.sections() {
            let result = nav.resolve(&section.action(), "ignored").unwrap();
            let card = result.reply.card.as_ref().unwrap();

            assert_eq!(result.kind, ReplyKind::Section);
            assert_eq!(result.echo, section.heading());
            assert_eq!(card.facts, section.facts);
            assert_eq!(card.color, section.color);
            assert_eq!(card.subtitle.as_deref(), Some(CARD_SUBTITLE));
            assert!(result.reply.text.is_none());

            let last = result.reply.buttons.last().unwrap();
            assert_eq!(last.len(), 1);
            assert_eq!(last[0].action, BACK_MAIN_ACTION);
            assert_eq!(result.reply.buttons.len(), section.sub_buttons.len() + 1);
        }
    }

    #[test]
    fn test_every_sub_fact_reply_matches_corpus() {
        let corpus = FactCorpus::builtin();
        let nav = Navigator::new(&corpus);

        for sub in corpus.sub_facts() {
            let result = nav.resolve(&sub.key, "Метка").unwrap();

            assert_eq!(result.kind, ReplyKind::SubFact);
            assert_eq!(result.echo, "Метка");
            assert_eq!(result.reply.text.as_deref(), Some(sub.text.as_str()));
            assert!(result.reply.card.is_none());
            assert_eq!(result.reply.buttons.len(), 1);
            assert_eq!(result.reply.buttons[0].len(), 1);
            assert_eq!(result.reply.buttons[0][0].action, BACK_MAIN_ACTION);
        }
    }

    #[test]
    fn test_control_actions() {
        let corpus = FactCorpus::builtin();
        let nav = Navigator::new(&corpus);

        let search = nav.resolve(SEARCH_MODE_ACTION, "whatever").unwrap();
        assert_eq!(search.echo, SEARCH_LABEL);
        assert_eq!(search.search_mode, Some(true));
        assert!(search.reply.buttons.is_empty());

        let back = nav.resolve(BACK_MAIN_ACTION, "whatever").unwrap();
        assert_eq!(back.echo, MENU_LABEL);
        assert_eq!(back.search_mode, Some(false));
        assert_eq!(back.reply.text.as_deref(), Some(MENU_TEXT));
        assert_eq!(back.reply.buttons, welcome_buttons(&corpus));
    }

    #[test]
    fn test_unknown_actions_resolve_to_nothing() {
        let corpus = FactCorpus::builtin();
        let nav = Navigator::new(&corpus);

        assert!(nav.resolve("section_moon", "Луна").is_none());
        assert!(nav.resolve("bio_fungi", "Грибы").is_none());
        assert!(nav.resolve("SEARCH_MODE", "").is_none());
    }

    #[test]
    fn test_welcome_content() {
        let corpus = FactCorpus::builtin();
        let welcome = Navigator::new(&corpus).welcome();
        assert!(welcome.text.as_deref().unwrap().contains(BOT_NAME));
        assert_eq!(welcome.buttons.len(), 3);
    }
}
