//! Plain terminal rendering of a transcript.

use std::collections::HashSet;

use chat_core::{
    Card, ConversationSession, Message, MessageId, Sender, BOT_AVATAR, BOT_NAME, BUTTONS_HINT,
    SEARCH_INPUT_HINT,
};
use colored::{ColoredString, Colorize};
use earth_corpus::{emphasis_spans, Button};

/// Prints each message once, and each placeholder once while it is pending.
#[derive(Default)]
pub struct TranscriptPrinter {
    announced: HashSet<MessageId>,
    printed: HashSet<MessageId>,
}

impl TranscriptPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print whatever changed since the last call. Returns true if anything was printed.
    pub fn render(&mut self, session: &ConversationSession) -> bool {
        let mut changed = false;

        for message in session.messages() {
            if message.pending {
                if self.announced.insert(message.id) {
                    println!("{}", format!("{} {} печатает…", BOT_AVATAR, BOT_NAME).dimmed());
                    changed = true;
                }
            } else if self.printed.insert(message.id) {
                print_message(message);
                changed = true;
            }
        }

        if changed && session.pending_replies() == 0 {
            print_buttons(&active_buttons(session));
            print_hint(session.search_mode());
        }
        changed
    }

    /// Forget everything printed, e.g. after a reset.
    pub fn clear(&mut self) {
        self.announced.clear();
        self.printed.clear();
    }
}

/// Buttons of the most recent settled bot message that has any, flattened.
pub fn active_buttons(session: &ConversationSession) -> Vec<Button> {
    session
        .messages()
        .iter()
        .rev()
        .find(|m| m.is_bot() && !m.pending && !m.buttons.is_empty())
        .map(|m| m.buttons.iter().flatten().cloned().collect())
        .unwrap_or_default()
}

fn print_message(message: &Message) {
    match message.sender {
        Sender::User => {
            let text = message.text.as_deref().unwrap_or_default();
            println!("{} {}", "›".bright_blue(), text.bright_blue());
        }
        Sender::Bot => {
            if let Some(card) = &message.card {
                print_card(card);
            }
            if let Some(text) = &message.text {
                println!("{} {}", BOT_AVATAR, emphasized(text));
            }
        }
    }
    println!();
}

fn print_card(card: &Card) {
    let bar = match parse_hex_color(&card.color) {
        Some((r, g, b)) => "┃".truecolor(r, g, b),
        None => "┃".normal(),
    };
    println!("{} {} {}", BOT_AVATAR, bar, card.title.bold());
    if let Some(subtitle) = &card.subtitle {
        println!("   {} {}", bar, subtitle.dimmed());
    }
    for fact in &card.facts {
        println!("   {} · {}", bar, emphasized(fact));
    }
}

fn print_buttons(buttons: &[Button]) {
    for (i, button) in buttons.iter().enumerate() {
        println!("  [{}] {}", i + 1, button.display_label());
    }
}

fn print_hint(search_mode: bool) {
    let hint = if search_mode {
        format!("{} (#N - кнопка)", SEARCH_INPUT_HINT)
    } else {
        BUTTONS_HINT.to_string()
    };
    println!("{}", hint.dimmed());
}

/// Text with `**emphasis**` runs highlighted.
fn emphasized(text: &str) -> String {
    emphasis_spans(text)
        .into_iter()
        .map(|span| -> ColoredString {
            if span.emphasized {
                span.text.bold().bright_cyan()
            } else {
                span.text.normal()
            }
        })
        .map(|s| s.to_string())
        .collect()
}

/// Parse `#rrggbb` into its channels.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chat_core::{KioskConfig, SEARCH_MODE_ACTION};
    use earth_corpus::FactCorpus;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#4ade80"), Some((0x4a, 0xde, 0x80)));
        assert_eq!(parse_hex_color("4ade80"), None);
        assert_eq!(parse_hex_color("#4ade8"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
    }

    #[test]
    fn test_active_buttons_follow_latest_reply() {
        let mut session =
            ConversationSession::new(Arc::new(FactCorpus::builtin()), KioskConfig::default());
        assert!(active_buttons(&session).is_empty());

        session.tick(Duration::from_millis(400));
        assert_eq!(active_buttons(&session).len(), 7);

        session.press(SEARCH_MODE_ACTION, "");
        // The prompt is pending and carries no buttons, the menu stays active.
        assert_eq!(active_buttons(&session).len(), 7);

        session.press("section_geology", "Геология");
        session.tick(Duration::from_millis(900));
        let buttons = active_buttons(&session);
        assert_eq!(buttons.len(), 5);
        assert_eq!(buttons[4].action, "back_main");
    }
}
