//! Reply queue - delayed deliveries driven by an external clock.

use std::time::Duration;

use crate::transcript::{Draft, MessageContent, MessageId};

/// What happens when a scheduled reply comes due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Fill a placeholder with its final content.
    Finalize { id: MessageId, content: MessageContent },

    /// Append a complete message (used for the welcome, which has no placeholder).
    Append(Draft),

    /// Switch free-text input on or off.
    SearchMode(bool),
}

#[derive(Debug, Clone)]
struct Scheduled {
    due: Duration,
    seq: u64,
    delivery: Delivery,
}

/// Pending deliveries ordered by due time.
///
/// The queue keeps its own virtual clock. The host advances it with
/// [`ReplyQueue::advance`]; deliveries due at or before the new time are
/// released in due order, ties broken by scheduling order.
#[derive(Debug, Clone, Default)]
pub struct ReplyQueue {
    now: Duration,
    next_seq: u64,
    entries: Vec<Scheduled>,
}

impl ReplyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a delivery `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, delivery: Delivery) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Scheduled {
            due: self.now + delay,
            seq,
            delivery,
        });
    }

    /// Move the clock forward and take every delivery that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Delivery> {
        self.now += elapsed;
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|s| s.due <= now);
        self.entries = waiting;

        due.sort_by_key(|s| (s.due, s.seq));
        due.into_iter().map(|s| s.delivery).collect()
    }

    /// Time until the next delivery comes due.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.entries
            .iter()
            .map(|s| s.due.saturating_sub(self.now))
            .min()
    }

    /// Drop pending deliveries that fail the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&Delivery) -> bool) {
        self.entries.retain(|s| keep(&s.delivery));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending delivery.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
