//! Search - case-insensitive substring lookup over the whole corpus.
//!
//! The corpus is flattened into entries:
//! 1. Every section fact, titled with its section heading
//! 2. Every sub-fact, titled with its own title
//!
//! A query matches an entry when its lowercase form occurs in the entry's
//! lowercase title or body. Matches keep corpus order and are capped; there is
//! no ranking.

mod preview;

pub use preview::*;

use earth_corpus::FactCorpus;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::navigation::search_again_row;
use crate::transcript::MessageContent;

/// Where a search entry comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntrySource {
    SectionFact { section: String, index: usize },
    SubFact { key: String },
}

/// One searchable unit of the flattened corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub title: String,
    pub text: String,
    pub source: EntrySource,
}

impl SearchEntry {
    fn matches(&self, needle: &str) -> bool {
        self.text.to_lowercase().contains(needle) || self.title.to_lowercase().contains(needle)
    }
}

/// Flatten a corpus into search entries in declaration order.
pub fn flatten(corpus: &FactCorpus) -> Vec<SearchEntry> {
    let facts = corpus.sections().iter().flat_map(|section| {
        let heading = section.heading();
        section
            .facts
            .iter()
            .enumerate()
            .map(move |(index, fact)| SearchEntry {
                title: heading.clone(),
                text: fact.clone(),
                source: EntrySource::SectionFact {
                    section: section.key.clone(),
                    index,
                },
            })
    });

    let subs = corpus.sub_facts().iter().map(|sub| SearchEntry {
        title: sub.title.clone(),
        text: sub.text.clone(),
        source: EntrySource::SubFact {
            key: sub.key.clone(),
        },
    });

    facts.chain(subs).collect()
}

/// Search a corpus directly, flattening it for this one query.
///
/// Returns nothing for an empty or whitespace-only query.
pub fn search_corpus(corpus: &FactCorpus, query: &str, limit: usize) -> Vec<SearchEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    flatten(corpus)
        .into_iter()
        .filter(|entry| entry.matches(&needle))
        .take(limit)
        .collect()
}

/// A flattened corpus built once and shared read-only.
///
/// Lowercase forms are computed up front so a query only lowercases itself.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
    folded: Vec<(String, String)>,
}

impl SearchIndex {
    pub fn build(corpus: &FactCorpus) -> Self {
        let entries = flatten(corpus);
        let folded = entries
            .iter()
            .map(|e| (e.title.to_lowercase(), e.text.to_lowercase()))
            .collect();
        Self { entries, folded }
    }

    /// Entries whose title or body contains the query, at most `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&SearchEntry> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .zip(&self.folded)
            .filter(|(_, (title, text))| text.contains(&needle) || title.contains(&needle))
            .map(|(entry, _)| entry)
            .take(limit)
            .collect()
    }
}

/// A listed search match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub preview: String,
    pub source: EntrySource,
}

/// The outcome of one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The trimmed query.
    pub query: String,
    pub hits: Vec<SearchHit>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Text echoed as the user's utterance.
    pub fn echo(&self) -> String {
        format!("🔍 \"{}\"", self.query)
    }

    /// Bot reply: either the "nothing found" notice or the numbered list.
    pub fn reply(&self) -> MessageContent {
        let text = if self.hits.is_empty() {
            format!(
                "По запросу «{}» ничего не найдено.\n\nПопробуйте другое слово.",
                self.query
            )
        } else {
            let lines: Vec<String> = self
                .hits
                .iter()
                .enumerate()
                .map(|(i, hit)| format!("{}. **{}**\n   {}", i + 1, hit.title, hit.preview))
                .collect();
            format!(
                "Найдено результатов: **{}**\n\n{}",
                self.hits.len(),
                lines.join("\n\n")
            )
        };

        MessageContent::text(text).with_button_row(search_again_row())
    }
}

/// Runs queries against an index with the configured limits.
pub struct SearchEngine<'a> {
    index: &'a SearchIndex,
    max_results: usize,
    preview_chars: usize,
}

impl<'a> SearchEngine<'a> {
    pub fn new(index: &'a SearchIndex, max_results: usize, preview_chars: usize) -> Self {
        Self {
            index,
            max_results,
            preview_chars,
        }
    }

    /// Run a query. Returns `None` when the trimmed query is empty.
    pub fn search(&self, query: &str) -> Option<SearchResult> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let hits: Vec<SearchHit> = self
            .index
            .search(query, self.max_results)
            .into_iter()
            .map(|entry| SearchHit {
                title: entry.title.clone(),
                preview: preview(&entry.text, self.preview_chars),
                source: entry.source.clone(),
            })
            .collect();

        debug!(query, hits = hits.len(), "search finished");

        Some(SearchResult {
            query: query.to_string(),
            hits,
        })
    }
}
