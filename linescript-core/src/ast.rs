//! Data model produced by the paragraph parser.
//!
//! A [`Script`] is an ordered list of [`DialogueEntry`] blocks, each holding one or
//! more [`LineItem`]s. Everything here is immutable once the parser hands it over.

use rustc_hash::FxHashSet;

/// One playable unit of dialogue.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LineItem {
    text: String,
    resource_id: String,
}

impl LineItem {
    pub fn new(text: impl Into<String>, resource_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            resource_id: resource_id.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Voice identifier, without directory or extension.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }
}

/// A contiguous block spoken by one speaker. Never empty.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DialogueEntry {
    speaker: String,
    items: Vec<LineItem>,
}

impl DialogueEntry {
    /// Entries only exist together with their first item.
    pub(crate) fn new(speaker: impl Into<String>, first: LineItem) -> Self {
        let speaker = speaker.into();
        debug_assert!(!speaker.is_empty(), "speaker must not be empty");
        Self {
            speaker,
            items: vec![first],
        }
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn push(&mut self, item: LineItem) {
        self.items.push(item);
    }
}

/// The root node of every parsed document.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Script {
    entries: Vec<DialogueEntry>,
}

impl Script {
    pub fn new(entries: Vec<DialogueEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DialogueEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&DialogueEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of playable lines across all entries.
    pub fn item_count(&self) -> usize {
        self.entries.iter().map(DialogueEntry::len).sum()
    }

    /// Distinct speakers in first-occurrence order.
    pub fn speakers(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.entries
            .iter()
            .map(DialogueEntry::speaker)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut DialogueEntry> {
        self.entries.last_mut()
    }

    pub(crate) fn push(&mut self, entry: DialogueEntry) {
        self.entries.push(entry);
    }
}
